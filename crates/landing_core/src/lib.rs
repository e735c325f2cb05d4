//! Landing Core - rendering and download logic for the ChatApp landing page.
//!
//! Everything here is windowing-agnostic: the desktop shell feeds viewport
//! sizes in and gets bitmaps, layout and download outcomes back.

pub mod config;
pub mod cover;
pub mod download;
pub mod error;
pub mod viewport;

pub use image;

pub use config::{AppConfig, AssetConfig, ContentConfig, DownloadConfig, ThemeConfig, WindowConfig};
pub use cover::{BackgroundRenderer, CoverPlan, FitAxis, SourceImage, render};
pub use download::{
  DownloadOutcome, Downloader, FileFilter, Notice, NoticeLevel, Operator, SaveRequest,
  copy_preserving,
};
pub use error::{AssetKind, ConfigError, Error};
pub use viewport::{OverlayLayout, Point, Viewport};
