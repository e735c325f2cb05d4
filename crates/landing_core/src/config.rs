//! Application configuration.
//!
//! Loaded once at startup from an optional TOML file and never mutated
//! afterwards. Every section falls back to the built-in defaults, so a file
//! only needs the keys it overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, de};

use crate::download::{FileFilter, SaveRequest};
use crate::error::ConfigError;
use crate::viewport::Viewport;

/// Config file location relative to the program directory.
pub const CONFIG_PATH: &str = "assets/config/landing.config.toml";

/// Shared default for the window title and the headline.
pub const DEFAULT_TITLE: &str = "CHATAPP BENAYAS COMMUNITY CHATAPP";

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
  pub window: WindowConfig,
  pub assets: AssetConfig,
  pub content: ContentConfig,
  pub download: DownloadConfig,
  pub theme: ThemeConfig,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
  pub title: String,
  pub width: u32,
  pub height: u32,
  pub min_width: u32,
  pub min_height: u32,
}

impl Default for WindowConfig {
  fn default() -> Self {
    Self {
      title: DEFAULT_TITLE.to_string(),
      width: 800,
      height: 520,
      min_width: 640,
      min_height: 420,
    }
  }
}

impl WindowConfig {
  pub fn min_viewport(&self) -> Viewport {
    Viewport::new(self.min_width, self.min_height)
  }

  /// Initial window size, never below the minimum.
  pub fn initial_viewport(&self) -> Viewport {
    Viewport::new(self.width, self.height).clamped(self.min_viewport())
  }
}

/// Bundled asset paths. Relative paths resolve against the program
/// directory.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AssetConfig {
  pub background: PathBuf,
  pub installer: PathBuf,
}

impl Default for AssetConfig {
  fn default() -> Self {
    Self {
      background: PathBuf::from("beni1.jpg"),
      installer: PathBuf::from("ChatAppSetup.exe"),
    }
  }
}

impl AssetConfig {
  pub fn background_path(&self, base_dir: &Path) -> PathBuf {
    base_dir.join(&self.background)
  }

  pub fn installer_path(&self, base_dir: &Path) -> PathBuf {
    base_dir.join(&self.installer)
  }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ContentConfig {
  pub title: String,
  pub description: String,
  pub button_label: String,
  pub footer: String,
}

impl Default for ContentConfig {
  fn default() -> Self {
    Self {
      title: DEFAULT_TITLE.to_string(),
      description: "Connect with your friends and community instantly. Download the ChatApp \
                    setup for Windows and start chatting today!"
        .to_string(),
      button_label: "Download Setup".to_string(),
      footer: "\u{00A9} 2025 BENAYAS LEULSEGED. All Rights Reserved.".to_string(),
    }
  }
}

/// Save dialog settings.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DownloadConfig {
  pub dialog_title: String,
  pub file_name: String,
  pub default_extension: String,
  pub filters: Vec<FileFilter>,
}

impl Default for DownloadConfig {
  fn default() -> Self {
    Self {
      dialog_title: "Save ChatApp Setup As".to_string(),
      file_name: "ChatAppSetup.exe".to_string(),
      default_extension: "exe".to_string(),
      filters: vec![
        FileFilter::new("Windows Executable", &["exe"]),
        FileFilter::new("All Files", &["*"]),
      ],
    }
  }
}

impl DownloadConfig {
  pub fn save_request(&self) -> SaveRequest {
    SaveRequest {
      title: self.dialog_title.clone(),
      file_name: self.file_name.clone(),
      default_extension: self.default_extension.clone(),
      filters: self.filters.clone(),
    }
  }
}

/// Colors as sRGB bytes, text sizes in logical pixels.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
  #[serde(deserialize_with = "deserialize_hex_color")]
  pub fallback_color: [u8; 3],
  #[serde(deserialize_with = "deserialize_hex_color")]
  pub text_color: [u8; 3],
  #[serde(deserialize_with = "deserialize_hex_color")]
  pub footer_color: [u8; 3],
  pub title_size: f32,
  pub description_size: f32,
  pub button_size: f32,
  pub footer_size: f32,
}

impl Default for ThemeConfig {
  fn default() -> Self {
    Self {
      fallback_color: [0x2b, 0x2b, 0x2b],
      text_color: [0xff, 0xff, 0xff],
      footer_color: [0xf0, 0xf0, 0xf0],
      title_size: 29.0,
      description_size: 16.0,
      button_size: 16.0,
      footer_size: 12.0,
    }
  }
}

fn deserialize_hex_color<'de, D>(deserializer: D) -> Result<[u8; 3], D::Error>
where
  D: Deserializer<'de>,
{
  let s: String = Deserialize::deserialize(deserializer)?;
  let s = s.trim_start_matches('#');
  if s.len() != 6 || !s.is_ascii() {
    return Err(de::Error::custom("hex color must be 6 characters"));
  }
  let r = u8::from_str_radix(&s[0..2], 16).map_err(de::Error::custom)?;
  let g = u8::from_str_radix(&s[2..4], 16).map_err(de::Error::custom)?;
  let b = u8::from_str_radix(&s[4..6], 16).map_err(de::Error::custom)?;
  Ok([r, g, b])
}

impl AppConfig {
  pub fn from_toml_str(s: &str, path: &Path) -> Result<Self, ConfigError> {
    toml::from_str(s).map_err(|source| ConfigError::Parse {
      path: path.to_path_buf(),
      source,
    })
  }

  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
      path: path.to_path_buf(),
      source,
    })?;
    Self::from_toml_str(&s, path)
  }
}
