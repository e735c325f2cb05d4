//! Installer download: locate the bundled installer, ask the operator where
//! to put it, copy it there and report the result.
//!
//! The operator side (save prompt, notifications) sits behind [`Operator`] so
//! the flow runs the same with native dialogs or a scripted test double.

use std::fs::{self, File, FileTimes};
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::AppConfig;
use crate::error::{AssetKind, Error};

/// One entry of the save dialog's file type list.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
  pub name: String,
  pub extensions: Vec<String>,
}

impl FileFilter {
  pub fn new(name: &str, extensions: &[&str]) -> Self {
    Self {
      name: name.to_string(),
      extensions: extensions.iter().map(|e| e.to_string()).collect(),
    }
  }
}

/// Parameters of the save-destination prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
  pub title: String,
  pub file_name: String,
  /// Appended when the chosen path has no extension.
  pub default_extension: String,
  pub filters: Vec<FileFilter>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
  Info,
  Warning,
  Error,
}

/// Blocking message shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
  pub level: NoticeLevel,
  pub title: String,
  pub body: String,
}

impl Notice {
  pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
    Self {
      level: NoticeLevel::Info,
      title: title.into(),
      body: body.into(),
    }
  }

  pub fn warning(title: impl Into<String>, body: impl Into<String>) -> Self {
    Self {
      level: NoticeLevel::Warning,
      title: title.into(),
      body: body.into(),
    }
  }

  pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
    Self {
      level: NoticeLevel::Error,
      title: title.into(),
      body: body.into(),
    }
  }

  /// Warning shown when the background cannot be used.
  pub fn background_unavailable(error: &Error) -> Self {
    match error {
      Error::MissingAsset { path, .. } => {
        let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        Self::warning(
          "Background not found",
          format!(
            "Background image not found:\n{}\n\nPlace {} beside this program to show the \
             background.",
            path.display(),
            name
          ),
        )
      }
      other => Self::warning("Background unavailable", format!("{other}")),
    }
  }

  fn setup_missing(path: &Path) -> Self {
    let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    Self::error(
      "Setup Missing",
      format!(
        "Could not find the setup file:\n{}\n\nMake sure {} is in the same folder as this \
         program.",
        path.display(),
        name
      ),
    )
  }

  fn copy_failed(source: &io::Error) -> Self {
    Self::error("Copy Failed", format!("Failed to copy the setup:\n{source}"))
  }

  fn download_complete(destination: &Path) -> Self {
    Self::info(
      "Download Complete",
      format!("ChatApp setup has been saved to:\n{}", destination.display()),
    )
  }
}

/// The person driving the UI.
pub trait Operator {
  /// Asks for a save destination. `None` means the prompt was cancelled.
  fn choose_destination(&mut self, request: &SaveRequest) -> Option<PathBuf>;

  /// Shows a blocking notification.
  fn notify(&mut self, notice: &Notice);
}

#[derive(Debug)]
pub enum DownloadOutcome {
  Saved { destination: PathBuf, bytes: u64 },
  Cancelled,
  Failed(Error),
}

impl DownloadOutcome {
  pub fn is_saved(&self) -> bool {
    matches!(self, Self::Saved { .. })
  }
}

/// Copies the bundled installer to an operator-chosen destination.
#[derive(Debug, Clone)]
pub struct Downloader {
  installer: PathBuf,
  request: SaveRequest,
}

impl Downloader {
  pub fn new(installer: PathBuf, request: SaveRequest) -> Self {
    Self { installer, request }
  }

  pub fn from_config(config: &AppConfig, base_dir: &Path) -> Self {
    Self::new(
      config.assets.installer_path(base_dir),
      config.download.save_request(),
    )
  }

  pub fn run(&self, operator: &mut dyn Operator) -> DownloadOutcome {
    if !self.installer.is_file() {
      log::warn!("Installer missing at {}", self.installer.display());
      operator.notify(&Notice::setup_missing(&self.installer));
      return DownloadOutcome::Failed(Error::MissingAsset {
        kind: AssetKind::Installer,
        path: self.installer.clone(),
      });
    }

    let Some(chosen) = operator.choose_destination(&self.request) else {
      log::debug!("Save prompt cancelled");
      return DownloadOutcome::Cancelled;
    };
    let destination = with_default_extension(chosen, &self.request.default_extension);

    match copy_preserving(&self.installer, &destination) {
      Ok(bytes) => {
        log::info!("Copied installer to {} ({} bytes)", destination.display(), bytes);
        operator.notify(&Notice::download_complete(&destination));
        DownloadOutcome::Saved { destination, bytes }
      }
      Err(e) => {
        log::error!("{e}");
        if let Error::CopyFailure { source, .. } = &e {
          operator.notify(&Notice::copy_failed(source));
        }
        DownloadOutcome::Failed(e)
      }
    }
  }
}

/// Appends `extension` when `path` has none.
pub fn with_default_extension(path: PathBuf, extension: &str) -> PathBuf {
  if extension.is_empty() || path.extension().is_some() {
    path
  } else {
    path.with_extension(extension)
  }
}

/// Copies `source` to `destination` byte for byte, keeping permissions and
/// access/modification times. Returns the number of bytes copied.
pub fn copy_preserving(source: &Path, destination: &Path) -> Result<u64, Error> {
  let fail = |source: io::Error| Error::CopyFailure {
    destination: destination.to_path_buf(),
    source,
  };

  if is_same_file(source, destination) {
    return Err(fail(io::Error::new(
      io::ErrorKind::InvalidInput,
      "source and destination are the same file",
    )));
  }

  let mut reader = File::open(source).map_err(fail)?;
  let metadata = reader.metadata().map_err(fail)?;
  let mut writer = File::create(destination).map_err(fail)?;
  let bytes = io::copy(&mut reader, &mut writer).map_err(fail)?;

  let mut times = FileTimes::new();
  if let Ok(modified) = metadata.modified() {
    times = times.set_modified(modified);
  }
  if let Ok(accessed) = metadata.accessed() {
    times = times.set_accessed(accessed);
  }
  // Times go through the still-writable handle, before the mode can make the
  // copy read-only.
  writer.set_times(times).map_err(fail)?;
  drop(writer);
  fs::set_permissions(destination, metadata.permissions()).map_err(fail)?;

  Ok(bytes)
}

fn is_same_file(a: &Path, b: &Path) -> bool {
  match (fs::canonicalize(a), fs::canonicalize(b)) {
    (Ok(a), Ok(b)) => a == b,
    _ => false,
  }
}
