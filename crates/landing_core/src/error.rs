//! Error types surfaced to the operator.

use std::io;
use std::path::PathBuf;

/// Which bundled asset an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
  Background,
  Installer,
}

impl std::fmt::Display for AssetKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Background => write!(f, "background image"),
      Self::Installer => write!(f, "installer"),
    }
  }
}

/// Asset and copy errors. None of them are fatal.
#[derive(Debug)]
pub enum Error {
  /// A bundled asset is not at its expected path.
  MissingAsset { kind: AssetKind, path: PathBuf },
  /// The background exists but could not be decoded.
  InvalidImage { path: PathBuf, source: image::ImageError },
  /// The background decoded to a zero-sized raster.
  EmptyImage,
  /// Copying the installer to the chosen destination failed.
  CopyFailure { destination: PathBuf, source: io::Error },
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::MissingAsset { kind, path } => write!(f, "{} not found: {}", kind, path.display()),
      Self::InvalidImage { path, source } => {
        write!(f, "cannot decode {}: {}", path.display(), source)
      }
      Self::EmptyImage => write!(f, "image has zero width or height"),
      Self::CopyFailure { destination, source } => {
        write!(f, "failed to copy to {}: {}", destination.display(), source)
      }
    }
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::InvalidImage { source, .. } => Some(source),
      Self::CopyFailure { source, .. } => Some(source),
      _ => None,
    }
  }
}

/// Configuration file errors.
#[derive(Debug)]
pub enum ConfigError {
  Read { path: PathBuf, source: io::Error },
  Parse { path: PathBuf, source: toml::de::Error },
}

impl ConfigError {
  /// Returns whether the file simply does not exist.
  pub fn is_not_found(&self) -> bool {
    matches!(self, Self::Read { source, .. } if source.kind() == io::ErrorKind::NotFound)
  }
}

impl std::fmt::Display for ConfigError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Read { path, source } => write!(f, "cannot read {}: {}", path.display(), source),
      Self::Parse { path, source } => write!(f, "cannot parse {}: {}", path.display(), source),
    }
  }
}

impl std::error::Error for ConfigError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Read { source, .. } => Some(source),
      Self::Parse { source, .. } => Some(source),
    }
  }
}
