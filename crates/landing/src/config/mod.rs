mod plugin;

use std::path::{Path, PathBuf};

use bevy::prelude::*;
use landing_core::config::CONFIG_PATH;
use landing_core::AppConfig;
pub use plugin::ConfigPlugin;

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
  File(PathBuf),
  /// No config file beside the program.
  Defaults,
  /// The config file exists but could not be read or parsed.
  Invalid(String),
}

/// Immutable application configuration plus the directory that bundled
/// assets resolve against.
#[derive(Resource, Debug, Clone)]
pub struct ConfigLoaded {
  pub app: AppConfig,
  pub base_dir: PathBuf,
  pub origin: ConfigOrigin,
}

impl ConfigLoaded {
  /// Loads the config file beside the running executable.
  pub fn load() -> Self {
    Self::load_from(program_dir())
  }

  pub fn load_from(base_dir: PathBuf) -> Self {
    let path = base_dir.join(CONFIG_PATH);
    let (app, origin) = match AppConfig::load(&path) {
      Ok(app) => (app, ConfigOrigin::File(path)),
      Err(e) if e.is_not_found() => (AppConfig::default(), ConfigOrigin::Defaults),
      Err(e) => (AppConfig::default(), ConfigOrigin::Invalid(e.to_string())),
    };
    Self {
      app,
      base_dir,
      origin,
    }
  }

  /// Default configuration rooted at `base_dir`.
  pub fn with_defaults(base_dir: PathBuf) -> Self {
    Self {
      app: AppConfig::default(),
      base_dir,
      origin: ConfigOrigin::Defaults,
    }
  }

  pub fn background_path(&self) -> PathBuf {
    self.app.assets.background_path(&self.base_dir)
  }

  pub fn installer_path(&self) -> PathBuf {
    self.app.assets.installer_path(&self.base_dir)
  }

  pub fn fallback_color(&self) -> Color {
    srgb(self.app.theme.fallback_color)
  }
}

pub fn srgb([r, g, b]: [u8; 3]) -> Color {
  Color::srgb_u8(r, g, b)
}

fn program_dir() -> PathBuf {
  std::env::current_exe()
    .ok()
    .and_then(|exe| exe.parent().map(Path::to_path_buf))
    .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn shipped_config_matches_defaults() {
    let shipped = include_str!("../../assets/config/landing.config.toml");
    let parsed = AppConfig::from_toml_str(shipped, Path::new(CONFIG_PATH)).unwrap();
    assert_eq!(parsed, AppConfig::default());
  }

  #[test]
  fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let loaded = ConfigLoaded::load_from(dir.path().to_path_buf());
    assert_eq!(loaded.origin, ConfigOrigin::Defaults);
    assert_eq!(loaded.app, AppConfig::default());
  }

  #[test]
  fn malformed_file_falls_back_to_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_PATH);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "[window\nwidth = ").unwrap();

    let loaded = ConfigLoaded::load_from(dir.path().to_path_buf());
    assert!(matches!(loaded.origin, ConfigOrigin::Invalid(_)));
    assert_eq!(loaded.app, AppConfig::default());
  }

  #[test]
  fn file_overrides_are_applied() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_PATH);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "[assets]\ninstaller = \"bin/Setup.exe\"\n").unwrap();

    let loaded = ConfigLoaded::load_from(dir.path().to_path_buf());
    assert_eq!(loaded.origin, ConfigOrigin::File(path));
    assert_eq!(loaded.installer_path(), dir.path().join("bin/Setup.exe"));
  }
}
