use bevy::prelude::*;

use super::{ConfigLoaded, ConfigOrigin};

/// Installs the configuration loaded before the app was built.
///
/// The window settings are needed by `WindowPlugin`, so loading happens in
/// `main`; this plugin only publishes the result and reports where it came
/// from once logging is up.
pub struct ConfigPlugin {
  config: ConfigLoaded,
}

impl ConfigPlugin {
  pub fn new(config: ConfigLoaded) -> Self {
    Self { config }
  }
}

impl Plugin for ConfigPlugin {
  fn build(&self, app: &mut App) {
    app
      .insert_resource(self.config.clone())
      .add_systems(PreStartup, report_config_origin);
  }
}

fn report_config_origin(config: Res<ConfigLoaded>) {
  match &config.origin {
    ConfigOrigin::File(path) => info!("Config loaded from {}", path.display()),
    ConfigOrigin::Defaults => info!(
      "No config file in {}, using defaults",
      config.base_dir.display()
    ),
    ConfigOrigin::Invalid(reason) => error!("{reason}; using defaults"),
  }
}
