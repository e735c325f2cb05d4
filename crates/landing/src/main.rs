mod background;
mod config;
mod core;
mod download;
mod operator;
mod overlay;

use bevy::{
  prelude::*,
  window::{MonitorSelection, WindowPosition, WindowResizeConstraints, WindowResolution},
};

fn main() {
  // Loaded before the app so the window can be built from it
  let config = config::ConfigLoaded::load();
  let initial = config.app.window.initial_viewport();
  let min = config.app.window.min_viewport();

  let mut app = App::new();

  app
    .add_plugins(DefaultPlugins.set(WindowPlugin {
      primary_window: Some(Window {
        title: config.app.window.title.clone(),
        resolution: WindowResolution::new(initial.width(), initial.height()),
        position: WindowPosition::Centered(MonitorSelection::Primary),
        resize_constraints: WindowResizeConstraints {
          min_width: min.width() as f32,
          min_height: min.height() as f32,
          ..default()
        },
        ..default()
      }),
      ..default()
    }))
    .insert_non_send_resource(operator::OperatorHandle::native())
    .add_plugins(config::ConfigPlugin::new(config))
    .add_plugins(core::CorePlugin)
    .add_plugins(background::BackgroundPlugin)
    .add_plugins(download::DownloadPlugin)
    .add_plugins(overlay::OverlayPlugin);

  app.run();
}
