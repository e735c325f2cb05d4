use bevy::prelude::*;

/// Marker component for the landing page camera
#[derive(Component)]
pub struct LandingCamera;

/// Orthographic 2D camera with one world unit per logical pixel, centered on
/// the window.
pub fn setup_camera(mut commands: Commands) {
  commands.spawn((LandingCamera, Camera2d));
}
