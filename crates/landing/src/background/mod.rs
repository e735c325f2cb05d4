//! Cover-fit background sprite and viewport tracking.
//!
//! Every `WindowResized` message re-renders the background at the new size
//! and recomputes the overlay layout, synchronously, in the same system.


use bevy::asset::RenderAssetUsages;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use bevy::window::{PrimaryWindow, WindowResized};
use landing_core::image::RgbaImage;
use landing_core::{BackgroundRenderer, Notice, OverlayLayout, SourceImage, Viewport};

use crate::config::ConfigLoaded;
use crate::operator::OperatorHandle;

/// Draw depth of the background, behind everything else.
const BACKGROUND_Z: f32 = -10.0;

pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
  fn build(&self, app: &mut App) {
    app
      .add_systems(Startup, setup_background)
      .add_systems(Update, on_viewport_changed);
  }
}

/// Marker component for the background sprite
#[derive(Component)]
pub struct Background;

/// Current window size and the overlay layout derived from it.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
  pub window: Viewport,
  pub min: Viewport,
  pub layout: OverlayLayout,
}

impl ViewportState {
  pub fn new(window: Viewport, min: Viewport) -> Self {
    Self {
      window,
      min,
      layout: OverlayLayout::compute(window, min),
    }
  }

  pub fn update(&mut self, window: Viewport) {
    *self = Self::new(window, self.min);
  }
}

/// Loaded background and the texture its frames are written into.
///
/// Absent when the background image is missing or unreadable.
#[derive(Resource)]
pub struct BackgroundFrame {
  pub renderer: BackgroundRenderer,
  pub handle: Handle<Image>,
}

/// Converts a rendered frame into an RGBA8 sRGB texture.
pub fn frame_to_image(frame: RgbaImage) -> Image {
  let size = Extent3d {
    width: frame.width(),
    height: frame.height(),
    depth_or_array_layers: 1,
  };
  Image::new(
    size,
    TextureDimension::D2,
    frame.into_raw(),
    TextureFormat::Rgba8UnormSrgb,
    RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
  )
}

/// Sprite translation that pins a `frame` sized sprite to the window's
/// top-left corner. The camera is centered on the origin with Y+ up.
pub fn frame_translation(frame: Viewport, window: Viewport) -> Vec3 {
  let dx = (frame.width() as f32 - window.width() as f32) / 2.0;
  let dy = (frame.height() as f32 - window.height() as f32) / 2.0;
  Vec3::new(dx, -dy, BACKGROUND_Z)
}

fn frame_size(frame: Viewport) -> Vec2 {
  Vec2::new(frame.width() as f32, frame.height() as f32)
}

fn setup_background(
  mut commands: Commands,
  config: Res<ConfigLoaded>,
  windows: Query<&Window, With<PrimaryWindow>>,
  mut images: ResMut<Assets<Image>>,
  mut operator: NonSendMut<OperatorHandle>,
) {
  let window = windows
    .single()
    .map(|w| Viewport::from_logical(w.width(), w.height()))
    .unwrap_or_else(|_| config.app.window.initial_viewport());
  let min = config.app.window.min_viewport();
  commands.insert_resource(ViewportState::new(window, min));

  let path = config.background_path();
  let source = match SourceImage::open(&path) {
    Ok(source) => source,
    Err(e) => {
      warn!("{e}; filling the window with the fallback color");
      commands.insert_resource(ClearColor(config.fallback_color()));
      operator.0.notify(&Notice::background_unavailable(&e));
      return;
    }
  };

  let renderer = BackgroundRenderer::new(source, min);
  let frame = renderer.frame_viewport(window);
  let handle = images.add(frame_to_image(renderer.render_for_window(window)));

  commands.spawn((
    Background,
    Sprite {
      image: handle.clone(),
      custom_size: Some(frame_size(frame)),
      ..default()
    },
    Transform::from_translation(frame_translation(frame, window)),
  ));
  commands.insert_resource(BackgroundFrame { renderer, handle });
}

/// Re-renders the background and recomputes the layout for each resize.
pub fn on_viewport_changed(
  mut resized: MessageReader<WindowResized>,
  mut state: ResMut<ViewportState>,
  background: Option<Res<BackgroundFrame>>,
  mut images: ResMut<Assets<Image>>,
  mut sprites: Query<(&mut Sprite, &mut Transform), With<Background>>,
) {
  for event in resized.read() {
    let window = Viewport::from_logical(event.width, event.height);
    state.update(window);

    let Some(background) = background.as_ref() else {
      continue;
    };
    let frame = background.renderer.frame_viewport(window);
    let pixels = background.renderer.render_for_window(window);
    if let Some(image) = images.get_mut(&background.handle) {
      *image = frame_to_image(pixels);
    }
    for (mut sprite, mut transform) in sprites.iter_mut() {
      sprite.custom_size = Some(frame_size(frame));
      transform.translation = frame_translation(frame, window);
    }
  }
}
