//! Cover-fit background rendering.
//!
//! Scales a source image so that it fills the whole viewport, preserving its
//! aspect ratio, then center-crops the overflow. Equivalent to CSS
//! `background-size: cover; background-position: center`.
//!
//! The scale step is planned with integer arithmetic so the cover property
//! (resized size >= viewport on both axes) holds exactly.

use std::path::Path;

use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::error::{AssetKind, Error};
use crate::viewport::Viewport;

/// Immutable RGBA raster with positive dimensions.
#[derive(Debug, Clone)]
pub struct SourceImage {
  pixels: RgbaImage,
}

impl SourceImage {
  /// Wraps a decoded raster. Fails on zero width or height.
  pub fn new(pixels: RgbaImage) -> Result<Self, Error> {
    if pixels.width() == 0 || pixels.height() == 0 {
      return Err(Error::EmptyImage);
    }
    Ok(Self { pixels })
  }

  /// Decodes an image file and converts it to RGBA.
  pub fn open(path: &Path) -> Result<Self, Error> {
    if !path.is_file() {
      return Err(Error::MissingAsset {
        kind: AssetKind::Background,
        path: path.to_path_buf(),
      });
    }
    let decoded = image::open(path).map_err(|source| Error::InvalidImage {
      path: path.to_path_buf(),
      source,
    })?;
    log::info!(
      "Loaded background {} ({}x{})",
      path.display(),
      decoded.width(),
      decoded.height()
    );
    Self::new(decoded.to_rgba8())
  }

  #[inline]
  pub fn width(&self) -> u32 {
    self.pixels.width()
  }

  #[inline]
  pub fn height(&self) -> u32 {
    self.pixels.height()
  }

  pub fn as_rgba(&self) -> &RgbaImage {
    &self.pixels
  }
}

/// Axis the image is scaled to match exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitAxis {
  /// Image is relatively wider than the viewport; width overflows.
  Height,
  /// Image is relatively taller (or equal); height overflows.
  Width,
}

/// Resize and crop parameters for one source/viewport pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverPlan {
  pub fit: FitAxis,
  pub resized_width: u32,
  pub resized_height: u32,
  pub crop_x: u32,
  pub crop_y: u32,
  pub target: Viewport,
}

impl CoverPlan {
  /// Plans the cover fit of a `source_width` x `source_height` image.
  ///
  /// Both source dimensions must be positive.
  pub fn compute(source_width: u32, source_height: u32, target: Viewport) -> Self {
    debug_assert!(source_width > 0 && source_height > 0);
    let sw = u64::from(source_width.max(1));
    let sh = u64::from(source_height.max(1));
    let tw = u64::from(target.width());
    let th = u64::from(target.height());

    // sw / sh > tw / th, cross-multiplied.
    let (fit, rw, rh) = if sw * th > tw * sh {
      (FitAxis::Height, sw * th / sh, th)
    } else {
      (FitAxis::Width, tw, sh * tw / sw)
    };
    let resized_width = u32::try_from(rw).unwrap_or(u32::MAX);
    let resized_height = u32::try_from(rh).unwrap_or(u32::MAX);

    Self {
      fit,
      resized_width,
      resized_height,
      crop_x: (resized_width - target.width()) / 2,
      crop_y: (resized_height - target.height()) / 2,
      target,
    }
  }

  /// Scale factor applied to the source.
  pub fn scale(&self, source_width: u32, source_height: u32) -> f64 {
    match self.fit {
      FitAxis::Height => f64::from(self.target.height()) / f64::from(source_height),
      FitAxis::Width => f64::from(self.target.width()) / f64::from(source_width),
    }
  }
}

/// Renders `source` to exactly fill `target`.
pub fn render(source: &SourceImage, target: Viewport) -> RgbaImage {
  let plan = CoverPlan::compute(source.width(), source.height(), target);
  let resized = imageops::resize(
    source.as_rgba(),
    plan.resized_width,
    plan.resized_height,
    FilterType::Lanczos3,
  );
  imageops::crop_imm(
    &resized,
    plan.crop_x,
    plan.crop_y,
    target.width(),
    target.height(),
  )
  .to_image()
}

/// Source image paired with the minimum viewport it is rendered at.
#[derive(Debug, Clone)]
pub struct BackgroundRenderer {
  source: SourceImage,
  min_viewport: Viewport,
}

impl BackgroundRenderer {
  pub fn new(source: SourceImage, min_viewport: Viewport) -> Self {
    Self {
      source,
      min_viewport,
    }
  }

  /// Viewport the frame for `window` is rendered at.
  pub fn frame_viewport(&self, window: Viewport) -> Viewport {
    window.clamped(self.min_viewport)
  }

  /// Renders the frame for a window size, clamped to the minimum viewport.
  pub fn render_for_window(&self, window: Viewport) -> RgbaImage {
    let target = self.frame_viewport(window);
    log::debug!(
      "Rendering background {}x{} for window {}x{}",
      target.width(),
      target.height(),
      window.width(),
      window.height()
    );
    render(&self.source, target)
  }
}
