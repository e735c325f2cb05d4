//! Viewport sizes and the overlay layout derived from them.
//!
//! All coordinates are logical pixels with the origin at the top-left corner
//! of the window, X+ to the right and Y+ downward.

/// Inset of the footer from the left and bottom window edges.
pub const FOOTER_INSET: u32 = 12;
/// Horizontal margin subtracted from the window width for the text block.
pub const BLOCK_MARGIN: u32 = 80;
pub const BLOCK_MIN_WIDTH: u32 = 300;
pub const BLOCK_MAX_WIDTH: u32 = 1000;
pub const TITLE_WRAP_INSET: u32 = 40;
pub const DESCRIPTION_WRAP_INSET: u32 = 60;

/// Visible drawing area. Both dimensions are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
  width: u32,
  height: u32,
}

impl Viewport {
  /// Creates a viewport, raising zero dimensions to 1.
  pub const fn new(width: u32, height: u32) -> Self {
    Self {
      width: if width == 0 { 1 } else { width },
      height: if height == 0 { 1 } else { height },
    }
  }

  /// Builds a viewport from window sizes reported as floats.
  ///
  /// Negative and NaN values collapse to 1.
  pub fn from_logical(width: f32, height: f32) -> Self {
    let to_px = |v: f32| if v.is_finite() && v > 0.0 { v.round() as u32 } else { 0 };
    Self::new(to_px(width), to_px(height))
  }

  #[inline]
  pub fn width(&self) -> u32 {
    self.width
  }

  #[inline]
  pub fn height(&self) -> u32 {
    self.height
  }

  /// Raises each dimension to at least the matching dimension of `min`.
  pub fn clamped(self, min: Viewport) -> Self {
    Self {
      width: self.width.max(min.width),
      height: self.height.max(min.height),
    }
  }

  pub fn center(&self) -> Point {
    Point::new(self.width / 2, self.height / 2)
  }

  /// Bottom-left anchor of the footer.
  pub fn footer_anchor(&self) -> Point {
    Point::new(FOOTER_INSET, self.height.saturating_sub(FOOTER_INSET))
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
  pub x: u32,
  pub y: u32,
}

impl Point {
  pub const fn new(x: u32, y: u32) -> Self {
    Self { x, y }
  }
}

/// Placement of the overlay elements for one viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayLayout {
  /// Center of the title/description/button block.
  pub center: Point,
  /// Bottom-left corner of the footer.
  pub footer: Point,
  pub block_width: u32,
  pub title_wrap: u32,
  pub description_wrap: u32,
}

impl OverlayLayout {
  /// Computes the layout for a window.
  ///
  /// Anchors follow the clamped viewport the background is rendered at; the
  /// text block width follows the raw window width.
  pub fn compute(window: Viewport, min: Viewport) -> Self {
    let render = window.clamped(min);
    let block_width = window
      .width()
      .saturating_sub(BLOCK_MARGIN)
      .clamp(BLOCK_MIN_WIDTH, BLOCK_MAX_WIDTH);
    Self {
      center: render.center(),
      footer: render.footer_anchor(),
      block_width,
      title_wrap: block_width - TITLE_WRAP_INSET,
      description_wrap: block_width - DESCRIPTION_WRAP_INSET,
    }
  }
}
