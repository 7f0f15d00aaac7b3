use crate::utils::error::{Result, WidgetError};

/// Slides are spaced at 80% of their own width, so the next slide peeks in
/// from the right edge.
pub const PEEK_RATIO: f64 = 0.8;

/// Rest position of slide 0: padding from the left edge, in pixels.
pub const LEFT_INSET: f64 = 20.0;

/// A drag must displace the track by more than this many pixels to count as
/// a swipe; anything smaller is discarded as accidental.
pub const SWIPE_THRESHOLD: f64 = 100.0;

/// Geometry of the slide track. Slide count is fixed after construction;
/// slide width changes only with the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackLayout {
    slide_width: f64,
    slide_count: usize,
}

impl TrackLayout {
    pub fn new(slide_width: f64, slide_count: usize) -> Result<Self> {
        if slide_count == 0 {
            return Err(WidgetError::LayoutError {
                message: "carousel needs at least one slide".to_string(),
            });
        }
        if !slide_width.is_finite() || slide_width <= 0.0 {
            return Err(WidgetError::LayoutError {
                message: format!("invalid slide width: {}", slide_width),
            });
        }
        Ok(Self {
            slide_width,
            slide_count,
        })
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn last_index(&self) -> usize {
        self.slide_count - 1
    }

    /// Per-step horizontal distance between slide rest positions.
    pub fn move_amount(&self) -> f64 {
        self.slide_width * PEEK_RATIO
    }

    /// Leftmost allowed offset: the last slide's rest position, so the track
    /// never scrolls past the end.
    pub fn min_offset(&self) -> f64 {
        -(self.last_index() as f64 * self.move_amount())
    }

    /// Rightmost allowed offset: slide 0 at the left inset.
    pub fn max_offset(&self) -> f64 {
        LEFT_INSET
    }

    pub fn clamp_offset(&self, offset: f64) -> f64 {
        offset.clamp(self.min_offset(), self.max_offset())
    }

    /// Rest offset for a slide index, clamped into the scrollable band.
    pub fn offset_for_index(&self, index: usize) -> f64 {
        self.clamp_offset(-(index as f64 * self.move_amount()) + LEFT_INSET)
    }
}
