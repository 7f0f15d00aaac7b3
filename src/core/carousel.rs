use crate::core::layout::{TrackLayout, SWIPE_THRESHOLD};
use crate::domain::model::Cursor;
use crate::domain::ports::TrackSurface;
use std::time::Duration;

/// Duration of an animated snap. The host clears it via
/// [`CarouselController::finish_transition`] once it elapses, so later
/// drag-driven offsets land untransitioned.
pub const SMOOTH_TRANSITION: Duration = Duration::from_millis(300);

/// Gesture-to-position state machine for the slide track.
///
/// The controller owns the index and offset state; everything visual goes
/// through the injected [`TrackSurface`]. The only modes are idle and
/// dragging, entered and exited exactly by `gesture_start`/`gesture_end`.
pub struct CarouselController<S: TrackSurface> {
    surface: S,
    layout: TrackLayout,
    current_index: usize,
    dragging: bool,
    start_pos: f64,
    current_offset: f64,
    settled_offset: f64,
    transition_pending: bool,
}

impl<S: TrackSurface> CarouselController<S> {
    /// Attach to a surface and settle on slide 0 with an animated move, the
    /// same way the page positions itself on load.
    pub fn new(mut surface: S, layout: TrackLayout) -> Self {
        surface.suppress_context_menu();
        surface.set_cursor(Cursor::Grab);
        let mut controller = Self {
            surface,
            layout,
            current_index: 0,
            dragging: false,
            start_pos: 0.0,
            current_offset: 0.0,
            settled_offset: 0.0,
            transition_pending: false,
        };
        controller.reposition(true);
        controller
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn current_offset(&self) -> f64 {
        self.current_offset
    }

    /// Advance one slide; past the last slide, smoothly return to the start.
    pub fn go_next(&mut self) {
        if self.current_index < self.layout.last_index() {
            self.current_index += 1;
        } else {
            self.current_index = 0;
        }
        tracing::debug!("next -> slide {}", self.current_index);
        self.reposition(true);
    }

    /// Retreat one slide; before slide 0, smoothly go to the end.
    pub fn go_previous(&mut self) {
        if self.current_index > 0 {
            self.current_index -= 1;
        } else {
            self.current_index = self.layout.last_index();
        }
        tracing::debug!("previous -> slide {}", self.current_index);
        self.reposition(true);
    }

    /// Begin a drag at the given pointer x. Any in-flight snap transition is
    /// dropped so drag updates track the pointer instantly.
    pub fn gesture_start(&mut self, pointer_x: f64) {
        self.dragging = true;
        self.start_pos = pointer_x;
        self.transition_pending = false;
        self.surface.set_transition(None);
        self.surface.set_cursor(Cursor::Grabbing);
    }

    /// Track the pointer: offset is the last settled offset plus raw pointer
    /// displacement, clamped to the scrollable band. No momentum.
    pub fn gesture_move(&mut self, pointer_x: f64) {
        if self.dragging {
            self.current_offset = self
                .layout
                .clamp_offset(self.settled_offset + (pointer_x - self.start_pos));
        }
    }

    /// End (or cancel — pointer-leave is delivered here too) a drag and snap.
    ///
    /// A displacement beyond the swipe threshold moves the index one step in
    /// the drag direction, without wrapping; smaller displacements are
    /// discarded as accidental.
    pub fn gesture_end(&mut self) {
        if !self.dragging {
            return;
        }
        self.dragging = false;
        self.surface.set_cursor(Cursor::Grab);

        let moved_by = self.current_offset - self.settled_offset;
        if moved_by.abs() > SWIPE_THRESHOLD {
            if moved_by < 0.0 && self.current_index < self.layout.last_index() {
                self.current_index += 1;
            } else if moved_by > 0.0 && self.current_index > 0 {
                self.current_index -= 1;
            }
        }
        tracing::debug!("drag moved {:.1}px, settling on slide {}", moved_by, self.current_index);

        self.reposition(true);
    }

    /// One tick of the per-frame sync loop: push the current offset to the
    /// surface. Returns true while dragging so the host knows to schedule
    /// the next frame.
    pub fn frame(&mut self) -> bool {
        self.surface.apply_offset(self.current_offset);
        self.dragging
    }

    /// Viewport resize: recompute geometry at the new slide width and snap
    /// back into bounds. A reposition, not a gesture.
    pub fn handle_resize(&mut self, slide_width: f64) {
        if let Ok(layout) = TrackLayout::new(slide_width, self.layout.slide_count()) {
            self.layout = layout;
            self.reposition(true);
        }
    }

    /// The host calls this once the smooth transition has elapsed, dropping
    /// it so the next drag-driven offset lands instantly.
    pub fn finish_transition(&mut self) {
        if self.transition_pending {
            self.transition_pending = false;
            self.surface.set_transition(None);
        }
    }

    fn reposition(&mut self, smooth: bool) {
        let target = self.layout.offset_for_index(self.current_index);
        self.current_offset = target;
        self.settled_offset = target;

        if smooth {
            self.transition_pending = true;
            self.surface.set_transition(Some(SMOOTH_TRANSITION));
        } else {
            self.transition_pending = false;
            self.surface.set_transition(None);
        }
        self.surface.apply_offset(target);
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
