use crate::domain::model::{Cursor, FormData, StatusKind};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// The visual track the carousel drives: a host binds this to whatever
/// renders the slides. The controller only ever pushes offsets through it.
pub trait TrackSurface {
    /// Move the track to a horizontal offset in pixels.
    fn apply_offset(&mut self, offset: f64);
    /// Enable an eased transition of the given duration, or drop it so
    /// subsequent offsets land instantly.
    fn set_transition(&mut self, duration: Option<Duration>);
    fn set_cursor(&mut self, cursor: Cursor);
    /// Stop long-press context menus inside the carousel region.
    fn suppress_context_menu(&mut self);
}

/// The form UI the submission controller drives.
pub trait FormSurface {
    /// Hide any prior field error and status message, and unflag fields.
    fn clear_feedback(&mut self);
    /// Show an inline error next to the named field and flag its container.
    fn show_field_error(&mut self, field: &str, message: &str);
    fn show_status(&mut self, kind: StatusKind, message: &str);
    /// Disable the submit control with a pending label, or restore it.
    fn set_submitting(&mut self, submitting: bool);
    fn reset_fields(&mut self);
}

/// Delivery of a form's field set to its destination. One call per submit
/// attempt; the caller never retries.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn deliver(&self, destination: &str, form: &FormData) -> Result<serde_json::Value>;
}
