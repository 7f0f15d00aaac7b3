pub mod carousel;
pub mod form;
pub mod layout;

pub use crate::domain::model::{Cursor, FormData, StatusKind, SubmitOutcome};
pub use crate::domain::ports::{FormSurface, TrackSurface, Transport};
pub use crate::utils::error::Result;
