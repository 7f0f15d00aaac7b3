pub mod adapters;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::http::HttpTransport;
pub use crate::core::carousel::CarouselController;
pub use crate::core::form::ContactFormController;
pub use crate::core::layout::TrackLayout;
pub use crate::domain::model::{Cursor, FormData, StatusKind, SubmitOutcome};
pub use crate::domain::ports::{FormSurface, TrackSurface, Transport};
pub use crate::utils::error::{Result, WidgetError};
