use thiserror::Error;

#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("Submission request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Validation error on {field}: {reason}")]
    ValidationError { field: String, reason: String },

    #[error("Layout error: {message}")]
    LayoutError { message: String },

    #[error("Submission rejected: {message}")]
    SubmissionError { message: String },
}

pub type Result<T> = std::result::Result<T, WidgetError>;
