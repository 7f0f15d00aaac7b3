use serde::{Deserialize, Serialize};

/// The field set captured from the contact form at submit time, in document
/// order. Only the email field is subject to validation; everything else is
/// delivered opaquely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormData {
    fields: Vec<(String, String)>,
}

pub const EMAIL_FIELD: &str = "email";

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.fields.push((name.to_string(), value.to_string()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn email(&self) -> &str {
        self.get(EMAIL_FIELD).unwrap_or("")
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }
}

/// How one submit attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    /// Email failed validation; no request was made.
    Rejected,
    /// The destination accepted the submission.
    Delivered,
    /// Transport failure or a rejected response.
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Pointer cursor shown over the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Grab,
    Grabbing,
}
