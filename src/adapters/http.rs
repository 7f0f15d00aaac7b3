use crate::domain::model::FormData;
use crate::domain::ports::Transport;
use crate::utils::error::{Result, WidgetError};
use crate::utils::validation::validate_destination;
use async_trait::async_trait;
use reqwest::multipart::Form;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Delivers the form as one multipart POST with `Accept: application/json`,
/// mirroring a browser `fetch(form.action, { body: new FormData(form) })`.
/// A non-OK response and a transport failure are the same failure to the
/// caller.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// The timeout keeps a dead destination from pinning the submit control
    /// in its disabled state forever.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn deliver(&self, destination: &str, form: &FormData) -> Result<serde_json::Value> {
        validate_destination("destination", destination)?;

        let mut body = Form::new();
        for (name, value) in form.fields() {
            body = body.text(name.clone(), value.clone());
        }

        tracing::debug!("posting contact form to {}", destination);
        let response = self
            .client
            .post(destination)
            .header("Accept", "application/json")
            .multipart(body)
            .send()
            .await?;

        tracing::debug!("destination responded with {}", response.status());
        if !response.status().is_success() {
            return Err(WidgetError::SubmissionError {
                message: format!("destination rejected submission: {}", response.status()),
            });
        }

        // Success only requires a JSON-decodable body; the content is not
        // otherwise inspected.
        let data: serde_json::Value = response.json().await?;
        Ok(data)
    }
}
