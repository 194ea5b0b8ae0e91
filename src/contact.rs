use std::{fmt, future::Future};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::RelayConfig;

/// The three fields of the contact form, named as the email template expects them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactMessage {
    pub user_name: String,
    pub user_email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(
        user_name: impl Into<String>,
        user_email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            user_name: user_name.into(),
            user_email: user_email.into(),
            message: message.into(),
        }
    }

    /// Trimmed copy of the message, or the first problem found.
    pub fn validated(&self) -> Result<ContactMessage, FormError> {
        let trimmed = ContactMessage::new(
            self.user_name.trim(),
            self.user_email.trim(),
            self.message.trim(),
        );
        for field in Field::ALL {
            if trimmed.get(field).is_empty() {
                return Err(FormError::Missing(field));
            }
        }
        match trimmed.user_email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(trimmed),
            _ => Err(FormError::InvalidEmail),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.user_name,
            Field::Email => &self.user_email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.user_name = value,
            Field::Email => self.user_email = value,
            Field::Message => self.message = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn status_message(self) -> Option<&'static str> {
        match self {
            SubmissionState::Idle => None,
            SubmissionState::Pending => Some("Sending message..."),
            SubmissionState::Succeeded => Some("Message sent successfully!"),
            SubmissionState::Failed => Some("Failed to send message. Please try again."),
        }
    }

    pub fn is_pending(self) -> bool {
        self == SubmissionState::Pending
    }
}

/// Problems caught before anything is sent.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(Field),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("A message is already being sent")]
    AlreadyPending,
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelayError {
    #[error("could not reach the email service: {0}")]
    Transport(String),
    #[error("email service rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("contact server function failed: {0}")]
    Server(String),
}

/// Delivers a validated message somewhere. One attempt per call, no retry.
pub trait ContactRelay {
    fn send(&self, message: ContactMessage) -> impl Future<Output = Result<(), RelayError>>;
}

/// Form fields plus where the last submission got to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    fields: ContactMessage,
    state: SubmissionState,
    error: Option<FormError>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn fields(&self) -> &ContactMessage {
        &self.fields
    }

    pub fn value(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn error(&self) -> Option<FormError> {
        self.error
    }

    pub fn status_message(&self) -> Option<&'static str> {
        self.state.status_message()
    }

    /// Validates and moves to pending, handing back the message to relay.
    /// A validation failure leaves the submission state untouched.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, FormError> {
        let checked = if self.state.is_pending() {
            Err(FormError::AlreadyPending)
        } else {
            self.fields.validated()
        };
        match checked {
            Ok(message) => {
                self.error = None;
                self.state = SubmissionState::Pending;
                Ok(message)
            }
            Err(err) => {
                self.error = Some(err);
                Err(err)
            }
        }
    }

    /// Records the relay outcome. Fields are cleared only on success.
    pub fn finish(&mut self, result: Result<(), RelayError>) {
        match result {
            Ok(()) => {
                self.fields = ContactMessage::default();
                self.state = SubmissionState::Succeeded;
            }
            Err(err) => {
                log::warn!("contact message not delivered: {err}");
                self.state = SubmissionState::Failed;
            }
        }
    }

    /// Clears the status line, e.g. when the contact modal closes. A send in
    /// flight keeps its pending state.
    pub fn reset_status(&mut self) {
        self.error = None;
        if !self.state.is_pending() {
            self.state = SubmissionState::Idle;
        }
    }
}

/// Body of an EmailJS `send` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailJsRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a ContactMessage,
}

impl<'a> EmailJsRequest<'a> {
    pub fn new(config: &'a RelayConfig, message: &'a ContactMessage) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: message,
        }
    }
}

/// Posts messages to the EmailJS REST API.
#[cfg(feature = "ssr")]
#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    client: reqwest::Client,
    config: RelayConfig,
}

#[cfg(feature = "ssr")]
impl EmailJsRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[cfg(feature = "ssr")]
impl ContactRelay for EmailJsRelay {
    async fn send(&self, message: ContactMessage) -> Result<(), RelayError> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&EmailJsRequest::new(&self.config, &message))
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::info!("contact message from {} delivered", message.user_email);
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(%status, %body, "email service rejected contact message");
        Err(RelayError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
