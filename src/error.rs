//! Validation errors and the inline error box
//!
//! Every failure is recovered locally into a user-facing error fragment;
//! nothing propagates to the host as a hard failure. The resolver checks
//! rules in a fixed order and the first violated rule wins.

use thiserror::Error;

use crate::message::MessageBundle;

/// Validation failures, by error kind
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmbedError {
    /// No registered service under this name
    #[error("video service \"{0}\" is not recognized")]
    UnknownService(String),

    /// Service exists but is excluded by the host allow-list
    #[error("video service \"{0}\" is disabled")]
    DisabledService(String),

    /// Service name or video ID missing from the request
    #[error("a video service and a video ID are both required")]
    MissingParams,

    /// Video ID rejected by the service's pattern check
    #[error("invalid video ID \"{0}\"")]
    InvalidId(String),

    /// URL arguments rejected by the service
    #[error("invalid URL arguments \"{0}\"")]
    InvalidUrlArgs(String),

    /// Container value outside the closed vocabulary
    #[error("invalid container \"{0}\"")]
    InvalidContainer(String),

    /// Alignment value outside the closed vocabulary
    #[error("invalid alignment \"{0}\"")]
    InvalidAlignment(String),

    /// Vertical alignment value outside the closed vocabulary
    #[error("invalid vertical alignment \"{0}\"")]
    InvalidVerticalAlignment(String),

    /// Service accepted the configuration but produced no markup
    #[error("video service \"{0}\" produced no embeddable markup")]
    NoMarkup(String),
}

impl EmbedError {
    /// Error kind, as used in message bundle keys (`error_embedvideo_<kind>`)
    pub fn kind(&self) -> &'static str {
        match self {
            EmbedError::UnknownService(_) | EmbedError::DisabledService(_) => "service",
            EmbedError::MissingParams => "missingparams",
            EmbedError::InvalidId(_) => "id",
            EmbedError::InvalidUrlArgs(_) => "urlargs",
            EmbedError::InvalidContainer(_) => "container",
            EmbedError::InvalidAlignment(_) => "alignment",
            EmbedError::InvalidVerticalAlignment(_) => "valignment",
            EmbedError::NoMarkup(_) => "unknown",
        }
    }

    /// Positional detail arguments for message interpolation
    ///
    /// The `service` kind carries a second argument: a qualifier that
    /// distinguishes "disabled" from "never heard of it".
    fn details(&self) -> Vec<&str> {
        match self {
            EmbedError::UnknownService(name) => vec![name, ""],
            EmbedError::DisabledService(name) => vec![name, " (as it is disabled)"],
            EmbedError::MissingParams => vec![],
            EmbedError::InvalidId(value)
            | EmbedError::InvalidUrlArgs(value)
            | EmbedError::InvalidContainer(value)
            | EmbedError::InvalidAlignment(value)
            | EmbedError::InvalidVerticalAlignment(value)
            | EmbedError::NoMarkup(value) => vec![value],
        }
    }

    /// Render as the inline error box shown in place of the embed
    pub fn to_error_box(&self, messages: &MessageBundle) -> String {
        let key = format!("error_embedvideo_{}", self.kind());
        format!(
            r#"<div class="errorbox">{}</div>"#,
            messages.format(&key, &self.details())
        )
    }
}
