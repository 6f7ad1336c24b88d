//! Localized message bundles
//!
//! Error text and overlay copy come from a message bundle: a key → template
//! map loadable from TOML, with `$1`..`$n` positional interpolation. This
//! keeps user-facing wording swappable per deployment without touching the
//! rendering code.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing message bundles
#[derive(Error, Debug)]
pub enum MessageError {
    #[error("Failed to read message bundle file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse message bundle TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A message bundle mapping symbolic keys to message templates
#[derive(Debug, Clone)]
pub struct MessageBundle {
    /// Optional name for the bundle
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Message mappings: key -> template with `$n` placeholders
    pub messages: HashMap<String, String>,
}

/// TOML structure for deserializing message bundles
#[derive(Deserialize)]
struct TomlBundle {
    metadata: Option<TomlMetadata>,
    messages: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Default English messages
const DEFAULT_MESSAGES: &str = r#"
[messages]
# Validation errors, keyed by error kind
error_embedvideo_service = "unrecognized video service \"$1\"$2"
error_embedvideo_missingparams = "a video service and a video ID are both required"
error_embedvideo_id = "\"$1\" is not a valid video ID for this service"
error_embedvideo_urlargs = "the URL arguments \"$1\" are not valid for this service"
error_embedvideo_container = "\"$1\" is not a valid container type"
error_embedvideo_alignment = "\"$1\" is not a valid alignment"
error_embedvideo_valignment = "\"$1\" is not a valid vertical alignment"
error_embedvideo_unknown = "the video service \"$1\" produced no embeddable markup"

# Consent overlay
embedvideo_consent_text = "Click to load content from an external video service"
"#;

impl MessageBundle {
    /// Load a message bundle from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, MessageError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a message bundle from a TOML string
    pub fn from_str(content: &str) -> Result<Self, MessageError> {
        let parsed: TomlBundle = toml::from_str(content)?;

        Ok(MessageBundle {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            messages: parsed.messages,
        })
    }

    /// Look up a raw message template by key
    ///
    /// Returns None if the key is not defined in this bundle.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(|s| s.as_str())
    }

    /// Look up a template, interpolate positional arguments, and HTML-escape
    /// the result
    ///
    /// Arguments replace `$1`..`$n` placeholders; the whole formatted message
    /// is escaped, so templates hold plain text, not markup. Lookup order:
    /// 1. This bundle
    /// 2. The default English bundle
    /// 3. The bare key, so a missing message is visible rather than silent
    pub fn format(&self, key: &str, args: &[&str]) -> String {
        let template = match self.get(key) {
            Some(template) => template.to_string(),
            None => match Self::default().get(key) {
                Some(template) => template.to_string(),
                None => key.to_string(),
            },
        };
        escape_html(&interpolate(&template, args))
    }
}

impl Default for MessageBundle {
    fn default() -> Self {
        Self::from_str(DEFAULT_MESSAGES).expect("Default message bundle should be valid TOML")
    }
}

/// Substitute `$1`..`$n` placeholders, highest index first so that `$12` is
/// never clobbered by `$1`.
fn interpolate(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (index, arg) in args.iter().enumerate().rev() {
        result = result.replace(&format!("${}", index + 1), arg);
    }
    result
}

/// Escape special HTML characters
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}
