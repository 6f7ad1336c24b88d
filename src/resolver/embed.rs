//! Resolved embed configuration types
//!
//! Enum fields are closed vocabularies. An out-of-vocabulary non-empty value
//! is a hard validation failure upstream, never a silent fallback, so these
//! types only ever hold accepted values.

/// Horizontal placement of the embed in the surrounding document flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
    Center,
    Inline,
}

impl Alignment {
    /// Parse a vocabulary value, case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "left" => Some(Alignment::Left),
            "right" => Some(Alignment::Right),
            "center" => Some(Alignment::Center),
            "inline" => Some(Alignment::Inline),
            _ => None,
        }
    }

    /// Class-token form
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Right => "right",
            Alignment::Center => "center",
            Alignment::Inline => "inline",
        }
    }
}

/// Vertical placement relative to the surrounding line box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlignment {
    Top,
    Middle,
    Bottom,
    Baseline,
}

impl VerticalAlignment {
    /// Parse a vocabulary value, case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "top" => Some(VerticalAlignment::Top),
            "middle" => Some(VerticalAlignment::Middle),
            "bottom" => Some(VerticalAlignment::Bottom),
            "baseline" => Some(VerticalAlignment::Baseline),
            _ => None,
        }
    }

    /// Class-token form
    pub fn as_str(&self) -> &'static str {
        match self {
            VerticalAlignment::Top => "top",
            VerticalAlignment::Middle => "middle",
            VerticalAlignment::Bottom => "bottom",
            VerticalAlignment::Baseline => "baseline",
        }
    }
}

/// Framing applied around the embed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    Frame,
}

impl Container {
    /// Parse a vocabulary value, case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "frame" => Some(Container::Frame),
            _ => None,
        }
    }
}

/// A validated embed request
///
/// Produced by the resolver in a single pass and read-only afterwards;
/// discarded at the end of the request.
#[derive(Debug, Clone)]
pub struct EmbedConfig {
    /// Service name the request was resolved against
    pub service: String,
    /// Video identifier, already accepted by the service
    pub id: String,
    /// Requested width; `None` falls through to the service default
    pub width: Option<u32>,
    /// Requested height; `None` derives from the service aspect ratio
    pub height: Option<u32>,
    /// Horizontal alignment, if any
    pub alignment: Option<Alignment>,
    /// Vertical alignment; any value other than `Baseline` forces
    /// `alignment` to `Inline`
    pub vertical_alignment: Option<VerticalAlignment>,
    /// Container framing, if any
    pub container: Option<Container>,
    /// Query-string arguments appended to the embed URL
    pub url_args: String,
    /// Rendered caption; `None` means no caption block at all
    pub description: Option<String>,
    /// Whether the embed resizes with its surroundings
    pub auto_resize: bool,
}
