//! Positional argument schema and raw argument collection
//!
//! Bare arguments are consumed positionally in schema order. A `key=value`
//! argument still consumes a position slot, which shifts any later bare
//! arguments onto a different schema field; downstream templates depend on
//! that exact behavior, so the counter advances on every argument.

use std::collections::HashMap;

/// Recognized positional fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgField {
    Id,
    Alignment,
    Description,
    Dimensions,
    UrlArgs,
    Width,
    Height,
    AutoResize,
    VAlignment,
}

/// Positional order for bare arguments, after the service name
pub const POSITIONAL_ORDER: [ArgField; 9] = [
    ArgField::Id,
    ArgField::Alignment,
    ArgField::Description,
    ArgField::Dimensions,
    ArgField::UrlArgs,
    ArgField::Width,
    ArgField::Height,
    ArgField::AutoResize,
    ArgField::VAlignment,
];

/// Argument values as collected, before validation
///
/// String fields hold whatever the caller supplied; the resolver turns them
/// into a typed [`EmbedConfig`](super::EmbedConfig) in a single pass.
/// `container` is settable by name only; it has no positional slot.
#[derive(Debug, Clone)]
pub struct RawArgs {
    pub service: String,
    pub id: String,
    pub alignment: String,
    pub description: String,
    pub dimensions: String,
    pub url_args: String,
    pub width: String,
    pub height: String,
    pub auto_resize: bool,
    pub vertical_alignment: String,
    pub container: String,
    /// Unrecognized named arguments. Named assignment is unconditional, so
    /// these are stored, but nothing reads them afterwards.
    pub extra: HashMap<String, String>,
}

impl Default for RawArgs {
    fn default() -> Self {
        Self {
            service: String::new(),
            id: String::new(),
            alignment: String::new(),
            description: String::new(),
            dimensions: String::new(),
            url_args: String::new(),
            width: String::new(),
            height: String::new(),
            auto_resize: true,
            vertical_alignment: String::new(),
            container: String::new(),
            extra: HashMap::new(),
        }
    }
}

impl RawArgs {
    /// Collect a raw argument list
    ///
    /// The first element is the service name; the rest are `key=value` pairs
    /// (split on the first `=`, both halves trimmed) or bare values consumed
    /// positionally. Empty bare values and bare values beyond the schema
    /// length are ignored, but every argument advances the position counter.
    pub fn parse(args: &[&str]) -> Self {
        let mut raw = RawArgs::default();
        let Some((service, rest)) = args.split_first() else {
            return raw;
        };
        raw.service = service.trim().to_string();

        let mut slot = 0usize;
        for arg in rest {
            if let Some((name, value)) = arg.split_once('=') {
                raw.set_named(name.trim(), value.trim());
            } else {
                let value = arg.trim();
                if !value.is_empty() {
                    if let Some(field) = POSITIONAL_ORDER.get(slot) {
                        raw.set_positional(*field, value);
                    }
                }
            }
            slot += 1;
        }
        raw
    }

    /// Assign a named argument. Known names overwrite their field
    /// unconditionally; unknown names land in `extra`.
    fn set_named(&mut self, name: &str, value: &str) {
        match name {
            "id" => self.id = value.to_string(),
            "alignment" => self.alignment = value.to_string(),
            "description" => self.description = value.to_string(),
            "dimensions" => self.dimensions = value.to_string(),
            "urlargs" => self.url_args = value.to_string(),
            "width" => self.width = value.to_string(),
            "height" => self.height = value.to_string(),
            "autoresize" => self.auto_resize = !value.eq_ignore_ascii_case("false"),
            "valignment" => self.vertical_alignment = value.to_string(),
            "container" => self.container = value.to_string(),
            _ => {
                self.extra.insert(name.to_string(), value.to_string());
            }
        }
    }

    /// Assign a bare value to its positional field
    fn set_positional(&mut self, field: ArgField, value: &str) {
        match field {
            ArgField::Id => self.id = value.to_string(),
            ArgField::Alignment => self.alignment = value.to_string(),
            ArgField::Description => self.description = value.to_string(),
            ArgField::Dimensions => self.dimensions = value.to_string(),
            ArgField::UrlArgs => self.url_args = value.to_string(),
            ArgField::Width => self.width = value.to_string(),
            ArgField::Height => self.height = value.to_string(),
            // Only the literal "false" negates; anything else leaves the
            // default in place.
            ArgField::AutoResize => {
                if value.eq_ignore_ascii_case("false") {
                    self.auto_resize = false;
                }
            }
            ArgField::VAlignment => self.vertical_alignment = value.to_string(),
        }
    }

    /// Final width/height after dimension normalization
    ///
    /// A `dimensions` value containing `x` (case-insensitive) splits into
    /// both axes; a purely numeric value is a width. Either form overrides
    /// explicit `width=`/`height=` arguments on both axes. Any other
    /// non-empty `dimensions` value is ignored and the explicit arguments
    /// apply.
    pub fn resolved_dimensions(&self) -> (Option<u32>, Option<u32>) {
        let dims = self.dimensions.trim().to_ascii_lowercase();
        if dims.contains('x') {
            if let Some((width, height)) = dims.split_once('x') {
                return (parse_dim(width), parse_dim(height));
            }
        }
        if !dims.is_empty() && dims.bytes().all(|b| b.is_ascii_digit()) {
            return (dims.parse().ok(), None);
        }
        (parse_dim(&self.width), parse_dim(&self.height))
    }
}

/// Parse a single dimension; empty or unparsable values mean "unset"
fn parse_dim(value: &str) -> Option<u32> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    value.parse().ok()
}
