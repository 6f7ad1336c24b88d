//! Argument resolution
//!
//! Turns the raw directive argument list into a validated [`EmbedConfig`]
//! plus a configured service handle, or a typed [`EmbedError`]. Validation
//! is fail-fast: rules are checked in a fixed order and the first violation
//! determines the reported error; nothing is accumulated.

mod embed;
mod schema;

pub use embed::{Alignment, Container, EmbedConfig, VerticalAlignment};
pub use schema::{ArgField, RawArgs, POSITIONAL_ORDER};

use tracing::debug;
use url::form_urlencoded;

use crate::config::HostConfig;
use crate::error::EmbedError;
use crate::provider::{ServiceRegistry, VideoService};

/// Optional host capability for rendering description markup
///
/// When absent, descriptions are stored as plain text.
pub trait RichTextRenderer {
    /// Render inline rich text to HTML
    fn render_inline(&self, text: &str) -> String;
}

/// Services that require a `parent` query parameter naming the embedding host
const PARENT_LOCKED_SERVICES: [&str; 3] = ["twitch", "twitchclip", "twitchvod"];

/// A fully resolved embed: the validated configuration plus the configured
/// handle that will produce the inner markup
pub struct ResolvedEmbed {
    pub config: EmbedConfig,
    pub service: Box<dyn VideoService>,
}

impl std::fmt::Debug for ResolvedEmbed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedEmbed")
            .field("config", &self.config)
            .field("service", &self.service.name())
            .finish()
    }
}

/// Resolves raw argument lists against a service registry and host
/// configuration
pub struct Resolver<'a> {
    registry: &'a ServiceRegistry,
    host: &'a HostConfig,
    rich_text: Option<&'a dyn RichTextRenderer>,
}

impl<'a> Resolver<'a> {
    /// Create a resolver over a registry and host configuration
    pub fn new(registry: &'a ServiceRegistry, host: &'a HostConfig) -> Self {
        Self {
            registry,
            host,
            rich_text: None,
        }
    }

    /// Attach a rich-text renderer for descriptions
    pub fn with_rich_text(mut self, renderer: &'a dyn RichTextRenderer) -> Self {
        self.rich_text = Some(renderer);
        self
    }

    /// Resolve a raw argument list into a validated embed
    pub fn resolve(&self, args: &[&str]) -> Result<ResolvedEmbed, EmbedError> {
        self.resolve_raw(RawArgs::parse(args))
    }

    /// Resolve already-collected arguments
    pub fn resolve_raw(&self, raw: RawArgs) -> Result<ResolvedEmbed, EmbedError> {
        if raw.service.is_empty() || raw.id.is_empty() {
            return Err(EmbedError::MissingParams);
        }
        if !self.host.service_enabled(&raw.service) {
            return Err(EmbedError::DisabledService(raw.service));
        }
        let mut service = self
            .registry
            .create(&raw.service)
            .ok_or_else(|| EmbedError::UnknownService(raw.service.clone()))?;

        // The service normalizes out-of-range or missing values itself.
        let (width, height) = raw.resolved_dimensions();
        service.set_width(width);
        service.set_height(height);

        if !service.set_video_id(&raw.id) {
            return Err(EmbedError::InvalidId(raw.id));
        }

        // Parent injection must happen before the handle sees the arguments,
        // so parent-locked services always get a qualified query string.
        let url_args = if PARENT_LOCKED_SERVICES.contains(&raw.service.as_str()) {
            inject_parent(&raw.url_args, &self.host.server_name)
        } else {
            raw.url_args.clone()
        };
        if !service.set_url_args(&url_args) {
            return Err(EmbedError::InvalidUrlArgs(url_args));
        }

        let description = match raw.description.as_str() {
            "" => None,
            text => Some(match self.rich_text {
                Some(renderer) => renderer.render_inline(text),
                None => text.to_string(),
            }),
        };

        let container = parse_vocab(&raw.container, Container::parse, EmbedError::InvalidContainer)?;
        let mut alignment =
            parse_vocab(&raw.alignment, Alignment::parse, EmbedError::InvalidAlignment)?;
        let vertical_alignment = parse_vocab(
            &raw.vertical_alignment,
            VerticalAlignment::parse,
            EmbedError::InvalidVerticalAlignment,
        )?;
        // Inline vertical placement requires inline horizontal flow.
        if let Some(valign) = vertical_alignment {
            if valign != VerticalAlignment::Baseline {
                alignment = Some(Alignment::Inline);
            }
        }

        debug!(service = %raw.service, id = %raw.id, "resolved embed request");

        Ok(ResolvedEmbed {
            config: EmbedConfig {
                service: raw.service,
                id: raw.id,
                width,
                height,
                alignment,
                vertical_alignment,
                container,
                url_args,
                description,
                auto_resize: raw.auto_resize,
            },
            service,
        })
    }
}

/// Validate a closed-vocabulary field; empty means unset
fn parse_vocab<T>(
    value: &str,
    parse: fn(&str) -> Option<T>,
    reject: fn(String) -> EmbedError,
) -> Result<Option<T>, EmbedError> {
    if value.is_empty() {
        return Ok(None);
    }
    match parse(value) {
        Some(parsed) => Ok(Some(parsed)),
        None => Err(reject(value.to_string())),
    }
}

/// Ensure the query string names the embedding host via `parent`, overriding
/// any caller-supplied value
fn inject_parent(url_args: &str, server_name: &str) -> String {
    if url_args.trim().is_empty() {
        return format!("parent={server_name}");
    }
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in form_urlencoded::parse(url_args.as_bytes()) {
        if key != "parent" {
            serializer.append_pair(&key, &value);
        }
    }
    serializer.append_pair("parent", server_name);
    serializer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver_fixtures() -> (ServiceRegistry, HostConfig) {
        (ServiceRegistry::with_builtin_services(), HostConfig::default())
    }

    #[test]
    fn test_inject_parent_into_empty_args() {
        assert_eq!(inject_parent("", "localhost"), "parent=localhost");
        assert_eq!(inject_parent("  ", "wiki.example.org"), "parent=wiki.example.org");
    }

    #[test]
    fn test_inject_parent_preserves_existing_args() {
        let injected = inject_parent("t=30", "localhost");
        assert_eq!(injected, "t=30&parent=localhost");
    }

    #[test]
    fn test_inject_parent_overrides_existing_parent() {
        let injected = inject_parent("parent=evil.example&t=30", "localhost");
        assert_eq!(injected, "t=30&parent=localhost");
    }

    #[test]
    fn test_missing_id_fails() {
        let (registry, host) = resolver_fixtures();
        let resolver = Resolver::new(&registry, &host);
        let err = resolver.resolve(&["youtube"]).unwrap_err();
        assert_eq!(err, EmbedError::MissingParams);
    }

    #[test]
    fn test_missing_service_fails() {
        let (registry, host) = resolver_fixtures();
        let resolver = Resolver::new(&registry, &host);
        let err = resolver.resolve(&[]).unwrap_err();
        assert_eq!(err, EmbedError::MissingParams);
        let err = resolver.resolve(&["", "abc"]).unwrap_err();
        assert_eq!(err, EmbedError::MissingParams);
    }

    #[test]
    fn test_unknown_service_fails() {
        let (registry, host) = resolver_fixtures();
        let resolver = Resolver::new(&registry, &host);
        let err = resolver.resolve(&["myspace", "abc"]).unwrap_err();
        assert_eq!(err, EmbedError::UnknownService("myspace".to_string()));
    }

    #[test]
    fn test_disabled_service_fails_before_lookup() {
        let registry = ServiceRegistry::with_builtin_services();
        let host = HostConfig::default().with_enabled_services(vec!["vimeo".to_string()]);
        let resolver = Resolver::new(&registry, &host);
        let err = resolver.resolve(&["youtube", "dQw4w9WgXcQ"]).unwrap_err();
        assert_eq!(err, EmbedError::DisabledService("youtube".to_string()));
    }

    #[test]
    fn test_valignment_forces_inline_alignment() {
        let (registry, host) = resolver_fixtures();
        let resolver = Resolver::new(&registry, &host);
        let resolved = resolver
            .resolve(&["youtube", "dQw4w9WgXcQ", "left", "", "", "", "", "", "", "middle"])
            .expect("Should resolve");
        assert_eq!(resolved.config.alignment, Some(Alignment::Inline));
        assert_eq!(
            resolved.config.vertical_alignment,
            Some(VerticalAlignment::Middle)
        );
    }

    #[test]
    fn test_baseline_valignment_keeps_alignment() {
        let (registry, host) = resolver_fixtures();
        let resolver = Resolver::new(&registry, &host);
        let resolved = resolver
            .resolve(&["youtube", "dQw4w9WgXcQ", "left", "valignment=baseline"])
            .expect("Should resolve");
        assert_eq!(resolved.config.alignment, Some(Alignment::Left));
    }

    #[test]
    fn test_invalid_enum_values_fail() {
        let (registry, host) = resolver_fixtures();
        let resolver = Resolver::new(&registry, &host);
        let err = resolver
            .resolve(&["youtube", "dQw4w9WgXcQ", "alignment=justify"])
            .unwrap_err();
        assert_eq!(err, EmbedError::InvalidAlignment("justify".to_string()));
        let err = resolver
            .resolve(&["youtube", "dQw4w9WgXcQ", "valignment=sub"])
            .unwrap_err();
        assert_eq!(err, EmbedError::InvalidVerticalAlignment("sub".to_string()));
        let err = resolver
            .resolve(&["youtube", "dQw4w9WgXcQ", "container=thumb"])
            .unwrap_err();
        assert_eq!(err, EmbedError::InvalidContainer("thumb".to_string()));
    }

    #[test]
    fn test_twitch_gets_parent_injected() {
        let (registry, host) = resolver_fixtures();
        let resolver = Resolver::new(&registry, &host);
        let resolved = resolver
            .resolve(&["twitch", "some_channel"])
            .expect("Should resolve");
        assert_eq!(resolved.config.url_args, "parent=localhost");
    }

    #[test]
    fn test_twitch_parent_merged_with_args() {
        let (registry, host) = resolver_fixtures();
        let resolver = Resolver::new(&registry, &host);
        let resolved = resolver
            .resolve(&["twitch", "some_channel", "urlargs=foo=bar"])
            .expect("Should resolve");
        assert!(resolved.config.url_args.contains("foo=bar"));
        assert!(resolved.config.url_args.contains("parent=localhost"));
    }

    #[test]
    fn test_description_plain_text_without_renderer() {
        let (registry, host) = resolver_fixtures();
        let resolver = Resolver::new(&registry, &host);
        let resolved = resolver
            .resolve(&["youtube", "dQw4w9WgXcQ", "", "A caption"])
            .expect("Should resolve");
        assert_eq!(resolved.config.description, Some("A caption".to_string()));
    }

    #[test]
    fn test_empty_description_is_none() {
        let (registry, host) = resolver_fixtures();
        let resolver = Resolver::new(&registry, &host);
        let resolved = resolver
            .resolve(&["youtube", "dQw4w9WgXcQ"])
            .expect("Should resolve");
        assert_eq!(resolved.config.description, None);
    }

    struct Uppercaser;

    impl RichTextRenderer for Uppercaser {
        fn render_inline(&self, text: &str) -> String {
            text.to_uppercase()
        }
    }

    #[test]
    fn test_description_uses_rich_text_renderer() {
        let (registry, host) = resolver_fixtures();
        let renderer = Uppercaser;
        let resolver = Resolver::new(&registry, &host).with_rich_text(&renderer);
        let resolved = resolver
            .resolve(&["youtube", "dQw4w9WgXcQ", "", "caption"])
            .expect("Should resolve");
        assert_eq!(resolved.config.description, Some("CAPTION".to_string()));
    }
}
