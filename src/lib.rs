//! video-embed - wiki video-embed directives rendered as HTML fragments
//!
//! This library resolves a positional/named argument list (a service name
//! followed by `key=value` pairs or bare values) into a validated
//! configuration and renders it as a self-contained HTML fragment. Malformed
//! requests render an inline error box instead of failing, so the host
//! pipeline always receives well-formed output.
//!
//! # Example
//!
//! ```rust
//! use video_embed::render;
//!
//! let output = render(&["youtube", "dQw4w9WgXcQ"]);
//! assert!(output.html.contains("embedvideo"));
//! assert!(output.no_parse);
//! ```

pub mod config;
pub mod error;
pub mod message;
pub mod provider;
pub mod renderer;
pub mod resolver;

pub use config::HostConfig;
pub use error::EmbedError;
pub use message::MessageBundle;
pub use provider::{ServiceRegistry, VideoService};
pub use resolver::{
    Alignment, Container, EmbedConfig, RawArgs, ResolvedEmbed, Resolver, RichTextRenderer,
    VerticalAlignment,
};

use tracing::debug;

/// Presentation asset the host must load for any rendered embed
pub const STYLES_RESOURCE: &str = "ext.videoembed.styles";
/// Additional asset backing the consent overlay
pub const CONSENT_RESOURCE: &str = "ext.videoembed.consent";

/// Final output record handed back to the host
///
/// Both success and error output are literal HTML the host must not
/// re-parse. `resources` names the presentation assets the host should
/// schedule for the current output context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedOutput {
    /// The rendered fragment or error box
    pub html: String,
    /// The host must not re-parse the fragment as markup source
    pub no_parse: bool,
    /// The fragment is literal HTML
    pub is_html: bool,
    /// Presentation assets required by the fragment
    pub resources: Vec<&'static str>,
}

impl EmbedOutput {
    fn fragment(html: String, resources: Vec<&'static str>) -> Self {
        Self {
            html,
            no_parse: true,
            is_html: true,
            resources,
        }
    }

    fn error(html: String) -> Self {
        Self::fragment(html, vec![])
    }
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Host lookups: allow-list, consent gate, thumbnail policy, server name
    pub host: HostConfig,
    /// Message bundle for error and overlay text
    pub messages: MessageBundle,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            host: HostConfig::default(),
            messages: MessageBundle::default(),
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the host configuration
    pub fn with_host(mut self, host: HostConfig) -> Self {
        self.host = host;
        self
    }

    /// Set the message bundle
    pub fn with_messages(mut self, messages: MessageBundle) -> Self {
        self.messages = messages;
        self
    }
}

/// Render a directive argument list with default configuration
///
/// This is the main entry point for the library. It resolves the arguments
/// against the built-in service registry and wraps the service's markup, or
/// renders an inline error box.
///
/// # Example
///
/// ```rust
/// use video_embed::render;
///
/// let output = render(&["youtube", "dQw4w9WgXcQ", "center", "", "400x300"]);
/// assert!(output.html.contains("ev_center"));
///
/// let output = render(&["youtube"]);
/// assert!(output.html.contains("errorbox"));
/// ```
pub fn render(args: &[&str]) -> EmbedOutput {
    render_with_config(args, &RenderConfig::default())
}

/// Render a directive argument list with custom configuration
pub fn render_with_config(args: &[&str], config: &RenderConfig) -> EmbedOutput {
    let registry = ServiceRegistry::with_builtin_services();
    render_embed(args, &registry, config, None)
}

/// Render with a caller-supplied registry and optional rich-text renderer
/// for descriptions
pub fn render_embed(
    args: &[&str],
    registry: &ServiceRegistry,
    config: &RenderConfig,
    rich_text: Option<&dyn RichTextRenderer>,
) -> EmbedOutput {
    let mut resolver = Resolver::new(registry, &config.host);
    if let Some(renderer) = rich_text {
        resolver = resolver.with_rich_text(renderer);
    }

    let resolved = match resolver.resolve(args) {
        Ok(resolved) => resolved,
        Err(err) => return EmbedOutput::error(err.to_error_box(&config.messages)),
    };

    let Some(inner) = resolved.service.html() else {
        let err = EmbedError::NoMarkup(resolved.config.service.clone());
        return EmbedOutput::error(err.to_error_box(&config.messages));
    };

    let html = renderer::assemble(
        &resolved.config,
        resolved.service.as_ref(),
        &inner,
        &config.host,
        &config.messages,
    );

    let mut resources = vec![STYLES_RESOURCE];
    if config.host.require_consent {
        resources.push(CONSENT_RESOURCE);
    }

    debug!(service = %resolved.config.service, "assembled embed fragment");

    EmbedOutput::fragment(html, resources)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_simple_embed() {
        let output = render(&["youtube", "dQw4w9WgXcQ"]);
        assert!(output.html.starts_with(r#"<div class="embedvideo"#));
        assert!(output.html.contains("youtube.com/embed/dQw4w9WgXcQ"));
        assert!(output.no_parse);
        assert!(output.is_html);
        assert_eq!(output.resources, vec![STYLES_RESOURCE]);
    }

    #[test]
    fn test_render_missing_id_yields_error_box() {
        let output = render(&["youtube"]);
        assert!(output.html.starts_with(r#"<div class="errorbox">"#));
        assert!(output.no_parse);
        assert!(output.is_html);
        assert!(output.resources.is_empty());
    }

    #[test]
    fn test_render_unknown_service_yields_error_box() {
        let output = render(&["myspace", "abc"]);
        assert!(output.html.contains("errorbox"));
        assert!(output.html.contains("myspace"));
    }

    #[test]
    fn test_render_invalid_id_yields_error_box() {
        let output = render(&["youtube", "not a valid id"]);
        assert!(output.html.contains("errorbox"));
    }

    #[test]
    fn test_render_with_alignment_and_dimensions() {
        let output = render(&["youtube", "dQw4w9WgXcQ", "center", "", "400x300"]);
        assert!(output.html.contains("ev_center"));
        assert!(output.html.contains("width: 408px;"));
        assert!(output.html.contains(r#"width="400" height="300""#));
    }

    #[test]
    fn test_render_with_caption() {
        let output = render(&["youtube", "dQw4w9WgXcQ", "", "A short film"]);
        assert!(output
            .html
            .contains(r#"<div class="thumbcaption">A short film</div>"#));
    }

    #[test]
    fn test_render_with_consent_gate() {
        let config =
            RenderConfig::new().with_host(HostConfig::default().with_require_consent(true));
        let output = render_with_config(&["youtube", "dQw4w9WgXcQ"], &config);
        assert!(output.html.contains("embedvideo-consent"));
        assert_eq!(output.resources, vec![STYLES_RESOURCE, CONSENT_RESOURCE]);
    }

    #[test]
    fn test_render_disabled_service() {
        let config = RenderConfig::new()
            .with_host(HostConfig::default().with_enabled_services(vec!["vimeo".to_string()]));
        let output = render_with_config(&["youtube", "dQw4w9WgXcQ"], &config);
        assert!(output.html.contains("(as it is disabled)"));
    }

    #[test]
    fn test_render_no_markup_yields_unknown_error() {
        struct Mute;

        impl VideoService for Mute {
            fn name(&self) -> &str {
                "mute"
            }
            fn set_width(&mut self, _width: Option<u32>) {}
            fn set_height(&mut self, _height: Option<u32>) {}
            fn set_video_id(&mut self, _id: &str) -> bool {
                true
            }
            fn set_url_args(&mut self, _args: &str) -> bool {
                true
            }
            fn width(&self) -> u32 {
                640
            }
            fn height(&self) -> u32 {
                360
            }
            fn html(&self) -> Option<String> {
                None
            }
        }

        let mut registry = ServiceRegistry::new();
        registry.register("mute", || Box::new(Mute));
        let config = RenderConfig::default();
        let output = render_embed(&["mute", "abc"], &registry, &config, None);
        assert!(output.html.contains("errorbox"));
        assert!(output.html.contains("produced no embeddable markup"));
    }
}
