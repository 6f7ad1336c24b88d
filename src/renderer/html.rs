//! HTML wrapper assembly
//!
//! Wraps service-produced markup in the three-container structure the
//! stylesheet targets: an outer block carrying alignment classes and width
//! padding, a middle block carrying the frame styling, and an inner block
//! sized to the player itself. Pure string composition; class and style
//! tokens come from closed vocabularies and the description and inner
//! markup are already sanitized upstream.

use crate::config::HostConfig;
use crate::message::MessageBundle;
use crate::provider::VideoService;
use crate::resolver::{Container, EmbedConfig};

/// Width pad emitted alongside an explicit horizontal alignment
const ALIGNMENT_WIDTH_PAD: u32 = 6;
/// Width pad applied to the outer block as a whole; emitted last, so it is
/// the declaration that takes effect
const OUTER_WIDTH_PAD: u32 = 8;

/// Assemble the final wrapped fragment around the service's inner markup
pub fn assemble(
    config: &EmbedConfig,
    service: &dyn VideoService,
    inner_html: &str,
    host: &HostConfig,
    messages: &MessageBundle,
) -> String {
    let width = service.width();

    let mut outer_classes = String::from("embedvideo");
    let mut outer_style = String::new();
    if let Some(alignment) = config.alignment {
        outer_classes.push_str(" ev_");
        outer_classes.push_str(alignment.as_str());
        outer_style.push_str(&format!("width: {}px; ", width + ALIGNMENT_WIDTH_PAD));
    }
    if let Some(valignment) = config.vertical_alignment {
        outer_classes.push_str(" ev_");
        outer_classes.push_str(valignment.as_str());
    }
    if config.auto_resize {
        outer_classes.push_str(" autoresize");
    }
    outer_style.push_str(&format!("width: {}px;", width + OUTER_WIDTH_PAD));

    let mut middle_classes = String::from("embedvideo-inner");
    if config.container == Some(Container::Frame) {
        middle_classes.push_str(" thumbinner");
    }

    let mut wrap_classes = String::from("embedvideowrap");
    if !host.fetch_external_thumbnails {
        wrap_classes.push_str(" no-fetch");
    }
    wrap_classes.push(' ');
    wrap_classes.push_str(service.name());

    let consent = if host.require_consent {
        consent_overlay(messages)
    } else {
        String::new()
    };

    let caption = match &config.description {
        Some(description) => format!(r#"<div class="thumbcaption">{description}</div>"#),
        None => String::new(),
    };

    format!(
        r#"<div class="{outer_classes}" style="{outer_style}"><div class="{middle_classes}"><div class="{wrap_classes}" style="width: {width}px">{consent}{inner_html}</div>{caption}</div></div>"#
    )
}

/// Overlay gating playback behind an explicit click
fn consent_overlay(messages: &MessageBundle) -> String {
    format!(
        r#"<div class="embedvideo-consent"><div class="embedvideo-consent-message">{}</div></div>"#,
        messages.format("embedvideo_consent_text", &[])
    )
}
