//! End-to-end render tests: directive arguments to final fragment

use pretty_assertions::assert_eq;

use video_embed::{render, render_with_config, HostConfig, RenderConfig};

#[test]
fn centered_embed_full_fragment() {
    let output = render(&["youtube", "dQw4w9WgXcQ", "center", "", "400x300"]);
    assert_eq!(
        output.html,
        concat!(
            r#"<div class="embedvideo ev_center autoresize" style="width: 406px; width: 408px;">"#,
            r#"<div class="embedvideo-inner">"#,
            r#"<div class="embedvideowrap youtube" style="width: 400px">"#,
            r#"<iframe src="https://www.youtube.com/embed/dQw4w9WgXcQ" width="400" height="300" frameborder="0" allowfullscreen="true"></iframe>"#,
            r#"</div></div></div>"#,
        )
    );
    assert!(output.no_parse);
    assert!(output.is_html);
}

#[test]
fn disabled_service_error_wording() {
    let config = RenderConfig::new()
        .with_host(HostConfig::default().with_enabled_services(vec!["youtube".to_string()]));
    let output = render_with_config(&["badservice", "x"], &config);
    insta::assert_snapshot!(
        output.html,
        @r#"<div class="errorbox">unrecognized video service &quot;badservice&quot; (as it is disabled)</div>"#
    );
}

#[test]
fn missing_params_error_fragment() {
    let output = render(&["youtube"]);
    insta::assert_snapshot!(
        output.html,
        @r#"<div class="errorbox">a video service and a video ID are both required</div>"#
    );
}

#[test]
fn consent_gate_overlays_player() {
    let config = RenderConfig::new().with_host(HostConfig::default().with_require_consent(true));
    let output = render_with_config(&["youtube", "dQw4w9WgXcQ"], &config);

    let consent_at = output
        .html
        .find(r#"<div class="embedvideo-consent">"#)
        .expect("consent overlay present");
    let iframe_at = output.html.find("<iframe").expect("player present");
    assert!(consent_at < iframe_at, "overlay must precede the player");
    assert!(output
        .html
        .contains("Click to load content from an external video service"));
}

#[test]
fn caption_rendered_after_player() {
    let output = render(&["youtube", "dQw4w9WgXcQ", "", "A short film"]);
    let caption_at = output
        .html
        .find(r#"<div class="thumbcaption">A short film</div>"#)
        .expect("caption present");
    let iframe_at = output.html.find("<iframe").expect("player present");
    assert!(iframe_at < caption_at, "caption follows the player");
}

#[test]
fn frame_container_and_no_fetch_tokens() {
    let config = RenderConfig::new()
        .with_host(HostConfig::default().with_fetch_external_thumbnails(false));
    let output = render_with_config(&["youtube", "dQw4w9WgXcQ", "container=frame"], &config);
    assert!(output.html.contains("thumbinner"));
    assert!(output.html.contains("embedvideowrap no-fetch youtube"));
}

#[test]
fn vertical_alignment_classes() {
    let output = render(&["youtube", "dQw4w9WgXcQ", "valignment=middle"]);
    assert!(output.html.contains("ev_middle"));
    // Non-baseline vertical alignment forces inline horizontal flow.
    assert!(output.html.contains("ev_inline"));
}

#[test]
fn default_width_pads() {
    // Default service width is 640: outer block total is 648.
    let output = render(&["youtube", "dQw4w9WgXcQ"]);
    assert!(output.html.contains("width: 648px;"));
    assert!(output.html.contains(r#"style="width: 640px""#));
    // No alignment, so no 646px alignment pad.
    assert!(!output.html.contains("646px"));
}

#[test]
fn error_output_is_still_literal_html() {
    let output = render(&["youtube", "bad id"]);
    assert!(output.html.starts_with(r#"<div class="errorbox">"#));
    assert!(output.no_parse);
    assert!(output.is_html);
    assert!(output.resources.is_empty());
}
