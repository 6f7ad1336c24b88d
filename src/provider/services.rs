//! Built-in video services
//!
//! Each service is described by a static [`ServiceDefinition`]: its embed
//! URL shape, default dimensions, and the pattern a valid video ID must
//! match. One generic handle implementation, [`DefinedService`], is driven
//! by the definition; services with behavior the definition cannot express
//! would implement [`VideoService`](super::VideoService) directly.

use url::form_urlencoded;

use super::VideoService;

/// Width applied when the request does not supply one
pub const DEFAULT_WIDTH: u32 = 640;
/// Accepted width range; values outside are clamped
const MIN_WIDTH: u32 = 100;
const MAX_WIDTH: u32 = 3840;
/// Accepted height range; values outside are clamped
const MIN_HEIGHT: u32 = 56;
const MAX_HEIGHT: u32 = 2160;

/// Shape of a valid video identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdRule {
    /// Identifier over `[A-Za-z0-9_-]` with a length range
    Token { min: usize, max: usize },
    /// Decimal digits only
    Numeric,
    /// Account or channel names: `[A-Za-z0-9_]`, 3 to 25 characters
    Channel,
}

impl IdRule {
    /// Whether an ID matches this rule
    pub fn matches(&self, id: &str) -> bool {
        if id.is_empty() {
            return false;
        }
        match self {
            IdRule::Token { min, max } => {
                id.len() >= *min
                    && id.len() <= *max
                    && id
                        .bytes()
                        .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
            }
            IdRule::Numeric => id.bytes().all(|b| b.is_ascii_digit()),
            IdRule::Channel => {
                id.len() >= 3
                    && id.len() <= 25
                    && id.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
            }
        }
    }
}

/// Static description of a video service family
#[derive(Debug, Clone, Copy)]
pub struct ServiceDefinition {
    /// Service name, as used in directives and the registry
    pub name: &'static str,
    /// Embed URL template; `{id}` is replaced with the validated video ID
    pub url_template: &'static str,
    /// Width over height, used to derive a missing height
    pub aspect_ratio: f64,
    /// Fixed player height for services that are not video-shaped
    pub default_height: Option<u32>,
    /// Pattern a valid ID must match
    pub id_rule: IdRule,
}

/// The default service set
pub const BUILTIN_SERVICES: [ServiceDefinition; 8] = [
    ServiceDefinition {
        name: "youtube",
        url_template: "https://www.youtube.com/embed/{id}",
        aspect_ratio: 16.0 / 9.0,
        default_height: None,
        id_rule: IdRule::Token { min: 11, max: 11 },
    },
    ServiceDefinition {
        name: "vimeo",
        url_template: "https://player.vimeo.com/video/{id}",
        aspect_ratio: 16.0 / 9.0,
        default_height: None,
        id_rule: IdRule::Numeric,
    },
    ServiceDefinition {
        name: "dailymotion",
        url_template: "https://www.dailymotion.com/embed/video/{id}",
        aspect_ratio: 16.0 / 9.0,
        default_height: None,
        id_rule: IdRule::Token { min: 1, max: 24 },
    },
    ServiceDefinition {
        name: "twitch",
        url_template: "https://player.twitch.tv/?channel={id}",
        aspect_ratio: 16.0 / 9.0,
        default_height: None,
        id_rule: IdRule::Channel,
    },
    ServiceDefinition {
        name: "twitchclip",
        url_template: "https://clips.twitch.tv/embed?clip={id}",
        aspect_ratio: 16.0 / 9.0,
        default_height: None,
        id_rule: IdRule::Token { min: 3, max: 100 },
    },
    ServiceDefinition {
        name: "twitchvod",
        url_template: "https://player.twitch.tv/?video={id}",
        aspect_ratio: 16.0 / 9.0,
        default_height: None,
        id_rule: IdRule::Numeric,
    },
    ServiceDefinition {
        name: "spotifytrack",
        url_template: "https://open.spotify.com/embed/track/{id}",
        aspect_ratio: 16.0 / 9.0,
        default_height: Some(152),
        id_rule: IdRule::Token { min: 22, max: 22 },
    },
    ServiceDefinition {
        name: "spotifyalbum",
        url_template: "https://open.spotify.com/embed/album/{id}",
        aspect_ratio: 16.0 / 9.0,
        default_height: Some(352),
        id_rule: IdRule::Token { min: 22, max: 22 },
    },
];

/// Generic service handle driven by a [`ServiceDefinition`]
#[derive(Debug, Clone)]
pub struct DefinedService {
    definition: ServiceDefinition,
    width: u32,
    height: Option<u32>,
    id: String,
    url_args: String,
}

impl DefinedService {
    /// Create an unconfigured handle for a definition
    pub fn new(definition: ServiceDefinition) -> Self {
        Self {
            definition,
            width: DEFAULT_WIDTH,
            height: None,
            id: String::new(),
            url_args: String::new(),
        }
    }

    /// Embed URL for the configured ID and arguments
    fn embed_url(&self) -> String {
        let mut url = self.definition.url_template.replace("{id}", &self.id);
        if !self.url_args.is_empty() {
            url.push(if url.contains('?') { '&' } else { '?' });
            url.push_str(&self.url_args);
        }
        url
    }
}

impl VideoService for DefinedService {
    fn name(&self) -> &str {
        self.definition.name
    }

    fn set_width(&mut self, width: Option<u32>) {
        self.width = match width {
            Some(width) => width.clamp(MIN_WIDTH, MAX_WIDTH),
            None => DEFAULT_WIDTH,
        };
    }

    fn set_height(&mut self, height: Option<u32>) {
        self.height = height.map(|h| h.clamp(MIN_HEIGHT, MAX_HEIGHT));
    }

    fn set_video_id(&mut self, id: &str) -> bool {
        if !self.definition.id_rule.matches(id) {
            return false;
        }
        self.id = id.to_string();
        true
    }

    fn set_url_args(&mut self, args: &str) -> bool {
        let args = args.trim();
        if args.is_empty() {
            self.url_args.clear();
            return true;
        }
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in form_urlencoded::parse(args.as_bytes()) {
            if key.is_empty() {
                return false;
            }
            serializer.append_pair(&key, &value);
        }
        self.url_args = serializer.finish();
        true
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        if let Some(height) = self.height {
            return height;
        }
        if let Some(fixed) = self.definition.default_height {
            return fixed;
        }
        (self.width as f64 / self.definition.aspect_ratio).round() as u32
    }

    fn html(&self) -> Option<String> {
        if self.id.is_empty() {
            return None;
        }
        Some(format!(
            r#"<iframe src="{}" width="{}" height="{}" frameborder="0" allowfullscreen="true"></iframe>"#,
            self.embed_url(),
            self.width(),
            self.height()
        ))
    }
}
