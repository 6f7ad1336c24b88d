//! Video service providers
//!
//! A provider turns a validated video ID into embeddable markup. Handles are
//! looked up by name from the [`ServiceRegistry`], configured field-by-field
//! by the resolver, and discarded after a single render.

pub mod registry;
pub mod services;

pub use registry::ServiceRegistry;
pub use services::{DefinedService, IdRule, ServiceDefinition, BUILTIN_SERVICES};

/// Capability set exposed by a video service handle
pub trait VideoService {
    /// Service name, used as a class token on the inner wrapper
    fn name(&self) -> &str;

    /// Set the requested width; `None` applies the service default.
    /// Out-of-range values are normalized by the service.
    fn set_width(&mut self, width: Option<u32>);

    /// Set the requested height; `None` derives it from the service's
    /// aspect ratio or fixed player height
    fn set_height(&mut self, height: Option<u32>);

    /// Set the video ID. Returns false when the ID does not match the
    /// service's pattern.
    fn set_video_id(&mut self, id: &str) -> bool;

    /// Set extra URL arguments. Returns false when the value cannot form a
    /// query string.
    fn set_url_args(&mut self, args: &str) -> bool;

    /// Effective width after normalization
    fn width(&self) -> u32;

    /// Effective height after normalization
    fn height(&self) -> u32;

    /// Embeddable inner markup; `None` when the handle cannot produce any
    fn html(&self) -> Option<String>;
}
