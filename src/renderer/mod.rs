//! HTML assembly for resolved embeds
//!
//! This module takes a validated embed configuration plus the service's
//! inner markup and produces the final wrapped fragment.

pub mod html;

pub use html::assemble;
