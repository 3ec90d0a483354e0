//! Page assembly and site configuration for the shutter gallery.
//!
//! Handlers render a central content fragment with `shutter-template` and
//! hand it to a [`PageAssembler`], which renders the page chrome (header,
//! navigation, footer) against a shared context and concatenates the pieces
//! in the fixed order header, navigation, content, footer.
//!
//! [`SiteConfig`] is the key-value configuration object supplying the theme
//! name and site paths, loaded from a TOML file.

pub mod assemble;
pub mod config;

pub use assemble::{PageAssembler, PageLayout};
pub use config::{ConfigError, SiteConfig};
