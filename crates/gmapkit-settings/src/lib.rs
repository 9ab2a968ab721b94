//! GMapKit Settings Crate
//!
//! Configuration for route drawing. Settings arrive as TOML or JSON text from
//! whatever owns the application's configuration; this crate parses,
//! defaults and validates them but never touches the filesystem.

pub mod config;
pub mod error;

pub use config::{RouteSettings, StrokeSettings};
pub use error::{SettingsError, SettingsResult};
