//! Configuration of the collections whose tile metadata is rendered.
//!
//! - [`Config`]: top-level YAML loader
//! - [`ServerConfig`]: public URL of the tiles API
//! - [`ResourceConfig`]: one collection and its providers

mod main;
mod resource;
mod server;

pub use main::Config;
pub use resource::{DEFAULT_TILE_MATRIX_SET, ResourceConfig};
pub use server::{DEFAULT_SERVER_URL, ServerConfig};
