//! # tilemeta
//!
//! Renders the metadata of pre-rendered vector tile sets, served by a PMTiles
//! server or stored in a local directory, for an OGC API - Tiles frontend.
//!
//! - [`config`]: YAML configuration of the published collections
//! - [`collection::Collection`]: a configured collection with its metadata resolver
//! - [`core`]: locations, TileJSON model, providers and the resolver itself
//!
//! ```rust
//! use tilemeta::{collection::Collection, config::Config};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::from_path(Path::new("../testdata/config.yml")).unwrap();
//!     let collection = Collection::open(&config, "lakes", None).await.unwrap();
//!     let tilejson = collection.tilejson().await.unwrap();
//!     println!("{}", serde_json::to_string_pretty(&tilejson).unwrap());
//! }
//! ```

pub mod collection;
pub mod config;

pub use tilemeta_core as core;
