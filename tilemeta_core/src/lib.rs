//! Metadata for pre-rendered vector tile sets.
//!
//! Resolves where a tile set published by a PMTiles server (or stored in a
//! local tile directory) keeps its descriptor, and reshapes that descriptor
//! into the views a tiles API serves:
//! - [`HtmlMetadata`] for the HTML tiles page,
//! - [`TileJson`](tilejson::TileJson) for `?f=tilejson`.
//!
//! The resolver talks to its data through [`TileProviderTrait`];
//! [`BaseTileProvider`] implements it with `reqwest` and the local filesystem.

mod error;
pub use error::{ProviderError, Result};

mod location;
pub use location::{DataLocation, url_join};

pub mod provider;
pub use provider::{BaseTileProvider, ProviderConfig, TileProviderTrait};

mod resolver;
pub use resolver::*;

pub mod tilejson;
