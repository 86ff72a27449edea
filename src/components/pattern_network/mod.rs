//! Interactive canvas network of code patterns and their relationships.

mod api;
mod component;
pub mod config;
mod error;
mod feed;
pub mod render;
pub mod state;
pub mod theme;
mod types;

pub use component::PatternNetwork;
pub use config::{FallbackEdges, NetworkConfig};
pub use error::NetworkError;
pub use theme::Theme;
pub use types::{Pattern, Relationship, RelationshipKind, parse_relationships};
