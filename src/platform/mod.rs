//! Platform document model and topology generation.
//!
//! `types` defines the records that make up a platform description
//! (hosts, links, routes, the owning zone) and their XML form; `full_mesh`
//! builds the fully-connected topology from a [`crate::config::PlatformConfig`].

pub mod full_mesh;
pub mod types;

pub use full_mesh::build_full_mesh;
pub use types::{Host, Link, Platform, Route, RoutingMode, SharingPolicy, Zone};
