//! # Platformgen - Platform topology generator for SimGrid network simulations
//!
//! This library generates static platform description files (XML) consumed
//! by the SimGrid discrete-event network simulator. A generated platform is
//! a fully-connected network: N hosts in a single routing zone, one
//! loopback link shared by every host's self-route, and one dedicated link
//! per unordered host pair.
//!
//! ## Overview
//!
//! Platformgen exists so simulation campaigns can regenerate their platform
//! files from a handful of scalars instead of checking in hand-edited XML.
//! The output is deterministic: identical parameters always produce a
//! byte-identical document.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - `config`: parameter struct, validation, and wire-format constants
//! - `platform`: typed document model and full-mesh topology generation
//! - `xml`: element tree builder and indented serialization
//! - `generator`: high-level generate-and-write entry point
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use platformgen::config::PlatformConfig;
//! use platformgen::generator::generate_platform_xml;
//! use std::path::Path;
//!
//! let config = PlatformConfig::new(128, 64);
//! generate_platform_xml(&config, Path::new("platform.xml"))?;
//! # Ok::<(), color_eyre::eyre::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Parameter problems are reported as `config::ValidationError`; the
//! binary surfaces them (and I/O failures) through `color_eyre` with
//! context.

pub mod config;
pub mod generator;
pub mod platform;
pub mod xml;
