//! Testing infrastructure for postview integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: Isolated config directory and CLI invocation
//! - `fixtures`: Sample posts and their JSON encodings
//! - `server`: A local HTTP server that serves a canned response
//! - `source`: An in-memory `PostSource` with injectable delay and failures

pub mod fixtures;
pub mod server;
pub mod source;
pub mod world;

pub use server::{FixtureResponse, FixtureServer};
pub use source::StaticSource;
pub use world::{CliResult, TestWorld};
