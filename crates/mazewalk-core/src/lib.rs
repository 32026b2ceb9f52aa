//! Mazewalk Core Library
//!
//! Perfect maze generation with Wilson's loop-erased random walk, plus the
//! depth-first verifier that proves the result is a spanning tree.

pub mod config;
pub mod error;
pub mod format;
pub mod generator;
pub mod graph;
pub mod logging;
pub mod render;
pub mod topology;
pub mod walk;
