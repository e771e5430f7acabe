//! Core processing building blocks: aspect resize, letterboxing, grid
//! planning, title rendering, and mosaic composition. These are internal
//! primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
