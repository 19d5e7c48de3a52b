// src/platform/mod.rs

//! Platform layer: the `Driver` trait plus its backend implementations.

pub mod backends;
