//! Foundation module - small utilities shared across the crate

pub mod logging;
