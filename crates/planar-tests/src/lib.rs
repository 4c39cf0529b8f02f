//! Integration tests for planar-rs crates.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between `planar-core` and `planar-ops`: whole-buffer HSV round
//! trips, hue rotation pipelines, and the accessor boundary policies
//! as seen through the transforms.
