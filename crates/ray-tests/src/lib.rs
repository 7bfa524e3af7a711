//! Integration tests for ray-rs crates.
//!
//! Renders images through `ray-core`, writes them with `ray-io` and decodes
//! the files back with the `png` crate.
