//! Test fixtures for arrkit development.
//!
//! Seeded random buffers (so proptest-free tests and benches stay
//! reproducible) and a handful of fixed edge-case buffers.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    edge_case_i32, i32_as_bytes, i32_from_bytes, random_f32, random_i32, random_i32_in, random_typed,
};
