//! Element kinds, typed buffers, and array operations for arrkit.
//!
//! This is the safe half of the workspace. Every operation takes a slice
//! or a [`TypedBuffer`] and reports misuse as an [`ArrayError`]; the C ABI
//! in `arrkit-ffi` converts raw pointers into these types once, at the
//! boundary.
//!
//! - [`sequence`]: index sequences ([`generate`], [`fill`]) and [`fibonacci`]
//! - [`mutate`]: [`decrement_all`], [`decrement_typed`], [`update`]
//! - [`order`]: [`sort`] under a named [`Comparator`]
//! - [`shared`]: the scoped process-wide buffer ([`generate_static`])

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod error;
pub mod kind;
pub mod mutate;
pub mod order;
pub mod report;
pub mod sequence;
pub mod shared;

pub use buffer::TypedBuffer;
pub use config::{ReportTarget, SurfaceConfig};
pub use error::ArrayError;
pub use kind::{Element, ElementKind};
pub use mutate::{decrement_all, decrement_prefix, decrement_typed, decrement_typed_named, update};
pub use order::{sort, sort_bytes, sort_prefix, Comparator};
pub use report::{NullReporter, Reporter, StderrReporter, StdoutReporter};
pub use sequence::{fibonacci, fill, generate};
pub use shared::{generate_static, with_static, StaticBufferGuard, STATIC_LEN};
