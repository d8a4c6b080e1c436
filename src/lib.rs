//! # Dtref Core
//!
//! A devicetree reference resolver for generated macro headers.
//!
//! This library provides:
//! - A parser for the flat `#define` namespace the hardware-description
//!   compiler emits at build time
//! - A bidirectional codec between hierarchical node paths and flat macro
//!   keys
//! - Resolution of symbolic references (paths, node labels, aliases) to
//!   canonical device identifiers
//! - Full-namespace enumeration and accessor code generation
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`header`] - Parser for the generated macro header and the path/key
//!   codec
//! - [`tree`] - Node view over the namespace and full-tree enumeration
//! - [`resolve`] - Reference resolvers (path, label, alias, auto)
//! - [`codegen`] - Accessor declaration emission (for okay nodes)
//!
//! ## Usage
//!
//! ```
//! use dtref_core::{header, resolve::{resolve_device_ref, RefKind}};
//!
//! let table = header::parse(
//!     "#define DT_N_S_soc_S_gpio_40000000_EXISTS 1\n\
//!      #define DT_N_S_soc_S_gpio_40000000_ORD 5\n",
//! );
//! let ident = resolve_device_ref(&table, RefKind::Path, "/soc/gpio@40000000").unwrap();
//! assert_eq!(ident, "__device_dts_ord_5");
//! ```
//!
//! ## Resolution Model
//!
//! The source header has no nested structure: the whole topology lives in
//! macro *names* following a fixed convention (`DT_N_S_soc_S_gpio_...`).
//! No tree is ever built in memory. A node is a transient view computed
//! from `(table, path)`; existence, status, ordinal, parent and
//! attributes are each a single key lookup. The table itself is immutable
//! after construction, so every query is a pure function over it and may
//! be repeated freely within one compilation pass.
//!
//! Two references that reach the same node always produce the same
//! canonical identifier, `__device_dts_ord_<ordinal>`.

pub mod codegen;
pub mod error;
pub mod header;
pub mod resolve;
pub mod tree;

// Re-export main types for convenience
pub use error::{DtError, Result};
pub use header::MacroTable;
pub use resolve::{resolve_device_ref, RefKind};
pub use tree::Node;

/// Prefix of every canonical device identifier.
pub const DEVICE_REF_PREFIX: &str = "__device_dts_ord_";
