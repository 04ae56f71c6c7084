//! Import remapping for exported interface trees.
//!
//! Interface sources inside a project import each other through remapped
//! aliases (e.g. `@interfaces/`). Once the tree is copied somewhere else those
//! aliases no longer resolve. This crate rewrites every import line into a
//! relative reference computed from the file's own location, and collapses
//! references that pass through a package manager directory into bare module
//! specifiers.
//!
//! The transformation is purely textual and line based:
//! - Only lines starting with `import ` are considered
//! - The first remapping whose origin occurs in the line wins
//! - The origin is replaced by a path relative to the file's directory
//! - `node_modules/` references are collapsed
//!
//! # Example
//!
//! ```
//! use import_remapper::{transform_source, RemappingTable, TransformOptions};
//!
//! let table = RemappingTable::parse("@interfaces/=solidity/interfaces/\n");
//! let source = "pragma solidity 0.8.19;\nimport '@interfaces/fees/IFeeManager.sol';";
//!
//! let result = transform_source(
//!     source,
//!     "solidity/interfaces/oracle/IOracle.sol",
//!     &table,
//!     &TransformOptions::default(),
//! );
//!
//! assert_eq!(
//!     result.text,
//!     "pragma solidity 0.8.19;\nimport '../fees/IFeeManager.sol';"
//! );
//! ```

mod classify;
mod error;
mod remapping;
mod rewrite;
mod transform;

pub use classify::is_import_line;
pub use error::RemapError;
pub use remapping::{RemappingEntry, RemappingTable};
pub use rewrite::{collapse_module_path, relative_prefix, rewrite_line};
pub use transform::{
    interface_name, transform_line, transform_source, TransformOptions, TransformedSource,
    DEFAULT_ANCHOR, DEFAULT_MODULES_MARKER,
};
