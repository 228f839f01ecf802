//! rlx-util - shared types used by every phase of the Rouleaux front end.
//!
//! This crate holds the pieces that don't belong to any single phase:
//! source-location bookkeeping (`Location`, `SourceFile`), the diagnostic
//! `Handler` used to report the first error encountered during a
//! compilation, and the crate-spanning `UtilError` type.
//!
//! Each phase (`rlx-lex`, `rlx-par`, `rlx-sem`) defines its own error enum;
//! this crate only provides the common vocabulary they're built from.

pub mod diagnostic;
pub mod error;
pub mod location;
pub mod source;

pub use diagnostic::{Diagnostic, Handler};
pub use error::{UtilError, UtilResult};
pub use location::Location;
pub use source::SourceFile;
