//! rlx-sem - the Rouleaux symbol table and type resolver.
//!
//! A single flat [`SymbolTable`] (no nested scopes) and a recursive
//! [`Resolver`] walk that assigns every AST node a [`rlx_lex::TypeTag`],
//! grounded node-for-node on `type_info.c`'s `resolve_types` (see
//! `resolver` for the per-kind rules).

mod error;
mod resolver;
mod symbol_table;

pub use error::{SemanticError, SemanticResult};
pub use resolver::Resolver;
pub use symbol_table::{Symbol, SymbolTable};
