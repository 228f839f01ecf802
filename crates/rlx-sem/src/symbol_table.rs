//! Flat symbol table: a single un-nested map from name to [`Symbol`],
//! grounded on `symbol_table.c`'s linear-scan array — Rouleaux has no
//! block scoping, so a function body's parameters and a top-level
//! statement's variables share one namespace.

use std::rc::Rc;

use indexmap::IndexMap;
use rlx_lex::{Token, TypeTag};
use rlx_par::Node;

/// A declared name. `token` is kept for "declared here" diagnostics;
/// `function_decl` is a non-owning back-reference to the declaration node,
/// populated only for `TypeTag::Function` symbols (see
/// `resolver::funcs::resolve_function_declaration`), used at call sites to
/// check arity and argument types.
#[derive(Debug)]
pub struct Symbol<'ast> {
    pub token: Token<'ast>,
    pub ty: TypeTag,
    pub is_constant: bool,
    pub function_decl: Option<&'ast Node<'ast>>,
}

impl<'ast> Symbol<'ast> {
    pub fn new(token: Token<'ast>, ty: TypeTag, is_constant: bool) -> Self {
        Self {
            token,
            ty,
            is_constant,
            function_decl: None,
        }
    }
}

/// Maps names to symbols, preserving insertion order; built pre-populated
/// with the two built-in type names.
pub struct SymbolTable<'ast> {
    symbols: IndexMap<&'ast str, Symbol<'ast>>,
}

impl<'ast> SymbolTable<'ast> {
    /// Grounded on `populate_builtin_types`: `float` is inserted before
    /// `int`, both as constants with no declaring source location.
    pub fn with_builtins() -> Self {
        let mut symbols = IndexMap::new();
        symbols.insert("float", Symbol::new(builtin_token("float"), TypeTag::Float, true));
        symbols.insert("int", Symbol::new(builtin_token("int"), TypeTag::Integer, true));
        Self { symbols }
    }

    pub fn get(&self, name: &str) -> Option<&Symbol<'ast>> {
        self.symbols.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    /// Inserts `symbol` under `name`. The caller is responsible for
    /// checking `contains` first — unlike `symbol_table_add`, this never
    /// silently rejects a duplicate, since every call site already needs
    /// to build a specific diagnostic before reaching here.
    pub fn insert(&mut self, name: &'ast str, symbol: Symbol<'ast>) {
        tracing::debug!(
            target: "resolver",
            name,
            ty = ?symbol.ty,
            is_constant = symbol.is_constant,
            "symbol inserted"
        );
        self.symbols.insert(name, symbol);
    }

    pub fn set_function_decl(&mut self, name: &str, decl: &'ast Node<'ast>) {
        if let Some(sym) = self.symbols.get_mut(name) {
            sym.function_decl = Some(decl);
        }
    }
}

fn builtin_token(name: &'static str) -> Token<'static> {
    Token::new(
        rlx_lex::TokenKind::Identifier,
        name,
        rlx_util::Location::new(Rc::from("<builtin>"), 0, 0),
    )
}
