//! Type resolution: a single recursive walk over the AST that assigns
//! every node a [`TypeTag`], populating the symbol table as it goes.
//! Grounded node-for-node on `resolve_types` in `type_info.c`; see `decl`
//! and `funcs` for the declaration and function-related cases.

mod decl;
mod funcs;

use rlx_lex::TypeTag;
use rlx_par::{Node, NodePayload};

use crate::error::{SemanticError, SemanticResult};
use crate::symbol_table::SymbolTable;

/// Walks an AST assigning types, against a single flat symbol table.
pub struct Resolver<'ast> {
    pub table: SymbolTable<'ast>,
    error_logged: bool,
}

impl<'ast> Resolver<'ast> {
    pub fn new() -> Self {
        Self {
            table: SymbolTable::with_builtins(),
            error_logged: false,
        }
    }

    /// Resolves `node` and every node beneath it, stamping each with its
    /// type tag. Returns the first error encountered — the resolver does
    /// not attempt to recover and keep checking.
    ///
    /// Logs a `tracing::warn!` at the point the first error is constructed;
    /// `error_logged` keeps that to exactly one event as the error
    /// propagates back up through the recursive calls that produced it.
    pub fn resolve(&mut self, node: &'ast Node<'ast>) -> SemanticResult<TypeTag> {
        let result = self.resolve_inner(node);
        if let Err(ref error) = result {
            if !self.error_logged {
                self.error_logged = true;
                tracing::warn!(target: "resolver", %error, "type error");
            }
        }
        result
    }

    fn resolve_inner(&mut self, node: &'ast Node<'ast>) -> SemanticResult<TypeTag> {
        let ty = match &node.payload {
            NodePayload::Int => TypeTag::Integer,
            NodePayload::Float => TypeTag::Float,
            NodePayload::String => TypeTag::String,
            NodePayload::Comment | NodePayload::StmtEnd | NodePayload::Eof => TypeTag::Unknown,

            NodePayload::Identifier => self.resolve_identifier(node)?,

            NodePayload::Binary { left, right, .. } => self.resolve_binary(node, left, right)?,

            NodePayload::TypeAssign { left, right } => {
                self.resolve_type_assign(node, left, right.as_deref())?
            }
            NodePayload::ValueAssign { left, right } => self.resolve_value_assign(node, left, right)?,
            NodePayload::ConstAssign { left, right } => self.resolve_const_assign(node, left, right)?,

            NodePayload::If {
                condition,
                then_branch,
                else_branch,
            } => self.resolve_if(condition, then_branch, else_branch.as_deref())?,

            NodePayload::While { condition, body } => self.resolve_while(condition, body)?,

            NodePayload::Scope { statements } => self.resolve_many(statements)?,
            NodePayload::ParameterList { items } => self.resolve_many(items)?,

            NodePayload::FunctionDeclaration {
                params,
                return_type,
                body,
            } => self.resolve_function_declaration(params, return_type, body)?,

            NodePayload::FunctionCall { callee, args } => self.resolve_function_call(callee, args)?,

            NodePayload::CallOperator { call } => self.resolve(call)?,
        };
        node.set_resolved_type(ty);
        Ok(ty)
    }

    fn resolve_identifier(&mut self, node: &'ast Node<'ast>) -> SemanticResult<TypeTag> {
        let name = node.token.text;
        match self.table.get(name) {
            Some(sym) => Ok(sym.ty),
            None => Err(SemanticError::UndeclaredSymbol {
                name: name.to_string(),
                location: node.token.location.clone(),
                token_len: name.len(),
            }),
        }
    }

    fn resolve_binary(
        &mut self,
        node: &'ast Node<'ast>,
        left: &'ast Node<'ast>,
        right: &'ast Node<'ast>,
    ) -> SemanticResult<TypeTag> {
        let left_ty = self.resolve(left)?;
        let right_ty = self.resolve(right)?;
        if left_ty == right_ty {
            Ok(left_ty)
        } else {
            Err(SemanticError::OperandTypeMismatch {
                location: node.token.location.clone(),
                token_len: node.token.text.len(),
            })
        }
    }

    fn resolve_if(
        &mut self,
        condition: &'ast Node<'ast>,
        then_branch: &'ast Node<'ast>,
        else_branch: Option<&'ast Node<'ast>>,
    ) -> SemanticResult<TypeTag> {
        // Condition, then the taken branch, so a symbol the branch defines
        // is visible to a sibling else-branch (matches the original's own
        // ordering, plus its "probably not okay" note about that leak).
        self.resolve(condition)?;
        self.resolve(then_branch)?;
        if let Some(else_branch) = else_branch {
            self.resolve(else_branch)?;
        }
        Ok(TypeTag::Unknown)
    }

    fn resolve_while(&mut self, condition: &'ast Node<'ast>, body: &'ast Node<'ast>) -> SemanticResult<TypeTag> {
        self.resolve(condition)?;
        self.resolve(body)?;
        Ok(TypeTag::Unknown)
    }

    fn resolve_many(&mut self, nodes: &'ast [Node<'ast>]) -> SemanticResult<TypeTag> {
        for node in nodes {
            self.resolve(node)?;
        }
        Ok(TypeTag::Unknown)
    }
}

impl<'ast> Default for Resolver<'ast> {
    fn default() -> Self {
        Self::new()
    }
}
