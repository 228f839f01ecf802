//! `TYPE_ASSIGN`, `VALUE_ASSIGN`, `CONST_ASSIGN` resolution, grounded on
//! the three corresponding cases of `resolve_types` in `type_info.c`.

use rlx_lex::TypeTag;
use rlx_par::{Node, NodePayload};

use crate::error::{SemanticError, SemanticResult};
use crate::symbol_table::Symbol;

use super::Resolver;

impl<'ast> Resolver<'ast> {
    /// `name_node ':' [ type_node ]`. With an explicit type, looks the
    /// type name up, rejects a redeclaration, and inserts the symbol —
    /// always as non-constant, regardless of whether this `TypeAssign` is
    /// under a `VALUE_ASSIGN` or `CONST_ASSIGN`, matching the original's
    /// own "@CompilerBug" admission that it can't see its parent from
    /// here. Without an explicit type, returns `TypeTag::Unknown` and
    /// leaves the declaration to the caller, which knows the
    /// initializer's type.
    pub(super) fn resolve_type_assign(
        &mut self,
        node: &'ast Node<'ast>,
        name_node: &'ast Node<'ast>,
        type_node: Option<&'ast Node<'ast>>,
    ) -> SemanticResult<TypeTag> {
        let Some(type_node) = type_node else {
            return Ok(TypeTag::Unknown);
        };

        let type_name = type_node.token.text;
        let ty = match self.table.get(type_name) {
            Some(sym) => sym.ty,
            None => {
                return Err(SemanticError::UnknownType {
                    name: type_name.to_string(),
                    location: type_node.token.location.clone(),
                    token_len: type_name.len(),
                });
            }
        };

        let name = name_node.token.text;
        if let Some(existing) = self.table.get(name) {
            return Err(SemanticError::AlreadyDeclaredExplicit {
                name: name.to_string(),
                declared_at: existing.token.location.clone(),
                location: name_node.token.location.clone(),
                token_len: name.len(),
            });
        }

        self.table.insert(name, Symbol::new(name_node.token.clone(), ty, false));
        name_node.set_resolved_type(ty);
        node.set_resolved_type(ty);
        Ok(ty)
    }

    /// `left '=' right`, where `left` is either a bare identifier
    /// (reassignment to an existing, non-constant variable) or a
    /// `TypeAssign` (a new variable's declaration).
    pub(super) fn resolve_value_assign(
        &mut self,
        node: &'ast Node<'ast>,
        left: &'ast Node<'ast>,
        right: &'ast Node<'ast>,
    ) -> SemanticResult<TypeTag> {
        let right_ty = self.resolve(right)?;

        match &left.payload {
            NodePayload::Identifier => {
                // Resolving a bare identifier here already fails with
                // "Undeclared symbol" if it isn't bound — there is no
                // separate "Undeclared variable" case to reach.
                self.resolve(left)?;
                let name = left.token.text;
                let sym = self
                    .table
                    .get(name)
                    .expect("identifier resolution above guarantees the symbol exists");
                if sym.is_constant {
                    return Err(SemanticError::AssignToConstant {
                        name: name.to_string(),
                        declared_at: sym.token.location.clone(),
                        location: left.token.location.clone(),
                        token_len: name.len(),
                    });
                }
                if sym.ty != right_ty {
                    return Err(SemanticError::ReassignTypeMismatch {
                        name: name.to_string(),
                        location: left.token.location.clone(),
                        token_len: name.len(),
                    });
                }
                Ok(sym.ty)
            }
            NodePayload::TypeAssign { left: name_node, right: type_node } => {
                self.resolve_new_binding(node, left, name_node, type_node.as_deref(), right, right_ty, false)
            }
            _ => unreachable!("the parser only builds VALUE_ASSIGN over Identifier or TypeAssign"),
        }
    }

    /// `TypeAssign ':' right` — a constant binding. `left` must be a
    /// `TypeAssign`; anything else is a parser/grammar-shape violation
    /// the original treats as a hard error rather than a panic.
    pub(super) fn resolve_const_assign(
        &mut self,
        node: &'ast Node<'ast>,
        left: &'ast Node<'ast>,
        right: &'ast Node<'ast>,
    ) -> SemanticResult<TypeTag> {
        let right_ty = self.resolve(right)?;

        let NodePayload::TypeAssign { left: name_node, right: type_node } = &left.payload else {
            return Err(SemanticError::BadConstAssignTarget {
                location: left.token.location.clone(),
                token_len: left.token.text.len(),
            });
        };

        self.resolve_new_binding(node, left, name_node, type_node.as_deref(), right, right_ty, true)
    }

    /// Shared tail of `VALUE_ASSIGN`/`CONST_ASSIGN` once `left` is known
    /// to be a `TypeAssign`: either auto-deduce the type from `right` and
    /// register the symbol, or — when the type was explicit — check it
    /// against `right`'s type. The const form's known-type check is a fix:
    /// the original's `CONST_ASSIGNMENT` case falls through without it.
    #[allow(clippy::too_many_arguments)]
    fn resolve_new_binding(
        &mut self,
        node: &'ast Node<'ast>,
        type_assign: &'ast Node<'ast>,
        name_node: &'ast Node<'ast>,
        type_node: Option<&'ast Node<'ast>>,
        right: &'ast Node<'ast>,
        right_ty: TypeTag,
        is_constant: bool,
    ) -> SemanticResult<TypeTag> {
        let left_ty = self.resolve_type_assign(type_assign, name_node, type_node)?;

        if left_ty != TypeTag::Unknown {
            return if left_ty == right_ty {
                Ok(right_ty)
            } else {
                Err(SemanticError::DeclarationTypeMismatch {
                    name: name_node.token.text.to_string(),
                    location: node.token.location.clone(),
                    token_len: node.token.text.len(),
                })
            };
        }

        let name = name_node.token.text;
        if let Some(existing) = self.table.get(name) {
            return Err(SemanticError::AlreadyDeclaredInferred {
                name: name.to_string(),
                declared_at: existing.token.location.clone(),
                location: name_node.token.location.clone(),
                token_len: name.len(),
            });
        }

        self.table
            .insert(name, Symbol::new(name_node.token.clone(), right_ty, is_constant));
        name_node.set_resolved_type(right_ty);
        type_assign.set_resolved_type(right_ty);
        if right_ty == TypeTag::Function {
            self.table.set_function_decl(name, right);
        }
        Ok(right_ty)
    }
}
