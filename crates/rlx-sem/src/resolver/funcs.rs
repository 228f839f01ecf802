//! `FUNCTION_DECLARATION` and `FUNCTION_CALL` resolution, grounded on the
//! corresponding cases of `resolve_types` in `type_info.c`.

use rlx_lex::TypeTag;
use rlx_par::{Node, NodePayload};

use crate::error::{SemanticError, SemanticResult};

use super::Resolver;

impl<'ast> Resolver<'ast> {
    /// Parameters first (so they're bound before the body sees them),
    /// then the return type name, then the body. Unlike the original,
    /// which silently returns the parameter list's (successful) result
    /// when the return-type lookup fails — a copy-paste slip, not a
    /// documented behavior — `?` here propagates whichever step actually
    /// failed.
    pub(super) fn resolve_function_declaration(
        &mut self,
        params: &'ast Node<'ast>,
        return_type: &'ast Node<'ast>,
        body: &'ast Node<'ast>,
    ) -> SemanticResult<TypeTag> {
        self.resolve(params)?;
        self.resolve(return_type)?;
        self.resolve(body)?;
        Ok(TypeTag::Function)
    }

    /// Resolves the callee name, checks it names a function, then checks
    /// arity and per-argument types against the declaration's parameter
    /// list reached through the symbol's back-reference.
    pub(super) fn resolve_function_call(
        &mut self,
        callee: &'ast Node<'ast>,
        args: &'ast Node<'ast>,
    ) -> SemanticResult<TypeTag> {
        self.resolve(callee)?;

        let name = callee.token.text;
        let sym = self
            .table
            .get(name)
            .expect("callee resolution above guarantees the symbol exists");
        if sym.ty != TypeTag::Function {
            return Err(SemanticError::NotAFunction {
                location: callee.token.location.clone(),
                token_len: name.len(),
            });
        }
        let decl = sym
            .function_decl
            .expect("a Function-typed symbol always has its declaration back-reference set");

        let NodePayload::FunctionDeclaration { params: decl_params, return_type, .. } = &decl.payload else {
            unreachable!("function_decl always points at a FunctionDeclaration node");
        };
        let NodePayload::ParameterList { items: decl_items } = &decl_params.payload else {
            unreachable!("a function declaration's params are always a ParameterList");
        };
        let NodePayload::ParameterList { items: call_items } = &args.payload else {
            unreachable!("call_args always produces a ParameterList");
        };

        if call_items.len() < decl_items.len() {
            return Err(SemanticError::TooFewArguments {
                got: call_items.len(),
                expected: decl_items.len(),
                location: callee.token.location.clone(),
                token_len: name.len(),
            });
        }
        if call_items.len() > decl_items.len() {
            return Err(SemanticError::TooManyArguments {
                got: call_items.len(),
                expected: decl_items.len(),
                location: callee.token.location.clone(),
                token_len: name.len(),
            });
        }

        for (decl_param, call_arg) in decl_items.iter().zip(call_items.iter()) {
            let call_ty = self.resolve(call_arg)?;
            let decl_ty = decl_param
                .resolved_type()
                .expect("declaration parameters are resolved before any call site is reachable");
            if decl_ty != call_ty {
                return Err(SemanticError::ArgumentTypeMismatch {
                    location: call_arg.token.location.clone(),
                    token_len: call_arg.token.text.len(),
                });
            }
        }

        Ok(return_type.resolved_type().unwrap_or(TypeTag::Unknown))
    }
}

#[cfg(test)]
mod tests {
    use rlx_lex::Lexer;
    use rlx_par::Parser;

    use super::super::Resolver;
    use crate::error::SemanticError;
    use rlx_lex::TypeTag;

    fn resolve(src: &str) -> crate::error::SemanticResult<TypeTag> {
        let ast = Parser::new(Lexer::new("t.rlx", src)).parse_file().unwrap();
        Resolver::new().resolve(&ast)
    }

    #[test]
    fn declaring_and_calling_a_function() {
        let ty = resolve("add :: (a: int, b: int) -> int { x := a + b; }; call add(1, 2);").unwrap();
        assert_eq!(ty, TypeTag::Unknown); // top-level Scope's own type
    }

    #[test]
    fn calling_something_that_is_not_a_function() {
        let err = resolve("x := 1; call x(1);").unwrap_err();
        assert!(matches!(err, SemanticError::NotAFunction { .. }));
    }

    #[test]
    fn too_few_arguments() {
        let err = resolve("add :: (a: int, b: int) -> int { x := a + b; }; call add(1);").unwrap_err();
        assert!(matches!(err, SemanticError::TooFewArguments { expected: 2, got: 1, .. }));
    }

    #[test]
    fn too_many_arguments() {
        let err = resolve("add :: (a: int, b: int) -> int { x := a + b; }; call add(1, 2, 3);").unwrap_err();
        assert!(matches!(err, SemanticError::TooManyArguments { expected: 2, got: 3, .. }));
    }

    #[test]
    fn argument_type_mismatch() {
        let err = resolve("add :: (a: int, b: int) -> int { x := a + b; }; call add(1, 2.0);").unwrap_err();
        assert!(matches!(err, SemanticError::ArgumentTypeMismatch { .. }));
    }

    #[test]
    fn zero_parameter_function_call() {
        resolve("main :: () -> int { x := 1; }; call main();").unwrap();
    }
}
