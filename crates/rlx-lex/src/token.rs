//! Token model: kind enumeration, literal values, and the `Token` type
//! itself.

use std::cell::Cell;

use rlx_util::Location;

/// Stable token-kind enumeration: values are fixed across releases since
/// tests and error messages depend on them.
///
/// Single-character tokens carry their ASCII code as the discriminant, so
/// that (for example) `TokenKind::Plus as i32 == b'+' as i32`. This mirrors
/// the original C `token_type` enum, which used the same numbering scheme
/// directly as a table index.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Invalid = 0,
    KwFor = 1,
    KwWhile = 2,
    KwDo = 3,
    KwIf = 4,
    KwElse = 5,
    KwNull = 6,
    KwCall = 7,
    Identifier = 8,
    Percent = b'%' as i32,
    LParen = b'(' as i32,
    RParen = b')' as i32,
    Star = b'*' as i32,
    Plus = b'+' as i32,
    Comma = b',' as i32,
    Minus = b'-' as i32,
    Slash = b'/' as i32,
    Colon = b':' as i32,
    Semicolon = b';' as i32,
    Less = b'<' as i32,
    Equals = b'=' as i32,
    Greater = b'>' as i32,
    LBrace = b'{' as i32,
    RBrace = b'}' as i32,
    Bang = b'!' as i32,
    Hash = b'#' as i32,
    Dollar = b'$' as i32,
    Amp = b'&' as i32,
    SQuote = b'\'' as i32,
    Dot = b'.' as i32,
    Question = b'?' as i32,
    At = b'@' as i32,
    LBracket = b'[' as i32,
    Backslash = b'\\' as i32,
    RBracket = b']' as i32,
    Caret = b'^' as i32,
    Backtick = b'`' as i32,
    Pipe = b'|' as i32,
    Tilde = b'~' as i32,
    /// `->`. One past `~` (ASCII 126), the highest punctuation byte.
    Arrow = 127,
    IntegerLiteral = 128,
    FloatLiteral = 129,
    StringLiteral = 130,
    LineComment = 131,
    BlockComment = 132,
    Eof = 133,
}

impl TokenKind {
    pub fn is_binop(self) -> bool {
        matches!(
            self,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Percent
                | TokenKind::Less
                | TokenKind::Greater
        )
    }
}

/// Looks up `text` in the fixed keyword table, returning the matching
/// keyword kind if any.
pub fn keyword_from_ident(text: &str) -> Option<TokenKind> {
    match text {
        "for" => Some(TokenKind::KwFor),
        "while" => Some(TokenKind::KwWhile),
        "do" => Some(TokenKind::KwDo),
        "if" => Some(TokenKind::KwIf),
        "else" => Some(TokenKind::KwElse),
        "null" => Some(TokenKind::KwNull),
        "call" => Some(TokenKind::KwCall),
        _ => None,
    }
}

/// A literal value carried by number tokens.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LiteralValue {
    None,
    UInt(u64),
    Float(f64),
}

/// A type tag assigned by the resolver. Lives alongside the token model,
/// not the resolver itself, since `Token` carries a slot for it from
/// construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeTag {
    Unknown,
    Integer,
    Float,
    String,
    Function,
}

/// A single lexical token: a value object cheaply cloned by the lexer and
/// parser. `text` is a zero-copy view into the source buffer; it must not
/// outlive it.
///
/// `resolved_type` is a `Cell`, not a plain field: the resolver walks the
/// AST through shared references (so that a `Symbol` can hold a `&'ast`
/// back-reference to a function's declaration node at the same time other
/// parts of the tree are being resolved), and needs to stamp a type onto a
/// token it only has `&` access to.
#[derive(Clone, Debug, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub location: Location,
    pub literal: LiteralValue,
    pub resolved_type: Cell<Option<TypeTag>>,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str, location: Location) -> Self {
        Self {
            kind,
            text,
            location,
            literal: LiteralValue::None,
            resolved_type: Cell::new(None),
        }
    }

    pub fn with_literal(mut self, literal: LiteralValue) -> Self {
        self.literal = literal;
        self
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_char_kinds_match_ascii() {
        assert_eq!(TokenKind::Plus as i32, b'+' as i32);
        assert_eq!(TokenKind::LParen as i32, b'(' as i32);
        assert_eq!(TokenKind::Less as i32, b'<' as i32);
        assert_eq!(TokenKind::At as i32, b'@' as i32);
        assert_eq!(TokenKind::Tilde as i32, b'~' as i32);
    }

    #[test]
    fn keyword_table_matches_reserved_words() {
        assert_eq!(keyword_from_ident("for"), Some(TokenKind::KwFor));
        assert_eq!(keyword_from_ident("while"), Some(TokenKind::KwWhile));
        assert_eq!(keyword_from_ident("do"), Some(TokenKind::KwDo));
        assert_eq!(keyword_from_ident("if"), Some(TokenKind::KwIf));
        assert_eq!(keyword_from_ident("else"), Some(TokenKind::KwElse));
        assert_eq!(keyword_from_ident("null"), Some(TokenKind::KwNull));
        assert_eq!(keyword_from_ident("call"), Some(TokenKind::KwCall));
        assert_eq!(keyword_from_ident("calls"), None);
    }

    #[test]
    fn is_binop_covers_all_seven_operators() {
        for k in [
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Less,
            TokenKind::Greater,
        ] {
            assert!(k.is_binop());
        }
        assert!(!TokenKind::Equals.is_binop());
    }
}
