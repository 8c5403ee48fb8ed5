//! Pattern-level scanning of grammar source text.
//!
//! Finds `import Name1, Name2;` declarations and the `grammar X;` header
//! without a full grammar parse. The scanner is a small [`logos`] token
//! stream that skips whitespace, `//` and `/* */` comments, and
//! single-quoted token literals; everything else it does not recognize is
//! ignored, which keeps extraction tolerant of arbitrary rule bodies.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
#[logos(skip r"/\*[^*]*\*+([^/*][^*]*\*+)*/")]
#[logos(skip r"'([^'\\]|\\.)*'")]
enum Token {
    #[token("import")]
    Import,

    #[token("grammar")]
    Grammar,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    #[token(",")]
    Comma,

    #[token(";")]
    Semi,
}

/// Every grammar name referenced by `import … ;` declarations, in order
/// of appearance, duplicates preserved.
///
/// Names of a declaration are only committed once its closing `;` is
/// seen; a declaration interrupted by foreign tokens is discarded.
pub fn extract_imports(text: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut pending: Vec<String> = Vec::new();
    let mut in_decl = false;

    let mut lex = Token::lexer(text);
    while let Some(tok) = lex.next() {
        match tok {
            Ok(Token::Import) => {
                pending.clear();
                in_decl = true;
            }
            Ok(Token::Ident) if in_decl => pending.push(lex.slice().to_string()),
            Ok(Token::Comma) if in_decl => {}
            Ok(Token::Semi) if in_decl => {
                names.append(&mut pending);
                in_decl = false;
            }
            _ => {
                pending.clear();
                in_decl = false;
            }
        }
    }
    names
}

/// True iff [`extract_imports`] would return at least one entry.
///
/// Short-circuits on the first complete declaration instead of building
/// the full name list.
pub fn has_imports(text: &str) -> bool {
    let mut in_decl = false;
    let mut seen_name = false;

    let mut lex = Token::lexer(text);
    while let Some(tok) = lex.next() {
        match tok {
            Ok(Token::Import) => {
                in_decl = true;
                seen_name = false;
            }
            Ok(Token::Ident) if in_decl => seen_name = true,
            Ok(Token::Comma) if in_decl => {}
            Ok(Token::Semi) if in_decl && seen_name => return true,
            _ => {
                in_decl = false;
                seen_name = false;
            }
        }
    }
    false
}

/// Declared name from the `grammar X;` / `lexer grammar X;` /
/// `parser grammar X;` header, if present.
///
/// The `lexer`/`parser` modifier lexes as a plain identifier and is
/// skipped; only the token after the `grammar` keyword matters.
pub fn grammar_name(text: &str) -> Option<String> {
    let mut lex = Token::lexer(text);
    while let Some(tok) = lex.next() {
        if tok == Ok(Token::Grammar) {
            return match lex.next() {
                Some(Ok(Token::Ident)) => Some(lex.slice().to_string()),
                _ => None,
            };
        }
    }
    None
}
