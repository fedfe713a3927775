//! Front end for a small class-based expression language.
//!
//! ```text
//! source → lexer::tokenize → Vec<Token> → parser::parse → Program
//! ```

pub mod span;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod pretty;

use diagnostics::CompileError;
use lexer::Token;
use parser::ast::Program;
use tracing::debug;

/// Lex a source string, surfacing the error as a `CompileError`.
pub fn lex_source(source: &str) -> Result<Vec<Token>, CompileError> {
    let tokens = lexer::tokenize(source)?;
    debug!(bytes = source.len(), tokens = tokens.len(), "lexed source");
    Ok(tokens)
}

/// Lex and parse a source string into its AST (lex → parse).
pub fn parse_source(source: &str) -> Result<Program, CompileError> {
    let tokens = lex_source(source)?;
    let program = parser::parse(&tokens)?;
    debug!(classes = program.classes.len(), "parsed program");
    Ok(program)
}
