use crate::lexer::token::TokenKind;
use crate::span::Span;
use thiserror::Error;

/// Failure while scanning source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unexpected character {ch:?} at line {line}")]
    UnexpectedCharacter { ch: char, line: u32, span: Span },

    #[error("unterminated string at line {line}")]
    UnterminatedString { line: u32, span: Span },
}

impl LexError {
    pub fn line(&self) -> u32 {
        match self {
            LexError::UnexpectedCharacter { line, .. } | LexError::UnterminatedString { line, .. } => *line,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedCharacter { span, .. } | LexError::UnterminatedString { span, .. } => *span,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            LexError::UnexpectedCharacter { .. } => "not a valid token",
            LexError::UnterminatedString { .. } => "string starts here",
        }
    }
}

/// Grammar violation found by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at line {line}")]
pub struct ParseError {
    pub message: String,
    /// Category the parser required, or `None` where any expression would do.
    pub expected: Option<TokenKind>,
    pub line: u32,
    /// Text of the offending token.
    pub lexeme: String,
    pub span: Span,
}

impl ParseError {
    pub fn new(message: impl Into<String>, expected: Option<TokenKind>, line: u32, lexeme: impl Into<String>, span: Span) -> Self {
        Self { message: message.into(), expected, line, lexeme: lexeme.into(), span }
    }
}

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("Lex error: {0}")]
    Lex(#[from] LexError),

    #[error("Syntax error: {0}")]
    Parse(#[from] ParseError),
}

impl CompileError {
    pub fn span(&self) -> Span {
        match self {
            CompileError::Lex(err) => err.span(),
            CompileError::Parse(err) => err.span,
        }
    }

    pub fn line(&self) -> u32 {
        match self {
            CompileError::Lex(err) => err.line(),
            CompileError::Parse(err) => err.line,
        }
    }
}

/// Render a CompileError with ariadne into a string.
pub fn render_report(source: &str, filename: &str, err: &CompileError, color: bool) -> String {
    use ariadne::{Config, Label, Report, ReportKind, Source};

    if source.is_empty() {
        return format!("error [{filename}]: {err}");
    }

    // ariadne counts in chars; spans are byte offsets on char boundaries.
    let span = err.span();
    let to_char = |offset: usize| source.get(..offset.min(source.len())).map_or(0, |s| s.chars().count());
    let total = source.chars().count();
    let mut start = to_char(span.start);
    let mut end = to_char(span.end).max(start);
    if start == end {
        if end < total {
            end += 1;
        } else {
            start -= 1;
        }
    }

    let (kind_str, msg, label) = match err {
        CompileError::Lex(lex) => ("lex", lex.to_string(), lex.label().to_string()),
        CompileError::Parse(parse) => ("syntax", parse.to_string(), parse.message.clone()),
    };

    let mut buf = Vec::new();
    let written = Report::build(ReportKind::Error, (), start)
        .with_config(Config::default().with_color(color))
        .with_message(format!("{kind_str} error in {filename}: {msg}"))
        .with_label(Label::new(start..end).with_message(label))
        .finish()
        .write(Source::from(source), &mut buf);

    match written {
        Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
        Err(_) => format!("error [{filename}]: {err}"),
    }
}

/// Render a CompileError with ariadne for nice terminal output.
pub fn render_error(source: &str, filename: &str, err: &CompileError, color: bool) {
    eprint!("{}", render_report(source, filename, err, color));
}
