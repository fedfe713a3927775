pub mod ast;

use crate::diagnostics::ParseError;
use crate::lexer::token::{Token, TokenKind};
use ast::*;

/// Deepest expression nesting the parser accepts. Every bracket, block and
/// call argument list opens one level; the method body itself is level 1.
pub const MAX_NESTING: usize = 128;

/// Recursive-descent parser over a token slice.
///
/// One token of lookahead, no backtracking. Reading past the end of the
/// slice behaves as if it were terminated by an `END` token.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    eof: Token,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        let eof = match tokens.last() {
            Some(last) => Token::end(last.line, last.span.end),
            None => Token::end(1, 0),
        };
        Self { tokens, pos: 0, eof, depth: 0 }
    }

    fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current().is(kind)
    }

    fn advance(&mut self) -> &Token {
        let idx = self.pos;
        self.pos += 1;
        self.tokens.get(idx).unwrap_or(&self.eof)
    }

    /// Consume the current token if it has the given category.
    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind, context: &str) -> Result<&Token, ParseError> {
        if self.check(kind) {
            return Ok(self.advance());
        }
        let found = self.current().describe();
        Err(self.error_here(Some(kind), format!("expected {kind} {context}, found {found}")))
    }

    fn expect_ident(&mut self, context: &str) -> Result<String, ParseError> {
        Ok(self.expect(TokenKind::Id, context)?.text.clone())
    }

    fn error_here(&self, expected: Option<TokenKind>, message: String) -> ParseError {
        let tok = self.current();
        ParseError::new(message, expected, tok.line, tok.text.clone(), tok.span)
    }

    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut classes = Vec::new();
        while !self.eat(TokenKind::End) {
            classes.push(self.parse_class()?);
        }
        Ok(Program { classes })
    }

    fn parse_class(&mut self) -> Result<Class, ParseError> {
        self.expect(TokenKind::Class, "to start a class declaration")?;
        let name = self.expect_ident("for class name")?;
        self.expect(TokenKind::LBrace, "to open class body")?;

        let mut features = Vec::new();
        while self.check(TokenKind::Id) {
            features.push(self.parse_feature()?);
        }

        self.expect(TokenKind::RBrace, "to close class body")?;
        self.expect(TokenKind::Semicolon, "after class declaration")?;
        Ok(Class { name, features })
    }

    fn parse_feature(&mut self) -> Result<Feature, ParseError> {
        let name = self.expect_ident("for feature name")?;

        if self.eat(TokenKind::LParen) {
            let params = self.parse_params()?;
            self.expect(TokenKind::RParen, "after parameters")?;
            self.expect(TokenKind::Colon, "before return type")?;
            let declared_type = self.expect_ident("for return type")?;
            self.expect(TokenKind::LBrace, "before method body")?;
            let body = self.parse_expr()?;
            self.expect(TokenKind::RBrace, "after method body")?;
            self.expect(TokenKind::Semicolon, "after method definition")?;
            Ok(Feature::Method { name, params, declared_type, body })
        } else {
            self.expect(TokenKind::Colon, "in attribute")?;
            let declared_type = self.expect_ident("for attribute type")?;
            self.expect(TokenKind::Semicolon, "after attribute")?;
            Ok(Feature::Attribute { name, declared_type })
        }
    }

    fn parse_params(&mut self) -> Result<Vec<Param>, ParseError> {
        let mut params = Vec::new();
        if self.check(TokenKind::RParen) {
            return Ok(params);
        }
        params.push(self.parse_param()?);
        while self.eat(TokenKind::Comma) {
            params.push(self.parse_param()?);
        }
        Ok(params)
    }

    fn parse_param(&mut self) -> Result<Param, ParseError> {
        let name = self.expect_ident("for parameter name")?;
        self.expect(TokenKind::Colon, "after parameter name")?;
        let declared_type = self.expect_ident("for parameter type")?;
        Ok(Param { name, declared_type })
    }

    pub fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        if self.depth >= MAX_NESTING {
            let found = self.current().describe();
            return Err(self.error_here(None, format!("expression nested too deeply (limit {MAX_NESTING}), found {found}")));
        }
        self.depth += 1;
        let expr = self.parse_add_sub();
        self.depth -= 1;
        expr
    }

    fn parse_add_sub(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_mul_div()?;
        while let Some(op) = BinOp::additive(self.current().kind) {
            self.advance();
            let rhs = self.parse_mul_div()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_mul_div(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_factor()?;
        while let Some(op) = BinOp::multiplicative(self.current().kind) {
            self.advance();
            let rhs = self.parse_factor()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        match self.current().kind {
            TokenKind::Number => {
                let value = self.current().text.parse::<i32>().map_err(|_| {
                    let text = &self.current().text;
                    self.error_here(None, format!("integer literal {text} does not fit in 32 bits"))
                })?;
                self.advance();
                Ok(Expr::Number(value))
            }
            TokenKind::String => {
                let value = self.advance().text.clone();
                Ok(Expr::StringLiteral(value))
            }
            TokenKind::Id => {
                let name = self.advance().text.clone();
                if self.eat(TokenKind::LParen) {
                    let args = self.parse_args()?;
                    self.expect(TokenKind::RParen, "after call arguments")?;
                    Ok(Expr::Call { callee: name, args })
                } else {
                    Ok(Expr::Identifier(name))
                }
            }
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(TokenKind::RParen, "after expression")?;
                Ok(inner)
            }
            TokenKind::LBrace => self.parse_block(),
            _ => {
                let found = self.current().describe();
                Err(self.error_here(None, format!("expected expression, found {found}")))
            }
        }
    }

    fn parse_block(&mut self) -> Result<Expr, ParseError> {
        self.expect(TokenKind::LBrace, "to start a block")?;
        let mut exprs = Vec::new();

        if !self.check(TokenKind::RBrace) {
            exprs.push(self.parse_expr()?);
            while self.eat(TokenKind::Semicolon) {
                // A trailing `;` before `}` is allowed.
                if self.check(TokenKind::RBrace) {
                    break;
                }
                exprs.push(self.parse_expr()?);
            }
        }

        self.expect(TokenKind::RBrace, "to end block")?;
        Ok(Expr::Block(exprs))
    }

    fn parse_args(&mut self) -> Result<Vec<Expr>, ParseError> {
        let mut args = Vec::new();
        if self.check(TokenKind::RParen) {
            return Ok(args);
        }
        args.push(self.parse_expr()?);
        while self.eat(TokenKind::Comma) {
            args.push(self.parse_expr()?);
        }
        Ok(args)
    }
}

/// Parse a complete token sequence into a [`Program`].
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    Parser::new(tokens).parse_program()
}
