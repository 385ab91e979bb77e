/*
 * ==========================================================================
 * LYNX - Sharp eyes, small claws
 * ==========================================================================
 *
 * Parser
 * ------
 * Recursive-descent parser over the token stream. Expression parsing is a
 * precedence ladder (equality → comparison → term → factor → unary → call
 * → primary); `if` and `fun` are expressions and appear in primary
 * position. Errors are collected rather than fatal: a failed statement is
 * recorded and the parser resynchronizes at the next statement boundary,
 * so a single pass can report several problems.
 *
 * This file is part of the Lynx programming language project.
 *
 * Lynx is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use crate::ast::{Block, Expr, Program, Stmt};
use crate::error::ParseError;
use crate::token::{Token, TokenKind};

/// Parses a full token stream into a program plus any syntax errors.
///
/// The returned program holds every statement that parsed cleanly; callers
/// must treat a non-empty error list as a failed parse.
pub fn parse(tokens: Vec<Token>) -> (Program, Vec<ParseError>) {
    let mut parser = Parser::new(tokens);
    let program = parser.parse_program();
    (program, parser.errors)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    errors: Vec<ParseError>,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            errors: Vec::new(),
        }
    }

    fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.is_at_end() {
            match self.statement() {
                Ok(stmt) => program.statements.push(stmt),
                Err(error) => {
                    self.errors.push(error);
                    self.synchronize();
                }
            }
        }

        program
    }

    /* ------------------------------------------------------------------
     * Statements
     * ---------------------------------------------------------------- */

    fn statement(&mut self) -> Result<Stmt, ParseError> {
        if self.matches(TokenKind::Let) {
            return self.declaration(Decl::Let);
        }

        if self.matches(TokenKind::Int) {
            return self.declaration(Decl::Int);
        }

        if self.matches(TokenKind::Float) {
            return self.declaration(Decl::Float);
        }

        if self.matches(TokenKind::Return) {
            return self.return_statement();
        }

        // Bare reassignment: `name = expr;`
        if self.check(TokenKind::Ident) && self.check_next(TokenKind::Assign) {
            let name = self.advance().lexeme;
            self.advance(); // `=`
            let value = self.expression()?;
            self.matches(TokenKind::Semicolon);
            return Ok(Stmt::Assign { name, value });
        }

        self.expression_statement()
    }

    /// Shared body of the three declaration keywords. `int x = ...` and
    /// `float x = ...` bind exactly like `let`; nothing is type-checked.
    fn declaration(&mut self, decl: Decl) -> Result<Stmt, ParseError> {
        let name = self.expect(TokenKind::Ident, "an identifier")?.lexeme;
        self.expect(TokenKind::Assign, "`=`")?;
        let value = self.expression()?;
        self.matches(TokenKind::Semicolon);

        Ok(match decl {
            Decl::Let => Stmt::Let { name, value },
            Decl::Int => Stmt::IntDecl { name, value },
            Decl::Float => Stmt::FloatDecl { name, value },
        })
    }

    fn return_statement(&mut self) -> Result<Stmt, ParseError> {
        let value = self.expression()?;
        self.matches(TokenKind::Semicolon);
        Ok(Stmt::Return(value))
    }

    fn expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.expression()?;
        self.matches(TokenKind::Semicolon);
        Ok(Stmt::Expression(expr))
    }

    fn block(&mut self) -> Result<Block, ParseError> {
        self.expect(TokenKind::LBrace, "`{`")?;
        let mut statements = Vec::new();
        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            statements.push(self.statement()?);
        }
        self.expect(TokenKind::RBrace, "`}`")?;
        Ok(statements)
    }

    /* ------------------------------------------------------------------
     * Expressions (precedence ladder, lowest binding first)
     * ---------------------------------------------------------------- */

    fn expression(&mut self) -> Result<Expr, ParseError> {
        self.equality()
    }

    fn equality(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.comparison()?;

        while self.check(TokenKind::Eq) || self.check(TokenKind::NotEq) {
            let op = self.advance().lexeme;
            let right = self.comparison()?;
            expr = Expr::Infix {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn comparison(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.term()?;

        while self.check(TokenKind::Lt) || self.check(TokenKind::Gt) {
            let op = self.advance().lexeme;
            let right = self.term()?;
            expr = Expr::Infix {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.factor()?;

        while self.check(TokenKind::Plus) || self.check(TokenKind::Minus) {
            let op = self.advance().lexeme;
            let right = self.factor()?;
            expr = Expr::Infix {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn factor(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.unary()?;

        while self.check(TokenKind::Asterisk)
            || self.check(TokenKind::Slash)
            || self.check(TokenKind::Percent)
        {
            let op = self.advance().lexeme;
            let right = self.unary()?;
            expr = Expr::Infix {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        if self.check(TokenKind::Bang) || self.check(TokenKind::Minus) {
            let op = self.advance().lexeme;
            let right = self.unary()?;
            return Ok(Expr::Prefix {
                op,
                right: Box::new(right),
            });
        }

        self.call()
    }

    fn call(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.primary()?;

        // Postfix argument lists; covers chained calls and immediate
        // invocation of function literals, `fun(x) { x; }(5)`.
        while self.matches(TokenKind::LParen) {
            expr = self.finish_call(expr)?;
        }

        Ok(expr)
    }

    fn finish_call(&mut self, callee: Expr) -> Result<Expr, ParseError> {
        let mut args = Vec::new();

        if !self.check(TokenKind::RParen) {
            loop {
                args.push(self.expression()?);
                if !self.matches(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen, "`)`")?;

        Ok(Expr::Call {
            callee: Box::new(callee),
            args,
        })
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.advance();

        match token.kind {
            TokenKind::IntLiteral => {
                token
                    .lexeme
                    .parse::<i64>()
                    .map(Expr::Integer)
                    .map_err(|_| ParseError::InvalidNumber {
                        literal: token.lexeme,
                        span: token.span,
                    })
            }

            TokenKind::FloatLiteral => {
                token
                    .lexeme
                    .parse::<f64>()
                    .map(Expr::Float)
                    .map_err(|_| ParseError::InvalidNumber {
                        literal: token.lexeme,
                        span: token.span,
                    })
            }

            TokenKind::StrLiteral => Ok(Expr::Str(token.lexeme)),
            TokenKind::True => Ok(Expr::Boolean(true)),
            TokenKind::False => Ok(Expr::Boolean(false)),
            TokenKind::Ident => Ok(Expr::Identifier(token.lexeme)),

            TokenKind::LParen => {
                let expr = self.expression()?;
                self.expect(TokenKind::RParen, "`)`")?;
                Ok(expr)
            }

            TokenKind::If => self.if_expression(),
            TokenKind::Function => self.function_literal(),

            TokenKind::Illegal => Err(ParseError::IllegalToken {
                literal: token.lexeme,
                span: token.span,
            }),

            _ => Err(ParseError::UnexpectedExpressionToken {
                found: describe(&token),
                span: token.span,
            }),
        }
    }

    /// `if (cond) { ... }` with an optional `else { ... }`. An if with no
    /// taken branch evaluates to null.
    fn if_expression(&mut self) -> Result<Expr, ParseError> {
        self.expect(TokenKind::LParen, "`(`")?;
        let condition = self.expression()?;
        self.expect(TokenKind::RParen, "`)`")?;

        let consequence = self.block()?;
        let alternative = if self.matches(TokenKind::Else) {
            Some(self.block()?)
        } else {
            None
        };

        Ok(Expr::If {
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    fn function_literal(&mut self) -> Result<Expr, ParseError> {
        self.expect(TokenKind::LParen, "`(`")?;

        let mut params = Vec::new();
        if !self.check(TokenKind::RParen) {
            loop {
                params.push(self.expect(TokenKind::Ident, "a parameter name")?.lexeme);
                if !self.matches(TokenKind::Comma) {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen, "`)`")?;

        let body = self.block()?;
        Ok(Expr::Function { params, body })
    }

    /* ------------------------------------------------------------------
     * Token stream helpers
     * ---------------------------------------------------------------- */

    fn current(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    fn check_next(&self, kind: TokenKind) -> bool {
        self.tokens
            .get(self.pos + 1)
            .map_or(false, |t| t.kind == kind)
    }

    fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consumes the current token if it matches.
    fn matches(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            return true;
        }
        false
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            return Ok(self.advance());
        }
        let found = self.current();
        Err(ParseError::UnexpectedToken {
            expected: expected.to_string(),
            found: describe(found),
            span: found.span,
        })
    }

    /// Skips forward to the next likely statement boundary after an error.
    fn synchronize(&mut self) {
        while !self.is_at_end() {
            if self.matches(TokenKind::Semicolon) {
                return;
            }
            match self.current().kind {
                TokenKind::Let
                | TokenKind::Int
                | TokenKind::Float
                | TokenKind::Return
                | TokenKind::RBrace => return,
                _ => {
                    self.advance();
                }
            }
        }
    }
}

enum Decl {
    Let,
    Int,
    Float,
}

/// Renders a token for an error message, falling back to the kind name
/// when the lexeme is empty (end of input).
fn describe(token: &Token) -> String {
    if token.lexeme.is_empty() {
        token.kind.to_string()
    } else {
        token.lexeme.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Lexer;

    fn parse_ok(input: &str) -> Program {
        let (program, errors) = parse(Lexer::new(input).tokenize());
        assert!(errors.is_empty(), "parse errors for {:?}: {:?}", input, errors);
        program
    }

    #[test]
    fn declarations_share_one_shape() {
        let program = parse_ok("let a = 5; int b = 6; float c = 7.5;");
        assert_eq!(program.statements.len(), 3);
        assert_eq!(
            program.statements[0],
            Stmt::Let {
                name: "a".into(),
                value: Expr::Integer(5),
            }
        );
        assert_eq!(
            program.statements[1],
            Stmt::IntDecl {
                name: "b".into(),
                value: Expr::Integer(6),
            }
        );
        assert_eq!(
            program.statements[2],
            Stmt::FloatDecl {
                name: "c".into(),
                value: Expr::Float(7.5),
            }
        );
    }

    #[test]
    fn reassignment_parses_as_assign_statement() {
        let program = parse_ok("a = 7;");
        assert_eq!(
            program.statements[0],
            Stmt::Assign {
                name: "a".into(),
                value: Expr::Integer(7),
            }
        );
    }

    #[test]
    fn operator_precedence_via_display() {
        let cases = [
            ("-a * b", "((-a) * b)"),
            ("!-a", "(!(-a))"),
            ("a + b + c", "((a + b) + c)"),
            ("a + b * c", "(a + (b * c))"),
            ("a * b % c", "((a * b) % c)"),
            ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
            ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
            ("(5 + 5) * 2", "((5 + 5) * 2)"),
            ("2 / (5 + 5)", "(2 / (5 + 5))"),
            ("-(5 + 5)", "(-(5 + 5))"),
            ("add(a, b, 1, 2 * 3)", "add(a, b, 1, (2 * 3))"),
        ];

        for (input, expected) in cases {
            let program = parse_ok(input);
            assert_eq!(program.to_string(), expected, "input {:?}", input);
        }
    }

    #[test]
    fn if_and_function_are_expressions() {
        let program = parse_ok("let max = if (a > b) { a } else { b };");
        match &program.statements[0] {
            Stmt::Let { value: Expr::If { alternative, .. }, .. } => {
                assert!(alternative.is_some());
            }
            other => panic!("expected let with if value, got {:?}", other),
        }

        let program = parse_ok("fun(x, y) { x + y; }(1, 2)");
        match &program.statements[0] {
            Stmt::Expression(Expr::Call { callee, args }) => {
                assert_eq!(args.len(), 2);
                match callee.as_ref() {
                    Expr::Function { params, .. } => assert_eq!(params, &["x", "y"]),
                    other => panic!("expected function literal callee, got {:?}", other),
                }
            }
            other => panic!("expected immediate call, got {:?}", other),
        }
    }

    #[test]
    fn errors_are_collected_with_resynchronization() {
        let (_, errors) = parse(Lexer::new("let = 5; let b 6; let c = 7;").tokenize());
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], ParseError::UnexpectedToken { .. }));
    }

    #[test]
    fn illegal_number_reports_a_parse_error() {
        let (_, errors) = parse(Lexer::new("1.2.3").tokenize());
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], ParseError::IllegalToken { .. }));
    }
}
