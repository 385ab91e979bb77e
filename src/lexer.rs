/*
 * ==========================================================================
 * LYNX - Sharp eyes, small claws
 * ==========================================================================
 *
 * Tokenizer
 * ---------
 * Hand-rolled single-pass lexer. Walks the source one character at a time
 * with a single character of lookahead, producing `Token`s until `Eof`.
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

use crate::token::{lookup_ident, lookup_number, Span, Token, TokenKind};

pub struct Lexer {
    input: Vec<char>,
    /// Index of `ch` in `input`.
    position: usize,
    /// Index of the next character to read.
    read_position: usize,
    /// Current character, `'\0'` once past the end.
    ch: char,
    line: usize,
    /// Index where the current line starts, for column computation.
    line_start: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        let mut lexer = Self {
            input: input.chars().collect(),
            position: 0,
            read_position: 0,
            ch: '\0',
            line: 1,
            line_start: 0,
        };
        lexer.read_char();
        lexer
    }

    /// Tokenizes the entire input, always ending with an `Eof` token.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.eat_whitespace();

        let span = self.span();
        let token = match self.ch {
            '=' => {
                if self.peek_char() == '=' {
                    self.read_char();
                    Token::new(TokenKind::Eq, "==", span)
                } else {
                    Token::new(TokenKind::Assign, "=", span)
                }
            }
            '!' => {
                if self.peek_char() == '=' {
                    self.read_char();
                    Token::new(TokenKind::NotEq, "!=", span)
                } else {
                    Token::new(TokenKind::Bang, "!", span)
                }
            }
            '/' => {
                if self.peek_char() == '/' {
                    // Line comment: discard to end of line and go again.
                    while self.ch != '\n' && self.ch != '\0' {
                        self.read_char();
                    }
                    return self.next_token();
                } else {
                    Token::new(TokenKind::Slash, "/", span)
                }
            }
            '"' => {
                let literal = self.read_string();
                Token::new(TokenKind::StrLiteral, literal, span)
            }
            '+' => Token::new(TokenKind::Plus, "+", span),
            '-' => Token::new(TokenKind::Minus, "-", span),
            '*' => Token::new(TokenKind::Asterisk, "*", span),
            '%' => Token::new(TokenKind::Percent, "%", span),
            '<' => Token::new(TokenKind::Lt, "<", span),
            '>' => Token::new(TokenKind::Gt, ">", span),
            ',' => Token::new(TokenKind::Comma, ",", span),
            ';' => Token::new(TokenKind::Semicolon, ";", span),
            '(' => Token::new(TokenKind::LParen, "(", span),
            ')' => Token::new(TokenKind::RParen, ")", span),
            '{' => Token::new(TokenKind::LBrace, "{", span),
            '}' => Token::new(TokenKind::RBrace, "}", span),
            '\0' => Token::new(TokenKind::Eof, "", span),
            ch => {
                if is_letter(ch) {
                    let literal = self.read_identifier();
                    return Token::new(lookup_ident(&literal), literal, span);
                } else if is_digit(ch) {
                    let literal = self.read_number();
                    return Token::new(lookup_number(&literal), literal, span);
                } else {
                    Token::new(TokenKind::Illegal, ch.to_string(), span)
                }
            }
        };

        self.read_char();
        token
    }

    fn span(&self) -> Span {
        Span {
            line: self.line,
            column: self.position.saturating_sub(self.line_start),
        }
    }

    fn eat_whitespace(&mut self) {
        while self.ch == ' ' || self.ch == '\t' || self.ch == '\n' || self.ch == '\r' {
            self.read_char();
        }
    }

    fn read_char(&mut self) {
        if self.ch == '\n' {
            self.line += 1;
            self.line_start = self.read_position;
        }
        self.ch = if self.read_position >= self.input.len() {
            '\0'
        } else {
            self.input[self.read_position]
        };
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> char {
        if self.read_position >= self.input.len() {
            '\0'
        } else {
            self.input[self.read_position]
        }
    }

    /// Reads a double-quoted string. No escape sequences; an unterminated
    /// string is closed by end of input.
    fn read_string(&mut self) -> String {
        let start = self.position + 1;
        self.read_char();
        while self.ch != '"' && self.ch != '\0' {
            self.read_char();
        }
        self.input[start..self.position].iter().collect()
    }

    fn read_identifier(&mut self) -> String {
        let start = self.position;
        while is_letter(self.ch) {
            self.read_char();
        }
        self.input[start..self.position].iter().collect()
    }

    fn read_number(&mut self) -> String {
        let start = self.position;
        while is_digit(self.ch) {
            self.read_char();
        }
        self.input[start..self.position].iter().collect()
    }
}

fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_digit(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '.'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_token_covers_full_operator_set() {
        let input = r#"let five = 5;
float pi = 3.14;
let add = fun(x, y) { x + y; };
if (5 < 10) { return true; } else { return false; }
5 % 2 == 1;
!x != y;
"hello world"
// a comment
barked"#;

        let expected = [
            (TokenKind::Let, "let"),
            (TokenKind::Ident, "five"),
            (TokenKind::Assign, "="),
            (TokenKind::IntLiteral, "5"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Float, "float"),
            (TokenKind::Ident, "pi"),
            (TokenKind::Assign, "="),
            (TokenKind::FloatLiteral, "3.14"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Let, "let"),
            (TokenKind::Ident, "add"),
            (TokenKind::Assign, "="),
            (TokenKind::Function, "fun"),
            (TokenKind::LParen, "("),
            (TokenKind::Ident, "x"),
            (TokenKind::Comma, ","),
            (TokenKind::Ident, "y"),
            (TokenKind::RParen, ")"),
            (TokenKind::LBrace, "{"),
            (TokenKind::Ident, "x"),
            (TokenKind::Plus, "+"),
            (TokenKind::Ident, "y"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::RBrace, "}"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::If, "if"),
            (TokenKind::LParen, "("),
            (TokenKind::IntLiteral, "5"),
            (TokenKind::Lt, "<"),
            (TokenKind::IntLiteral, "10"),
            (TokenKind::RParen, ")"),
            (TokenKind::LBrace, "{"),
            (TokenKind::Return, "return"),
            (TokenKind::True, "true"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::RBrace, "}"),
            (TokenKind::Else, "else"),
            (TokenKind::LBrace, "{"),
            (TokenKind::Return, "return"),
            (TokenKind::False, "false"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::RBrace, "}"),
            (TokenKind::IntLiteral, "5"),
            (TokenKind::Percent, "%"),
            (TokenKind::IntLiteral, "2"),
            (TokenKind::Eq, "=="),
            (TokenKind::IntLiteral, "1"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::Bang, "!"),
            (TokenKind::Ident, "x"),
            (TokenKind::NotEq, "!="),
            (TokenKind::Ident, "y"),
            (TokenKind::Semicolon, ";"),
            (TokenKind::StrLiteral, "hello world"),
            (TokenKind::Ident, "barked"),
            (TokenKind::Eof, ""),
        ];

        let mut lexer = Lexer::new(input);
        for (i, (kind, lexeme)) in expected.iter().enumerate() {
            let token = lexer.next_token();
            assert_eq!(token.kind, *kind, "token {} kind ({:?})", i, token);
            assert_eq!(token.lexeme, *lexeme, "token {} lexeme", i);
        }
    }

    #[test]
    fn number_with_two_dots_is_illegal() {
        let mut lexer = Lexer::new("1.2.3");
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Illegal);
        assert_eq!(token.lexeme, "1.2.3");
    }

    #[test]
    fn spans_track_lines_and_columns() {
        let mut lexer = Lexer::new("let a = 5;\n  a");
        let first = lexer.next_token();
        assert_eq!(first.span, Span { line: 1, column: 0 });

        let mut last = first;
        loop {
            let token = lexer.next_token();
            if token.kind == TokenKind::Eof {
                break;
            }
            last = token;
        }
        assert_eq!(last.lexeme, "a");
        assert_eq!(last.span, Span { line: 2, column: 2 });
    }
}
