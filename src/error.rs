/*
 * ==========================================================================
 * LYNX - Sharp eyes, small claws
 * ==========================================================================
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

use thiserror::Error;

use crate::token::Span;

/// A syntax error produced while parsing.
///
/// Language-level runtime failures are *not* represented here — those are
/// `Value::Error` data flowing through the interpreter. `ParseError` covers
/// only the host-visible front-end failures the diagnostics printer renders.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseError {
    #[error("expected {expected}, found `{found}`")]
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
    },

    #[error("no rule can parse `{found}` in expression position")]
    UnexpectedExpressionToken { found: String, span: Span },

    #[error("unable to parse `{literal}` as a number")]
    InvalidNumber { literal: String, span: Span },

    #[error("illegal character sequence `{literal}`")]
    IllegalToken { literal: String, span: Span },
}

impl ParseError {
    /// Primary source location for diagnostics rendering.
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::UnexpectedExpressionToken { span, .. }
            | ParseError::InvalidNumber { span, .. }
            | ParseError::IllegalToken { span, .. } => *span,
        }
    }
}
