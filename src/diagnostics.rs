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

use crate::error::ParseError;
use crate::token::Span;

/// Renders human-friendly, compiler-style diagnostics for parse errors.
///
/// The output is intentionally inspired by `rustc` diagnostics, but
/// simplified for Lynx and designed to remain readable without color:
///
/// ```text
/// error: expected `;`, found `let`
///   --> script.lx:3:9
///    |
///  3 | let a 5 let b = 6;
///    |         ^
/// ```
pub struct DiagnosticPrinter {
    source: String,
    file_name: String,
}

impl DiagnosticPrinter {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Prints one formatted diagnostic to stderr.
    pub fn print(&self, error: &ParseError) {
        let Span { line, column } = error.span();

        let lines: Vec<&str> = self.source.lines().collect();
        // Lines are 1-indexed in diagnostics; guard the line == 0 case.
        let src_line = lines.get(line.saturating_sub(1)).copied().unwrap_or("");

        eprintln!(
            "error: {}\n  --> {}:{}:{}",
            error,
            self.file_name,
            line,
            column + 1
        );
        eprintln!("   |");
        eprintln!("{:>3} | {}", line, src_line);
        eprintln!("   | {}^", " ".repeat(column));
    }

    /// Prints every diagnostic from a failed parse.
    pub fn print_all(&self, errors: &[ParseError]) {
        for error in errors {
            self.print(error);
        }
    }
}
