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

use std::io::{self, BufRead, Write};

use crate::diagnostics::DiagnosticPrinter;
use crate::environment::Environment;
use crate::interpreter::eval_program;
use crate::lexer::Lexer;
use crate::parser;
use crate::value::Value;

const PROMPT: &str = ">> ";

/// Runs the interactive shell until end of input.
///
/// One environment lives across all lines, so bindings persist between
/// inputs. Parse errors and language-level `ERROR:` values are printed and
/// the loop continues; nothing a script does terminates the shell.
pub fn start() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let env = Environment::new();

    loop {
        write!(stdout, "{}", PROMPT)?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }

        let tokens = Lexer::new(&line).tokenize();
        let (program, errors) = parser::parse(tokens);
        if !errors.is_empty() {
            DiagnosticPrinter::new("repl", &line).print_all(&errors);
            continue;
        }

        let result = eval_program(&program, &env);
        if result != Value::Null {
            writeln!(stdout, "{}", result.inspect())?;
        }
    }
}
