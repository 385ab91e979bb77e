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

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use lynx::diagnostics::DiagnosticPrinter;
use lynx::environment::Environment;
use lynx::interpreter::eval_program;
use lynx::lexer::Lexer;
use lynx::parser;
use lynx::repl;
use lynx::value::Value;

/// The Lynx programming language.
#[derive(Parser)]
#[command(name = "lynx", version, about)]
struct Cli {
    /// Script to execute; starts the REPL when omitted.
    script: Option<PathBuf>,

    /// Print the parsed program as JSON instead of evaluating it.
    #[arg(long)]
    dump_ast: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match cli.script {
        Some(path) => {
            let source = fs::read_to_string(&path)
                .with_context(|| format!("unable to read {}", path.display()))?;
            let file_name = path.display().to_string();
            run_source(&file_name, &source, cli.dump_ast)
        }
        None => {
            println!("type help() for help");
            repl::start()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Parses and runs one script in a fresh environment.
fn run_source(file_name: &str, source: &str, dump_ast: bool) -> anyhow::Result<ExitCode> {
    let tokens = Lexer::new(source).tokenize();
    let (program, errors) = parser::parse(tokens);
    if !errors.is_empty() {
        DiagnosticPrinter::new(file_name, source).print_all(&errors);
        return Ok(ExitCode::FAILURE);
    }

    if dump_ast {
        println!("{}", serde_json::to_string_pretty(&program)?);
        return Ok(ExitCode::SUCCESS);
    }

    let env = Environment::new();
    match eval_program(&program, &env) {
        // A language-level error is a diagnostic, not a crash.
        Value::Error(message) => {
            eprintln!("ERROR: {}", message);
            Ok(ExitCode::FAILURE)
        }
        Value::Null => Ok(ExitCode::SUCCESS),
        result => {
            println!("{}", result.inspect());
            Ok(ExitCode::SUCCESS)
        }
    }
}
