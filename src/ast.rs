/*
 * ==========================================================================
 * LYNX - Sharp eyes, small claws
 * ==========================================================================
 *
 * Abstract Syntax Tree
 * --------------------
 * Node taxonomy produced by the parser and walked read-only by the
 * interpreter. `Display` reconstructs source form; it is what function
 * values print when inspected. `Serialize` backs the `--dump-ast` flag.
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

use std::fmt;

use serde::Serialize;

/// A brace-delimited statement list. Blocks do not open a new scope;
/// they evaluate in the environment they are handed.
pub type Block = Vec<Stmt>;

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Stmt {
    /// `let name = expr;` — `int` and `float` are alternate spellings with
    /// identical semantics; the keyword is kept only for source fidelity.
    Let { name: String, value: Expr },
    IntDecl { name: String, value: Expr },
    FloatDecl { name: String, value: Expr },

    /// Bare `name = expr;` reassignment.
    Assign { name: String, value: Expr },

    Return(Expr),
    Expression(Expr),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Str(String),
    Identifier(String),

    Prefix {
        op: String,
        right: Box<Expr>,
    },

    Infix {
        left: Box<Expr>,
        op: String,
        right: Box<Expr>,
    },

    If {
        condition: Box<Expr>,
        consequence: Block,
        alternative: Option<Block>,
    },

    Function {
        params: Vec<String>,
        body: Block,
    },

    Call {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
}

fn write_block(f: &mut fmt::Formatter<'_>, block: &Block) -> fmt::Result {
    for stmt in block {
        write!(f, "{}", stmt)?;
    }
    Ok(())
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_block(f, &self.statements)
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Let { name, value } => write!(f, "let {} = {};", name, value),
            Stmt::IntDecl { name, value } => write!(f, "int {} = {};", name, value),
            Stmt::FloatDecl { name, value } => write!(f, "float {} = {};", name, value),
            Stmt::Assign { name, value } => write!(f, "{} = {};", name, value),
            Stmt::Return(value) => write!(f, "return {};", value),
            Stmt::Expression(expr) => write!(f, "{}", expr),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Integer(value) => write!(f, "{}", value),
            Expr::Float(value) => write!(f, "{}", value),
            Expr::Boolean(value) => write!(f, "{}", value),
            Expr::Str(value) => write!(f, "\"{}\"", value),
            Expr::Identifier(name) => write!(f, "{}", name),

            Expr::Prefix { op, right } => write!(f, "({}{})", op, right),

            Expr::Infix { left, op, right } => write!(f, "({} {} {})", left, op, right),

            Expr::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if {} ", condition)?;
                write_block(f, consequence)?;
                if let Some(alternative) = alternative {
                    write!(f, " else ")?;
                    write_block(f, alternative)?;
                }
                Ok(())
            }

            Expr::Function { params, body } => {
                write!(f, "fun({}) ", params.join(", "))?;
                write_block(f, body)
            }

            Expr::Call { callee, args } => {
                let args = args
                    .iter()
                    .map(|a| a.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{}({})", callee, args)
            }
        }
    }
}
