/*
 * ==========================================================================
 * LYNX - Sharp eyes, small claws
 * ==========================================================================
 *
 * Interpreter Entry
 * -----------------
 * Recursive tree-walking evaluator. This module owns program and block
 * iteration; everything else is delegated:
 *
 *  - statements.rs  → statement dispatch (exec_stmt)
 *  - expressions.rs → expression evaluation (eval_expr)
 *  - calls.rs       → function and builtin invocation
 *  - builtins.rs    → the native function registry
 *
 * Control flow is data: a `return` statement produces `Value::Return` and
 * a runtime failure produces `Value::Error`. Both stop the enclosing
 * statement list immediately. The program root unwraps a return signal to
 * its inner value; nested blocks pass it through untouched so the
 * enclosing function call can intercept it.
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

pub mod builtins;
pub mod calls;
pub mod expressions;
pub mod statements;

use std::cell::RefCell;
use std::rc::Rc;

use crate::ast::{Block, Program};
use crate::environment::Environment;
use crate::value::Value;

use statements::exec_stmt;

/// Evaluates a whole program and yields its final value.
///
/// The caller supplies the environment: a persistent one across REPL lines,
/// a fresh one per file run. The result is the last statement's value, the
/// unwrapped value of a top-level `return`, or the first error produced.
pub fn eval_program(program: &Program, env: &Rc<RefCell<Environment>>) -> Value {
    let mut result = Value::Null;

    for stmt in &program.statements {
        result = exec_stmt(stmt, env);

        match result {
            Value::Return(inner) => return *inner,
            Value::Error(_) => return result,
            _ => {}
        }
    }

    result
}

/// Evaluates a statement list in the given environment. Unlike the program
/// root, a `Return` is propagated as-is so an outer call frame (or a more
/// deeply nested block) still sees the signal.
pub fn eval_block(block: &Block, env: &Rc<RefCell<Environment>>) -> Value {
    let mut result = Value::Null;

    for stmt in block {
        result = exec_stmt(stmt, env);

        if matches!(result, Value::Return(_) | Value::Error(_)) {
            return result;
        }
    }

    result
}
