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

use std::cell::RefCell;
use std::rc::Rc;

use crate::ast::Stmt;
use crate::environment::Environment;
use crate::interpreter::expressions::eval_expr;
use crate::value::Value;

/// Executes a single statement and yields its value.
///
/// Declarations bind and yield `Null`; `return` wraps its value in the
/// return signal; expression statements yield the expression's value. An
/// error from the evaluated expression is propagated without binding.
pub fn exec_stmt(stmt: &Stmt, env: &Rc<RefCell<Environment>>) -> Value {
    match stmt {
        // `let`, `int` and `float` are three spellings of one semantic:
        // evaluate, then bind in the current scope. Reassignment reuses the
        // same define, overwriting in the nearest scope without walking up.
        Stmt::Let { name, value }
        | Stmt::IntDecl { name, value }
        | Stmt::FloatDecl { name, value }
        | Stmt::Assign { name, value } => {
            let value = eval_expr(value, env);
            if value.is_error() {
                return value;
            }
            env.borrow_mut().define(name.clone(), value);
            Value::Null
        }

        Stmt::Return(value) => {
            let value = eval_expr(value, env);
            if value.is_error() {
                return value;
            }
            Value::Return(Box::new(value))
        }

        Stmt::Expression(expr) => eval_expr(expr, env),
    }
}
