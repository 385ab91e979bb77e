/*
 * ==========================================================================
 * LYNX - Sharp eyes, small claws
 * ==========================================================================
 *
 * Function & Builtin Invocation
 * -----------------------------
 * Call evaluation order is strict and observable: callee first, then
 * arguments left to right, stopping at the first error. Application then
 * chains a fresh environment onto the closure's *captured* scope (not the
 * caller's), binds parameters positionally, runs the body as a block and
 * unwraps a return signal exactly once.
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

use crate::ast::Expr;
use crate::environment::Environment;
use crate::interpreter::{eval_block, expressions::eval_expr};
use crate::value::Value;

/// Evaluates a call expression: callee, then arguments, then application.
pub fn eval_call(callee: &Expr, args: &[Expr], env: &Rc<RefCell<Environment>>) -> Value {
    let callee = eval_expr(callee, env);
    if callee.is_error() {
        return callee;
    }

    let mut evaluated = Vec::with_capacity(args.len());
    for arg in args {
        let value = eval_expr(arg, env);
        if value.is_error() {
            // Later arguments are never evaluated.
            return value;
        }
        evaluated.push(value);
    }

    apply_function(callee, evaluated)
}

fn apply_function(callee: Value, args: Vec<Value>) -> Value {
    match callee {
        Value::Function { params, body, env } => {
            if args.len() != params.len() {
                return Value::Error(format!(
                    "wrong number of arguments: want={}, got={}",
                    params.len(),
                    args.len()
                ));
            }

            // One call frame per invocation, parented on the captured
            // environment so free variables resolve at the definition site.
            let frame = Environment::enclosed(env);
            for (param, arg) in params.iter().zip(args) {
                frame.borrow_mut().define(param.clone(), arg);
            }

            match eval_block(&body, &frame) {
                Value::Return(inner) => *inner,
                other => other,
            }
        }

        Value::Builtin(function) => function(args),

        other => Value::Error(format!("not a function: {}", other.kind())),
    }
}
