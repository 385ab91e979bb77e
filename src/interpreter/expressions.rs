/*
 * ==========================================================================
 * LYNX - Sharp eyes, small claws
 * ==========================================================================
 *
 * Expression Evaluation
 * ---------------------
 * The core expression dispatcher plus every operator rule: truthiness,
 * numeric promotion, string concatenation and the type-mismatch errors.
 * All failures are `Value::Error` data; nothing here panics or unwinds.
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
use crate::interpreter::{builtins, calls::eval_call, eval_block};
use crate::value::Value;

/// Evaluates a single expression in the given environment.
pub fn eval_expr(expr: &Expr, env: &Rc<RefCell<Environment>>) -> Value {
    match expr {
        /* ------------------------------------------------------------------
         * Literals
         * ---------------------------------------------------------------- */
        Expr::Integer(value) => Value::Int(*value),
        Expr::Float(value) => Value::Float(*value),
        Expr::Boolean(value) => Value::Bool(*value),
        Expr::Str(value) => Value::Str(value.clone()),

        /* ------------------------------------------------------------------
         * Identifier lookup: scope chain first, then the builtin registry
         * ---------------------------------------------------------------- */
        Expr::Identifier(name) => match env.borrow().lookup(name) {
            Some(value) => value,
            None => builtins::lookup(name)
                .unwrap_or_else(|| Value::Error(format!("identifier not found: {}", name))),
        },

        /* ------------------------------------------------------------------
         * Function literal: capture the current environment by reference.
         * The body is not evaluated here.
         * ---------------------------------------------------------------- */
        Expr::Function { params, body } => Value::Function {
            params: params.clone(),
            body: body.clone(),
            env: env.clone(),
        },

        Expr::Call { callee, args } => eval_call(callee, args, env),

        Expr::Prefix { op, right } => {
            let right = eval_expr(right, env);
            if right.is_error() {
                return right;
            }
            eval_prefix(op, right)
        }

        Expr::Infix { left, op, right } => {
            let left = eval_expr(left, env);
            if left.is_error() {
                return left;
            }
            let right = eval_expr(right, env);
            if right.is_error() {
                return right;
            }
            eval_infix(op, left, right)
        }

        Expr::If {
            condition,
            consequence,
            alternative,
        } => {
            let condition = eval_expr(condition, env);
            if condition.is_error() {
                return condition;
            }
            if condition.is_truthy() {
                eval_block(consequence, env)
            } else if let Some(alternative) = alternative {
                eval_block(alternative, env)
            } else {
                Value::Null
            }
        }
    }
}

/* ==========================================================================
 * Operators
 * ========================================================================== */

fn eval_prefix(op: &str, right: Value) -> Value {
    match op {
        "!" => eval_bang(right),
        "-" => eval_minus(right),
        _ => Value::Error(format!("unknown operator: {}{}", op, right.kind())),
    }
}

/// `!` is logical negation over the boolean singletons and null only.
/// Applying it to any other kind is a type mismatch, not a coercion.
fn eval_bang(right: Value) -> Value {
    match right {
        Value::Bool(value) => Value::Bool(!value),
        Value::Null => Value::Bool(true),
        other => Value::Error(format!("type mismatch: !{}", other.kind())),
    }
}

fn eval_minus(right: Value) -> Value {
    match right {
        Value::Int(value) => Value::Int(value.wrapping_neg()),
        Value::Float(value) => Value::Float(-value),
        other => Value::Error(format!("type mismatch: -{}", other.kind())),
    }
}

/// Operand kinds may differ: any Int/Float mix promotes the integer side
/// to float. Booleans support equality only, strings support `+`.
fn eval_infix(op: &str, left: Value, right: Value) -> Value {
    match (&left, &right) {
        (Value::Int(l), Value::Int(r)) => eval_int_infix(op, *l, *r),
        (Value::Int(l), Value::Float(r)) => eval_float_infix(op, *l as f64, *r),
        (Value::Float(l), Value::Int(r)) => eval_float_infix(op, *l, *r as f64),
        (Value::Float(l), Value::Float(r)) => eval_float_infix(op, *l, *r),

        (Value::Str(l), Value::Str(r)) => match op {
            "+" => Value::Str(format!("{}{}", l, r)),
            _ => mismatch(op, &left, &right),
        },

        (Value::Bool(l), Value::Bool(r)) => match op {
            "==" => Value::Bool(l == r),
            "!=" => Value::Bool(l != r),
            _ => mismatch(op, &left, &right),
        },

        _ => mismatch(op, &left, &right),
    }
}

/// Integer arithmetic wraps on overflow (two's complement). Division and
/// remainder truncate toward zero; a zero divisor is a runtime error value
/// rather than a host abort.
fn eval_int_infix(op: &str, left: i64, right: i64) -> Value {
    match op {
        "+" => Value::Int(left.wrapping_add(right)),
        "-" => Value::Int(left.wrapping_sub(right)),
        "*" => Value::Int(left.wrapping_mul(right)),
        "/" if right == 0 => Value::Error("division by zero".to_string()),
        "/" => Value::Int(left.wrapping_div(right)),
        "%" if right == 0 => Value::Error("division by zero".to_string()),
        "%" => Value::Int(left.wrapping_rem(right)),
        "<" => Value::Bool(left < right),
        ">" => Value::Bool(left > right),
        "==" => Value::Bool(left == right),
        "!=" => Value::Bool(left != right),
        _ => Value::Error(format!("unknown operator: INTEGER {} INTEGER", op)),
    }
}

/// Float arithmetic follows IEEE 754: division by zero yields an infinity
/// or NaN instead of an error.
fn eval_float_infix(op: &str, left: f64, right: f64) -> Value {
    match op {
        "+" => Value::Float(left + right),
        "-" => Value::Float(left - right),
        "*" => Value::Float(left * right),
        "/" => Value::Float(left / right),
        "%" => Value::Float(left % right),
        "<" => Value::Bool(left < right),
        ">" => Value::Bool(left > right),
        "==" => Value::Bool(left == right),
        "!=" => Value::Bool(left != right),
        _ => Value::Error(format!("unknown operator: FLOAT {} FLOAT", op)),
    }
}

fn mismatch(op: &str, left: &Value, right: &Value) -> Value {
    Value::Error(format!(
        "type mismatch: {} {} {}",
        left.kind(),
        op,
        right.kind()
    ))
}
