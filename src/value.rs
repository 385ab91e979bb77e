/*
 * ==========================================================================
 * LYNX - Sharp eyes, small claws
 * ==========================================================================
 *
 * Runtime Value Model
 * -------------------
 * The core type that flows through the interpreter. Every expression
 * ultimately evaluates to one of these. Errors and return signals are
 * ordinary values so they compose through arbitrary nesting; the
 * interpreter checks for them at every recursive step instead of
 * unwinding.
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
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::ast::Block;
use crate::environment::Environment;

/// Native host function: takes a vector of Lynx values, returns a Lynx
/// value. Arity and type checking is each builtin's own responsibility.
pub type NativeFn = Arc<dyn Fn(Vec<Value>) -> Value + Send + Sync>;

pub enum Value {
    // Primitive scalars
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    Null,

    /// Runtime failure as a first-class value, not an unwinding exception.
    Error(String),

    /// Marks "a return statement fired". Transient: intercepted by the
    /// enclosing call (or the program root) and never stored in an
    /// environment.
    Return(Box<Value>),

    /// User function plus the environment captured at its definition site.
    /// The environment is shared, never copied, so multiple closures can
    /// alias one outer scope.
    Function {
        params: Vec<String>,
        body: Block,
        env: Rc<RefCell<Environment>>,
    },

    /// Built-in host function.
    Builtin(NativeFn),
}

impl Value {
    /// Stable uppercase kind tag, used verbatim in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "INTEGER",
            Value::Float(_) => "FLOAT",
            Value::Bool(_) => "BOOLEAN",
            Value::Str(_) => "STRING",
            Value::Null => "NULL",
            Value::Error(_) => "ERROR",
            Value::Return(_) => "RETURN_VALUE",
            Value::Function { .. } => "FUNCTION",
            Value::Builtin(_) => "BUILTIN",
        }
    }

    /// Human-readable inspection string, the REPL's print form.
    pub fn inspect(&self) -> String {
        match self {
            Value::Int(value) => value.to_string(),
            Value::Float(value) => value.to_string(),
            Value::Bool(value) => value.to_string(),
            Value::Str(value) => value.clone(),
            Value::Null => "null".to_string(),
            Value::Error(message) => format!("ERROR: {}", message),
            Value::Return(inner) => inner.inspect(),
            Value::Function { params, body, .. } => {
                let body = body
                    .iter()
                    .map(|s| s.to_string())
                    .collect::<Vec<_>>()
                    .join("");
                format!("fun({}) {{\n{}\n}}", params.join(", "), body)
            }
            Value::Builtin(_) => "builtin function".to_string(),
        }
    }

    /// Branch decision rule: `false` and `null` are falsy, every other
    /// value is truthy. Deliberately includes `0`, `0.0` and `""`.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Bool(false) | Value::Null)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        match self {
            Value::Int(value) => Value::Int(*value),
            Value::Float(value) => Value::Float(*value),
            Value::Bool(value) => Value::Bool(*value),
            Value::Str(value) => Value::Str(value.clone()),
            Value::Null => Value::Null,
            Value::Error(message) => Value::Error(message.clone()),
            Value::Return(inner) => Value::Return(inner.clone()),
            Value::Function { params, body, env } => Value::Function {
                params: params.clone(),
                body: body.clone(),
                // Rc clone: the captured scope is aliased, not copied.
                env: env.clone(),
            },
            Value::Builtin(function) => Value::Builtin(function.clone()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Error(a), Value::Error(b)) => a == b,
            (Value::Return(a), Value::Return(b)) => a == b,
            // Builtins compare by identity, functions never compare equal.
            (Value::Builtin(a), Value::Builtin(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(value) => write!(f, "Int({})", value),
            Value::Float(value) => write!(f, "Float({})", value),
            Value::Bool(value) => write!(f, "Bool({})", value),
            Value::Str(value) => write!(f, "Str({:?})", value),
            Value::Null => write!(f, "Null"),
            Value::Error(message) => write!(f, "Error({})", message),
            Value::Return(inner) => write!(f, "Return({:?})", inner),
            Value::Function { params, .. } => write!(f, "[Function({})]", params.join(", ")),
            Value::Builtin(_) => write!(f, "[Builtin]"),
        }
    }
}
