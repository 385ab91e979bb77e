/*
 * ==========================================================================
 * LYNX - Sharp eyes, small claws
 * ==========================================================================
 *
 * Builtin Registry
 * ----------------
 * Fixed table of native functions, consulted when identifier lookup
 * misses the scope chain. Every builtin validates its own arity and
 * argument kinds and reports violations as `Value::Error` — a builtin
 * never aborts the process.
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

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::value::{NativeFn, Value};

static BUILTINS: Lazy<HashMap<&'static str, NativeFn>> = Lazy::new(|| {
    let mut table: HashMap<&'static str, NativeFn> = HashMap::new();

    // len(s) — byte length of a string.
    table.insert(
        "len",
        Arc::new(|args: Vec<Value>| -> Value {
            if args.len() != 1 {
                return Value::Error(format!(
                    "wrong number of arguments: want=1, got={}",
                    args.len()
                ));
            }
            match &args[0] {
                Value::Str(value) => Value::Int(value.len() as i64),
                other => Value::Error(format!(
                    "len only supported on strings, got {}",
                    other.kind()
                )),
            }
        }),
    );

    // help() — a fixed pointer for the lost.
    table.insert(
        "help",
        Arc::new(|args: Vec<Value>| -> Value {
            if !args.is_empty() {
                return Value::Error(format!(
                    "wrong number of arguments: want=0, got={}",
                    args.len()
                ));
            }
            Value::Str(
                "Lynx is a small scripting language. Builtins: len(s), print(...), help()"
                    .to_string(),
            )
        }),
    );

    // print(...) — writes each argument's inspection string on its own
    // line and yields null.
    table.insert(
        "print",
        Arc::new(|args: Vec<Value>| -> Value {
            for arg in &args {
                println!("{}", arg.inspect());
            }
            Value::Null
        }),
    );

    table
});

/// Resolves a builtin by name into a callable value.
pub fn lookup(name: &str) -> Option<Value> {
    BUILTINS.get(name).map(|f| Value::Builtin(f.clone()))
}
