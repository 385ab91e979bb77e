/*
 * ==========================================================================
 * LYNX - Sharp eyes, small claws
 * ==========================================================================
 *
 * Lexical Environments
 * --------------------
 * A mutable name → value map with a parent link, forming the scope chain
 * searched during identifier lookup. Environments are shared by reference
 * (`Rc<RefCell<_>>`), never copied: every closure capturing a scope and
 * every call frame chained onto it alias the same node.
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
use std::collections::HashMap;
use std::rc::Rc;

use crate::value::Value;

#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Value>,
    parent: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    /// A fresh top-level scope. Created once per program or REPL session.
    pub fn new() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::default()))
    }

    /// A child scope chained to `parent`. Created once per function call,
    /// with the closure's captured environment as the parent. Plain block
    /// statements do not open one of these.
    pub fn enclosed(parent: Rc<RefCell<Environment>>) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            store: HashMap::new(),
            parent: Some(parent),
        }))
    }

    /// Inserts or overwrites a binding in this scope only. Declarations and
    /// reassignment both land here; reassignment never walks the chain to
    /// mutate an outer binding.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }

    /// Resolves a name against this scope, then the parent chain.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.store.get(name) {
            return Some(value.clone());
        }
        self.parent
            .as_ref()
            .and_then(|parent| parent.borrow().lookup(name))
    }
}
