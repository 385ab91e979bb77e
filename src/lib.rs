/*
 * ==========================================================================
 * LYNX - Sharp eyes, small claws
 * ==========================================================================
 *
 * The Lynx Programming Language
 * -----------------------------
 * A scratch-built, dynamically-typed scripting language with a C-like
 * surface: integers, floats, booleans, strings, first-class functions
 * with closures, let-bindings with later mutation, if/else and explicit
 * return. The pipeline is lexer → parser → tree-walking interpreter;
 * runtime failures are first-class error values, never host panics.
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

pub mod ast;
pub mod diagnostics;
pub mod environment;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod repl;
pub mod token;
pub mod value;
