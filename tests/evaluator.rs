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

use lynx::environment::Environment;
use lynx::interpreter::eval_program;
use lynx::lexer::Lexer;
use lynx::parser;
use lynx::value::Value;

/// Runs a source snippet through the full pipeline in a fresh environment.
fn run(input: &str) -> Value {
    let tokens = Lexer::new(input).tokenize();
    let (program, errors) = parser::parse(tokens);
    assert!(
        errors.is_empty(),
        "parse errors for {:?}: {:?}",
        input,
        errors
    );
    let env = Environment::new();
    eval_program(&program, &env)
}

fn assert_int(input: &str, expected: i64) {
    match run(input) {
        Value::Int(value) => assert_eq!(value, expected, "input {:?}", input),
        other => panic!("{:?}: expected Int({}), got {:?}", input, expected, other),
    }
}

fn assert_float(input: &str, expected: f64) {
    match run(input) {
        Value::Float(value) => assert_eq!(value, expected, "input {:?}", input),
        other => panic!("{:?}: expected Float({}), got {:?}", input, expected, other),
    }
}

fn assert_bool(input: &str, expected: bool) {
    match run(input) {
        Value::Bool(value) => assert_eq!(value, expected, "input {:?}", input),
        other => panic!("{:?}: expected Bool({}), got {:?}", input, expected, other),
    }
}

fn assert_error(input: &str, expected: &str) {
    match run(input) {
        Value::Error(message) => assert_eq!(message, expected, "input {:?}", input),
        other => panic!("{:?}: expected Error({:?}), got {:?}", input, expected, other),
    }
}

fn assert_null(input: &str) {
    match run(input) {
        Value::Null => {}
        other => panic!("{:?}: expected Null, got {:?}", input, other),
    }
}

#[test]
fn integer_expressions() {
    let tests = [
        ("5", 5),
        ("10", 10),
        ("-5", -5),
        ("5 + 5 + 5 + 5 - 10", 10),
        ("2 * 2 * 2 * 2 * 2", 32),
        ("-50 + 100 + -50", 0),
        ("5 * 2 + 10", 20),
        ("5 + 2 * 10", 25),
        ("20 + 2 * -10", 0),
        ("50 / 2 * 2 + 10", 60),
        ("2 * (5 + 10)", 30),
        ("3 * 3 * 3 + 10", 37),
        ("3 * (3 * 3) + 10", 37),
        ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50),
        ("7 % 3", 1),
        ("-7 % 3", -1),
    ];
    for (input, expected) in tests {
        assert_int(input, expected);
    }
}

#[test]
fn float_expressions_and_promotion() {
    let tests = [
        ("5.4", 5.4),
        ("10.051", 10.051),
        ("-69.420", -69.420),
        ("3.5 * (3 * 3) + 10", 41.5),
        ("(5 + 10 * 2 + 15 / 3) * 2.5 + -10", 65.0),
        ("420.69 + 1", 421.69),
        ("1 + 2.0", 3.0),
        ("2.0 * 3", 6.0),
        ("7.5 % 2", 1.5),
    ];
    for (input, expected) in tests {
        assert_float(input, expected);
    }

    // Result kind is Float iff at least one operand is Float.
    assert_int("1 + 2", 3);
    match run("1.0 + 2") {
        Value::Float(_) => {}
        other => panic!("expected Float, got {:?}", other),
    }
}

#[test]
fn integer_division_truncates_and_wraps() {
    assert_int("7 / 2", 3);
    assert_int("-7 / 2", -3);
    // Two's-complement wraparound on overflow.
    assert_int("9223372036854775807 + 1", i64::MIN);
    assert_int("-9223372036854775807 - 2", i64::MAX);
}

#[test]
fn division_by_zero() {
    assert_error("5 / 0", "division by zero");
    assert_error("5 % 0", "division by zero");

    // Float division follows IEEE 754.
    match run("5.0 / 0") {
        Value::Float(value) => assert!(value.is_infinite() && value > 0.0),
        other => panic!("expected +inf, got {:?}", other),
    }
    match run("0.0 / 0") {
        Value::Float(value) => assert!(value.is_nan()),
        other => panic!("expected NaN, got {:?}", other),
    }
}

#[test]
fn boolean_expressions() {
    let tests = [
        ("true", true),
        ("false", false),
        ("1 < 2", true),
        ("1 > 2", false),
        ("1 < 1", false),
        ("1 > 1", false),
        ("1 == 1", true),
        ("1 != 1", false),
        ("1 == 2", false),
        ("1 != 2", true),
        ("true == true", true),
        ("false == false", true),
        ("true == false", false),
        ("true != false", true),
        ("false != true", true),
        ("(1 < 2) == true", true),
        ("(1 < 2) == false", false),
        ("(1 > 2) == true", false),
        ("(1 > 2) == false", true),
        // Mixed numeric equality promotes the integer side.
        ("5.0 == 5", true),
        ("1 < 1.5", true),
        ("2.5 > 2", true),
    ];
    for (input, expected) in tests {
        assert_bool(input, expected);
    }
}

#[test]
fn bang_operator() {
    let tests = [
        ("!true", false),
        ("!false", true),
        ("!!true", true),
        ("!!!true", false),
    ];
    for (input, expected) in tests {
        assert_bool(input, expected);
    }

    // Bang is defined on booleans and null only.
    assert_error("!5", "type mismatch: !INTEGER");
    assert_error("!\"hi\"", "type mismatch: !STRING");
    assert_bool("!(if (false) { 10 })", true);
}

#[test]
fn if_else_expressions() {
    assert_int("if (true) { 10 }", 10);
    assert_null("if (false) { 10 }");
    assert_int("if (1) { 10 }", 10);
    // Truthiness is not zero-ness: every non-false, non-null value takes
    // the branch, including zero.
    assert_int("if (0) { 10 }", 10);
    assert_int("if (1 < 2) { 10 }", 10);
    assert_null("if (1 > 2) { 10 }");
    assert_int("if (1 > 2) { 10 } else { 20 }", 20);
    assert_int("if (1 < 2) { 10 } else { 20 }", 10);
    assert_int("let r = if (5 < 10) { 1 } else { 2 }; r;", 1);
}

#[test]
fn return_statements() {
    let tests = [
        ("return 10;", 10),
        ("return 10; 9;", 10),
        ("return 2 * 5; 9;", 10),
        ("9; return 2 * 5; 9;", 10),
        ("if (10 > 1) { return 10; }", 10),
        (
            "if (10 > 1) {
  if (10 > 1) {
    return 10;
  }

  return 1;
}",
            10,
        ),
    ];
    for (input, expected) in tests {
        assert_int(input, expected);
    }
}

#[test]
fn error_handling_and_propagation() {
    let tests = [
        ("5 + true;", "type mismatch: INTEGER + BOOLEAN"),
        ("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN"),
        ("-true", "type mismatch: -BOOLEAN"),
        ("true + false;", "type mismatch: BOOLEAN + BOOLEAN"),
        ("true + false + true + false;", "type mismatch: BOOLEAN + BOOLEAN"),
        ("5; true + false; 5", "type mismatch: BOOLEAN + BOOLEAN"),
        ("if (10 > 1) { true + false; }", "type mismatch: BOOLEAN + BOOLEAN"),
        (
            "if (10 > 1) {
  if (10 > 1) {
    return true + false;
  }

  return 1;
}",
            "type mismatch: BOOLEAN + BOOLEAN",
        ),
        ("foobar", "identifier not found: foobar"),
        ("\"Hello\" - \"World\"", "type mismatch: STRING - STRING"),
        ("\"a\" == \"a\"", "type mismatch: STRING == STRING"),
        ("5 + \"five\"", "type mismatch: INTEGER + STRING"),
        ("true < false", "type mismatch: BOOLEAN < BOOLEAN"),
    ];
    for (input, expected) in tests {
        assert_error(input, expected);
    }
}

#[test]
fn error_stops_the_block_before_binding() {
    // The declaration's value errored, so `a` is never bound and the
    // following statement is never reached.
    assert_error("let a = 5 + true; a;", "type mismatch: INTEGER + BOOLEAN");
}

#[test]
fn let_statements_and_reassignment() {
    let tests = [
        ("let a = 5; a;", 5),
        ("let a = 5 * 5; a;", 25),
        ("let a = 5; let b = a; b;", 5),
        ("let a = 5; let b = a; let c = a + b + 5; c;", 15),
        ("let a = 9; a = 7; a", 7),
        ("float a = 9; a = 7; a", 7),
        ("int a = 3; int b = 4; a * a + b * b", 25),
    ];
    for (input, expected) in tests {
        assert_int(input, expected);
    }

    // A declaration itself yields no value.
    assert_null("let a = 5;");
}

#[test]
fn function_objects_reconstruct_their_source() {
    match run("fun(x) { x + 2; };") {
        Value::Function { params, .. } => assert_eq!(params, ["x"]),
        other => panic!("expected Function, got {:?}", other),
    }
    assert_eq!(run("fun(x) { x + 2; };").inspect(), "fun(x) {\n(x + 2)\n}");
}

#[test]
fn function_application() {
    let tests = [
        ("let identity = fun(x) { x; }; identity(5);", 5),
        ("let identity = fun(x) { return x; }; identity(5);", 5),
        ("let double = fun(x) { x * 2; }; double(5);", 10),
        ("let add = fun(x, y) { x + y; }; add(5, 5);", 10),
        ("let add = fun(x, y) { x + y; }; add(5 + 5, add(5, 5));", 20),
        ("fun(x) { x; }(5)", 5),
    ];
    for (input, expected) in tests {
        assert_int(input, expected);
    }
}

#[test]
fn call_errors() {
    assert_error(
        "let add = fun(x, y) { x + y; }; add(1);",
        "wrong number of arguments: want=2, got=1",
    );
    assert_error(
        "let one = fun() { 1; }; one(1, 2);",
        "wrong number of arguments: want=0, got=2",
    );
    assert_error("5(1)", "not a function: INTEGER");
    assert_error("\"hi\"()", "not a function: STRING");

    // Argument evaluation stops at the first error; `missing` is never
    // looked up.
    assert_error(
        "let f = fun(x, y) { x; }; f(5 + true, missing);",
        "type mismatch: INTEGER + BOOLEAN",
    );
    // The callee errors before any argument is touched.
    assert_error("nope(missing)", "identifier not found: nope");
}

#[test]
fn enclosing_environments() {
    let input = "
let first = 10;
let second = 10;
let third = 10;

let ourFunction = fun(first) {
  let second = 20;

  first + second + third;
};

ourFunction(20) + first + second;";

    assert_int(input, 70);
}

#[test]
fn closures_capture_their_definition_scope() {
    assert_int(
        "let newAdder = fun(x) { fun(y) { x + y; }; };
let addTwo = newAdder(2);
addTwo(2);",
        4,
    );

    // The captured scope outlives the call that created it.
    match run(
        "let makeGreeter = fun(greeting) { fun(name) { greeting + \" \" + name; }; };
let hello = makeGreeter(\"Hello\");
hello(\"Lynx\");",
    ) {
        Value::Str(value) => assert_eq!(value, "Hello Lynx"),
        other => panic!("expected Str, got {:?}", other),
    }

    // Recursion through a global binding.
    assert_int(
        "let fact = fun(n) { if (n < 2) { return 1; } n * fact(n - 1); };
fact(5);",
        120,
    );
}

#[test]
fn string_literals_and_concatenation() {
    match run("\"Hello World!\"") {
        Value::Str(value) => assert_eq!(value, "Hello World!"),
        other => panic!("expected Str, got {:?}", other),
    }
    match run("\"Hello\" + \" \" + \"World!\"") {
        Value::Str(value) => assert_eq!(value, "Hello World!"),
        other => panic!("expected Str, got {:?}", other),
    }
}

#[test]
fn builtin_functions() {
    assert_int("len(\"\")", 0);
    assert_int("len(\"four\")", 4);
    assert_int("len(\"hello world\")", 11);
    assert_error("len(1)", "len only supported on strings, got INTEGER");
    assert_error(
        "len(\"one\", \"two\")",
        "wrong number of arguments: want=1, got=2",
    );

    match run("help()") {
        Value::Str(value) => assert!(value.starts_with("Lynx is a small scripting language")),
        other => panic!("expected Str, got {:?}", other),
    }
    assert_error("help(1)", "wrong number of arguments: want=0, got=1");

    assert_null("print(1, \"two\", true)");
    assert_null("print()");
}

#[test]
fn bindings_shadow_builtins() {
    assert_int("let len = fun(x) { 99; }; len(\"abc\");", 99);
}

#[test]
fn idempotent_literal_evaluation() {
    for _ in 0..3 {
        assert_int("2 * (5 + 10)", 30);
        assert_float("5.4", 5.4);
    }
}
