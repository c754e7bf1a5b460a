use calc::{evaluate_line, parse_line, Arity, CalcError, EvalError, OperatorName, ParseError, Value};

fn assert_value(src: &str, expected: Value) {
    match evaluate_line(src) {
        Ok(value) => assert_eq!(value, expected, "evaluating \"{src}\""),
        Err(e) => panic!("\"{src}\" failed: {}", e.report()),
    }
}

fn assert_kind(src: &str, kind: &str) {
    match evaluate_line(src) {
        Ok(value) => panic!("\"{src}\" evaluated to {value}, expected {kind}"),
        Err(e) => assert_eq!(e.kind(), kind, "evaluating \"{src}\""),
    }
}

fn op(spelling: &str) -> OperatorName {
    OperatorName::lookup(spelling).unwrap()
}

#[test]
fn literals() {
    assert_value("5", Value::Integer(5));
    assert_value("-5", Value::Integer(-5));
    assert_value("3.0", Value::Float(3.0));
}

#[test]
fn basic_arithmetic() {
    assert_value("add(1, 2, 3)", Value::Integer(6));
    assert_value("+(1, 2.5)", Value::Float(3.5));
    assert_value("sub(10)", Value::Integer(-10));
    assert_value("sub(10, 3, 2)", Value::Integer(5));
    assert_value("mul(2, 3, 4)", Value::Integer(24));
    assert_value("power(2, 10)", Value::Integer(1024));
    assert_value("modolo(10, 4)", Value::Integer(2));
}

#[test]
fn nested_calls() {
    assert_value("add(1, mul(2, 3))", Value::Integer(7));
    assert_value("*(+(1, 2), -(10, 4), /(9, 3))", Value::Float(54.0));
    assert_value("^(%(17, 5), sub(add(2, 2), 1))", Value::Integer(8));
}

#[test]
fn identity_elements() {
    assert_value("mul()", Value::Integer(1));
    assert_value("add()", Value::Integer(0));
}

#[test]
fn division_always_yields_a_float() {
    assert_value("div(7, 2)", Value::Float(3.5));
    assert_value("div(6, 3)", Value::Float(2.0));
    assert_value("/(-1, 4)", Value::Float(-0.25));
}

#[test]
fn integer_power_and_modulo_conventions() {
    assert_value("power(2, -2)", Value::Float(0.25));
    assert_value("power(2.0, 3)", Value::Float(8.0));
    assert_value("modolo(-7, 2)", Value::Integer(1));
    assert_value("modolo(7.5, 2)", Value::Float(1.5));
}

#[test]
fn evaluation_errors() {
    assert_eq!(
        evaluate_line("div(1, 0)"),
        Err(CalcError::Eval(EvalError::DivisionByZero(op("div"))))
    );
    assert_kind("%(1, 0.0)", "DivisionByZero");
    assert_eq!(
        evaluate_line("sub()"),
        Err(CalcError::Eval(EvalError::ArityError {
            operator: op("sub"),
            got: 0,
            expected: Arity::AtLeast(1),
        }))
    );
    assert_kind("power(2)", "ArityError");
    assert_kind("div(1, 2, 3)", "ArityError");
}

#[test]
fn first_failing_operand_wins() {
    assert_eq!(
        evaluate_line("add(div(1, 0), sub())"),
        Err(CalcError::Eval(EvalError::DivisionByZero(op("div"))))
    );
}

#[test]
fn syntax_errors() {
    assert_eq!(
        evaluate_line("add(1, 2) 3"),
        Err(CalcError::Parse(ParseError::ExtraTokens(vec!["3".into()])))
    );
    assert_eq!(
        evaluate_line("mul(2,"),
        Err(CalcError::Parse(ParseError::EmptyInput))
    );
    assert_eq!(
        evaluate_line("foo(1)"),
        Err(CalcError::Parse(ParseError::UnexpectedToken("foo".into())))
    );
    assert_kind("add 1", "ExpectedOpenParen");
    assert_kind("add(1 2)", "ExpectedComma");
    assert_kind("", "EmptyInput");
}

#[test]
fn error_reports() {
    let report = |src: &str| evaluate_line(src).unwrap_err().report();
    assert_eq!(report("foo(1)"), "UnexpectedToken: unexpected foo");
    assert_eq!(report("add"), "ExpectedOpenParen: expected ( after add");
    assert_eq!(report("mul(2,"), "EmptyInput: unexpected end of line");
    assert_eq!(report("5 6 7"), "ExtraTokens: extra token(s): 6 7");
    assert_eq!(
        report("div(1)"),
        "ArityError: div requires exactly 2 arguments, got 1"
    );
}

#[test]
fn parse_line_prints_canonically() {
    let tree = parse_line("add(1,mul( 2 ,3.5 ))").unwrap();
    assert_eq!(tree.to_string(), "add(1, mul(2, 3.5))");
    assert_eq!(parse_line(&tree.to_string()), Ok(tree));
}

#[test]
fn power_with_huge_exponents_on_trivial_bases() {
    assert_value("power(1, 5000000000)", Value::Integer(1));
    assert_value("power(0, 5000000000)", Value::Integer(0));
    assert_value("^(-1, 5000000001)", Value::Integer(-1));
    assert_value("^(2, 100)", Value::Float(2f64.powi(100)));
}

#[test]
fn deeply_nested_lines_evaluate() {
    let depth = 100_000;
    let line = format!("{}1{}", "add(".repeat(depth), ")".repeat(depth));
    assert_value(&line, Value::Integer(1));

    let line = format!("{}div(1, 0){}", "sub(".repeat(depth), ")".repeat(depth));
    assert_kind(&line, "DivisionByZero");
}
