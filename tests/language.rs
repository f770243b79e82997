use std::{fs, path::Path};

use labka::{
    error::{Error, LexError, ParseError, RuntimeError},
    evaluate_script,
    interpreter::{environment::Environment, parser::core::MAX_NESTING_DEPTH, session::Session},
};
use walkdir::WalkDir;

#[test]
fn transcripts_match_expected_output() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/transcripts");
    let mut count = 0;

    for entry in
        WalkDir::new(&root).into_iter()
                           .filter_map(Result::ok)
                           .filter(|e| e.path().extension().is_some_and(|ext| ext == "lab"))
    {
        let path = entry.path();
        let script =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_out = fs::read_to_string(path.with_extension("out")).unwrap_or_default();
        let expected_err = fs::read_to_string(path.with_extension("err")).unwrap_or_default();

        let (mut out, mut err) = (Vec::new(), Vec::new());
        Session::default().run(script.as_bytes(), &mut out, &mut err)
                          .unwrap();

        count += 1;
        assert_eq!(String::from_utf8(out).unwrap(),
                   expected_out,
                   "stdout of {path:?} differs");
        assert_eq!(String::from_utf8(err).unwrap(),
                   expected_err,
                   "stderr of {path:?} differs");
    }

    assert!(count > 0, "No transcripts found in {root:?}");
}

fn assert_output(src: &str, expected: &[i64]) {
    match evaluate_script(src) {
        Ok(values) => assert_eq!(values, expected, "Script produced wrong output:\n{src}"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn script_error(src: &str) -> Error {
    match evaluate_script(src) {
        Ok(values) => panic!("Script succeeded with {values:?} but was expected to fail:\n{src}"),
        Err(e) => e,
    }
}

#[test]
fn precedence_and_associativity() {
    assert_output("5 + 3 * 2", &[11]);
    assert_output("2 * 3 + 4 * 5", &[26]);
    assert_output("(5 + 3) * 2", &[16]);
    assert_output("1 + 2 + 3 * 4 * 5 + 6", &[69]);
    assert_output("10 - 4 - 3", &[3]);
    assert_output("64 / 4 / 2", &[8]);
    assert_output("((((7))))", &[7]);
}

#[test]
fn whitespace_is_only_a_separator() {
    assert_output("  1+2*3  ", &[7]);
    assert_output("\t4 *\t5", &[20]);
    assert_output("max( 1 ,2 )", &[2]);
}

#[test]
fn min_and_max_are_commutative_and_bounding() {
    let samples = [-9, -1, 0, 1, 3, 42, i64::MAX, i64::MIN];

    for a in samples {
        for b in samples {
            let mut session = Session::default();
            let min = session.run_line(&format!("min({a}, {b})"));
            let max = session.run_line(&format!("max({b}, {a})"));

            // i64::MIN has no literal form, so it is out of reach here.
            if a == i64::MIN || b == i64::MIN {
                assert!(min.is_err() && max.is_err());
                continue;
            }

            let (min, max) = (min.unwrap().unwrap(), max.unwrap().unwrap());
            assert!(min <= a && min <= b && a <= max && b <= max);
            assert_eq!(Some(min), session.run_line(&format!("min({b}, {a})")).unwrap());
        }
    }
}

#[test]
fn variable_declarations_and_shadowing() {
    assert_output("var a = 4\na * a", &[16]);
    assert_output("var a = 1\nvar a = a + 1\nvar a = a * 10\na", &[20]);
    assert_output("var x1 = 2\nx1 * 3", &[6]);
}

#[test]
fn names_are_case_sensitive() {
    assert_eq!(script_error("var A = 1\na"),
               Error::Runtime(RuntimeError::UndefinedVariable { name: "a".to_string(),
                                                                line: 2, }));
}

#[test]
fn declarations_print_nothing() {
    assert_output("var a = 1\ndef f(x) { x }", &[]);
    assert_output("", &[]);
}

#[test]
fn user_functions_are_callable_repeatedly() {
    assert_output("def sq(x) { x * x }\nsq(2)\nsq(3)\nsq(sq(2))", &[4, 9, 16]);
    assert_output("def seven() { 7 }\nseven() + seven()", &[14]);
    assert_output("def myfunc(a, b) { min(a, b) + max(a, b) }\nmyfunc(3, 4)\nmyfunc(10, -2)",
                  &[7, 8]);
}

#[test]
fn parameters_shadow_globals_and_do_not_escape() {
    assert_output("var a = 100\ndef g(a) { a * 2 }\ng(3)\na", &[6, 100]);

    let err = script_error("def g(p) { p }\ng(1)\np");
    assert!(matches!(err, Error::Runtime(RuntimeError::UndefinedVariable { line: 3, .. })));
}

#[test]
fn function_bodies_bind_late() {
    assert_output("def addk(x) { x + k }\nvar k = 1\naddk(1)\nvar k = 5\naddk(1)", &[2, 6]);
    assert_output("def a() { b() }\ndef b() { 1 }\na()\ndef b() { 2 }\na()", &[1, 2]);
}

#[test]
fn callers_parameters_are_not_visible_to_callees() {
    let err = script_error("def inner(x) { x + y }\ndef outer(y) { inner(1) }\nouter(5)");
    let missing = RuntimeError::UndefinedVariable { name: "y".to_string(),
                                                    line: 1, };
    assert_eq!(err,
               Error::Runtime(RuntimeError::InFunction { name:       "inner".to_string(),
                                                         defined_on: 1,
                                                         line:       3,
                                                         error:      Box::new(missing), }));
}

#[test]
fn variables_and_functions_have_separate_namespaces() {
    assert_output("var f = 3\ndef f(x) { x + f }\nf(1)\nf", &[4, 3]);
}

#[test]
fn builtins_resolve_before_user_functions() {
    assert_output("def max(a, b) { 0 }\nmax(1, 2)", &[2]);
}

#[test]
fn unary_minus_and_extra_builtins() {
    assert_output("-3 * -2\n2 - -3\n--5\n-(2 + 3)", &[6, 5, 5, -5]);
    assert_output("pow(2, 10)\npow(0, 0)\npow(-1, 3)\nabs(-5)\nabs(5)", &[1024, 1, -1, 5, 5]);
    assert_output("7 / 2\n-7 / 2\n7 / -2", &[3, -3, -3]);
}

#[test]
fn arithmetic_errors() {
    assert!(matches!(script_error("1 / 0"),
                     Error::Runtime(RuntimeError::DivisionByZero { line: 1 })));
    assert!(matches!(script_error("9223372036854775807 + 1"),
                     Error::Runtime(RuntimeError::Overflow { line: 1 })));
    assert!(matches!(script_error("3037000500 * 3037000500"),
                     Error::Runtime(RuntimeError::Overflow { .. })));
    assert!(matches!(script_error("pow(2, 63)"),
                     Error::Runtime(RuntimeError::Overflow { .. })));
    assert!(matches!(script_error("pow(2, -1)"),
                     Error::Runtime(RuntimeError::InvalidArgument { .. })));
}

#[test]
fn call_errors() {
    assert_eq!(script_error("min(1, 2, 3)"),
               Error::Runtime(RuntimeError::ArityMismatch { name:     "min".to_string(),
                                                            expected: 2,
                                                            found:    3,
                                                            line:     1, }));
    assert_eq!(script_error("def f(a, b) { a }\nf(1)"),
               Error::Runtime(RuntimeError::ArityMismatch { name:     "f".to_string(),
                                                            expected: 2,
                                                            found:    1,
                                                            line:     2, }));
    for call in ["nope(1)", "nope(undefinedvar)", "nope(1 / 0)"] {
        assert_eq!(script_error(call),
                   Error::Runtime(RuntimeError::UndefinedFunction { name: "nope".to_string(),
                                                                    line: 1, }),
                   "{call}");
    }
}

#[test]
fn errors_in_function_bodies_report_the_calling_line() {
    let mut session = Session::default();
    session.run_line("def half(x) { x / 0 }").unwrap();
    session.run_line("def twice(x) { half(x) * 2 }").unwrap();

    let err = session.run_line("twice(4)").unwrap_err();
    assert_eq!(err,
               Error::Runtime(RuntimeError::InFunction { name:       "half".to_string(),
                                                         defined_on: 1,
                                                         line:       3,
                                                         error:      Box::new(RuntimeError::DivisionByZero { line: 1 }), }));
    assert_eq!(err.to_string(),
               "Error on line 3: In function 'half' (defined on line 1): Division by zero.");
}

#[test]
fn runaway_recursion_is_reported() {
    let mut session = Session::new(Environment::with_max_call_depth(16), Default::default());
    session.run_line("def down(n) { down(n - 1) }").unwrap();

    let exceeded = RuntimeError::CallDepthExceeded { limit: 16,
                                                     line:  1, };
    assert_eq!(session.run_line("down(3)"),
               Err(Error::Runtime(RuntimeError::InFunction { name:       "down".to_string(),
                                                             defined_on: 1,
                                                             line:       2,
                                                             error:      Box::new(exceeded), })));
    // The depth counter unwinds after a failure.
    assert!(session.run_line("def one() { 1 }").is_ok());
    assert_eq!(session.run_line("one()"), Ok(Some(1)));
}

#[test]
fn nesting_within_the_call_limit_succeeds() {
    let mut session = Session::new(Environment::with_max_call_depth(3), Default::default());
    session.run_line("def a(x) { x + 1 }").unwrap();
    session.run_line("def b(x) { a(x) + 1 }").unwrap();
    session.run_line("def c(x) { b(x) + 1 }").unwrap();
    session.run_line("def d(x) { c(x) + 1 }").unwrap();

    assert_eq!(session.run_line("c(0)"), Ok(Some(3)));

    let exceeded = RuntimeError::CallDepthExceeded { limit: 3,
                                                     line:  2, };
    assert_eq!(session.run_line("d(0)"),
               Err(Error::Runtime(RuntimeError::InFunction { name:       "b".to_string(),
                                                             defined_on: 2,
                                                             line:       6,
                                                             error:      Box::new(exceeded), })));
}

#[test]
fn nesting_is_limited_per_line() {
    let parens = format!("{}1{}", "(".repeat(200), ")".repeat(200));
    let negations = format!("{}7", "-".repeat(200));
    let chain = vec!["1"; 200].join(" + ");
    assert_output(&format!("{parens}\n{negations}\n{chain}"), &[1, 7, 200]);

    let too_deep = format!("{}1{}", "(".repeat(300), ")".repeat(300));
    assert_eq!(script_error(&too_deep),
               Error::Parse(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH,
                                                         line:  1, }));
}

#[test]
fn deeply_nested_lines_fail_without_ending_the_session() {
    let parens = format!("{}1{}", "(".repeat(5000), ")".repeat(5000));
    let negations = format!("{}1", "-".repeat(300_000));
    let chain = vec!["1"; 100_000].join(" + ");
    let input = format!("{parens}\n{negations}\n{chain}\n2 + 2\n");

    let (mut out, mut err) = (Vec::new(), Vec::new());
    let summary = Session::default().run(input.as_bytes(), &mut out, &mut err)
                                    .unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "4\n");
    assert_eq!((summary.lines, summary.results, summary.errors), (4, 1, 3));

    let err = String::from_utf8(err).unwrap();
    for (i, message) in err.lines().enumerate() {
        assert_eq!(message,
                   format!("Error on line {}: Expression is nested more than {MAX_NESTING_DEPTH} levels deep.",
                           i + 1));
    }
}

#[test]
fn invalid_utf8_fails_only_its_own_line() {
    let input: &[u8] = b"1 + 1\n\xff\xfe\n2 + 2\r\n";
    let (mut out, mut err) = (Vec::new(), Vec::new());

    let summary = Session::default().run(input, &mut out, &mut err).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "2\n4\n");
    assert_eq!(String::from_utf8(err).unwrap(),
               "Error on line 2: Line is not valid UTF-8.\n");
    assert_eq!((summary.lines, summary.results, summary.errors), (3, 2, 1));
}

#[test]
fn failed_lines_leave_the_environment_untouched() {
    let mut session = Session::default();
    session.run_line("var a = 1").unwrap();

    assert!(session.run_line("var a = 1 / 0").is_err());
    assert!(session.run_line("var b = a +").is_err());
    assert!(session.run_line("def f(x) { x").is_err());

    let env = session.environment();
    assert_eq!(env.variable("a"), Some(1));
    assert_eq!(env.variable("b"), None);
    assert!(env.function("f").is_none());
    assert_eq!((env.variable_count(), env.function_count()), (1, 0));
}

#[test]
fn lex_errors() {
    assert_eq!(script_error("1 % 2"),
               Error::Lex(LexError::UnexpectedCharacter { token: "%".to_string(),
                                                          line:  1, }));
    assert!(matches!(script_error("var my_var = 1"), Error::Lex(_)));
    assert_eq!(script_error("99999999999999999999"),
               Error::Lex(LexError::LiteralTooLarge { literal: "99999999999999999999".to_string(),
                                                      line:    1, }));
}

#[test]
fn parse_errors() {
    assert!(matches!(script_error("var var = 1"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(script_error("var = 1"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(script_error("var a 1"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(script_error("var a ="),
                     Error::Parse(ParseError::UnexpectedEndOfInput { line: 1 })));
    assert!(matches!(script_error("1 2"),
                     Error::Parse(ParseError::UnexpectedTrailingTokens { .. })));
    assert!(matches!(script_error("max(1, 2"),
                     Error::Parse(ParseError::ExpectedClosingParen { line: 1 })));
    assert!(matches!(script_error("max(1 2)"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(script_error("1 + )"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(script_error("def f(a) a"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(script_error("def f(a) { a"),
                     Error::Parse(ParseError::ExpectedClosingBrace { line: 1 })));
    assert!(matches!(script_error("def f(1) { 1 }"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
    assert_eq!(script_error("def f(a, a) { a }"),
               Error::Parse(ParseError::DuplicateParameter { name: "a".to_string(),
                                                             line: 1, }));
}

#[test]
fn errors_report_the_session_line() {
    let mut session = Session::default();
    session.run_line("").unwrap();
    session.run_line("var a = 2").unwrap();

    let err = session.run_line("a + )").unwrap_err();
    assert_eq!(err.line_number(), 3);
    assert!(err.to_string().starts_with("Error on line 3:"));
}
