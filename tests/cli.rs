use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

fn labka() -> Command {
    Command::new(env!("CARGO_BIN_EXE_labka"))
}

fn run_with_stdin(args: &[&str], input: &str) -> Output {
    let mut child = labka().args(args)
                           .stdin(Stdio::piped())
                           .stdout(Stdio::piped())
                           .stderr(Stdio::piped())
                           .env_remove("RUST_LOG")
                           .spawn()
                           .expect("Failed to execute labka");

    child.stdin
         .take()
         .expect("stdin is piped")
         .write_all(input.as_bytes())
         .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for labka")
}

#[test]
fn each_harness_case_runs_in_its_own_process() {
    let cases = [("5 + 3 * 2\n", "11"),
                 ("max(5, 2)\n", "5"),
                 ("min(3, 4)\n", "3"),
                 ("max(min(3 * 2, 2), 2)\n", "2"),
                 ("var a = max(min(3 * 2, 2), 2)\n", ""),
                 ("def myfunc(a, b) { min(a, b) + max(a, b) }\n", "")];

    for (input, expected) in cases {
        let output = run_with_stdin(&[], input);

        assert!(output.status.success(), "labka failed for {input:?}");
        assert_eq!(String::from_utf8(output.stdout).unwrap().trim(), expected);
        assert!(output.stderr.is_empty(), "unexpected stderr for {input:?}");
    }
}

#[test]
fn bindings_persist_across_lines_of_one_process() {
    let input = "var a = max(min(3 * 2, 2), 2)\na + 3\n\
                 def myfunc(a, b) { min(a, b) + max(a, b) }\nmyfunc(3, 4)\n";
    let output = run_with_stdin(&[], input);

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "5\n7\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn failing_lines_are_reported_without_aborting() {
    let output = run_with_stdin(&[], "1 + 1\nmissing\n2 + 2\n");

    assert!(output.status.success(), "a failing line must not fail the process");
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "2\n4\n");
    assert_eq!(String::from_utf8(output.stderr).unwrap(),
               "Error on line 2: Unknown variable 'missing'.\n");
}

#[test]
fn fail_fast_stops_at_the_first_error() {
    let output = run_with_stdin(&["--fail-fast"], "1 + 1\n1 / 0\n2 + 2\n");

    assert!(!output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "2\n");
    assert_eq!(String::from_utf8(output.stderr).unwrap(),
               "Error on line 2: Division by zero.\n");
}

#[test]
fn eval_flag_replaces_stdin() {
    let output = labka().args(["--eval", "var x = 6\nx * 7"])
                        .stdin(Stdio::null())
                        .env_remove("RUST_LOG")
                        .output()
                        .expect("Failed to execute labka");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "42\n");
}

#[test]
fn max_call_depth_flag_limits_recursion() {
    let output = run_with_stdin(&["--max-call-depth", "2"],
                                "def f(x) { x }\ndef g(x) { f(x) }\ndef h(x) { g(x) }\ng(1)\nh(1)\n");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "1\n");
    assert_eq!(String::from_utf8(output.stderr).unwrap(),
               "Error on line 5: In function 'g' (defined on line 2): Call depth exceeded the limit of 2.\n");
}

#[test]
fn verbose_logging_goes_to_stderr_only() {
    let output = run_with_stdin(&["-vv"], "var a = 1\na\n");

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "1\n");
    assert!(String::from_utf8(output.stderr).unwrap().contains("session finished"));
}

#[test]
fn version_flag() {
    let output = labka().arg("--version")
                        .output()
                        .expect("Failed to execute labka");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("labka"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}
