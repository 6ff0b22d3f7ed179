// Copyright (c) The qm-primes Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::{
    fs,
    io::Write,
    process::{Command, Output, Stdio},
};

fn qm_primes(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_qm-primes"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("qm-primes should start");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("writing stdin succeeds");
    child.wait_with_output().expect("qm-primes should finish")
}

fn stdout_of(output: &Output) -> &str {
    std::str::from_utf8(&output.stdout).expect("output is UTF-8")
}

#[test]
fn test_stdin_to_stdout() {
    let output = qm_primes(&[], "000\n001\n010\n011\n100\n");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "-00\n0--\n");

    let output = qm_primes(&["-", "-"], "00\n01\n10\n11\n");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "--\n");

    let output = qm_primes(&[], "");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "");
}

#[test]
fn test_strategies_and_backends() {
    let input = "0000\n0001\n0011\n0111\n1111\n1110\n1010\n";
    let expected = stdout_of(&qm_primes(&[], input)).to_owned();
    for strategy in ["all-pairs", "block-slice"] {
        for backend in ["auto", "8", "16", "32", "64", "growable"] {
            let output = qm_primes(&["--strategy", strategy, "--backend", backend], input);
            assert!(output.status.success(), "{} / {}", strategy, backend);
            assert_eq!(stdout_of(&output), expected, "{} / {}", strategy, backend);
        }
    }
}

#[test]
fn test_formats() {
    let input = "000\n001\n";
    let output = qm_primes(&["--format", "numeric"], input);
    assert_eq!(stdout_of(&output), "002\n");
    let output = qm_primes(&["--format", "algebraic"], input);
    assert_eq!(stdout_of(&output), "a' b'\n");
}

#[test]
fn test_wide_input() {
    let line = "0".repeat(70);
    let input = format!("{}\n1{}\n", line, &line[1..]);
    let output = qm_primes(&[], &input);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), format!("-{}\n", &line[1..]));

    let output = qm_primes(&["--backend", "64"], &input);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let out = dir.path().join("out.txt");
    fs::write(&input, "11\n10\n").unwrap();

    let output = qm_primes(&[input.to_str().unwrap(), out.to_str().unwrap()], "");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert_eq!(fs::read_to_string(&out).unwrap(), "1-\n");
}

#[test]
fn test_parse_error_leaves_output_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.txt");
    let out = dir.path().join("out.txt");
    fs::write(&input, "01\n011\n").unwrap();

    let output = qm_primes(&[input.to_str().unwrap(), out.to_str().unwrap()], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(!out.exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("at line 2"), "stderr: {}", stderr);
    assert!(stderr.contains("bad.txt"), "stderr: {}", stderr);

    fs::write(&out, "previous contents\n").unwrap();
    let output = qm_primes(&[input.to_str().unwrap(), out.to_str().unwrap()], "");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(fs::read_to_string(&out).unwrap(), "previous contents\n");
}

#[test]
fn test_usage_and_io_errors() {
    let output = qm_primes(&["a", "b", "c"], "");
    assert_eq!(output.status.code(), Some(1));

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");
    let output = qm_primes(&[missing.to_str().unwrap()], "");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing.txt"), "stderr: {}", stderr);
}
