//
// Copyright (c) 2024 Hemi Labs, Inc.
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//
// Subprocess harness for integration tests
//
// Runs a workspace binary with the given arguments, stdin and environment,
// then compares its stdout, stderr and exit status with a TestPlan.
//

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

pub struct TestPlan {
    pub cmd: String,
    pub args: Vec<String>,
    pub stdin_data: String,
    pub expected_out: String,
    pub expected_err: String,
    pub expected_exit_code: i32,
}

/// Path of a workspace binary, as built for the current profile.
///
/// Integration tests run from the package directory, one level below the
/// workspace root that holds `target/`.
fn binary_path(cmd: &str) -> PathBuf {
    let profile = if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    };
    let target_dir = match std::env::var_os("CARGO_TARGET_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir()
            .expect("current directory")
            .parent()
            .expect("package directory has a parent")
            .join("target"),
    };
    target_dir.join(profile).join(cmd)
}

/// Run `cmd` with environment variables added to ours.
pub fn run_test_base_with_env(
    cmd: &str,
    args: &[String],
    stdin_data: &[u8],
    env_vars: &[(&str, &str)],
) -> Output {
    let mut command = Command::new(binary_path(cmd));
    command
        .args(args)
        .envs(env_vars.iter().copied())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = command
        .spawn()
        .unwrap_or_else(|e| panic!("failed to spawn command {cmd}: {e}"));

    if let Some(mut stdin) = child.stdin.take() {
        // the child may exit without reading all of stdin
        if let Err(e) = stdin.write_all(stdin_data) {
            eprintln!("Error writing to stdin: {}", e);
        }
    }

    child.wait_with_output().expect("failed to wait for child")
}

fn check_output(plan: &TestPlan, output: &Output) {
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, plan.expected_out);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr, plan.expected_err);

    assert_eq!(output.status.code(), Some(plan.expected_exit_code));
    if plan.expected_exit_code == 0 {
        assert!(output.status.success());
    }
}

pub fn run_test(plan: TestPlan) {
    run_test_with_env(plan, &[]);
}

pub fn run_test_with_checker<F: FnMut(&TestPlan, &Output)>(plan: TestPlan, checker: F) {
    run_test_with_checker_and_env(plan, &[], checker);
}

/// Like `run_test`, with environment variables set for the subprocess.
pub fn run_test_with_env(plan: TestPlan, env_vars: &[(&str, &str)]) {
    run_test_with_checker_and_env(plan, env_vars, check_output);
}

/// Like `run_test_with_checker`, with environment variables set for the subprocess.
pub fn run_test_with_checker_and_env<F: FnMut(&TestPlan, &Output)>(
    plan: TestPlan,
    env_vars: &[(&str, &str)],
    mut checker: F,
) {
    let output = run_test_base_with_env(
        &plan.cmd,
        &plan.args,
        plan.stdin_data.as_bytes(),
        env_vars,
    );
    checker(&plan, &output);
}
