//
// Copyright (c) 2025-2026 Jeff Garzik
//
// This file is part of the posixutils-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::fs;

use plib::testing::{
    run_test, run_test_with_checker, run_test_with_checker_and_env, run_test_with_env, TestPlan,
};

const FOO_BAR: &str = "int foo(int a, int b)
{
    return a + b;
}
static void bar(void) { }
";

const LIST_PROTOTYPES: &str = "\
extern struct list * list_new ( const char *name ) ;
extern int list_sort ( struct list **head, list_cmp cmp ) ;
extern void list_free ( struct list *l ) ;
";

fn cproto_test(
    args: &[&str],
    test_data: &str,
    expected_out: &str,
    expected_err: &str,
    expected_exit_code: i32,
) {
    let str_args: Vec<String> = args.iter().map(|s| String::from(*s)).collect();

    run_test(TestPlan {
        cmd: String::from("cproto"),
        args: str_args,
        stdin_data: String::from(test_data),
        expected_out: String::from(expected_out),
        expected_err: String::from(expected_err),
        expected_exit_code,
    });
}

#[test]
fn cproto_stdin_scenario() {
    cproto_test(
        &[],
        FOO_BAR,
        "extern int foo ( int a, int b ) ;\n",
        "cproto: (stdin): 1 prototype extracted\n",
        0,
    );
}

#[test]
fn cproto_dash_is_stdin() {
    cproto_test(
        &["-q", "-"],
        FOO_BAR,
        "extern int foo ( int a, int b ) ;\n",
        "",
        0,
    );
}

#[test]
fn cproto_empty_input() {
    cproto_test(&[], "", "", "cproto: (stdin): 0 prototypes extracted\n", 0);
}

#[test]
fn cproto_declarations_only() {
    cproto_test(
        &["-q"],
        "# 1 \"decl.h\"\nint x;\nextern int f(int);\nstruct s { int a; };\n",
        "",
        "",
        0,
    );
}

#[test]
fn cproto_prefix() {
    cproto_test(
        &["-q", "-p", "__declspec(dllexport)"],
        FOO_BAR,
        "__declspec(dllexport) extern int foo ( int a, int b ) ;\n",
        "",
        0,
    );
}

#[test]
fn cproto_empty_prefix() {
    cproto_test(
        &["-q", "-p", ""],
        FOO_BAR,
        "extern int foo ( int a, int b ) ;\n",
        "",
        0,
    );
}

#[test]
fn cproto_file() {
    cproto_test(
        &["tests/cproto/list.i"],
        "",
        LIST_PROTOTYPES,
        "cproto: tests/cproto/list.i: 3 prototypes extracted\n",
        0,
    );
}

#[test]
fn cproto_files_in_order() {
    let expected = format!("{}extern int foo ( int a, int b ) ;\n", LIST_PROTOTYPES);
    cproto_test(
        &["-q", "tests/cproto/list.i", "-"],
        FOO_BAR,
        &expected,
        "",
        0,
    );
}

#[test]
fn cproto_unbalanced_partial() {
    cproto_test(
        &["tests/cproto/unbalanced.i"],
        "",
        "extern int first ( void ) ;\nextern int second ( int x ) ;\n",
        "cproto: tests/cproto/unbalanced.i: 2 prototypes extracted\n\
         cproto: tests/cproto/unbalanced.i: incomplete parse, output is partial: \
         unbalanced braces: block opened at line 8 is never closed\n",
        1,
    );
}

#[test]
fn cproto_missing_file() {
    cproto_test(
        &["-q", "tests/cproto/does-not-exist.i", "-"],
        FOO_BAR,
        "extern int foo ( int a, int b ) ;\n",
        "cproto: tests/cproto/does-not-exist.i: I/O error: No such file or directory (os error 2)\n",
        1,
    );
}

#[test]
fn cproto_output_file_with_guard() {
    let dir = tempfile::TempDir::new().unwrap();
    let out_path = dir.path().join("list_proto.h");
    let out_str = out_path.to_str().unwrap();

    cproto_test(
        &["-q", "-g", "LIST_PROTO_H", "-o", out_str, "tests/cproto/list.i"],
        "",
        "",
        "",
        0,
    );

    let written = fs::read_to_string(&out_path).unwrap();
    similar_asserts::assert_eq!(
        written,
        format!(
            "#ifndef LIST_PROTO_H\n#define LIST_PROTO_H\n\n{}\n#endif /* LIST_PROTO_H */\n",
            LIST_PROTOTYPES
        )
    );
}

#[test]
fn cproto_preprocess_with_cpp_env() {
    run_test_with_env(
        TestPlan {
            cmd: String::from("cproto"),
            args: vec![String::from("-E"), String::from("tests/cproto/list.i")],
            stdin_data: String::new(),
            expected_out: String::from(LIST_PROTOTYPES),
            expected_err: String::from("cproto: tests/cproto/list.i: 3 prototypes extracted\n"),
            expected_exit_code: 0,
        },
        &[("CPP", "cat")],
    );
}

#[test]
fn cproto_preprocess_failure() {
    run_test_with_checker_and_env(
        TestPlan {
            cmd: String::from("cproto"),
            args: vec![
                String::from("-E"),
                String::from("-q"),
                String::from("tests/cproto/does-not-exist.i"),
            ],
            stdin_data: String::new(),
            expected_out: String::new(),
            expected_err: String::new(),
            expected_exit_code: 1,
        },
        &[("CPP", "cat")],
        |plan, output| {
            assert_eq!(output.status.code(), Some(plan.expected_exit_code));
            assert_eq!(String::from_utf8_lossy(&output.stdout), plan.expected_out);
            let stderr = String::from_utf8_lossy(&output.stderr);
            assert!(stderr
                .contains("cproto: tests/cproto/does-not-exist.i: preprocessor 'cat' failed"));
        },
    );
}

#[test]
fn cproto_idempotent() {
    let mut outputs = Vec::new();
    for _ in 0..2 {
        run_test_with_checker(
            TestPlan {
                cmd: String::from("cproto"),
                args: vec![String::from("-q"), String::from("tests/cproto/list.i")],
                stdin_data: String::new(),
                expected_out: String::from(LIST_PROTOTYPES),
                expected_err: String::new(),
                expected_exit_code: 0,
            },
            |_, output| outputs.push(output.stdout.clone()),
        );
    }
    assert_eq!(outputs[0], LIST_PROTOTYPES.as_bytes());
    assert_eq!(outputs[0], outputs[1]);
}
