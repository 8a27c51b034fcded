#![allow(dead_code)]

use assert_cmd::assert::Assert;
use assert_cmd::Command;

pub const CHILD_ENV: &str = "TYPES_FATAL_CHILD";

pub fn in_child() -> bool {
    std::env::var_os(CHILD_ENV).is_some()
}

/// Re-runs the named test alone in a child process.
pub fn run_in_child(test: &str) -> Assert {
    let exe = std::env::current_exe().expect("test binary path");
    Command::new(exe)
        .args([test, "--exact", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .assert()
}

/// Declares a test whose body must abort the process. The parent re-runs the
/// test in a child and checks for abnormal exit and the expected diagnostics.
macro_rules! fatal_test {
    ($name:ident, [$($expected:expr),+ $(,)?], $body:block) => {
        #[test]
        fn $name() {
            if common::in_child() {
                #[allow(unreachable_code)]
                {
                    let _ = $body;
                }
                return;
            }
            println!("=== Expecting abort in {} ===", stringify!($name));
            common::run_in_child(stringify!($name))
                .failure()
                $(.stderr(predicates::str::contains($expected)))+;
            println!("✓ {} aborted", stringify!($name));
        }
    };
}
