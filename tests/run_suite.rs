use std::path::PathBuf;
use std::{env, process::Command};

use regex::Regex;
use test_generator::test_resources;

fn command() -> Command {
    // Create full path to binary
    let path = env::current_exe().expect("Could not get path to current executable.");
    let path = path.parent().expect("Path parent not found.");
    let mut path = path.parent().expect("Path parent not found.").to_owned();
    path.push(env!("CARGO_PKG_NAME"));
    path.set_extension(env::consts::EXE_EXTENSION);
    Command::new(path.into_os_string())
}

#[test_resources("tests/suite/*/*.txt")]
fn check_file(filename: &str) {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push(filename);
    let expected = std::fs::read_to_string(path.with_extension("out"))
        .expect("Could not read expected-output file.");
    let expected: Vec<&str> = expected.lines().collect();

    let output = command()
        .arg(&path)
        .output()
        .expect("Command execution error.");
    assert!(
        output.status.success(),
        "Checker exited with failure, expected success"
    );
    assert!(output.stderr.is_empty(), "Nothing should go to stderr");

    let stdout = String::from_utf8(output.stdout).expect("Invalid UTF-8");
    let trace_re =
        Regex::new(r"^Next token is: (-?\d+)\s+Next lexeme is (.*)$").expect("Invalid regex.");

    // Split trace lines from diagnostics, rebuilding the source from the
    // traced lexemes as we go. The end marker's fixed EOF lexeme is the one
    // trace entry that is not source text.
    let mut rebuilt = String::new();
    let mut reported = Vec::new();
    for line in stdout.lines() {
        match trace_re.captures(line) {
            Some(captures) => {
                if !(&captures[1] == "-1" && &captures[2] == "EOF") {
                    rebuilt.push_str(&captures[2]);
                }
            }
            None => reported.push(line),
        }
    }
    assert_eq!(expected, reported, "Diagnostics should match");

    let source = std::fs::read_to_string(&path).expect("Could not read path to string.");
    let stripped: String = source.chars().filter(|c| !c.is_whitespace()).collect();
    assert_eq!(rebuilt, stripped, "Lexemes should reconstruct the source");

    let rerun = command()
        .arg(&path)
        .output()
        .expect("Command execution error.");
    assert_eq!(
        stdout.as_bytes(),
        rerun.stdout.as_slice(),
        "Repeated runs should produce identical output"
    );
}
