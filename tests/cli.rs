use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const BIN: &str = env!("CARGO_BIN_EXE_freq-counter");

fn temp_dir(test: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("freq-counter-{}-{}", test, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_input(dir: &Path, contents: &[u8]) -> PathBuf {
    let path = dir.join("input.txt");
    fs::write(&path, contents).unwrap();
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(BIN).args(args).env_remove("RUST_LOG").output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_counts_simple_file() {
    let dir = temp_dir("simple");
    let path = write_input(&dir, b"aab");
    let output = run(&[path.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Char\tFreq\n'a'\t2\n'b'\t1\nUnique chars:\t 2\nTotal chars:\t 3\n"
    );
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_empty_file() {
    let dir = temp_dir("empty");
    let path = write_input(&dir, b"");
    let output = run(&[path.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Char\tFreq\nUnique chars:\t 0\nTotal chars:\t 0\n");
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_wrong_argument_count() {
    let dir = temp_dir("args");
    let path = write_input(&dir, b"abc");
    for args in [vec![], vec![path.to_str().unwrap(), "extra"]] {
        let output = run(&args);
        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());
        assert!(String::from_utf8_lossy(&output.stderr).contains("usage:"));
    }
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_missing_file() {
    let output = run(&["/nonexistent/freq-counter/missing.txt"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Fatal: cannot open file"));
}

#[test]
fn test_ties_are_ordered_by_code_point() {
    let dir = temp_dir("ties");
    let path = write_input(&dir, b"AaAa!!");
    let output = run(&[path.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Char\tFreq\n'!'\t2\n'A'\t2\n'a'\t2\nUnique chars:\t 3\nTotal chars:\t 6\n"
    );
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_multibyte_and_truncated_utf8() {
    let dir = temp_dir("mixed");
    let mut contents = "日日é\n".as_bytes().to_vec();
    contents.extend_from_slice(b"\xe2\x82");
    let path = write_input(&dir, &contents);
    let output = run(&[path.to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "Char\tFreq\n'日'\t2\n'\u{FFFD}'\t2\n'\\n'\t1\n'é'\t1\nUnique chars:\t 4\nTotal chars:\t 6\n"
    );
    let _ = fs::remove_dir_all(&dir);
}
