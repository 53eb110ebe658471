#![allow(dead_code)]

use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

/// Run `bin` with `args`, feed `stdin` and wait for it to exit.
pub fn run_bin(bin: &str, args: &[&str], stdin: &[u8]) -> Output {
    run_bin_with_env(bin, args, stdin, &[])
}

/// Like [`run_bin`], with extra environment variables set for the child.
pub fn run_bin_with_env(bin: &str, args: &[&str], stdin: &[u8], vars: &[(&str, &str)]) -> Output {
    let mut child = Command::new(bin)
        .args(args)
        .env_remove("BCRYPT_ORACLE_PREFIX")
        .env_remove("BCRYPT_ORACLE_GENSALT_ROUNDS")
        .env_remove("LOG_LEVEL")
        .envs(vars.iter().copied())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn binary");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin)
        .expect("write stdin");

    child.wait_with_output().expect("wait for binary")
}

pub fn oracle(args: &[&str], stdin: &[u8]) -> Output {
    run_bin(env!("CARGO_BIN_EXE_bcrypt-oracle"), args, stdin)
}

pub fn checkpw(hash: &str, stdin: &[u8]) -> Output {
    run_bin(env!("CARGO_BIN_EXE_checkpw"), &[hash], stdin)
}

/// Strip exactly one trailing newline, failing if the output has any other shape.
pub fn single_line(output: &Output) -> String {
    let text = String::from_utf8(output.stdout.clone()).expect("utf8 output");
    let line = text.strip_suffix('\n').expect("trailing newline");
    assert!(!line.contains('\n'), "more than one line: {text:?}");
    assert_eq!(line.trim(), line, "stray whitespace: {text:?}");
    line.to_string()
}
