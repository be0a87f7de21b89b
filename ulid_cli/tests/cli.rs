use std::process::{Command, Output};

fn ulid(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ulid"))
        .args(args)
        .env_remove("ULID_LOG")
        .output()
        .expect("failed to run ulid")
}

#[test]
fn generates_a_new_ulid() {
    let output = ulid(&[]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let line = stdout.trim_end();
    assert_eq!(line.len(), 26);
    assert!(line.parse::<ulid_codec::Ulid>().is_ok(), "{}", line);
}

#[test]
fn prints_timestamp_of_argument() {
    let output = ulid(&["01ARZ3NDEKTSV4RRFFQ69G5FAV"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "2016-07-30T23:54:10.259Z\n");
}

#[test]
fn parse_failure_exits_non_zero() {
    let output = ulid(&["01ARZ3NDEKTSV4RRFFQ69G5FA!"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("ulid: invalid character 0x21 at position 25"), "{}", stderr);
}
