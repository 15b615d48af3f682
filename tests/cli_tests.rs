use assert_cmd::Command;
use predicates::prelude::*;
use std::net::UdpSocket;
use tempfile::NamedTempFile;

fn check_cmd() -> Command {
    let mut cmd = Command::cargo_bin("check_snmp_process").unwrap();
    cmd.env_remove("SNMP_COMMUNITY")
        .env_remove("SNMP_TIMEOUT")
        .env_remove("SNMP_VERSION")
        .env_remove("SNMP_PORT")
        .env_remove("RUST_LOG");
    cmd
}

/// Занятый, но молчащий UDP порт: агент "не отвечает"
fn silent_agent() -> (UdpSocket, u16) {
    let socket = UdpSocket::bind("127.0.0.1:0").unwrap();
    let port = socket.local_addr().unwrap().port();
    (socket, port)
}

#[test]
fn test_version_flag() {
    check_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    check_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--snmp-version"))
        .stdout(predicate::str::contains("--comma-separated"));
}

#[test]
fn test_missing_host_is_unknown() {
    check_cmd()
        .arg("sshd")
        .assert()
        .code(3)
        .stdout(predicate::str::starts_with("PROCESS UNKNOWN"));
}

#[test]
fn test_bad_state_is_unknown() {
    check_cmd()
        .args(["-H", "127.0.0.1", "--state", "sleeping", "sshd"])
        .assert()
        .code(3)
        .stdout(predicate::str::starts_with("PROCESS UNKNOWN"));
}

#[test]
fn test_unknown_option_is_unknown() {
    check_cmd()
        .args(["-H", "127.0.0.1", "--frobnicate", "sshd"])
        .assert()
        .code(3);
}

#[test]
fn test_empty_process_list_is_unknown() {
    check_cmd()
        .args(["-H", "127.0.0.1"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("Не указаны процессы"));
}

#[test]
fn test_only_commas_is_empty_list() {
    check_cmd()
        .args(["-H", "127.0.0.1", "--comma-separated", ",,"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("Не указаны процессы"));
}

#[test]
fn test_timeout_is_unknown() {
    let (_socket, port) = silent_agent();

    check_cmd()
        .args(["-H", "127.0.0.1", "-p", &port.to_string(), "-t", "1", "sshd"])
        .assert()
        .code(3)
        .stdout(predicate::str::starts_with("PROCESS UNKNOWN"))
        .stdout(predicate::str::contains("Таймаут"));
}

#[test]
fn test_list_mode_timeout_is_unknown() {
    let (_socket, port) = silent_agent();

    check_cmd()
        .args(["-H", "127.0.0.1", "-p", &port.to_string(), "-t", "1", "-V", "2c", "--list"])
        .assert()
        .code(3);
}

#[test]
fn test_json_failure_output() {
    let (_socket, port) = silent_agent();

    let output = check_cmd()
        .args(["-H", "127.0.0.1", "-p", &port.to_string(), "-t", "1", "--json", "sshd"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let stdout = String::from_utf8(output.stdout).unwrap();
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(value["status"], "UNKNOWN");
    assert!(value["error"].is_string());
}

#[test]
fn test_missing_config_file_is_unknown() {
    check_cmd()
        .args(["-H", "127.0.0.1", "--config", "/nonexistent/check.yaml", "sshd"])
        .assert()
        .code(3)
        .stdout(predicate::str::starts_with("PROCESS UNKNOWN"));
}

#[test]
fn test_config_file_port_is_used() {
    let (_socket, port) = silent_agent();
    let file = NamedTempFile::new().unwrap();
    std::fs::write(
        file.path(),
        format!("connection:\n  port: {}\n  timeout: 1\n", port),
    )
    .unwrap();

    check_cmd()
        .args(["-H", "127.0.0.1", "--config", file.path().to_str().unwrap(), "sshd"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains(format!("127.0.0.1:{}", port)));
}
