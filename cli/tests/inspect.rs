use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn testdata(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("testdata")
        .join(name)
        .to_string_lossy()
        .to_string()
}

fn bindery() -> Command {
    Command::cargo_bin("bindery").unwrap()
}

#[test]
fn test_inspect_text() {
    bindery()
        .args(["inspect", &testdata("server.pem")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Certificate 0:"))
        .stdout(predicate::str::contains("CN=localhost"))
        .stdout(predicate::str::contains("Serial Number:"));
}

#[test]
fn test_inspect_chain_json() {
    bindery()
        .args(["inspect", &testdata("chain.pem"), "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GnuTLS certificate authority"))
        .stdout(predicate::str::contains("Internet Widgits Pty Ltd"))
        .stdout(predicate::str::contains("a2f4506fa6464992"));
}

#[test]
fn test_inspect_stdin_without_pem_prints_nothing() {
    bindery()
        .arg("inspect")
        .write_stdin("no pem content here\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_inspect_missing_file() {
    bindery()
        .args(["inspect", &testdata("does-not-exist.pem")])
        .assert()
        .failure();
}

#[test]
fn test_bundle_deduplicates() {
    bindery()
        .args(["bundle", &testdata("chain.pem"), &testdata("chain.pem")])
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| {
            out.matches("-----BEGIN CERTIFICATE-----").count() == 2
        }));
}

#[test]
fn test_bundle_includes_new_certificates() {
    bindery()
        .args(["bundle", &testdata("chain.pem"), &testdata("server.pem")])
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| {
            out.matches("-----BEGIN CERTIFICATE-----").count() == 3
        }));
}
