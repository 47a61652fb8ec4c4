use assert_cmd::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// `seqnote` running inside `work_dir`, with the scheme variable cleared so
/// the caller's environment never leaks into a test.
fn seqnote_cmd(work_dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("seqnote");
    cmd.current_dir(work_dir.path());
    cmd.env_remove("SEQNOTE_SCHEME");
    cmd
}

fn seeded_vault(names: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for name in names {
        fs::write(tmp.path().join(name), "").unwrap();
    }
    tmp
}

fn numeric_vault() -> TempDir {
    seeded_vault(&[
        "20240101T090000==1--intro.md",
        "20240101T091000==1=1--detail__pkm.md",
        "20240101T092000==2--other.org",
        "20240101T093000--unsigned.md",
    ])
}

// ============================================================================
// Pure address commands
// ============================================================================

#[test]
fn version_prints_core_version() {
    let tmp = TempDir::new().unwrap();
    seqnote_cmd(&tmp)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("seqnote_core version="));
}

#[test]
fn split_prints_one_component_per_line() {
    let tmp = TempDir::new().unwrap();
    seqnote_cmd(&tmp)
        .args(["split", "1=1=2"])
        .assert()
        .success()
        .stdout("1\n1\n2\n");

    seqnote_cmd(&tmp)
        .args(["--scheme", "alphanumeric", "split", "1za5zx"])
        .assert()
        .success()
        .stdout("1\nza\n5\nzx\n");
}

#[test]
fn convert_to_either_scheme() {
    let tmp = TempDir::new().unwrap();
    seqnote_cmd(&tmp)
        .args(["convert", "1=27=2=55", "--to", "alphanumeric"])
        .assert()
        .success()
        .stdout("1za2zzc\n");

    seqnote_cmd(&tmp)
        .args(["convert", "1a2b4a", "--to", "numeric"])
        .assert()
        .success()
        .stdout("1=1=2=2=4=1\n");
}

#[test]
fn scheme_env_var_is_used_without_flag() {
    let tmp = TempDir::new().unwrap();
    seqnote_cmd(&tmp)
        .env("SEQNOTE_SCHEME", "alphanumeric")
        .args(["split", "1b3"])
        .assert()
        .success()
        .stdout("1\nb\n3\n");
}

// ============================================================================
// Vault commands
// ============================================================================

#[test]
fn tree_indents_by_depth() {
    let tmp = numeric_vault();
    seqnote_cmd(&tmp)
        .arg("tree")
        .assert()
        .success()
        .stdout("1\n  1=1\n2\n");
}

#[test]
fn tree_reads_the_given_directory() {
    let vault = numeric_vault();
    let elsewhere = TempDir::new().unwrap();
    seqnote_cmd(&elsewhere)
        .args(["tree", "--dir"])
        .arg(vault.path())
        .assert()
        .success()
        .stdout("1\n  1=1\n2\n");
}

#[test]
fn allocation_prints_next_address() {
    let tmp = numeric_vault();
    seqnote_cmd(&tmp)
        .args(["child", "1"])
        .assert()
        .success()
        .stdout("1=2\n");
    seqnote_cmd(&tmp)
        .args(["sibling", "1=1"])
        .assert()
        .success()
        .stdout("1=2\n");
    seqnote_cmd(&tmp).arg("root").assert().success().stdout("3\n");
}

#[test]
fn alphanumeric_allocation_reads_letter_signatures() {
    let tmp = seeded_vault(&["a==1--x.md", "b==1a--y.md", "c==1b--z.md"]);
    seqnote_cmd(&tmp)
        .args(["--scheme", "alphanumeric", "child", "1"])
        .assert()
        .success()
        .stdout("1c\n");
}

#[test]
fn create_claims_the_note_file_and_prints_its_path() {
    let tmp = numeric_vault();
    seqnote_cmd(&tmp)
        .args(["child", "1", "--create", "20240102T100000--new__idea.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "20240102T100000==1=2--new__idea.md",
        ));

    assert!(tmp
        .path()
        .join("20240102T100000==1=2--new__idea.md")
        .is_file());

    // The claimed file is part of the vault from now on.
    seqnote_cmd(&tmp)
        .args(["child", "1"])
        .assert()
        .success()
        .stdout("1=3\n");
}

// ============================================================================
// Error handling
// ============================================================================

#[test]
fn unknown_target_reports_error_with_status_one() {
    let tmp = numeric_vault();
    seqnote_cmd(&tmp)
        .args(["child", "9"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("error: "))
        .stderr(predicate::str::contains("sequence not found"));
}

#[test]
fn malformed_address_reports_error() {
    let tmp = TempDir::new().unwrap();
    seqnote_cmd(&tmp)
        .args(["split", "1==2"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error: malformed sequence `1==2`"));
}

#[test]
fn invalid_scheme_env_var_is_rejected() {
    let tmp = TempDir::new().unwrap();
    seqnote_cmd(&tmp)
        .env("SEQNOTE_SCHEME", "roman")
        .args(["split", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("SEQNOTE_SCHEME"));
}

#[test]
fn log_level_requires_log_dir() {
    let tmp = TempDir::new().unwrap();
    seqnote_cmd(&tmp)
        .args(["--log-level", "debug", "split", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error: --log-level requires --log-dir"));
}
