// End-to-end tests for the lineage-map binary

use assert_cmd::Command;
use indoc::indoc;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// A command isolated in its own directory, with its own store and no colors.
fn lineage_map(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("lineage-map").unwrap();
    cmd.current_dir(dir.path())
        .env("LINEAGE_MAP_STORE", dir.path().join("answers.json"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn classify_prints_result() {
    let dir = TempDir::new().unwrap();
    let text = stdout_of(lineage_map(&dir).args([
        "classify",
        "--arrived",
        "yes",
        "--participation",
        "no",
    ]));
    assert_eq!(
        text,
        indoc! {"
            Result (Historical)
              Colonizer (arrival during colonial period) [COLONIZER_ARRIVAL]
              Arrival occurred while colonization was ongoing; part of settler expansion even without office.
              Scope: historical lineage and structural participation. This classifies position in systems; it isn't a moral score.
        "}
    );
}

#[test]
fn unrecognized_values_are_treated_as_unknown() {
    let dir = TempDir::new().unwrap();
    let text = stdout_of(lineage_map(&dir).args([
        "classify",
        "--arrived",
        "yes",
        "--participation",
        "not-sure",
        "--format",
        "json",
    ]));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["code"], "COLONIZER_FOUNDATIONAL");
}

#[test]
fn score_json_output() {
    let dir = TempDir::new().unwrap();
    let text = stdout_of(lineage_map(&dir).args([
        "score",
        "--wealth",
        "yes",
        "--motive",
        "opportunity",
        "--infra",
        "7",
        "-f",
        "json",
    ]));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["code"], "EXPLOITER");
    assert_eq!(value["B"], 4);
    assert_eq!(value["T"], 4);
    assert_eq!(value["flags"]["motiveColonizer"], true);
}

#[test]
fn answers_persist_across_invocations() {
    let dir = TempDir::new().unwrap();
    let text = stdout_of(lineage_map(&dir).args(["answer", "indigenous_lineage", "yes"]));
    assert!(text.contains("[INDIGENOUS]"));
    assert!(dir.path().join("answers.json").exists());

    let text = stdout_of(lineage_map(&dir).args(["share"]));
    assert_eq!(
        text,
        indoc! {"
            Are You a Colonizer?
            Historical: Indigenous (sovereignty-centered)
            Answers: indigenous_lineage=yes
            Bonus (Woke): Participant Under Constraint
        "}
    );

    stdout_of(lineage_map(&dir).args(["reset", "all"]));
    let text = stdout_of(lineage_map(&dir).args(["show", "--format", "json"]));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["historical"]["result"]["code"], "INCONCLUSIVE");
}

#[test]
fn share_copy_without_clipboard_still_succeeds() {
    let dir = TempDir::new().unwrap();
    let output = lineage_map(&dir)
        .args(["share", "--copy"])
        .env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.starts_with("Are You a Colonizer?\n"));
    assert!(stdout.contains("Answers: (none)"));
    assert!(
        stdout.contains("Copied!") || stderr.contains("Clipboard error"),
        "stdout: {stdout}\nstderr: {stderr}"
    );
}

#[test]
fn unknown_question_fails() {
    let dir = TempDir::new().unwrap();
    let output = lineage_map(&dir)
        .args(["answer", "shoe_size", "42"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown question id: shoe_size"));
}

#[test]
fn export_writes_full_table() {
    let dir = TempDir::new().unwrap();
    let text = stdout_of(lineage_map(&dir).args(["export", "historical"]));
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 730);
    assert_eq!(
        lines[0],
        "indigenous,forced,arrived,participation,post_entrench,origin_after,code,label"
    );
    assert!(lines[1..].iter().all(|l| l.split(',').count() == 8));
}

#[test]
fn export_honors_config_delimiter() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(".lineage-map.toml"),
        "[export]\ndelimiter = \";\"\nsubstitute = \",\"\n",
    )
    .unwrap();
    let path = dir.path().join("woke.csv");
    stdout_of(lineage_map(&dir).args(["export", "woke", "-o"]).arg(&path));

    let text = std::fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("wealth;role;constrained;compelled;noBenefit;motive;infra;code;B;T;flags")
    );
    assert_eq!(
        lines.next(),
        Some(r#"yes;yes;yes;yes;yes;opportunity;0;EXPLOITER;1;0;{"motiveColonizer":true,"motiveOnlyFlag":false}"#)
    );
}

#[test]
fn init_then_refuse_overwrite() {
    let dir = TempDir::new().unwrap();
    stdout_of(lineage_map(&dir).arg("init"));
    assert!(dir.path().join(".lineage-map.toml").exists());

    let output = lineage_map(&dir).arg("init").output().unwrap();
    assert!(!output.status.success());

    stdout_of(lineage_map(&dir).args(["init", "--force"]));
}

#[test]
fn stats_and_questions_run() {
    let dir = TempDir::new().unwrap();
    let stats = stdout_of(lineage_map(&dir).arg("stats"));
    assert!(stats.contains("IMMIGRANT_ORIGIN_LATER"));
    assert!(stats.contains("PARTICIPANT"));

    let questions = stdout_of(lineage_map(&dir).arg("questions"));
    assert!(questions.contains("migration_motive"));
}
