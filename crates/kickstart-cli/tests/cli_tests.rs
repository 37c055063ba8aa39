//! End-to-end tests of the `kickstart` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// An isolated home, a generated project and a private copy of the stubs.
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("home")).unwrap();
        fs::create_dir_all(dir.path().join("app/database/seeders")).unwrap();
        fs::create_dir_all(dir.path().join("app/database/migrations")).unwrap();
        copy_tree(&workspace_stubs(), &dir.path().join("stubs"));
        Self { dir }
    }

    fn project(&self) -> PathBuf {
        self.dir.path().join("app")
    }

    fn stubs(&self) -> PathBuf {
        self.dir.path().join("stubs")
    }

    fn migration(&self, name: &str) {
        fs::write(self.project().join("database/migrations").join(name), "<?php\n").unwrap();
    }

    /// `kickstart` with no user config, no colours and a clean environment.
    fn cmd(&self) -> Command {
        let home = self.dir.path().join("home");
        let mut cmd = Command::cargo_bin("kickstart").unwrap();
        cmd.current_dir(self.dir.path())
            .env("HOME", &home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env_remove("KICKSTART_STUB_ROOT")
            .env_remove("RUST_LOG")
            .arg("--no-color");
        cmd
    }

    fn apply(&self, template: &str) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("apply")
            .arg(self.project())
            .args(["--template", template])
            .arg("--stubs")
            .arg(self.stubs());
        cmd
    }
}

fn workspace_stubs() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../stubs")
}

fn copy_tree(from: &Path, to: &Path) {
    fs::create_dir_all(to).unwrap();
    for entry in fs::read_dir(from).unwrap() {
        let entry = entry.unwrap();
        let target = to.join(entry.file_name());
        if entry.file_type().unwrap().is_dir() {
            copy_tree(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), target).unwrap();
        }
    }
}

// ── help / catalog ────────────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    Sandbox::new()
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("apply"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("templates"));
}

#[test]
fn version_flag() {
    Sandbox::new()
        .cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn templates_list_prints_the_catalog() {
    Sandbox::new()
        .cmd()
        .args(["templates", "--format", "list"])
        .assert()
        .success()
        .stdout("blog\npodcast\nphone-book\n");
}

#[test]
fn templates_json_is_parseable() {
    let output = Sandbox::new()
        .cmd()
        .args(["templates", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2]["name"], "phone-book");
    assert_eq!(rows[2]["seeder"], "PhoneBookKickstartSeeder");
}

// ── apply ─────────────────────────────────────────────────────────────────────

#[test]
fn apply_deploys_manifest_and_seeder() {
    let sb = Sandbox::new();

    sb.apply("blog").assert().success();

    let manifest = fs::read_to_string(sb.project().join("draft.yaml")).unwrap();
    let stub = fs::read_to_string(sb.stubs().join("kickstart/blog/draft.yaml")).unwrap();
    assert_eq!(manifest, stub);
    assert!(
        sb.project()
            .join("database/seeders/BlogKickstartSeeder.php")
            .is_file()
    );
}

#[test]
fn apply_with_teams_uses_the_teams_manifest() {
    let sb = Sandbox::new();

    sb.apply("podcast").arg("--teams").assert().success();

    let manifest = fs::read_to_string(sb.project().join("draft.yaml")).unwrap();
    let stub =
        fs::read_to_string(sb.stubs().join("kickstart/podcast/draftwith-teams.yaml")).unwrap();
    assert_eq!(manifest, stub);
}

#[test]
fn apply_warns_when_the_users_migration_is_missing() {
    let sb = Sandbox::new();

    sb.apply("blog")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "blog seeder bypassed: the user migration is missing",
        ));
}

#[test]
fn apply_reports_ready_when_migrations_exist() {
    let sb = Sandbox::new();
    sb.migration("0001_01_01_000000_create_users_table.php");

    sb.apply("phone-book")
        .assert()
        .success()
        .stdout(predicate::str::contains("ready to seed"))
        .stdout(predicate::str::contains("bypassed").not());
}

#[test]
fn apply_uses_the_configured_default_template() {
    let sb = Sandbox::new();
    let config = sb.dir.path().join("kickstart.toml");
    fs::write(&config, "[defaults]\ntemplate = \"podcast\"\n").unwrap();

    sb.cmd()
        .arg("--config")
        .arg(&config)
        .arg("apply")
        .arg(sb.project())
        .arg("--stubs")
        .arg(sb.stubs())
        .assert()
        .success();

    assert!(
        sb.project()
            .join("database/seeders/PodcastKickstartSeeder.php")
            .is_file()
    );
}

#[test]
fn dry_run_changes_nothing() {
    let sb = Sandbox::new();

    sb.apply("blog")
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("BlogKickstartSeeder.php"));

    assert!(!sb.project().join("draft.yaml").exists());
    assert!(
        !sb.project()
            .join("database/seeders/BlogKickstartSeeder.php")
            .exists()
    );
}

#[test]
fn apply_json_output_summarises_the_run() {
    let sb = Sandbox::new();

    let output = sb
        .apply("blog")
        .args(["--output-format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["template"], "blog");
    assert_eq!(summary["seeding_ready"], false);
    assert_eq!(
        summary["advisory"],
        "blog seeder bypassed: the user migration is missing"
    );
}

// ── failures ──────────────────────────────────────────────────────────────────

#[test]
fn unknown_template_is_a_user_error() {
    Sandbox::new()
        .apply("wiki")
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "The wiki kickstart template does not exist",
        ))
        .stderr(predicate::str::contains("blog"));
}

#[test]
fn missing_project_is_not_found() {
    let sb = Sandbox::new();

    sb.cmd()
        .arg("apply")
        .arg(sb.dir.path().join("nowhere"))
        .args(["--template", "blog"])
        .arg("--stubs")
        .arg(sb.stubs())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Project directory not found"));
}

#[test]
fn stub_root_without_kickstart_dir_is_a_configuration_error() {
    let sb = Sandbox::new();

    sb.cmd()
        .arg("apply")
        .arg(sb.project())
        .args(["--template", "blog"])
        .arg("--stubs")
        .arg(sb.project())
        .assert()
        .code(4);
}

#[test]
fn missing_seeder_stub_aborts_after_the_manifest() {
    let sb = Sandbox::new();
    fs::remove_file(sb.stubs().join("kickstart/blog/BlogKickstartSeeder.php.stub")).unwrap();

    sb.apply("blog")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("BlogKickstartSeeder.php.stub"));

    assert!(sb.project().join("draft.yaml").is_file());
}

// ── check ─────────────────────────────────────────────────────────────────────

#[test]
fn check_reports_missing_migrations_but_succeeds() {
    let sb = Sandbox::new();

    sb.cmd()
        .arg("check")
        .arg(sb.project())
        .args(["--template", "podcast", "--teams"])
        .arg("--stubs")
        .arg(sb.stubs())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "podcast seeder bypassed: the user and team migrations are missing",
        ));

    assert!(!sb.project().join("draft.yaml").exists());
}

// ── config / init / completions ───────────────────────────────────────────────

#[test]
fn config_get_reads_defaults() {
    Sandbox::new()
        .cmd()
        .args(["config", "get", "defaults.template"])
        .assert()
        .success()
        .stdout(predicate::str::contains("defaults.template = blog"));
}

#[test]
fn config_get_unknown_key_fails() {
    Sandbox::new()
        .cmd()
        .args(["config", "get", "nope"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown configuration key"));
}

#[test]
fn init_writes_then_refuses_to_overwrite() {
    let sb = Sandbox::new();
    let path = sb.dir.path().join("conf/kickstart.toml");

    sb.cmd()
        .arg("--config")
        .arg(&path)
        .arg("init")
        .assert()
        .success();
    assert!(fs::read_to_string(&path).unwrap().contains("[defaults]"));

    sb.cmd()
        .arg("--config")
        .arg(&path)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn completions_name_the_binary() {
    Sandbox::new()
        .cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kickstart"));
}
