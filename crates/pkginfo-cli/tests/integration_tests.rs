//! Integration tests for the `pkginfo` binary.
//!
//! Every test runs in its own temporary directory, with the user
//! configuration directory pointed inside it.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn pkginfo(dir: &Path) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("pkginfo");
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn init_widget(dir: &Path) {
    pkginfo(dir)
        .args([
            "init",
            "--no-interaction",
            "--name",
            "widget",
            "--pkg-version",
            "v1.2",
            "--description",
            "Makes widgets",
            "--tenant",
            "acme",
            "--arch",
            "linux_amd64,sparc",
        ])
        .assert()
        .success();
}

// ── general ───────────────────────────────────────────────────────────────────

#[test]
fn no_subcommand_prints_help_and_exits_2() {
    let temp = TempDir::new().unwrap();
    pkginfo(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn version_flag() {
    let temp = TempDir::new().unwrap();
    pkginfo(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn completions_bash() {
    let temp = TempDir::new().unwrap();
    pkginfo(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pkginfo"));
}

// ── init ──────────────────────────────────────────────────────────────────────

#[test]
fn init_writes_manifest() {
    let temp = TempDir::new().unwrap();
    pkginfo(temp.path())
        .args([
            "init", "-n", "--name", "widget", "--pkg-version", "v1.2", "--tenant", "acme",
            "--arch", "linux_amd64,sparc",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("sparc").and(predicate::str::contains("ignored")));

    let text = fs::read_to_string(temp.path().join("pkg.info")).unwrap();
    assert!(text.starts_with("# widget pkg.info file"));
    assert!(text.contains("name = \"widget\""));
    assert!(text.contains("version = \"1.2.0\""));
    assert!(text.contains("linux_amd64"));
    assert!(!text.contains("sparc"));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let temp = TempDir::new().unwrap();
    init_widget(temp.path());

    pkginfo(temp.path())
        .args(["init", "-n", "--name", "other", "--pkg-version", "2.0.0", "--tenant", "t"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));

    pkginfo(temp.path())
        .args([
            "init", "-n", "--name", "other", "--pkg-version", "2.0.0", "--tenant", "t", "--yes",
        ])
        .assert()
        .success();

    let text = fs::read_to_string(temp.path().join("pkg.info")).unwrap();
    assert!(text.contains("name = \"other\""));
}

#[test]
fn init_missing_required_field() {
    let temp = TempDir::new().unwrap();
    pkginfo(temp.path())
        .args(["init", "-n", "--name", "widget", "--pkg-version", "1.0.0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--tenant"));
    assert!(!temp.path().join("pkg.info").exists());
}

#[test]
fn init_rejects_invalid_version() {
    let temp = TempDir::new().unwrap();
    pkginfo(temp.path())
        .args(["init", "-n", "--name", "w", "--pkg-version", "1.02.3", "--tenant", "t"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("02"));
}
#[test]
fn init_rejects_multiline_name() {
    let temp = TempDir::new().unwrap();
    pkginfo(temp.path())
        .args(["init", "-n", "--name", "wid\nget", "--pkg-version", "1.0.0", "--tenant", "t"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("control characters"));
    assert!(!temp.path().join("pkg.info").exists());
}

// ── version ───────────────────────────────────────────────────────────────────

#[test]
fn version_show_formatted_and_original() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("pkg.info"),
        "name = \"widget\"\nversion = \"v2.0-beta\"\ntenant = \"acme\"\n",
    )
    .unwrap();

    pkginfo(temp.path())
        .args(["version", "show"])
        .assert()
        .success()
        .stdout("2.0.0-beta\n");

    pkginfo(temp.path())
        .args(["-q", "version", "show", "--original"])
        .assert()
        .success()
        .stdout("v2.0-beta\n");
}

#[test]
fn saved_manifest_uses_formatted_version() {
    let temp = TempDir::new().unwrap();
    init_widget(temp.path());

    pkginfo(temp.path())
        .args(["version", "show", "--original"])
        .assert()
        .success()
        .stdout("1.2.0\n");
}

#[test]
fn version_show_json() {
    let temp = TempDir::new().unwrap();
    init_widget(temp.path());

    let out = pkginfo(temp.path())
        .args(["version", "show", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["major"], 1);
    assert_eq!(json["minor"], 2);
    assert_eq!(json["version"], "1.2.0");
}

#[test]
fn version_show_without_manifest_is_not_found() {
    let temp = TempDir::new().unwrap();
    pkginfo(temp.path())
        .args(["version", "show"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("pkginfo init"));
}

#[test]
fn bump_persists() {
    let temp = TempDir::new().unwrap();
    init_widget(temp.path());

    pkginfo(temp.path())
        .args(["version", "bump", "minor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.2.0").and(predicate::str::contains("1.3.0")));

    pkginfo(temp.path())
        .args(["version", "show"])
        .assert()
        .success()
        .stdout("1.3.0\n");
}

#[test]
fn prerelease_then_release() {
    let temp = TempDir::new().unwrap();
    init_widget(temp.path());

    pkginfo(temp.path())
        .args(["version", "set-pre", "rc.1"])
        .assert()
        .success();
    pkginfo(temp.path())
        .args(["version", "set-meta", "build.7"])
        .assert()
        .success();
    pkginfo(temp.path())
        .args(["version", "show"])
        .assert()
        .stdout("1.2.0-rc.1+build.7\n");

    pkginfo(temp.path())
        .args(["version", "bump", "patch"])
        .assert()
        .success();
    pkginfo(temp.path())
        .args(["version", "show"])
        .assert()
        .stdout("1.2.0\n");
}

#[test]
fn invalid_prerelease_leaves_manifest_untouched() {
    let temp = TempDir::new().unwrap();
    init_widget(temp.path());
    let before = fs::read_to_string(temp.path().join("pkg.info")).unwrap();

    pkginfo(temp.path())
        .args(["version", "set-pre", "beta.01"])
        .assert()
        .code(2);

    let after = fs::read_to_string(temp.path().join("pkg.info")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn validate_lenient_and_strict() {
    let temp = TempDir::new().unwrap();

    pkginfo(temp.path())
        .args(["version", "validate", "v1.2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.2.0"));

    pkginfo(temp.path())
        .args(["version", "validate", "v1.2", "--strict"])
        .assert()
        .code(2);

    pkginfo(temp.path())
        .args(["version", "validate", "1.2.3-beta+exp.sha.5114f85", "--strict"])
        .assert()
        .success();
}

#[test]
fn compare_prints_ordering() {
    let temp = TempDir::new().unwrap();

    for (a, b, expected) in [
        ("1.0.0-alpha", "1.0.0-alpha.1", "<\n"),
        ("1.0.0+build.1", "1.0.0+build.2", "=\n"),
        ("2.0.0", "1.9.9", ">\n"),
        ("1.0.0-rc.1", "1.0.0", "<\n"),
    ] {
        pkginfo(temp.path())
            .args(["version", "compare", a, b])
            .assert()
            .success()
            .stdout(expected);
    }
}

#[test]
fn manifest_with_unlisted_architecture_is_rejected() {
    let temp = TempDir::new().unwrap();
    let manifest = "name = \"widget\"\nversion = \"1.0.0\"\ntenant = \"acme\"\narch = [\"solaris\"]\n";
    fs::write(temp.path().join("pkg.info"), manifest).unwrap();

    pkginfo(temp.path())
        .args(["version", "bump", "minor"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("solaris"));
    assert_eq!(
        fs::read_to_string(temp.path().join("pkg.info")).unwrap(),
        manifest
    );

    pkginfo(temp.path())
        .args(["readme", "--silent"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unsupported architecture"));
    assert!(!temp.path().join("README.md").exists());

    // Widening the allow-list makes the manifest acceptable again.
    pkginfo(temp.path())
        .env("PKGINFO__PACKAGE__ARCH_LIST", "linux_amd64,solaris")
        .args(["version", "show"])
        .assert()
        .success()
        .stdout("1.0.0\n");
}

// ── readme ────────────────────────────────────────────────────────────────────

#[test]
fn readme_silent_uses_defaults() {
    let temp = TempDir::new().unwrap();
    init_widget(temp.path());

    pkginfo(temp.path())
        .args(["readme", "--silent"])
        .assert()
        .success();

    let readme = fs::read_to_string(temp.path().join("README.md")).unwrap();
    assert!(readme.contains("# WIDGET"));
    assert!(readme.contains("assets/icon.png"));
    assert!(readme.contains("Makes widgets"));
    assert!(readme.contains("linux_amd64"));
    assert!(!readme.contains("{{"));
}

#[test]
fn readme_refuses_overwrite_without_force() {
    let temp = TempDir::new().unwrap();
    init_widget(temp.path());
    fs::write(temp.path().join("README.md"), "hand written").unwrap();

    pkginfo(temp.path())
        .args(["readme", "-s"])
        .assert()
        .code(2);
    assert_eq!(
        fs::read_to_string(temp.path().join("README.md")).unwrap(),
        "hand written"
    );

    pkginfo(temp.path())
        .args(["readme", "-s", "--force", "--style", "minimal", "--icon", "logo.svg"])
        .assert()
        .success();
    let readme = fs::read_to_string(temp.path().join("README.md")).unwrap();
    assert!(readme.starts_with("# WIDGET 1.2.0"));
}

#[test]
fn readme_custom_template_strict() {
    let temp = TempDir::new().unwrap();
    init_widget(temp.path());
    fs::write(temp.path().join("tpl.md"), "{{NAME_RAW}} by {{TENANT}} {{OWNER}}").unwrap();

    pkginfo(temp.path())
        .args(["readme", "-s", "--template", "tpl.md", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("OWNER"));
    assert!(!temp.path().join("README.md").exists());

    pkginfo(temp.path())
        .args(["readme", "-s", "--template", "tpl.md"])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(temp.path().join("README.md")).unwrap(),
        "widget by acme {{OWNER}}"
    );
}

#[test]
fn readme_without_manifest_is_not_found() {
    let temp = TempDir::new().unwrap();
    pkginfo(temp.path())
        .args(["readme", "--silent"])
        .assert()
        .code(3);
}

// ── config ────────────────────────────────────────────────────────────────────

#[test]
fn config_get_default() {
    let temp = TempDir::new().unwrap();
    pkginfo(temp.path())
        .args(["config", "get", "package.info_file"])
        .assert()
        .success()
        .stdout("pkg.info\n");
}

#[test]
fn config_unknown_key_exits_4() {
    let temp = TempDir::new().unwrap();
    pkginfo(temp.path())
        .args(["config", "get", "package.nope"])
        .assert()
        .code(4);
}

#[test]
fn environment_overrides_config() {
    let temp = TempDir::new().unwrap();
    pkginfo(temp.path())
        .env("PKGINFO__PACKAGE__ICON_PATH", "env.png")
        .args(["config", "get", "package.icon_path"])
        .assert()
        .success()
        .stdout("env.png\n");
}

#[test]
fn project_config_changes_manifest_path() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".pkginfo.toml"),
        "[package]\ninfo_file = \"meta/pkg.info\"\n",
    )
    .unwrap();

    init_widget(temp.path());
    assert!(temp.path().join("meta/pkg.info").exists());

    pkginfo(temp.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(".pkginfo.toml\n");
}

#[test]
fn explicit_config_must_exist() {
    let temp = TempDir::new().unwrap();
    pkginfo(temp.path())
        .args(["--config", "missing.toml", "config", "list"])
        .assert()
        .code(4);
}

#[test]
fn config_init_local() {
    let temp = TempDir::new().unwrap();
    pkginfo(temp.path())
        .args(["config", "init", "--local"])
        .assert()
        .success();
    let text = fs::read_to_string(temp.path().join(".pkginfo.toml")).unwrap();
    assert!(text.contains("readme_style"));

    pkginfo(temp.path())
        .args(["config", "init", "--local"])
        .assert()
        .code(2);
}
