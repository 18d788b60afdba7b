use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_clean_project() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.js",
        r#"
const slug = new RegExp("^[a-z0-9-]+$", "i");
const words = RegExp("\\w+", "gu");
const anything = new RegExp("[^]", "s");
const dynamic = new RegExp(source, flags);
"#,
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_invalid_flags() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.ts",
        "const a = new RegExp(\"a\", \"q\");\nconst b = RegExp(\"a\", \"gg\");\n",
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_invalid_pattern() -> Result<()> {
    let test = CliTest::with_file("src/a.js", "RegExp(\"(\");\n")?;

    // Engine wording is not ours to pin down.
    insta::with_settings!({
        filters => vec![(r"error: .+  no-invalid-regexp", "error: [PATTERN ERROR]  no-invalid-regexp")]
    }, {
        assert_cmd_snapshot!(test.check_command());
    });

    Ok(())
}

#[test]
fn test_json_format() -> Result<()> {
    let test = CliTest::with_file("index.js", "new RegExp('a', 'z');\n")?;

    assert_cmd_snapshot!(test.check_command().args(["--format", "json"]));

    Ok(())
}

#[test]
fn test_config_warn_level() -> Result<()> {
    let test = CliTest::with_file("a.js", "RegExp('a', 'gg');\n")?;
    test.write_file(
        ".rxlintrc.json",
        r#"{ "rules": { "no-invalid-regexp": "warn" } }"#,
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_ecma_version_flag() -> Result<()> {
    let test = CliTest::with_file("legacy.js", "var re = new RegExp('a', 'y');\n")?;

    assert_cmd_snapshot!(test.check_command().args(["--ecma-version", "es5"]));

    let out = run(test.check_command())?;
    assert_eq!(out.code, Some(0), "{}", out.stdout);

    Ok(())
}

#[test]
fn test_pattern_dialect_flag() -> Result<()> {
    let test = CliTest::with_file("a.js", "new RegExp('(?<=\\\\$)\\\\d+');\n")?;

    let out = run(test.check_command())?;
    assert_eq!(out.code, Some(0), "{}", out.stdout);

    let mut cmd = test.check_command();
    cmd.args(["--pattern-dialect", "strict"]);
    let out = run(cmd)?;
    assert_eq!(out.code, Some(1), "{}", out.stdout);

    Ok(())
}

#[test]
fn test_suppression_comment() -> Result<()> {
    let test = CliTest::with_file(
        "a.js",
        "// rxlint-disable-next-line no-invalid-regexp\nconst legacy = RegExp('a', 'gg');\n",
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_ignored_and_vendored_files() -> Result<()> {
    let test = CliTest::with_file("dist/bundle.js", "RegExp('[');\n")?;
    test.write_file("node_modules/pkg/index.js", "RegExp('[');\n")?;
    test.write_file("src/ok.js", "RegExp('a');\n")?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_parse_error_is_reported() -> Result<()> {
    let test = CliTest::with_file("broken.js", "RegExp(\n")?;

    let out = run(test.check_command())?;

    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("parse-error"));
    assert!(out.stdout.contains("  --> ./broken.js\n"));
    assert!(out.stderr.contains("1 file(s) could not be parsed"));

    Ok(())
}

#[test]
fn test_invalid_config_fails() -> Result<()> {
    let test = CliTest::with_file(
        ".rxlintrc.json",
        r#"{ "rules": { "no-invalid-regexp": ["error", { "strict": true }] } }"#,
    )?;

    assert_cmd_snapshot!(test.check_command());

    Ok(())
}

#[test]
fn test_missing_path_fails() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.check_command().arg("does-not-exist"));

    Ok(())
}

#[test]
fn test_version() -> Result<()> {
    let test = CliTest::new()?;

    insta::with_settings!({
        filters => vec![(r"\d+\.\d+\.\d+", "[VERSION]")]
    }, {
        assert_cmd_snapshot!(test.command().arg("--version"));
    });

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("--help");
    let out = run(cmd)?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("check"));
    assert!(out.stdout.contains("init"));

    Ok(())
}
