use anyhow::Result;

use crate::{CliTest, run_command};

const CONFIG: &str = r#"{
    "driving": "lang/I18N_zh_CN.properties",
    "references": ["lang/I18N.properties", "lang/I18N_zh.properties"],
    "rules": [
        { "forbidden": "帐户", "replacement": "账户" },
        { "forbidden": "其它", "replacement": "其他" }
    ]
}"#;

#[test]
fn test_missing_key_in_reference() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".bundlelintrc.json", CONFIG)?;
    test.write_file(
        "lang/I18N_zh_CN.properties",
        "greeting=你好\nfarewell=再见\nwelcome=欢迎\n",
    )?;
    test.write_file("lang/I18N.properties", "greeting=Hello\nfarewell=Goodbye\n")?;
    test.write_file("lang/I18N_zh.properties", "greeting=你好\nfarewell=再見\nwelcome=歡迎\n")?;

    let (code, stdout, _) = run_command(&mut test.command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("warning: \"welcome\""));
    assert!(stdout.contains("missing-key"));
    assert!(stdout.contains("missing from I18N.properties"));
    assert!(stdout.contains("lang/I18N_zh_CN.properties:3:1"));
    assert!(stdout.contains("1 problem found"));

    Ok(())
}

#[test]
fn test_forbidden_substring_in_driving_bundle() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".bundlelintrc.json", CONFIG)?;
    test.write_file("lang/I18N_zh_CN.properties", "account.title=管理帐户\n")?;
    test.write_file("lang/I18N.properties", "account.title=Manage Account\n")?;
    test.write_file("lang/I18N_zh.properties", "account.title=管理帳戶\n")?;

    let (code, stdout, _) = run_command(&mut test.command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("warning: \"account.title\""));
    assert!(stdout.contains("forbidden-substring"));
    assert!(stdout.contains("管理帐户"));
    assert!(stdout.contains("\"帐户\" should be replaced by \"账户\""));

    Ok(())
}

#[test]
fn test_consistent_bundles_pass() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".bundlelintrc.json", CONFIG)?;
    test.write_file(
        "lang/I18N_zh_CN.properties",
        "greeting=你好\naccount.title=管理账户\n",
    )?;
    test.write_file(
        "lang/I18N.properties",
        "greeting=Hello\naccount.title=Manage Account\n",
    )?;
    test.write_file(
        "lang/I18N_zh.properties",
        "greeting=你好\naccount.title=管理賬戶\n",
    )?;

    let (code, stdout, _) = run_command(&mut test.command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Checked 3 bundles - no issues found"));

    Ok(())
}

#[test]
fn test_unreadable_reference_fails_fast() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".bundlelintrc.json", CONFIG)?;
    test.write_file("lang/I18N_zh_CN.properties", "greeting=你好\n")?;
    test.write_file("lang/I18N_zh.properties", "greeting=你好\n")?;
    // lang/I18N.properties is missing

    let (code, stdout, stderr) = run_command(&mut test.command())?;

    assert_eq!(code, 2);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("Failed to read bundle file"));
    // Fail-fast: no report at all
    assert!(!stdout.contains("problem"));
    assert!(!stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_malformed_reference_fails_fast() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".bundlelintrc.json", CONFIG)?;
    test.write_file("lang/I18N_zh_CN.properties", "greeting=你好\n")?;
    test.write_file("lang/I18N.properties", "greeting=\\uZZZZ\n")?;
    test.write_file("lang/I18N_zh.properties", "greeting=你好\n")?;

    let (code, stdout, stderr) = run_command(&mut test.command())?;

    assert_eq!(code, 2);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("Failed to parse bundle file"));
    assert!(!stdout.contains("problem"));
    assert!(!stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_multiple_findings_reported_in_one_run() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".bundlelintrc.json", CONFIG)?;
    test.write_file(
        "lang/I18N_zh_CN.properties",
        "welcome=欢迎\naccount.title=管理帐户\nother.title=其它设置\n",
    )?;
    test.write_file("lang/I18N.properties", "account.title=Manage Account\n")?;
    test.write_file("lang/I18N_zh.properties", "welcome=歡迎\n")?;

    let (code, stdout, _) = run_command(&mut test.command())?;

    assert_eq!(code, 1);
    // welcome and other.title missing from I18N.properties, account.title and
    // other.title missing from I18N_zh.properties, plus two content findings
    assert!(stdout.contains("6 problems found"));
    // Reference declaration order before scanner findings
    let en_pos = stdout.find("missing from I18N.properties").unwrap();
    let zh_pos = stdout.find("missing from I18N_zh.properties").unwrap();
    let scan_pos = stdout.find("should be replaced by").unwrap();
    assert!(en_pos < zh_pos);
    assert!(zh_pos < scan_pos);

    Ok(())
}

#[test]
fn test_cli_path_overrides() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("zh_CN.properties", "welcome=欢迎\n")?;
    test.write_file("en.properties", "")?;

    let (code, stdout, _) = run_command(
        test.command()
            .arg("--driving")
            .arg("zh_CN.properties")
            .arg("--reference")
            .arg("en.properties"),
    )?;

    assert_eq!(code, 1);
    assert!(stdout.contains("warning: \"welcome\""));
    assert!(stdout.contains("missing from en.properties"));

    Ok(())
}

#[test]
fn test_verbose_lists_loaded_bundles() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("zh_CN.properties", "greeting=你好\nfarewell=再见\n")?;
    test.write_file("en.properties", "greeting=Hello\nfarewell=Goodbye\n")?;

    let (code, stdout, stderr) = run_command(
        test.command()
            .arg("--driving")
            .arg("zh_CN.properties")
            .arg("--reference")
            .arg("en.properties")
            .arg("--verbose"),
    )?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Checked 2 bundles - no issues found"));
    assert!(stderr.contains("loaded zh_CN.properties (2 keys)"));
    assert!(stderr.contains("loaded en.properties (2 keys)"));

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".bundlelintrc.json", r#"{ "references": [] }"#)?;

    let (code, _, stderr) = run_command(&mut test.command())?;

    assert_eq!(code, 2);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("reference"));

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run_command(test.command().arg("--init"))?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Created .bundlelintrc.json"));

    // Second run refuses to overwrite
    let (code, _, stderr) = run_command(test.command().arg("--init"))?;
    assert_eq!(code, 2);
    assert!(stderr.contains("already exists"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run_command(test.command().arg("--help"))?;

    assert_eq!(code, 0);
    assert!(stdout.contains("--driving"));
    assert!(stdout.contains("--reference"));

    Ok(())
}
