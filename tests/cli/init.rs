use anyhow::Result;
use pretty_assertions::assert_eq;

use super::CliTest;

#[test]
fn creates_default_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());

    assert!(test.root().join(".ngkeysrc.json").exists());
    let config: serde_json::Value = serde_json::from_str(&test.read_file(".ngkeysrc.json")?)?;
    assert_eq!(config["sourceRoot"], "src");
    Ok(())
}

#[test]
fn refuses_to_overwrite_existing_config() -> Result<()> {
    let test = CliTest::with_file(".ngkeysrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(test.read_file(".ngkeysrc.json")?, "{}");
    Ok(())
}
