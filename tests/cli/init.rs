use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn creates_default_config() -> Result<()> {
    let test = CliTest::new()?;

    let (output, stdout, _) = run(test.command().arg("init"))?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Created .pomorc.json"));

    let config = test.read_file(".pomorc.json")?;
    assert!(config.contains("\"onDuplicate\": \"warn\""));
    assert!(config.contains("\"includeFuzzy\": false"));
    Ok(())
}

#[test]
fn refuses_to_overwrite_existing_config() -> Result<()> {
    let test = CliTest::with_file(".pomorc.json", "{}")?;

    let (output, _, stderr) = run(test.command().arg("init"))?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains(".pomorc.json already exists"));
    assert_eq!(test.read_file(".pomorc.json")?, "{}");
    Ok(())
}

#[test]
fn help_lists_commands() -> Result<()> {
    let test = CliTest::new()?;

    let (output, stdout, _) = run(test.command().arg("--help"))?;
    assert_eq!(output.status.code(), Some(0));
    for command in ["compile", "check", "inspect", "init"] {
        assert!(stdout.contains(command), "missing {command} in: {stdout}");
    }
    Ok(())
}
