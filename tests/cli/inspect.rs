use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, SIMPLE_PO, run};

#[test]
fn lists_entries_of_a_compiled_catalog() -> Result<()> {
    let test = CliTest::with_file("messages.po", SIMPLE_PO)?;
    run(test.compile_command().arg("messages.po"))?;

    let (output, stdout, _) = run(test.command().args(["inspect", "messages.mo"]))?;
    assert_eq!(output.status.code(), Some(0), "stdout: {stdout}");
    assert!(stdout.contains("messages.mo: 1 entry"));
    assert!(stdout.contains("Language: fr"));
    assert!(stdout.contains("\"hello\" => \"bonjour\""));
    Ok(())
}

#[test]
fn rejects_a_file_that_is_not_a_catalog() -> Result<()> {
    let test = CliTest::with_file("messages.po", SIMPLE_PO)?;

    let (output, _, stderr) = run(test.command().args(["inspect", "messages.po"]))?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("cannot parse messages.po"));
    Ok(())
}

#[test]
fn rejects_a_missing_file() -> Result<()> {
    let test = CliTest::new()?;

    let (output, _, stderr) = run(test.command().args(["inspect", "absent.mo"]))?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("cannot read absent.mo"));
    Ok(())
}
