use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, SIMPLE_PO, run};

#[test]
fn clean_source_passes() -> Result<()> {
    let test = CliTest::with_file("messages.po", SIMPLE_PO)?;

    let (output, stdout, _) = run(test.check_command().arg("messages.po"))?;
    assert_eq!(output.status.code(), Some(0), "stdout: {stdout}");
    assert!(stdout.contains("Checked 1 file - no problems found"));
    assert!(!test.exists("messages.mo"));
    Ok(())
}

#[test]
fn parse_error_fails_the_check() -> Result<()> {
    let test = CliTest::with_file("broken.po", "msgid \"a\"\nmsgstr \"b\" junk\n")?;

    let (output, stdout, _) = run(test.check_command().arg("broken.po"))?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("unexpected text after closing quote"));
    Ok(())
}

#[test]
fn warnings_fail_the_check() -> Result<()> {
    let test = CliTest::with_file(
        "partial.po",
        "msgid \"\"\nmsgstr \"x\\n\"\n\nmsgid \"todo\"\nmsgstr \"\"\n",
    )?;

    let (output, stdout, _) = run(test.check_command().arg("partial.po"))?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("empty msgstr for \"todo\""));
    assert!(stdout.contains("empty-translation"));
    Ok(())
}

#[test]
fn missing_header_is_reported_with_location() -> Result<()> {
    let test = CliTest::with_file("headerless.po", "msgid \"a\"\nmsgstr \"1\"\n")?;

    let (output, stdout, _) = run(test.check_command().arg("headerless.po"))?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("no header entry"));
    assert!(stdout.contains("headerless.po"));
    Ok(())
}

#[test]
fn plural_form_count_mismatch_is_reported() -> Result<()> {
    let test = CliTest::with_file(
        "plurals.po",
        "msgid \"\"\nmsgstr \"Plural-Forms: nplurals=2; plural=(n != 1);\\n\"\n\n\
         msgid \"%d cat\"\nmsgid_plural \"%d cats\"\nmsgstr[0] \"%d chat\"\n",
    )?;

    let (output, stdout, _) = run(test.check_command().arg("plurals.po"))?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("plural-mismatch"), "stdout: {stdout}");
    Ok(())
}

#[test]
fn checks_multiple_files() -> Result<()> {
    let test = CliTest::with_file("a.po", SIMPLE_PO)?;
    test.write_file("b.po", SIMPLE_PO)?;

    let (output, stdout, _) = run(test.check_command().args(["a.po", "b.po"]))?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Checked 2 files - no problems found"));
    Ok(())
}

#[test]
fn missing_input_file_is_a_failure() -> Result<()> {
    let test = CliTest::new()?;

    let (output, stdout, _) = run(test.check_command().arg("absent.po"))?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("absent.po"));
    Ok(())
}
