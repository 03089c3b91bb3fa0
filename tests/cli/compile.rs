use anyhow::Result;
use pretty_assertions::assert_eq;

use pomo::mo;

use crate::{CliTest, SIMPLE_PO, run};

#[test]
fn compiles_next_to_source_by_default() -> Result<()> {
    let test = CliTest::with_file("messages.po", SIMPLE_PO)?;

    let (output, stdout, _) = run(test.compile_command().arg("messages.po"))?;
    assert_eq!(output.status.code(), Some(0), "stdout: {stdout}");
    assert!(stdout.contains("Compiled messages.po"));

    let catalog = mo::read(&test.read_bytes("messages.mo")?).expect("valid catalog");
    let keys: Vec<&str> = catalog.entries().iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["", "hello"]);
    assert_eq!(catalog.entries()[1].1, "bonjour");
    Ok(())
}

#[test]
fn catalog_has_n_plus_one_sorted_entries() -> Result<()> {
    let test = CliTest::with_file(
        "many.po",
        "msgid \"\"\nmsgstr \"Language: de\\n\"\n\n\
         msgid \"zebra\"\nmsgstr \"Zebra\"\n\n\
         msgid \"apple\"\nmsgstr \"Apfel\"\n\n\
         msgid \"mango\"\nmsgstr \"Mango\"\n",
    )?;

    let (output, ..) = run(test.compile_command().arg("many.po"))?;
    assert_eq!(output.status.code(), Some(0));

    let catalog = mo::read(&test.read_bytes("many.mo")?).expect("valid catalog");
    let keys: Vec<&str> = catalog.entries().iter().map(|(k, _)| k.as_str()).collect();
    // 3 unique keys plus the metadata entry, empty key first.
    assert_eq!(keys, vec!["", "apple", "mango", "zebra"]);
    Ok(())
}

#[test]
fn compiling_twice_is_byte_identical() -> Result<()> {
    let test = CliTest::with_file("messages.po", SIMPLE_PO)?;

    run(test.compile_command().arg("messages.po"))?;
    let first = test.read_bytes("messages.mo")?;
    run(test.compile_command().arg("messages.po"))?;
    let second = test.read_bytes("messages.mo")?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn duplicate_msgid_keeps_last_and_warns() -> Result<()> {
    let test = CliTest::with_file(
        "dup.po",
        "msgid \"\"\nmsgstr \"x\\n\"\n\n\
         msgid \"hello\"\nmsgstr \"salut\"\n\n\
         msgid \"hello\"\nmsgstr \"bonjour\"\n",
    )?;

    let (output, stdout, _) = run(test.compile_command().arg("dup.po"))?;
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("duplicate msgid \"hello\""));

    let catalog = mo::read(&test.read_bytes("dup.mo")?).expect("valid catalog");
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.entries()[1], ("hello".to_string(), "bonjour".to_string()));
    Ok(())
}

#[test]
fn duplicate_policy_error_refuses_to_compile() -> Result<()> {
    let test = CliTest::with_file(
        "dup.po",
        "msgid \"\"\nmsgstr \"x\\n\"\n\n\
         msgid \"a\"\nmsgstr \"1\"\n\n\
         msgid \"a\"\nmsgstr \"2\"\n",
    )?;

    let (output, stdout, _) = run(test
        .compile_command()
        .args(["dup.po", "--on-duplicate", "error"]))?;
    assert_eq!(output.status.code(), Some(1), "stdout: {stdout}");
    assert!(!test.exists("dup.mo"));
    Ok(())
}

#[test]
fn parse_error_creates_no_output() -> Result<()> {
    let test = CliTest::with_file("broken.po", "msgid \"unterminated\nmsgstr \"x\"\n")?;

    let (output, stdout, _) = run(test.compile_command().arg("broken.po"))?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("parse error at line 1"), "stdout: {stdout}");
    assert!(stdout.contains("unterminated quoted string"));
    assert!(!test.exists("broken.mo"));
    Ok(())
}

#[test]
fn unwritable_output_leaves_existing_file_unchanged() -> Result<()> {
    let test = CliTest::with_file("messages.po", SIMPLE_PO)?;
    test.write_file("out.mo", "pre-existing")?;
    // `blocker` is a regular file, so `blocker/nested` cannot be created.
    test.write_file("blocker", "not a directory")?;

    let (output, ..) = run(test
        .compile_command()
        .args(["messages.po", "-o", "blocker/nested/out.mo"]))?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(test.read_file("out.mo")?, "pre-existing");
    Ok(())
}

#[test]
fn failed_compile_leaves_target_catalog_unchanged() -> Result<()> {
    let test = CliTest::with_file("broken.po", "msgid \"a\"\nmsgstr \"b\" junk\n")?;
    test.write_file("out.mo", "pre-existing")?;

    let (output, ..) = run(test.compile_command().args(["broken.po", "-o", "out.mo"]))?;
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(test.read_file("out.mo")?, "pre-existing");
    Ok(())
}

#[test]
fn explicit_output_path_with_multiple_inputs_is_rejected() -> Result<()> {
    let test = CliTest::with_file("a.po", SIMPLE_PO)?;
    test.write_file("b.po", SIMPLE_PO)?;

    let (output, _, stderr) = run(test
        .compile_command()
        .args(["a.po", "b.po", "-o", "out.mo"]))?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("--output requires exactly one input file"));
    Ok(())
}

#[test]
fn one_bad_file_does_not_abort_the_batch() -> Result<()> {
    let test = CliTest::with_file("good.po", SIMPLE_PO)?;
    test.write_file("bad.po", "bogus line\n")?;

    let (output, stdout, _) = run(test.compile_command().args(["bad.po", "good.po"]))?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("Compiled good.po"));
    assert!(stdout.contains("1 of 2 files failed to compile"));
    assert!(test.exists("good.mo"));
    assert!(!test.exists("bad.mo"));
    Ok(())
}

#[test]
fn fuzzy_entries_are_skipped_unless_requested() -> Result<()> {
    let source = "msgid \"\"\nmsgstr \"x\\n\"\n\n\
                  #, fuzzy\nmsgid \"draft\"\nmsgstr \"brouillon\"\n";
    let test = CliTest::with_file("messages.po", source)?;

    run(test.compile_command().arg("messages.po"))?;
    let catalog = mo::read(&test.read_bytes("messages.mo")?).expect("valid catalog");
    assert_eq!(catalog.len(), 1);

    run(test
        .compile_command()
        .args(["messages.po", "--include-fuzzy"]))?;
    let catalog = mo::read(&test.read_bytes("messages.mo")?).expect("valid catalog");
    assert_eq!(catalog.len(), 2);
    Ok(())
}

#[test]
fn plural_and_context_entries_compile() -> Result<()> {
    let test = CliTest::with_file(
        "messages.po",
        "msgid \"\"\nmsgstr \"x\\n\"\n\n\
         msgctxt \"menu\"\nmsgid \"File\"\nmsgstr \"Fichier\"\n\n\
         msgid \"%d file\"\nmsgid_plural \"%d files\"\n\
         msgstr[0] \"%d fichier\"\nmsgstr[1] \"%d fichiers\"\n",
    )?;

    let (output, ..) = run(test.compile_command().arg("messages.po"))?;
    assert_eq!(output.status.code(), Some(0));

    let catalog = mo::read(&test.read_bytes("messages.mo")?).expect("valid catalog");
    let keys: Vec<&str> = catalog.entries().iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["", "%d file\u{0}%d files", "menu\u{4}File"]);
    assert_eq!(catalog.entries()[1].1, "%d fichier\u{0}%d fichiers");
    Ok(())
}

#[test]
fn output_dir_from_config_file() -> Result<()> {
    let test = CliTest::with_file("messages.po", SIMPLE_PO)?;
    test.write_file(".pomorc.json", r#"{ "outputDir": "build/locale" }"#)?;

    let (output, ..) = run(test.compile_command().arg("messages.po"))?;
    assert_eq!(output.status.code(), Some(0));
    assert!(test.exists("build/locale/messages.mo"));
    Ok(())
}
