use predicates::prelude::*;

mod common;
use common::*;

const TEXT_PROMPT: &str = "Please enter the text you would like to analyze:";

#[test]
fn test_word_count_scenario() {
    let helper = TextlensTestHelper::empty("word-count-scenario");
    let results = helper.run_with_input(&[], "Word Count\nhello world\n");

    results
        .success()
        .stdout(predicate::str::contains("Available Text Analyzers:"))
        .stdout(predicate::str::contains("  Word Count"))
        .stdout(predicate::str::contains("  Char Count"))
        .stdout(predicate::str::contains(
            "Please enter the name of the Text Analyzer you would like to use:",
        ))
        .stdout(predicate::str::contains(TEXT_PROMPT))
        .stdout(predicate::str::contains("The result of the analysis is: 2"));

    helper.clean_work_dir();
}

#[test]
fn test_select_alias_runs_char_count() {
    let helper = TextlensTestHelper::empty("select-alias");
    let results = helper.run_with_input(&["s"], "Char Count\nhello world\n");

    results
        .success()
        .stdout(predicate::str::contains("The result of the analysis is: 11"));

    helper.clean_work_dir();
}

#[test]
fn test_invalid_choice_exits_without_text_prompt() {
    let helper = TextlensTestHelper::empty("invalid-choice");
    let results = helper.run_with_input(&["select"], "Nonexistent\n");

    results
        .success()
        .stdout(predicate::str::contains("Invalid choice. Exiting."))
        .stdout(predicate::str::contains(TEXT_PROMPT).not())
        .stdout(predicate::str::contains("The result of the analysis is").not());

    helper.clean_work_dir();
}

#[test]
fn test_invalid_utf8_text_is_still_analyzed() {
    let helper = TextlensTestHelper::empty("invalid-utf8");
    let results = helper.run_with_input(&[], b"Char Count\ncaf\xe9\n".to_vec());

    results
        .success()
        .stdout(predicate::str::contains("The result of the analysis is: 4"));

    helper.clean_work_dir();
}

#[test]
fn test_closed_input_is_a_critical_error() {
    let helper = TextlensTestHelper::empty("closed-input");
    let results = helper.run_with_input(&[], "");

    results
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Critical Error."));

    helper.clean_work_dir();
}

#[test]
fn test_config_analyzer_is_selectable() {
    let helper = TextlensTestHelper::new("config-analyzer", "pattern-analyzers");
    let results = helper.run_with_input(&[], "TODO Count\nTODO: fix the TODO list\n");

    results
        .success()
        .stdout(predicate::str::contains("  TODO Count"))
        .stdout(predicate::str::contains("  Vowel Count"))
        .stdout(predicate::str::contains("  Word Count"))
        .stdout(predicate::str::contains("The result of the analysis is: 2"));

    helper.clean_work_dir();
}

#[test]
fn test_unlabeled_resource_is_not_listed() {
    let helper = TextlensTestHelper::new("unlabeled", "pattern-analyzers");
    let results = helper.run_with_input(&[], "scratch\n");

    results
        .success()
        .stdout(predicate::str::contains("  scratch").not())
        .stdout(predicate::str::contains("Invalid choice. Exiting."));

    helper.clean_work_dir();
}

#[test]
fn test_no_builtins_only_lists_config() {
    let helper = TextlensTestHelper::new("no-builtins", "pattern-analyzers");
    let results = helper.run_with_input(&["--no-builtins"], "Word Count\n");

    results
        .success()
        .stdout(predicate::str::contains("  TODO Count"))
        .stdout(predicate::str::contains("  Word Count").not())
        .stdout(predicate::str::contains("Invalid choice. Exiting."));

    helper.clean_work_dir();
}

#[test]
fn test_config_overrides_builtin_label() {
    let helper = TextlensTestHelper::new("override", "override-builtin");
    let results = helper.run_with_input(&[], "Word Count\nred,green,blue\n");

    results
        .success()
        .stdout(predicate::str::contains("The result of the analysis is: 3"))
        .stderr(predicate::str::contains("Duplicate analyzer label"));

    helper.clean_work_dir();
}

#[test]
fn test_extra_config_without_default_dirs() {
    let helper = TextlensTestHelper::empty("extra-config");
    let extra = format!(
        "{}/tests/test-cases/pattern-analyzers/.textlens",
        env!("CARGO_MANIFEST_DIR")
    );
    let results = helper.run_with_input(
        &["--disable-default-config", "--extra-config", &extra],
        "Vowel Count\nAn Apple\n",
    );

    results
        .success()
        .stdout(predicate::str::contains("The result of the analysis is: 3"));

    helper.clean_work_dir();
}
