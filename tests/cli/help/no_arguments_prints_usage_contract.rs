use crate::harness::{TestContext, created_paths};
use predicates::prelude::*;

#[test]
fn no_arguments_prints_usage_and_creates_nothing() {
    let ctx = TestContext::new();

    let assert = ctx
        .cli()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: allcount"))
        .stdout(predicate::str::contains("--help"))
        .stderr(predicate::str::is_empty());

    assert!(created_paths(&assert.get_output().stdout).is_empty());
    assert!(ctx.work_dir_entries().is_empty());
}
