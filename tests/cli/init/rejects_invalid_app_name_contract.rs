use crate::harness::{TestContext, created_paths};
use predicates::prelude::*;

#[test]
fn names_outside_the_working_directory_are_refused() {
    let ctx = TestContext::new();

    for name in ["../escaped", "nested/app", "/tmp/allcount-absolute-app"] {
        let assert = ctx
            .cli()
            .args(["init", name])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Invalid application name"));

        assert!(created_paths(&assert.get_output().stdout).is_empty(), "{name}");
    }

    assert!(!ctx.home().join("escaped").exists());
    assert!(ctx.work_dir_entries().is_empty());
}

#[test]
fn prompted_name_is_checked_too() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("init")
        .write_stdin("../escaped\n\n\n\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid application name '../escaped'"));

    assert!(!ctx.home().join("escaped").exists());
}
