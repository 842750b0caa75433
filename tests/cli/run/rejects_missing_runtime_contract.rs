use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn run_before_npm_install_exits_with_status_one() {
    let ctx = TestContext::new();
    fs::write(ctx.work_dir().join("package.json"), r#"{"name": "crm"}"#).unwrap();

    ctx.cli()
        .arg("run")
        .env("ALLCOUNT_RUNTIME_PROGRAM", "allcount-runtime-must-not-start")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("allcountjs is not installed"))
        .stderr(predicate::str::contains("npm install"));
}
