use crate::harness::{TestContext, mock_template_files};
use predicates::prelude::*;
use std::fs;

fn existing_project(ctx: &TestContext) {
    let project = ctx.project_path("crm");
    fs::create_dir_all(&project).unwrap();
    fs::write(project.join("notes.txt"), "keep me").unwrap();
}

#[test]
fn declining_leaves_directory_untouched() {
    let ctx = TestContext::new();
    existing_project(&ctx);

    ctx.cli()
        .args(["init", "crm"])
        .write_stdin("n\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("destination is not empty, continue? [y/N]"))
        .stderr(predicate::str::contains("aborting"));

    let project = ctx.project_path("crm");
    assert!(!project.join("package.json").exists());
    assert_eq!(fs::read_to_string(project.join("notes.txt")).unwrap(), "keep me");
}

#[test]
fn confirming_scaffolds_alongside_existing_files() {
    let mut server = mockito::Server::new();
    let _m = mock_template_files(&mut server, &[("a.txt", "X")]);
    let ctx = TestContext::new().with_template_service(&server);
    existing_project(&ctx);

    ctx.cli().args(["init", "crm"]).write_stdin("Yes\n").assert().success();

    let project = ctx.project_path("crm");
    assert!(project.join("package.json").is_file());
    assert!(project.join("notes.txt").is_file());
    assert!(project.join("app-config/a.txt").is_file());
}

#[test]
fn force_skips_the_question() {
    let mut server = mockito::Server::new();
    let _m = mock_template_files(&mut server, &[("a.txt", "X")]);
    let ctx = TestContext::new().with_template_service(&server);
    existing_project(&ctx);

    ctx.cli()
        .args(["init", "crm", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("continue?").not());

    assert!(ctx.project_path("crm").join("app-config/a.txt").is_file());
}
