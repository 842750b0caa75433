use crate::harness::{TestContext, mock_template_files};
use predicates::prelude::*;

#[test]
fn missing_name_prompts_in_order_and_records_answers() {
    let mut server = mockito::Server::new();
    let _m = mock_template_files(&mut server, &[("main.js", "A.app({})")]);
    let ctx = TestContext::new().with_template_service(&server);

    ctx.cli()
        .arg("init")
        .write_stdin("shop\nAda Lovelace\nada@example.com\nA tiny shop\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Application name [helloworld-app]: Author name: Author email: Description: ",
        ));

    let manifest = ctx.read_manifest("shop");
    assert_eq!(manifest["name"], "shop");
    assert_eq!(manifest["author"]["name"], "Ada Lovelace");
    assert_eq!(manifest["author"]["email"], "ada@example.com");
    assert_eq!(manifest["description"], "A tiny shop");
    assert!(ctx.project_path("shop").join("app-config/main.js").is_file());
}

#[test]
fn empty_answers_use_defaults() {
    let mut server = mockito::Server::new();
    let _m = mock_template_files(&mut server, &[]);
    let ctx = TestContext::new().with_template_service(&server);

    ctx.cli().arg("init").write_stdin("\n\n\n\n").assert().success();

    let manifest = ctx.read_manifest("helloworld-app");
    assert_eq!(manifest["name"], "helloworld-app");
    assert!(manifest.get("author").is_none());
    assert!(manifest.get("description").is_none());
}

#[test]
fn name_argument_asks_nothing() {
    let mut server = mockito::Server::new();
    let _m = mock_template_files(&mut server, &[]);
    let ctx = TestContext::new().with_template_service(&server);

    ctx.cli()
        .args(["init", "crm"])
        .write_stdin("unused\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Application name").not());
}
