use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn init_without_terminal_fails_without_writing() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("init")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Prompt failed"));

    ctx.assert_gebug_not_exists();
}
