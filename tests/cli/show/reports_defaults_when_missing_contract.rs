use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn show_reports_defaults_when_missing() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("output_binary: /app"))
        .stdout(predicate::str::contains("runtime_image: golang:1.14"))
        .stderr(predicate::str::contains("no configuration file found"))
        .stderr(predicate::str::contains("ERROR").not());

    ctx.assert_gebug_not_exists();
}
