use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn init_defaults_writes_fallback_config() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["init", "--defaults"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved configuration to"));

    ctx.assert_gebug_exists();
    let content = ctx.read_config();
    assert!(content.contains("output_binary: /app"));
    assert!(content.contains("runtime_image: golang:1.14"));
    assert!(content.contains("{{.output_binary}}"));
}
