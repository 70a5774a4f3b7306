#[test]
fn artifex_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/error_pass.rs");
    t.pass("tests/ui/error_batched_pass.rs");
}
