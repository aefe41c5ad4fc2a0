//! Integration tests for the replay binary's output streams

use std::process::Command;

use testresult::TestResult;

#[test]
fn stdout_holds_only_the_receipt() -> TestResult {
    let output = Command::new(env!("CARGO_BIN_EXE_trolley"))
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .env("RUST_LOG", "info")
        .output()?;

    let stdout = String::from_utf8(output.stdout)?;
    let stderr = String::from_utf8(output.stderr)?;

    assert!(output.status.success());
    assert!(stdout.contains("Widget"));
    assert!(stdout.contains("Subtotal:"));
    assert!(!stdout.contains("INFO"));
    assert!(!stdout.contains("cart updated"));
    assert!(stderr.contains("cart updated"));
    assert!(stderr.contains("replay complete"));

    Ok(())
}
