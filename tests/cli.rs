//! Running the binary without a complete configuration

use std::process::Command;

#[test]
fn empty_token_exits_with_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_debordo-register"))
        .env("DISCORD_BOT_TOKEN", "")
        .env("DISCORD_APPLICATION_ID", "123")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("❌ Veuillez définir DISCORD_BOT_TOKEN et DISCORD_APPLICATION_ID"));
}
