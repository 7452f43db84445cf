//! Thin wrapper around the `osascript` scripting bridge.

use std::process::Command;

const OSASCRIPT: &str = "/usr/bin/osascript";

/// Run an AppleScript source text and return its trimmed stdout.
///
/// Errors carry the interpreter's trimmed stderr, or the launch failure when
/// the interpreter could not be started at all.
pub fn run_applescript(script: &str) -> Result<String, String> {
    let output = Command::new(OSASCRIPT)
        .args(["-e", script])
        .output()
        .map_err(|error| format!("failed to launch {OSASCRIPT}: {error}"))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if stderr.is_empty() {
            return Err(format!("osascript exited with {}", output.status));
        }
        return Err(stderr);
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Escape a value for embedding inside a double-quoted AppleScript literal.
pub fn applescript_escape(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}
