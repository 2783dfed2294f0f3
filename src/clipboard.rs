use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};

#[cfg(target_os = "macos")]
const CLIPBOARD_PROGRAM: (&str, &[&str]) = ("pbcopy", &[]);
#[cfg(target_os = "windows")]
const CLIPBOARD_PROGRAM: (&str, &[&str]) = ("clip", &[]);
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const CLIPBOARD_PROGRAM: (&str, &[&str]) = ("xclip", &["-selection", "clipboard"]);

/// Pipes `text` into the platform clipboard helper.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let (program, args) = CLIPBOARD_PROGRAM;
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to start {}", program))?;

    if let Some(stdin) = child.stdin.as_mut() {
        stdin
            .write_all(text.as_bytes())
            .with_context(|| format!("Failed to write to {}", program))?;
    }
    // Closes stdin so the helper sees EOF.
    drop(child.stdin.take());

    let status = child
        .wait()
        .with_context(|| format!("Failed to wait for {}", program))?;
    if !status.success() {
        anyhow::bail!("{} exited with status {}", program, status);
    }
    Ok(())
}
