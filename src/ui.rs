//! Terminal and clipboard helpers shared by the commands.
//!
//! Nothing here knows about fields or the configuration file.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::{anyhow, Result};
use clipboard::{ClipboardContext, ClipboardProvider};
use tracing::debug;

/// Ask a yes/no question; anything but `y`/`yes` counts as no.
pub fn prompt_yes(question: &str) -> bool {
    print!("{} [y/N]: ", question);
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    match io::stdin().read_line(&mut answer) {
        Ok(_) => is_yes(&answer),
        Err(_) => false,
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// Print `prompt` and read one line. `None` at end of input.
pub fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut s = String::new();
    if io::stdin().read_line(&mut s)? == 0 {
        return Ok(None);
    }
    Ok(Some(s))
}

/// Copy `text`, then block for `secs` and clear it. Used by one-shot
/// commands, where the process would otherwise exit straight away.
pub fn copy_to_clipboard_and_wait(text: &str, secs: u64) -> Result<()> {
    set_clipboard(text)?;
    println!("Copied to clipboard, clearing in {} seconds...", secs);

    std::thread::sleep(Duration::from_secs(secs));
    clear_clipboard_if_unchanged(text);
    Ok(())
}

/// Copy `text` and clear it after `secs` from a background thread, so an
/// interactive prompt stays responsive.
pub fn copy_to_clipboard_in_background(text: &str, secs: u64) -> Result<()> {
    set_clipboard(text)?;
    println!("Copied to clipboard for {} seconds.", secs);

    let text = text.to_string();
    std::thread::spawn(move || {
        std::thread::sleep(Duration::from_secs(secs));
        clear_clipboard_if_unchanged(&text);
    });

    Ok(())
}

fn set_clipboard(text: &str) -> Result<()> {
    let mut ctx: ClipboardContext =
        ClipboardProvider::new().map_err(|e| anyhow!("Clipboard init error: {}", e))?;

    ctx.set_contents(text.to_string())
        .map_err(|e| anyhow!("Clipboard set error: {}", e))
}

/// Leaves the clipboard alone if the user copied something else meanwhile.
fn clear_clipboard_if_unchanged(text: &str) {
    let ctx: Result<ClipboardContext, _> = ClipboardProvider::new();
    if let Ok(mut ctx) = ctx {
        let current: Result<String, _> = ctx.get_contents();
        if current.ok().as_deref() == Some(text) && ctx.set_contents(String::new()).is_ok() {
            debug!("clipboard cleared");
        }
    }
}
