//! Access token acquisition
//!
//! The token comes from `FB_ACCESS_TOKEN` when set; otherwise the user is
//! asked for it on stderr. On a terminal the input is read in raw mode with
//! echo off; piped input is read as a single line.

use crate::errors::{AppError, AppResult};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use std::env;
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::debug;

/// Environment variable holding the Graph API access token
pub const ACCESS_TOKEN_ENV: &str = "FB_ACCESS_TOKEN";

const PROMPT: &str = "Enter Facebook Access Token: ";

/// Return `FB_ACCESS_TOKEN` if set and non-blank, otherwise ask `prompt`
pub fn load_access_token<F>(prompt: F) -> AppResult<String>
where
    F: FnOnce() -> AppResult<String>,
{
    match env::var(ACCESS_TOKEN_ENV) {
        Ok(token) if !token.trim().is_empty() => {
            debug!("Using access token from {}", ACCESS_TOKEN_ENV);
            Ok(token.trim().to_string())
        }
        _ => prompt(),
    }
}

/// Prompt on stderr and read the token from stdin
///
/// Blocks until input arrives; there is no timeout.
pub fn prompt_for_token() -> AppResult<String> {
    let mut stderr = io::stderr();
    write!(stderr, "{}", PROMPT)?;
    stderr.flush()?;

    let stdin = io::stdin();
    if stdin.is_terminal() {
        let token = read_masked();
        // Raw mode swallowed the user's Enter
        writeln!(stderr)?;
        return Ok(token?.trim().to_string());
    }

    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// What a keystroke does to masked input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Submit,
    Cancel,
}

/// Apply one key press to the buffer
pub fn apply_key(buffer: &mut String, key: &KeyEvent) -> KeyOutcome {
    if key.kind != KeyEventKind::Press {
        return KeyOutcome::Continue;
    }

    match key.code {
        KeyCode::Enter => KeyOutcome::Submit,
        KeyCode::Esc => KeyOutcome::Cancel,
        KeyCode::Char('c') | KeyCode::Char('d')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            KeyOutcome::Cancel
        }
        KeyCode::Backspace => {
            buffer.pop();
            KeyOutcome::Continue
        }
        KeyCode::Char(c) => {
            buffer.push(c);
            KeyOutcome::Continue
        }
        _ => KeyOutcome::Continue,
    }
}

fn read_masked() -> AppResult<String> {
    terminal::enable_raw_mode()?;
    let result = read_keys();
    // Always restore the terminal, even when reading failed
    terminal::disable_raw_mode()?;
    result
}

fn read_keys() -> AppResult<String> {
    let mut buffer = String::new();
    loop {
        if let Event::Key(key) = event::read()? {
            match apply_key(&mut buffer, &key) {
                KeyOutcome::Continue => {}
                KeyOutcome::Submit => return Ok(buffer),
                KeyOutcome::Cancel => {
                    return Err(AppError::Prompt("input cancelled".to_string()))
                }
            }
        }
    }
}
