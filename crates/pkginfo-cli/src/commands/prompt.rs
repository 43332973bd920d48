//! Interactive input.
//!
//! Every value follows the same order: flag, then prompt, then default. A
//! [`Prompter`] only prompts when stdin is a terminal and `--no-interaction`
//! was not given. Builds without the `interactive` feature report
//! [`CliError::FeatureNotAvailable`] when a prompt would have been needed.

use std::io::IsTerminal as _;

use crate::error::{CliError, CliResult};

#[derive(Debug, Clone, Copy)]
pub struct Prompter {
    interactive: bool,
}

impl Prompter {
    pub fn new(no_interaction: bool) -> Self {
        Self {
            interactive: !no_interaction && std::io::stdin().is_terminal(),
        }
    }

    /// A prompter that never asks.
    pub fn disabled() -> Self {
        Self { interactive: false }
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Ask for a line of text, re-asking until `validate` accepts it.
    ///
    /// Returns `Ok(None)` when prompting is disabled.
    pub fn text<V>(
        &self,
        prompt: &str,
        default: Option<&str>,
        allow_empty: bool,
        validate: V,
    ) -> CliResult<Option<String>>
    where
        V: FnMut(&String) -> Result<(), String>,
    {
        if !self.interactive {
            return Ok(None);
        }
        read_text(prompt, default, allow_empty, validate).map(Some)
    }

    /// Ask a yes/no question. Returns `Ok(None)` when prompting is disabled.
    pub fn confirm(&self, prompt: &str, default: bool) -> CliResult<Option<bool>> {
        if !self.interactive {
            return Ok(None);
        }
        read_confirm(prompt, default).map(Some)
    }
}

#[cfg(feature = "interactive")]
fn read_text<V>(
    prompt: &str,
    default: Option<&str>,
    allow_empty: bool,
    validate: V,
) -> CliResult<String>
where
    V: FnMut(&String) -> Result<(), String>,
{
    let mut input = dialoguer::Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(allow_empty)
        .validate_with(validate);
    if let Some(default) = default {
        input = input.default(default.to_owned());
    }
    Ok(input.interact_text()?.trim().to_owned())
}

#[cfg(not(feature = "interactive"))]
fn read_text<V>(_: &str, _: Option<&str>, _: bool, _: V) -> CliResult<String>
where
    V: FnMut(&String) -> Result<(), String>,
{
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(feature = "interactive")]
fn read_confirm(prompt: &str, default: bool) -> CliResult<bool> {
    Ok(dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

#[cfg(not(feature = "interactive"))]
fn read_confirm(_: &str, _: bool) -> CliResult<bool> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

/// A required text value: trimmed flag, else a non-empty prompt answer.
pub fn required(
    prompter: &Prompter,
    flag_value: Option<String>,
    flag: &'static str,
    prompt: &str,
) -> CliResult<String> {
    if let Some(value) = flag_value {
        let value = value.trim().to_owned();
        if value.is_empty() {
            return Err(CliError::invalid_input(format!("--{flag} must not be blank")));
        }
        return Ok(value);
    }

    prompter
        .text(prompt, None, false, |s: &String| {
            if s.trim().is_empty() {
                Err("a value is required".into())
            } else {
                Ok(())
            }
        })?
        .ok_or(CliError::MissingField { flag })
}

/// An optional text value: trimmed flag, else a prompt that accepts blank,
/// else empty.
pub fn optional(prompter: &Prompter, flag_value: Option<String>, prompt: &str) -> CliResult<String> {
    if let Some(value) = flag_value {
        return Ok(value.trim().to_owned());
    }
    Ok(prompter
        .text(prompt, None, true, |_: &String| Ok(()))?
        .unwrap_or_default())
}
