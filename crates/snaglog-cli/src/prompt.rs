// SPDX-License-Identifier: Apache-2.0

//! Terminal prompts backed by `dialoguer`.

use std::io::IsTerminal;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use snaglog_core::{Prompter, SnaglogError};

/// Prompter reading from the controlling terminal.
#[derive(Default)]
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

fn require_terminal() -> snaglog_core::Result<()> {
    if std::io::stdin().is_terminal() {
        Ok(())
    } else {
        Err(SnaglogError::Prompt {
            message: "interactive mode requires a terminal".to_string(),
        })
    }
}

fn prompt_error(err: &dialoguer::Error) -> SnaglogError {
    SnaglogError::Prompt {
        message: err.to_string(),
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&mut self, label: &str, items: &[String]) -> snaglog_core::Result<usize> {
        require_terminal()?;

        Select::with_theme(&self.theme)
            .with_prompt(label)
            .items(items)
            .default(0)
            .interact()
            .map_err(|e| prompt_error(&e))
    }

    fn input(&mut self, label: &str, placeholder: &str) -> snaglog_core::Result<String> {
        require_terminal()?;

        Input::<String>::with_theme(&self.theme)
            .with_prompt(format!("{label} ({placeholder})"))
            .validate_with(|input: &String| {
                if input.trim().is_empty() {
                    Err("Project name is required")
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .map_err(|e| prompt_error(&e))
    }
}
