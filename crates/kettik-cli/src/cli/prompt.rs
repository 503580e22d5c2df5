/*
[INPUT]:  Interactive user input via the terminal
[OUTPUT]: Phone numbers, verification codes and confirmations
[POS]:    CLI input layer - prompts for values missing from the command line
[UPDATE]: When interactive flows change
*/

use anyhow::Result;
use console::style;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};

/// Longest verification code the backend issues
pub const CODE_MAX_LEN: usize = 6;

pub fn welcome() {
    println!("{}", style("Sign in to Kettik").bold().cyan());
    println!("{}", style("A verification code will be sent to your phone.").dim());
}

pub fn phone() -> Result<String> {
    let theme = ColorfulTheme::default();
    let phone: String = Input::with_theme(&theme)
        .with_prompt("Phone number (e.g., +996700000000)")
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            if input.trim().is_empty() {
                Err("phone number cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(phone.trim().to_string())
}

pub fn code(phone: &str) -> Result<String> {
    let theme = ColorfulTheme::default();
    let code: String = Input::with_theme(&theme)
        .with_prompt(format!("Code sent to {phone}"))
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            validate_code(input)
        })
        .interact_text()?;
    Ok(code.trim().to_string())
}

pub fn confirm(prompt: &str) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}

pub fn validate_code(input: &str) -> std::result::Result<(), String> {
    let code = input.trim();
    if code.is_empty() {
        return Err("code cannot be empty".to_string());
    }
    if code.chars().count() > CODE_MAX_LEN {
        return Err(format!("code is at most {CODE_MAX_LEN} characters"));
    }
    Ok(())
}
