//! Supporting helpers: colored message prefixes for stderr reporting.

use owo_colors::OwoColorize;

fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

pub fn error_prefix() -> String {
    if use_colors() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

pub fn warn_prefix() -> String {
    if use_colors() {
        "warn:".yellow().bold().to_string()
    } else {
        "warn:".to_string()
    }
}

pub fn info_prefix() -> String {
    if use_colors() {
        "info:".blue().bold().to_string()
    } else {
        "info:".to_string()
    }
}

pub fn note_prefix() -> String {
    if use_colors() {
        "note:".bright_black().to_string()
    } else {
        "note:".to_string()
    }
}

pub fn done_prefix() -> String {
    if use_colors() {
        "done:".green().bold().to_string()
    } else {
        "done:".to_string()
    }
}
