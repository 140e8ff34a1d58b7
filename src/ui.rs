// UI module for consistent terminal output with spinners and styling

#![allow(clippy::print_stdout, clippy::print_stderr)]

use console::{Term, style};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use serde::Serialize;
use std::time::Duration;

use crate::commands::Command;
use crate::render::{AutocompleteReply, Embed, Reply};

/// Spinner style similar to uv/pnpm
const SPINNER_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Check if stderr is a TTY (for interactive output)
fn is_tty() -> bool {
    Term::stderr().is_term()
}

/// Create a styled spinner for async operations
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if !is_tty() {
        pb.set_draw_target(ProgressDrawTarget::hidden());
    }

    if let Ok(spinner_style) = ProgressStyle::default_spinner()
        .tick_chars(SPINNER_CHARS)
        .template("{spinner:.cyan} {msg}")
    {
        pb.set_style(spinner_style);
    }
    pb.set_message(message.to_string());

    if is_tty() {
        pb.enable_steady_tick(Duration::from_millis(80));
    }

    pb
}

/// Clear a spinner without leaving a message
pub fn clear_spinner(pb: &ProgressBar) {
    pb.finish_and_clear();
}

/// Print a value as pretty JSON
pub fn json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a reply the way a chat client would lay it out
pub fn reply(reply: &Reply) {
    if let Some(content) = &reply.content {
        if reply.is_ephemeral() {
            eprintln!("{} {}", style("✗").red(), content);
        } else {
            println!("{}", content);
        }
    }

    for (index, embed) in reply.embeds.iter().enumerate() {
        if index > 0 {
            println!();
        }
        print_embed(embed);
    }
}

fn print_embed(embed: &Embed) {
    println!(
        "{} {}",
        style("■").color256(nearest_ansi256(embed.color)),
        style(&embed.title).bold()
    );
    println!("  {}", style(&embed.url).dim().underlined());
    println!("  {}", embed.description);
    for field in &embed.fields {
        println!("  {} {}", style(format!("{}:", field.name)).cyan(), field.value);
    }
}

/// Print autocomplete choices, one per line
pub fn choices(reply: &AutocompleteReply) {
    if reply.choices.is_empty() {
        println!("{}", style("No suggestions").dim());
        return;
    }

    for choice in &reply.choices {
        println!("{} {}", style("→").cyan(), choice.name);
    }
}

/// Print registered commands with their descriptions
pub fn commands(commands: &[&std::sync::Arc<dyn Command>]) {
    for command in commands {
        println!(
            "{} {}",
            style(format!("/{}", command.name())).cyan().bold(),
            style(command.description()).dim()
        );
    }
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red(), message);
}

/// Map a 24-bit RGB color onto the 6x6x6 cube of the 256-color palette
fn nearest_ansi256(rgb: u32) -> u8 {
    let channel = |shift: u32| (((rgb >> shift) & 0xff) as u16 * 5 / 255) as u8;
    16 + 36 * channel(16) + 6 * channel(8) + channel(0)
}
