//! Help text rendering.
//!
//! The option list is read back from the clap definition in `args.rs`, so flag names and
//! descriptions have a single source. Column padding is computed here and handed to
//! `help.tmp` as plain strings.

use super::args::Cli;
use super::templates::HELP_TEMPLATE;
use clap::CommandFactory;
use serde::Serialize;
use swimburger::error::Result;
use swimburger::profile::Profile;
use swimburger::styles::SWIMBURGER_THEME;
use swimburger::theme::render_with_color;
use unicode_width::UnicodeWidthStr;

const OPTION_COLUMN: usize = 14;
const EXAMPLE_COLUMN: usize = 24;

const EXAMPLES: &[(&str, &str)] = &[
    ("", "Display visual profile card"),
    ("--json", "Output as JSON"),
    ("--yaml", "Output as YAML"),
    ("--vcard", "Output as vCard"),
];

#[derive(Serialize)]
struct HelpData<'a> {
    tool: String,
    name: &'a str,
    nickname: &'a str,
    website: &'a str,
    github: &'a str,
    options: Vec<Row>,
    examples: Vec<ExampleRow>,
}

#[derive(Serialize)]
struct Row {
    flags: String,
    pad: String,
    about: String,
}

#[derive(Serialize)]
struct ExampleRow {
    command: String,
    pad: String,
    about: String,
}

fn pad_to(text: &str, column: usize) -> String {
    " ".repeat(column.saturating_sub(text.width()).max(1))
}

fn option_rows() -> Vec<Row> {
    let cmd = Cli::command();
    cmd.get_arguments()
        .filter_map(|arg| {
            let long = arg.get_long()?;
            let flags = match arg.get_short() {
                Some(short) => format!("--{}, -{}", long, short),
                None => format!("--{}", long),
            };
            let about = arg.get_help().map(|s| s.to_string()).unwrap_or_default();
            Some(Row {
                pad: pad_to(&flags, OPTION_COLUMN),
                flags,
                about,
            })
        })
        .collect()
}

fn example_rows(tool: &str) -> Vec<ExampleRow> {
    EXAMPLES
        .iter()
        .map(|(flag, about)| {
            let command = if flag.is_empty() {
                tool.to_string()
            } else {
                format!("{} {}", tool, flag)
            };
            ExampleRow {
                pad: pad_to(&command, EXAMPLE_COLUMN),
                command,
                about: about.to_string(),
            }
        })
        .collect()
}

/// Renders the usage text. Only the name, nickname, website and GitHub link of the profile
/// appear in it.
pub fn render_help(profile: &Profile, use_color: bool) -> Result<String> {
    let tool = Cli::command().get_name().to_string();
    let data = HelpData {
        name: &profile.name,
        nickname: &profile.nickname,
        website: &profile.website,
        github: &profile.github,
        options: option_rows(),
        examples: example_rows(&tool),
        tool,
    };
    Ok(render_with_color(
        HELP_TEMPLATE,
        &data,
        &SWIMBURGER_THEME,
        use_color,
    )?)
}
