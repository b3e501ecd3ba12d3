use super::args::Cli;
use super::logging;
use super::render::render_help;
use std::io::Write;
use swimburger::error::Result;
use swimburger::mode::OutputMode;
use swimburger::profile::Profile;
use swimburger::render::{to_card, to_json, to_vcard, to_yaml, CardLayout};
use swimburger::theme::colors_enabled;
use tracing::debug;

pub fn run() -> Result<()> {
    logging::init();

    let cli = Cli::parse_permissive(std::env::args_os());
    let mode = OutputMode::select(cli.mode_flags());
    debug!(%mode, "selected output mode");

    let profile = Profile::swimburger();
    let output = render_mode(mode, &profile, colors_enabled())?;
    write_stdout(&output)
}

fn render_mode(mode: OutputMode, profile: &Profile, use_color: bool) -> Result<String> {
    match mode {
        OutputMode::Help => render_help(profile, use_color),
        OutputMode::Json => to_json(profile),
        OutputMode::Yaml => to_yaml(profile),
        OutputMode::VCard => Ok(to_vcard(profile)),
        OutputMode::Card => to_card(profile, &CardLayout::default(), use_color),
    }
}

fn write_stdout(output: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    debug!(bytes = output.len(), "output written");
    Ok(())
}
