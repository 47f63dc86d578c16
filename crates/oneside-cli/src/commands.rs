use std::fs;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use oneside_types::{CancelFlag, ContextRange, Side, TextDocument};
use oneside_viewer::{compute, OnesideViewer, RediffRequest, ViewState, ViewerSettings};
use serde::Serialize;

use crate::cli::*;
use crate::render::{render_text, summary};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let base = match &cli.config {
        Some(path) => ViewerSettings::load(path)?,
        None => ViewerSettings::default(),
    };
    match cli.command {
        Command::Diff(args) => cmd_diff(args, base, &cli.format),
        Command::Translate(args) => cmd_translate(args, base, &cli.format),
    }
}

/// Command-line flags override the settings file.
fn resolve_settings(input: &InputArgs, mut settings: ViewerSettings) -> anyhow::Result<ViewerSettings> {
    if let Some(context) = input.context {
        settings.context_range = ContextRange::try_from(context)?;
    }
    if let Some(master) = input.master {
        settings.master_side = master.into();
    }
    if let Some(policy) = input.policy {
        settings.policy = policy.into();
    }
    if input.no_inline {
        settings.inline_highlight = false;
    }
    Ok(settings)
}

fn read_document(path: &Path) -> anyhow::Result<TextDocument> {
    let text = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(TextDocument::new(text))
}

fn load_viewer(input: &InputArgs, base: ViewerSettings) -> anyhow::Result<OnesideViewer> {
    let settings = resolve_settings(input, base)?;
    let left = match input.missing {
        Some(SideArg::Left) => None,
        _ => Some(read_document(&input.left)?),
    };
    let right = match input.missing {
        Some(SideArg::Right) => None,
        _ => Some(read_document(&input.right)?),
    };

    let mut viewer = OnesideViewer::new(settings.master_side);
    let request = RediffRequest::new(left, right, settings);
    viewer.apply(compute(&request, &CancelFlag::new()));
    Ok(viewer)
}

/// The combined view, or an error describing why there is none.
fn combined_state(viewer: &OnesideViewer) -> anyhow::Result<()> {
    match viewer.state() {
        Some(ViewState::Ready(_)) => Ok(()),
        Some(ViewState::TooBig) => anyhow::bail!("content too big to compare"),
        Some(ViewState::Error(message)) => anyhow::bail!("diff failed: {message}"),
        None => anyhow::bail!("no diff computed"),
    }
}

fn cmd_diff(args: DiffArgs, base: ViewerSettings, format: &OutputFormat) -> anyhow::Result<()> {
    let viewer = load_viewer(&args.input, base)?;
    combined_state(&viewer)?;
    let Some(diff) = viewer.combined() else {
        return Ok(());
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(diff)?),
        OutputFormat::Text => {
            print!("{}", render_text(diff));
            println!("{}", summary(diff));
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct TranslateOutput {
    side: Option<Side>,
    line: usize,
    combined_line: usize,
    exact: bool,
}

fn cmd_translate(args: TranslateArgs, base: ViewerSettings, format: &OutputFormat) -> anyhow::Result<()> {
    let viewer = load_viewer(&args.input, base)?;
    combined_state(&viewer)?;

    let output = match args.side {
        Some(side) => TranslateOutput {
            side: Some(side.into()),
            line: args.line,
            combined_line: viewer.to_combined(side.into(), args.line),
            exact: viewer
                .combined()
                .and_then(|diff| diff.inverted_convertor.get_exact(side.into(), args.line))
                .is_some(),
        },
        None => {
            let transfer = viewer.from_combined(args.line);
            TranslateOutput {
                side: Some(transfer.side),
                line: transfer.line,
                combined_line: args.line,
                exact: transfer.exact,
            }
        }
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
        OutputFormat::Text => {
            let side = output.side.map(|s| s.to_string()).unwrap_or_default();
            let marker = if output.exact { "".normal() } else { " (approximate)".yellow() };
            println!(
                "{} line {} ↔ combined line {}{}",
                side.bold(),
                output.line,
                output.combined_line,
                marker
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn input(left: PathBuf, right: PathBuf) -> InputArgs {
        InputArgs {
            left,
            right,
            missing: None,
            context: None,
            master: None,
            policy: None,
            no_inline: false,
        }
    }

    #[test]
    fn flags_override_settings() {
        let mut args = input("a".into(), "b".into());
        args.context = Some(-1);
        args.master = Some(SideArg::Left);
        args.no_inline = true;
        let settings = resolve_settings(&args, ViewerSettings::default()).unwrap();
        assert_eq!(settings.context_range, ContextRange::Unlimited);
        assert_eq!(settings.master_side, Side::Left);
        assert!(!settings.inline_highlight);
    }

    #[test]
    fn invalid_context_is_rejected() {
        let mut args = input("a".into(), "b".into());
        args.context = Some(-7);
        assert!(resolve_settings(&args, ViewerSettings::default()).is_err());
    }

    #[test]
    fn missing_side_is_not_read() {
        let dir = tempfile::tempdir().unwrap();
        let right = dir.path().join("new.txt");
        fs::write(&right, "x\ny\n").unwrap();

        let mut args = input(dir.path().join("does-not-exist"), right);
        args.missing = Some(SideArg::Left);
        let viewer = load_viewer(&args, ViewerSettings::default()).unwrap();
        let diff = viewer.combined().unwrap();
        assert_eq!(diff.text, "x\ny\n");
        assert_eq!(diff.convertor.get(Side::Left, 0), None);
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = input(dir.path().join("nope"), dir.path().join("nope2"));
        assert!(load_viewer(&args, ViewerSettings::default()).is_err());
    }

    #[test]
    fn too_big_input_fails_the_command() {
        let dir = tempfile::tempdir().unwrap();
        let left = dir.path().join("l.txt");
        let right = dir.path().join("r.txt");
        fs::write(&left, "a\nb\n").unwrap();
        fs::write(&right, "a\nc\n").unwrap();

        let settings = ViewerSettings {
            max_lines: 2,
            ..ViewerSettings::default()
        };
        let viewer = load_viewer(&input(left, right), settings).unwrap();
        let err = combined_state(&viewer).unwrap_err();
        assert!(err.to_string().contains("too big"));
    }
}
