// CLI module - command-line argument parsing and handlers
//
// Without a subcommand the interactive form runs. Subcommands:
// - submit: validate and submit values headlessly
// - config --show: Display effective configuration
// - config --reset: Regenerate config file with defaults
// - config --path: Show config file path

use crate::config::{Config, VERSION};
use crate::form::{Field, FormState, SubmitOutcome};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::process::ExitCode;

/// Contact form - fill in, validate and submit contact details
#[derive(Parser)]
#[command(name = "contact-form")]
#[command(version = VERSION)]
#[command(about = "Contact form with live validation", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit the form without the terminal UI
    Submit(SubmitArgs),

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct SubmitArgs {
    /// First name (required, at least 5 characters)
    #[arg(long)]
    pub first_name: Option<String>,

    /// Last name (required)
    #[arg(long)]
    pub last_name: Option<String>,

    /// Email address (required)
    #[arg(long)]
    pub email: Option<String>,

    /// Optional message
    #[arg(long)]
    pub message: Option<String>,

    /// Print the confirmation as JSON
    #[arg(long)]
    pub json: bool,
}

impl SubmitArgs {
    /// Values given on the command line, in field order
    fn provided(&self) -> impl Iterator<Item = (Field, &str)> {
        [
            (Field::FirstName, &self.first_name),
            (Field::LastName, &self.last_name),
            (Field::Email, &self.email),
            (Field::Message, &self.message),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
    }
}

/// Result of a headless submission, before anything is printed
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitReport {
    /// Confirmation to print on stdout
    Accepted(String),
    /// One `Error: ...` line per finding, in field order
    Rejected(Vec<String>),
}

/// Drive a fresh form with the given values and submit it
pub fn run_submit(args: &SubmitArgs) -> Result<SubmitReport> {
    let mut form = FormState::new();
    for (field, value) in args.provided() {
        form.on_field_change(field, value);
    }
    tracing::debug!(values = ?form.values(), "Submitting without the terminal UI");

    match form.on_submit() {
        SubmitOutcome::Accepted => {
            let display = form
                .display()
                .context("Accepted submission has no confirmation")?;
            let rendered = if args.json {
                serde_json::to_string_pretty(display)
                    .context("Failed to serialize confirmation")?
            } else {
                format!("You Submitted:\n{}", display.to_text())
            };
            Ok(SubmitReport::Accepted(rendered))
        }
        SubmitOutcome::Rejected { .. } => Ok(SubmitReport::Rejected(
            form.errors().values().map(|e| e.to_string()).collect(),
        )),
    }
}

/// Handle `submit`: print the outcome and map it to an exit code
pub fn handle_submit(args: &SubmitArgs) -> Result<ExitCode> {
    match run_submit(args)? {
        SubmitReport::Accepted(rendered) => {
            println!("{}", rendered);
            Ok(ExitCode::SUCCESS)
        }
        SubmitReport::Rejected(lines) => {
            for line in lines {
                eprintln!("{}", line);
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Handle `config`
pub fn handle_config(show: bool, reset: bool, path: bool) -> Result<()> {
    if path {
        handle_config_path()
    } else if show {
        handle_config_show();
        Ok(())
    } else if reset {
        handle_config_reset()
    } else {
        // No flag provided, show help
        println!("Usage: contact-form config [--show|--reset|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --reset   Reset config file to defaults");
        println!("  --path    Show config file path");
        Ok(())
    }
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush().context("Failed to flush prompt")?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(first: &str, last: &str, email: &str, message: Option<&str>) -> SubmitArgs {
        SubmitArgs {
            first_name: Some(first.into()),
            last_name: Some(last.into()),
            email: Some(email.into()),
            message: message.map(Into::into),
            json: false,
        }
    }

    #[test]
    fn parses_submit_flags() {
        let cli = Cli::try_parse_from([
            "contact-form",
            "submit",
            "--first-name",
            "Johnathan",
            "--email",
            "test@test.com",
            "--json",
        ])
        .unwrap();
        let Some(Commands::Submit(args)) = cli.command else {
            panic!("expected submit");
        };
        assert_eq!(args.first_name.as_deref(), Some("Johnathan"));
        assert_eq!(args.last_name, None);
        assert!(args.json);
    }

    #[test]
    fn no_subcommand_runs_the_form() {
        let cli = Cli::try_parse_from(["contact-form"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn nothing_given_reports_three_required_fields() {
        let report = run_submit(&SubmitArgs::default()).unwrap();
        assert_eq!(
            report,
            SubmitReport::Rejected(vec![
                "Error: firstName is a required field.".into(),
                "Error: lastName is a required field.".into(),
                "Error: email is a required field.".into(),
            ])
        );
    }

    #[test]
    fn short_first_name_and_bad_email_are_reported() {
        let report = run_submit(&args("John", "Figueroa", "test@", None)).unwrap();
        assert_eq!(
            report,
            SubmitReport::Rejected(vec![
                "Error: firstName must have at least 5 characters.".into(),
                "Error: email must be a valid email address.".into(),
            ])
        );
    }

    #[test]
    fn accepted_text_omits_empty_message() {
        let report = run_submit(&args("Johnathan", "Figueroa", "test@test.com", Some(""))).unwrap();
        assert_eq!(
            report,
            SubmitReport::Accepted(
                "You Submitted:\nFirst Name: Johnathan\nLast Name: Figueroa\nEmail: test@test.com"
                    .into()
            )
        );
    }

    #[test]
    fn accepted_json_carries_message() {
        let mut submit = args("Johnathan", "Figueroa", "test@test.com", Some("A little message."));
        submit.json = true;
        let SubmitReport::Accepted(rendered) = run_submit(&submit).unwrap() else {
            panic!("expected acceptance");
        };
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(json["firstName"], "Johnathan");
        assert_eq!(json["message"], "A little message.");
        assert!(json["submittedAt"].is_string());
    }
}
