//! # UQ Workflow CLI
//!
//! Headless companion to the desktop application. Works on the same
//! configuration files:
//!
//! - `uq_cli new <path>` - write a configuration with every panel cleared
//! - `uq_cli show <path>` - print every panel of a configuration
//! - `uq_cli validate <path>` - check a configuration; exit status 1 on problems

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::debug;

use uq_core::file_io::read_document_strict;
use uq_core::panels::{PanelSet, RestoreScope};
use uq_core::session::Session;

#[derive(Parser, Debug)]
#[command(name = "uq_cli", version, about = "Create, inspect and validate UQ workflow configurations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a configuration with every panel in its cleared state
    New {
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print a summary of every panel
    Show { path: PathBuf },
    /// Check a configuration for problems
    Validate { path: PathBuf },
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    debug!("{:?}", cli);

    match cli.command {
        Commands::New { path, force } => {
            create(&path, force)?;
            println!("Created {}", path.display());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Show { path } => {
            print!("{}", show(&path)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Validate { path } => {
            let problems = validate(&path)?;
            if problems.is_empty() {
                println!("{}: OK", path.display());
                Ok(ExitCode::SUCCESS)
            } else {
                for problem in &problems {
                    println!("{}", problem);
                }
                println!("{}: {} problem(s)", path.display(), problems.len());
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

fn create(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    Session::new()
        .save_file(path)
        .with_context(|| format!("writing {}", path.display()))
}

/// Load the way the desktop application does, but restore every panel
fn show(path: &Path) -> Result<String> {
    let mut session = Session::with_restore_scope(RestoreScope::All);
    let report = session
        .load_file(path)
        .with_context(|| format!("reading {}", path.display()))?;

    let mut out = String::new();
    if let Some(warning) = &report.parse_warning {
        writeln!(out, "warning: {}; showing an empty configuration", warning)?;
    }
    out.push_str(&summarize(session.panels())?);
    Ok(out)
}

/// Strict load plus every panel's validator
fn validate(path: &Path) -> Result<Vec<String>> {
    let doc = read_document_strict(path).with_context(|| format!("reading {}", path.display()))?;
    let mut panels = PanelSet::new();
    if let Err(e) = panels.restore_from(&doc, RestoreScope::All) {
        return Ok(vec![e.to_string()]);
    }
    Ok(panels
        .validate_all()
        .into_iter()
        .map(|(title, e)| format!("{}: {}", title, e))
        .collect())
}

fn summarize(panels: &PanelSet) -> Result<String> {
    let mut out = String::new();

    writeln!(out, "Random Variables ({})", panels.random_variables.len())?;
    for variable in panels.random_variables.variables() {
        let params = variable
            .distribution
            .parameters()
            .iter()
            .map(|(label, value)| format!("{} = {}", label, value))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(
            out,
            "  {:<16} {:<10} {}",
            variable.name,
            variable.distribution.kind(),
            params
        )?;
    }

    writeln!(out, "Finite Element Model")?;
    writeln!(out, "  Program:            {}", panels.fem.program)?;
    writeln!(out, "  Input File:         {}", or_none(&panels.fem.main_input))?;
    writeln!(out, "  Postprocess Script: {}", or_none(&panels.fem.postprocess_script))?;

    writeln!(out, "Engineering Demand Parameters ({})", panels.edps.len())?;
    for edp in panels.edps.entries() {
        writeln!(out, "  {}", edp.name)?;
    }

    writeln!(out, "Sampling Method")?;
    writeln!(out, "  Method:  {}", panels.sampling.method)?;
    writeln!(out, "  Samples: {}", panels.sampling.samples)?;
    writeln!(out, "  Seed:    {}", panels.sampling.seed)?;

    Ok(out)
}

fn or_none(value: &str) -> &str {
    if value.is_empty() {
        "(none)"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;
    use uq_core::panels::{Distribution, RandomVariable};

    #[test]
    fn test_new_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("w.json");
        create(&path, false).unwrap();
        assert!(create(&path, false).is_err());
        create(&path, true).unwrap();
    }

    #[test]
    fn test_fresh_file_validates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("w.json");
        create(&path, false).unwrap();
        assert!(validate(&path).unwrap().is_empty());
    }

    #[test]
    fn test_validate_reports_bad_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(
            &path,
            r#"{"randomVariables": [{"name": "x", "distribution": "Normal", "mean": 0, "stdDev": -1}],
               "samplingMethod": {"samples": 0}}"#,
        )
        .unwrap();
        let problems = validate(&path).unwrap();
        assert_eq!(problems.len(), 2);
        assert!(problems[0].starts_with("Random Variables:"));
        assert!(problems[1].starts_with("Sampling Method:"));
    }

    #[test]
    fn test_validate_rejects_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{").unwrap();
        assert!(validate(&path).is_err());
    }

    #[test]
    fn test_show_lists_every_panel() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("w.json");
        let mut session = Session::new();
        session.panels_mut().random_variables.add(RandomVariable::new(
            "fy",
            Distribution::Normal {
                mean: 60.0,
                std_dev: 6.0,
            },
        ));
        session.panels_mut().fem.set_main_input("model.tcl");
        session.save_file(&path).unwrap();

        let text = show(&path).unwrap();
        assert!(text.contains("Random Variables (1)"));
        assert!(text.contains("Mean = 60"));
        assert!(text.contains("model.tcl"));
        assert!(text.contains("Samples: 1000"));
    }
}
