use crate::commands::open_document;
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::{Args, ValueEnum};
use colored::Colorize;
use newsletter_linter::{lint_blocks, Diagnostic, DiagnosticLevel, LintOptions};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LintFormat {
    Text,
    Json,
}

#[derive(Args, Debug)]
pub struct LintArgs {
    /// Newsletter JSON (overrides config)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Lint a saved remix instead of the converted newsletter
    #[arg(long)]
    pub remix: Option<PathBuf>,

    /// Show all diagnostics including info level
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: LintFormat,
}

pub fn lint(args: LintArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let document = open_document(args.remix.as_deref(), args.input.as_deref(), &config, cwd)?;
    let diagnostics = lint_blocks(document.blocks(), LintOptions::default());

    let errors = count(&diagnostics, DiagnosticLevel::Error);
    let warnings = count(&diagnostics, DiagnosticLevel::Warning);

    match args.format {
        LintFormat::Json => println!("{}", serde_json::to_string_pretty(&diagnostics)?),
        LintFormat::Text => print_text(&diagnostics, args.verbose, errors, warnings),
    }

    if errors > 0 {
        return Err(anyhow!("{} lint error(s)", errors));
    }
    Ok(())
}

fn count(diagnostics: &[Diagnostic], level: DiagnosticLevel) -> usize {
    diagnostics.iter().filter(|d| d.level == level).count()
}

fn print_text(diagnostics: &[Diagnostic], verbose: bool, errors: usize, warnings: usize) {
    println!("🔍 {} Newsletter Linter", "Starting".green().bold());
    println!();

    for diagnostic in diagnostics {
        if !verbose && diagnostic.level == DiagnosticLevel::Info {
            continue;
        }

        let level_str = match diagnostic.level {
            DiagnosticLevel::Error => "error".red().bold(),
            DiagnosticLevel::Warning => "warning".yellow().bold(),
            DiagnosticLevel::Info => "info".blue().bold(),
        };
        println!(
            "  {} [{}] {} {}",
            level_str,
            diagnostic.rule,
            diagnostic.block_id.dimmed(),
            diagnostic.message
        );
        if let Some(suggestion) = &diagnostic.suggestion {
            println!("    {} {}", "💡".dimmed(), suggestion.dimmed());
        }
    }

    println!();
    println!(
        "✨ {} Linting complete!",
        if errors > 0 {
            "Done".red().bold()
        } else {
            "Done".green().bold()
        }
    );
    println!("   Total diagnostics: {}", diagnostics.len());
    if errors > 0 {
        println!("   {} {}", "Errors:".red(), errors);
    }
    if warnings > 0 {
        println!("   {} {}", "Warnings:".yellow(), warnings);
    }
    if errors == 0 && warnings == 0 {
        println!("   {} No issues found!", "✓".green());
    }
}
