use crate::commands::{emit, input_path, load_newsletter, open_document};
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::{Args, ValueEnum};
use colored::Colorize;
use newsletter_compiler_html::{compile_to_html, CompileOptions};
use newsletter_compiler_pdf::{compile_to_pdf, write_pdf};
use newsletter_editor::ExportKind;
use newsletter_model::Theme;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Html,
    Pdf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportSource {
    /// The newsletter JSON as loaded
    Newsletter,
    /// The editor state: email settings, blocks and theme
    Remix,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(short, long, value_enum)]
    pub format: ExportFormat,

    /// What a JSON export contains
    #[arg(short, long, value_enum, default_value = "newsletter")]
    pub source: ExportSource,

    /// Newsletter JSON (overrides config)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Start from a saved remix instead of converting the newsletter
    #[arg(long)]
    pub remix: Option<PathBuf>,

    /// Color preset to render with, e.g. "Dark Mode"
    #[arg(long)]
    pub theme: Option<String>,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Output to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}

pub fn export(args: ExportArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let out_dir = match &args.out_dir {
        Some(dir) => PathBuf::from(cwd).join(dir),
        None => config.out_dir(cwd),
    };

    if args.format == ExportFormat::Json && args.source == ExportSource::Newsletter && args.remix.is_none() {
        let newsletter = load_newsletter(&input_path(args.input.as_deref(), &config, cwd))?;
        let json = serde_json::to_string_pretty(&newsletter)?;
        emit(
            json.as_bytes(),
            &out_dir,
            &ExportKind::NewsletterJson.file_name_now(),
            args.stdout,
        )?;
        return Ok(());
    }

    let mut document = open_document(args.remix.as_deref(), args.input.as_deref(), &config, cwd)?;
    if let Some(name) = &args.theme {
        let preset = Theme::with_preset(name).ok_or_else(|| anyhow!("Unknown theme preset: {}", name))?;
        document.theme.colors = preset.colors;
    }

    if !args.stdout {
        println!(
            "{} {} blocks as {:?}",
            "📦 Exporting".bright_blue().bold(),
            document.blocks().len(),
            args.format
        );
    }

    match args.format {
        ExportFormat::Json => {
            let json = document.to_remix().to_json()?;
            emit(
                json.as_bytes(),
                &out_dir,
                &ExportKind::RemixJson.file_name_now(),
                args.stdout,
            )?;
        }
        ExportFormat::Html => {
            let html = compile_to_html(
                document.blocks(),
                &document.theme,
                &document.settings,
                CompileOptions::default(),
            )?;
            emit(
                html.as_bytes(),
                &out_dir,
                &ExportKind::Html.file_name_now(),
                args.stdout,
            )?;
        }
        ExportFormat::Pdf if args.stdout => {
            let bytes = compile_to_pdf(document.blocks(), &document.settings)?;
            emit(&bytes, &out_dir, "", true)?;
        }
        ExportFormat::Pdf => {
            std::fs::create_dir_all(&out_dir)?;
            let path = out_dir.join(ExportKind::Pdf.file_name_now());
            write_pdf(document.blocks(), &document.settings, &path)?;
            println!("  {} Wrote {}", "✓".green(), path.display());
        }
    }
    Ok(())
}
