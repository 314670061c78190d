use crate::commands::{emit, input_path, load_newsletter, parse_layout};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use newsletter_converter::{convert as convert_blocks, LayoutPreset};
use newsletter_editor::unix_millis;
use newsletter_model::IDGenerator;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Layout preset: standard, brand or stacked (overrides config)
    #[arg(short, long)]
    pub layout: Option<String>,

    /// Newsletter JSON (overrides config)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}

pub fn convert(args: ConvertArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let layout = parse_layout(args.layout.as_deref(), &config)?;
    let newsletter = load_newsletter(&input_path(args.input.as_deref(), &config, cwd))?;

    let mut ids = IDGenerator::new();
    let blocks = convert_blocks(&newsletter, &LayoutPreset::named(layout), &mut ids);
    let json = serde_json::to_string_pretty(&blocks)?;

    if !args.stdout {
        println!(
            "{} {} blocks with the {} layout",
            "🔨 Converted".bright_blue().bold(),
            blocks.len(),
            layout
        );
    }
    emit(
        json.as_bytes(),
        &config.out_dir(cwd),
        &format!("newsletter-blocks-{}.json", unix_millis()),
        args.stdout,
    )?;
    Ok(())
}
