mod commands;
mod config;

use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use commands::{
    convert, edit, export, init, lint, template, view, ConvertArgs, EditArgs, ExportArgs,
    InitArgs, LintArgs, TemplateCommand, ViewArgs,
};
use tracing::Level;

/// Newsletter viewer and remix editor
#[derive(Parser, Debug)]
#[command(name = "newsletter")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a newsletter.config.json with defaults
    Init(InitArgs),

    /// Render the newsletter for desktop, mobile or as text
    View(ViewArgs),

    /// Convert the newsletter into editor blocks
    Convert(ConvertArgs),

    /// Apply a script of edit operations and save the remix
    Edit(EditArgs),

    /// Export as JSON, HTML or PDF
    Export(ExportArgs),

    /// Check blocks for content and accessibility issues
    Lint(LintArgs),

    /// Manage saved templates
    Template {
        #[command(subcommand)]
        command: TemplateCommand,
    },
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Command) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?.display().to_string();

    match command {
        Command::Init(args) => init(args, &cwd),
        Command::View(args) => view(args, &cwd),
        Command::Convert(args) => convert(args, &cwd),
        Command::Edit(args) => edit(args, &cwd),
        Command::Export(args) => export(args, &cwd),
        Command::Lint(args) => lint(args, &cwd),
        Command::Template { command } => template(command, &cwd),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli.command) {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
