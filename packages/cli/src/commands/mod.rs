pub mod convert;
pub mod edit;
pub mod export;
pub mod init;
pub mod lint;
pub mod template;
pub mod view;

pub use convert::{convert, ConvertArgs};
pub use edit::{edit, EditArgs};
pub use export::{export, ExportArgs};
pub use init::{init, InitArgs};
pub use lint::{lint, LintArgs};
pub use template::{template, TemplateCommand};
pub use view::{view, ViewArgs};

use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use newsletter_converter::LayoutName;
use newsletter_editor::{Document, RemixExport};
use newsletter_model::Newsletter;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;

/// `--input` when given, otherwise the configured input
pub(crate) fn input_path(input: Option<&Path>, config: &Config, cwd: &str) -> PathBuf {
    match input {
        Some(path) => PathBuf::from(cwd).join(path),
        None => config.input_path(cwd),
    }
}

/// Read the newsletter JSON. Any failure collapses into one load error.
pub(crate) fn load_newsletter(path: &Path) -> Result<Newsletter> {
    Newsletter::load(path).map_err(|e| anyhow!("Failed to load newsletter: {}", e))
}

pub(crate) fn load_remix(path: &Path) -> Result<RemixExport> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    RemixExport::from_json(&source).with_context(|| format!("Invalid remix file {}", path.display()))
}

pub(crate) fn parse_layout(layout: Option<&str>, config: &Config) -> Result<LayoutName> {
    match layout {
        Some(name) => Ok(name.parse()?),
        None => Ok(config.layout),
    }
}

/// Editor document from a remix file, or converted from the newsletter
pub(crate) fn open_document(
    remix: Option<&Path>,
    input: Option<&Path>,
    config: &Config,
    cwd: &str,
) -> Result<Document> {
    if let Some(remix) = remix {
        let path = PathBuf::from(cwd).join(remix);
        return Ok(Document::from_remix(load_remix(&path)?));
    }

    let newsletter = load_newsletter(&input_path(input, config, cwd))?;
    let mut document = Document::from_newsletter(&newsletter, &config.layout_preset());
    document.theme = config.theme()?;
    Ok(document)
}

/// Print to stdout, or write `name` under `dir` and report the path
pub(crate) fn emit(content: &[u8], dir: &Path, name: &str, stdout: bool) -> Result<PathBuf> {
    if stdout {
        use std::io::Write;
        std::io::stdout().write_all(content)?;
        return Ok(PathBuf::from("-"));
    }

    fs::create_dir_all(dir)?;
    let path = dir.join(name);
    fs::write(&path, content)?;
    println!("  {} Wrote {}", "✓".green(), path.display());
    Ok(path)
}
