use crate::commands::{emit, input_path, load_newsletter, parse_layout};
use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use newsletter_converter::LayoutPreset;
use newsletter_editor::{Document, EditOp, EditSession, ExportKind};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// JSON array of edit operations
    #[arg(long)]
    pub ops: PathBuf,

    /// Newsletter JSON (overrides config)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Layout preset used for the initial conversion
    #[arg(short, long)]
    pub layout: Option<String>,

    /// Output to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}

pub fn edit(args: EditArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let layout = parse_layout(args.layout.as_deref(), &config)?;
    let newsletter = load_newsletter(&input_path(args.input.as_deref(), &config, cwd))?;

    let ops_path = PathBuf::from(cwd).join(&args.ops);
    let ops_source = fs::read_to_string(&ops_path)
        .with_context(|| format!("Failed to read {}", ops_path.display()))?;
    let ops: Vec<EditOp> = serde_json::from_str(&ops_source)
        .with_context(|| format!("Invalid edit operations in {}", ops_path.display()))?;

    let mut document = Document::from_newsletter(&newsletter, &LayoutPreset::named(layout));
    document.theme = config.theme()?;
    let mut session = EditSession::with_max_levels(document, config.history_depth);
    session.run_all(&ops)?;

    let remix = session.document.to_remix();
    if !args.stdout {
        println!(
            "{} {} operations, {} blocks, version {}",
            "✏️  Applied".bright_blue().bold(),
            ops.len(),
            remix.blocks.len(),
            session.document.version
        );
    }
    emit(
        remix.to_json()?.as_bytes(),
        &config.out_dir(cwd),
        &ExportKind::RemixJson.file_name_now(),
        args.stdout,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsletter_editor::RemixExport;

    #[test]
    fn test_edit_writes_remix() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        fs::write(
            dir.path().join("sample-newsletter.json"),
            r#"{ "metadata": { "title": "Hi" },
                 "content": { "sections": [ { "title": "One", "type": "text" } ] } }"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("ops.json"),
            r#"[ { "op": "add", "type": "divider" }, { "op": "undo" }, { "op": "add", "type": "spacer" } ]"#,
        )
        .unwrap();

        edit(
            EditArgs {
                ops: PathBuf::from("ops.json"),
                input: None,
                layout: None,
                stdout: false,
            },
            &cwd,
        )
        .unwrap();

        let written: Vec<_> = fs::read_dir(dir.path().join("dist")).unwrap().collect();
        assert_eq!(written.len(), 1);
        let path = written[0].as_ref().unwrap().path();
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("newsletter-remix-"));

        let remix = RemixExport::from_json(&fs::read_to_string(path).unwrap()).unwrap();
        let types: Vec<&str> = remix.blocks.iter().map(|b| b.kind.type_name()).collect();
        assert_eq!(types, vec!["heading", "spacer"]);
        assert_eq!(remix.metadata.subject, "Hi");
    }

    #[test]
    fn test_failing_op_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        fs::write(dir.path().join("sample-newsletter.json"), "{}").unwrap();
        fs::write(
            dir.path().join("ops.json"),
            r#"[ { "op": "delete", "id": "ghost" } ]"#,
        )
        .unwrap();

        let result = edit(
            EditArgs {
                ops: PathBuf::from("ops.json"),
                input: None,
                layout: None,
                stdout: false,
            },
            &cwd,
        );
        assert!(result.is_err());
        assert!(!dir.path().join("dist").exists());
    }
}
