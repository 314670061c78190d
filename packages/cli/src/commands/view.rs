use crate::commands::{emit, input_path, load_newsletter};
use crate::config::Config;
use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use newsletter_compiler_html::{CompileOptions, NewsletterView, Viewport};
use newsletter_compiler_text::compile_newsletter;
use newsletter_model::Newsletter;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewMode {
    Desktop,
    Mobile,
    Text,
}

#[derive(Debug, Args)]
pub struct ViewArgs {
    /// How to render the newsletter
    #[arg(short, long, value_enum, default_value = "desktop")]
    pub mode: ViewMode,

    /// Newsletter JSON (overrides config)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Print the analytics panel
    #[arg(long)]
    pub stats: bool,
}

pub fn view(args: ViewArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let newsletter = load_newsletter(&input_path(args.input.as_deref(), &config, cwd))?;

    let rendered = render(&newsletter, args.mode)?;

    match &args.out {
        Some(out) => {
            let path = PathBuf::from(cwd).join(out);
            let dir = path.parent().map(PathBuf::from).unwrap_or_else(|| PathBuf::from(cwd));
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "newsletter.html".to_string());
            emit(rendered.as_bytes(), &dir, &name, false)?;
        }
        None => print!("{}", rendered),
    }

    if args.stats {
        print_stats(&newsletter);
    }
    Ok(())
}

fn render(newsletter: &Newsletter, mode: ViewMode) -> Result<String> {
    let viewport = match mode {
        ViewMode::Text => return Ok(compile_newsletter(newsletter)),
        ViewMode::Desktop => Viewport::Desktop,
        ViewMode::Mobile => Viewport::Mobile,
    };
    Ok(NewsletterView::new(newsletter, viewport).render(CompileOptions::default())?)
}

/// Analytics go to stderr so they never mix with rendered output
fn print_stats(newsletter: &Newsletter) {
    let stats = newsletter.analytics();
    eprintln!();
    eprintln!("{}", "Newsletter Analytics".bold());
    eprintln!("  Images:   {}", stats.images);
    eprintln!("  Links:    {}", stats.links);
    eprintln!("  Products: {}", stats.products);
    eprintln!("  CTAs:     {}", stats.ctas);
    eprintln!("  Sections: {}", stats.sections);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_mode_skips_html() {
        let mut newsletter = Newsletter::default();
        newsletter.metadata.title = "Hello".to_string();

        let text = render(&newsletter, ViewMode::Text).unwrap();
        assert_eq!(text, "Hello\n");

        let html = render(&newsletter, ViewMode::Mobile).unwrap();
        assert!(html.contains("max-width: 375px"));
    }

    #[test]
    fn test_view_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        std::fs::write(
            dir.path().join("sample-newsletter.json"),
            r#"{ "metadata": { "brand": "Acme", "title": "Hi" } }"#,
        )
        .unwrap();

        view(
            ViewArgs {
                mode: ViewMode::Desktop,
                input: None,
                out: Some(PathBuf::from("out/view.html")),
                stats: true,
            },
            &cwd,
        )
        .unwrap();

        let html = std::fs::read_to_string(dir.path().join("out/view.html")).unwrap();
        assert!(html.contains("Subject: Hi"));
    }

    #[test]
    fn test_missing_input_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = view(
            ViewArgs {
                mode: ViewMode::Text,
                input: None,
                out: None,
                stats: false,
            },
            &dir.path().display().to_string(),
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("Failed to load newsletter"));
    }
}
