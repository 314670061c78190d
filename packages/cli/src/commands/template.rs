use crate::commands::{input_path, load_newsletter};
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Subcommand;
use colored::Colorize;
use newsletter_common::FileStore;
use newsletter_model::{NewsletterTemplate, TemplateCategory};
use newsletter_templates::TemplateStore;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum TemplateCommand {
    /// Save the current newsletter as a template
    Save {
        name: String,

        #[arg(short, long, default_value = "")]
        description: String,

        /// promotional, informational, transactional or custom
        #[arg(short, long, default_value = "custom")]
        category: String,

        /// Newsletter JSON (overrides config)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// List saved templates
    List,

    /// Print one template as JSON
    Show { id: String },

    /// Write a template's newsletter to a file, or stdout
    Load {
        id: String,

        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Delete a template
    Delete { id: String },

    /// Search names and descriptions
    Search {
        #[arg(default_value = "")]
        query: String,

        /// A category, or "all"
        #[arg(short, long, default_value = "all")]
        category: String,
    },
}

pub fn template(command: TemplateCommand, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut store = TemplateStore::new(FileStore::new(config.templates_dir(cwd)));

    match command {
        TemplateCommand::Save {
            name,
            description,
            category,
            input,
        } => {
            let category = parse_category(&category)?
                .ok_or_else(|| anyhow!("A saved template needs a concrete category"))?;
            let newsletter = load_newsletter(&input_path(input.as_deref(), &config, cwd))?;
            let saved = store.save(&name, &description, category, &newsletter)?;
            println!("{} Template saved as {}", "✓".green(), saved.id.bright_white());
        }
        TemplateCommand::List => print_list(&store.list()?),
        TemplateCommand::Show { id } => {
            println!("{}", serde_json::to_string_pretty(&store.get(&id)?)?);
        }
        TemplateCommand::Load { id, out } => {
            let template = store.get(&id)?;
            let json = serde_json::to_string_pretty(&template.newsletter)?;
            match out {
                Some(out) => {
                    let path = PathBuf::from(cwd).join(out);
                    std::fs::write(&path, json)?;
                    println!("{} Loaded {} into {}", "✓".green(), template.name, path.display());
                }
                None => println!("{}", json),
            }
        }
        TemplateCommand::Delete { id } => {
            let removed = store.delete(&id)?;
            println!("{} Deleted {}", "✓".green(), removed.name);
        }
        TemplateCommand::Search { query, category } => {
            print_list(&store.search(&query, parse_category(&category)?)?)
        }
    }
    Ok(())
}

/// `all` means no filter
fn parse_category(value: &str) -> Result<Option<TemplateCategory>> {
    if value.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    value.parse().map(Some).map_err(|e: String| anyhow!(e))
}

fn print_list(templates: &[NewsletterTemplate]) {
    if templates.is_empty() {
        println!("{}", "No templates found".yellow());
        return;
    }
    for template in templates {
        println!(
            "  {}  {} [{}] {}",
            template.id.dimmed(),
            template.name.bold(),
            template.category,
            template.description
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsletter_templates::TEMPLATES_KEY;
    use std::fs;

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category("ALL").unwrap(), None);
        assert_eq!(
            parse_category("promotional").unwrap(),
            Some(TemplateCategory::Promotional)
        );
        assert!(parse_category("weekly").is_err());
    }

    #[test]
    fn test_save_load_delete() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        fs::write(
            dir.path().join("sample-newsletter.json"),
            r#"{ "metadata": { "title": "Saved issue" } }"#,
        )
        .unwrap();

        template(
            TemplateCommand::Save {
                name: "Weekly".to_string(),
                description: "Every monday".to_string(),
                category: "informational".to_string(),
                input: None,
            },
            &cwd,
        )
        .unwrap();

        let stored = dir.path().join(".newsletter").join(format!("{}.json", TEMPLATES_KEY));
        let templates: Vec<NewsletterTemplate> =
            serde_json::from_str(&fs::read_to_string(&stored).unwrap()).unwrap();
        assert_eq!(templates.len(), 1);
        let id = templates[0].id.clone();

        template(
            TemplateCommand::Load {
                id: id.clone(),
                out: Some(PathBuf::from("restored.json")),
            },
            &cwd,
        )
        .unwrap();
        let restored = fs::read_to_string(dir.path().join("restored.json")).unwrap();
        assert!(restored.contains("Saved issue"));

        template(TemplateCommand::Delete { id: id.clone() }, &cwd).unwrap();
        assert!(template(TemplateCommand::Show { id }, &cwd).is_err());
    }
}
