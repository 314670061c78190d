use newsletter_model::Newsletter;

/// Text view: title, subtitle, each section with its call to action, then
/// the product names
pub fn compile_newsletter(newsletter: &Newsletter) -> String {
    let mut out = Vec::new();
    let metadata = &newsletter.metadata;

    out.push(metadata.title.clone());
    if !metadata.subtitle.is_empty() {
        out.push(metadata.subtitle.clone());
    }

    for section in &newsletter.content.sections {
        out.push(String::new());
        out.push(section.title.clone());
        if let Some(description) = section.description.as_deref().filter(|d| !d.is_empty()) {
            out.push(description.to_string());
        }
        if let Some(cta) = &section.cta {
            out.push(format!("{} \u{2192} {}", cta.text, cta.url));
        }
    }

    let products = &newsletter.content.products;
    if !products.is_empty() {
        out.push(String::new());
        out.push("Products:".to_string());
        out.extend(products.iter().map(|p| format!("- {}", p.name)));
    }

    let mut text = out.join("\n");
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_view() {
        let newsletter = Newsletter::from_json(
            r#"{
                "metadata": { "title": "Spring Drop", "subtitle": "New in" },
                "content": {
                    "sections": [
                        { "title": "Fresh", "type": "headline", "description": "Picked",
                          "cta": { "text": "Shop", "url": "https://a.example" } },
                        { "title": "Bare", "type": "text" }
                    ],
                    "products": [ { "name": "Boot" }, { "name": "Hat" } ]
                }
            }"#,
        )
        .unwrap();

        assert_eq!(
            compile_newsletter(&newsletter),
            "Spring Drop\nNew in\n\nFresh\nPicked\nShop \u{2192} https://a.example\n\nBare\n\nProducts:\n- Boot\n- Hat\n"
        );
    }

    #[test]
    fn test_empty_newsletter() {
        assert_eq!(compile_newsletter(&Newsletter::default()), "\n");
    }
}
