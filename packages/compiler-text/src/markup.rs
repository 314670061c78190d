use regex::Regex;
use std::sync::OnceLock;

fn breaks() -> &'static Regex {
    static BREAKS: OnceLock<Regex> = OnceLock::new();
    BREAKS.get_or_init(|| {
        Regex::new(r"(?i)<br\s*/?>|</(p|div|h[1-6]|li|tr|blockquote)>").expect("valid regex")
    })
}

fn tags() -> &'static Regex {
    static TAGS: OnceLock<Regex> = OnceLock::new();
    TAGS.get_or_init(|| Regex::new(r"(?s)<!--.*?-->|<[^>]*>").expect("valid regex"))
}

/// Markup to paragraphs of plain text. Block-level closers and `<br>` start
/// a new paragraph; other tags and comments are dropped.
pub fn strip_markup(markup: &str) -> Vec<String> {
    let with_breaks = breaks().replace_all(markup, "\n");
    let text = tags().replace_all(&with_breaks, "");

    text.lines()
        .map(|line| decode_entities(line.split_whitespace().collect::<Vec<_>>().join(" ").as_str()))
        .filter(|line| !line.is_empty())
        .collect()
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_split() {
        assert_eq!(
            strip_markup("<p>One  <b>bold</b></p><p>Two<br/>Three</p>"),
            vec!["One bold", "Two", "Three"]
        );
    }

    #[test]
    fn test_comments_and_entities() {
        assert_eq!(strip_markup("<!-- Custom HTML -->"), Vec::<String>::new());
        assert_eq!(strip_markup("Fish &amp; chips"), vec!["Fish & chips"]);
    }
}
