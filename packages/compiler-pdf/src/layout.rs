use newsletter_compiler_text::{LineKind, TextLine};

use crate::pagination::LOGICAL_WIDTH_PX;

/// Left and right margin of the text column
pub const CONTENT_PADDING_PX: f32 = 24.0;

/// Average Helvetica advance, as a share of the font size
const CHAR_WIDTH_EM: f32 = 0.5;
const LINE_HEIGHT: f32 = 1.5;
const RULE_MARGIN_PX: f32 = 16.0;

/// A line of text or a rule placed on the logical column
#[derive(Debug, Clone, PartialEq)]
pub struct Placed {
    /// Top edge, px from the top of the content
    pub top: f32,
    pub font_size: f32,
    pub bold: bool,
    /// Empty for rules
    pub text: String,
    pub rule: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    pub items: Vec<Placed>,
    /// Total content height in px
    pub height: f32,
}

fn font_for(kind: LineKind) -> (f32, bool) {
    match kind {
        LineKind::Heading(level) => {
            let size = match level {
                1 => 32.0,
                2 => 28.0,
                3 => 24.0,
                4 => 20.0,
                5 => 18.0,
                _ => 16.0,
            };
            (size, true)
        }
        LineKind::Caption => (14.0, false),
        _ => (16.0, false),
    }
}

/// Stack lines top to bottom, wrapping text to the column width
pub fn layout(lines: &[TextLine]) -> Layout {
    let mut items = Vec::new();
    let mut y = CONTENT_PADDING_PX;
    let column = LOGICAL_WIDTH_PX - 2.0 * CONTENT_PADDING_PX;

    for line in lines {
        match line.kind {
            LineKind::Space(height) => y += height,
            LineKind::Rule => {
                y += RULE_MARGIN_PX;
                items.push(Placed {
                    top: y,
                    font_size: 0.0,
                    bold: false,
                    text: String::new(),
                    rule: true,
                });
                y += 1.0 + RULE_MARGIN_PX;
            }
            kind => {
                let (font_size, bold) = font_for(kind);
                let max_chars = (column / (font_size * CHAR_WIDTH_EM)).floor().max(1.0) as usize;
                for text in wrap(&line.text, max_chars) {
                    items.push(Placed {
                        top: y,
                        font_size,
                        bold,
                        text,
                        rule: false,
                    });
                    y += font_size * LINE_HEIGHT;
                }
            }
        }
    }

    Layout {
        items,
        height: y + CONTENT_PADDING_PX,
    }
}

/// Greedy word wrap; words longer than a line are split
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > max_chars {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(max_chars);
            out.push(word.into_iter().collect());
            word = rest;
        }

        let word: String = word.into_iter().collect();
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > max_chars && !current.is_empty() {
            out.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }

    if !current.is_empty() {
        out.push(current);
    }
    out
}
