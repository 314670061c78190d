//! Field deserializers for optional presentation values.
//!
//! An unrecognised value such as `"textAlign": "justify"` loads as `None`
//! and the renderers fall back to their defaults, instead of the whole
//! document failing to load.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// `Some` only when the value parses as `T`
pub fn option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = match Option::<Value>::deserialize(deserializer)? {
        Some(value) => value,
        None => return Ok(None),
    };
    match T::deserialize(&value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(err) => {
            tracing::debug!(%value, %err, "ignoring unrecognised optional value");
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_unrecognised_alignment_falls_back() {
        let blocks: Vec<ContentBlock> = serde_json::from_str(
            r##"[{ "id": "t", "type": "text", "content": "<p>x</p>",
                  "style": { "textAlign": "justify", "color": "#333333" } }]"##,
        )
        .unwrap();

        match &blocks[0].kind {
            BlockKind::Text(text) => {
                let style = text.style.as_ref().unwrap();
                assert_eq!(style.text_align, None);
                assert_eq!(style.color.as_deref(), Some("#333333"));
            }
            other => panic!("Expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_every_closed_style_value_is_lenient() {
        let blocks: Vec<ContentBlock> = serde_json::from_value(serde_json::json!([
            { "id": "b", "type": "button", "style": { "alignment": 3, "width": "half" } },
            { "id": "d", "type": "divider", "style": { "borderStyle": "double" } },
            { "id": "p", "type": "product", "style": { "layout": "grid", "imagePosition": "bottom" } },
            { "id": "v", "type": "video", "platform": "twitch" },
            { "id": "i", "type": "image", "style": { "alignment": null } }
        ]))
        .unwrap();

        assert_eq!(blocks.len(), 5);
        match &blocks[0].kind {
            BlockKind::Button(button) => {
                let style = button.style.as_ref().unwrap();
                assert_eq!(style.alignment, None);
                assert_eq!(style.width, None);
            }
            other => panic!("Expected button, got {:?}", other),
        }
        match &blocks[3].kind {
            BlockKind::Video(video) => assert_eq!(video.platform, None),
            other => panic!("Expected video, got {:?}", other),
        }
    }

    #[test]
    fn test_known_values_still_parse() {
        let block: ContentBlock = serde_json::from_str(
            r#"{ "id": "h", "type": "heading", "style": { "textAlign": "center" } }"#,
        )
        .unwrap();
        match block.kind {
            BlockKind::Heading(heading) => {
                assert_eq!(heading.style.unwrap().text_align, Some(Alignment::Center))
            }
            other => panic!("Expected heading, got {:?}", other),
        }
    }
}
