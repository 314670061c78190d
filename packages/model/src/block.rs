//! # Content Blocks
//!
//! The editor's document model: an ordered list of [`ContentBlock`]s, each a
//! tagged variant with its own payload record. `columns` is the only
//! recursive variant, so a block list is a tree.
//!
//! ## JSON shape
//!
//! ```json
//! { "id": "a1-3", "order": 2, "type": "button",
//!   "text": "Shop now", "url": "https://…",
//!   "style": { "backgroundColor": "#000000" } }
//! ```
//!
//! Missing payload fields fall back to empty defaults. A block with an
//! unrecognised `type` tag loads as [`BlockKind::Unknown`] holding its raw
//! JSON, so it saves back unchanged instead of failing the whole document.

use serde::de::{DeserializeOwned, Error as _};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::style::*;

/// Opaque block identifier, unique within a block tree
pub type BlockId = String;

/// One renderable unit of newsletter content
#[derive(Debug, Clone, PartialEq)]
pub struct ContentBlock {
    pub id: BlockId,

    /// Position in the containing list; always equal to the array index
    pub order: usize,

    pub kind: BlockKind,
}

/// Variant payloads, tagged by `"type"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BlockKind {
    Text(TextBlock),
    Heading(HeadingBlock),
    Image(ImageBlock),
    Button(ButtonBlock),
    Divider(DividerBlock),
    Spacer(SpacerBlock),
    Columns(ColumnsBlock),
    Product(ProductBlock),
    Social(SocialBlock),
    Video(VideoBlock),
    Quote(QuoteBlock),
    Html(HtmlBlock),

    /// A block whose type tag this build does not know
    #[serde(skip)]
    Unknown(UnknownBlock),
}

/// Payload of an unrecognised block, `type` tag included, minus `id` and
/// `order`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnknownBlock {
    pub fields: Map<String, Value>,
}

impl UnknownBlock {
    pub fn type_tag(&self) -> &str {
        self.fields
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
    }
}

#[derive(Serialize)]
struct KnownBlock<'a> {
    id: &'a BlockId,
    order: usize,
    #[serde(flatten)]
    kind: &'a BlockKind,
}

impl Serialize for ContentBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.kind {
            BlockKind::Unknown(raw) => {
                let mut map = serializer.serialize_map(None)?;
                map.serialize_entry("id", &self.id)?;
                map.serialize_entry("order", &self.order)?;
                for (key, value) in &raw.fields {
                    if key != "id" && key != "order" {
                        map.serialize_entry(key, value)?;
                    }
                }
                map.end()
            }
            kind => KnownBlock {
                id: &self.id,
                order: self.order,
                kind,
            }
            .serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ContentBlock {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut fields = Map::<String, Value>::deserialize(deserializer)?;
        let id: BlockId = take_field(&mut fields, "id")?;
        let order: usize = take_field(&mut fields, "order")?;

        let known = fields
            .get("type")
            .and_then(Value::as_str)
            .map_or(true, |tag| BlockType::ALL.iter().any(|t| t.as_str() == tag));

        let kind = if known {
            BlockKind::deserialize(Value::Object(fields)).map_err(D::Error::custom)?
        } else {
            tracing::debug!(%id, "keeping block of unknown type as raw JSON");
            BlockKind::Unknown(UnknownBlock { fields })
        };
        Ok(Self { id, order, kind })
    }
}

/// Remove and parse `key`, defaulting when it is absent
fn take_field<T, E>(fields: &mut Map<String, Value>, key: &str) -> Result<T, E>
where
    T: DeserializeOwned + Default,
    E: serde::de::Error,
{
    match fields.remove(key) {
        Some(value) => serde_json::from_value(value).map_err(E::custom),
        None => Ok(T::default()),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextBlock {
    /// Rich text markup
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadingBlock {
    pub content: String,
    /// 1..=6; out-of-range values are clamped when rendered
    pub level: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<HeadingStyle>,
}

impl Default for HeadingBlock {
    fn default() -> Self {
        Self {
            content: String::new(),
            level: 2,
            style: None,
        }
    }
}

impl HeadingBlock {
    pub fn clamped_level(&self) -> u8 {
        self.level.clamp(1, 6)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageBlock {
    pub src: String,
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ImageStyle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonBlock {
    pub text: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ButtonStyle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DividerBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<DividerStyle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacerBlock {
    /// CSS length, e.g. `32px`
    pub height: String,
}

/// One column of a columns block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Column {
    pub blocks: Vec<ContentBlock>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnsBlock {
    pub columns: Vec<Column>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ColumnsStyle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductBlock {
    pub name: String,
    pub image: String,
    pub link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ProductStyle>,
}

/// Network of a social link. Names outside the known set are kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SocialPlatform {
    Facebook,
    Twitter,
    Instagram,
    Linkedin,
    Youtube,
    Tiktok,
    Other(String),
}

impl SocialPlatform {
    pub fn as_str(&self) -> &str {
        match self {
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::Linkedin => "linkedin",
            SocialPlatform::Youtube => "youtube",
            SocialPlatform::Tiktok => "tiktok",
            SocialPlatform::Other(name) => name,
        }
    }

    /// Single-letter badge used in place of an icon font
    pub fn initial(&self) -> String {
        self.as_str()
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    }
}

impl Default for SocialPlatform {
    fn default() -> Self {
        SocialPlatform::Other(String::new())
    }
}

impl From<String> for SocialPlatform {
    fn from(name: String) -> Self {
        match name.as_str() {
            "facebook" => SocialPlatform::Facebook,
            "twitter" => SocialPlatform::Twitter,
            "instagram" => SocialPlatform::Instagram,
            "linkedin" => SocialPlatform::Linkedin,
            "youtube" => SocialPlatform::Youtube,
            "tiktok" => SocialPlatform::Tiktok,
            _ => SocialPlatform::Other(name),
        }
    }
}

impl From<SocialPlatform> for String {
    fn from(platform: SocialPlatform) -> Self {
        match platform {
            SocialPlatform::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialNetwork {
    #[serde(default)]
    pub platform: SocialPlatform,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialBlock {
    pub networks: Vec<SocialNetwork>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<SocialStyle>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoPlatform {
    Youtube,
    Vimeo,
    Custom,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoBlock {
    pub url: String,
    pub thumbnail: String,
    #[serde(default, deserialize_with = "crate::lenient::option", skip_serializing_if = "Option::is_none")]
    pub platform: Option<VideoPlatform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<VideoStyle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteBlock {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<QuoteStyle>,
}

/// Raw markup injected verbatim by both renderers. Never sanitized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlBlock {
    pub content: String,
}

/// The tag of a block variant, used to request new blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    Text,
    Heading,
    Image,
    Button,
    Divider,
    Spacer,
    Columns,
    Product,
    Social,
    Video,
    Quote,
    Html,
}

impl BlockType {
    pub const ALL: [BlockType; 12] = [
        BlockType::Text,
        BlockType::Heading,
        BlockType::Image,
        BlockType::Button,
        BlockType::Divider,
        BlockType::Spacer,
        BlockType::Columns,
        BlockType::Product,
        BlockType::Social,
        BlockType::Video,
        BlockType::Quote,
        BlockType::Html,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Text => "text",
            BlockType::Heading => "heading",
            BlockType::Image => "image",
            BlockType::Button => "button",
            BlockType::Divider => "divider",
            BlockType::Spacer => "spacer",
            BlockType::Columns => "columns",
            BlockType::Product => "product",
            BlockType::Social => "social",
            BlockType::Video => "video",
            BlockType::Quote => "quote",
            BlockType::Html => "html",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown block type: {}", s))
    }
}

impl BlockKind {
    /// `None` for [`BlockKind::Unknown`]
    pub fn block_type(&self) -> Option<BlockType> {
        Some(match self {
            BlockKind::Text(_) => BlockType::Text,
            BlockKind::Heading(_) => BlockType::Heading,
            BlockKind::Image(_) => BlockType::Image,
            BlockKind::Button(_) => BlockType::Button,
            BlockKind::Divider(_) => BlockType::Divider,
            BlockKind::Spacer(_) => BlockType::Spacer,
            BlockKind::Columns(_) => BlockType::Columns,
            BlockKind::Product(_) => BlockType::Product,
            BlockKind::Social(_) => BlockType::Social,
            BlockKind::Video(_) => BlockType::Video,
            BlockKind::Quote(_) => BlockType::Quote,
            BlockKind::Html(_) => BlockType::Html,
            BlockKind::Unknown(_) => return None,
        })
    }

    pub fn type_name(&self) -> &'static str {
        self.block_type().map(|t| t.as_str()).unwrap_or("unknown")
    }
}

impl ContentBlock {
    pub fn new(id: impl Into<BlockId>, kind: BlockKind) -> Self {
        Self {
            id: id.into(),
            order: 0,
            kind,
        }
    }

    pub fn with_order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    pub fn block_type(&self) -> Option<BlockType> {
        self.kind.block_type()
    }

    /// Nested columns, if this is a columns block
    pub fn columns(&self) -> Option<&[Column]> {
        match &self.kind {
            BlockKind::Columns(columns) => Some(&columns.columns),
            _ => None,
        }
    }

    pub fn columns_mut(&mut self) -> Option<&mut Vec<Column>> {
        match &mut self.kind {
            BlockKind::Columns(columns) => Some(&mut columns.columns),
            _ => None,
        }
    }
}

/// Rewrite `order` so it matches each block's index, recursing into columns
pub fn renumber(blocks: &mut [ContentBlock]) {
    for (index, block) in blocks.iter_mut().enumerate() {
        block.order = index;
        if let Some(columns) = block.columns_mut() {
            for column in columns {
                renumber(&mut column.blocks);
            }
        }
    }
}

/// Whether `order` equals the array index for every block in the tree
pub fn is_contiguous(blocks: &[ContentBlock]) -> bool {
    blocks.iter().enumerate().all(|(index, block)| {
        block.order == index
            && block
                .columns()
                .map(|columns| columns.iter().all(|c| is_contiguous(&c.blocks)))
                .unwrap_or(true)
    })
}
