//! # Layout Presets
//!
//! A preset is the only knob the converter has: spacing rhythm, the style
//! bags stamped onto generated blocks, and how products are arranged.

use newsletter_model::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConvertError;

/// How product blocks are laid out after the products heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductArrangement {
    /// One two-column row per pair of products
    Grid,
    /// One product block per product
    Stacked,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutName {
    #[default]
    Standard,
    Brand,
    Stacked,
}

impl LayoutName {
    pub const ALL: [LayoutName; 3] = [LayoutName::Standard, LayoutName::Brand, LayoutName::Stacked];

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutName::Standard => "standard",
            LayoutName::Brand => "brand",
            LayoutName::Stacked => "stacked",
        }
    }
}

impl fmt::Display for LayoutName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutName {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LayoutName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConvertError::UnknownLayout(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPreset {
    pub name: LayoutName,
    pub products: ProductArrangement,
    pub products_heading: String,
    pub hero_spacer: String,
    pub section_spacer: String,
    pub hero_style: ImageStyle,
    pub heading_style: HeadingStyle,
    pub products_heading_style: HeadingStyle,
    pub text_style: TextStyle,
    pub button_style: ButtonStyle,
    pub divider_style: DividerStyle,
    pub product_style: ProductStyle,
    pub columns_style: ColumnsStyle,
}

fn s(value: &str) -> Option<String> {
    Some(value.to_string())
}

impl LayoutPreset {
    pub fn named(name: LayoutName) -> Self {
        match name {
            LayoutName::Standard => Self::standard(),
            LayoutName::Brand => Self::brand(),
            LayoutName::Stacked => Self {
                name: LayoutName::Stacked,
                products: ProductArrangement::Stacked,
                ..Self::standard()
            },
        }
    }

    /// Generic styling with a two-up product grid
    pub fn standard() -> Self {
        Self {
            name: LayoutName::Standard,
            products: ProductArrangement::Grid,
            products_heading: "Featured Products".to_string(),
            hero_spacer: "32px".to_string(),
            section_spacer: "48px".to_string(),
            hero_style: ImageStyle {
                max_width: s("100%"),
                alignment: Some(Alignment::Center),
                ..Default::default()
            },
            heading_style: HeadingStyle {
                font_size: s("28px"),
                text_align: Some(Alignment::Left),
                ..Default::default()
            },
            products_heading_style: HeadingStyle {
                font_size: s("28px"),
                text_align: Some(Alignment::Center),
                ..Default::default()
            },
            text_style: TextStyle {
                font_size: s("16px"),
                color: s("#666666"),
                ..Default::default()
            },
            button_style: ButtonStyle {
                background_color: s("#000000"),
                text_color: s("#ffffff"),
                border_radius: s("24px"),
                font_size: s("16px"),
                padding: s("12px 24px"),
                alignment: Some(Alignment::Left),
                ..Default::default()
            },
            divider_style: DividerStyle {
                border_color: s("#e5e5e5"),
                border_width: s("1px"),
                border_style: Some(BorderStyle::Solid),
                margin: s("48px 0"),
            },
            product_style: ProductStyle {
                layout: Some(ProductLayout::Vertical),
                background_color: s("#f9f9f9"),
                border_radius: s("8px"),
                padding: s("16px"),
                ..Default::default()
            },
            columns_style: ColumnsStyle {
                gap: s("24px"),
                stack_on_mobile: Some(true),
            },
        }
    }

    /// Fixed brand look: full-bleed hero, centered type, black pill buttons
    pub fn brand() -> Self {
        let standard = Self::standard();
        Self {
            name: LayoutName::Brand,
            hero_spacer: "24px".to_string(),
            section_spacer: "32px".to_string(),
            hero_style: ImageStyle {
                width: s("100%"),
                max_width: s("100%"),
                alignment: Some(Alignment::Center),
                padding: s("0"),
                ..Default::default()
            },
            heading_style: HeadingStyle {
                font_size: s("32px"),
                color: s("#000000"),
                text_align: Some(Alignment::Center),
                ..Default::default()
            },
            products_heading_style: HeadingStyle {
                font_size: s("24px"),
                color: s("#000000"),
                text_align: Some(Alignment::Center),
                ..Default::default()
            },
            text_style: TextStyle {
                font_size: s("16px"),
                color: s("#333333"),
                line_height: s("1.5"),
                text_align: Some(Alignment::Center),
                ..Default::default()
            },
            button_style: ButtonStyle {
                alignment: Some(Alignment::Center),
                font_weight: s("bold"),
                ..standard.button_style.clone()
            },
            divider_style: DividerStyle {
                border_color: s("#000000"),
                margin: s("32px 0"),
                ..standard.divider_style.clone()
            },
            product_style: ProductStyle {
                background_color: s("#ffffff"),
                border_radius: s("0"),
                ..standard.product_style.clone()
            },
            columns_style: ColumnsStyle {
                gap: s("16px"),
                stack_on_mobile: Some(true),
            },
            ..standard
        }
    }
}

impl Default for LayoutPreset {
    fn default() -> Self {
        Self::standard()
    }
}

impl From<LayoutName> for LayoutPreset {
    fn from(name: LayoutName) -> Self {
        Self::named(name)
    }
}
