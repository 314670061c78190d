//! # Style Resolution
//!
//! The single place where a block's optional style bag is merged with the
//! theme and the hard-coded fallbacks. Preview and export both render from
//! these declarations, so they cannot drift apart.

use newsletter_model::*;
use serde::{Deserialize, Serialize};

/// Ordered CSS declarations; setting a property twice replaces it in place
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Styles(Vec<(String, String)>);

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, property: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.0.iter_mut().find(|(p, _)| p == property) {
            Some(entry) => entry.1 = value,
            None => self.0.push((property.to_string(), value)),
        }
        self
    }

    /// Set only when a value is present
    pub fn set_opt(self, property: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.set(property, value),
            None => self,
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `prop: value; prop: value`
    pub fn to_css(&self) -> String {
        self.0
            .iter()
            .map(|(p, v)| format!("{}: {}", p, v))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Resolves declarations for each block part against a theme
#[derive(Debug, Clone, Copy)]
pub struct StyleResolver<'a> {
    pub theme: &'a Theme,
}

impl<'a> StyleResolver<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn element_padding(&self) -> Styles {
        Styles::new().set("padding", self.theme.spacing.element.as_str())
    }

    pub fn text(&self, style: Option<&TextStyle>) -> Styles {
        let style = style.cloned().unwrap_or_default();
        self.element_padding()
            .set_opt("font-size", style.font_size.as_deref())
            .set_opt("font-family", style.font_family.as_deref())
            .set_opt("color", style.color.as_deref())
            .set_opt("line-height", style.line_height.as_deref())
            .set_opt("text-align", style.text_align.map(|a| a.as_css()))
    }

    pub fn heading(&self, style: Option<&HeadingStyle>) -> Styles {
        let style = style.cloned().unwrap_or_default();
        self.element_padding()
            .set("margin", "0")
            .set(
                "font-family",
                style
                    .font_family
                    .unwrap_or_else(|| self.theme.fonts.heading.clone()),
            )
            .set(
                "text-align",
                style.text_align.unwrap_or(Alignment::Left).as_css(),
            )
            .set(
                "color",
                style.color.unwrap_or_else(|| self.theme.colors.text.clone()),
            )
            .set_opt("font-size", style.font_size.as_deref())
    }

    pub fn image_wrapper(&self, style: Option<&ImageStyle>) -> Styles {
        let alignment = style
            .and_then(|s| s.alignment)
            .unwrap_or(Alignment::Center);
        self.element_padding().set("text-align", alignment.as_css())
    }

    pub fn image(&self, style: Option<&ImageStyle>) -> Styles {
        let style = style.cloned().unwrap_or_default();
        Styles::new()
            .set_opt("width", style.width.as_deref())
            .set(
                "max-width",
                style.max_width.unwrap_or_else(|| "100%".to_string()),
            )
            .set("height", "auto")
            .set_opt("border-radius", style.border_radius.as_deref())
            .set_opt("padding", style.padding.as_deref())
            .set("display", "inline-block")
    }

    pub fn button_wrapper(&self, style: Option<&ButtonStyle>) -> Styles {
        let alignment = style
            .and_then(|s| s.alignment)
            .unwrap_or(Alignment::Center);
        Styles::new()
            .set("text-align", alignment.as_css())
            .set("padding", self.theme.spacing.element.as_str())
    }

    pub fn button(&self, style: Option<&ButtonStyle>) -> Styles {
        let style = style.cloned().unwrap_or_default();
        let display = match style.width {
            Some(ButtonWidth::Full) => "block",
            _ => "inline-block",
        };
        Styles::new()
            .set(
                "background-color",
                style
                    .background_color
                    .unwrap_or_else(|| self.theme.colors.primary.clone()),
            )
            .set("color", style.text_color.unwrap_or_else(|| "#ffffff".to_string()))
            .set("padding", style.padding.unwrap_or_else(|| "12px 24px".to_string()))
            .set(
                "border-radius",
                style.border_radius.unwrap_or_else(|| "24px".to_string()),
            )
            .set("font-size", style.font_size.unwrap_or_else(|| "16px".to_string()))
            .set(
                "font-weight",
                style.font_weight.unwrap_or_else(|| "normal".to_string()),
            )
            .set("text-decoration", "none")
            .set("display", display)
            .set("text-align", "center")
    }

    pub fn divider_wrapper(&self, style: Option<&DividerStyle>) -> Styles {
        let margin = style
            .and_then(|s| s.margin.clone())
            .unwrap_or_else(|| self.theme.spacing.section.clone());
        Styles::new().set("margin", margin)
    }

    pub fn divider(&self, style: Option<&DividerStyle>) -> Styles {
        let style = style.cloned().unwrap_or_default();
        Styles::new()
            .set("border", "none")
            .set(
                "border-bottom",
                format!(
                    "{} {} {}",
                    style.border_width.as_deref().unwrap_or("1px"),
                    style.border_style.unwrap_or(BorderStyle::Solid).as_css(),
                    style.border_color.as_deref().unwrap_or("#e5e5e5"),
                ),
            )
            .set("margin", "0")
    }

    pub fn spacer(&self, block: &SpacerBlock) -> Styles {
        Styles::new()
            .set("height", block.height.as_str())
            .set("line-height", block.height.as_str())
            .set("font-size", "1px")
    }

    pub fn columns(&self, style: Option<&ColumnsStyle>) -> Styles {
        let gap = style
            .and_then(|s| s.gap.clone())
            .unwrap_or_else(|| "24px".to_string());
        Styles::new().set("display", "flex").set("gap", gap)
    }

    /// Each column takes its declared width, or an equal share of the row
    pub fn column(&self, column: &Column, count: usize) -> Styles {
        let width = column
            .width
            .clone()
            .unwrap_or_else(|| format!("{}%", equal_share(count)));
        Styles::new().set("flex", format!("0 1 {}", width)).set("min-width", "0")
    }

    pub fn product(&self, style: Option<&ProductStyle>) -> Styles {
        let style = style.cloned().unwrap_or_default();
        let horizontal = style.layout == Some(ProductLayout::Horizontal);
        let mut styles = Styles::new()
            .set(
                "padding",
                style
                    .padding
                    .unwrap_or_else(|| self.theme.spacing.element.clone()),
            )
            .set(
                "background-color",
                style
                    .background_color
                    .unwrap_or_else(|| "#f9f9f9".to_string()),
            )
            .set(
                "border-radius",
                style.border_radius.unwrap_or_else(|| "8px".to_string()),
            )
            .set("margin", self.theme.spacing.element.as_str());
        if horizontal {
            let direction = match style.image_position {
                Some(ImagePosition::Right) => "row-reverse",
                _ => "row",
            };
            styles = styles
                .set("display", "flex")
                .set("flex-direction", direction)
                .set("gap", "16px");
        }
        styles
    }

    pub fn product_image(&self) -> Styles {
        Styles::new()
            .set("width", "100%")
            .set("border-radius", "8px")
            .set("display", "block")
    }

    pub fn product_name(&self) -> Styles {
        Styles::new()
            .set("margin", "0 0 8px 0")
            .set("font-family", self.theme.fonts.heading.as_str())
    }

    pub fn product_description(&self) -> Styles {
        Styles::new()
            .set("color", self.theme.colors.secondary.as_str())
            .set("margin", "0 0 8px 0")
    }

    pub fn product_price(&self) -> Styles {
        Styles::new()
            .set("font-size", "20px")
            .set("font-weight", "bold")
            .set("margin", "0 0 12px 0")
    }

    pub fn product_link(&self) -> Styles {
        Styles::new()
            .set("display", "inline-block")
            .set("background-color", self.theme.colors.primary.as_str())
            .set("color", "#ffffff")
            .set("padding", "8px 16px")
            .set("border-radius", "4px")
            .set("text-decoration", "none")
    }

    pub fn social(&self, style: Option<&SocialStyle>) -> Styles {
        let alignment = style
            .and_then(|s| s.alignment)
            .unwrap_or(Alignment::Center);
        Styles::new()
            .set("text-align", alignment.as_css())
            .set("padding", self.theme.spacing.element.as_str())
    }

    pub fn social_icon(&self, style: Option<&SocialStyle>) -> Styles {
        let style = style.cloned().unwrap_or_default();
        let spacing = style.spacing.unwrap_or_else(|| "16px".to_string());
        Styles::new()
            .set(
                "color",
                style
                    .icon_color
                    .unwrap_or_else(|| self.theme.colors.text.clone()),
            )
            .set("font-size", style.icon_size.unwrap_or_else(|| "32px".to_string()))
            .set("text-decoration", "none")
            .set("display", "inline-block")
            .set("margin", format!("0 calc({} / 2)", spacing))
    }

    pub fn video(&self, style: Option<&VideoStyle>) -> Styles {
        let radius = style
            .and_then(|s| s.border_radius.clone())
            .unwrap_or_else(|| "8px".to_string());
        Styles::new()
            .set("padding", self.theme.spacing.element.as_str())
            .set("text-align", "center")
            .set("border-radius", radius)
            .set("overflow", "hidden")
    }

    pub fn video_thumbnail(&self) -> Styles {
        Styles::new().set("width", "100%").set("display", "block")
    }

    pub fn video_play(&self) -> Styles {
        Styles::new()
            .set("display", "inline-block")
            .set("background-color", "#ffffff")
            .set("color", "#000000")
            .set("border-radius", "50%")
            .set("padding", "16px")
    }

    pub fn quote(&self, style: Option<&QuoteStyle>) -> Styles {
        let style = style.cloned().unwrap_or_default();
        Styles::new()
            .set(
                "border-left",
                format!(
                    "4px solid {}",
                    style
                        .border_left_color
                        .unwrap_or_else(|| self.theme.colors.primary.clone())
                ),
            )
            .set(
                "background-color",
                style
                    .background_color
                    .unwrap_or_else(|| "#f5f5f5".to_string()),
            )
            .set("padding", style.padding.unwrap_or_else(|| "24px".to_string()))
            .set("margin", self.theme.spacing.element.as_str())
            .set("font-size", style.font_size.unwrap_or_else(|| "18px".to_string()))
            .set(
                "font-style",
                style.font_style.unwrap_or_else(|| "italic".to_string()),
            )
            .set(
                "color",
                style
                    .color
                    .unwrap_or_else(|| self.theme.colors.secondary.clone()),
            )
    }

    pub fn quote_text(&self) -> Styles {
        Styles::new().set("margin", "0 0 8px 0")
    }

    pub fn quote_author(&self) -> Styles {
        Styles::new().set("font-size", "14px").set("margin-top", "16px")
    }

    pub fn html(&self) -> Styles {
        self.element_padding()
    }
}

/// Percentage each of `count` columns gets, to two decimals
fn equal_share(count: usize) -> String {
    let share = 100.0 / count.max(1) as f64;
    let rounded = (share * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as u32)
    } else {
        format!("{}", rounded)
    }
}
