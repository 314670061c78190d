use newsletter_model::BlockId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::styles::Styles;

/// Identifies the block field a preview node edits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditBinding {
    pub block_id: BlockId,
    /// Top-level payload key, e.g. `content`, `text`, `alt`
    pub field: String,
}

impl EditBinding {
    pub fn new(block_id: impl Into<BlockId>, field: impl Into<String>) -> Self {
        Self {
            block_id: block_id.into(),
            field: field.into(),
        }
    }

    /// The update patch an edit of this node to `value` produces
    pub fn patch(&self, value: &str) -> Map<String, Value> {
        let mut patch = Map::new();
        patch.insert(self.field.clone(), Value::String(value.to_string()));
        patch
    }
}

/// Virtual DOM node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VNode {
    /// HTML element
    Element {
        tag: String,
        attributes: Vec<(String, String)>,
        styles: Styles,
        children: Vec<VNode>,
        /// Block this element renders, set on each block's outermost node
        #[serde(skip_serializing_if = "Option::is_none")]
        block_id: Option<BlockId>,
        /// Present on editable nodes in preview mode
        #[serde(skip_serializing_if = "Option::is_none")]
        binding: Option<EditBinding>,
    },

    /// Escaped text
    Text { content: String },

    /// Markup inserted verbatim
    Raw { html: String },

    /// Stand-in for a block this build cannot render
    Placeholder { block_id: BlockId, message: String },
}

impl VNode {
    pub fn element(tag: impl Into<String>) -> Self {
        VNode::Element {
            tag: tag.into(),
            attributes: Vec::new(),
            styles: Styles::new(),
            children: Vec::new(),
            block_id: None,
            binding: None,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        VNode::Text {
            content: content.into(),
        }
    }

    pub fn raw(html: impl Into<String>) -> Self {
        VNode::Raw { html: html.into() }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element {
            ref mut attributes, ..
        } = self
        {
            attributes.push((key.into(), value.into()));
        }
        self
    }

    pub fn with_styles(mut self, new_styles: Styles) -> Self {
        if let VNode::Element { ref mut styles, .. } = self {
            *styles = new_styles;
        }
        self
    }

    pub fn with_child(mut self, child: VNode) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn with_children(mut self, new_children: Vec<VNode>) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.extend(new_children);
        }
        self
    }

    pub fn with_block_id(mut self, id: impl Into<BlockId>) -> Self {
        if let VNode::Element {
            ref mut block_id, ..
        } = self
        {
            *block_id = Some(id.into());
        }
        self
    }

    pub fn with_binding(mut self, new_binding: Option<EditBinding>) -> Self {
        if let VNode::Element {
            ref mut binding, ..
        } = self
        {
            *binding = new_binding;
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            VNode::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    pub fn styles(&self) -> Option<&Styles> {
        match self {
            VNode::Element { styles, .. } => Some(styles),
            _ => None,
        }
    }

    pub fn children(&self) -> &[VNode] {
        match self {
            VNode::Element { children, .. } => children,
            _ => &[],
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        match self {
            VNode::Element { attributes, .. } => attributes
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    /// Every binding in this subtree, depth first
    pub fn bindings(&self) -> Vec<&EditBinding> {
        let mut found = Vec::new();
        self.collect_bindings(&mut found);
        found
    }

    fn collect_bindings<'a>(&'a self, found: &mut Vec<&'a EditBinding>) {
        if let VNode::Element {
            binding, children, ..
        } = self
        {
            if let Some(binding) = binding {
                found.push(binding);
            }
            for child in children {
                child.collect_bindings(found);
            }
        }
    }

    /// Compact HTML for this subtree. Bindings render as `data-edit`
    /// attributes so a host page can wire them up.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            VNode::Element {
                tag,
                attributes,
                styles,
                children,
                block_id,
                binding,
            } => {
                out.push('<');
                out.push_str(tag);
                out.push_str(&open_tag_attributes(attributes, styles));
                if let Some(id) = block_id {
                    out.push_str(&format!(" data-block-id=\"{}\"", escape_html(id)));
                }
                if let Some(binding) = binding {
                    out.push_str(&format!(" data-edit=\"{}\"", escape_html(&binding.field)));
                }
                if is_void(tag) {
                    out.push('>');
                    return;
                }
                out.push('>');
                for child in children {
                    child.write_html(out);
                }
                out.push_str(&format!("</{}>", tag));
            }
            VNode::Text { content } => out.push_str(&escape_html(content)),
            VNode::Raw { html } => out.push_str(html),
            VNode::Placeholder { block_id, message } => out.push_str(&format!(
                "<div data-block-id=\"{}\" data-placeholder=\"true\">{}</div>",
                escape_html(block_id),
                escape_html(message)
            )),
        }
    }
}

/// ` key="value" style="..."`, escaped, in declaration order
pub fn open_tag_attributes(attributes: &[(String, String)], styles: &Styles) -> String {
    let mut out = String::new();
    for (key, value) in attributes {
        out.push_str(&format!(" {}=\"{}\"", key, escape_html(value)));
    }
    if !styles.is_empty() {
        out.push_str(&format!(" style=\"{}\"", escape_html(&styles.to_css())));
    }
    out
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub fn is_void(tag: &str) -> bool {
    matches!(
        tag,
        "area" | "base" | "br" | "col" | "embed" | "hr" | "img" | "input" | "link" | "meta"
            | "source" | "track" | "wbr"
    )
}
