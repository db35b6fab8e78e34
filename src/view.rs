//! Host-neutral view fragment: a small tree of elements with class hooks.
//!
//! The bar itself never touches a DOM; hosts either take the JSON form
//! (`serde`) or the escaped HTML from [`ViewNode::to_html`].

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ViewNode {
    Element {
        tag: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        class: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        children: Vec<ViewNode>,
    },
    Text {
        text: String,
    },
}

impl ViewNode {
    pub fn element(tag: &str, class: Option<&str>) -> Self {
        ViewNode::Element {
            tag: tag.to_string(),
            class: class.map(str::to_string),
            title: None,
            children: Vec::new(),
        }
    }

    pub fn text(t: impl Into<String>) -> Self {
        ViewNode::Text { text: t.into() }
    }

    /// Builder: set `title`. No-op on text nodes.
    pub fn with_title(mut self, t: impl Into<String>) -> Self {
        if let ViewNode::Element { title, .. } = &mut self {
            *title = Some(t.into());
        }
        self
    }

    /// Builder: append a child. No-op on text nodes.
    pub fn child(mut self, node: ViewNode) -> Self {
        if let ViewNode::Element { children, .. } = &mut self {
            children.push(node);
        }
        self
    }

    pub fn class(&self) -> Option<&str> {
        match self {
            ViewNode::Element { class, .. } => class.as_deref(),
            ViewNode::Text { .. } => None,
        }
    }

    pub fn children(&self) -> &[ViewNode] {
        match self {
            ViewNode::Element { children, .. } => children.as_slice(),
            ViewNode::Text { .. } => &[],
        }
    }

    /// Depth-first lookup of the first element carrying `class`.
    pub fn find_by_class(&self, class: &str) -> Option<&ViewNode> {
        if self.class() == Some(class) {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.find_by_class(class))
    }

    /// All text in document order, concatenated.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            ViewNode::Text { text } => out.push_str(text),
            ViewNode::Element { children, .. } => {
                for c in children {
                    c.collect_text(out);
                }
            }
        }
    }

    /// Serialize to HTML. Text and attribute values are escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            ViewNode::Text { text } => {
                html_escape::encode_text_to_string(text, out);
            }
            ViewNode::Element {
                tag,
                class,
                title,
                children,
            } => {
                out.push('<');
                out.push_str(tag);
                if let Some(c) = class {
                    out.push_str(" class=\"");
                    html_escape::encode_double_quoted_attribute_to_string(c, out);
                    out.push('"');
                }
                if let Some(t) = title {
                    out.push_str(" title=\"");
                    html_escape::encode_double_quoted_attribute_to_string(t, out);
                    out.push('"');
                }
                out.push('>');
                for c in children {
                    c.write_html(out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}
