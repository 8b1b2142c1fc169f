use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::Style;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: String,
    pub classes: Vec<String>,

    // Content
    pub content: Content,

    // Vertical box in document coordinates, as measured by the host.
    pub offset_top: f32,
    pub height: f32,

    // Visual
    pub style: Style,

    // State
    /// Disabled controls don't receive clicks.
    pub disabled: bool,

    /// Plain attributes (`href`, `src`, `value`, `name`, ...).
    pub attrs: HashMap<String, String>,
    /// `data-*` attributes, keyed without the prefix.
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: "div".into(),
            classes: Vec::new(),
            content: Content::None,
            offset_top: 0.0,
            height: 0.0,
            style: Style::default(),
            disabled: false,
            attrs: HashMap::new(),
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            id: generate_id(&tag),
            tag,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn button() -> Self {
        Self::new("button")
    }

    pub fn section() -> Self {
        Self::new("section")
    }

    pub fn link(href: impl Into<String>) -> Self {
        Self::new("a").attr("href", href)
    }

    pub fn input(name: impl Into<String>) -> Self {
        Self::new("input").attr("name", name).attr("value", "")
    }

    pub fn text(tag: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Self::new(tag)
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    // Box
    pub fn offset_top(mut self, top: f32) -> Self {
        self.offset_top = top;
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn bottom(&self) -> f32 {
        self.offset_top + self.height
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    // State
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    // Attributes
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn get_attr(&self, key: &str) -> Option<&String> {
        self.attrs.get(key)
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Classes

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Add or remove `class` depending on `on`.
    pub fn set_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    /// Flip `class`, returning whether it is now present.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        let on = !self.has_class(class);
        self.set_class(class, on);
        on
    }

    // Text

    pub fn text_content(&self) -> String {
        match &self.content {
            Content::None => String::new(),
            Content::Text(text) => text.clone(),
            Content::Children(children) => children
                .iter()
                .map(Element::text_content)
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = Content::Text(text.into());
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        for child in new_children {
            self.push_child(child);
        }
        self
    }

    pub fn push_child(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
    }

    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn child_elements_mut(&mut self) -> &mut [Element] {
        match &mut self.content {
            Content::Children(children) => children,
            _ => &mut [],
        }
    }

    /// Replace all children.
    pub fn set_children(&mut self, children: Vec<Element>) {
        self.content = Content::Children(children);
    }

    /// Remove a direct child or descendant by ID.
    pub fn remove_descendant(&mut self, id: &str) -> Option<Element> {
        let Content::Children(children) = &mut self.content else {
            return None;
        };
        if let Some(index) = children.iter().position(|c| c.id == id) {
            return Some(children.remove(index));
        }
        children.iter_mut().find_map(|c| c.remove_descendant(id))
    }

    /// First descendant (depth-first) whose tag is one of `tags`.
    pub fn first_with_tag(&self, tags: &[&str]) -> Option<&Element> {
        for child in self.child_elements() {
            if tags.contains(&child.tag.as_str()) {
                return Some(child);
            }
            if let Some(found) = child.first_with_tag(tags) {
                return Some(found);
            }
        }
        None
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.id == id || self.child_elements().iter().any(|c| c.contains_id(id))
    }
}
