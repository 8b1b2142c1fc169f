//! Retained document tree plus the viewport it is displayed in.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::trace;

use crate::element::{collect_by_class, collect_matching, find_element, find_element_mut, Element};
use crate::layout::Viewport;

/// ID of the root element.
pub const BODY_ID: &str = "body";

#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
    pub viewport: Viewport,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl Document {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            root: Element::new("body").id(BODY_ID),
            viewport,
        }
    }

    /// Build a document whose body holds `children`.
    pub fn with_body(viewport: Viewport, children: impl IntoIterator<Item = Element>) -> Self {
        let mut doc = Self::new(viewport);
        doc.root = doc.root.children(children);
        doc
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Apply `f` to the element with `id`. Returns false if it is absent.
    pub fn update(&mut self, id: &str, f: impl FnOnce(&mut Element)) -> bool {
        match self.get_mut(id) {
            Some(element) => {
                f(element);
                true
            }
            None => false,
        }
    }

    /// IDs of all elements carrying `class`, in document order.
    pub fn query_class(&self, class: &str) -> Vec<String> {
        let mut out = Vec::new();
        collect_by_class(&self.root, class, &mut out);
        out
    }

    /// IDs of descendants of `parent` carrying `class`, in document order.
    pub fn query_class_within(&self, parent: &str, class: &str) -> Vec<String> {
        let Some(parent) = self.get(parent) else {
            return Vec::new();
        };
        let mut out = Vec::new();
        for child in parent.child_elements() {
            collect_by_class(child, class, &mut out);
        }
        out
    }

    /// IDs of descendants of `parent` matching `pred`, in document order.
    pub fn query_within(&self, parent: &str, pred: impl Fn(&Element) -> bool) -> Vec<String> {
        let Some(parent) = self.get(parent) else {
            return Vec::new();
        };
        let mut out = Vec::new();
        for child in parent.child_elements() {
            collect_matching(child, &pred, &mut out);
        }
        out
    }

    /// Whether `id` is `ancestor` itself or one of its descendants.
    pub fn is_within(&self, ancestor: &str, id: &str) -> bool {
        self.get(ancestor).is_some_and(|a| a.contains_id(id))
    }

    pub fn append_child(&mut self, parent: &str, child: Element) -> bool {
        trace!("append {} to {}", child.id, parent);
        self.update(parent, |p| p.push_child(child))
    }

    pub fn set_children(&mut self, parent: &str, children: Vec<Element>) -> bool {
        self.update(parent, |p| p.set_children(children))
    }

    /// Detach an element from the tree. The root cannot be removed.
    pub fn remove(&mut self, id: &str) -> Option<Element> {
        self.root.remove_descendant(id)
    }

    pub fn set_class(&mut self, id: &str, class: &str, on: bool) -> bool {
        self.update(id, |el| el.set_class(class, on))
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.get(id).is_some_and(|el| el.has_class(class))
    }

    pub fn set_disabled(&mut self, id: &str, disabled: bool) -> bool {
        self.update(id, |el| el.disabled = disabled)
    }

    pub fn is_disabled(&self, id: &str) -> bool {
        self.get(id).is_some_and(|el| el.disabled)
    }

    pub fn set_attr(&mut self, id: &str, key: &str, value: impl Into<String>) -> bool {
        let value = value.into();
        self.update(id, |el| {
            el.attrs.insert(key.to_string(), value);
        })
    }

    pub fn attr(&self, id: &str, key: &str) -> Option<String> {
        self.get(id).and_then(|el| el.get_attr(key).cloned())
    }
}

/// A document shared between event handlers and timer tasks.
///
/// Locks must not be held across an `.await`. Poisoned locks are recovered.
#[derive(Debug, Clone, Default)]
pub struct SharedDocument {
    inner: Arc<RwLock<Document>>,
}

impl SharedDocument {
    pub fn new(document: Document) -> Self {
        Self {
            inner: Arc::new(RwLock::new(document)),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Document> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Document> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Run `f` with shared access.
    pub fn with<R>(&self, f: impl FnOnce(&Document) -> R) -> R {
        f(&self.read())
    }

    /// Run `f` with exclusive access.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut Document) -> R) -> R {
        f(&mut self.write())
    }

    pub fn viewport(&self) -> Viewport {
        self.read().viewport
    }

    /// Snapshot of a single element.
    pub fn element(&self, id: &str) -> Option<Element> {
        self.read().get(id).cloned()
    }
}
