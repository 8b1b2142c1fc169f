mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Collect IDs of every element carrying `class`, in document order.
pub fn collect_by_class(root: &Element, class: &str, out: &mut Vec<String>) {
    collect_matching(root, &|el| el.has_class(class), out);
}

/// Collect IDs of every element matching `pred`, in document order.
pub fn collect_matching(root: &Element, pred: &dyn Fn(&Element) -> bool, out: &mut Vec<String>) {
    if pred(root) {
        out.push(root.id.clone());
    }
    for child in root.child_elements() {
        collect_matching(child, pred, out);
    }
}
