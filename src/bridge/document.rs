//! Document seam: body measurement and head style elements.

/// The parts of the component's document the bridge touches.
pub trait Document {
    /// Total rendered height of the document body, in pixels.
    fn scroll_height(&self) -> u32;

    /// Returns `true` if an element with `id` exists.
    fn has_element(&self, id: &str) -> bool;

    /// Creates an empty `<style>` element with `id` and appends it to the head.
    fn append_head_style(&mut self, id: &str);

    /// Replaces the content of the element with `id`.
    ///
    /// Returns `false` if no such element exists.
    fn set_inner_html(&mut self, id: &str, html: &str) -> bool;
}

/// A `<style>` element in the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleElement {
    /// Element id.
    pub id: String,
    /// Element content.
    pub inner_html: String,
}

/// In-memory document with a fixed body height and a list of head styles.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    body_scroll_height: u32,
    head: Vec<StyleElement>,
}

impl MemoryDocument {
    /// Creates a document whose body measures `body_scroll_height` pixels.
    #[must_use]
    pub const fn new(body_scroll_height: u32) -> Self {
        Self {
            body_scroll_height,
            head: Vec::new(),
        }
    }

    /// Changes the measured body height.
    pub fn set_body_scroll_height(&mut self, height: u32) {
        self.body_scroll_height = height;
    }

    /// Style elements in the head, in insertion order.
    #[must_use]
    pub fn head(&self) -> &[StyleElement] {
        &self.head
    }

    /// Returns the element with `id`, if any.
    #[must_use]
    pub fn element(&self, id: &str) -> Option<&StyleElement> {
        self.head.iter().find(|e| e.id == id)
    }
}

impl Document for MemoryDocument {
    fn scroll_height(&self) -> u32 {
        self.body_scroll_height
    }

    fn has_element(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    fn append_head_style(&mut self, id: &str) {
        self.head.push(StyleElement {
            id: id.to_string(),
            inner_html: String::new(),
        });
    }

    fn set_inner_html(&mut self, id: &str, html: &str) -> bool {
        match self.head.iter_mut().find(|e| e.id == id) {
            Some(element) => {
                html.clone_into(&mut element.inner_html);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_document_reports_height() {
        let mut doc = MemoryDocument::new(120);
        assert_eq!(doc.scroll_height(), 120);
        doc.set_body_scroll_height(300);
        assert_eq!(doc.scroll_height(), 300);
    }

    #[test]
    fn set_inner_html_requires_element() {
        let mut doc = MemoryDocument::default();
        assert!(!doc.set_inner_html("s", "body {}"));
        doc.append_head_style("s");
        assert!(doc.has_element("s"));
        assert!(doc.set_inner_html("s", "body {}"));
        assert_eq!(doc.element("s").map(|e| e.inner_html.as_str()), Some("body {}"));
    }
}
