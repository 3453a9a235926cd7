//! Mock DOM for WASM testing
//!
//! DOM abstractions that let the browser widget run without web-sys. The
//! widget mirrors the calculator state into these elements exactly as the
//! real bindings mirror it into the document.

use std::collections::HashMap;

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Adds a child element
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Adds a class
    pub fn add_class(&mut self, class: &str) {
        if !self.classes.contains(&class.to_string()) {
            self.classes.push(class.to_string());
        }
    }

    /// Removes a class
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(&class.to_string())
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// DOM events the calculator widget consumes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click event on a keypad button
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Key press event
    KeyPress {
        /// The key that was pressed (browser `KeyboardEvent.key` value)
        key: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a key press event
    #[must_use]
    pub fn key_press(key: &str) -> Self {
        Self::KeyPress {
            key: key.to_string(),
        }
    }
}

/// Mock DOM for testing the WASM calculator without a browser
#[derive(Debug, Default)]
pub struct MockDom {
    elements: HashMap<String, DomElement>,
    event_history: Vec<DomEvent>,
}

impl MockDom {
    /// Creates a new mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an element for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Gets a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Records an event in the history
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== DomElement tests =====

    #[test]
    fn test_dom_element_new() {
        let elem = DomElement::new("span");
        assert_eq!(elem.tag, "span");
        assert!(elem.id.is_empty());
        assert!(elem.text_content.is_empty());
    }

    #[test]
    fn test_dom_element_builders() {
        let elem = DomElement::new("button")
            .with_id("btn-7")
            .with_text("7")
            .with_class("keypad-btn")
            .with_attr("data-row", "1");
        assert_eq!(elem.id, "btn-7");
        assert_eq!(elem.text_content, "7");
        assert!(elem.has_class("keypad-btn"));
        assert_eq!(elem.get_attr("data-row"), Some("1"));
    }

    #[test]
    fn test_dom_element_with_child() {
        let child = DomElement::new("span").with_text("child");
        let parent = DomElement::new("div").with_child(child);
        assert_eq!(parent.children.len(), 1);
        assert_eq!(parent.children[0].text_content, "child");
    }

    #[test]
    fn test_dom_element_class_management() {
        let mut elem = DomElement::new("div");
        elem.add_class("error");
        elem.add_class("error"); // duplicate is not added
        assert_eq!(elem.classes.len(), 1);
        elem.remove_class("error");
        assert!(!elem.has_class("error"));
    }

    #[test]
    fn test_dom_element_get_attr_none() {
        let elem = DomElement::new("div");
        assert_eq!(elem.get_attr("missing"), None);
    }

    // ===== DomEvent tests =====

    #[test]
    fn test_dom_event_click() {
        let event = DomEvent::click("btn-equals");
        assert!(matches!(event, DomEvent::Click { element_id } if element_id == "btn-equals"));
    }

    #[test]
    fn test_dom_event_key_press() {
        let event = DomEvent::key_press("Enter");
        assert!(matches!(event, DomEvent::KeyPress { key } if key == "Enter"));
    }

    // ===== MockDom tests =====

    #[test]
    fn test_mock_dom_register_and_lookup() {
        let mut dom = MockDom::new();
        dom.register_element(DomElement::new("div").with_id("calc-display"));
        assert!(dom.get_element("calc-display").is_some());
        assert!(dom.get_element("missing").is_none());
    }

    #[test]
    fn test_mock_dom_register_without_id_is_ignored() {
        let mut dom = MockDom::new();
        dom.register_element(DomElement::new("div"));
        assert!(dom.elements.is_empty());
    }

    #[test]
    fn test_mock_dom_text_round_trip() {
        let mut dom = MockDom::new();
        dom.register_element(DomElement::new("div").with_id("calc-display"));
        dom.set_element_text("calc-display", "3.5");
        assert_eq!(dom.get_element_text("calc-display"), Some("3.5"));
    }

    #[test]
    fn test_mock_dom_event_history() {
        let mut dom = MockDom::new();
        dom.dispatch_event(DomEvent::click("btn-1"));
        dom.dispatch_event(DomEvent::key_press("+"));
        assert_eq!(dom.event_history().len(), 2);
        dom.clear_event_history();
        assert!(dom.event_history().is_empty());
    }

    #[test]
    fn test_mock_dom_get_element_mut() {
        let mut dom = MockDom::new();
        dom.register_element(DomElement::new("div").with_id("calc-display"));
        if let Some(elem) = dom.get_element_mut("calc-display") {
            elem.add_class("error");
        }
        assert!(dom.get_element("calc-display").unwrap().has_class("error"));
    }
}
