//! The retained document: element tree, stylesheet, and collapse wiring.

use crate::collapse;
use crate::element::{find_element, find_element_mut, Element};
use crate::event::{Event, MouseButton};
use crate::selector::{self, Selector, SelectorError};
use crate::stylesheet::Stylesheet;

/// Outcome of dispatching an event to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The event activated a wired control.
    Consumed,
    /// The document had no wiring for the event.
    Ignored,
}

/// A mounted document. Mounting is the ready signal: the collapse scan
/// runs exactly once, when the tree is handed over. There is no other
/// constructor and no re-scan, so elements added later stay unwired.
pub struct Document {
    root: Element,
    sheet: Stylesheet,
    wired: Vec<String>,
}

impl Document {
    /// Mount a tree with the default stylesheet (which carries the
    /// `.collapse` / `.collapse.show` convention).
    pub fn mount(root: Element) -> Self {
        Self::mount_with(root, Stylesheet::default())
    }

    /// Mount a tree with a custom stylesheet.
    ///
    /// Every element carrying `data-toggle="collapse"` is wired: it is
    /// made clickable and focusable so both mouse and keyboard reach it,
    /// and clicks on it run the collapse toggle.
    pub fn mount_with(mut root: Element, sheet: Stylesheet) -> Self {
        let wired = collapse::collect_controls(&root);
        for id in &wired {
            if let Some(control) = find_element_mut(&mut root, id) {
                control.clickable = true;
                control.focusable = true;
            }
        }
        log::debug!("document: mounted, {} collapse control(s) wired", wired.len());
        Self { root, sheet, wired }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn stylesheet(&self) -> &Stylesheet {
        &self.sheet
    }

    /// Look up an element by id.
    pub fn element(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    /// Mutable access for post-mount edits. Subtrees added this way are
    /// queried, laid out, and rendered like any other, but toggle markers
    /// on them are not wired.
    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    /// First element matching the selector, in document order.
    /// Matching is structural: hidden elements are found like any other.
    pub fn query(&self, selector: &str) -> Result<Option<&Element>, SelectorError> {
        let selector = Selector::parse(selector)?;
        Ok(selector::query(&self.root, &selector))
    }

    /// Every element matching the selector, in document order.
    pub fn query_all(&self, selector: &str) -> Result<Vec<&Element>, SelectorError> {
        let selector = Selector::parse(selector)?;
        Ok(selector::query_all(&self.root, &selector))
    }

    /// Ids wired at mount, in document order.
    pub fn wired_controls(&self) -> &[String] {
        &self.wired
    }

    /// Dispatch one event.
    ///
    /// A left click targeting a wired control runs the collapse toggle and
    /// is consumed, whether or not its target resolved (the quiet no-op is
    /// part of the toggle contract). Everything else is ignored; the caller
    /// keeps handling its own keys and clicks.
    pub fn dispatch(&mut self, event: &Event) -> EventResult {
        match event {
            Event::Click {
                target: Some(target),
                button: MouseButton::Left,
                ..
            } => {
                if self.wired.iter().any(|id| id == target) {
                    collapse::toggle_target(&mut self.root, target);
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            _ => EventResult::Ignored,
        }
    }
}
