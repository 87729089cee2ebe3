use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::element::{find_element, Content, Element};
use crate::event::{Event, Key, Modifiers, MouseButton};
use crate::hit::hit_test;
use crate::layout::LayoutResult;
use crate::stylesheet::Stylesheet;

/// Tracks which element is currently focused and processes events.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        if self.focused.is_some() {
            self.focused = None;
            true
        } else {
            false
        }
    }

    /// Focus the next visible focusable element (Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, root: &Element, sheet: &Stylesheet) -> Option<String> {
        let focusable = collect_focusable(root, sheet);
        if focusable.is_empty() {
            return None;
        }

        let new_focus = match &self.focused {
            None => focusable[0].clone(),
            Some(current) => {
                let idx = focusable.iter().position(|id| id == current);
                match idx {
                    Some(i) => focusable[(i + 1) % focusable.len()].clone(),
                    None => focusable[0].clone(),
                }
            }
        };

        if self.focused.as_ref() != Some(&new_focus) {
            self.focused = Some(new_focus.clone());
            Some(new_focus)
        } else {
            None
        }
    }

    /// Focus the previous visible focusable element (Shift+Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, root: &Element, sheet: &Stylesheet) -> Option<String> {
        let focusable = collect_focusable(root, sheet);
        if focusable.is_empty() {
            return None;
        }

        let new_focus = match &self.focused {
            None => focusable[focusable.len() - 1].clone(),
            Some(current) => {
                let idx = focusable.iter().position(|id| id == current);
                match idx {
                    Some(0) => focusable[focusable.len() - 1].clone(),
                    Some(i) => focusable[i - 1].clone(),
                    None => focusable[focusable.len() - 1].clone(),
                }
            }
        };

        if self.focused.as_ref() != Some(&new_focus) {
            self.focused = Some(new_focus.clone());
            Some(new_focus)
        } else {
            None
        }
    }

    /// Process raw crossterm events and produce high-level events.
    /// Enter and Space on a focused clickable element synthesize a click,
    /// so keyboard users can activate anything the mouse can.
    pub fn process_events(
        &mut self,
        raw: &[CrosstermEvent],
        root: &Element,
        sheet: &Stylesheet,
        layout: &LayoutResult,
    ) -> Vec<Event> {
        let mut events = Vec::new();

        for raw_event in raw {
            match raw_event {
                CrosstermEvent::Key(key_event) => {
                    // Only process key press events (not release/repeat on some terminals)
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }

                    let key: Key = key_event.code.into();
                    let modifiers: Modifiers = key_event.modifiers.into();

                    // Handle Tab/BackTab for focus navigation
                    if key == Key::Tab {
                        if let Some(old) = self.focused.clone() {
                            if let Some(new) = self.focus_next(root, sheet) {
                                events.push(Event::Blur { target: old });
                                events.push(Event::Focus { target: new });
                            }
                        } else if let Some(new) = self.focus_next(root, sheet) {
                            events.push(Event::Focus { target: new });
                        }
                        continue;
                    }

                    if key == Key::BackTab {
                        if let Some(old) = self.focused.clone() {
                            if let Some(new) = self.focus_prev(root, sheet) {
                                events.push(Event::Blur { target: old });
                                events.push(Event::Focus { target: new });
                            }
                        } else if let Some(new) = self.focus_prev(root, sheet) {
                            events.push(Event::Focus { target: new });
                        }
                        continue;
                    }

                    // Escape blurs focused element; only emits key event if nothing focused
                    if key == Key::Escape {
                        if let Some(old) = self.focused.take() {
                            log::debug!("focus: escape blurs {old}");
                            events.push(Event::Blur { target: old });
                            continue;
                        }
                        // Fall through to emit key event
                    }

                    // Enter/Space activate a focused clickable element
                    if modifiers.none() && matches!(key, Key::Enter | Key::Char(' ')) {
                        if let Some(focused_id) = &self.focused {
                            let clickable = find_element(root, focused_id)
                                .map(|el| el.clickable)
                                .unwrap_or(false);
                            if clickable {
                                log::debug!("focus: keyboard activation of {focused_id}");
                                let (x, y) = layout
                                    .get(focused_id)
                                    .map(|rect| rect.center())
                                    .unwrap_or((0, 0));
                                events.push(Event::Click {
                                    target: Some(focused_id.clone()),
                                    x,
                                    y,
                                    button: MouseButton::Left,
                                });
                                continue;
                            }
                        }
                    }

                    // Regular key event
                    events.push(Event::Key {
                        target: self.focused.clone(),
                        key,
                        modifiers,
                    });
                }

                CrosstermEvent::Mouse(mouse_event) => {
                    let x = mouse_event.column;
                    let y = mouse_event.row;

                    if let MouseEventKind::Down(button) = mouse_event.kind {
                        let target = hit_test(layout, root, sheet, x, y);
                        events.push(Event::Click {
                            target,
                            x,
                            y,
                            button: button.into(),
                        });
                    }
                }

                CrosstermEvent::Resize(width, height) => {
                    events.push(Event::Resize {
                        width: *width,
                        height: *height,
                    });
                }

                _ => {}
            }
        }

        events
    }
}

/// Collect all focusable element IDs in tree order.
/// Elements inside hidden subtrees are skipped so Tab never lands on
/// something the user cannot see.
pub fn collect_focusable(element: &Element, sheet: &Stylesheet) -> Vec<String> {
    let mut result = Vec::new();
    collect_focusable_recursive(element, sheet, &mut result);
    result
}

fn collect_focusable_recursive(element: &Element, sheet: &Stylesheet, result: &mut Vec<String>) {
    if !sheet.is_visible(element) {
        return;
    }
    if element.focusable {
        result.push(element.id.clone());
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_focusable_recursive(child, sheet, result);
        }
    }
}
