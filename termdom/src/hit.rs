use crate::element::{Content, Element};
use crate::layout::LayoutResult;
use crate::stylesheet::Stylesheet;

/// Find the deepest clickable element at the given coordinates.
/// Returns None if no clickable element contains the point.
/// Subtrees the stylesheet hides are never hit, even though selector
/// queries still find them.
pub fn hit_test(
    layout: &LayoutResult,
    root: &Element,
    sheet: &Stylesheet,
    x: u16,
    y: u16,
) -> Option<String> {
    hit_test_element(layout, root, sheet, x, y)
}

/// Find any element (clickable or not) at the given coordinates.
/// Returns the deepest visible element containing the point.
pub fn hit_test_any(
    layout: &LayoutResult,
    root: &Element,
    sheet: &Stylesheet,
    x: u16,
    y: u16,
) -> Option<String> {
    hit_test_element_any(layout, root, sheet, x, y)
}

fn hit_test_element(
    layout: &LayoutResult,
    element: &Element,
    sheet: &Stylesheet,
    x: u16,
    y: u16,
) -> Option<String> {
    if !sheet.is_visible(element) {
        return None;
    }

    let rect = layout.get(&element.id)?;

    if !rect.contains(x, y) {
        return None;
    }

    // Check children in reverse order (last rendered = on top)
    if let Content::Children(children) = &element.content {
        for child in children.iter().rev() {
            if let Some(id) = hit_test_element(layout, child, sheet, x, y) {
                return Some(id);
            }
        }
    }

    // Return this element if clickable
    if element.clickable {
        Some(element.id.clone())
    } else {
        None
    }
}

fn hit_test_element_any(
    layout: &LayoutResult,
    element: &Element,
    sheet: &Stylesheet,
    x: u16,
    y: u16,
) -> Option<String> {
    if !sheet.is_visible(element) {
        return None;
    }

    let rect = layout.get(&element.id)?;

    if !rect.contains(x, y) {
        return None;
    }

    // Check children in reverse order (last rendered = on top)
    if let Content::Children(children) = &element.content {
        for child in children.iter().rev() {
            if let Some(id) = hit_test_element_any(layout, child, sheet, x, y) {
                return Some(id);
            }
        }
    }

    // Return this element (regardless of clickable status)
    Some(element.id.clone())
}

/// Find the focusable element at the given coordinates.
/// Returns None if no focusable element contains the point.
pub fn hit_test_focusable(
    layout: &LayoutResult,
    root: &Element,
    sheet: &Stylesheet,
    x: u16,
    y: u16,
) -> Option<String> {
    hit_test_element_focusable(layout, root, sheet, x, y)
}

fn hit_test_element_focusable(
    layout: &LayoutResult,
    element: &Element,
    sheet: &Stylesheet,
    x: u16,
    y: u16,
) -> Option<String> {
    if !sheet.is_visible(element) {
        return None;
    }

    let rect = layout.get(&element.id)?;

    if !rect.contains(x, y) {
        return None;
    }

    // Check children in reverse order (last rendered = on top)
    if let Content::Children(children) = &element.content {
        for child in children.iter().rev() {
            if let Some(id) = hit_test_element_focusable(layout, child, sheet, x, y) {
                return Some(id);
            }
        }
    }

    // Return this element if focusable
    if element.focusable {
        Some(element.id.clone())
    } else {
        None
    }
}
