//! Collapse toggling driven by data attributes.
//!
//! Markup opts a control in with `data-toggle="collapse"` and points its
//! `data-target` attribute at a selector. Activating the control flips the
//! `show` class on the first element the selector matches. What `show`
//! means is the stylesheet's business: the default sheet hides `.collapse`
//! and shows `.collapse.show`, so the flip is what opens and closes panels.

use crate::element::{find_element, find_element_mut, Content, Element};
use crate::selector::{query, Selector};

/// Marker attribute naming the behavior a control opts into.
pub const TOGGLE_ATTR: &str = "data-toggle";
/// Marker value for collapse controls.
pub const COLLAPSE_VALUE: &str = "collapse";
/// Attribute holding the selector for the element to show or hide.
pub const TARGET_ATTR: &str = "data-target";
/// Class whose presence makes a collapse panel visible.
pub const SHOW_CLASS: &str = "show";

/// Collect the ids of all collapse controls, in document order.
/// Duplicates never occur in the result, however often an id repeats
/// in the tree.
pub fn collect_controls(root: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_controls_recursive(root, &mut result);
    result
}

fn collect_controls_recursive(element: &Element, result: &mut Vec<String>) {
    if element.get_attr(TOGGLE_ATTR) == Some(COLLAPSE_VALUE)
        && !result.iter().any(|id| id == &element.id)
    {
        result.push(element.id.clone());
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_controls_recursive(child, result);
        }
    }
}

/// Run one activation of a control: read its target reference, resolve the
/// first matching element, flip the show class on it.
///
/// Both the reference attribute and the query are evaluated at activation
/// time, so retargeting a control between clicks takes effect immediately.
/// Returns whether the target carries the show class afterwards, or None
/// when the reference is missing, does not parse, or matches nothing.
/// None is the expected quiet path, not an error.
pub fn toggle_target(root: &mut Element, control_id: &str) -> Option<bool> {
    let Some(reference) = find_element(root, control_id)
        .and_then(|el| el.get_attr(TARGET_ATTR))
        .map(str::to_string)
    else {
        log::debug!("collapse: control {control_id} has no {TARGET_ATTR}");
        return None;
    };

    let selector = match Selector::parse(&reference) {
        Ok(selector) => selector,
        Err(err) => {
            log::debug!("collapse: control {control_id} target {reference:?}: {err}");
            return None;
        }
    };

    let Some(target_id) = query(root, &selector).map(|el| el.id.clone()) else {
        log::debug!("collapse: nothing matches {reference:?} (control {control_id})");
        return None;
    };

    let target = find_element_mut(root, &target_id)?;
    let shown = target.toggle_class(SHOW_CLASS);
    log::debug!("collapse: {control_id} toggled {target_id}, show={shown}");
    Some(shown)
}
