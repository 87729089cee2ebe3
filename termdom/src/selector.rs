//! A small CSS-flavored selector engine over the element tree.
//!
//! Supports the forms collapse markup reaches for: `#id`, `.class`,
//! `[attr]`, `[attr=value]`, `*`, compounds (`.collapse.show`,
//! `#panel-1.show`) and descendant chains (`#sidebar .panel`). Queries
//! return the first match in document order, like the web's
//! `querySelector`. Matching is structural only — hidden elements are
//! still found.

use thiserror::Error;

use crate::element::Element;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,
    #[error("unsupported selector syntax: {0:?}")]
    Unsupported(String),
}

/// A parsed selector: compound steps joined by descendant combinators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    steps: Vec<Step>,
}

/// One compound step: every condition must hold on the same element.
/// A step with no conditions (parsed from `*`) matches anything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Step {
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrCondition>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrCondition {
    Exists(String),
    Eq(String, String),
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(SelectorError::Empty);
        }

        let steps = trimmed
            .split_whitespace()
            .map(parse_step)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { steps })
    }

    /// Whether `element`, reached through `ancestors` (outermost first),
    /// matches this selector.
    fn matches(&self, element: &Element, ancestors: &[&Element]) -> bool {
        let Some((last, rest)) = self.steps.split_last() else {
            return false;
        };

        if !step_matches(last, element) {
            return false;
        }

        // Remaining steps match right-to-left against the ancestor chain.
        let mut idx = ancestors.len();
        for step in rest.iter().rev() {
            let mut found = false;
            while idx > 0 {
                idx -= 1;
                if step_matches(step, ancestors[idx]) {
                    found = true;
                    break;
                }
            }
            if !found {
                return false;
            }
        }

        true
    }
}

fn step_matches(step: &Step, element: &Element) -> bool {
    if let Some(id) = &step.id {
        if element.id != *id {
            return false;
        }
    }

    if step.classes.iter().any(|class| !element.has_class(class)) {
        return false;
    }

    for cond in &step.attrs {
        let matched = match cond {
            AttrCondition::Exists(key) => element.attributes.contains_key(key),
            AttrCondition::Eq(key, value) => element.get_attr(key) == Some(value.as_str()),
        };
        if !matched {
            return false;
        }
    }

    true
}

fn parse_step(part: &str) -> Result<Step, SelectorError> {
    let mut step = Step::default();
    let mut chars = part.chars().peekable();
    let mut parsed_any = false;

    while let Some(&ch) = chars.peek() {
        match ch {
            '*' => {
                chars.next();
            }
            '#' => {
                chars.next();
                let name = take_identifier(&mut chars);
                if name.is_empty() {
                    return Err(SelectorError::Unsupported(part.to_string()));
                }
                step.id = Some(name);
            }
            '.' => {
                chars.next();
                let name = take_identifier(&mut chars);
                if name.is_empty() {
                    return Err(SelectorError::Unsupported(part.to_string()));
                }
                step.classes.push(name);
            }
            '[' => {
                chars.next();
                let mut inner = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == ']' {
                        closed = true;
                        break;
                    }
                    inner.push(c);
                }
                if !closed {
                    return Err(SelectorError::Unsupported(part.to_string()));
                }
                step.attrs.push(parse_attr_condition(&inner, part)?);
            }
            _ => {
                // Tag selectors have no meaning here: elements carry no
                // tag names, only ids, classes and attributes.
                return Err(SelectorError::Unsupported(part.to_string()));
            }
        }
        parsed_any = true;
    }

    if !parsed_any {
        return Err(SelectorError::Unsupported(part.to_string()));
    }

    Ok(step)
}

fn parse_attr_condition(inner: &str, original: &str) -> Result<AttrCondition, SelectorError> {
    match inner.split_once('=') {
        None => {
            let key = inner.trim();
            if key.is_empty() || !is_identifier(key) {
                return Err(SelectorError::Unsupported(original.to_string()));
            }
            Ok(AttrCondition::Exists(key.to_string()))
        }
        Some((key, value)) => {
            let key = key.trim();
            let value = unquote(value.trim());
            if key.is_empty() || !is_identifier(key) || value.is_empty() {
                return Err(SelectorError::Unsupported(original.to_string()));
            }
            Ok(AttrCondition::Eq(key.to_string(), value.to_string()))
        }
    }
}

fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        let last = bytes[bytes.len() - 1];
        if (first == b'"' && last == b'"') || (first == b'\'' && last == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

fn take_identifier(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut name = String::new();
    while let Some(&ch) = chars.peek() {
        if ch.is_alphanumeric() || ch == '-' || ch == '_' {
            name.push(ch);
            chars.next();
        } else {
            break;
        }
    }
    name
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

/// Find the first element matching `selector`, in document order.
pub fn query<'a>(root: &'a Element, selector: &Selector) -> Option<&'a Element> {
    let mut path: Vec<&Element> = Vec::new();
    query_first(root, selector, &mut path)
}

fn query_first<'a>(
    element: &'a Element,
    selector: &Selector,
    path: &mut Vec<&'a Element>,
) -> Option<&'a Element> {
    if selector.matches(element, path) {
        return Some(element);
    }

    path.push(element);
    for child in element.content.children() {
        if let Some(found) = query_first(child, selector, path) {
            return Some(found);
        }
    }
    path.pop();

    None
}

/// Find every element matching `selector`, in document order.
pub fn query_all<'a>(root: &'a Element, selector: &Selector) -> Vec<&'a Element> {
    let mut path: Vec<&Element> = Vec::new();
    let mut result = Vec::new();
    query_collect(root, selector, &mut path, &mut result);
    result
}

fn query_collect<'a>(
    element: &'a Element,
    selector: &Selector,
    path: &mut Vec<&'a Element>,
    result: &mut Vec<&'a Element>,
) {
    if selector.matches(element, path) {
        result.push(element);
    }

    path.push(element);
    for child in element.content.children() {
        query_collect(child, selector, path, result);
    }
    path.pop();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        let sel = Selector::parse("#panel-1").unwrap();
        assert_eq!(sel.steps.len(), 1);
        assert_eq!(sel.steps[0].id.as_deref(), Some("panel-1"));
    }

    #[test]
    fn test_parse_compound() {
        let sel = Selector::parse("#panel-1.collapse.show").unwrap();
        assert_eq!(sel.steps[0].id.as_deref(), Some("panel-1"));
        assert_eq!(sel.steps[0].classes, vec!["collapse", "show"]);
    }

    #[test]
    fn test_parse_attr_exists() {
        let sel = Selector::parse("[data-toggle]").unwrap();
        assert_eq!(
            sel.steps[0].attrs,
            vec![AttrCondition::Exists("data-toggle".to_string())]
        );
    }

    #[test]
    fn test_parse_attr_eq_quoted() {
        let sel = Selector::parse("[data-toggle=\"collapse\"]").unwrap();
        assert_eq!(
            sel.steps[0].attrs,
            vec![AttrCondition::Eq(
                "data-toggle".to_string(),
                "collapse".to_string()
            )]
        );
    }

    #[test]
    fn test_parse_descendant_chain() {
        let sel = Selector::parse("#sidebar .panel").unwrap();
        assert_eq!(sel.steps.len(), 2);
    }

    #[test]
    fn test_parse_empty_is_error() {
        assert_eq!(Selector::parse("").unwrap_err(), SelectorError::Empty);
        assert_eq!(Selector::parse("   ").unwrap_err(), SelectorError::Empty);
    }

    #[test]
    fn test_parse_bare_tag_is_unsupported() {
        assert!(matches!(
            Selector::parse("div"),
            Err(SelectorError::Unsupported(_))
        ));
    }

    #[test]
    fn test_parse_dangling_hash_is_unsupported() {
        assert!(matches!(
            Selector::parse("#"),
            Err(SelectorError::Unsupported(_))
        ));
    }

    #[test]
    fn test_parse_unclosed_bracket_is_unsupported() {
        assert!(matches!(
            Selector::parse("[data-toggle"),
            Err(SelectorError::Unsupported(_))
        ));
    }
}
