//! Class rules: the part of the system that decides what class names
//! *mean*. The toggler only flips classes; whether `show` shows anything
//! is decided here, the way a stylesheet decides it for markup.

use crate::element::Element;
use crate::types::Style;

/// Whether an element participates in layout, rendering and hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Flow,
    None,
}

/// A rule keyed by a class compound: applies when every listed class is
/// present on the element.
#[derive(Debug, Clone)]
pub struct Rule {
    classes: Vec<String>,
    display: Option<Display>,
    style: Style,
}

impl Rule {
    /// Build a rule for a class compound, written as whitespace-separated
    /// class names (`"collapse show"` applies only to elements carrying
    /// both).
    pub fn classes(classes: &str) -> Self {
        Self {
            classes: classes.split_whitespace().map(str::to_string).collect(),
            display: None,
            style: Style::default(),
        }
    }

    pub fn display(mut self, display: Display) -> Self {
        self.display = Some(display);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    fn specificity(&self) -> usize {
        self.classes.len()
    }

    fn applies(&self, element: &Element) -> bool {
        !self.classes.is_empty() && self.classes.iter().all(|class| element.has_class(class))
    }
}

/// An ordered rule list. Resolution follows the cascade: higher
/// specificity (more classes) wins, later insertion breaks ties, and the
/// element's inline style overrides everything.
#[derive(Debug, Clone)]
pub struct Stylesheet {
    rules: Vec<Rule>,
}

impl Default for Stylesheet {
    /// The base sheet carries the collapse convention:
    /// `.collapse` is hidden, `.collapse.show` is visible.
    fn default() -> Self {
        Self::bare()
            .rule(Rule::classes("collapse").display(Display::None))
            .rule(Rule::classes("collapse show").display(Display::Flow))
    }
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sheet with no rules at all. Class flips have no visible effect
    /// against a bare sheet.
    pub fn bare() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Resolved display for an element. Defaults to `Flow` when no rule
    /// with a display applies.
    pub fn display_of(&self, element: &Element) -> Display {
        let mut winner: Option<(usize, Display)> = None;

        for rule in &self.rules {
            let Some(display) = rule.display else {
                continue;
            };
            if !rule.applies(element) {
                continue;
            }
            match winner {
                Some((specificity, _)) if specificity > rule.specificity() => {}
                _ => winner = Some((rule.specificity(), display)),
            }
        }

        winner.map(|(_, display)| display).unwrap_or_default()
    }

    pub fn is_visible(&self, element: &Element) -> bool {
        self.display_of(element) == Display::Flow
    }

    /// Resolved style for an element: rule styles in cascade order, then
    /// the inline style on top.
    pub fn style_of(&self, element: &Element) -> Style {
        let mut applicable: Vec<&Rule> = self
            .rules
            .iter()
            .filter(|rule| rule.applies(element))
            .collect();
        // Stable sort: equal specificity keeps insertion order, so later
        // rules overlay earlier ones.
        applicable.sort_by_key(|rule| rule.specificity());

        let mut resolved = Style::default();
        for rule in applicable {
            resolved = resolved.overlaid(&rule.style);
        }
        resolved.overlaid(&element.style)
    }
}
