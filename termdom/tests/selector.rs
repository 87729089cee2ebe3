use termdom::{Document, Element, SelectorError};

/// Document detail page: sections with classes and data attributes,
/// one panel hidden.
fn detail_page() -> Element {
    Element::col()
        .id("page")
        .child(
            Element::col()
                .id("sidebar")
                .class("nav")
                .child(Element::text("Projects").id("nav-projects").class("panel"))
                .child(Element::text("Documents").id("nav-documents").class("panel")),
        )
        .child(
            Element::col()
                .id("main")
                .child(
                    Element::col()
                        .id("metadata")
                        .classes("panel collapse")
                        .attr("data-section", "metadata")
                        .child(Element::text("Author: sandra").id("meta-author")),
                )
                .child(
                    Element::col()
                        .id("versions")
                        .classes("panel collapse show")
                        .attr("data-section", "versions")
                        .child(Element::text("v3 (current)").id("ver-3")),
                ),
        )
}

// ============================================================================
// First match, document order
// ============================================================================

#[test]
fn test_query_returns_first_match_in_document_order() {
    let doc = Document::mount(detail_page());

    let first = doc.query(".panel").unwrap().unwrap();
    assert_eq!(first.id, "nav-projects");
}

#[test]
fn test_query_by_id() {
    let doc = Document::mount(detail_page());

    let found = doc.query("#versions").unwrap().unwrap();
    assert_eq!(found.id, "versions");

    assert!(doc.query("#absent").unwrap().is_none());
}

#[test]
fn test_query_finds_hidden_elements() {
    let doc = Document::mount(detail_page());

    // #metadata is display:none under the default sheet, but queries are
    // structural: it is found like any other element.
    let hidden = doc.query("#metadata").unwrap().unwrap();
    assert!(!doc.stylesheet().is_visible(hidden));

    let inside = doc.query("#meta-author").unwrap().unwrap();
    assert_eq!(inside.id, "meta-author");
}

// ============================================================================
// Selector forms
// ============================================================================

#[test]
fn test_query_by_attribute_presence() {
    let doc = Document::mount(detail_page());

    let found = doc.query("[data-section]").unwrap().unwrap();
    assert_eq!(found.id, "metadata");
}

#[test]
fn test_query_by_attribute_value() {
    let doc = Document::mount(detail_page());

    let found = doc.query("[data-section=versions]").unwrap().unwrap();
    assert_eq!(found.id, "versions");

    let quoted = doc.query("[data-section=\"versions\"]").unwrap().unwrap();
    assert_eq!(quoted.id, "versions");

    let single_quoted = doc.query("[data-section='versions']").unwrap().unwrap();
    assert_eq!(single_quoted.id, "versions");
}

#[test]
fn test_query_compound() {
    let doc = Document::mount(detail_page());

    // .panel alone matches nav entries first; the compound pins it down
    let found = doc.query(".panel.show").unwrap().unwrap();
    assert_eq!(found.id, "versions");

    let with_id = doc.query("#metadata.collapse").unwrap().unwrap();
    assert_eq!(with_id.id, "metadata");

    assert!(doc.query("#metadata.show").unwrap().is_none());
}

#[test]
fn test_query_descendant() {
    let doc = Document::mount(detail_page());

    let found = doc.query("#sidebar .panel").unwrap().unwrap();
    assert_eq!(found.id, "nav-projects");

    let deep = doc.query("#main .panel").unwrap().unwrap();
    assert_eq!(deep.id, "metadata");

    assert!(doc.query("#sidebar .collapse").unwrap().is_none());
}

#[test]
fn test_descendant_requires_a_proper_ancestor() {
    // `#main .panel` must not match an element that is itself #main
    let root = Element::col().child(
        Element::col()
            .id("main")
            .class("panel")
            .child(Element::text("inner").id("inner")),
    );
    let doc = Document::mount(root);

    assert!(doc.query("#main .panel").unwrap().is_none());
}

#[test]
fn test_query_universal() {
    let doc = Document::mount(detail_page());

    let found = doc.query("*").unwrap().unwrap();
    assert_eq!(found.id, "page", "universal matches the root first");
}

// ============================================================================
// query_all
// ============================================================================

#[test]
fn test_query_all_document_order() {
    let doc = Document::mount(detail_page());

    let panels = doc.query_all(".panel").unwrap();
    let ids: Vec<&str> = panels.iter().map(|el| el.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["nav-projects", "nav-documents", "metadata", "versions"]
    );
}

#[test]
fn test_query_all_empty_result() {
    let doc = Document::mount(detail_page());

    assert!(doc.query_all(".absent").unwrap().is_empty());
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_empty_selector_is_an_error() {
    let doc = Document::mount(detail_page());

    assert_eq!(doc.query("").unwrap_err(), SelectorError::Empty);
    assert_eq!(doc.query("   ").unwrap_err(), SelectorError::Empty);
}

#[test]
fn test_unsupported_syntax_is_an_error() {
    let doc = Document::mount(detail_page());

    assert!(matches!(
        doc.query("div"),
        Err(SelectorError::Unsupported(_))
    ));
    assert!(matches!(
        doc.query("#a > .b"),
        Err(SelectorError::Unsupported(_))
    ));
    assert!(matches!(
        doc.query(".panel:hover"),
        Err(SelectorError::Unsupported(_))
    ));
}
