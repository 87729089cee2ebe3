use crossterm::event::{
    Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers,
    MouseButton as CtMouseButton, MouseEvent, MouseEventKind,
};
use termdom::{
    collect_focusable, hit_test, hit_test_any, Element, Event, FocusState, Key, LayoutResult,
    MouseButton, Rect, Stylesheet,
};

fn create_layout(elements: &[(&str, Rect)]) -> LayoutResult {
    let mut layout = LayoutResult::new();
    for (id, rect) in elements {
        layout.insert(id.to_string(), *rect);
    }
    layout
}

// ============================================================================
// Hit Testing
// ============================================================================

#[test]
fn test_hit_test_point_inside() {
    let sheet = Stylesheet::bare();
    let root = Element::box_()
        .id("root")
        .clickable(true)
        .child(Element::text("Click me").id("btn").clickable(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("btn", Rect::new(10, 10, 30, 3)),
    ]);

    // Click inside btn
    assert_eq!(
        hit_test(&layout, &root, &sheet, 15, 11),
        Some("btn".to_string())
    );

    // Click inside root but outside btn
    assert_eq!(
        hit_test(&layout, &root, &sheet, 5, 5),
        Some("root".to_string())
    );

    // Click outside everything
    assert_eq!(hit_test(&layout, &root, &sheet, 150, 150), None);
}

#[test]
fn test_hit_test_overlapping_elements() {
    // Later children should be "on top"
    let sheet = Stylesheet::bare();
    let root = Element::box_()
        .id("root")
        .child(Element::box_().id("bottom").clickable(true))
        .child(Element::box_().id("top").clickable(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 100)),
        ("bottom", Rect::new(10, 10, 50, 50)),
        ("top", Rect::new(30, 30, 50, 50)), // Overlaps with bottom
    ]);

    // Click in overlapping region - top should win
    assert_eq!(
        hit_test(&layout, &root, &sheet, 40, 40),
        Some("top".to_string())
    );

    // Click only in bottom (before overlap)
    assert_eq!(
        hit_test(&layout, &root, &sheet, 15, 15),
        Some("bottom".to_string())
    );
}

#[test]
fn test_hit_test_only_clickable() {
    let sheet = Stylesheet::bare();
    let root = Element::box_()
        .id("root")
        .child(Element::text("Not clickable").id("text"));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("text", Rect::new(10, 10, 30, 3)),
    ]);

    // Click on non-clickable element returns None
    assert_eq!(hit_test(&layout, &root, &sheet, 15, 11), None);
}

#[test]
fn test_hit_test_any() {
    let sheet = Stylesheet::bare();
    let root = Element::box_()
        .id("root")
        .child(Element::text("Not clickable").id("text"));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("text", Rect::new(10, 10, 30, 3)),
    ]);

    // hit_test_any returns element even if not clickable
    assert_eq!(
        hit_test_any(&layout, &root, &sheet, 15, 11),
        Some("text".to_string())
    );
}

#[test]
fn test_hidden_elements_are_never_hit() {
    // Selector queries find hidden elements; hit tests must not.
    let sheet = Stylesheet::new();
    let root = Element::box_()
        .id("root")
        .clickable(true)
        .child(
            Element::box_()
                .id("overlay")
                .class("collapse")
                .clickable(true)
                .child(Element::text("inside").id("inner").clickable(true)),
        );

    // Rects on purpose for every element, as if the panel were visible:
    // the stylesheet check alone must reject the hidden subtree.
    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("overlay", Rect::new(10, 10, 30, 10)),
        ("inner", Rect::new(12, 12, 10, 1)),
    ]);

    assert_eq!(
        hit_test(&layout, &root, &sheet, 15, 12),
        Some("root".to_string()),
        "click falls through the hidden panel"
    );

    let mut shown = root.clone();
    shown.content.children_mut().unwrap()[0].add_class("show");
    assert_eq!(
        hit_test(&layout, &shown, &sheet, 15, 12),
        Some("inner".to_string())
    );
}

// ============================================================================
// Focus State
// ============================================================================

#[test]
fn test_focus_state_focus_blur() {
    let mut focus = FocusState::new();

    assert_eq!(focus.focused(), None);

    // Focus an element
    assert!(focus.focus("input1"));
    assert_eq!(focus.focused(), Some("input1"));

    // Focus same element - no change
    assert!(!focus.focus("input1"));

    // Focus different element
    assert!(focus.focus("input2"));
    assert_eq!(focus.focused(), Some("input2"));

    // Blur
    assert!(focus.blur());
    assert_eq!(focus.focused(), None);

    // Blur when nothing focused
    assert!(!focus.blur());
}

#[test]
fn test_focus_next_navigation() {
    let sheet = Stylesheet::bare();
    let root = Element::col()
        .child(Element::text("Input 1").id("input1").focusable(true))
        .child(Element::text("Input 2").id("input2").focusable(true))
        .child(Element::text("Input 3").id("input3").focusable(true));

    let mut focus = FocusState::new();

    // Focus first when nothing focused
    assert_eq!(focus.focus_next(&root, &sheet), Some("input1".to_string()));
    assert_eq!(focus.focused(), Some("input1"));

    // Focus next
    assert_eq!(focus.focus_next(&root, &sheet), Some("input2".to_string()));
    assert_eq!(focus.focus_next(&root, &sheet), Some("input3".to_string()));

    // Wrap around
    assert_eq!(focus.focus_next(&root, &sheet), Some("input1".to_string()));
}

#[test]
fn test_focus_prev_navigation() {
    let sheet = Stylesheet::bare();
    let root = Element::col()
        .child(Element::text("Input 1").id("input1").focusable(true))
        .child(Element::text("Input 2").id("input2").focusable(true))
        .child(Element::text("Input 3").id("input3").focusable(true));

    let mut focus = FocusState::new();

    // Focus last when nothing focused
    assert_eq!(focus.focus_prev(&root, &sheet), Some("input3".to_string()));

    // Focus prev
    assert_eq!(focus.focus_prev(&root, &sheet), Some("input2".to_string()));
    assert_eq!(focus.focus_prev(&root, &sheet), Some("input1".to_string()));

    // Wrap around
    assert_eq!(focus.focus_prev(&root, &sheet), Some("input3".to_string()));
}

#[test]
fn test_focus_skips_hidden_subtrees() {
    let sheet = Stylesheet::new();
    let root = Element::col()
        .child(Element::text("A").id("a").focusable(true))
        .child(
            Element::col()
                .id("panel")
                .class("collapse")
                .child(Element::text("B").id("b").focusable(true)),
        )
        .child(Element::text("C").id("c").focusable(true));

    assert_eq!(collect_focusable(&root, &sheet), vec!["a", "c"]);

    let mut focus = FocusState::new();
    assert_eq!(focus.focus_next(&root, &sheet), Some("a".to_string()));
    assert_eq!(focus.focus_next(&root, &sheet), Some("c".to_string()));
    assert_eq!(focus.focus_next(&root, &sheet), Some("a".to_string()));

    // Once the panel is shown, Tab reaches inside it
    let mut shown = root.clone();
    termdom::element::find_element_mut(&mut shown, "panel")
        .unwrap()
        .add_class("show");
    assert_eq!(collect_focusable(&shown, &sheet), vec!["a", "b", "c"]);
}

// ============================================================================
// Raw event processing
// ============================================================================

#[test]
fn test_process_events_mouse_down_becomes_click() {
    let sheet = Stylesheet::bare();
    let root = Element::box_()
        .id("root")
        .child(Element::text("Click me").id("btn").clickable(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("btn", Rect::new(10, 10, 30, 3)),
    ]);

    let raw = [CtEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(CtMouseButton::Left),
        column: 15,
        row: 11,
        modifiers: KeyModifiers::NONE,
    })];

    let mut focus = FocusState::new();
    let events = focus.process_events(&raw, &root, &sheet, &layout);

    assert_eq!(
        events,
        vec![Event::Click {
            target: Some("btn".to_string()),
            x: 15,
            y: 11,
            button: MouseButton::Left,
        }]
    );
}

#[test]
fn test_process_events_tab_navigation() {
    let sheet = Stylesheet::bare();
    let root = Element::col()
        .child(Element::text("One").id("one").focusable(true))
        .child(Element::text("Two").id("two").focusable(true));
    let layout = LayoutResult::new();

    let mut focus = FocusState::new();
    let tab = [CtEvent::Key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE))];

    let events = focus.process_events(&tab, &root, &sheet, &layout);
    assert_eq!(
        events,
        vec![Event::Focus {
            target: "one".to_string()
        }]
    );

    let events = focus.process_events(&tab, &root, &sheet, &layout);
    assert_eq!(
        events,
        vec![
            Event::Blur {
                target: "one".to_string()
            },
            Event::Focus {
                target: "two".to_string()
            },
        ]
    );
}

#[test]
fn test_process_events_escape_blurs_first() {
    let sheet = Stylesheet::bare();
    let root = Element::col().child(Element::text("One").id("one").focusable(true));
    let layout = LayoutResult::new();

    let mut focus = FocusState::new();
    focus.focus("one");

    let esc = [CtEvent::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE))];

    let events = focus.process_events(&esc, &root, &sheet, &layout);
    assert_eq!(
        events,
        vec![Event::Blur {
            target: "one".to_string()
        }]
    );
    assert_eq!(focus.focused(), None);

    // With nothing focused, Escape is delivered as a key event
    let events = focus.process_events(&esc, &root, &sheet, &layout);
    assert_eq!(events.len(), 1);
    assert!(matches!(
        &events[0],
        Event::Key {
            target: None,
            key: Key::Escape,
            ..
        }
    ));
}

#[test]
fn test_process_events_enter_activates_focused_clickable() {
    let sheet = Stylesheet::bare();
    let root = Element::col().child(
        Element::text("Control")
            .id("btn")
            .clickable(true)
            .focusable(true),
    );
    let layout = create_layout(&[("btn", Rect::new(10, 10, 30, 3))]);

    let mut focus = FocusState::new();
    focus.focus("btn");

    let enter = [CtEvent::Key(KeyEvent::new(
        KeyCode::Enter,
        KeyModifiers::NONE,
    ))];
    let events = focus.process_events(&enter, &root, &sheet, &layout);

    // Synthesized click lands at the control's center
    assert_eq!(
        events,
        vec![Event::Click {
            target: Some("btn".to_string()),
            x: 25,
            y: 11,
            button: MouseButton::Left,
        }]
    );
}

#[test]
fn test_process_events_enter_on_non_clickable_stays_a_key() {
    let sheet = Stylesheet::bare();
    let root = Element::col().child(Element::text("Label").id("label").focusable(true));
    let layout = LayoutResult::new();

    let mut focus = FocusState::new();
    focus.focus("label");

    let enter = [CtEvent::Key(KeyEvent::new(
        KeyCode::Enter,
        KeyModifiers::NONE,
    ))];
    let events = focus.process_events(&enter, &root, &sheet, &layout);

    assert_eq!(events.len(), 1);
    assert!(matches!(
        &events[0],
        Event::Key {
            target: Some(id),
            key: Key::Enter,
            ..
        } if id == "label"
    ));
}

#[test]
fn test_process_events_ignores_key_release() {
    let sheet = Stylesheet::bare();
    let root = Element::col().child(Element::text("One").id("one"));
    let layout = LayoutResult::new();

    let release = [CtEvent::Key(KeyEvent {
        code: KeyCode::Char('x'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    })];

    let mut focus = FocusState::new();
    let events = focus.process_events(&release, &root, &sheet, &layout);
    assert!(events.is_empty());
}

#[test]
fn test_process_events_resize_passes_through() {
    let sheet = Stylesheet::bare();
    let root = Element::col();
    let layout = LayoutResult::new();

    let raw = [CtEvent::Resize(120, 40)];

    let mut focus = FocusState::new();
    let events = focus.process_events(&raw, &root, &sheet, &layout);
    assert_eq!(
        events,
        vec![Event::Resize {
            width: 120,
            height: 40
        }]
    );
}
