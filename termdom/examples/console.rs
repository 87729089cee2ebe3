use std::fs::File;

use crossterm::event::{Event as CtEvent, KeyCode, KeyEventKind};
use simplelog::{Config, LevelFilter, WriteLogger};
use termdom::{Border, Color, Document, Edges, Element, FocusState, Justify, Size, Style, Terminal};

/// Document console: a project sidebar and an audit-log filter strip, both
/// collapsible. The sidebar toggle targets its panel by id, the filter toggle
/// by class, so this doubles as a live tour of the selector engine.
fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("console.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut term = Terminal::new()?;
    let mut doc = Document::mount(ui());
    let mut focus = FocusState::new();

    loop {
        term.render(&doc)?;

        let raw = term.poll(None)?;

        for event in &raw {
            if let CtEvent::Key(key_event) = event {
                if key_event.kind == KeyEventKind::Press && key_event.code == KeyCode::Char('q') {
                    return Ok(());
                }
            }
        }

        let events = focus.process_events(&raw, doc.root(), doc.stylesheet(), term.layout());
        for event in &events {
            doc.dispatch(event);
        }
    }
}

fn ui() -> Element {
    Element::col()
        .id("console")
        .width(Size::Fill)
        .height(Size::Fill)
        .style(Style::new().background(Color::oklch(0.16, 0.02, 250.0)))
        .child(header())
        .child(
            Element::row()
                .id("main")
                .width(Size::Fill)
                .height(Size::Fill)
                .child(sidebar())
                .child(document_list()),
        )
        .child(audit_strip())
        .child(
            Element::text("Tab moves focus, Enter or click toggles a panel, 'q' quits")
                .style(Style::new().dim())
                .margin(Edges::horizontal(1)),
        )
}

fn header() -> Element {
    Element::row()
        .id("header")
        .width(Size::Fill)
        .height(Size::Fixed(1))
        .justify(Justify::SpaceBetween)
        .style(Style::new().background(Color::oklch(0.3, 0.05, 250.0)))
        .child(Element::text("dataroom console").style(Style::new().bold()))
        .child(Element::text("signed in as m.okafor"))
}

fn sidebar() -> Element {
    Element::col()
        .id("sidebar")
        .width(Size::Fixed(24))
        .height(Size::Fill)
        .style(Style::new().background(Color::oklch(0.2, 0.03, 250.0)))
        .child(
            Element::text("Projects")
                .id("toggle-projects")
                .attr("data-toggle", "collapse")
                .attr("data-target", "#panel-projects")
                .width(Size::Fill)
                .style(Style::new().bold().background(Color::oklch(0.28, 0.05, 250.0))),
        )
        .child(
            Element::col()
                .id("panel-projects")
                .classes("collapse show")
                .width(Size::Fill)
                .padding(Edges::horizontal(1))
                .child(Element::text("Finance / FY2026"))
                .child(Element::text("Legal / contracts"))
                .child(Element::text("HR / onboarding"))
                .child(Element::text("Engineering / rfcs")),
        )
}

fn document_list() -> Element {
    Element::col()
        .id("documents")
        .width(Size::Fill)
        .height(Size::Fill)
        .padding(Edges::all(1))
        .child(Element::text("Finance / FY2026").style(Style::new().bold()))
        .child(Element::text(""))
        .child(doc_row("annual-report-2026.pdf", "v3", "today 14:02"))
        .child(doc_row("budget-draft.xlsx", "v7", "today 11:48"))
        .child(doc_row("board-minutes-jan.md", "v1", "yesterday"))
        .child(doc_row("audit-checklist.md", "v2", "2026-02-10"))
}

fn doc_row(name: &str, version: &str, changed: &str) -> Element {
    Element::row()
        .gap(2)
        .child(Element::text(name).width(Size::Fixed(28)))
        .child(
            Element::text(version)
                .width(Size::Fixed(4))
                .style(Style::new().foreground(Color::oklch(0.75, 0.1, 150.0))),
        )
        .child(Element::text(changed).style(Style::new().dim()))
}

fn audit_strip() -> Element {
    Element::col()
        .id("audit")
        .width(Size::Fill)
        .style(Style::new().border(Border::Single))
        .child(
            Element::text("Audit log filters")
                .id("toggle-filters")
                .attr("data-toggle", "collapse")
                .attr("data-target", ".audit-filters")
                .width(Size::Fill)
                .style(Style::new().bold()),
        )
        .child(
            Element::col()
                .id("panel-filters")
                .classes("audit-filters collapse")
                .width(Size::Fill)
                .padding(Edges::horizontal(1))
                .child(filter_row("actor", "anyone"))
                .child(filter_row("action", "upload, checkout, delete"))
                .child(filter_row("since", "30 days")),
        )
}

fn filter_row(label: &str, value: &str) -> Element {
    Element::row()
        .gap(1)
        .child(
            Element::text(label)
                .width(Size::Fixed(8))
                .style(Style::new().foreground(Color::oklch(0.75, 0.1, 60.0))),
        )
        .child(Element::text(value))
}
