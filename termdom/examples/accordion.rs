use std::fs::File;

use crossterm::event::{Event as CtEvent, KeyCode, KeyEventKind};
use simplelog::{Config, LevelFilter, WriteLogger};
use termdom::{Color, Document, Edges, Element, FocusState, Size, Style, Terminal};

/// Document detail page with accordion sections. Each section header is a
/// collapse control; clicking it (or Tab + Enter) folds the panel below.
fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("accordion.log")?;
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
        .id("detail")
        .width(Size::Fill)
        .height(Size::Fill)
        .style(Style::new().background(Color::oklch(0.18, 0.03, 260.0)))
        .padding(Edges::all(1))
        .gap(1)
        .child(
            Element::text("annual-report-2026.pdf")
                .style(Style::new().bold().foreground(Color::oklch(0.92, 0.05, 260.0))),
        )
        .child(section(
            "metadata",
            "Metadata",
            true,
            vec![
                row("Author", "M. Okafor"),
                row("Project", "Finance / FY2026"),
                row("Created", "2026-01-14 09:32"),
                row("Checked out", "no"),
            ],
        ))
        .child(section(
            "versions",
            "Versions",
            false,
            vec![
                row("v3", "2026-02-02  final numbers"),
                row("v2", "2026-01-28  board feedback"),
                row("v1", "2026-01-14  initial upload"),
            ],
        ))
        .child(section(
            "comments",
            "Comments",
            false,
            vec![
                row("M. Okafor", "Totals reconciled against the ledger."),
                row("J. Lindqvist", "Please re-run the Q3 figures."),
            ],
        ))
        .child(
            Element::text("Tab moves focus, Enter or click toggles a section, 'q' quits")
                .style(Style::new().dim()),
        )
}

fn section(slug: &str, title: &str, open: bool, rows: Vec<Element>) -> Element {
    let panel_classes = if open { "collapse show" } else { "collapse" };

    Element::col()
        .id(format!("section-{slug}"))
        .width(Size::Fill)
        .child(
            Element::text(title)
                .id(format!("toggle-{slug}"))
                .attr("data-toggle", "collapse")
                .attr("data-target", format!("#panel-{slug}"))
                .width(Size::Fill)
                .style(
                    Style::new()
                        .bold()
                        .background(Color::oklch(0.32, 0.06, 260.0))
                        .foreground(Color::oklch(0.95, 0.02, 260.0)),
                ),
        )
        .child(
            Element::col()
                .id(format!("panel-{slug}"))
                .classes(panel_classes)
                .width(Size::Fill)
                .padding(Edges::horizontal(2))
                .children(rows),
        )
}

fn row(label: &str, value: &str) -> Element {
    Element::row()
        .gap(2)
        .child(
            Element::text(label)
                .width(Size::Fixed(14))
                .style(Style::new().foreground(Color::oklch(0.75, 0.08, 150.0))),
        )
        .child(Element::text(value))
}
