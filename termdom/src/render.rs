use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::stylesheet::Stylesheet;
use crate::text::{char_width, display_width, truncate_to_width};
use crate::types::{Border, Rgb, Style, TextAlign};

/// Draw the tree into the buffer. Each element's effective style comes
/// from the stylesheet cascade with inline styles layered on top.
/// Hidden subtrees produce no cells.
pub fn render_to_buffer(
    element: &Element,
    layout: &LayoutResult,
    sheet: &Stylesheet,
    buf: &mut Buffer,
) {
    render_element(element, layout, sheet, buf);
}

fn render_element(element: &Element, layout: &LayoutResult, sheet: &Stylesheet, buf: &mut Buffer) {
    if !sheet.is_visible(element) {
        return;
    }

    let Some(rect) = layout.get(&element.id) else {
        return;
    };

    let style = sheet.style_of(element);

    // Render background if set
    if let Some(bg) = &style.background {
        buf.fill_bg(*rect, bg.to_rgb());
    }

    // Render border if set
    render_border(&style, *rect, buf);

    // Render content
    match &element.content {
        Content::None => {}
        Content::Text(text) => {
            render_text(text, element, &style, *rect, buf);
        }
        Content::Children(children) => {
            for child in children {
                render_element(child, layout, sheet, buf);
            }
        }
    }
}

fn render_text(text: &str, element: &Element, style: &Style, rect: Rect, buf: &mut Buffer) {
    let fg = style
        .foreground
        .as_ref()
        .map(|c| c.to_rgb())
        .unwrap_or(Rgb::new(255, 255, 255));

    let explicit_bg = style.background.as_ref().map(|c| c.to_rgb());

    let border_size = if style.border_kind() == Border::None {
        0
    } else {
        1
    };

    let inner = rect.inset(element.padding, border_size);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let max_width = inner.width as usize;

    for (line_idx, line) in text.lines().enumerate() {
        let y = inner.y + line_idx as u16;
        if y >= inner.bottom() {
            break;
        }

        let line = truncate_to_width(line, max_width);
        let line_width = display_width(&line);

        let x_offset = match element.text_align {
            TextAlign::Left => 0,
            TextAlign::Center => max_width.saturating_sub(line_width) / 2,
            TextAlign::Right => max_width.saturating_sub(line_width),
        } as u16;

        let mut x = inner.x + x_offset;

        for ch in line.chars() {
            let ch_w = char_width(ch);

            // Zero-width char (combining mark, etc.) - attach to previous cell
            if ch_w == 0 {
                continue;
            }

            if x + ch_w as u16 > inner.right() {
                break;
            }

            // Preserve existing background if no explicit background set
            let bg = explicit_bg
                .unwrap_or_else(|| buf.get(x, y).map(|c| c.bg).unwrap_or(Rgb::new(0, 0, 0)));

            buf.set(x, y, Cell::styled(ch, fg, bg, style.text_style));

            // For wide chars (CJK), fill the next cell with a continuation marker
            if ch_w == 2 && x + 1 < inner.right() {
                buf.set(x + 1, y, Cell::continuation(fg, bg, style.text_style));
            }

            x += ch_w as u16;
        }
    }
}

fn render_border(style: &Style, rect: Rect, buf: &mut Buffer) {
    let (tl, tr, bl, br, h, v) = match style.border_kind() {
        Border::None => return,
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Double => ('╔', '╗', '╚', '╝', '═', '║'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
    };

    let fg = style
        .foreground
        .as_ref()
        .map(|c| c.to_rgb())
        .unwrap_or(Rgb::new(255, 255, 255));

    if rect.width < 2 || rect.height < 2 {
        return;
    }

    // Corners
    buf.put_char(rect.x, rect.y, tl, fg);
    buf.put_char(rect.right() - 1, rect.y, tr, fg);
    buf.put_char(rect.x, rect.bottom() - 1, bl, fg);
    buf.put_char(rect.right() - 1, rect.bottom() - 1, br, fg);

    // Horizontal lines
    for x in (rect.x + 1)..(rect.right() - 1) {
        buf.put_char(x, rect.y, h, fg);
        buf.put_char(x, rect.bottom() - 1, h, fg);
    }

    // Vertical lines
    for y in (rect.y + 1)..(rect.bottom() - 1) {
        buf.put_char(rect.x, y, v, fg);
        buf.put_char(rect.right() - 1, y, v, fg);
    }
}
