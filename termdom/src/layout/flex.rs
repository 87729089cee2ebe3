use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::stylesheet::Stylesheet;
use crate::text::display_width;
use crate::types::{Align, Border, Direction, Justify, Size};

pub type LayoutResult = HashMap<String, Rect>;

/// Compute rects for every visible element in the tree.
/// Hidden subtrees (display none) get no rect and occupy no space,
/// so collapsing a panel reflows its siblings.
pub fn layout(element: &Element, available: Rect, sheet: &Stylesheet) -> LayoutResult {
    let mut result = LayoutResult::new();
    layout_element(element, available, sheet, &mut result);
    result
}

fn layout_element(
    element: &Element,
    available: Rect,
    sheet: &Stylesheet,
    result: &mut LayoutResult,
) {
    if !sheet.is_visible(element) {
        return;
    }

    // Margins come out of available space before anything else
    let after_margin = available.shrink(element.margin);

    // Calculate this element's size within margin-adjusted space
    let width = resolve_size(element.width, after_margin.width, element, sheet, true);
    let height = resolve_size(element.height, after_margin.height, element, sheet, false);
    let rect = Rect::new(after_margin.x, after_margin.y, width, height);
    result.insert(element.id.clone(), rect);

    layout_children(element, rect, sheet, result);
}

fn layout_children(element: &Element, rect: Rect, sheet: &Stylesheet, result: &mut LayoutResult) {
    let Content::Children(children) = &element.content else {
        return;
    };

    // Hidden children take no space and get no rect
    let flow_children: Vec<_> = children.iter().filter(|c| sheet.is_visible(c)).collect();

    if flow_children.is_empty() {
        return;
    }

    // Account for border
    let border_size = if sheet.style_of(element).border_kind() == Border::None {
        0
    } else {
        1
    };

    let inner = rect.inset(element.padding, border_size);

    let is_row = element.direction == Direction::Row;
    let main_size = if is_row { inner.width } else { inner.height };
    let cross_size = if is_row { inner.height } else { inner.width };

    // First pass: calculate fixed sizes and count flex items
    let mut fixed_total = 0u16;
    let mut flex_count = 0u16;
    let gap_total = element.gap * flow_children.len().saturating_sub(1) as u16;

    for child in &flow_children {
        // Account for child's margin in main axis
        let child_margin_main = if is_row {
            child.margin.left + child.margin.right
        } else {
            child.margin.top + child.margin.bottom
        };

        let child_main_size = if is_row { child.width } else { child.height };
        match child_main_size {
            Size::Fixed(n) => fixed_total += n + child_margin_main,
            Size::Auto => {
                // For auto, estimate based on content
                let estimated = estimate_size(child, sheet, is_row);
                fixed_total += estimated + child_margin_main;
            }
            Size::Fill => flex_count += 1,
            Size::Percent(p) => fixed_total += (main_size as f32 * p) as u16 + child_margin_main,
        }
    }

    // Calculate remaining space for flex items
    let remaining = main_size.saturating_sub(fixed_total + gap_total);
    let flex_size = if flex_count > 0 {
        remaining / flex_count
    } else {
        0
    };

    // Calculate child sizes first (including margins)
    let mut child_sizes: Vec<(u16, u16, u16)> = Vec::with_capacity(flow_children.len()); // (main, margin_before, margin_after)
    let mut total_child_size = 0u16;

    for child in &flow_children {
        let (margin_before, margin_after) = if is_row {
            (child.margin.left, child.margin.right)
        } else {
            (child.margin.top, child.margin.bottom)
        };

        let child_main_size = if is_row { child.width } else { child.height };

        let main = match child_main_size {
            Size::Fixed(n) => n,
            Size::Auto => estimate_size(child, sheet, is_row),
            Size::Fill => flex_size,
            Size::Percent(p) => (main_size as f32 * p) as u16,
        };

        child_sizes.push((main, margin_before, margin_after));
        total_child_size += main + margin_before + margin_after;
    }

    // Calculate justify spacing
    let total_with_gaps = total_child_size + gap_total;
    let extra_space = main_size.saturating_sub(total_with_gaps);

    let (start_offset, between_gap) = match element.justify {
        Justify::Start => (0, element.gap),
        Justify::End => (extra_space, element.gap),
        Justify::Center => (extra_space / 2, element.gap),
        Justify::SpaceBetween => {
            if flow_children.len() > 1 {
                (0, extra_space / (flow_children.len() - 1) as u16 + element.gap)
            } else {
                (0, element.gap)
            }
        }
    };

    // Second pass: assign rects to children with justify
    let mut offset = start_offset;

    for (i, child) in flow_children.iter().enumerate() {
        let (main, margin_before, margin_after) = child_sizes[i];

        // Account for cross-axis margin
        let (cross_margin_before, cross_margin_after) = if is_row {
            (child.margin.top, child.margin.bottom)
        } else {
            (child.margin.left, child.margin.right)
        };

        let child_cross_size = if is_row { child.height } else { child.width };
        let available_cross = cross_size.saturating_sub(cross_margin_before + cross_margin_after);

        let cross = match child_cross_size {
            Size::Fixed(n) => n,
            Size::Fill => available_cross,
            Size::Auto => {
                if element.align == Align::Stretch {
                    available_cross
                } else {
                    estimate_size(child, sheet, !is_row).min(available_cross)
                }
            }
            Size::Percent(p) => (cross_size as f32 * p) as u16,
        };

        // Clamp to available space
        let clamped_main = main.min(main_size.saturating_sub(offset + margin_before));
        let clamped_cross = cross.min(available_cross);

        // Calculate cross-axis offset based on alignment
        let cross_offset = match element.align {
            Align::Start | Align::Stretch => cross_margin_before,
            Align::Center => {
                cross_margin_before + (available_cross.saturating_sub(clamped_cross)) / 2
            }
            Align::End => cross_margin_before + available_cross.saturating_sub(clamped_cross),
        };

        let child_rect = if is_row {
            Rect::new(
                inner.x + offset + margin_before,
                inner.y + cross_offset,
                clamped_main,
                clamped_cross,
            )
        } else {
            Rect::new(
                inner.x + cross_offset,
                inner.y + offset + margin_before,
                clamped_cross,
                clamped_main,
            )
        };

        // Insert child rect directly (parent has determined dimensions)
        result.insert(child.id.clone(), child_rect);
        // Recurse for grandchildren
        layout_children(child, child_rect, sheet, result);

        offset += margin_before + main + margin_after + between_gap;
    }
}

fn resolve_size(
    size: Size,
    available: u16,
    element: &Element,
    sheet: &Stylesheet,
    is_width: bool,
) -> u16 {
    match size {
        Size::Fixed(n) => n.min(available),
        Size::Fill => available,
        Size::Auto => estimate_size(element, sheet, is_width).min(available),
        Size::Percent(p) => ((available as f32 * p) as u16).min(available),
    }
}

fn estimate_size(element: &Element, sheet: &Stylesheet, is_width: bool) -> u16 {
    let border_size = if sheet.style_of(element).border_kind() == Border::None {
        0
    } else {
        2
    };
    let padding = if is_width {
        element.padding.horizontal_total()
    } else {
        element.padding.vertical_total()
    };

    let content_size = match &element.content {
        Content::Text(text) => {
            if is_width {
                display_width(text) as u16
            } else {
                // Count newlines for height
                text.lines().count().max(1) as u16
            }
        }
        Content::Children(children) => {
            let visible: Vec<_> = children.iter().filter(|c| sheet.is_visible(c)).collect();
            if visible.is_empty() {
                0
            } else if element.direction == Direction::Row && is_width
                || element.direction == Direction::Column && !is_width
            {
                // Sum along main axis
                let gap_total = element.gap * (visible.len().saturating_sub(1)) as u16;
                visible
                    .iter()
                    .map(|c| estimate_size(c, sheet, is_width))
                    .sum::<u16>()
                    + gap_total
            } else {
                // Max along cross axis
                visible
                    .iter()
                    .map(|c| estimate_size(c, sheet, is_width))
                    .max()
                    .unwrap_or(0)
            }
        }
        Content::None => 0,
    };

    content_size + padding + border_size
}
