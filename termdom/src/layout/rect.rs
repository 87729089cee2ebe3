use crate::types::Edges;

/// A laid-out region in terminal cells. Layout produces one per visible
/// element; hit testing and rendering consume them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rect at the origin, the usual shape of the layout root.
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    /// Shrink by per-side amounts, moving the origin inward. This is how
    /// margins are taken out of available space.
    pub fn shrink(self, edges: Edges) -> Self {
        Self {
            x: self.x.saturating_add(edges.left),
            y: self.y.saturating_add(edges.top),
            width: self.width.saturating_sub(edges.horizontal_total()),
            height: self.height.saturating_sub(edges.vertical_total()),
        }
    }

    /// The content box: padding plus a uniform border width off every side.
    pub fn inset(self, padding: Edges, border: u16) -> Self {
        Self {
            x: self.x.saturating_add(padding.left + border),
            y: self.y.saturating_add(padding.top + border),
            width: self
                .width
                .saturating_sub(padding.horizontal_total() + border * 2),
            height: self
                .height
                .saturating_sub(padding.vertical_total() + border * 2),
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Center point, where keyboard activation lands its synthesized click.
    pub const fn center(&self) -> (u16, u16) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }
}
