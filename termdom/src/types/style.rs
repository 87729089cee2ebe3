use super::{Border, Color, TextStyle};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Style {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub border: Option<Border>,
    pub text_style: TextStyle,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn text_style(mut self, text_style: TextStyle) -> Self {
        self.text_style = text_style;
        self
    }

    pub fn bold(mut self) -> Self {
        self.text_style.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.text_style.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.text_style.underline = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.text_style.dim = true;
        self
    }

    /// Overlay `over` on top of this style. Set fields in `over` win;
    /// text style flags are additive.
    pub fn overlaid(&self, over: &Style) -> Style {
        Style {
            background: over.background.or(self.background),
            foreground: over.foreground.or(self.foreground),
            border: over.border.or(self.border),
            text_style: TextStyle {
                bold: self.text_style.bold || over.text_style.bold,
                italic: self.text_style.italic || over.text_style.italic,
                underline: self.text_style.underline || over.text_style.underline,
                dim: self.text_style.dim || over.text_style.dim,
            },
        }
    }

    /// The border to draw, `Border::None` when unset.
    pub fn border_kind(&self) -> Border {
        self.border.unwrap_or(Border::None)
    }
}
