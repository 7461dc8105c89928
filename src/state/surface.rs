// Text rendering surface the pinch scaler drives.

/// Rendering hints toggled while a touch is in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderHints {
    pub linear_text: bool,
    pub subpixel_text: bool,
}

impl RenderHints {
    pub const NONE: RenderHints = RenderHints {
        linear_text: false,
        subpixel_text: false,
    };
    pub const SCALING: RenderHints = RenderHints {
        linear_text: true,
        subpixel_text: true,
    };
}

pub trait TextSurface {
    fn font_size(&self) -> f32;
    fn set_font_size(&mut self, size: f32);
    fn set_render_hints(&mut self, hints: RenderHints);
}

/// In-memory surface rendered as inline CSS by the text component.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size: f32,
    pub hints: RenderHints,
}

impl TextStyle {
    pub fn new(font_size: f32) -> Self {
        Self {
            font_size,
            hints: RenderHints::NONE,
        }
    }

    pub fn to_css(&self) -> String {
        let mut css = format!("font-size:{}px;", self.font_size);
        if self.hints.linear_text {
            css.push_str(" text-rendering:geometricPrecision;");
        }
        if self.hints.subpixel_text {
            css.push_str(" -webkit-font-smoothing:subpixel-antialiased;");
        }
        css
    }
}

impl TextSurface for TextStyle {
    fn font_size(&self) -> f32 {
        self.font_size
    }

    fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    fn set_render_hints(&mut self, hints: RenderHints) {
        self.hints = hints;
    }
}
