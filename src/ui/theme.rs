use crate::buffer::Annotation;
use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border: Color,
    pub panel_bg: Color,
    pub bar: Color,       // Idle bars
    pub comparing: Color, // Yellow
    pub mutating: Color,  // Red
    pub settled: Color,   // Green
}

impl Theme {
    /// Bar colour for an annotation
    pub fn bar_color(&self, annotation: Annotation) -> Color {
        match annotation {
            Annotation::Idle => self.bar,
            Annotation::Comparing => self.comparing,
            Annotation::Mutating => self.mutating,
            Annotation::Settled => self.settled,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(10, 12, 20),
    fg: Color::Rgb(220, 224, 240),
    primary: Color::Rgb(99, 155, 255),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(120, 128, 160),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border: Color::Rgb(40, 44, 70),
    panel_bg: Color::Rgb(18, 20, 34),
    bar: Color::Rgb(70, 130, 210),
    comparing: Color::Rgb(255, 210, 60),
    mutating: Color::Rgb(255, 90, 90),
    settled: Color::Rgb(80, 230, 130),
};
