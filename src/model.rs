use chrono::{DateTime, Utc};

/// Points per millimetre. All layout values are in millimetres.
pub const PT_PER_MM: f32 = 72.0 / 25.4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageLayout {
    pub page_width: f32,
    pub page_height: f32,
    pub margin_left: f32,
    pub margin_top: f32,
    pub margin_right: f32,
    pub margin_bottom: f32, // page break trigger distance from the bottom edge
    pub auto_page_break: bool,
    pub cell_margin: f32,
}

impl Default for PageLayout {
    // A4 portrait, 1 cm margins
    fn default() -> Self {
        PageLayout {
            page_width: 210.0,
            page_height: 297.0,
            margin_left: 10.0,
            margin_top: 10.0,
            margin_right: 10.0,
            margin_bottom: 15.0,
            auto_page_break: true,
            cell_margin: 1.0,
        }
    }
}

impl PageLayout {
    pub fn page_break_trigger(&self) -> f32 {
        self.page_height - self.margin_bottom
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub font: BuiltinFont,
    pub font_size: f32,   // points
    pub line_height: f32, // millimetres
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            font: BuiltinFont::Helvetica,
            font_size: 10.0,
            line_height: 5.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuiltinFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    Courier,
}

impl BuiltinFont {
    pub fn base_name(self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "Helvetica",
            BuiltinFont::HelveticaBold => "Helvetica-Bold",
            BuiltinFont::HelveticaOblique => "Helvetica-Oblique",
            BuiltinFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
            BuiltinFont::Courier => "Courier",
        }
    }
}

impl std::str::FromStr for BuiltinFont {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "helvetica" | "arial" => Ok(BuiltinFont::Helvetica),
            "helvetica-bold" => Ok(BuiltinFont::HelveticaBold),
            "helvetica-oblique" => Ok(BuiltinFont::HelveticaOblique),
            "helvetica-boldoblique" => Ok(BuiltinFont::HelveticaBoldOblique),
            "courier" => Ok(BuiltinFont::Courier),
            _ => Err(format!("unsupported font: {s}")),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Metadata {
    pub title: Option<String>,
    /// `None` means the time of rendering.
    pub creation_date: Option<DateTime<Utc>>,
}

pub struct Document {
    pub text: String,
    pub layout: PageLayout,
    pub style: TextStyle,
    pub metadata: Metadata,
}
