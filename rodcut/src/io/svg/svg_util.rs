use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SvgDrawOptions {
    #[serde(default)]
    pub theme: SvgRodThemes,
    /// Width of a single unit of rod length
    pub unit_width: f64,
    /// Height of the drawn rod
    pub rod_height: f64,
    /// Writes the length of every piece inside it
    pub piece_labels: bool,
    /// Draws a dashed marker at every cut position
    pub cut_markers: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgRodThemes::default(),
            unit_width: 40.0,
            rod_height: 30.0,
            piece_labels: true,
            cut_markers: true,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub enum SvgRodThemes {
    #[default]
    EarthTones,
    Gray,
}

impl SvgRodThemes {
    pub fn get_theme(&self) -> SvgRodTheme {
        match self {
            SvgRodThemes::EarthTones => EARTH_TONES_THEME,
            SvgRodThemes::Gray => GRAY_THEME,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SvgRodTheme {
    pub stroke_width: f64,
    pub background_fill: &'static str,
    /// Pieces cycle through these fills
    pub piece_fills: [&'static str; 3],
    pub cut_stroke: &'static str,
    pub text_fill: &'static str,
}

pub static EARTH_TONES_THEME: SvgRodTheme = SvgRodTheme {
    stroke_width: 1.0,
    background_fill: "#FAF8F2",
    piece_fills: ["#CC824A", "#D9A066", "#8F5E3B"],
    cut_stroke: "#B22222",
    text_fill: "#1F1F1F",
};

pub static GRAY_THEME: SvgRodTheme = SvgRodTheme {
    stroke_width: 1.0,
    background_fill: "#FFFFFF",
    piece_fills: ["#A0A0A0", "#C8C8C8", "#787878"],
    cut_stroke: "#000000",
    text_fill: "#000000",
};
