//! Visual configuration of the CV template.

use std::str::FromStr;

/// Colour palette of the document.
#[derive(Debug, Clone)]
pub struct Palette {
    pub primary_dark: &'static str,
    pub primary: &'static str,
    pub accent: &'static str,
    pub navy: &'static str,
    pub gold: &'static str,
    pub text_dark: &'static str,
    pub text_muted: &'static str,
    pub line: &'static str,
    pub background: &'static str,
    pub white: &'static str,
    pub positive: &'static str,
    pub negative: &'static str,
    pub pending: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary_dark: "#3D1A5C",
            primary: "#5B2D8E",
            accent: "#9B6FC2",
            navy: "#1A1A3E",
            gold: "#C9A84C",
            text_dark: "#2D2D2D",
            text_muted: "#666666",
            line: "#E0E0E8",
            background: "#F4F4F8",
            white: "#FFFFFF",
            positive: "#2E7D32",
            negative: "#C62828",
            pending: "#E69500",
        }
    }
}

/// Box size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

/// Layout knobs that differ between visual styles.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    pub name: &'static str,
    pub palette: Palette,
    pub profile_photo: Size,
    pub full_photo: Size,
    pub skills_panel_width: u32,
    pub passport_max_width: u32,
    /// Multiplier applied to every font size.
    pub font_scale: f32,
    pub skill_segments: usize,
}

impl LayoutConfig {
    pub fn standard() -> Self {
        Self {
            name: "standard",
            palette: Palette::default(),
            profile_photo: Size { width: 105, height: 125 },
            full_photo: Size { width: 195, height: 265 },
            skills_panel_width: 205,
            passport_max_width: 540,
            font_scale: 1.0,
            skill_segments: 4,
        }
    }

    /// Denser text and smaller photos, for records with long experience lists.
    pub fn compact() -> Self {
        Self {
            name: "compact",
            palette: Palette::default(),
            profile_photo: Size { width: 90, height: 108 },
            full_photo: Size { width: 175, height: 215 },
            skills_panel_width: 190,
            passport_max_width: 500,
            font_scale: 0.9,
            skill_segments: 4,
        }
    }

    /// Scaled font size in px, formatted for CSS.
    pub fn font(&self, px: f32) -> String {
        format!("{:.1}px", px * self.font_scale)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl FromStr for LayoutConfig {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "standard" => Ok(Self::standard()),
            "compact" => Ok(Self::compact()),
            other => Err(format!("unknown layout '{other}'")),
        }
    }
}

/// Organization details printed in the header and footer bands.
#[derive(Debug, Clone)]
pub struct Branding {
    pub name_ar: String,
    pub name_en: String,
    pub phones: Vec<String>,
    pub email: String,
    pub address_ar: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            name_ar: "حنين الشرق للإستقدام".to_string(),
            name_en: "Haneen Al Sharq Recruitment".to_string(),
            phones: vec![
                "050 235 5630".to_string(),
                "055 882 6167".to_string(),
                "053 501 8898".to_string(),
                "055 674 2038".to_string(),
            ],
            email: "Haneenalsharq11@gmail.com".to_string(),
            address_ar: "الرياض، حي النهضة، شارع سلمان الفارسي".to_string(),
        }
    }
}
