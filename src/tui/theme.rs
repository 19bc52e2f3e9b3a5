use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::{Compliance, Criticality, UiConfig};

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub cyan: Color,
    pub selection_bg: Color,
    pub panel_border: Color,
    /// Keyed by criticality label
    pub criticality_colors: HashMap<String, Color>,
    /// Keyed by compliance label
    pub compliance_colors: HashMap<String, Color>,
}

impl Default for Theme {
    fn default() -> Self {
        let red = Color::Rgb(0xFF, 0x44, 0x44);
        let yellow = Color::Rgb(0xFF, 0xD7, 0x00);
        let green = Color::Rgb(0x44, 0xFF, 0x88);

        let mut criticality_colors = HashMap::new();
        criticality_colors.insert(Criticality::High.label().to_string(), red);
        criticality_colors.insert(Criticality::Medium.label().to_string(), yellow);
        criticality_colors.insert(Criticality::Low.label().to_string(), green);

        let mut compliance_colors = HashMap::new();
        compliance_colors.insert(Compliance::Compliant.label().to_string(), green);
        compliance_colors.insert(Compliance::NonCompliant.label().to_string(), red);
        compliance_colors.insert(Compliance::Pending.label().to_string(), yellow);

        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            red,
            yellow,
            green,
            cyan: Color::Rgb(0x44, 0xDD, 0xFF),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
            panel_border: Color::Rgb(0xFB, 0x41, 0x96),
            criticality_colors,
            compliance_colors,
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from the UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                tracing::debug!(key = %key, value = %value, "ignoring invalid color");
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "highlight" => theme.highlight = color,
                "dim" => theme.dim = color,
                "red" => theme.red = color,
                "yellow" => theme.yellow = color,
                "green" => theme.green = color,
                "cyan" => theme.cyan = color,
                "selection_bg" => theme.selection_bg = color,
                "panel_border" => theme.panel_border = color,
                _ => {}
            }
        }

        for (label, value) in &ui.criticality_colors {
            if let Some(color) = parse_hex_color(value) {
                theme.criticality_colors.insert(label.clone(), color);
            }
        }
        for (label, value) in &ui.compliance_colors {
            if let Some(color) = parse_hex_color(value) {
                theme.compliance_colors.insert(label.clone(), color);
            }
        }

        theme
    }

    pub fn criticality_color(&self, criticality: Criticality) -> Color {
        self.criticality_colors
            .get(criticality.label())
            .copied()
            .unwrap_or(self.text)
    }

    pub fn compliance_color(&self, compliance: Compliance) -> Color {
        self.compliance_colors
            .get(compliance.label())
            .copied()
            .unwrap_or(self.text)
    }
}
