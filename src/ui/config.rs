use eframe::egui::Color32;

use crate::models::RecommendationTier;

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub bullish: Color32,
    pub bearish: Color32,
    pub neutral: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub side_panel_min_width: f32,
    pub id_field_width: f32,
}

impl UiConfig {
    pub fn tier_color(&self, tier: RecommendationTier) -> Color32 {
        match tier {
            RecommendationTier::StrongBuy | RecommendationTier::Buy => self.colors.bullish,
            RecommendationTier::Neutral => self.colors.neutral,
            RecommendationTier::Sell | RecommendationTier::StrongSell => self.colors.bearish,
        }
    }
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,     // This sets every label globally to this color
        heading: Color32::YELLOW, // Sets every heading
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(30, 30, 36),
        side_panel: Color32::from_rgb(25, 25, 25),
        bullish: Color32::from_rgb(130, 200, 140),
        bearish: Color32::from_rgb(230, 110, 110),
        neutral: Color32::LIGHT_GRAY,
    },
    side_panel_min_width: 180.0,
    id_field_width: 80.0,
};
