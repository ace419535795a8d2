use serde::{Deserialize, Serialize};

/// Visual settings for the rendered scatter plot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlotStyle {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Space between canvas edge and plot frame, in pixels
    pub margin: f64,
    /// Fraction of the data span added on each side of the data bounds
    pub padding: f64,
    pub marker_radius: f64,
    pub font_size: f64,
    pub token_color: String,
    pub power_color: String,
    pub background: String,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            margin: 48.0,
            padding: 0.05,
            marker_radius: 4.0,
            font_size: 11.0,
            token_color: "red".to_string(),
            power_color: "blue".to_string(),
            background: "white".to_string(),
        }
    }
}

impl PlotStyle {
    /// Checks that the canvas leaves room for a plot area
    pub fn validate(&self) -> Result<(), String> {
        let inner_w = f64::from(self.width) - 2.0 * self.margin;
        let inner_h = f64::from(self.height) - 2.0 * self.margin;
        if inner_w <= 0.0 || inner_h <= 0.0 {
            return Err(format!(
                "plot area is empty: {}x{} canvas with margin {}",
                self.width, self.height, self.margin
            ));
        }
        if self.padding < 0.0 {
            return Err(format!("padding must not be negative, got {}", self.padding));
        }
        Ok(())
    }
}
