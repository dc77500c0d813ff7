use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Brand color in light mode. Also the Windows tile color.
pub const BRAND_LIGHT: &str = "#f46e0c";
pub const BRAND_DARK: &str = "#e55502";

/// `theme-color` for one color scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColor {
    pub media: String,
    pub color: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum ViewportError {
    #[error("maximum scale {maximum} is below initial scale {initial}")]
    ScaleInverted { initial: f32, maximum: f32 },
    #[error("user scaling must stay enabled")]
    ScalingDisabled,
}

/// Viewport descriptor consumed by the browser chrome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: String,
    pub initial_scale: f32,
    pub maximum_scale: f32,
    pub user_scalable: bool,
    pub theme_colors: Vec<ThemeColor>,
    pub color_scheme: String,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: "device-width".to_string(),
            initial_scale: 1.0,
            maximum_scale: 5.0,
            user_scalable: true,
            theme_colors: vec![
                ThemeColor {
                    media: "(prefers-color-scheme: light)".to_string(),
                    color: BRAND_LIGHT.to_string(),
                },
                ThemeColor {
                    media: "(prefers-color-scheme: dark)".to_string(),
                    color: BRAND_DARK.to_string(),
                },
            ],
            color_scheme: "light dark".to_string(),
        }
    }
}

impl Viewport {
    pub fn validate(&self) -> Result<(), ViewportError> {
        if self.maximum_scale < self.initial_scale {
            return Err(ViewportError::ScaleInverted {
                initial: self.initial_scale,
                maximum: self.maximum_scale,
            });
        }
        if !self.user_scalable {
            return Err(ViewportError::ScalingDisabled);
        }
        Ok(())
    }

    /// Content of `<meta name="viewport">`.
    pub fn content(&self) -> String {
        format!(
            "width={}, initial-scale={}, maximum-scale={}, user-scalable={}",
            self.width,
            self.initial_scale,
            self.maximum_scale,
            if self.user_scalable { "yes" } else { "no" }
        )
    }
}
