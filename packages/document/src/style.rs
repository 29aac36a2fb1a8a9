//! Element style record.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

/// Visual style of an element.
///
/// Every field except `z_index` is optional so that absent keys in a project
/// file stay absent when it is written back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    /// Stacking order; higher values paint on top.
    #[serde(default)]
    pub z_index: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
}

impl ElementStyle {
    /// Overlay every field that is set in `overrides`. `z_index` is kept.
    pub fn merged(mut self, overrides: &ElementStyle) -> Self {
        fn take<T: Clone>(slot: &mut Option<T>, value: &Option<T>) {
            if let Some(v) = value {
                *slot = Some(v.clone());
            }
        }

        take(&mut self.font_size, &overrides.font_size);
        take(&mut self.font_weight, &overrides.font_weight);
        take(&mut self.color, &overrides.color);
        take(&mut self.background_color, &overrides.background_color);
        take(&mut self.font_family, &overrides.font_family);
        take(&mut self.text_align, &overrides.text_align);
        take(&mut self.border_radius, &overrides.border_radius);
        take(&mut self.border_width, &overrides.border_width);
        take(&mut self.border_color, &overrides.border_color);
        take(&mut self.box_shadow, &overrides.box_shadow);
        self
    }
}
