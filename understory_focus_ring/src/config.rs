// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus ring configuration: the caller-facing patch and its resolved form.
//!
//! Callers supply a [`FocusConfigPatch`] with any subset of fields set.
//! [`FocusConfigPatch::resolve`] fills the rest from [`FocusConfig::default`].
//! Resolution is pure; the same patch always yields the same config.
//!
//! Values are not validated. Negative widths or gaps pass straight through to
//! the ring builders, which produce degenerate but well-formed output.

use crate::color::Color;

/// Strategy used to shape the rings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FocusVariant {
    /// Clone the target's own geometry and trace its outline.
    #[default]
    Adaptive,
    /// Enclose the target's visual bounds with axis-aligned rectangles.
    BoundingBox,
}

/// Fully resolved focus ring configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FocusConfig {
    /// Outer ring stroke color.
    pub outline_color: Color,
    /// Outer ring stroke width.
    pub outline_stroke_width: f64,
    /// Inner ring stroke color.
    pub inner_color: Color,
    /// Inner ring stroke width.
    pub inner_stroke_width: f64,
    /// Extra spacing between the target's edge and the inner ring.
    pub gap: f64,
    /// Ring strategy.
    pub variant: FocusVariant,
}

impl FocusConfig {
    /// Default outer ring color.
    pub const DEFAULT_OUTLINE_COLOR: Color = Color::BLACK;
    /// Default inner ring color.
    pub const DEFAULT_INNER_COLOR: Color = Color::WHITE;
    /// Default stroke width of either ring.
    pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;
    /// Default gap.
    pub const DEFAULT_GAP: f64 = 0.0;
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            outline_color: Self::DEFAULT_OUTLINE_COLOR,
            outline_stroke_width: Self::DEFAULT_STROKE_WIDTH,
            inner_color: Self::DEFAULT_INNER_COLOR,
            inner_stroke_width: Self::DEFAULT_STROKE_WIDTH,
            gap: Self::DEFAULT_GAP,
            variant: FocusVariant::default(),
        }
    }
}

/// Partial configuration as supplied by callers; unset fields take defaults.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FocusConfigPatch {
    /// See [`FocusConfig::outline_color`].
    pub outline_color: Option<Color>,
    /// See [`FocusConfig::outline_stroke_width`].
    pub outline_stroke_width: Option<f64>,
    /// See [`FocusConfig::inner_color`].
    pub inner_color: Option<Color>,
    /// See [`FocusConfig::inner_stroke_width`].
    pub inner_stroke_width: Option<f64>,
    /// See [`FocusConfig::gap`].
    pub gap: Option<f64>,
    /// See [`FocusConfig::variant`].
    pub variant: Option<FocusVariant>,
}

impl FocusConfigPatch {
    /// An empty patch; resolves to [`FocusConfig::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the outer ring color.
    pub fn with_outline_color(mut self, color: Color) -> Self {
        self.outline_color = Some(color);
        self
    }

    /// Set the outer ring stroke width.
    pub fn with_outline_stroke_width(mut self, width: f64) -> Self {
        self.outline_stroke_width = Some(width);
        self
    }

    /// Set the inner ring color.
    pub fn with_inner_color(mut self, color: Color) -> Self {
        self.inner_color = Some(color);
        self
    }

    /// Set the inner ring stroke width.
    pub fn with_inner_stroke_width(mut self, width: f64) -> Self {
        self.inner_stroke_width = Some(width);
        self
    }

    /// Set the gap.
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = Some(gap);
        self
    }

    /// Set the variant.
    pub fn with_variant(mut self, variant: FocusVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Fill unset fields from [`FocusConfig::default`].
    pub fn resolve(&self) -> FocusConfig {
        let d = FocusConfig::default();
        FocusConfig {
            outline_color: self.outline_color.unwrap_or(d.outline_color),
            outline_stroke_width: self.outline_stroke_width.unwrap_or(d.outline_stroke_width),
            inner_color: self.inner_color.unwrap_or(d.inner_color),
            inner_stroke_width: self.inner_stroke_width.unwrap_or(d.inner_stroke_width),
            gap: self.gap.unwrap_or(d.gap),
            variant: self.variant.unwrap_or(d.variant),
        }
    }
}

impl From<FocusConfigPatch> for FocusConfig {
    fn from(patch: FocusConfigPatch) -> Self {
        patch.resolve()
    }
}

impl From<FocusConfig> for FocusConfigPatch {
    fn from(config: FocusConfig) -> Self {
        Self {
            outline_color: Some(config.outline_color),
            outline_stroke_width: Some(config.outline_stroke_width),
            inner_color: Some(config.inner_color),
            inner_stroke_width: Some(config.inner_stroke_width),
            gap: Some(config.gap),
            variant: Some(config.variant),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_patch_resolves_to_defaults() {
        assert_eq!(FocusConfigPatch::new().resolve(), FocusConfig::default());
    }

    #[test]
    fn set_fields_win_and_others_default() {
        let cfg = FocusConfigPatch::new()
            .with_outline_stroke_width(4.0)
            .with_variant(FocusVariant::BoundingBox)
            .resolve();
        assert_eq!(cfg.outline_stroke_width, 4.0);
        assert_eq!(cfg.variant, FocusVariant::BoundingBox);
        assert_eq!(cfg.inner_stroke_width, FocusConfig::DEFAULT_STROKE_WIDTH);
        assert_eq!(cfg.gap, FocusConfig::DEFAULT_GAP);
        assert_eq!(cfg.inner_color, FocusConfig::DEFAULT_INNER_COLOR);
    }

    #[test]
    fn resolution_is_pure() {
        let patch = FocusConfigPatch::new().with_gap(3.0).with_inner_color(Color::BLACK);
        assert_eq!(patch.resolve(), patch.resolve());
    }

    #[test]
    fn resolved_config_round_trips_through_patch() {
        let cfg = FocusConfigPatch::new().with_gap(1.5).resolve();
        assert_eq!(FocusConfigPatch::from(cfg).resolve(), cfg);
    }

    #[test]
    fn negative_values_pass_through() {
        let cfg = FocusConfigPatch::new().with_gap(-2.0).resolve();
        assert_eq!(cfg.gap, -2.0);
    }
}
