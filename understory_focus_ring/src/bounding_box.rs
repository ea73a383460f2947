// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounding-box rings: axis-aligned rectangles around the target's visual bounds.
//!
//! The variant ignores the target's shape kind. A circle, a path, or a rect all get
//! `rect` rings sized from the bounding box:
//!
//! ```text
//! inner = element + element stroke + inner stroke + 2·gap
//! outer = inner + inner stroke + outline stroke
//! ```
//!
//! (per axis), both centered on the element's center. [`calculate_bounding_box_focus_rings`]
//! is the pure arithmetic; [`create_bounding_box_focus_rings`] measures a live element and
//! wraps the result into [`FocusRingLayers`].
//!
//! ```
//! use kurbo::Point;
//! use understory_focus_ring::bounding_box::{
//!     ElementBounds, RingConfig, calculate_bounding_box_focus_rings,
//! };
//!
//! let bounds = ElementBounds {
//!     element_width: 20.0,
//!     element_height: 10.0,
//!     element_position: Point::new(50.0, 50.0),
//!     element_stroke_width: 2.0,
//! };
//! let ring = RingConfig { gap: 1.0, inner_stroke_width: 2.0, outline_stroke_width: 2.0 };
//! let rings = calculate_bounding_box_focus_rings(&bounds, &ring);
//! assert_eq!(rings.inner.size.width, 26.0);
//! assert_eq!(rings.outer.size.width, 30.0);
//! assert_eq!(rings.outer.rect().center(), Point::new(50.0, 50.0));
//! ```

use kurbo::{Point, Rect, Size};

use crate::config::FocusConfig;
use crate::element::GraphicalElement;
use crate::error::ExtractError;
use crate::extract::extract_bounds;
use crate::layers::{AttributeValue, FocusRingLayers, RenderableShape};
use crate::shape::ShapeKind;

/// Measured target: size and center of the bounding box plus stroke width.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ElementBounds {
    /// Bounding box width.
    pub element_width: f64,
    /// Bounding box height.
    pub element_height: f64,
    /// Bounding box center.
    pub element_position: Point,
    /// Effective stroke width of the target.
    pub element_stroke_width: f64,
}

/// The subset of [`FocusConfig`] the ring arithmetic depends on.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RingConfig {
    /// See [`FocusConfig::gap`].
    pub gap: f64,
    /// See [`FocusConfig::inner_stroke_width`].
    pub inner_stroke_width: f64,
    /// See [`FocusConfig::outline_stroke_width`].
    pub outline_stroke_width: f64,
}

impl From<&FocusConfig> for RingConfig {
    fn from(config: &FocusConfig) -> Self {
        Self {
            gap: config.gap,
            inner_stroke_width: config.inner_stroke_width,
            outline_stroke_width: config.outline_stroke_width,
        }
    }
}

/// A rectangle kept as origin and size so the computed size is reported exactly.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RingRect {
    /// Top-left corner.
    pub origin: Point,
    /// Width and height.
    pub size: Size,
}

impl RingRect {
    /// Rectangle of `size` centered on `center`.
    pub fn centered(center: Point, size: Size) -> Self {
        Self {
            origin: Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
            size,
        }
    }

    /// As a Kurbo rectangle.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }
}

/// Inner and outer rectangles.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBoxRings {
    /// Rectangle closest to the target.
    pub inner: RingRect,
    /// Rectangle enclosing the inner one.
    pub outer: RingRect,
}

/// Size and place both rings around `bounds`. Pure arithmetic.
pub fn calculate_bounding_box_focus_rings(
    bounds: &ElementBounds,
    ring: &RingConfig,
) -> BoundingBoxRings {
    let grow = bounds.element_stroke_width + ring.inner_stroke_width + ring.gap * 2.0;
    let inner = Size::new(bounds.element_width + grow, bounds.element_height + grow);
    let spread = ring.inner_stroke_width + ring.outline_stroke_width;
    let outer = Size::new(inner.width + spread, inner.height + spread);
    BoundingBoxRings {
        inner: RingRect::centered(bounds.element_position, inner),
        outer: RingRect::centered(bounds.element_position, outer),
    }
}

/// Measure `element` and build `rect` ring layers around it.
///
/// Returns `None` when there is no element, the bounds cannot be read, or they
/// are degenerate.
pub fn create_bounding_box_focus_rings<E: GraphicalElement + ?Sized>(
    element: Option<&E>,
    config: &FocusConfig,
) -> Option<FocusRingLayers> {
    let bounds = match element.ok_or(ExtractError::MissingElement).and_then(extract_bounds) {
        Ok(bounds) => bounds,
        Err(err) => {
            log::debug!("bounding-box rings unavailable: {err}");
            return None;
        }
    };
    let rings = calculate_bounding_box_focus_rings(&bounds, &RingConfig::from(config));
    Some(FocusRingLayers {
        outer_ring: ring_shape(
            rings.outer,
            "focus-ring-outer",
            config.outline_color.into(),
            config.outline_stroke_width,
        ),
        inner_ring: ring_shape(
            rings.inner,
            "focus-ring-inner",
            config.inner_color.into(),
            config.inner_stroke_width,
        ),
    })
}

fn ring_shape(
    rect: RingRect,
    class: &'static str,
    stroke: AttributeValue,
    stroke_width: f64,
) -> RenderableShape {
    let mut shape = RenderableShape::new(ShapeKind::Rect);
    let props = &mut shape.props;
    props.set("class", class);
    props.set("x", rect.origin.x);
    props.set("y", rect.origin.y);
    props.set("width", rect.size.width);
    props.set("height", rect.size.height);
    props.set("fill", "none");
    props.set("stroke", stroke);
    props.set("stroke-width", stroke_width);
    shape
}
