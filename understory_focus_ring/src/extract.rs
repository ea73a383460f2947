// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry extraction from a live target element.
//!
//! Two readings exist, one per ring variant:
//!
//! - [`extract_shape`] reads the tag and its geometry values directly. Values come from
//!   [`GraphicalElement::effective_value`], so style overrides win over attributes and the
//!   result traces the shape as it is drawn.
//! - [`extract_bounds`] measures the visual bounds and the effective stroke width.
//!
//! Missing numeric attributes read as `0`, as SVG does. Anything that cannot be measured
//! is an [`ExtractError`].

use alloc::string::{String, ToString};
use kurbo::{Circle, Line, Point, Rect, Vec2};

use crate::bounding_box::ElementBounds;
use crate::element::GraphicalElement;
use crate::error::ExtractError;
use crate::shape::{ShapeDescriptor, ShapeGeometry, ShapeKind};

/// Read the shape kind, geometry, and stroke width of `element`.
pub fn extract_shape<E: GraphicalElement + ?Sized>(
    element: &E,
) -> Result<ShapeDescriptor, ExtractError> {
    let tag = element.tag_name();
    let kind = ShapeKind::from_tag_name(tag)
        .ok_or_else(|| ExtractError::UnsupportedShape(tag.to_string()))?;
    let len = |name: &'static str| length(element, name);

    let geometry = match kind {
        ShapeKind::Circle => ShapeGeometry::Circle(Circle::new(
            Point::new(len("cx")?, len("cy")?),
            len("r")?,
        )),
        ShapeKind::Ellipse => ShapeGeometry::Ellipse {
            center: Point::new(len("cx")?, len("cy")?),
            radii: Vec2::new(len("rx")?, len("ry")?),
        },
        ShapeKind::Rect => {
            let (x, y) = (len("x")?, len("y")?);
            // Not normalized: a negative size is carried through as written.
            ShapeGeometry::Rect(Rect::new(x, y, x + len("width")?, y + len("height")?))
        }
        ShapeKind::Line => ShapeGeometry::Line(Line::new(
            (len("x1")?, len("y1")?),
            (len("x2")?, len("y2")?),
        )),
        ShapeKind::Polyline => ShapeGeometry::Polyline {
            points: verbatim(element, "points"),
        },
        ShapeKind::Polygon => ShapeGeometry::Polygon {
            points: verbatim(element, "points"),
        },
        ShapeKind::Path => ShapeGeometry::Path {
            d: verbatim(element, "d"),
        },
    };

    Ok(ShapeDescriptor::new(geometry, effective_stroke_width(element)))
}

/// Measure the visual bounds of `element` for the bounding-box variant.
///
/// Fails when the bounds cannot be read or have a non-positive width or height.
pub fn extract_bounds<E: GraphicalElement + ?Sized>(
    element: &E,
) -> Result<ElementBounds, ExtractError> {
    let bbox = element.bounding_box()?;
    let (width, height) = (bbox.width(), bbox.height());
    if width.is_nan() || height.is_nan() || width <= 0.0 || height <= 0.0 {
        return Err(ExtractError::DegenerateBounds { width, height });
    }
    Ok(ElementBounds {
        element_width: width,
        element_height: height,
        element_position: Point::new(bbox.x0 + width / 2.0, bbox.y0 + height / 2.0),
        element_stroke_width: effective_stroke_width(element),
    })
}

/// Effective `stroke-width` of `element`; `0` when missing or unparsable.
pub fn effective_stroke_width<E: GraphicalElement + ?Sized>(element: &E) -> f64 {
    element
        .effective_value("stroke-width")
        .and_then(parse_length)
        .unwrap_or(0.0)
}

/// Parse an SVG length in user units; accepts a bare number or a `px` suffix.
///
/// Kept in step with `understory_svg_scene::parse_length`, so a host built on the scene
/// measures the same numbers the ring builders read.
pub fn parse_length(value: &str) -> Option<f64> {
    let v = value.trim();
    let v = v.strip_suffix("px").unwrap_or(v).trim_end();
    v.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn length<E: GraphicalElement + ?Sized>(
    element: &E,
    name: &'static str,
) -> Result<f64, ExtractError> {
    match element.effective_value(name) {
        None => Ok(0.0),
        Some(raw) => parse_length(raw).ok_or_else(|| ExtractError::InvalidAttribute {
            name,
            value: raw.to_string(),
        }),
    }
}

fn verbatim<E: GraphicalElement + ?Sized>(element: &E, name: &str) -> String {
    element.effective_value(name).unwrap_or_default().to_string()
}
