// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adaptive rings: clones of the target's own geometry drawn as wide strokes.
//!
//! ## Halo technique
//!
//! Each ring copies the target's geometry unchanged and is drawn stroke-only
//! (`fill="none"`). A centered stroke straddles the outline, so a stroke of width
//! `w` reaches `w / 2` beyond the target's edge on both sides. The ring widths are
//! chosen so that, measured from the edge of the target's own stroke, the inner ring
//! reaches `gap + inner_stroke_width` and the outer ring a further
//! `outline_stroke_width`:
//!
//! ```text
//! inner = target stroke + 2·(gap + inner_stroke_width)
//! outer = target stroke + 2·(gap + inner_stroke_width + outline_stroke_width)
//! ```
//!
//! The outer ring is drawn first and the inner ring on top, so the visible bands
//! are the inner color next to the shape and the outline color outside it.
//! Because the strokes also cover the shape's interior side, the target has to be
//! painted after the rings.
//!
//! Per-kind adjustments:
//! - `rect` forces `stroke-linejoin="miter"` so corners stay sharp.
//! - `line` and `polyline` have no interior; `stroke-linecap="round"` keeps the halo
//!   from ending in square caps.
//!
//! ```
//! use kurbo::Circle;
//! use understory_focus_ring::adaptive::adaptive_focus_rings;
//! use understory_focus_ring::config::FocusConfigPatch;
//! use understory_focus_ring::shape::{ShapeDescriptor, ShapeGeometry, ShapeKind};
//!
//! let target = ShapeDescriptor::new(ShapeGeometry::Circle(Circle::new((10.0, 10.0), 4.0)), 0.0);
//! let config = FocusConfigPatch::new()
//!     .with_outline_stroke_width(4.0)
//!     .with_inner_stroke_width(3.0)
//!     .resolve();
//! let layers = adaptive_focus_rings(&target, &config);
//! assert_eq!(layers.kind(), ShapeKind::Circle);
//! assert_eq!(layers.outer_ring.stroke_width(), Some(14.0));
//! assert_eq!(layers.inner_ring.stroke_width(), Some(6.0));
//! ```

use crate::color::Color;
use crate::config::FocusConfig;
use crate::element::GraphicalElement;
use crate::error::ExtractError;
use crate::extract::extract_shape;
use crate::layers::{FocusRingLayers, RenderableShape};
use crate::shape::{ShapeDescriptor, ShapeKind};

/// Halo stroke widths `(outer, inner)` for a target drawn with `target_stroke_width`.
pub fn halo_stroke_widths(target_stroke_width: f64, config: &FocusConfig) -> (f64, f64) {
    let inner_reach = config.gap + config.inner_stroke_width;
    let outer_reach = inner_reach + config.outline_stroke_width;
    (
        target_stroke_width + 2.0 * outer_reach,
        target_stroke_width + 2.0 * inner_reach,
    )
}

/// Build both rings for a known shape. Pure.
pub fn adaptive_focus_rings(shape: &ShapeDescriptor, config: &FocusConfig) -> FocusRingLayers {
    let (outer_width, inner_width) = halo_stroke_widths(shape.stroke_width, config);
    FocusRingLayers {
        outer_ring: halo(
            shape,
            "focus-ring-outer",
            config.outline_color,
            outer_width,
        ),
        inner_ring: halo(shape, "focus-ring-inner", config.inner_color, inner_width),
    }
}

/// Read the target's shape and build rings that trace it.
///
/// Returns `None` when there is no element or its shape cannot be read,
/// including unsupported tags.
pub fn create_adaptive_focus_rings<E: GraphicalElement + ?Sized>(
    element: Option<&E>,
    config: &FocusConfig,
) -> Option<FocusRingLayers> {
    match element.ok_or(ExtractError::MissingElement).and_then(extract_shape) {
        Ok(shape) => Some(adaptive_focus_rings(&shape, config)),
        Err(err) => {
            log::debug!("adaptive rings unavailable: {err}");
            None
        }
    }
}

fn halo(
    shape: &ShapeDescriptor,
    class: &'static str,
    color: Color,
    stroke_width: f64,
) -> RenderableShape {
    let kind = shape.kind();
    let mut ring = RenderableShape::new(kind);
    shape.geometry.write_props(&mut ring.props);
    let props = &mut ring.props;
    props.set("class", class);
    props.set("fill", "none");
    props.set("stroke", color);
    props.set("stroke-width", stroke_width);
    if kind == ShapeKind::Rect {
        props.set("stroke-linejoin", "miter");
    }
    if kind.is_open() {
        props.set("stroke-linecap", "round");
    }
    ring
}
