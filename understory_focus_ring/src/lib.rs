// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_focus_ring --heading-base-level=0

//! Understory Focus Ring: keyboard focus indicators for SVG shapes.
//!
//! A focus ring is a pair of strokes drawn around a focused graphical element: an inner ring
//! in a light color hugging the shape and an outer ring in a dark color around it, so the
//! indicator stays visible on any background.
//!
//! - [`adaptive`] rings trace the target's own geometry (circle, ellipse, rect, line,
//!   polyline, polygon, path) as wide halo strokes.
//! - [`bounding_box`] rings are two rectangles around the target's visual bounds and work
//!   for anything that can be measured.
//! - [`reactive::FocusRing`] keeps a ring in step with focus, configuration, and geometry
//!   changes reported by the host.
//! - [`render`] turns computed layers into drawable elements with stable test ids.
//!
//! The crate does not own a document. Hosts expose elements through
//! [`element::GraphicalElement`] and change notification through [`observe::FocusHost`];
//! [`adapters`] implements both for `understory_svg_scene`.
//!
//! ## Pipeline
//!
//! ```text
//! element ──extract──▶ ShapeDescriptor / ElementBounds ──build──▶ FocusRingLayers ──render──▶ RingGroup
//!    ▲                                                                                    │
//!    └────────────── geometry change (x, y, r, d, points, …) ◀── host ◀──────────────────┘
//! ```
//!
//! Every builder is total: when the target is missing, unsupported, or cannot be measured
//! it returns `None` and nothing is drawn. Failures are reported through the `log` facade at
//! `debug` level; no logger is installed by this crate.
//!
//! ## Minimal usage
//!
//! ```
//! use kurbo::Rect;
//! use understory_focus_ring::{
//!     BoundsError, FocusConfigPatch, GraphicalElement, ShapeKind, create_adaptive_focus_rings,
//!     render_focus_rings,
//! };
//!
//! struct Bar;
//!
//! impl GraphicalElement for Bar {
//!     fn tag_name(&self) -> &str {
//!         "rect"
//!     }
//!     fn attribute(&self, name: &str) -> Option<&str> {
//!         match name {
//!             "x" => Some("10"),
//!             "y" => Some("20"),
//!             "width" => Some("30"),
//!             "height" => Some("60"),
//!             _ => None,
//!         }
//!     }
//!     fn bounding_box(&self) -> Result<Rect, BoundsError> {
//!         Ok(Rect::new(10.0, 20.0, 40.0, 80.0))
//!     }
//! }
//!
//! let config = FocusConfigPatch::new().with_gap(1.0).resolve();
//! let layers = create_adaptive_focus_rings(Some(&Bar), &config).unwrap();
//! assert_eq!(layers.kind(), ShapeKind::Rect);
//! assert_eq!(layers.outer_ring.props.text("stroke-linejoin"), Some("miter"));
//!
//! let group = render_focus_rings(Some(&layers), "bar-0").unwrap();
//! assert_eq!(group.outer.test_id(), Some("bar-0-focus-outer"));
//! assert!(group.to_svg_string().starts_with("<g pointer-events=\"none\"><rect "));
//! ```
//!
//! ## Paint order
//!
//! Halo strokes straddle the target's outline and cover part of its interior, so the
//! target must be painted after the rings. [`FocusRingView`] lists the rings first and the
//! inline target second; in reference mode the caller paints the target itself.
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std`.
//! - `libm`: forwards to `kurbo/libm` for `no_std` builds.
//! - `scene_adapter` (default): host integration for `understory_svg_scene`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod adaptive;
pub mod bounding_box;
pub mod color;
pub mod config;
pub mod element;
pub mod error;
pub mod extract;
pub mod layers;
pub mod observe;
pub mod reactive;
pub mod render;
pub mod shape;

#[cfg(test)]
mod testing;

pub use adaptive::{adaptive_focus_rings, create_adaptive_focus_rings, halo_stroke_widths};
pub use bounding_box::{
    BoundingBoxRings, ElementBounds, RingConfig, RingRect, calculate_bounding_box_focus_rings,
    create_bounding_box_focus_rings,
};
pub use color::Color;
pub use config::{FocusConfig, FocusConfigPatch, FocusVariant};
pub use element::GraphicalElement;
pub use error::{BoundsError, ExtractError};
pub use extract::{extract_bounds, extract_shape};
pub use layers::{AttributeValue, FocusRingLayers, Props, RenderableShape};
pub use observe::{AttributeMutation, FocusHost, GeometryAttributes};
pub use reactive::{FocusRing, FocusRingProps, FocusTarget, RingState};
pub use render::{DEFAULT_TEST_ID, FocusRingView, RenderedShape, RingGroup, render_focus_rings};
pub use shape::{ShapeDescriptor, ShapeGeometry, ShapeKind};
