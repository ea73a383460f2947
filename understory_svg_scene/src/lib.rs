// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_svg_scene --heading-base-level=0

//! Understory SVG Scene: a retained store of live SVG elements.
//!
//! The scene plays the part of the document for components that read rendered geometry:
//!
//! - Elements carry a tag name, attributes, and style overrides (the rendered value wins).
//! - [`Element::bounding_box`] reports the visual bounds of the fill geometry, like `getBBox`.
//! - Observers register an attribute filter per element and receive [`MutationRecord`]s
//!   in batches through [`Scene::take_records`].
//!
//! Records are not delivered synchronously. A write lands immediately, its record waits in
//! the queue until the host calls [`Scene::take_records`]; this mirrors the one-tick gap a
//! browser mutation observer has between a change and its callback.
//!
//! ## Not a renderer
//!
//! The scene stores and measures elements; it never paints them and knows nothing about
//! grouping, transforms, or text layout.
//!
//! ## Minimal usage
//!
//! ```
//! use understory_svg_scene::{Element, Scene};
//! use kurbo::Rect;
//!
//! let mut scene = Scene::new();
//! let dot = scene.insert(
//!     Element::new("circle")
//!         .with_attribute("cx", "20")
//!         .with_attribute("cy", "20")
//!         .with_attribute("r", "5"),
//! );
//!
//! let observer = scene.observe(dot, ["r"]);
//! scene.set_attribute(dot, "fill", "red");
//! scene.set_attribute(dot, "r", "10");
//!
//! let records = scene.take_records();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].observer, observer);
//! assert_eq!(
//!     scene.get(dot).and_then(|e| e.bounding_box()),
//!     Some(Rect::new(10.0, 10.0, 30.0, 30.0))
//! );
//! ```

mod element;
mod scene;

pub use element::{Element, parse_length, parse_points};
pub use scene::{ElementId, MutationKind, MutationRecord, ObserverId, Scene};
