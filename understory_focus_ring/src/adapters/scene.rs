// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter for Understory SVG Scene.
//!
//! ## Feature
//!
//! Enable with `scene_adapter` (on by default).
//!
//! ## Notes
//!
//! [`Scene`] observers are registered with the geometry allow-list as their filter, so
//! the scene only queues records for geometry attributes in the first place. Records are
//! delivered in batches by [`Scene::take_records`]; pass them through [`mutations`] into
//! [`FocusRing::handle_mutations`](crate::reactive::FocusRing::handle_mutations).
//! Removing the target queues a record for the ring's observer as well, with an empty
//! attribute name, so delivery alone is enough to tear the ring down.
//!
//! ```
//! use understory_focus_ring::adapters::scene::mutations;
//! use understory_focus_ring::reactive::{FocusRing, FocusRingProps};
//! use understory_svg_scene::{Element, Scene};
//!
//! let mut scene = Scene::new();
//! let dot = scene.insert(
//!     Element::new("circle")
//!         .with_attribute("cx", "20")
//!         .with_attribute("cy", "20")
//!         .with_attribute("r", "5"),
//! );
//!
//! let mut ring = FocusRing::new(FocusRingProps::inline(dot, true));
//! ring.sync(&mut scene);
//!
//! scene.set_attribute(dot, "r", "8");
//! let records = scene.take_records();
//! assert!(ring.handle_mutations(&mut scene, mutations(&records)));
//! assert_eq!(ring.layers().unwrap().outer_ring.props.number("r"), Some(8.0));
//! ```

use kurbo::Rect;
use understory_svg_scene::{Element, ElementId, MutationRecord, ObserverId, Scene};

use crate::element::GraphicalElement;
use crate::error::BoundsError;
use crate::observe::{AttributeMutation, FocusHost, GeometryAttributes};

impl GraphicalElement for Element {
    fn tag_name(&self) -> &str {
        self.tag()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        Self::attribute(self, name)
    }

    fn computed_style(&self, property: &str) -> Option<&str> {
        self.style(property)
    }

    fn bounding_box(&self) -> Result<Rect, BoundsError> {
        Self::bounding_box(self)
            .ok_or_else(|| BoundsError::new(self.tag(), "no measurable geometry"))
    }
}

impl FocusHost<ElementId> for Scene {
    type Element = Element;
    type Subscription = ObserverId;

    fn element(&self, key: &ElementId) -> Option<&Element> {
        self.get(*key)
    }

    fn observe(&mut self, key: &ElementId, attributes: GeometryAttributes) -> Option<ObserverId> {
        if !self.is_alive(*key) {
            return None;
        }
        Some(Self::observe(self, *key, attributes.names()))
    }

    fn disconnect(&mut self, subscription: ObserverId) {
        Self::disconnect(self, subscription);
    }
}

/// View delivered scene records as ring mutations.
pub fn mutations(
    records: &[MutationRecord],
) -> impl Iterator<Item = AttributeMutation<'_, ObserverId>> {
    records.iter().map(|r| AttributeMutation {
        subscription: r.observer,
        attribute_name: &r.attribute_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FocusConfigPatch, FocusVariant};
    use crate::reactive::{FocusRing, FocusRingProps, RingState};
    use crate::shape::ShapeKind;
    use alloc::vec::Vec;

    fn scene_with_bar() -> (Scene, ElementId) {
        let mut scene = Scene::new();
        let bar = scene.insert(
            Element::new("rect")
                .with_attribute("x", "10")
                .with_attribute("y", "20")
                .with_attribute("width", "30")
                .with_attribute("height", "40")
                .with_attribute("stroke-width", "1"),
        );
        (scene, bar)
    }

    #[test]
    fn scene_element_reads_like_a_graphical_element() {
        let el = Element::new("circle")
            .with_attribute("r", "4")
            .with_attribute("stroke-width", "1")
            .with_style("stroke-width", "3px");
        assert_eq!(GraphicalElement::tag_name(&el), "circle");
        assert_eq!(el.effective_value("stroke-width"), Some("3px"));
        assert_eq!(
            GraphicalElement::bounding_box(&el),
            Ok(Rect::new(-4.0, -4.0, 4.0, 4.0))
        );

        let group = Element::new("g");
        let err = GraphicalElement::bounding_box(&group).unwrap_err();
        assert_eq!(err.tag, "g");
    }

    #[test]
    fn observer_filter_is_the_allow_list() {
        let (mut scene, bar) = scene_with_bar();
        let sub = FocusHost::observe(&mut scene, &bar, GeometryAttributes::all()).unwrap();
        scene.set_attribute(bar, "fill", "steelblue");
        scene.set_style(bar, "opacity", Some("0.5".into()));
        assert!(scene.pending_records().is_empty());
        scene.set_attribute(bar, "height", "50");
        let records = scene.take_records();
        let seen: Vec<_> = mutations(&records).collect();
        assert_eq!(
            seen,
            [AttributeMutation {
                subscription: sub,
                attribute_name: "height"
            }]
        );
    }

    #[test]
    fn length_parsing_matches_the_scene() {
        for value in [
            "12", " 3.5px ", "-4", "1e2", "7 px", "px", "", "abc", "NaN", "inf", "10%",
        ] {
            assert_eq!(
                crate::extract::parse_length(value),
                understory_svg_scene::parse_length(value),
                "{value:?}"
            );
        }
    }

    #[test]
    fn stale_handles_cannot_be_observed() {
        let (mut scene, bar) = scene_with_bar();
        scene.remove(bar);
        assert!(FocusHost::observe(&mut scene, &bar, GeometryAttributes::all()).is_none());
        assert!(FocusHost::element(&scene, &bar).is_none());
    }

    #[test]
    fn ring_follows_scene_geometry() {
        let (mut scene, bar) = scene_with_bar();
        let mut ring = FocusRing::new(FocusRingProps::inline(bar, true));
        ring.sync(&mut scene);
        assert_eq!(ring.state(), RingState::Active);
        assert_eq!(scene.observer_count(), 1);
        let layers = ring.layers().unwrap();
        assert_eq!(layers.kind(), ShapeKind::Rect);
        // 1 + 2·(0 + 2 + 2)
        assert_eq!(layers.outer_ring.stroke_width(), Some(9.0));

        scene.set_attribute(bar, "x", "60");
        let records = scene.take_records();
        assert!(ring.handle_mutations(&mut scene, mutations(&records)));
        assert_eq!(
            ring.layers().unwrap().inner_ring.props.number("x"),
            Some(60.0)
        );
        assert_eq!(ring.epoch(), 2);
    }

    #[test]
    fn style_changes_do_not_recompute() {
        let (mut scene, bar) = scene_with_bar();
        let mut ring = FocusRing::new(FocusRingProps::inline(bar, true));
        ring.sync(&mut scene);
        scene.set_style(bar, "stroke-width", Some("5".into()));
        scene.set_attribute(bar, "stroke", "red");
        let records = scene.take_records();
        assert!(!ring.handle_mutations(&mut scene, mutations(&records)));
        assert_eq!(ring.epoch(), 1);
    }

    #[test]
    fn bounding_box_variant_measures_the_scene() {
        let mut scene = Scene::new();
        let dot = scene.insert(
            Element::new("circle")
                .with_attribute("cx", "50")
                .with_attribute("cy", "50")
                .with_attribute("r", "10"),
        );
        let cfg = FocusConfigPatch::new().with_variant(FocusVariant::BoundingBox);
        let mut ring = FocusRing::new(FocusRingProps::external(dot, true).with_config(cfg));
        ring.sync(&mut scene);
        let inner = &ring.layers().unwrap().inner_ring;
        assert_eq!(inner.kind, ShapeKind::Rect);
        assert_eq!(inner.props.number("width"), Some(22.0));
        assert_eq!(inner.props.number("x"), Some(39.0));
        assert!(ring.render().target.is_none());
    }

    #[test]
    fn removal_then_delivery_tears_down() {
        let (mut scene, bar) = scene_with_bar();
        let mut ring = FocusRing::new(FocusRingProps::external(bar, true));
        ring.sync(&mut scene);
        scene.set_attribute(bar, "width", "10");
        scene.remove(bar);
        let records = scene.take_records();
        assert!(ring.handle_mutations(&mut scene, mutations(&records)));
        assert_eq!(ring.state(), RingState::Idle);
        assert_eq!(scene.observer_count(), 0);
    }

    #[test]
    fn removal_without_a_write_tears_down_on_delivery() {
        let (mut scene, bar) = scene_with_bar();
        let mut ring = FocusRing::new(FocusRingProps::external(bar, true));
        ring.sync(&mut scene);
        scene.remove(bar);
        let records = scene.take_records();
        assert_eq!(records.len(), 1);
        assert!(ring.handle_mutations(&mut scene, mutations(&records)));
        assert_eq!(ring.state(), RingState::Idle);
        assert_eq!(scene.observer_count(), 0);
        assert!(ring.render().is_empty());
    }

    #[test]
    fn removal_without_delivery_tears_down_on_sync() {
        let (mut scene, bar) = scene_with_bar();
        let mut ring = FocusRing::new(FocusRingProps::inline(bar, true));
        ring.sync(&mut scene);
        scene.remove(bar);
        assert!(ring.sync(&mut scene));
        assert_eq!(ring.state(), RingState::Idle);
        assert_eq!(scene.observer_count(), 0);
        assert!(scene.take_records().is_empty(), "disconnect drops the removal record");
        assert!(ring.render().rings.is_none());
    }

    #[test]
    fn unmount_drops_queued_records() {
        let (mut scene, bar) = scene_with_bar();
        let mut ring = FocusRing::new(FocusRingProps::inline(bar, true));
        ring.sync(&mut scene);
        scene.set_attribute(bar, "y", "0");
        ring.unmount(&mut scene);
        assert!(scene.take_records().is_empty());
        assert_eq!(scene.observer_count(), 0);
        assert!(ring.render().is_empty());
    }
}
