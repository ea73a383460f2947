// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus ring basics: both ring variants for a few chart marks.
//!
//! This example builds adaptive and bounding-box rings for a bar, a dot, and a
//! line segment and prints the resulting SVG.
//!
//! Run:
//! - `cargo run -p understory_examples --example focus_ring_basics`

use kurbo::{Circle, Line, Rect};
use understory_focus_ring::bounding_box::{
    ElementBounds, RingConfig, calculate_bounding_box_focus_rings,
};
use understory_focus_ring::{
    Color, FocusConfig, FocusConfigPatch, FocusVariant, ShapeDescriptor, ShapeGeometry,
    adaptive_focus_rings, halo_stroke_widths, render_focus_rings,
};

fn main() {
    let marks = [
        (
            "bar",
            ShapeDescriptor::new(ShapeGeometry::Rect(Rect::new(10.0, 20.0, 40.0, 120.0)), 1.0),
        ),
        (
            "dot",
            ShapeDescriptor::new(ShapeGeometry::Circle(Circle::new((80.0, 60.0), 6.0)), 0.0),
        ),
        (
            "segment",
            ShapeDescriptor::new(
                ShapeGeometry::Line(Line::new((100.0, 100.0), (160.0, 40.0))),
                2.0,
            ),
        ),
    ];

    let config = FocusConfig::default();
    println!("== adaptive, default config ==");
    for (name, shape) in &marks {
        let layers = adaptive_focus_rings(shape, &config);
        let (outer, inner) = halo_stroke_widths(shape.stroke_width, &config);
        println!("{name}: {:?} halo outer={outer} inner={inner}", shape.kind());
        if let Some(group) = render_focus_rings(Some(&layers), name) {
            println!("  {}", group.to_svg_string());
        }
    }

    let branded = FocusConfigPatch::new()
        .with_outline_color(Color::rgb(0x1f, 0x77, 0xb4))
        .with_outline_stroke_width(3.0)
        .with_gap(1.0)
        .with_variant(FocusVariant::BoundingBox)
        .resolve();
    println!("\n== bounding box, custom config ==");
    let bounds = ElementBounds {
        element_width: 30.0,
        element_height: 100.0,
        element_position: (25.0, 70.0).into(),
        element_stroke_width: 1.0,
    };
    let rings = calculate_bounding_box_focus_rings(&bounds, &RingConfig::from(&branded));
    println!("bar inner: {:?}", rings.inner.rect());
    println!("bar outer: {:?}", rings.outer.rect());
}
