// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus ring lifecycle on a retained scene.
//!
//! This example focuses a bar, moves it, recolors it, and finally unmounts the
//! ring, printing what the ring would draw after each step. Geometry changes are
//! picked up from the scene's batched mutation records; style changes are not.
//!
//! Run:
//! - `cargo run -p understory_examples --example focus_ring_scene`

use understory_focus_ring::adapters::scene::mutations;
use understory_focus_ring::{FocusConfigPatch, FocusRing, FocusRingProps, FocusRingView};
use understory_svg_scene::{Element, ElementId, Scene};

fn show(step: &str, view: &FocusRingView<ElementId>) {
    match &view.rings {
        Some(group) => println!("{step}: {}", group.to_svg_string()),
        None => println!("{step}: (no rings)"),
    }
    if let Some(target) = view.target {
        println!("  then paint target {:?}", target.parts());
    }
}

fn main() {
    let mut scene = Scene::new();
    let bar = scene.insert(
        Element::new("rect")
            .with_attribute("x", "10")
            .with_attribute("y", "40")
            .with_attribute("width", "24")
            .with_attribute("height", "80")
            .with_attribute("fill", "steelblue"),
    );

    let props = FocusRingProps::inline(bar, false)
        .with_test_id("bar-0")
        .with_config(FocusConfigPatch::new().with_gap(1.0));
    let mut ring = FocusRing::new(props);
    ring.sync(&mut scene);
    show("blurred", &ring.render());

    ring.set_focused(true);
    ring.sync(&mut scene);
    show("focused", &ring.render());

    // The write lands now; the record arrives with the next delivery.
    scene.set_attribute(bar, "height", "120");
    scene.set_attribute(bar, "y", "0");
    let records = scene.take_records();
    let moved = ring.handle_mutations(&mut scene, mutations(&records));
    println!("geometry change recomputed: {moved} (epoch {})", ring.epoch());
    show("resized", &ring.render());

    scene.set_style(bar, "fill", Some("orange".into()));
    let records = scene.take_records();
    let recolored = ring.handle_mutations(&mut scene, mutations(&records));
    println!("style change recomputed: {recolored} (epoch {})", ring.epoch());

    ring.unmount(&mut scene);
    println!("observers after unmount: {}", scene.observer_count());
    show("unmounted", &ring.render());
}
