// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_focus_ring::adapters::scene::mutations;
use understory_focus_ring::{FocusRing, FocusRingProps};
use understory_svg_scene::{Element, ElementId, ObserverId, Scene};

fn gen_scene(count: usize) -> (Scene, Vec<ElementId>) {
    let mut scene = Scene::new();
    let ids = (0..count)
        .map(|i| {
            scene.insert(
                Element::new("circle")
                    .with_attribute("cx", (i as f64 * 12.0).to_string())
                    .with_attribute("cy", "40")
                    .with_attribute("r", "5"),
            )
        })
        .collect();
    (scene, ids)
}

fn focused_rings(scene: &mut Scene, ids: &[ElementId]) -> Vec<FocusRing<ElementId, ObserverId>> {
    ids.iter()
        .map(|&id| {
            let mut ring = FocusRing::new(FocusRingProps::inline(id, true));
            ring.sync(scene);
            ring
        })
        .collect()
}

fn bench_focus_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("focus_cycle");
    for &n in &[16usize, 256] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("focus_blur_n{}", n), |b| {
            b.iter_batched(
                || gen_scene(n),
                |(mut scene, ids)| {
                    let mut rings = focused_rings(&mut scene, &ids);
                    for ring in &mut rings {
                        ring.set_focused(false);
                        ring.sync(&mut scene);
                    }
                    black_box(scene.observer_count());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_geometry_updates(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry_updates");
    for &n in &[16usize, 256] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("move_all_n{}", n), |b| {
            b.iter_batched(
                || {
                    let (mut scene, ids) = gen_scene(n);
                    let rings = focused_rings(&mut scene, &ids);
                    (scene, ids, rings)
                },
                |(mut scene, ids, mut rings)| {
                    for &id in &ids {
                        scene.set_attribute(id, "cy", "80");
                        scene.set_attribute(id, "fill", "orange");
                    }
                    let records = scene.take_records();
                    let mut recomputed = 0;
                    for ring in &mut rings {
                        if ring.handle_mutations(&mut scene, mutations(&records)) {
                            recomputed += 1;
                        }
                    }
                    black_box(recomputed);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_focus_cycle, bench_geometry_updates);
criterion_main!(benches);
