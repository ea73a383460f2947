// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_focus_ring::{
    FocusConfig, FocusConfigPatch, FocusVariant, create_adaptive_focus_rings,
    create_bounding_box_focus_rings, render_focus_rings,
};
use understory_svg_scene::Element;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// A mix of chart marks: bars, dots, line segments, and area paths.
fn gen_marks(count: usize) -> Vec<Element> {
    let mut rng = Rng::new(0xF0C5_0000_1234_5678);
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let x = rng.next_f64() * 800.0;
        let y = rng.next_f64() * 600.0;
        let el = match i % 4 {
            0 => Element::new("rect")
                .with_attribute("x", x.to_string())
                .with_attribute("y", y.to_string())
                .with_attribute("width", "24")
                .with_attribute("height", (rng.next_f64() * 200.0 + 1.0).to_string()),
            1 => Element::new("circle")
                .with_attribute("cx", x.to_string())
                .with_attribute("cy", y.to_string())
                .with_attribute("r", "6")
                .with_attribute("stroke-width", "1.5"),
            2 => Element::new("line")
                .with_attribute("x1", x.to_string())
                .with_attribute("y1", y.to_string())
                .with_attribute("x2", (x + 40.0).to_string())
                .with_attribute("y2", (y - 20.0).to_string())
                .with_attribute("stroke-width", "2"),
            _ => {
                let d = format!("M{x} {y} L{} {} L{} {y} Z", x + 30.0, y - 50.0, x + 60.0);
                Element::new("path")
                    .with_attribute("d", d)
                    .with_attribute("stroke-width", "1")
            }
        };
        out.push(el);
    }
    out
}

fn bench_builders(c: &mut Criterion) {
    let mut group = c.benchmark_group("builders");
    let adaptive = FocusConfig::default();
    let bounding = FocusConfigPatch::new()
        .with_variant(FocusVariant::BoundingBox)
        .with_gap(1.0)
        .resolve();
    for &n in &[64usize, 512, 4096] {
        let marks = gen_marks(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("adaptive_n{}", n), |b| {
            b.iter(|| {
                let built = marks
                    .iter()
                    .filter_map(|m| create_adaptive_focus_rings(Some(m), &adaptive))
                    .count();
                black_box(built);
            });
        });
        group.bench_function(format!("bounding_box_n{}", n), |b| {
            b.iter(|| {
                let built = marks
                    .iter()
                    .filter_map(|m| create_bounding_box_focus_rings(Some(m), &bounding))
                    .count();
                black_box(built);
            });
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let config = FocusConfig::default();
    let marks = gen_marks(512);
    let layers: Vec<_> = marks
        .iter()
        .filter_map(|m| create_adaptive_focus_rings(Some(m), &config))
        .collect();
    group.throughput(Throughput::Elements(layers.len() as u64));
    group.bench_function("ring_groups", |b| {
        b.iter(|| {
            for l in &layers {
                black_box(render_focus_rings(Some(l), "mark"));
            }
        });
    });
    group.bench_function("svg_markup", |b| {
        let mut out = String::new();
        b.iter(|| {
            out.clear();
            for l in &layers {
                if let Some(group) = render_focus_rings(Some(l), "mark") {
                    let _ = group.write_svg(&mut out);
                }
            }
            black_box(out.len());
        });
    });
    group.finish();
}

criterion_group!(benches, bench_builders, bench_render);
criterion_main!(benches);
