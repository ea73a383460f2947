// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Supported SVG shape kinds and their geometry.

use alloc::string::String;
use kurbo::{Circle, Line, Point, Rect, Vec2};

use crate::layers::Props;

/// A supported SVG primitive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// `<circle>`
    Circle,
    /// `<ellipse>`
    Ellipse,
    /// `<rect>`
    Rect,
    /// `<line>`
    Line,
    /// `<polyline>`
    Polyline,
    /// `<polygon>`
    Polygon,
    /// `<path>`
    Path,
}

impl ShapeKind {
    /// Every supported kind.
    pub const ALL: [Self; 7] = [
        Self::Circle,
        Self::Ellipse,
        Self::Rect,
        Self::Line,
        Self::Polyline,
        Self::Polygon,
        Self::Path,
    ];

    /// SVG tag name.
    pub fn tag_name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Ellipse => "ellipse",
            Self::Rect => "rect",
            Self::Line => "line",
            Self::Polyline => "polyline",
            Self::Polygon => "polygon",
            Self::Path => "path",
        }
    }

    /// Look up a kind by tag name (ASCII case-insensitive).
    pub fn from_tag_name(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.tag_name().eq_ignore_ascii_case(tag))
    }

    /// True for kinds without interior area, which get round caps.
    pub fn is_open(self) -> bool {
        matches!(self, Self::Line | Self::Polyline)
    }
}

/// Geometry of one shape, carrying only the fields its kind uses.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeGeometry {
    /// `cx`, `cy`, `r`.
    Circle(Circle),
    /// `cx`, `cy`, `rx`, `ry`.
    Ellipse {
        /// Center point.
        center: Point,
        /// Radii along x and y.
        radii: Vec2,
    },
    /// `x`, `y`, `width`, `height`.
    Rect(Rect),
    /// `x1`, `y1`, `x2`, `y2`.
    Line(Line),
    /// `points`, verbatim.
    Polyline {
        /// Point list as written on the element.
        points: String,
    },
    /// `points`, verbatim.
    Polygon {
        /// Point list as written on the element.
        points: String,
    },
    /// `d`, verbatim.
    Path {
        /// Path data as written on the element.
        d: String,
    },
}

impl ShapeGeometry {
    /// Kind of this geometry.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Circle(_) => ShapeKind::Circle,
            Self::Ellipse { .. } => ShapeKind::Ellipse,
            Self::Rect(_) => ShapeKind::Rect,
            Self::Line(_) => ShapeKind::Line,
            Self::Polyline { .. } => ShapeKind::Polyline,
            Self::Polygon { .. } => ShapeKind::Polygon,
            Self::Path { .. } => ShapeKind::Path,
        }
    }

    /// Write the geometry attributes of this shape into `props`.
    pub fn write_props(&self, props: &mut Props) {
        match self {
            Self::Circle(c) => {
                props.set("cx", c.center.x);
                props.set("cy", c.center.y);
                props.set("r", c.radius);
            }
            Self::Ellipse { center, radii } => {
                props.set("cx", center.x);
                props.set("cy", center.y);
                props.set("rx", radii.x);
                props.set("ry", radii.y);
            }
            Self::Rect(r) => {
                props.set("x", r.x0);
                props.set("y", r.y0);
                props.set("width", r.width());
                props.set("height", r.height());
            }
            Self::Line(l) => {
                props.set("x1", l.p0.x);
                props.set("y1", l.p0.y);
                props.set("x2", l.p1.x);
                props.set("y2", l.p1.y);
            }
            Self::Polyline { points } | Self::Polygon { points } => {
                props.set("points", points.clone());
            }
            Self::Path { d } => props.set("d", d.clone()),
        }
    }
}

/// A target shape: its geometry plus the stroke width it is drawn with.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeDescriptor {
    /// Geometry as rendered.
    pub geometry: ShapeGeometry,
    /// Effective stroke width of the target; zero when unstroked.
    pub stroke_width: f64,
}

impl ShapeDescriptor {
    /// Create a descriptor.
    pub fn new(geometry: ShapeGeometry, stroke_width: f64) -> Self {
        Self {
            geometry,
            stroke_width,
        }
    }

    /// Kind of the described shape.
    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_names_round_trip() {
        for kind in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_tag_name(kind.tag_name()), Some(kind));
        }
        assert_eq!(ShapeKind::from_tag_name("RECT"), Some(ShapeKind::Rect));
        assert_eq!(ShapeKind::from_tag_name("g"), None);
        assert_eq!(ShapeKind::from_tag_name("text"), None);
    }

    #[test]
    fn open_kinds() {
        let open: alloc::vec::Vec<_> = ShapeKind::ALL.into_iter().filter(|k| k.is_open()).collect();
        assert_eq!(open, [ShapeKind::Line, ShapeKind::Polyline]);
    }

    #[test]
    fn rect_props_use_origin_and_size() {
        let mut props = Props::new();
        ShapeGeometry::Rect(Rect::new(5.0, 6.0, 25.0, 16.0)).write_props(&mut props);
        assert_eq!(props.number("x"), Some(5.0));
        assert_eq!(props.number("y"), Some(6.0));
        assert_eq!(props.number("width"), Some(20.0));
        assert_eq!(props.number("height"), Some(10.0));
    }

    #[test]
    fn path_data_is_verbatim() {
        let mut props = Props::new();
        let d = String::from("M0 0 L 10,10 z");
        ShapeGeometry::Path { d: d.clone() }.write_props(&mut props);
        assert_eq!(props.text("d"), Some(d.as_str()));
    }
}
