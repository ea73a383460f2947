// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG elements: tag, attributes, style overrides, and visual bounds.

use kurbo::{BezPath, Circle, Ellipse, Line, Point, Rect, Shape};

/// A single graphical SVG element.
///
/// Attributes keep their insertion order. Style overrides model the author
/// stylesheet: when both are present for the same name the style value is the
/// one that is rendered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    style: Vec<(String, String)>,
}

impl Element {
    /// Create an element with the given tag name and no attributes.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            style: Vec::new(),
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name.into(), value.into());
        self
    }

    /// Builder-style style override.
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_style(property.into(), Some(value.into()));
        self
    }

    /// Tag name, e.g. `circle`.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Raw attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Style override for `property`, if any.
    pub fn style(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(n, _)| n == property)
            .map(|(_, v)| v.as_str())
    }

    /// The value that is actually rendered: style override first, then attribute.
    pub fn effective_value(&self, name: &str) -> Option<&str> {
        self.style(name).or_else(|| self.attribute(name))
    }

    /// Axis-aligned bounds of the fill geometry, ignoring stroke.
    ///
    /// Returns `None` for tags without intrinsic geometry, negative sizes,
    /// and values that do not parse.
    pub fn bounding_box(&self) -> Option<Rect> {
        match self.tag.as_str() {
            "circle" => {
                let r = self.length("r")?;
                if r < 0.0 {
                    return None;
                }
                let center = Point::new(self.length("cx")?, self.length("cy")?);
                Some(Circle::new(center, r).bounding_box())
            }
            "ellipse" => {
                let (rx, ry) = (self.length("rx")?, self.length("ry")?);
                if rx < 0.0 || ry < 0.0 {
                    return None;
                }
                let center = Point::new(self.length("cx")?, self.length("cy")?);
                Some(Ellipse::new(center, (rx, ry), 0.0).bounding_box())
            }
            "rect" => {
                let (width, height) = (self.length("width")?, self.length("height")?);
                if width < 0.0 || height < 0.0 {
                    return None;
                }
                let origin = Point::new(self.length("x")?, self.length("y")?);
                Some(Rect::from_origin_size(origin, (width, height)))
            }
            "line" => {
                let p0 = Point::new(self.length("x1")?, self.length("y1")?);
                let p1 = Point::new(self.length("x2")?, self.length("y2")?);
                Some(Line::new(p0, p1).bounding_box())
            }
            "polyline" | "polygon" => {
                let points = parse_points(self.effective_value("points").unwrap_or(""))?;
                let (first, rest) = points.split_first()?;
                Some(
                    rest.iter()
                        .fold(Rect::from_points(*first, *first), |acc, p| acc.union_pt(*p)),
                )
            }
            "path" => {
                let d = self.effective_value("d")?;
                BezPath::from_svg(d).ok().map(|path| path.bounding_box())
            }
            _ => None,
        }
    }

    /// Numeric geometry value; missing values default to zero.
    fn length(&self, name: &str) -> Option<f64> {
        match self.effective_value(name) {
            None => Some(0.0),
            Some(v) => parse_length(v),
        }
    }

    pub(crate) fn set_attribute(&mut self, name: String, value: String) -> Option<String> {
        if let Some((_, v)) = self.attributes.iter_mut().find(|(n, _)| *n == name) {
            return Some(core::mem::replace(v, value));
        }
        self.attributes.push((name, value));
        None
    }

    pub(crate) fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let pos = self.attributes.iter().position(|(n, _)| n == name)?;
        Some(self.attributes.remove(pos).1)
    }

    pub(crate) fn set_style(&mut self, property: String, value: Option<String>) -> Option<String> {
        let pos = self.style.iter().position(|(n, _)| *n == property);
        match (pos, value) {
            (Some(i), Some(v)) => Some(core::mem::replace(&mut self.style[i].1, v)),
            (Some(i), None) => Some(self.style.remove(i).1),
            (None, Some(v)) => {
                self.style.push((property, v));
                None
            }
            (None, None) => None,
        }
    }
}

/// Parse an SVG length in user units; accepts a bare number or a `px` suffix.
///
/// Kept in step with `understory_focus_ring::extract::parse_length`, which reads the
/// same values on the ring side without depending on this crate.
pub fn parse_length(value: &str) -> Option<f64> {
    let v = value.trim();
    let v = v.strip_suffix("px").unwrap_or(v).trim_end();
    v.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parse a `points` list (`"x,y x,y ..."`, commas and whitespace interchangeable).
///
/// A trailing unpaired coordinate is ignored. Returns `None` when a coordinate does not parse.
pub fn parse_points(value: &str) -> Option<Vec<Point>> {
    let coords = value
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(parse_length)
        .collect::<Option<Vec<f64>>>()?;
    Some(
        coords
            .chunks_exact(2)
            .map(|pair| Point::new(pair[0], pair[1]))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_bounds() {
        let c = Element::new("circle")
            .with_attribute("cx", "50")
            .with_attribute("cy", "40")
            .with_attribute("r", "10");
        assert_eq!(c.bounding_box(), Some(Rect::new(40.0, 30.0, 60.0, 50.0)));
    }

    #[test]
    fn style_overrides_attribute() {
        let c = Element::new("rect")
            .with_attribute("width", "10")
            .with_attribute("height", "10")
            .with_style("width", "30px");
        assert_eq!(c.effective_value("width"), Some("30px"));
        assert_eq!(c.bounding_box(), Some(Rect::new(0.0, 0.0, 30.0, 10.0)));
    }

    #[test]
    fn missing_geometry_defaults_to_zero() {
        let r = Element::new("rect");
        assert_eq!(r.bounding_box(), Some(Rect::ZERO));
    }

    #[test]
    fn negative_rect_is_not_rendered() {
        let r = Element::new("rect")
            .with_attribute("width", "-4")
            .with_attribute("height", "10");
        assert_eq!(r.bounding_box(), None);
    }

    #[test]
    fn polyline_bounds_cover_all_points() {
        let p = Element::new("polyline").with_attribute("points", "0,0 10,5 4 20");
        assert_eq!(p.bounding_box(), Some(Rect::new(0.0, 0.0, 10.0, 20.0)));
    }

    #[test]
    fn path_bounds_from_path_data() {
        let p = Element::new("path").with_attribute("d", "M 10 10 L 30 10 L 30 40 Z");
        assert_eq!(p.bounding_box(), Some(Rect::new(10.0, 10.0, 30.0, 40.0)));
    }

    #[test]
    fn unknown_tags_and_bad_values_have_no_bounds() {
        assert_eq!(Element::new("g").bounding_box(), None);
        let bad = Element::new("circle").with_attribute("r", "ten");
        assert_eq!(bad.bounding_box(), None);
        let bad_path = Element::new("path").with_attribute("d", "M 10 nope");
        assert_eq!(bad_path.bounding_box(), None);
    }

    #[test]
    fn set_attribute_returns_previous_value() {
        let mut e = Element::new("circle").with_attribute("r", "1");
        assert_eq!(e.set_attribute("r".into(), "2".into()).as_deref(), Some("1"));
        assert_eq!(e.attribute("r"), Some("2"));
        assert_eq!(e.remove_attribute("r").as_deref(), Some("2"));
        assert_eq!(e.attribute("r"), None);
    }

    #[test]
    fn lengths_accept_px_suffix() {
        assert_eq!(parse_length(" 12px "), Some(12.0));
        assert_eq!(parse_length("1e1"), Some(10.0));
        assert_eq!(parse_length("50%"), None);
        assert_eq!(parse_length("inf"), None);
    }
}
