// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Computed ring layers: shape kind plus SVG attributes.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use core::fmt;

use crate::color::Color;
use crate::shape::ShapeKind;

/// Value of one SVG attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    /// A number in user units.
    Number(f64),
    /// Anything else: colors, keywords, point lists, path data.
    Text(String),
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for AttributeValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<Color> for AttributeValue {
    fn from(c: Color) -> Self {
        Self::Text(c.to_string())
    }
}

/// SVG attributes keyed by name, iterated in name order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Props(BTreeMap<&'static str, AttributeValue>);

impl Props {
    /// Empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or replace) an attribute.
    pub fn set(&mut self, name: &'static str, value: impl Into<AttributeValue>) {
        self.0.insert(name, value.into());
    }

    /// Raw attribute value.
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.0.get(name)
    }

    /// Attribute value if it is a number.
    pub fn number(&self, name: &str) -> Option<f64> {
        match self.get(name)? {
            AttributeValue::Number(n) => Some(*n),
            AttributeValue::Text(_) => None,
        }
    }

    /// Attribute value if it is text.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            AttributeValue::Text(s) => Some(s),
            AttributeValue::Number(_) => None,
        }
    }

    /// Iterate attributes in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &AttributeValue)> {
        self.0.iter().map(|(k, v)| (*k, v))
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A shape ready to be drawn: tag kind plus attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderableShape {
    /// Shape kind; its tag name is the element to create.
    pub kind: ShapeKind,
    /// Attributes to set on the element.
    pub props: Props,
}

impl RenderableShape {
    /// Create a shape with no attributes.
    pub fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            props: Props::new(),
        }
    }

    /// Stroke width of the shape, if set.
    pub fn stroke_width(&self) -> Option<f64> {
        self.props.number("stroke-width")
    }
}

/// Outer and inner rings for one focus state.
///
/// Both rings always share a shape kind. Layers are replaced wholesale on
/// every recomputation; they are never edited in place.
#[derive(Clone, Debug, PartialEq)]
pub struct FocusRingLayers {
    /// Ring drawn first, furthest from the target.
    pub outer_ring: RenderableShape,
    /// Ring drawn on top of the outer ring, closest to the target.
    pub inner_ring: RenderableShape,
}

impl FocusRingLayers {
    /// Shape kind shared by both rings.
    pub fn kind(&self) -> ShapeKind {
        self.outer_ring.kind
    }
}
