// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ring renderer: computed layers to drawable elements.
//!
//! No geometry happens here. Layers become two shapes inside a non-interactive
//! group, outer first, each tagged with a stable test id derived from a base
//! name: `<base>-focus-outer` and `<base>-focus-inner`.

use alloc::format;
use alloc::string::String;
use core::fmt::{self, Write};

use crate::layers::{AttributeValue, FocusRingLayers, Props, RenderableShape};
use crate::shape::ShapeKind;

/// Test id base used when the caller does not supply one.
pub const DEFAULT_TEST_ID: &str = "focus-ring";

/// One drawable ring element.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedShape {
    /// Element kind.
    pub kind: ShapeKind,
    /// Layer attributes plus `data-testid`.
    pub attributes: Props,
}

impl RenderedShape {
    fn from_layer(layer: &RenderableShape, test_id: String) -> Self {
        let mut attributes = layer.props.clone();
        attributes.set("data-testid", test_id);
        Self {
            kind: layer.kind,
            attributes,
        }
    }

    /// The element's `data-testid`.
    pub fn test_id(&self) -> Option<&str> {
        self.attributes.text("data-testid")
    }

    /// Write this element as SVG markup.
    pub fn write_svg(&self, out: &mut impl Write) -> fmt::Result {
        write!(out, "<{}", self.kind.tag_name())?;
        for (name, value) in self.attributes.iter() {
            write!(out, " {name}=\"")?;
            write_escaped(out, value)?;
            out.write_char('"')?;
        }
        out.write_str("/>")
    }
}

/// The pair of ring elements wrapped in a `pointer-events: none` group.
#[derive(Clone, Debug, PartialEq)]
pub struct RingGroup {
    /// Drawn first.
    pub outer: RenderedShape,
    /// Drawn on top of `outer`.
    pub inner: RenderedShape,
}

impl RingGroup {
    /// Elements in paint order.
    pub fn shapes(&self) -> [&RenderedShape; 2] {
        [&self.outer, &self.inner]
    }

    /// Find a ring by its `data-testid`.
    pub fn by_test_id(&self, test_id: &str) -> Option<&RenderedShape> {
        self.shapes()
            .into_iter()
            .find(|s| s.test_id() == Some(test_id))
    }

    /// Write the group as SVG markup.
    pub fn write_svg(&self, out: &mut impl Write) -> fmt::Result {
        out.write_str("<g pointer-events=\"none\">")?;
        self.outer.write_svg(out)?;
        self.inner.write_svg(out)?;
        out.write_str("</g>")
    }

    /// The group as an SVG markup string.
    pub fn to_svg_string(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_svg(&mut out);
        out
    }
}

/// Map layers to the ring group; `None` layers render nothing.
pub fn render_focus_rings(
    layers: Option<&FocusRingLayers>,
    test_id_base: &str,
) -> Option<RingGroup> {
    let layers = layers?;
    Some(RingGroup {
        outer: RenderedShape::from_layer(
            &layers.outer_ring,
            format!("{test_id_base}-focus-outer"),
        ),
        inner: RenderedShape::from_layer(
            &layers.inner_ring,
            format!("{test_id_base}-focus-inner"),
        ),
    })
}

/// What a focus ring contributes to a frame.
///
/// Paint order is `rings` first, then `target` when present. A ring in
/// reference mode never renders its target; the caller paints it after the rings.
#[derive(Clone, Debug, PartialEq)]
pub struct FocusRingView<K> {
    /// Ring group, or `None` when nothing is drawn.
    pub rings: Option<RingGroup>,
    /// Inline child to draw on top of the rings.
    pub target: Option<K>,
}

impl<K> FocusRingView<K> {
    /// A view that draws nothing.
    pub fn empty() -> Self {
        Self {
            rings: None,
            target: None,
        }
    }

    /// True if the view draws nothing.
    pub fn is_empty(&self) -> bool {
        self.rings.is_none() && self.target.is_none()
    }
}

fn write_escaped(out: &mut impl Write, value: &AttributeValue) -> fmt::Result {
    match value {
        AttributeValue::Number(n) => write!(out, "{n}"),
        AttributeValue::Text(s) => {
            for c in s.chars() {
                match c {
                    '"' => out.write_str("&quot;")?,
                    '&' => out.write_str("&amp;")?,
                    '<' => out.write_str("&lt;")?,
                    _ => out.write_char(c)?,
                }
            }
            Ok(())
        }
    }
}
