// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The live target element seen by the ring builders.

use kurbo::Rect;

use crate::error::BoundsError;

/// Read-only view of a rendered graphical element.
///
/// Implement this for whatever the host uses to represent rendered SVG
/// elements (see the `scene_adapter` feature for an implementation over
/// `understory_svg_scene`). The ring builders never mutate the target.
pub trait GraphicalElement {
    /// Lower-case tag name, e.g. `circle`.
    fn tag_name(&self) -> &str;

    /// Raw attribute value.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Resolved style value overriding the attribute, if the host has one.
    fn computed_style(&self, _property: &str) -> Option<&str> {
        None
    }

    /// Axis-aligned visual bounds of the fill geometry (stroke excluded).
    fn bounding_box(&self) -> Result<Rect, BoundsError>;

    /// The value that is actually rendered: computed style first, then attribute.
    fn effective_value(&self, name: &str) -> Option<&str> {
        self.computed_style(name).or_else(|| self.attribute(name))
    }
}

impl<T: GraphicalElement + ?Sized> GraphicalElement for &T {
    fn tag_name(&self) -> &str {
        (**self).tag_name()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        (**self).attribute(name)
    }

    fn computed_style(&self, property: &str) -> Option<&str> {
        (**self).computed_style(property)
    }

    fn bounding_box(&self) -> Result<Rect, BoundsError> {
        (**self).bounding_box()
    }
}
