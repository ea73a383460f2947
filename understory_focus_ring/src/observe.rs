// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry-change notification: the attribute allow-list and the host interface.
//!
//! ## Overview
//!
//! A focused ring has to follow its target when the target moves or changes size.
//! Hosts report changes through [`FocusHost`]: the ring subscribes to its target with
//! the [`GeometryAttributes`] allow-list, and the host later hands back
//! [`AttributeMutation`]s tagged with that subscription. How the host notices changes
//! (an observer API, polling, explicit invalidation) is up to the host.
//!
//! Only attributes in the allow-list trigger recomputation. Color, opacity, stroke
//! style, `class`, and `style` changes never do, even if a host reports them.

use bitflags::bitflags;

use crate::element::GraphicalElement;

bitflags! {
    /// Attributes whose change can move or resize a shape.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct GeometryAttributes: u16 {
        /// `x`
        const X      = 1 << 0;
        /// `y`
        const Y      = 1 << 1;
        /// `width`
        const WIDTH  = 1 << 2;
        /// `height`
        const HEIGHT = 1 << 3;
        /// `cx`
        const CX     = 1 << 4;
        /// `cy`
        const CY     = 1 << 5;
        /// `r`
        const R      = 1 << 6;
        /// `rx`
        const RX     = 1 << 7;
        /// `ry`
        const RY     = 1 << 8;
        /// `x1`
        const X1     = 1 << 9;
        /// `y1`
        const Y1     = 1 << 10;
        /// `x2`
        const X2     = 1 << 11;
        /// `y2`
        const Y2     = 1 << 12;
        /// `d`
        const D      = 1 << 13;
        /// `points`
        const POINTS = 1 << 14;
    }
}

const NAMES: [(GeometryAttributes, &str); 15] = [
    (GeometryAttributes::X, "x"),
    (GeometryAttributes::Y, "y"),
    (GeometryAttributes::WIDTH, "width"),
    (GeometryAttributes::HEIGHT, "height"),
    (GeometryAttributes::CX, "cx"),
    (GeometryAttributes::CY, "cy"),
    (GeometryAttributes::R, "r"),
    (GeometryAttributes::RX, "rx"),
    (GeometryAttributes::RY, "ry"),
    (GeometryAttributes::X1, "x1"),
    (GeometryAttributes::Y1, "y1"),
    (GeometryAttributes::X2, "x2"),
    (GeometryAttributes::Y2, "y2"),
    (GeometryAttributes::D, "d"),
    (GeometryAttributes::POINTS, "points"),
];

impl GeometryAttributes {
    /// Flag for an SVG attribute name, if it is a geometry attribute.
    ///
    /// Distinct from the generated `from_name`, which takes flag names like `"POINTS"`.
    pub fn from_attribute_name(name: &str) -> Option<Self> {
        NAMES.iter().find(|(_, n)| *n == name).map(|(f, _)| *f)
    }

    /// Attribute names of the set flags, in declaration order.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        NAMES
            .into_iter()
            .filter(move |(f, _)| self.contains(*f))
            .map(|(_, n)| n)
    }

    /// True if `name` is one of the set flags.
    pub fn matches_name(self, name: &str) -> bool {
        Self::from_attribute_name(name).is_some_and(|f| self.contains(f))
    }
}

/// One reported attribute change.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AttributeMutation<'a, S> {
    /// Subscription the change was reported for.
    pub subscription: S,
    /// Name of the changed attribute.
    pub attribute_name: &'a str,
}

/// Element lookup plus geometry-change notification, supplied by the host.
///
/// `K` is the host's handle for a target element.
pub trait FocusHost<K> {
    /// Element type the ring builders read.
    type Element: GraphicalElement + ?Sized;
    /// Handle for one active subscription.
    type Subscription: Copy + Eq + core::fmt::Debug;

    /// Resolve a handle to a live element; `None` when it is gone.
    fn element(&self, key: &K) -> Option<&Self::Element>;

    /// Start reporting changes of `attributes` on `key`; `None` if the host cannot observe it.
    fn observe(&mut self, key: &K, attributes: GeometryAttributes) -> Option<Self::Subscription>;

    /// Stop a subscription. Undelivered changes for it must not be reported afterwards.
    fn disconnect(&mut self, subscription: Self::Subscription);
}
