// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry extraction errors.
//!
//! These never leave the crate's ring builders: every failure collapses to
//! "no rings". They are public so that hosts can implement
//! [`GraphicalElement`](crate::element::GraphicalElement) and so that the
//! extraction functions can be used on their own.

use alloc::string::String;
use thiserror::Error;

/// Visual bounds could not be read from the host.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("bounds unavailable for <{tag}>: {reason}")]
pub struct BoundsError {
    /// Tag name of the element that was measured.
    pub tag: String,
    /// Host-provided reason.
    pub reason: String,
}

impl BoundsError {
    /// Create a bounds error for an element with the given tag.
    pub fn new(tag: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            reason: reason.into(),
        }
    }
}

/// Failure to derive geometry from a target element.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ExtractError {
    /// No element was available to measure.
    #[error("target element is not available")]
    MissingElement,
    /// The element's tag is not a supported shape kind.
    #[error("unsupported shape kind <{0}>")]
    UnsupportedShape(String),
    /// A geometry attribute held a value that does not parse as a length.
    #[error("attribute `{name}` has invalid value {value:?}")]
    InvalidAttribute {
        /// Attribute name.
        name: &'static str,
        /// Raw value as read from the element.
        value: String,
    },
    /// The bounding box has a non-positive width or height.
    #[error("degenerate bounds {width}x{height}")]
    DegenerateBounds {
        /// Measured width.
        width: f64,
        /// Measured height.
        height: f64,
    },
    /// Reading the bounding box failed.
    #[error(transparent)]
    Bounds(#[from] BoundsError),
}
