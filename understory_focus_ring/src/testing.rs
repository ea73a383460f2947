// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory element and host used by unit tests.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use kurbo::Rect;

use crate::element::GraphicalElement;
use crate::error::BoundsError;
use crate::observe::{FocusHost, GeometryAttributes};

#[derive(Clone, Debug)]
pub(crate) struct TestElement {
    tag: String,
    attrs: Vec<(String, String)>,
    style: Vec<(String, String)>,
    bounds: Result<Rect, String>,
}

impl TestElement {
    pub(crate) fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: Vec::new(),
            style: Vec::new(),
            bounds: Ok(Rect::new(0.0, 0.0, 10.0, 10.0)),
        }
    }

    pub(crate) fn attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    pub(crate) fn style(mut self, name: &str, value: &str) -> Self {
        self.style.push((name.to_string(), value.to_string()));
        self
    }

    pub(crate) fn bounds(mut self, rect: Rect) -> Self {
        self.bounds = Ok(rect);
        self
    }

    pub(crate) fn failing_bounds(mut self, reason: &str) -> Self {
        self.bounds = Err(reason.to_string());
        self
    }

    pub(crate) fn set_attr(&mut self, name: &str, value: &str) {
        match self.attrs.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.attrs.push((name.to_string(), value.to_string())),
        }
    }

    pub(crate) fn set_bounds(&mut self, rect: Rect) {
        self.bounds = Ok(rect);
    }
}

impl GraphicalElement for TestElement {
    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    fn computed_style(&self, property: &str) -> Option<&str> {
        self.style
            .iter()
            .find(|(n, _)| n == property)
            .map(|(_, v)| v.as_str())
    }

    fn bounding_box(&self) -> Result<Rect, BoundsError> {
        self.bounds
            .clone()
            .map_err(|reason| BoundsError::new(self.tag.clone(), reason))
    }
}

/// Host keyed by `u32`, with `u32` subscriptions.
#[derive(Debug, Default)]
pub(crate) struct TestHost {
    elements: Vec<(u32, TestElement)>,
    // (subscription, key)
    subscriptions: Vec<(u32, u32)>,
    next_subscription: u32,
    pub(crate) observe_calls: usize,
    pub(crate) refuse_observe: bool,
}

impl TestHost {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, key: u32, element: TestElement) -> Self {
        self.elements.push((key, element));
        self
    }

    pub(crate) fn remove(&mut self, key: u32) {
        self.elements.retain(|(k, _)| *k != key);
    }

    pub(crate) fn element_mut(&mut self, key: u32) -> &mut TestElement {
        &mut self
            .elements
            .iter_mut()
            .find(|(k, _)| *k == key)
            .expect("unknown test element")
            .1
    }

    pub(crate) fn active_subscriptions(&self) -> usize {
        self.subscriptions.len()
    }

    pub(crate) fn subscription_for(&self, key: u32) -> Option<u32> {
        self.subscriptions
            .iter()
            .find(|(_, k)| *k == key)
            .map(|(s, _)| *s)
    }
}

impl FocusHost<u32> for TestHost {
    type Element = TestElement;
    type Subscription = u32;

    fn element(&self, key: &u32) -> Option<&TestElement> {
        self.elements
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, e)| e)
    }

    fn observe(&mut self, key: &u32, _attributes: GeometryAttributes) -> Option<u32> {
        self.observe_calls += 1;
        if self.refuse_observe {
            return None;
        }
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.subscriptions.push((id, *key));
        Some(id)
    }

    fn disconnect(&mut self, subscription: u32) {
        self.subscriptions.retain(|(s, _)| *s != subscription);
    }
}
