// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reactive recomputation: keep a ring's layers in step with focus, config, and target geometry.
//!
//! ## Lifecycle
//!
//! [`FocusRing`] is a small state machine driven by the host:
//!
//! - [`FocusRing::set_props`] / [`FocusRing::set_focused`] record a trigger. Any number of
//!   triggers between two [`FocusRing::sync`] calls coalesce into a single recomputation
//!   that sees the latest values.
//! - [`FocusRing::sync`] applies pending triggers. When the ring should be visible it
//!   computes layers (`Computing` then `Active`) and holds exactly one subscription on the
//!   target; otherwise it disconnects and clears its layers (`Idle`).
//! - [`FocusRing::handle_mutations`] feeds delivered geometry changes back in. Only records
//!   carrying the ring's current subscription and an allow-listed attribute count, except
//!   that any record for the subscription tears the ring down once the target is gone.
//!   `sync` also tears down an active ring whose target has disappeared, so a removal that
//!   reports nothing is still noticed.
//! - [`FocusRing::unmount`] tears down synchronously. Anything delivered afterwards is
//!   ignored, so a recomputation racing the teardown cannot resurrect state.
//!
//! Layers from the previous computation stay visible until a new computation replaces
//! them, so there is no blank frame between a config or target trigger and the next `sync`.
//! Losing focus or becoming disabled hides the rings immediately.
//!
//! ```
//! use understory_focus_ring::reactive::{FocusRing, FocusRingProps, RingState};
//! # use kurbo::Rect;
//! # use understory_focus_ring::element::GraphicalElement;
//! # use understory_focus_ring::error::BoundsError;
//! # use understory_focus_ring::observe::{FocusHost, GeometryAttributes};
//! # struct Dot;
//! # impl GraphicalElement for Dot {
//! #     fn tag_name(&self) -> &str { "circle" }
//! #     fn attribute(&self, name: &str) -> Option<&str> {
//! #         match name { "cx" | "cy" => Some("10"), "r" => Some("4"), _ => None }
//! #     }
//! #     fn bounding_box(&self) -> Result<Rect, BoundsError> { Ok(Rect::new(6.0, 6.0, 14.0, 14.0)) }
//! # }
//! # struct Host(Dot, u32);
//! # impl FocusHost<u8> for Host {
//! #     type Element = Dot;
//! #     type Subscription = u32;
//! #     fn element(&self, _: &u8) -> Option<&Dot> { Some(&self.0) }
//! #     fn observe(&mut self, _: &u8, _: GeometryAttributes) -> Option<u32> { self.1 += 1; Some(self.1) }
//! #     fn disconnect(&mut self, _: u32) {}
//! # }
//! # let mut host = Host(Dot, 0);
//! let mut ring = FocusRing::new(FocusRingProps::inline(0_u8, false));
//! ring.sync(&mut host);
//! assert_eq!(ring.state(), RingState::Idle);
//!
//! ring.set_focused(true);
//! ring.sync(&mut host);
//! assert_eq!(ring.state(), RingState::Active);
//! let view = ring.render();
//! assert!(view.rings.is_some());
//! assert_eq!(view.target, Some(0));
//! ```

use alloc::string::String;
use core::fmt::Debug;

use crate::adaptive::create_adaptive_focus_rings;
use crate::bounding_box::create_bounding_box_focus_rings;
use crate::config::{FocusConfig, FocusConfigPatch, FocusVariant};
use crate::layers::FocusRingLayers;
use crate::observe::{AttributeMutation, FocusHost, GeometryAttributes};
use crate::render::{DEFAULT_TEST_ID, FocusRingView, render_focus_rings};

/// Where the ring's target comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FocusTarget<K> {
    /// The target is the ring's own child and is rendered by the ring, after the rings.
    Inline(K),
    /// The target lives elsewhere; the ring only draws the rings.
    External(K),
}

impl<K> FocusTarget<K> {
    /// Pick a target from an optional child and an optional external reference.
    ///
    /// The child wins when both are present.
    pub fn from_parts(children: Option<K>, target_ref: Option<K>) -> Option<Self> {
        match (children, target_ref) {
            (Some(child), _) => Some(Self::Inline(child)),
            (None, Some(target)) => Some(Self::External(target)),
            (None, None) => None,
        }
    }

    /// Handle of the target element.
    pub fn key(&self) -> &K {
        match self {
            Self::Inline(key) | Self::External(key) => key,
        }
    }

    /// True for [`FocusTarget::Inline`].
    pub fn is_inline(&self) -> bool {
        matches!(self, Self::Inline(_))
    }
}

/// Inputs of a [`FocusRing`].
#[derive(Clone, Debug, PartialEq)]
pub struct FocusRingProps<K> {
    /// Target element, if any.
    pub target: Option<FocusTarget<K>>,
    /// Whether the target currently has focus.
    pub is_focused: bool,
    /// Base for the rings' test ids; [`DEFAULT_TEST_ID`] when `None`.
    pub data_test_id: Option<String>,
    /// Suppress the rings entirely.
    pub disabled: bool,
    /// Partial styling; unset fields use [`FocusConfig`] defaults.
    pub focus_config: FocusConfigPatch,
}

impl<K> FocusRingProps<K> {
    /// Props with the given target and focus, everything else default.
    pub fn new(target: Option<FocusTarget<K>>, is_focused: bool) -> Self {
        Self {
            target,
            is_focused,
            data_test_id: None,
            disabled: false,
            focus_config: FocusConfigPatch::new(),
        }
    }

    /// Props for a ring wrapping `child`.
    pub fn inline(child: K, is_focused: bool) -> Self {
        Self::new(Some(FocusTarget::Inline(child)), is_focused)
    }

    /// Props for a ring around an element rendered elsewhere.
    pub fn external(target: K, is_focused: bool) -> Self {
        Self::new(Some(FocusTarget::External(target)), is_focused)
    }

    /// Set the test id base.
    pub fn with_test_id(mut self, test_id: impl Into<String>) -> Self {
        self.data_test_id = Some(test_id.into());
        self
    }

    /// Set `disabled`.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the styling patch.
    pub fn with_config(mut self, focus_config: FocusConfigPatch) -> Self {
        self.focus_config = focus_config;
        self
    }

    fn wants_rings(&self) -> bool {
        self.is_focused && !self.disabled
    }
}

/// Where a [`FocusRing`] is in its lifecycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RingState {
    /// No layers, no subscription.
    #[default]
    Idle,
    /// A computation is in progress.
    Computing,
    /// Layers are current and the target is observed.
    Active,
}

/// Focus ring for one target, generic over the host's element handle `K` and
/// subscription handle `S`.
#[derive(Clone, Debug)]
pub struct FocusRing<K, S> {
    props: FocusRingProps<K>,
    config: FocusConfig,
    state: RingState,
    layers: Option<FocusRingLayers>,
    subscription: Option<(K, S)>,
    pending: bool,
    unmounted: bool,
    epoch: u64,
}

impl<K, S> FocusRing<K, S>
where
    K: Clone + PartialEq + Debug,
    S: Copy + Eq + Debug,
{
    /// A ring that will evaluate `props` on the first [`sync`](Self::sync).
    pub fn new(props: FocusRingProps<K>) -> Self {
        Self {
            config: props.focus_config.resolve(),
            props,
            state: RingState::Idle,
            layers: None,
            subscription: None,
            pending: true,
            unmounted: false,
            epoch: 0,
        }
    }

    /// Current props.
    pub fn props(&self) -> &FocusRingProps<K> {
        &self.props
    }

    /// Resolved styling.
    pub fn config(&self) -> &FocusConfig {
        &self.config
    }

    /// Layers from the latest computation.
    pub fn layers(&self) -> Option<&FocusRingLayers> {
        self.layers.as_ref()
    }

    /// Lifecycle state.
    pub fn state(&self) -> RingState {
        self.state
    }

    /// Number of completed layer computations.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// True if a trigger is waiting for [`sync`](Self::sync).
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// True after [`unmount`](Self::unmount).
    pub fn is_unmounted(&self) -> bool {
        self.unmounted
    }

    /// Replace the props.
    ///
    /// Marks the ring pending when focus, `disabled`, the target, or the resolved
    /// config differ from the current values. The test id only affects rendering.
    pub fn set_props(&mut self, props: FocusRingProps<K>) {
        if self.unmounted {
            return;
        }
        let config = props.focus_config.resolve();
        if props.is_focused != self.props.is_focused
            || props.disabled != self.props.disabled
            || props.target != self.props.target
            || config != self.config
        {
            self.pending = true;
        }
        self.config = config;
        self.props = props;
    }

    /// Update focus only.
    pub fn set_focused(&mut self, is_focused: bool) {
        if self.unmounted || self.props.is_focused == is_focused {
            return;
        }
        self.props.is_focused = is_focused;
        self.pending = true;
    }

    /// Apply pending triggers against `host`.
    ///
    /// With nothing pending, an active ring whose target no longer resolves is torn down.
    /// Returns `true` if anything changed.
    pub fn sync<H>(&mut self, host: &mut H) -> bool
    where
        H: FocusHost<K, Subscription = S>,
    {
        if self.unmounted {
            return false;
        }
        if !self.pending {
            if self.state == RingState::Active && self.target_is_gone(host) {
                log::debug!("focus target went away while focused");
                self.teardown(host);
                return true;
            }
            return false;
        }
        self.pending = false;

        let key = match &self.props.target {
            Some(target) if self.props.wants_rings() => Some(target.key().clone()),
            _ => None,
        };
        let Some(key) = key else {
            self.teardown(host);
            return true;
        };
        if host.element(&key).is_none() {
            log::debug!("focus target {key:?} is not available");
            self.teardown(host);
            return true;
        }

        if self
            .subscription
            .as_ref()
            .is_some_and(|(observed, _)| *observed != key)
        {
            self.disconnect(host);
        }
        self.recompute(host, &key);
        if self.subscription.is_none() {
            match host.observe(&key, GeometryAttributes::all()) {
                Some(subscription) => {
                    log::trace!("observing {key:?} as {subscription:?}");
                    self.subscription = Some((key, subscription));
                }
                None => log::debug!("host cannot observe {key:?}; rings will not follow it"),
            }
        }
        true
    }

    /// Feed delivered attribute changes.
    ///
    /// Recomputes when any record carries this ring's subscription and names a geometry
    /// attribute. Any record for the subscription tears down instead if the target is gone,
    /// whatever it names. Returns `true` if either happened.
    pub fn handle_mutations<'a, H, I>(&mut self, host: &mut H, mutations: I) -> bool
    where
        H: FocusHost<K, Subscription = S>,
        I: IntoIterator<Item = AttributeMutation<'a, S>>,
    {
        if self.unmounted || self.state != RingState::Active {
            return false;
        }
        let Some((key, subscription)) = self.subscription.clone() else {
            return false;
        };
        let geometry = GeometryAttributes::all();
        let (mut ours, mut relevant) = (false, false);
        for m in mutations {
            if m.subscription == subscription {
                ours = true;
                relevant |= geometry.matches_name(m.attribute_name);
            }
        }
        if !ours {
            return false;
        }
        if host.element(&key).is_none() {
            log::debug!("focus target {key:?} went away");
            self.teardown(host);
            return true;
        }
        if relevant {
            self.recompute(host, &key);
        }
        relevant
    }

    /// Tear down synchronously. The ring ignores all input afterwards.
    pub fn unmount<H>(&mut self, host: &mut H)
    where
        H: FocusHost<K, Subscription = S>,
    {
        if self.unmounted {
            return;
        }
        self.teardown(host);
        self.pending = false;
        self.unmounted = true;
    }

    /// What to draw for the current state.
    pub fn render(&self) -> FocusRingView<K> {
        if self.unmounted {
            return FocusRingView::empty();
        }
        let Some(target) = &self.props.target else {
            return FocusRingView::empty();
        };
        let child = match target {
            FocusTarget::Inline(key) => Some(key.clone()),
            FocusTarget::External(_) => None,
        };
        if !self.props.wants_rings() {
            return FocusRingView {
                rings: None,
                target: child,
            };
        }
        let base = self.props.data_test_id.as_deref().unwrap_or(DEFAULT_TEST_ID);
        FocusRingView {
            rings: render_focus_rings(self.layers.as_ref(), base),
            target: child,
        }
    }

    fn target_is_gone<H>(&self, host: &H) -> bool
    where
        H: FocusHost<K, Subscription = S>,
    {
        let key = match (&self.subscription, &self.props.target) {
            (Some((observed, _)), _) => observed,
            (None, Some(target)) => target.key(),
            (None, None) => return false,
        };
        host.element(key).is_none()
    }

    fn recompute<H>(&mut self, host: &H, key: &K)
    where
        H: FocusHost<K, Subscription = S>,
    {
        self.state = RingState::Computing;
        let element = host.element(key);
        let layers = match self.config.variant {
            FocusVariant::Adaptive => create_adaptive_focus_rings(element, &self.config),
            FocusVariant::BoundingBox => create_bounding_box_focus_rings(element, &self.config),
        };
        self.epoch += 1;
        log::trace!(
            "recomputed rings for {key:?} (epoch {}, present: {})",
            self.epoch,
            layers.is_some()
        );
        self.layers = layers;
        self.state = RingState::Active;
    }

    fn teardown<H>(&mut self, host: &mut H)
    where
        H: FocusHost<K, Subscription = S>,
    {
        self.disconnect(host);
        self.layers = None;
        self.state = RingState::Idle;
    }

    fn disconnect<H>(&mut self, host: &mut H)
    where
        H: FocusHost<K, Subscription = S>,
    {
        if let Some((key, subscription)) = self.subscription.take() {
            log::trace!("disconnecting {subscription:?} from {key:?}");
            host.disconnect(subscription);
        }
    }
}
