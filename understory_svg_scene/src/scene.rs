// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene storage, handles, and attribute observation.

use crate::element::Element;

/// Identifier for an element in the scene (generational).
///
/// Removing an element makes its id stale; a later insert that reuses the slot
/// gets a higher generation, so stale ids never alias new elements.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ElementId(u32, u32);

impl ElementId {
    fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    fn idx(self) -> usize {
        self.0 as usize
    }

    /// Slot index and generation, mostly useful for debugging output.
    pub fn parts(self) -> (u32, u32) {
        (self.0, self.1)
    }
}

/// Identifier of a registered attribute observer.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ObserverId(u64);

/// What a [`MutationRecord`] reports.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MutationKind {
    /// An attribute or style override changed.
    Attribute,
    /// The observed element was removed from the scene.
    Removed,
}

/// One observed change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MutationRecord {
    /// Observer the record is queued for.
    pub observer: ObserverId,
    /// Element that changed.
    pub target: ElementId,
    /// Kind of change.
    pub kind: MutationKind,
    /// Changed attribute. Style overrides are reported as `style`; empty for removals.
    pub attribute_name: String,
    /// Value before the change, if there was one.
    pub old_value: Option<String>,
}

#[derive(Clone, Debug)]
struct Observer {
    id: ObserverId,
    target: ElementId,
    // Empty means every attribute.
    filter: Vec<String>,
}

impl Observer {
    fn accepts(&self, target: ElementId, name: &str) -> bool {
        self.target == target && (self.filter.is_empty() || self.filter.iter().any(|f| f == name))
    }
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    element: Element,
}

/// A retained set of SVG elements with batched mutation records.
///
/// Attribute writes are applied immediately; the matching [`MutationRecord`]s
/// are queued and only handed out by [`Scene::take_records`], so observers see
/// changes one delivery step after they happen.
#[derive(Default)]
pub struct Scene {
    slots: Vec<Option<Slot>>,
    generations: Vec<u32>, // last generation per slot (persists across frees)
    free_list: Vec<usize>,
    observers: Vec<Observer>,
    next_observer: u64,
    records: Vec<MutationRecord>,
}

impl core::fmt::Debug for Scene {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let alive = self.slots.iter().filter(|s| s.is_some()).count();
        f.debug_struct("Scene")
            .field("elements_total", &self.slots.len())
            .field("elements_alive", &alive)
            .field("observers", &self.observers.len())
            .field("pending_records", &self.records.len())
            .finish_non_exhaustive()
    }
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an element and return its handle.
    pub fn insert(&mut self, element: Element) -> ElementId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.slots[idx] = Some(Slot {
                generation,
                element,
            });
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.slots.push(Some(Slot {
                generation,
                element,
            }));
            self.generations.push(generation);
            (self.slots.len() - 1, generation)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "ElementId uses 32-bit indices by design."
        )]
        let idx = idx as u32;
        ElementId::new(idx, generation)
    }

    /// Remove an element.
    ///
    /// Every observer of it gets a [`MutationKind::Removed`] record, whatever its filter.
    /// Observers stay registered until disconnected.
    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        if !self.is_alive(id) {
            return None;
        }
        let slot = self.slots[id.idx()].take()?;
        self.free_list.push(id.idx());
        for o in self.observers.iter().filter(|o| o.target == id) {
            self.records.push(MutationRecord {
                observer: o.id,
                target: id,
                kind: MutationKind::Removed,
                attribute_name: String::new(),
                old_value: None,
            });
        }
        log::trace!("removed element {:?}", id.parts());
        Some(slot.element)
    }

    /// Returns true if `id` refers to a live element.
    pub fn is_alive(&self, id: ElementId) -> bool {
        self.slots
            .get(id.idx())
            .and_then(|s| s.as_ref())
            .is_some_and(|s| s.generation == id.1)
    }

    /// Access a live element.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.slots
            .get(id.idx())?
            .as_ref()
            .filter(|s| s.generation == id.1)
            .map(|s| &s.element)
    }

    fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.slots
            .get_mut(id.idx())?
            .as_mut()
            .filter(|s| s.generation == id.1)
            .map(|s| &mut s.element)
    }

    /// Set an attribute. Returns false if `id` is stale.
    pub fn set_attribute(
        &mut self,
        id: ElementId,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> bool {
        let name = name.into();
        let Some(element) = self.get_mut(id) else {
            return false;
        };
        let old_value = element.set_attribute(name.clone(), value.into());
        self.record(id, &name, old_value);
        true
    }

    /// Remove an attribute. Returns false if `id` is stale or the attribute was absent.
    pub fn remove_attribute(&mut self, id: ElementId, name: &str) -> bool {
        let Some(element) = self.get_mut(id) else {
            return false;
        };
        let Some(old_value) = element.remove_attribute(name) else {
            return false;
        };
        self.record(id, name, Some(old_value));
        true
    }

    /// Set (`Some`) or clear (`None`) a style override. Reported to observers as `style`.
    pub fn set_style(
        &mut self,
        id: ElementId,
        property: impl Into<String>,
        value: Option<String>,
    ) -> bool {
        let Some(element) = self.get_mut(id) else {
            return false;
        };
        let old_value = element.set_style(property.into(), value);
        self.record(id, "style", old_value);
        true
    }

    /// Start observing attribute changes on `target`.
    ///
    /// `filter` lists the attribute names of interest; an empty filter observes all attributes.
    pub fn observe<I, S>(&mut self, target: ElementId, filter: I) -> ObserverId
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push(Observer {
            id,
            target,
            filter: filter.into_iter().map(Into::into).collect(),
        });
        log::trace!("observer {} attached to element {:?}", id.0, target.parts());
        id
    }

    /// Stop an observer and drop its undelivered records.
    pub fn disconnect(&mut self, observer: ObserverId) {
        self.observers.retain(|o| o.id != observer);
        self.records.retain(|r| r.observer != observer);
        log::trace!("observer {} disconnected", observer.0);
    }

    /// Number of live observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Records queued since the last delivery.
    pub fn pending_records(&self) -> &[MutationRecord] {
        &self.records
    }

    /// Deliver (and clear) the queued records in the order they were produced.
    pub fn take_records(&mut self) -> Vec<MutationRecord> {
        core::mem::take(&mut self.records)
    }

    fn record(&mut self, target: ElementId, name: &str, old_value: Option<String>) {
        for o in self.observers.iter().filter(|o| o.accepts(target, name)) {
            self.records.push(MutationRecord {
                observer: o.id,
                target,
                kind: MutationKind::Attribute,
                attribute_name: name.to_owned(),
                old_value: old_value.clone(),
            });
        }
    }
}
