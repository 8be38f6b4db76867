//! In-memory item store.
//!
//! Items live in insertion order for the lifetime of the owning screen. The
//! only mutations are appending a new item and changing an item's status;
//! nothing is ever removed or reordered.

use std::collections::BTreeMap;

use super::model::{ItemStatus, ItemType, StudyItem};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemStore {
    items: Vec<StudyItem>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<StudyItem>) -> Self {
        Self { items }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn items(&self) -> &[StudyItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items of one type, in original order.
    pub fn of_type(&self, item_type: ItemType) -> Vec<StudyItem> {
        self.items
            .iter()
            .filter(|item| item.item_type() == item_type)
            .cloned()
            .collect()
    }

    /// Maps each type present in the store to its items in original order.
    pub fn group_by_type(&self) -> BTreeMap<ItemType, Vec<StudyItem>> {
        let mut groups: BTreeMap<ItemType, Vec<StudyItem>> = BTreeMap::new();
        for item in &self.items {
            groups.entry(item.item_type()).or_default().push(item.clone());
        }
        groups
    }

    /// Number of items for every type, including the empty ones.
    pub fn count_by_type(&self) -> BTreeMap<ItemType, usize> {
        let mut counts: BTreeMap<ItemType, usize> =
            ItemType::ALL.into_iter().map(|t| (t, 0)).collect();
        for item in &self.items {
            *counts.entry(item.item_type()).or_default() += 1;
        }
        counts
    }

    /// Completed items, in order.
    pub fn completed(&self) -> impl Iterator<Item = &StudyItem> {
        self.items.iter().filter(|item| item.is_completed())
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn push(&mut self, item: StudyItem) {
        tracing::debug!(item_type = %item.item_type(), title = item.title(), "item added");
        self.items.push(item);
    }

    /// Sets `status` on every record equal to `item`.
    ///
    /// Returns how many records actually changed, so re-applying the current
    /// status returns 0.
    pub fn update_status(&mut self, item: &StudyItem, status: ItemStatus) -> usize {
        let mut changed = 0;
        for existing in self.items.iter_mut().filter(|existing| **existing == *item) {
            if existing.status() != status {
                existing.set_status(status);
                changed += 1;
            }
        }
        if changed > 0 {
            tracing::info!(
                title = item.title(),
                from = %item.status(),
                to = %status,
                changed,
                "item status updated"
            );
        }
        changed
    }
}
