//! The item collection store: mutations, moderation, and queries.

use std::thread;
use std::time::Duration;

use chrono::Utc;

use crate::error::{CampusfindError, Result};
use crate::session::{SessionStore, UserProfile};
use crate::storage::Storage;
use crate::SIMULATED_LATENCY;

use super::{Item, ItemDraft, ItemFilters, ItemKind, ItemPatch, ItemStatus};

/// Storage slot holding the persisted item collection.
pub const ITEMS_SLOT: &str = "items";

/// Listing counts for the moderation dashboard.
///
/// `lost` and `found` count approved listings only, matching what the
/// public pages show; `pending` and `resolved` count across the whole
/// collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemStats {
    pub total: usize,
    pub lost: usize,
    pub found: usize,
    pub pending: usize,
    pub resolved: usize,
}

/// Owns the full item collection and is its sole mutator.
///
/// Every mutation simulates a fixed network round-trip, then funnels
/// through one commit: mutate memory, stamp `updated_at`, rewrite the
/// persisted snapshot wholesale.
pub struct ItemStore<S: Storage> {
    items: Vec<Item>,
    storage: S,
    latency: Duration,
    loading: bool,
    error: Option<String>,
}

impl<S: Storage> ItemStore<S> {
    /// Open the store over `storage`.
    ///
    /// An existing snapshot wins over the seed. With no snapshot, the
    /// seed is loaded and persisted immediately, so every cold start
    /// after the first replays the same state.
    pub fn open(storage: S, seed: Vec<Item>) -> Result<Self> {
        let mut store = Self {
            items: Vec::new(),
            storage,
            latency: SIMULATED_LATENCY,
            loading: false,
            error: None,
        };

        match store.storage.read(ITEMS_SLOT)? {
            Some(snapshot) => {
                let items: Vec<Item> = serde_json::from_str(&snapshot)?;
                tracing::debug!("restored {} items from snapshot", items.len());
                store.items = items;
            }
            None => {
                tracing::debug!("no snapshot; seeding {} items", seed.len());
                store.items = seed;
                store.commit()?;
            }
        }

        Ok(store)
    }

    /// Override the simulated round-trip delay. Tests pass
    /// `Duration::ZERO`.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Whether an operation is in flight. Read by the UI to render
    /// spinners.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message from the most recent failed operation, if the operation
    /// after it has not yet cleared it.
    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Post a new item on behalf of the active session.
    ///
    /// Fails with `NotAuthenticated` when nobody is logged in. Admin
    /// posters skip the moderation queue. The new item is prepended so
    /// the default listing order stays newest-first.
    pub fn create<A: Storage>(
        &mut self,
        draft: ItemDraft,
        session: &SessionStore<A>,
    ) -> Result<Item> {
        self.begin();
        let result = self.try_create(draft, session.current_user().cloned());
        self.finish(&result);
        result
    }

    fn try_create(&mut self, draft: ItemDraft, poster: Option<UserProfile>) -> Result<Item> {
        self.simulate_roundtrip();

        let poster = poster.ok_or(CampusfindError::NotAuthenticated)?;
        let item = Item::new(draft, &poster);

        self.items.insert(0, item.clone());
        self.commit()?;
        tracing::debug!("created item {} ({})", item.id, item.title);

        Ok(item)
    }

    /// Merge a partial update into the item with `id` and refresh its
    /// `updated_at`. Unknown ids fail with `ItemNotFound`.
    pub fn update(&mut self, id: &str, patch: ItemPatch) -> Result<Item> {
        self.begin();
        let result = self.try_update(id, patch);
        self.finish(&result);
        result
    }

    fn try_update(&mut self, id: &str, patch: ItemPatch) -> Result<Item> {
        self.simulate_roundtrip();

        let index = self.index_of(id)?;
        let item = &mut self.items[index];
        item.apply(patch);
        item.updated_at = Utc::now();

        self.commit()?;
        Ok(self.items[index].clone())
    }

    /// Remove the item with `id`. Unknown ids fail with `ItemNotFound`.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        self.begin();
        let result = self.try_delete(id);
        self.finish(&result);
        result
    }

    fn try_delete(&mut self, id: &str) -> Result<()> {
        self.simulate_roundtrip();

        let index = self.index_of(id)?;
        let removed = self.items.remove(index);
        tracing::debug!("deleted item {}", removed.id);

        self.commit()
    }

    /// Approve a pending item, making it publicly visible.
    pub fn approve(&mut self, id: &str) -> Result<Item> {
        self.begin();
        let result = self.try_transition(id, ItemStatus::Approved);
        self.finish(&result);
        result
    }

    /// Reject a pending item. Terminal.
    pub fn reject(&mut self, id: &str) -> Result<Item> {
        self.begin();
        let result = self.try_transition(id, ItemStatus::Rejected);
        self.finish(&result);
        result
    }

    /// Mark an approved item as resolved (returned to its owner).
    /// Terminal.
    pub fn mark_resolved(&mut self, id: &str) -> Result<Item> {
        self.begin();
        let result = self.try_transition(id, ItemStatus::Resolved);
        self.finish(&result);
        result
    }

    fn try_transition(&mut self, id: &str, next: ItemStatus) -> Result<Item> {
        self.simulate_roundtrip();

        let index = self.index_of(id)?;
        let from = self.items[index].status;
        if !from.can_transition_to(next) {
            return Err(CampusfindError::InvalidTransition { from, to: next });
        }

        self.items[index].status = next;
        self.items[index].updated_at = Utc::now();

        self.commit()?;
        tracing::debug!("item {} moved {} -> {}", id, from, next);

        Ok(self.items[index].clone())
    }

    /// Look up an item by id.
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// The whole collection, newest first.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Approved listings of `kind`, narrowed by `filters`.
    ///
    /// Only approved items are ever publicly listed; pending, rejected,
    /// and resolved items stay out regardless of filters.
    pub fn query(&self, kind: ItemKind, filters: &ItemFilters) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.kind == kind && item.status == ItemStatus::Approved)
            .filter(|item| filters.matches(item))
            .collect()
    }

    /// Approved lost-item listings.
    pub fn lost_items(&self, filters: &ItemFilters) -> Vec<&Item> {
        self.query(ItemKind::Lost, filters)
    }

    /// Approved found-item listings.
    pub fn found_items(&self, filters: &ItemFilters) -> Vec<&Item> {
        self.query(ItemKind::Found, filters)
    }

    /// Every pending item, whatever its kind. Moderation queue view.
    pub fn pending_items(&self) -> Vec<&Item> {
        self.by_status(ItemStatus::Pending)
    }

    /// Every resolved item, whatever its kind.
    pub fn resolved_items(&self) -> Vec<&Item> {
        self.by_status(ItemStatus::Resolved)
    }

    /// The most recently posted items, any status. Dashboard strip.
    pub fn recent_activity(&self, limit: usize) -> Vec<&Item> {
        let mut items: Vec<&Item> = self.items.iter().collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        items.truncate(limit);
        items
    }

    /// Listing counts for the moderation dashboard.
    pub fn stats(&self) -> ItemStats {
        let mut stats = ItemStats {
            total: self.items.len(),
            ..ItemStats::default()
        };

        for item in &self.items {
            if item.status == ItemStatus::Approved {
                match item.kind {
                    ItemKind::Lost => stats.lost += 1,
                    ItemKind::Found => stats.found += 1,
                }
            }
            match item.status {
                ItemStatus::Pending => stats.pending += 1,
                ItemStatus::Resolved => stats.resolved += 1,
                _ => {}
            }
        }

        stats
    }

    fn by_status(&self, status: ItemStatus) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.status == status)
            .collect()
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| CampusfindError::ItemNotFound { id: id.to_string() })
    }

    /// Rewrite the persisted snapshot from memory.
    ///
    /// Every mutation lands here after its in-memory change, so the
    /// persisted store is never observed mid-update.
    fn commit(&mut self) -> Result<()> {
        let snapshot = serde_json::to_string(&self.items)?;
        self.storage.write(ITEMS_SLOT, &snapshot)
    }

    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn finish<T>(&mut self, result: &Result<T>) {
        self.loading = false;
        if let Err(err) = result {
            self.error = Some(err.to_string());
        }
    }

    fn simulate_roundtrip(&self) {
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }
    }
}
