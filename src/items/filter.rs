//! Listing filters.

use chrono::NaiveDate;

use super::{Category, Item, ItemStatus, Location};

/// Optional constraints applied to a listing query.
///
/// All present constraints must hold (they are ANDed); an absent or empty
/// field imposes nothing.
#[derive(Debug, Clone, Default)]
pub struct ItemFilters {
    /// Case-insensitive substring match against title or description.
    pub search: Option<String>,
    pub category: Option<Category>,
    pub location: Option<Location>,
    pub status: Option<ItemStatus>,
    /// Inclusive lower bound on the event date.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound on the event date.
    pub date_to: Option<NaiveDate>,
}

impl ItemFilters {
    /// No constraints.
    pub fn none() -> Self {
        Self::default()
    }

    /// Filter by search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Filter by category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Filter by location.
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Filter by status.
    pub fn with_status(mut self, status: ItemStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Keep items lost/found on or after `date`.
    pub fn with_date_from(mut self, date: NaiveDate) -> Self {
        self.date_from = Some(date);
        self
    }

    /// Keep items lost/found on or before `date`.
    pub fn with_date_to(mut self, date: NaiveDate) -> Self {
        self.date_to = Some(date);
        self
    }

    /// Whether `item` satisfies every present constraint.
    pub fn matches(&self, item: &Item) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if !needle.is_empty()
                && !item.title.to_lowercase().contains(&needle)
                && !item.description.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        if self.category.is_some_and(|c| item.category != c) {
            return false;
        }

        if self.location.is_some_and(|l| item.location != l) {
            return false;
        }

        if self.status.is_some_and(|s| item.status != s) {
            return false;
        }

        if self.date_from.is_some_and(|from| item.date < from) {
            return false;
        }

        if self.date_to.is_some_and(|to| item.date > to) {
            return false;
        }

        true
    }
}
