//! Item records, the moderation lifecycle, and the fixed vocabularies.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::session::UserProfile;

/// Whether a report concerns something lost or something found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Lost,
    Found,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Lost => write!(f, "lost"),
            ItemKind::Found => write!(f, "found"),
        }
    }
}

/// Moderation status of an item.
///
/// The lifecycle is a small state machine:
///
/// ```text
/// pending --approve--> approved --resolve--> resolved
/// pending --reject--> rejected
/// ```
///
/// `rejected` and `resolved` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Pending,
    Approved,
    Rejected,
    Resolved,
}

impl ItemStatus {
    /// Whether the lifecycle permits moving to `next`.
    pub fn can_transition_to(self, next: ItemStatus) -> bool {
        matches!(
            (self, next),
            (ItemStatus::Pending, ItemStatus::Approved)
                | (ItemStatus::Pending, ItemStatus::Rejected)
                | (ItemStatus::Approved, ItemStatus::Resolved)
        )
    }

    /// Terminal statuses have no outgoing transition.
    pub fn is_terminal(self) -> bool {
        matches!(self, ItemStatus::Rejected | ItemStatus::Resolved)
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ItemStatus::Pending => "pending",
            ItemStatus::Approved => "approved",
            ItemStatus::Rejected => "rejected",
            ItemStatus::Resolved => "resolved",
        };
        write!(f, "{}", name)
    }
}

/// Item category. The set is fixed; the posting form offers exactly these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    #[serde(rename = "Books & Notes")]
    BooksAndNotes,
    Clothing,
    Accessories,
    Documents,
    Keys,
    #[serde(rename = "Bags & Backpacks")]
    BagsAndBackpacks,
    Other,
}

impl Category {
    /// Every category, in the order the posting form lists them.
    pub const ALL: [Category; 8] = [
        Category::Electronics,
        Category::BooksAndNotes,
        Category::Clothing,
        Category::Accessories,
        Category::Documents,
        Category::Keys,
        Category::BagsAndBackpacks,
        Category::Other,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Electronics => "Electronics",
            Category::BooksAndNotes => "Books & Notes",
            Category::Clothing => "Clothing",
            Category::Accessories => "Accessories",
            Category::Documents => "Documents",
            Category::Keys => "Keys",
            Category::BagsAndBackpacks => "Bags & Backpacks",
            Category::Other => "Other",
        };
        write!(f, "{}", name)
    }
}

/// Campus location where an item was lost or found. Fixed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Library,
    #[serde(rename = "Student Union")]
    StudentUnion,
    #[serde(rename = "Science Building")]
    ScienceBuilding,
    #[serde(rename = "Dining Hall")]
    DiningHall,
    Gym,
    Dormitories,
    #[serde(rename = "Lecture Halls")]
    LectureHalls,
    #[serde(rename = "Outdoor Areas")]
    OutdoorAreas,
    Other,
}

impl Location {
    /// Every location, in the order the posting form lists them.
    pub const ALL: [Location; 9] = [
        Location::Library,
        Location::StudentUnion,
        Location::ScienceBuilding,
        Location::DiningHall,
        Location::Gym,
        Location::Dormitories,
        Location::LectureHalls,
        Location::OutdoorAreas,
        Location::Other,
    ];
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Location::Library => "Library",
            Location::StudentUnion => "Student Union",
            Location::ScienceBuilding => "Science Building",
            Location::DiningHall => "Dining Hall",
            Location::Gym => "Gym",
            Location::Dormitories => "Dormitories",
            Location::LectureHalls => "Lecture Halls",
            Location::OutdoorAreas => "Outdoor Areas",
            Location::Other => "Other",
        };
        write!(f, "{}", name)
    }
}

/// A lost/found report.
///
/// The poster's id, name, and avatar are copied at creation time. They do
/// not track later changes to the user record; listings keep showing the
/// poster as they were when the item went up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier, immutable once assigned.
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    /// Serialized as `type` in snapshots.
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub location: Location,
    /// The date the item was lost or found, not the posting time.
    pub date: NaiveDate,
    pub image_url: Option<String>,
    pub status: ItemStatus,
    /// Poster snapshot, copied at creation time.
    pub user_id: String,
    pub user_name: String,
    pub user_avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Refreshed on every field mutation, including status changes.
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Build a new item from a posting form, stamped to now.
    ///
    /// Admin posters skip the moderation queue: their items start out
    /// `approved` instead of `pending`.
    pub fn new(draft: ItemDraft, poster: &UserProfile) -> Self {
        let now = Utc::now();
        let status = if poster.is_admin {
            ItemStatus::Approved
        } else {
            ItemStatus::Pending
        };

        Self {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            description: draft.description,
            category: draft.category,
            kind: draft.kind,
            location: draft.location,
            date: draft.date,
            image_url: draft.image_url,
            status,
            user_id: poster.id.clone(),
            user_name: poster.name.clone(),
            user_avatar: poster.avatar.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a partial update into this item. Timestamps are the store's
    /// concern, not ours.
    pub(crate) fn apply(&mut self, patch: ItemPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = Some(image_url);
        }
    }
}

/// Fields supplied by the posting form.
///
/// Everything else on [`Item`] (id, status, poster snapshot, timestamps)
/// is stamped by the store.
#[derive(Debug, Clone)]
pub struct ItemDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub kind: ItemKind,
    pub location: Location,
    pub date: NaiveDate,
    pub image_url: Option<String>,
}

impl ItemDraft {
    /// Create a draft with the required form fields.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        kind: ItemKind,
        location: Location,
        date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category,
            kind,
            location,
            date,
            image_url: None,
        }
    }

    /// Attach an image reference.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}

/// A partial update merged into an existing item.
///
/// Carries no status field: status moves only through the store's
/// moderation operations, which validate the lifecycle.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub location: Option<Location>,
    pub date: Option<NaiveDate>,
    pub image_url: Option<String>,
}

impl ItemPatch {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a new title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set a new description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set a new category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Set a new location.
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Set a new event date.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Set a new image reference.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}
