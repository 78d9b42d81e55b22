//! Fixture data loaded on first start.
//!
//! When no persisted snapshot exists yet, the stores seed themselves from
//! these records and persist them immediately, so repeated cold starts
//! are deterministic from the second start onward.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::items::{Category, Item, ItemKind, ItemStatus, Location};
use crate::session::User;

fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("fixture timestamp is valid")
}

fn day(year: i32, month: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, d).expect("fixture date is valid")
}

/// The two demo accounts the user set starts with.
pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: "1".to_string(),
            name: "Admin User".to_string(),
            email: "admin@campus.edu".to_string(),
            password: "admin123".to_string(),
            is_admin: true,
            avatar: Some("https://randomuser.me/api/portraits/men/1.jpg".to_string()),
            created_at: ts(2023, 5, 1, 8, 0),
        },
        User {
            id: "2".to_string(),
            name: "Regular User".to_string(),
            email: "user@campus.edu".to_string(),
            password: "user123".to_string(),
            is_admin: false,
            avatar: Some("https://randomuser.me/api/portraits/women/2.jpg".to_string()),
            created_at: ts(2023, 5, 1, 8, 30),
        },
    ]
}

/// The five demo reports the item collection starts with.
pub fn seed_items() -> Vec<Item> {
    vec![
        Item {
            id: "1".to_string(),
            title: "Lost MacBook Pro".to_string(),
            description: "Silver MacBook Pro 13\" with stickers on the cover. Last seen in the University Library.".to_string(),
            category: Category::Electronics,
            kind: ItemKind::Lost,
            location: Location::Library,
            date: day(2023, 5, 10),
            image_url: Some("https://images.pexels.com/photos/303383/pexels-photo-303383.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2".to_string()),
            status: ItemStatus::Approved,
            user_id: "2".to_string(),
            user_name: "Regular User".to_string(),
            user_avatar: Some("https://randomuser.me/api/portraits/women/2.jpg".to_string()),
            created_at: ts(2023, 5, 10, 14, 30),
            updated_at: ts(2023, 5, 10, 14, 30),
        },
        Item {
            id: "2".to_string(),
            title: "Found Student ID Card".to_string(),
            description: "Found a student ID card near the Student Union Building. Name on card is partially visible.".to_string(),
            category: Category::Documents,
            kind: ItemKind::Found,
            location: Location::StudentUnion,
            date: day(2023, 5, 12),
            image_url: Some("https://images.pexels.com/photos/6863251/pexels-photo-6863251.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2".to_string()),
            status: ItemStatus::Approved,
            user_id: "1".to_string(),
            user_name: "Admin User".to_string(),
            user_avatar: Some("https://randomuser.me/api/portraits/men/1.jpg".to_string()),
            created_at: ts(2023, 5, 12, 9, 15),
            updated_at: ts(2023, 5, 12, 9, 15),
        },
        Item {
            id: "3".to_string(),
            title: "Lost Blue Backpack".to_string(),
            description: "Lost my blue Northface backpack with my notebooks and calculator. Last seen in the Science Building.".to_string(),
            category: Category::BagsAndBackpacks,
            kind: ItemKind::Lost,
            location: Location::ScienceBuilding,
            date: day(2023, 5, 15),
            image_url: Some("https://images.pexels.com/photos/1294731/pexels-photo-1294731.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2".to_string()),
            status: ItemStatus::Resolved,
            user_id: "2".to_string(),
            user_name: "Regular User".to_string(),
            user_avatar: Some("https://randomuser.me/api/portraits/women/2.jpg".to_string()),
            created_at: ts(2023, 5, 15, 16, 45),
            updated_at: ts(2023, 5, 18, 10, 30),
        },
        Item {
            id: "4".to_string(),
            title: "Found Water Bottle".to_string(),
            description: "Found a metal water bottle in Lecture Hall A. Has some stickers on it.".to_string(),
            category: Category::Other,
            kind: ItemKind::Found,
            location: Location::LectureHalls,
            date: day(2023, 5, 16),
            image_url: Some("https://images.pexels.com/photos/1188649/pexels-photo-1188649.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2".to_string()),
            status: ItemStatus::Pending,
            user_id: "2".to_string(),
            user_name: "Regular User".to_string(),
            user_avatar: Some("https://randomuser.me/api/portraits/women/2.jpg".to_string()),
            created_at: ts(2023, 5, 16, 11, 20),
            updated_at: ts(2023, 5, 16, 11, 20),
        },
        Item {
            id: "5".to_string(),
            title: "Lost Glasses".to_string(),
            description: "Lost my prescription glasses with black frames. They might be in a black case.".to_string(),
            category: Category::Accessories,
            kind: ItemKind::Lost,
            location: Location::DiningHall,
            date: day(2023, 5, 18),
            image_url: Some("https://images.pexels.com/photos/701877/pexels-photo-701877.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2".to_string()),
            status: ItemStatus::Approved,
            user_id: "1".to_string(),
            user_name: "Admin User".to_string(),
            user_avatar: Some("https://randomuser.me/api/portraits/men/1.jpg".to_string()),
            created_at: ts(2023, 5, 18, 13, 10),
            updated_at: ts(2023, 5, 18, 13, 10),
        },
    ]
}
