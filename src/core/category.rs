//! Expense categories: ten built-ins plus user-defined entries.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use tracing::debug;

use crate::store::{ByteStore, CATEGORIES_KEY};

/// Display metadata for a category. Icon paths and colors are opaque style
/// tokens consumed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDescriptor {
    pub id: String,
    pub name: String,
    pub icon_path: String,
    pub bg_color: String,
    pub text_color: String,
}

impl CategoryDescriptor {
    /// Fallback descriptor for expenses referencing a missing category.
    pub fn unknown() -> Self {
        CategoryDescriptor {
            id: "unknown".to_string(),
            name: "Unknown".to_string(),
            icon_path: ICON_SHOPPING.to_string(),
            bg_color: "bg-gray-100".to_string(),
            text_color: "text-gray-600".to_string(),
        }
    }
}

/// Derives a category id from its display name: lowercased, whitespace runs
/// collapsed to single hyphens. Deterministic, so re-adding the same name is
/// idempotent.
pub fn derive_category_id(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

const ICON_SHOPPING: &str = "M16 11V7a4 4 0 00-8 0v4M5 9h14l1 12H4L5 9z";
const ICON_TRASH: &str = "M19 7l-.867 12.142A2 2 0 0116.138 21H7.862a2 2 0 01-1.995-1.858L5 7m5 4v6m4-6v6m1-10V4a1 1 0 00-1-1h-4a1 1 0 00-1 1v3M4 7h16";
const ICON_LIGHTNING: &str = "M13 10V3L4 14h7v7l9-11h-7z";
const ICON_DOCUMENT: &str = "M19 20H5a2 2 0 01-2-2V6a2 2 0 012-2h10a2 2 0 012 2v1m2 13a2 2 0 01-2-2V7m2 13a2 2 0 002-2V9a2 2 0 00-2-2h-2m-4-3H9M7 16h6M7 8h6v4H7V8z";
const ICON_HOME: &str = "M3 12l2-2m0 0l7-7 7 7M5 10v10a1 1 0 001 1h3m10-11l2 2m-2-2v10a1 1 0 01-1 1h-3m-6 0a1 1 0 001-1v-4a1 1 0 011-1h2a1 1 0 011 1v4a1 1 0 001 1m-6 0h6";
const ICON_CALENDAR: &str = "M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z";
const ICON_HEART: &str = "M4.318 6.318a4.5 4.5 0 000 6.364L12 20.364l7.682-7.682a4.5 4.5 0 00-6.364-6.364L12 7.636l-1.318-1.318a4.5 4.5 0 00-6.364 0z";
const ICON_MEDICAL: &str = "M21 15.546c-.523 0-1.046.151-1.5.454a2.704 2.704 0 01-3 0 2.704 2.704 0 00-3 0 2.704 2.704 0 01-3 0 2.704 2.704 0 00-3 0 2.704 2.704 0 01-3 0 2.701 2.701 0 00-1.5-.454M9 6v2m3-2v2m3-2v2M9 3h.01M12 3h.01M15 3h.01M21 21v-7a2 2 0 00-2-2H5a2 2 0 00-2 2v7h18z";
const ICON_FOOD: &str = "M12 8c1.105 0 2-.895 2-2s-.895-2-2-2-2 .895-2 2 .895 2 2 2zm0 2c-1.105 0-2 .895-2 2s.895 2 2 2 2-.895 2-2-.895-2-2-2zm0 6c-1.105 0-2 .895-2 2s.895 2 2 2 2-.895 2-2-.895-2-2-2z";

fn builtin(id: &str, name: &str, icon_path: &str, bg_color: &str, text_color: &str) -> CategoryDescriptor {
    CategoryDescriptor {
        id: id.to_string(),
        name: name.to_string(),
        icon_path: icon_path.to_string(),
        bg_color: bg_color.to_string(),
        text_color: text_color.to_string(),
    }
}

/// The fixed built-in set. Always present, even when the persisted user
/// categories are corrupt or missing.
pub fn default_categories() -> Vec<CategoryDescriptor> {
    vec![
        builtin("groceries", "Groceries", ICON_SHOPPING, "bg-orange-100", "text-blue-600"),
        builtin("entertainment", "Entertainment", ICON_TRASH, "bg-purple-100", "text-purple-600"),
        builtin("gas", "Gas", ICON_LIGHTNING, "bg-red-100", "text-red-600"),
        builtin("shopping", "Shopping", ICON_SHOPPING, "bg-pink-100", "text-pink-600"),
        builtin("news", "News", ICON_DOCUMENT, "bg-yellow-100", "text-yellow-600"),
        builtin("rent", "Rent", ICON_HOME, "bg-blue-100", "text-blue-600"),
        builtin("transportation", "Transportation", ICON_CALENDAR, "bg-green-100", "text-green-600"),
        builtin("utilities", "Utilities", ICON_HEART, "bg-indigo-100", "text-indigo-600"),
        builtin("healthcare", "Healthcare", ICON_MEDICAL, "bg-teal-100", "text-teal-600"),
        builtin("dining", "Dining", ICON_FOOD, "bg-amber-100", "text-amber-600"),
    ]
}

/// Category lookup backed by a byte store.
///
/// User-defined categories persist as a JSON object keyed by id. Built-ins
/// win on id collision, so a user entry can never restyle a default.
pub struct CategoryRegistry {
    backend: Arc<dyn ByteStore>,
    write_lock: Mutex<()>,
}

impl CategoryRegistry {
    pub fn new(backend: Arc<dyn ByteStore>) -> Self {
        CategoryRegistry {
            backend,
            write_lock: Mutex::new(()),
        }
    }

    /// All categories: built-ins first, then user entries whose ids do not
    /// collide with a built-in.
    pub fn list(&self) -> Vec<CategoryDescriptor> {
        let mut categories = default_categories();
        let user = self.load_user();
        for (id, descriptor) in user {
            if !categories.iter().any(|c| c.id == id) {
                categories.push(descriptor);
            }
        }
        categories
    }

    pub fn get(&self, id: &str) -> Option<CategoryDescriptor> {
        if let Some(descriptor) = default_categories().into_iter().find(|c| c.id == id) {
            return Some(descriptor);
        }
        self.load_user().remove(id)
    }

    /// Upserts a user-defined category. The id is derived from the name, so
    /// adding the same name twice overwrites the earlier entry.
    pub fn add(
        &self,
        name: &str,
        icon_path: &str,
        bg_color: &str,
        text_color: &str,
    ) -> Result<CategoryDescriptor> {
        let descriptor = CategoryDescriptor {
            id: derive_category_id(name),
            name: name.to_string(),
            icon_path: icon_path.to_string(),
            bg_color: bg_color.to_string(),
            text_color: text_color.to_string(),
        };

        let _guard = self.write_lock.lock().unwrap();
        let mut user = self.load_user();
        user.insert(descriptor.id.clone(), descriptor.clone());

        let bytes = serde_json::to_vec(&user).context("Failed to serialize categories")?;
        self.backend
            .save(CATEGORIES_KEY, &bytes)
            .context("Failed to persist categories")?;
        debug!(id = %descriptor.id, "Stored category");

        Ok(descriptor)
    }

    fn load_user(&self) -> BTreeMap<String, CategoryDescriptor> {
        match self.backend.load(CATEGORIES_KEY) {
            Ok(Some(bytes)) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                debug!(error = %e, "Stored categories failed to parse, using defaults only");
                BTreeMap::new()
            }),
            Ok(None) => BTreeMap::new(),
            Err(e) => {
                debug!(error = %e, "Loading categories failed, using defaults only");
                BTreeMap::new()
            }
        }
    }
}
