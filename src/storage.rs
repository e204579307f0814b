/// Persisted category selection backed by window.localStorage

use serde::{Deserialize, Serialize};

/// A topic tag used to filter which questions are fetched
pub type Category = String;

/// Storage key holding the JSON-encoded selection
pub const SELECTED_CATEGORIES_KEY: &str = "selectedCategories";

/// Ordered set of selected categories
///
/// Serializes as a plain JSON array of strings. Insertion order is kept
/// and duplicates are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Category>", into = "Vec<Category>")]
pub struct SelectedCategories {
    categories: Vec<Category>,
}

impl SelectedCategories {
    pub fn new() -> Self {
        SelectedCategories {
            categories: Vec::new(),
        }
    }

    /// Add a category, returning false if it was already selected
    pub fn insert(&mut self, category: Category) -> bool {
        if self.contains(&category) {
            return false;
        }
        self.categories.push(category);
        true
    }

    pub fn contains(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

impl FromIterator<Category> for SelectedCategories {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut selection = SelectedCategories::new();
        for category in iter {
            selection.insert(category);
        }
        selection
    }
}

impl From<Vec<Category>> for SelectedCategories {
    fn from(categories: Vec<Category>) -> Self {
        categories.into_iter().collect()
    }
}

impl From<SelectedCategories> for Vec<Category> {
    fn from(selection: SelectedCategories) -> Self {
        selection.categories
    }
}

/// Key-value persistence for the category selection
pub trait SelectionStore {
    /// Read the stored selection; `Ok(None)` when nothing has been saved yet
    fn load(&self) -> Result<Option<SelectedCategories>, String>;

    fn save(&self, selection: &SelectedCategories) -> Result<(), String>;
}

/// Selection stored as a JSON string in `window.localStorage`
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: &str) -> Self {
        LocalStorageStore {
            key: key.to_string(),
        }
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new(SELECTED_CATEGORIES_KEY)
    }
}

impl SelectionStore for LocalStorageStore {
    fn load(&self) -> Result<Option<SelectedCategories>, String> {
        let raw = local_storage()?
            .get_item(&self.key)
            .map_err(|e| format!("Failed to read storage: {:?}", e))?;

        match raw {
            Some(raw) => SelectedCategories::from_json(&raw)
                .map(Some)
                .map_err(|e| format!("Failed to parse stored categories: {}", e)),
            None => Ok(None),
        }
    }

    fn save(&self, selection: &SelectedCategories) -> Result<(), String> {
        let raw = selection
            .to_json()
            .map_err(|e| format!("Failed to serialize categories: {}", e))?;

        local_storage()?
            .set_item(&self.key, &raw)
            .map_err(|e| format!("Failed to save storage: {:?}", e))
    }
}

fn local_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .ok_or_else(|| "No window available".to_string())?
        .local_storage()
        .map_err(|e| format!("Failed to open localStorage: {:?}", e))?
        .ok_or_else(|| "localStorage is disabled".to_string())
}
