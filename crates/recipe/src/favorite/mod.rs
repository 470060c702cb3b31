use serde::{Deserialize, Serialize};

/// Recipe ids the family has starred, in the order they were saved.
///
/// Membership is not checked against the catalog: an id may outlive the
/// recipe it was saved for.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Favorites(Vec<String>);

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` if absent, removes it otherwise. Returns whether the id is
    /// a favorite afterwards.
    pub fn toggle(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if let Some(pos) = self.0.iter().position(|saved| *saved == id) {
            self.0.remove(pos);
            return false;
        }

        self.0.push(id);
        true
    }

    /// Copy of this set with `id` toggled.
    pub fn toggled(&self, id: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.toggle(id);
        next
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|saved| saved == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Favorites {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut favorites = Self::new();
        for id in iter {
            let id = id.into();
            if !favorites.contains(&id) {
                favorites.0.push(id);
            }
        }

        favorites
    }
}

impl From<Vec<String>> for Favorites {
    fn from(ids: Vec<String>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<Favorites> for Vec<String> {
    fn from(favorites: Favorites) -> Self {
        favorites.0
    }
}
