use std::sync::Arc;

use littlespoon_shared::{Error, Result};
use serde::Serialize;

use crate::Recipe;

/// Ordered, append-only collection of every known recipe.
///
/// Recipes are shared behind [`Arc`] so meal plan slots point at the same
/// value the catalog holds. Ids are unique: [`Catalog::push`] refuses a
/// recipe whose id is already present.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Catalog {
    recipes: Vec<Arc<Recipe>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-filled with the built-in recipes.
    pub fn builtin() -> Self {
        Self {
            recipes: crate::seed::recipes().into_iter().map(Arc::new).collect(),
        }
    }

    pub fn from_recipes(recipes: impl IntoIterator<Item = Recipe>) -> Result<Self> {
        let mut catalog = Self::new();
        for recipe in recipes {
            catalog.push(recipe)?;
        }

        Ok(catalog)
    }

    pub fn push(&mut self, recipe: Recipe) -> Result<Arc<Recipe>> {
        if self.contains(&recipe.id) {
            return Err(Error::DuplicateId(recipe.id));
        }

        let recipe = Arc::new(recipe);
        self.recipes.push(recipe.clone());

        tracing::debug!(recipe.id = %recipe.id, catalog.len = self.recipes.len(), "recipe added to catalog");

        Ok(recipe)
    }

    pub fn get(&self, id: &str) -> Option<&Arc<Recipe>> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Arc<Recipe>> {
        self.recipes.iter()
    }

    pub fn as_slice(&self) -> &[Arc<Recipe>] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Fresh id that no recipe in the catalog uses yet.
    pub fn next_id(&self) -> String {
        loop {
            let id = ulid::Ulid::new().to_string();
            if !self.contains(&id) {
                return id;
            }
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Arc<Recipe>;
    type IntoIter = std::slice::Iter<'a, Arc<Recipe>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
