use std::{collections::BTreeMap, sync::Mutex};

use async_trait::async_trait;

use super::{
    repo::DrinkStore,
    repo_types::{Drink, DrinkChanges, NewDrink, StoreError},
};

/// In-process store with the same contract as the PostgreSQL one.
#[derive(Default)]
pub struct MemoryDrinkStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i32,
    drinks: BTreeMap<i32, Drink>,
}

impl Inner {
    fn title_taken(&self, title: &str, except: Option<i32>) -> bool {
        self.drinks
            .values()
            .any(|d| d.title == title && Some(d.id) != except)
    }
}

#[async_trait]
impl DrinkStore for MemoryDrinkStore {
    async fn list(&self) -> Result<Vec<Drink>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.drinks.values().cloned().collect())
    }

    async fn insert(&self, drink: NewDrink) -> Result<Drink, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.title_taken(&drink.title, None) {
            return Err(StoreError::DuplicateTitle(drink.title));
        }
        inner.next_id += 1;
        let stored = Drink {
            id: inner.next_id,
            title: drink.title,
            recipe: drink.recipe,
        };
        inner.drinks.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: i32, changes: DrinkChanges) -> Result<Drink, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.drinks.contains_key(&id) {
            return Err(StoreError::NotFound(id));
        }
        if let Some(title) = &changes.title {
            if inner.title_taken(title, Some(id)) {
                return Err(StoreError::DuplicateTitle(title.clone()));
            }
        }
        let drink = inner.drinks.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        if let Some(title) = changes.title {
            drink.title = title;
        }
        if let Some(recipe) = changes.recipe {
            drink.recipe = recipe;
        }
        Ok(drink.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.drinks.remove(&id).map(|_| ()).ok_or(StoreError::NotFound(id))
    }

    async fn reset(&self) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        *inner = Inner::default();
        Ok(())
    }
}
