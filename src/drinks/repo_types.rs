use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;

/// `drinks` table row; `recipe` holds the JSON-encoded ingredient list.
#[derive(Debug, Clone, FromRow)]
pub struct DrinkRow {
    pub id: i32,
    pub title: String,
    pub recipe: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub color: String,
    pub parts: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drink {
    pub id: i32,
    pub title: String,
    pub recipe: Vec<Ingredient>,
}

impl TryFrom<DrinkRow> for Drink {
    type Error = StoreError;

    fn try_from(row: DrinkRow) -> Result<Self, Self::Error> {
        let recipe = serde_json::from_str(&row.recipe).map_err(|e| StoreError::CorruptRecipe {
            id: row.id,
            reason: e.to_string(),
        })?;
        Ok(Drink {
            id: row.id,
            title: row.title,
            recipe,
        })
    }
}

#[derive(Debug, Clone)]
pub struct NewDrink {
    pub title: String,
    pub recipe: Vec<Ingredient>,
}

/// Partial update; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct DrinkChanges {
    pub title: Option<String>,
    pub recipe: Option<Vec<Ingredient>>,
}

pub fn encode_recipe(recipe: &[Ingredient]) -> Result<String, StoreError> {
    Ok(serde_json::to_string(recipe)?)
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("drink {0} not found")]
    NotFound(i32),
    #[error("drink title '{0}' already exists")]
    DuplicateTitle(String),
    #[error("stored recipe of drink {id} is unreadable: {reason}")]
    CorruptRecipe { id: i32, reason: String },
    #[error("encode recipe: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("database: {0}")]
    Database(#[from] sqlx::Error),
}
