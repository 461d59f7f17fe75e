use async_trait::async_trait;
use sqlx::PgPool;

use super::repo_types::{encode_recipe, Drink, DrinkChanges, DrinkRow, NewDrink, StoreError};

/// Data-access seam for the `drinks` table.
#[async_trait]
pub trait DrinkStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Drink>, StoreError>;
    async fn insert(&self, drink: NewDrink) -> Result<Drink, StoreError>;
    async fn update(&self, id: i32, changes: DrinkChanges) -> Result<Drink, StoreError>;
    async fn delete(&self, id: i32) -> Result<(), StoreError>;
    /// Removes every drink and restarts id assignment.
    async fn reset(&self) -> Result<(), StoreError>;
}

#[derive(Clone)]
pub struct PgDrinkStore {
    db: PgPool,
}

impl PgDrinkStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

fn classify(e: sqlx::Error, title: Option<&str>) -> StoreError {
    if let (sqlx::Error::Database(db), Some(title)) = (&e, title) {
        if db.is_unique_violation() {
            return StoreError::DuplicateTitle(title.to_string());
        }
    }
    StoreError::Database(e)
}

#[async_trait]
impl DrinkStore for PgDrinkStore {
    async fn list(&self) -> Result<Vec<Drink>, StoreError> {
        let rows = sqlx::query_as::<_, DrinkRow>(
            r#"
            SELECT id, title, recipe
            FROM drinks
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        rows.into_iter().map(Drink::try_from).collect()
    }

    async fn insert(&self, drink: NewDrink) -> Result<Drink, StoreError> {
        let recipe = encode_recipe(&drink.recipe)?;
        let row = sqlx::query_as::<_, DrinkRow>(
            r#"
            INSERT INTO drinks (title, recipe)
            VALUES ($1, $2)
            RETURNING id, title, recipe
            "#,
        )
        .bind(&drink.title)
        .bind(recipe)
        .fetch_one(&self.db)
        .await
        .map_err(|e| classify(e, Some(&drink.title)))?;
        Drink::try_from(row)
    }

    async fn update(&self, id: i32, changes: DrinkChanges) -> Result<Drink, StoreError> {
        let recipe = changes.recipe.as_deref().map(encode_recipe).transpose()?;
        let row = sqlx::query_as::<_, DrinkRow>(
            r#"
            UPDATE drinks
               SET title = COALESCE($2, title),
                   recipe = COALESCE($3, recipe)
             WHERE id = $1
            RETURNING id, title, recipe
            "#,
        )
        .bind(id)
        .bind(changes.title.as_deref())
        .bind(recipe)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| classify(e, changes.title.as_deref()))?
        .ok_or(StoreError::NotFound(id))?;
        Drink::try_from(row)
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let done = sqlx::query("DELETE FROM drinks WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;
        if done.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn reset(&self) -> Result<(), StoreError> {
        sqlx::query("TRUNCATE drinks RESTART IDENTITY")
            .execute(&self.db)
            .await?;
        Ok(())
    }
}
