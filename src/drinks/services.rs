use tracing::{debug, info};

use super::{
    repo::DrinkStore,
    repo_types::{Ingredient, NewDrink, StoreError},
};

/// Startup housekeeping: optionally wipe the table, then optionally insert
/// the sample menu. Seeding skips titles that already exist.
pub async fn prepare_menu(store: &dyn DrinkStore, reset: bool, seed: bool) -> Result<(), StoreError> {
    if reset {
        store.reset().await?;
        info!("drinks table reset");
    }
    if !seed {
        return Ok(());
    }

    let mut inserted = 0;
    for drink in sample_menu() {
        match store.insert(drink).await {
            Ok(d) => {
                debug!(id = d.id, title = %d.title, "sample drink inserted");
                inserted += 1;
            }
            Err(StoreError::DuplicateTitle(title)) => {
                debug!(%title, "sample drink already present");
            }
            Err(e) => return Err(e),
        }
    }
    info!(inserted, "sample menu seeded");
    Ok(())
}

fn sample_menu() -> Vec<NewDrink> {
    let single = |title: &str, name: &str, color: &str, parts: i64| NewDrink {
        title: title.to_string(),
        recipe: vec![Ingredient {
            name: name.to_string(),
            color: color.to_string(),
            parts,
        }],
    };
    vec![
        single("black coffee", "beans", "red", 1),
        single("cappuccino", "milk and beans", "green", 2),
        single("double expresso", "only beans", "blue", 3),
    ]
}
