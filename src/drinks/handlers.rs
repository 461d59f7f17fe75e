use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Extension, Json,
};
use tracing::{error, info, instrument};

use super::{
    dto::{DeleteResponse, DrinkPayload, DrinksResponse, LongDrink, ShortDrink},
    repo_types::{Drink, DrinkChanges, Ingredient, NewDrink, StoreError},
};
use crate::{auth::Claims, error::ApiError, state::AppState};

/// GET /drinks
#[instrument(skip_all)]
pub async fn list_drinks(
    State(state): State<AppState>,
) -> Result<Json<DrinksResponse<ShortDrink>>, ApiError> {
    let drinks = non_empty(state.store.list().await?)?;
    Ok(Json(DrinksResponse::new(
        drinks.iter().map(Drink::short).collect(),
    )))
}

/// GET /drinks-detail
#[instrument(skip_all)]
pub async fn list_drink_details(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<DrinksResponse<LongDrink>>, ApiError> {
    let drinks = non_empty(state.store.list().await?)?;
    info!(sub = %claims.sub, count = drinks.len(), "drink details listed");
    Ok(Json(DrinksResponse::new(
        drinks.iter().map(Drink::long).collect(),
    )))
}

/// POST /drinks
#[instrument(skip_all)]
pub async fn create_drink(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    payload: Result<Json<DrinkPayload>, JsonRejection>,
) -> Result<Json<DrinksResponse<LongDrink>>, ApiError> {
    let Json(body) = payload.map_err(rejected_body)?;

    let title = body
        .title
        .and_then(non_blank)
        .ok_or_else(|| ApiError::Unprocessable("missing title or recipe".into()))?;
    let recipe = body
        .recipe
        .map(Vec::<Ingredient>::from)
        .filter(|r| !r.is_empty())
        .ok_or_else(|| ApiError::Unprocessable("missing title or recipe".into()))?;

    let drink = state
        .store
        .insert(NewDrink { title, recipe })
        .await
        .map_err(write_failure)?;

    info!(sub = %claims.sub, id = drink.id, title = %drink.title, "drink created");
    Ok(Json(DrinksResponse::new(vec![drink.long()])))
}

/// PATCH /drinks/:id
///
/// Only the fields present in the body are overwritten.
#[instrument(skip_all)]
pub async fn update_drink(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<DrinkPayload>, JsonRejection>,
) -> Result<Json<DrinksResponse<LongDrink>>, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::NotFound("resource not found".into()))?;
    let Json(body) = payload.map_err(rejected_body)?;

    let title = match body.title {
        Some(t) => Some(
            non_blank(t).ok_or_else(|| ApiError::Unprocessable("title must not be empty".into()))?,
        ),
        None => None,
    };
    let recipe = match body.recipe {
        Some(r) => {
            let list = Vec::<Ingredient>::from(r);
            if list.is_empty() {
                return Err(ApiError::Unprocessable("recipe must not be empty".into()));
            }
            Some(list)
        }
        None => None,
    };

    let drink = state
        .store
        .update(id, DrinkChanges { title, recipe })
        .await
        .map_err(write_failure)?;

    info!(sub = %claims.sub, id = drink.id, "drink updated");
    Ok(Json(DrinksResponse::new(vec![drink.long()])))
}

/// DELETE /drinks/:id
#[instrument(skip_all)]
pub async fn delete_drink(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let Path(id) = id.map_err(|_| ApiError::NotFound("resource not found".into()))?;

    state.store.delete(id).await.map_err(write_failure)?;

    info!(sub = %claims.sub, id, "drink deleted");
    Ok(Json(DeleteResponse {
        success: true,
        delete: id,
    }))
}

fn non_empty(drinks: Vec<Drink>) -> Result<Vec<Drink>, ApiError> {
    if drinks.is_empty() {
        return Err(ApiError::NotFound("no drinks found".into()));
    }
    Ok(drinks)
}

fn non_blank(title: String) -> Option<String> {
    let trimmed = title.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn rejected_body(rejection: JsonRejection) -> ApiError {
    ApiError::Unprocessable(rejection.body_text())
}

/// Write paths: anything other than a missing row or a taken title is 422.
fn write_failure(e: StoreError) -> ApiError {
    match e {
        StoreError::NotFound(_) | StoreError::DuplicateTitle(_) => e.into(),
        other => {
            error!(error = %other, "drink write failed");
            ApiError::Unprocessable("unprocessable entity".into())
        }
    }
}
