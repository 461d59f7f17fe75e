mod dto;
pub mod handlers;
#[cfg(test)]
pub(crate) mod memory;
mod repo;
mod repo_types;
mod services;

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, patch, post},
    Router,
};

use crate::{
    auth::{
        guard::{require_permission, Guard},
        Permission,
    },
    state::AppState,
};

pub use repo::{DrinkStore, PgDrinkStore};
pub use repo_types::StoreError;
pub use services::prepare_menu;

/// Route table; each protected route names the permission its guard checks.
pub fn router(state: &AppState) -> Router<AppState> {
    let guard = |permission: Permission| Guard::new(state.verifier.clone(), permission);

    Router::new()
        .route("/drinks", get(handlers::list_drinks))
        .route(
            "/drinks",
            post(handlers::create_drink)
                .route_layer(from_fn_with_state(guard(Permission::PostDrinks), require_permission)),
        )
        .route(
            "/drinks-detail",
            get(handlers::list_drink_details).route_layer(from_fn_with_state(
                guard(Permission::GetDrinksDetail),
                require_permission,
            )),
        )
        .route(
            "/drinks/:id",
            patch(handlers::update_drink)
                .route_layer(from_fn_with_state(guard(Permission::PatchDrinks), require_permission)),
        )
        .route(
            "/drinks/:id",
            delete(handlers::delete_drink)
                .route_layer(from_fn_with_state(guard(Permission::DeleteDrinks), require_permission)),
        )
}
