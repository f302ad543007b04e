//! HTTP routes for user endpoints.

use axum::{
    routing::{get, patch, post},
    Router,
};

use super::handlers::{
    create_user, delete_user, patch_user, search_users, update_user, UserHandlers,
};

/// Creates the user router with all endpoints.
///
/// Routes (relative to the `/api/users` mount point):
/// - `POST /` - Register a user
/// - `GET /search?fromDate=..&toDate=..` - Birth-date range search
/// - `PATCH /:id` - Partial update
/// - `PUT /:id` - Full replace
/// - `DELETE /:id` - Delete
pub fn user_routes(handlers: UserHandlers) -> Router {
    Router::new()
        .route("/", post(create_user))
        .route("/search", get(search_users))
        .route(
            "/:id",
            patch(patch_user).put(update_user).delete(delete_user),
        )
        .with_state(handlers)
}
