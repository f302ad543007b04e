//! HTTP handlers for user endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::user::{
    CreateUserHandler, DeleteUserCommand, DeleteUserHandler, PatchUserHandler,
    SearchUsersHandler, UpdateUserHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::UserRepository;

use super::dto::{
    CreateUserRequest, DataResponse, ErrorResponse, PatchUserRequest, SearchUsersParams,
    UserResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct UserHandlers {
    create_handler: Arc<CreateUserHandler>,
    patch_handler: Arc<PatchUserHandler>,
    update_handler: Arc<UpdateUserHandler>,
    delete_handler: Arc<DeleteUserHandler>,
    search_handler: Arc<SearchUsersHandler>,
}

impl UserHandlers {
    pub fn new(
        create_handler: Arc<CreateUserHandler>,
        patch_handler: Arc<PatchUserHandler>,
        update_handler: Arc<UpdateUserHandler>,
        delete_handler: Arc<DeleteUserHandler>,
        search_handler: Arc<SearchUsersHandler>,
    ) -> Self {
        Self {
            create_handler,
            patch_handler,
            update_handler,
            delete_handler,
            search_handler,
        }
    }

    /// Wires every handler to one repository.
    pub fn from_repository(repository: Arc<dyn UserRepository>, min_age: u32) -> Self {
        Self::new(
            Arc::new(CreateUserHandler::new(repository.clone(), min_age)),
            Arc::new(PatchUserHandler::new(repository.clone())),
            Arc::new(UpdateUserHandler::new(repository.clone())),
            Arc::new(DeleteUserHandler::new(repository.clone())),
            Arc::new(SearchUsersHandler::new(repository)),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/users - Register a new user
pub async fn create_user(
    State(handlers): State<UserHandlers>,
    Json(req): Json<CreateUserRequest>,
) -> Response {
    let cmd = match req.into_create_command() {
        Ok(cmd) => cmd,
        Err(errors) => return validation_failed(errors),
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(user) => (
            StatusCode::CREATED,
            Json(DataResponse::new(UserResponse::from(user))),
        )
            .into_response(),
        Err(e) => handle_user_error(e),
    }
}

/// PATCH /api/users/:id - Change some fields of a user
pub async fn patch_user(
    State(handlers): State<UserHandlers>,
    Path(user_id): Path<String>,
    Json(req): Json<PatchUserRequest>,
) -> Response {
    let user_id = match parse_user_id(&user_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let cmd = match req.into_command(user_id) {
        Ok(cmd) => cmd,
        Err(errors) => return validation_failed(errors),
    };

    match handlers.patch_handler.handle(cmd).await {
        Ok(user) => (
            StatusCode::OK,
            Json(DataResponse::new(UserResponse::from(user))),
        )
            .into_response(),
        Err(e) => handle_user_error(e),
    }
}

/// PUT /api/users/:id - Replace every field of a user
pub async fn update_user(
    State(handlers): State<UserHandlers>,
    Path(user_id): Path<String>,
    Json(req): Json<CreateUserRequest>,
) -> Response {
    let user_id = match parse_user_id(&user_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let cmd = match req.into_update_command(user_id) {
        Ok(cmd) => cmd,
        Err(errors) => return validation_failed(errors),
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(user) => (
            StatusCode::OK,
            Json(DataResponse::new(UserResponse::from(user))),
        )
            .into_response(),
        Err(e) => handle_user_error(e),
    }
}

/// DELETE /api/users/:id - Delete a user
pub async fn delete_user(
    State(handlers): State<UserHandlers>,
    Path(user_id): Path<String>,
) -> Response {
    let user_id = match parse_user_id(&user_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .delete_handler
        .handle(DeleteUserCommand { user_id })
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_user_error(e),
    }
}

/// GET /api/users/search?fromDate=..&toDate=.. - Users born in a date range
pub async fn search_users(
    State(handlers): State<UserHandlers>,
    Query(params): Query<SearchUsersParams>,
) -> Response {
    match handlers.search_handler.handle(params.into()).await {
        Ok(users) => {
            let items: Vec<UserResponse> = users.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(DataResponse::new(items))).into_response()
        }
        Err(e) => handle_user_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn parse_user_id(raw: &str) -> Result<UserId, Response> {
    raw.parse::<UserId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid user ID")),
        )
            .into_response()
    })
}

fn validation_failed(errors: Vec<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::validation(errors)),
    )
        .into_response()
}

fn handle_user_error(error: DomainError) -> Response {
    match error.code() {
        ErrorCode::UserNotFound => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found(error.message())),
        )
            .into_response(),
        ErrorCode::UnderMinimumAge
        | ErrorCode::InvalidDateFormat
        | ErrorCode::InvalidDateRange
        | ErrorCode::ValidationFailed => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(error.code().to_string(), error.message())),
        )
            .into_response(),
        ErrorCode::DatabaseError => {
            tracing::error!(error = %error, "User request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("An unexpected error occurred")),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_not_found_maps_to_404() {
        let response = handle_user_error(DomainError::user_not_found(3));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn user_error_business_rules_map_to_400() {
        for error in [
            DomainError::under_minimum_age(18),
            DomainError::invalid_date_format("x"),
            DomainError::invalid_date_range(),
            DomainError::validation("email", "bad"),
        ] {
            assert_eq!(handle_user_error(error).status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn user_error_database_maps_to_500() {
        let response = handle_user_error(DomainError::database("Failed to save user", "boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn invalid_path_id_maps_to_400() {
        let response = parse_user_id("abc").unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(parse_user_id("12").ok(), Some(UserId::new(12)));
    }
}
