use axum::{extract::{Path, State}, http::StatusCode, Json};
use tracing::info;

use service::customer::{Customer, CustomerRegistrationRequest, CustomerUpdateRequest};

use crate::{errors::JsonApiError, openapi::ErrorBodyDoc, routes::ServerState};

#[utoipa::path(
    get, path = "/api/v1/customers", tag = "customers",
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::CustomerDoc]),
        (status = 500, description = "List Failed", body = ErrorBodyDoc)
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Customer>>, JsonApiError> {
    let list = state.customers.get_all_customers().await?;
    info!(count = list.len(), "list customers");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/api/v1/customers/{id}", tag = "customers",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CustomerDoc),
        (status = 404, description = "Not Found", body = ErrorBodyDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<Customer>, JsonApiError> {
    Ok(Json(state.customers.get_customer_by_id(id).await?))
}

#[utoipa::path(
    post, path = "/api/v1/customers", tag = "customers",
    request_body = crate::openapi::CustomerRegistrationRequestDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 409, description = "Email already registered", body = ErrorBodyDoc)
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<CustomerRegistrationRequest>) -> Result<StatusCode, JsonApiError> {
    let created = state.customers.add_customer(input).await?;
    info!(id = created.id, "created customer");
    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    put, path = "/api/v1/customers/{id}", tag = "customers",
    params(("id" = i32, Path, description = "Customer ID")),
    request_body = crate::openapi::CustomerUpdateRequestDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "No data changes", body = ErrorBodyDoc),
        (status = 404, description = "Not Found", body = ErrorBodyDoc),
        (status = 409, description = "Email already registered", body = ErrorBodyDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<CustomerUpdateRequest>,
) -> Result<StatusCode, JsonApiError> {
    state.customers.update_customer(id, input).await?;
    info!(id, "updated customer");
    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete, path = "/api/v1/customers/{id}", tag = "customers",
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Not Found", body = ErrorBodyDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    state.customers.delete_customer_by_id(id).await?;
    info!(id, "deleted customer");
    Ok(StatusCode::OK)
}
