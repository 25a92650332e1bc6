//! Customer ("clientes") endpoints

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, CustomerView, Json, ValidatedJson};
use crate::domain::customer::{Customer, CustomerId, CustomerRegistrationResult};

/// Prefix of the message returned when an ID lookup finds nothing
pub const ID_NOT_FOUND: &str = "ID NO ENCONTRADO ";

/// Create the customer router, mounted at `/clientes`
pub fn create_customers_router() -> Router<AppState> {
    Router::new()
        .route(
            "/clientes",
            get(list_customers).post(create_customer).put(update_customer),
        )
        .route(
            "/clientes/{id}",
            get(get_customer).delete(delete_customer),
        )
        .route("/clientes/registraValida", post(register_validated))
}

fn id_not_found(id: impl std::fmt::Display) -> ApiError {
    ApiError::not_found(format!("{}{}", ID_NOT_FOUND, id))
}

/// Path IDs arrive as raw text; anything that is not a number cannot name a
/// stored customer and gets the same not-found answer.
fn parse_path_id(raw: &str) -> Result<i64, ApiError> {
    raw.trim().parse::<i64>().map_err(|_| id_not_found(raw))
}

/// Look up a customer, failing with not found when the service has none.
/// Non-positive IDs cannot be stored, so they fail without a lookup.
async fn find_existing(state: &AppState, id: i64) -> Result<(CustomerId, Customer), ApiError> {
    let customer_id = CustomerId::new(id).map_err(|_| id_not_found(id))?;

    let customer = state
        .customer_service
        .get_by_id(customer_id)
        .await?
        .ok_or_else(|| id_not_found(id))?;

    Ok((customer_id, customer))
}

/// GET /clientes
pub async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CustomerView>>, ApiError> {
    debug!("Listing customers");

    let customers = state.customer_service.list().await?;

    Ok(Json(customers.into_iter().map(CustomerView::from).collect()))
}

/// GET /clientes/{id}
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CustomerView>, ApiError> {
    debug!(id = %id, "Getting customer");

    let (_, customer) = find_existing(&state, parse_path_id(&id)?).await?;

    Ok(Json(CustomerView::from(customer)))
}

/// POST /clientes
pub async fn create_customer(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CustomerView>,
) -> Result<(StatusCode, Json<CustomerView>), ApiError> {
    debug!(name = %request.name, "Creating customer");

    let customer = state
        .customer_service
        .create(Customer::from(request))
        .await?;

    Ok((StatusCode::CREATED, Json(CustomerView::from(customer))))
}

/// PUT /clientes
///
/// Full replace: the body is not run through the validation rules and every
/// field is taken from it, so an omitted `active` defaults to `true` and an
/// omitted optional field is cleared. The ID must name an existing customer.
pub async fn update_customer(
    State(state): State<AppState>,
    Json(request): Json<CustomerView>,
) -> Result<Json<CustomerView>, ApiError> {
    let Some(id) = request.id else {
        return Err(id_not_found("null"));
    };

    debug!(id = %id, "Updating customer");

    find_existing(&state, id).await?;

    let customer = state
        .customer_service
        .update(Customer::from(request))
        .await?;

    Ok(Json(CustomerView::from(customer)))
}

/// DELETE /clientes/{id}
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    debug!(id = %id, "Deleting customer");

    let (customer_id, _) = find_existing(&state, parse_path_id(&id)?).await?;

    state.customer_service.delete(customer_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /clientes/registraValida
pub async fn register_validated(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CustomerView>,
) -> Result<(StatusCode, Json<CustomerRegistrationResult>), ApiError> {
    debug!(name = %request.name, "Registering customer");

    let registration = state
        .customer_service
        .register_validated(CustomerRegistrationResult::from(&request))
        .await?;

    Ok((StatusCode::CREATED, Json(registration)))
}
