use axum::Json;
use axum::extract::State;

use crate::error::{AppError, Result};
use crate::models::{CustomerListResponse, CustomerOption};
use crate::state::AppState;

/// GET /api/client/list
///
/// Fetches the store's customers and projects them into label/value pairs
/// for a storefront dropdown. Only the first page BigCommerce returns is
/// surfaced; there is no pagination handling.
pub async fn list_customers(State(state): State<AppState>) -> Result<Json<Vec<CustomerOption>>> {
    let response = state.bigcommerce.get("customers").await?;

    if !response.is_success() {
        tracing::warn!(status = %response.status, "upstream rejected customer list request");
        return Err(AppError::Upstream {
            status: response.status,
            message: "No se pudo obtener la lista de clientes".into(),
        });
    }

    let customers: CustomerListResponse = serde_json::from_str(&response.body)?;
    let options = customers.data.iter().map(CustomerOption::from).collect();

    Ok(Json(options))
}
