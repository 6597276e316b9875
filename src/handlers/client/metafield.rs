use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::{AppError, Result};
use crate::models::{Metafield, MetafieldListResponse, MetafieldPayload};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MetafieldQuery {
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct MetafieldStatus {
    /// Whether the check-payment metafield exists at all
    pub found: bool,
    /// Whether its value reads as true (false when absent)
    pub enabled: bool,
}

/// GET /api/client/metafield?id={customer_id}
///
/// Looks up the check-payment flag in the customer's metafield collection.
/// A metafield present with value `"false"` yields `found=true,
/// enabled=false`; a missing metafield yields both false.
pub async fn check_metafield(
    State(state): State<AppState>,
    Query(query): Query<MetafieldQuery>,
) -> Result<Json<MetafieldStatus>> {
    let response = state
        .bigcommerce
        .get(&format!("customers/{}/metafields", query.id))
        .await?;

    if !response.is_success() {
        tracing::warn!(
            customer_id = query.id,
            status = %response.status,
            "upstream rejected metafield lookup"
        );
        return Err(AppError::Upstream {
            status: response.status,
            message: "No se pudo consultar los metafields".into(),
        });
    }

    let metafields: MetafieldListResponse = serde_json::from_str(&response.body)?;
    let flag = metafields.data.iter().find(|m| m.is_check_payment_flag());

    Ok(Json(MetafieldStatus {
        found: flag.is_some(),
        enabled: flag.map(Metafield::is_enabled).unwrap_or(false),
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetMetafieldRequest {
    pub id: i64,
    pub allow_check: bool,
}

/// POST /api/client/setMetafield
///
/// Create-or-update of the check-payment flag, keyed by the (namespace, key)
/// pair rather than a stored metafield id. Every failure inside the sequence
/// is mapped at this boundary: upstream rejections become 400 with the raw
/// upstream body, anything else becomes a generic 500.
pub async fn set_metafield(
    State(state): State<AppState>,
    Json(request): Json<SetMetafieldRequest>,
) -> Response {
    match upsert_check_payment_flag(&state, &request).await {
        Ok(result) => (
            StatusCode::OK,
            Json(json!({ "success": true, "result": result })),
        )
            .into_response(),
        Err(AppError::Upstream { status, message }) => {
            tracing::warn!(customer_id = request.id, %status, "upstream rejected metafield upsert");
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "success": false,
                    "status": status.to_string(),
                    "error": raw_json(&message),
                })),
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!(customer_id = request.id, error = %err, "metafield upsert failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "message": "Unhandled server error",
                    "details": err.to_string(),
                })),
            )
                .into_response()
        }
    }
}

async fn upsert_check_payment_flag(
    state: &AppState,
    request: &SetMetafieldRequest,
) -> Result<Value> {
    let path = format!("customers/{}/metafields", request.id);

    let current = state.bigcommerce.get(&path).await?;
    if !current.is_success() {
        return Err(AppError::Upstream {
            status: current.status,
            message: current.body,
        });
    }

    let metafields: MetafieldListResponse = serde_json::from_str(&current.body)?;
    let existing = metafields.data.iter().find(|m| m.is_check_payment_flag());

    let payload = MetafieldPayload::check_payment(request.allow_check);

    // Read-then-write, unguarded: two concurrent upserts for the same
    // customer can both miss here and both create, since BigCommerce does
    // not enforce uniqueness on the (namespace, key) pair.
    let response = match existing {
        Some(metafield) => {
            state
                .bigcommerce
                .put(&format!("{path}/{}", metafield.id), &payload)
                .await?
        }
        None => state.bigcommerce.post(&path, &payload).await?,
    };

    if !response.is_success() {
        return Err(AppError::Upstream {
            status: response.status,
            message: response.body,
        });
    }

    Ok(raw_json(&response.body))
}

/// Echo an upstream body verbatim: as JSON when it parses, as a string
/// otherwise.
fn raw_json(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}
