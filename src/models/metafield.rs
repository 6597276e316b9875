use serde::{Deserialize, Serialize};

/// Namespace/key pair identifying the check-payment flag within a customer's
/// metafield collection. BigCommerce does not enforce uniqueness on the pair;
/// it is our application-level idempotency key.
pub const METAFIELD_NAMESPACE: &str = "payment_options";
pub const METAFIELD_KEY: &str = "allow_check_payment";

#[derive(Debug, Deserialize)]
pub struct MetafieldListResponse {
    pub data: Vec<Metafield>,
}

/// A customer metafield as BigCommerce returns it. Extra fields the API
/// sends (dates, resource ids) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Metafield {
    pub id: i64,
    pub namespace: String,
    pub key: String,
    pub value: String,
}

impl Metafield {
    pub fn is_check_payment_flag(&self) -> bool {
        self.namespace == METAFIELD_NAMESPACE && self.key == METAFIELD_KEY
    }

    /// The flag stores booleans as strings; BigCommerce is not consistent
    /// about casing, so compare case-insensitively.
    pub fn is_enabled(&self) -> bool {
        self.value.eq_ignore_ascii_case("true")
    }
}

/// Body sent on both create and update of the flag. Update is a full
/// replace, so every field is always present.
#[derive(Debug, Serialize)]
pub struct MetafieldPayload {
    pub namespace: &'static str,
    pub key: &'static str,
    pub value: String,
    pub permission_set: &'static str,
    pub description: &'static str,
    pub value_type: &'static str,
}

impl MetafieldPayload {
    pub fn check_payment(allow: bool) -> Self {
        Self {
            namespace: METAFIELD_NAMESPACE,
            key: METAFIELD_KEY,
            value: allow.to_string(),
            permission_set: "read",
            description: "Enable or disable check payment option",
            value_type: "boolean",
        }
    }
}
