use serde::{Deserialize, Serialize};

/// Envelope BigCommerce wraps collection responses in. Only the first page
/// is consumed; pagination metadata is ignored.
#[derive(Debug, Deserialize)]
pub struct CustomerListResponse {
    pub data: Vec<Customer>,
}

/// The subset of a BigCommerce customer record we read.
#[derive(Debug, Clone, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Customer {
    /// Display label for storefront dropdowns: `First Last (email)`.
    pub fn label(&self) -> String {
        format!("{} {} ({})", self.first_name, self.last_name, self.email)
    }
}

/// Projection returned by the list endpoint.
#[derive(Debug, Serialize)]
pub struct CustomerOption {
    pub label: String,
    pub value: i64,
}

impl From<&Customer> for CustomerOption {
    fn from(customer: &Customer) -> Self {
        Self {
            label: customer.label(),
            value: customer.id,
        }
    }
}
