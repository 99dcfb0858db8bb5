use super::*;
use serde::{Deserialize, Serialize};

pub const SENTINEL_CUSTOMER_ID: u32 = 999;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub customer_id: u32,
    pub customer_name: String,
    pub customer_location: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Create payload. Ids are always assigned by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCustomer {
    pub customer_name: String,
    pub customer_location: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// The persisted unit: customers wrapped in a named field rather than a bare array.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct CustomerCollection {
    #[serde(default)]
    pub customers: Vec<Customer>,
}

impl NewCustomer {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            customer_name: name.into(),
            customer_location: location.into(),
            ..Default::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn validate_required(&self) -> Result<(), AppError> {
        validate_required_fields(&self.customer_name, &self.customer_location)
    }

    pub fn into_customer(self, customer_id: u32) -> Customer {
        Customer {
            customer_id,
            customer_name: self.customer_name,
            customer_location: self.customer_location,
            email: self.email,
            phone: self.phone,
            address: self.address,
        }
    }
}

impl Customer {
    pub fn validate_required(&self) -> Result<(), AppError> {
        validate_required_fields(&self.customer_name, &self.customer_location)
    }

    /// Overwrites every mutable field from `other`. The id is left untouched.
    pub fn overwrite_from(&mut self, other: &Customer) {
        self.customer_name = other.customer_name.clone();
        self.customer_location = other.customer_location.clone();
        self.email = other.email.clone();
        self.phone = other.phone.clone();
        self.address = other.address.clone();
    }

    /// Placeholder row seeded when every read path fails and the sentinel policy is on.
    pub fn sentinel() -> Self {
        Customer {
            customer_id: SENTINEL_CUSTOMER_ID,
            customer_name: "Error fallback customer".to_string(),
            customer_location: "System".to_string(),
            email: Some("error@example.com".to_string()),
            phone: Some("000-000-000".to_string()),
            address: Some("Failed to read customer data, check the logs".to_string()),
        }
    }
}

fn validate_required_fields(name: &str, location: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("customerName is required".to_string()));
    }
    if location.trim().is_empty() {
        return Err(AppError::Validation(
            "customerLocation is required".to_string(),
        ));
    }
    Ok(())
}

/// Max+1 over the current collection, or 1 when empty. Not a persisted counter.
pub fn next_customer_id(customers: &[Customer]) -> Result<u32, AppError> {
    let Some(max) = customers.iter().map(|c| c.customer_id).max() else {
        return Ok(1);
    };

    max.checked_add(1).ok_or_else(|| {
        AppError::Validation(format!("customerId {max} is the largest id, no id left to assign"))
    })
}
