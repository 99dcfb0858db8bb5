pub mod customer;

use crate::errors::AppError;

pub use customer::{Customer, CustomerCollection, NewCustomer, next_customer_id};
