//! PostgreSQL persistence adapter built on Diesel.

mod diesel_employee_store;
mod models;
mod pool;
pub mod schema;

pub use diesel_employee_store::DieselEmployeeStore;
pub use pool::{DbPool, PoolConfig, PoolError};
