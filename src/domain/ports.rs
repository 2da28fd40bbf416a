//! Port abstraction for employee persistence adapters.
//!
//! Inbound code only sees this trait; the Diesel adapter and the in-memory
//! store both implement it, so handlers stay testable without a database.

use async_trait::async_trait;

use crate::domain::Employee;

/// Persistence errors raised by employee store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmployeeStoreError {
    /// Store connection could not be established or checked out.
    #[error("employee store connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("employee store query failed: {message}")]
    Query { message: String },
}

impl EmployeeStoreError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// CRUD gateway to the employee backing store.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Fetch every stored employee. Ordering is store-defined.
    async fn find_all(&self) -> Result<Vec<Employee>, EmployeeStoreError>;

    /// Fetch one employee by identifier, `None` when absent.
    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, EmployeeStoreError>;

    /// Insert when `employee.id` is zero, otherwise update in place.
    ///
    /// Returns the persisted record with the identifier populated.
    async fn save(&self, employee: Employee) -> Result<Employee, EmployeeStoreError>;

    /// Remove the employee with the given identifier.
    ///
    /// Behaviour for an absent identifier is adapter-defined; callers that
    /// need a not-found signal must check [`EmployeeStore::find_by_id`]
    /// first.
    async fn delete_by_id(&self, id: i32) -> Result<(), EmployeeStoreError>;
}
