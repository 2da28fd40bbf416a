//! Thin orchestration layer over the employee store.

use std::sync::Arc;

use crate::domain::ports::{EmployeeStore, EmployeeStoreError};
use crate::domain::{Employee, Error};

/// Pass-through service calling the persistence gateway.
///
/// The store is injected at construction so handlers depend only on the
/// domain port. There is no business logic here beyond error translation:
/// store failures surface on the generic [`crate::domain::ErrorCode::InvalidRequest`]
/// path, carrying the store's message verbatim.
#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
}

fn map_store_error(error: EmployeeStoreError) -> Error {
    Error::invalid_request(error.to_string())
}

impl EmployeeService {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// Return every stored employee.
    pub async fn list_all(&self) -> Result<Vec<Employee>, Error> {
        self.store.find_all().await.map_err(map_store_error)
    }

    /// Return the employee for `id`, or `None` when absent.
    ///
    /// Absence is an explicit result, not an error; raising NotFound is the
    /// HTTP handler's decision.
    pub async fn get(&self, id: i32) -> Result<Option<Employee>, Error> {
        self.store.find_by_id(id).await.map_err(map_store_error)
    }

    /// Insert or update an employee and return the persisted record.
    pub async fn save(&self, employee: Employee) -> Result<Employee, Error> {
        self.store.save(employee).await.map_err(map_store_error)
    }

    /// Remove the employee for `id`. Missing ids are left to the store.
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        self.store.delete_by_id(id).await.map_err(map_store_error)
    }
}
