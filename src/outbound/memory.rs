//! In-memory employee store.
//!
//! Backs the service when no database is configured and serves as the store
//! for handler and integration tests. Identifiers are assigned sequentially
//! from 1, mirroring what a fresh `SERIAL` column would produce.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::Employee;
use crate::domain::ports::{EmployeeStore, EmployeeStoreError};

#[derive(Debug, Default)]
struct Inner {
    rows: BTreeMap<i32, Employee>,
    last_id: i32,
}

/// Mutex-guarded map keyed by employee id.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeStore {
    inner: Mutex<Inner>,
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>, EmployeeStoreError> {
        self.inner
            .lock()
            .map_err(|_| EmployeeStoreError::query("employee store mutex poisoned"))
    }
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn find_all(&self) -> Result<Vec<Employee>, EmployeeStoreError> {
        let inner = self.lock()?;
        Ok(inner.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, EmployeeStoreError> {
        let inner = self.lock()?;
        Ok(inner.rows.get(&id).cloned())
    }

    async fn save(&self, mut employee: Employee) -> Result<Employee, EmployeeStoreError> {
        let mut inner = self.lock()?;
        if !employee.is_persisted() {
            inner.last_id += 1;
            employee.id = inner.last_id;
        } else {
            // Keep the counter ahead of explicitly supplied ids.
            inner.last_id = inner.last_id.max(employee.id);
        }
        inner.rows.insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), EmployeeStoreError> {
        let mut inner = self.lock()?;
        inner.rows.remove(&id);
        Ok(())
    }
}
