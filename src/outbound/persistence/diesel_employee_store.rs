//! PostgreSQL-backed `EmployeeStore` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::Employee;
use crate::domain::ports::{EmployeeStore, EmployeeStoreError};

use super::models::{EmployeeRow, NewEmployeeRow};
use super::pool::{DbPool, PoolError};
use super::schema::employees;

/// Diesel adapter for the employee store port.
///
/// Inserts use `RETURNING` so the assigned id comes back with the row;
/// updates target the primary key; deletes ignore the affected-row count,
/// which makes deleting a missing id a no-op at this layer.
#[derive(Clone)]
pub struct DieselEmployeeStore {
    pool: DbPool,
}

impl DieselEmployeeStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> EmployeeStoreError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            EmployeeStoreError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> EmployeeStoreError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => EmployeeStoreError::query("record not found"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            EmployeeStoreError::connection("database connection error")
        }
        DieselError::DatabaseError(_, _) => EmployeeStoreError::query("database error"),
        _ => EmployeeStoreError::query("database error"),
    }
}

fn row_to_employee(row: EmployeeRow) -> Employee {
    Employee {
        id: row.id,
        name: row.name,
        surname: row.surname,
        department: row.department,
        salary: row.salary,
    }
}

#[async_trait]
impl EmployeeStore for DieselEmployeeStore {
    async fn find_all(&self) -> Result<Vec<Employee>, EmployeeStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<EmployeeRow> = employees::table
            .select(EmployeeRow::as_select())
            .order(employees::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_employee).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Employee>, EmployeeStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<EmployeeRow> = employees::table
            .find(id)
            .select(EmployeeRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_employee))
    }

    async fn save(&self, employee: Employee) -> Result<Employee, EmployeeStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = if !employee.is_persisted() {
            let new_row = NewEmployeeRow {
                name: &employee.name,
                surname: employee.surname.as_deref(),
                department: employee.department.as_deref(),
                salary: employee.salary,
            };

            diesel::insert_into(employees::table)
                .values(&new_row)
                .returning(EmployeeRow::as_returning())
                .get_result(&mut conn)
                .await
                .map_err(map_diesel_error)?
        } else {
            diesel::update(employees::table.find(employee.id))
                .set((
                    employees::name.eq(&employee.name),
                    employees::surname.eq(employee.surname.as_deref()),
                    employees::department.eq(employee.department.as_deref()),
                    employees::salary.eq(employee.salary),
                ))
                .returning(EmployeeRow::as_returning())
                .get_result(&mut conn)
                .await
                .map_err(map_diesel_error)?
        };

        Ok(row_to_employee(row))
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), EmployeeStoreError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(employees::table.find(id))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_errors_map_to_connection_errors() {
        let err = map_pool_error(PoolError::checkout("connection refused"));

        assert!(matches!(err, EmployeeStoreError::Connection { .. }));
        assert!(err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn diesel_not_found_maps_to_query_error() {
        let err = map_diesel_error(diesel::result::Error::NotFound);

        assert!(matches!(err, EmployeeStoreError::Query { .. }));
        assert!(err.to_string().contains("record not found"));
    }

    #[rstest]
    fn rows_convert_to_employees_field_for_field() {
        let row = EmployeeRow {
            id: 3,
            name: "Grace".into(),
            surname: Some("Hopper".into()),
            department: None,
            salary: Some(120_000),
        };

        let employee = row_to_employee(row);

        assert_eq!(employee.id, 3);
        assert_eq!(employee.name, "Grace");
        assert_eq!(employee.surname.as_deref(), Some("Hopper"));
        assert_eq!(employee.department, None);
        assert_eq!(employee.salary, Some(120_000));
    }
}
