//! Shared HTTP adapter state.
//!
//! Handlers accept this via `actix_web::web::Data`, so they depend only on
//! the domain service and stay testable without I/O.

use crate::domain::EmployeeService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub employees: EmployeeService,
}

impl HttpState {
    pub fn new(employees: EmployeeService) -> Self {
        Self { employees }
    }
}
