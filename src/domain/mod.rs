//! Domain entities, errors, ports, and services.
//!
//! Nothing in this module knows about HTTP or the database; inbound and
//! outbound adapters translate at the edges.

pub mod employee;
pub mod error;
pub mod ports;
pub mod service;

pub use employee::Employee;
pub use error::{Error, ErrorCode};
pub use service::EmployeeService;
