//! Row structs mapping the `employees` table to and from the domain entity.

use diesel::prelude::*;

use super::schema::employees;

/// Row read from the `employees` table.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct EmployeeRow {
    pub id: i32,
    pub name: String,
    pub surname: Option<String>,
    pub department: Option<String>,
    pub salary: Option<i32>,
}

/// Insert payload; the id comes back from the `SERIAL` column.
#[derive(Debug, Insertable)]
#[diesel(table_name = employees)]
pub struct NewEmployeeRow<'a> {
    pub name: &'a str,
    pub surname: Option<&'a str>,
    pub department: Option<&'a str>,
    pub salary: Option<i32>,
}
