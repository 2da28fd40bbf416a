//! Employee CRUD handlers.
//!
//! ```text
//! GET    /api/employees       List every employee
//! GET    /api/employees/{id}  Fetch one employee, 404 when absent
//! POST   /api/employees       Insert; the store assigns the id
//! PUT    /api/employees       Update in place by the body's id
//! DELETE /api/employees/{id}  Remove one employee, 404 when absent
//! ```

use actix_web::{delete, get, post, put, web};

use crate::domain::{Employee, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

fn missing_employee(id: i32) -> Error {
    Error::not_found(format!("There is no employee with id={id} in database"))
}

/// List every stored employee.
#[get("/employees")]
pub async fn list_employees(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Employee>>> {
    let employees = state.employees.list_all().await?;
    Ok(web::Json(employees))
}

/// Fetch a single employee by id.
#[get("/employees/{id}")]
pub async fn get_employee(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Employee>> {
    let id = path.into_inner();
    match state.employees.get(id).await? {
        Some(employee) => Ok(web::Json(employee)),
        None => Err(missing_employee(id)),
    }
}

/// Insert a new employee and return it with the assigned id.
#[post("/employees")]
pub async fn add_employee(
    state: web::Data<HttpState>,
    payload: web::Json<Employee>,
) -> ApiResult<web::Json<Employee>> {
    let saved = state.employees.save(payload.into_inner()).await?;
    Ok(web::Json(saved))
}

/// Update an existing employee in place.
///
/// No existence check happens here: a PUT for an id the store has never seen
/// behaves however the store decides. Only DELETE probes first.
#[put("/employees")]
pub async fn update_employee(
    state: web::Data<HttpState>,
    payload: web::Json<Employee>,
) -> ApiResult<web::Json<Employee>> {
    let saved = state.employees.save(payload.into_inner()).await?;
    Ok(web::Json(saved))
}

/// Remove an employee, answering with a plain-text confirmation.
#[delete("/employees/{id}")]
pub async fn delete_employee(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<String> {
    let id = path.into_inner();
    if state.employees.get(id).await?.is_none() {
        return Err(missing_employee(id));
    }
    state.employees.delete(id).await?;
    Ok(format!("Employee with ID={id} was deleted."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EmployeeService;
    use crate::inbound::http::api_scope;
    use crate::outbound::memory::InMemoryEmployeeStore;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let store = Arc::new(InMemoryEmployeeStore::new());
        let state = HttpState::new(EmployeeService::new(store));
        App::new()
            .app_data(web::Data::new(state))
            .service(api_scope())
    }

    async fn post_employee(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
        body: Value,
    ) -> Value {
        let request = actix_test::TestRequest::post()
            .uri("/api/employees")
            .set_json(body)
            .to_request();
        let response = actix_test::call_service(app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        actix_test::read_body_json(response).await
    }

    #[actix_web::test]
    async fn list_starts_empty() {
        let app = actix_test::init_service(test_app()).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/employees")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn post_assigns_identifier_and_get_round_trips() {
        let app = actix_test::init_service(test_app()).await;

        let created = post_employee(&app, json!({"name": "Alice"})).await;
        assert_eq!(created, json!({"id": 1, "name": "Alice"}));

        let request = actix_test::TestRequest::get()
            .uri("/api/employees/1")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let fetched: Value = actix_test::read_body_json(response).await;
        assert_eq!(fetched, created);
    }

    #[actix_web::test]
    async fn get_missing_employee_returns_404_with_info() {
        let app = actix_test::init_service(test_app()).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/employees/42")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body,
            json!({"info": "There is no employee with id=42 in database"})
        );
    }

    #[actix_web::test]
    async fn put_updates_in_place_and_is_idempotent() {
        let app = actix_test::init_service(test_app()).await;
        post_employee(&app, json!({"name": "Grace", "salary": 100})).await;

        let update = json!({"id": 1, "name": "Grace", "salary": 120});
        for _ in 0..2 {
            let request = actix_test::TestRequest::put()
                .uri("/api/employees")
                .set_json(update.clone())
                .to_request();
            let response = actix_test::call_service(&app, request).await;
            assert_eq!(response.status(), StatusCode::OK);

            let body: Value = actix_test::read_body_json(response).await;
            assert_eq!(body, update);
        }

        let request = actix_test::TestRequest::get()
            .uri("/api/employees/1")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        let fetched: Value = actix_test::read_body_json(response).await;
        assert_eq!(fetched, update);
    }

    #[actix_web::test]
    async fn delete_confirms_then_get_returns_404() {
        let app = actix_test::init_service(test_app()).await;
        post_employee(&app, json!({"name": "Alice"})).await;

        let request = actix_test::TestRequest::delete()
            .uri("/api/employees/1")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = actix_test::read_body(response).await;
        assert_eq!(body, web::Bytes::from_static(b"Employee with ID=1 was deleted."));

        let request = actix_test::TestRequest::get()
            .uri("/api/employees/1")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn delete_missing_employee_returns_404() {
        let app = actix_test::init_service(test_app()).await;

        let request = actix_test::TestRequest::delete()
            .uri("/api/employees/7")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body,
            json!({"info": "There is no employee with id=7 in database"})
        );
    }

    #[rstest]
    #[case("abc")]
    #[case("1.5")]
    #[case("9999999999999")]
    #[actix_web::test]
    async fn non_integer_path_id_is_rejected_as_400(#[case] raw_id: &str) {
        let app = actix_test::init_service(test_app()).await;

        let request = actix_test::TestRequest::get()
            .uri(&format!("/api/employees/{raw_id}"))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: Value = actix_test::read_body_json(response).await;
        assert!(body.get("info").and_then(Value::as_str).is_some());
    }

    #[actix_web::test]
    async fn malformed_json_body_is_rejected_as_400() {
        let app = actix_test::init_service(test_app()).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/employees")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"name\":")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: Value = actix_test::read_body_json(response).await;
        assert!(body.get("info").and_then(Value::as_str).is_some());
    }

    #[actix_web::test]
    async fn list_returns_each_inserted_employee() {
        let app = actix_test::init_service(test_app()).await;
        for name in ["Alice", "Bob", "Carol"] {
            post_employee(&app, json!({"name": name})).await;
        }

        let request = actix_test::TestRequest::get()
            .uri("/api/employees")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        let body: Value = actix_test::read_body_json(response).await;
        let listed = body.as_array().expect("employee array");
        assert_eq!(listed.len(), 3);

        for employee in listed {
            let id = employee.get("id").and_then(Value::as_i64).expect("id");
            let request = actix_test::TestRequest::get()
                .uri(&format!("/api/employees/{id}"))
                .to_request();
            let response = actix_test::call_service(&app, request).await;
            assert_eq!(response.status(), StatusCode::OK);
        }
    }
}
