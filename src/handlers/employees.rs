//! # Employee HTTP Handlers
//!
//! 직원 리소스의 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 핸들러는 요청을 추출해 [`EmployeeService`]에 위임하고, 결과를 HTTP 응답으로 변환합니다.
//! 에러는 `AppError`의 `ResponseError` 구현이 상태 코드와 에러 본문으로 변환합니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 성공 |
//! |--------|------|------|------|
//! | `GET` | `/api/v1/employees` | 전체 목록 | 200 OK |
//! | `GET` | `/api/v1/employees/{id}` | 단건 조회 | 200 OK |
//! | `POST` | `/api/v1/employees` | 생성 | 201 Created |
//! | `PUT` | `/api/v1/employees/{id}` | 전체 수정 | 200 OK |
//! | `PATCH` | `/api/v1/employees/{id}` | 부분 수정 | 200 OK |
//! | `DELETE` | `/api/v1/employees/{id}` | 삭제 | 200 OK |
//!
//! ## 에러 응답
//!
//! ```json
//! {
//!   "status": 404,
//!   "error": "NOT_FOUND",
//!   "message": "Employee not found",
//!   "timestamp": "2024-01-01T12:00:00.000Z"
//! }
//! ```

use actix_web::{HttpResponse, delete, get, patch, post, put, web};

use crate::core::errors::AppError;
use crate::domain::dto::employees::request::{EmployeeRequest, PatchRequest};
use crate::domain::dto::employees::response::MessageResponse;
use crate::services::employees::EmployeeService;

/// 전체 직원 목록 조회 핸들러
///
/// 직원이 없으면 빈 배열을 반환합니다.
///
/// ```bash
/// curl http://localhost:8080/api/v1/employees
/// ```
#[get("")]
pub async fn list_employees(
    service: web::Data<EmployeeService>,
) -> Result<HttpResponse, AppError> {
    let employees = service.list_all().await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// 직원 단건 조회 핸들러
///
/// # Errors
///
/// * `404 Not Found` - 해당 ID의 직원이 없음
/// * `400 Bad Request` - 경로의 ID가 정수가 아님
#[get("/{id}")]
pub async fn get_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let employee = service.find_by_id(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(employee))
}

/// 직원 생성 핸들러
///
/// 본문의 `id`는 무시되고 새 ID가 부여됩니다.
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/employees \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Elena","email":"elena@example.com","salary":52000.00,"hireDate":"2023-03-01"}'
/// ```
///
/// # Errors
///
/// * `400 Bad Request` - 검증 실패 또는 이메일 중복
#[post("")]
pub async fn create_employee(
    service: web::Data<EmployeeService>,
    payload: web::Json<EmployeeRequest>,
) -> Result<HttpResponse, AppError> {
    let created = service.save(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

/// 직원 전체 수정 핸들러
///
/// 존재 여부를 먼저 확인하므로, 없는 ID는 본문 내용과 관계없이 404입니다.
#[put("/{id}")]
pub async fn update_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<i64>,
    payload: web::Json<EmployeeRequest>,
) -> Result<HttpResponse, AppError> {
    let updated = service.update(id.into_inner(), payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// 직원 부분 수정 핸들러
///
/// 허용 필드: `name`, `email`, `salary`, `hireDate`.
/// 하나라도 실패하면 아무 필드도 변경되지 않습니다.
///
/// ```bash
/// curl -X PATCH http://localhost:8080/api/v1/employees/1 \
///   -H "Content-Type: application/json" \
///   -d '{"salary":"45000.00"}'
/// ```
#[patch("/{id}")]
pub async fn patch_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<i64>,
    payload: web::Json<PatchRequest>,
) -> Result<HttpResponse, AppError> {
    let updated = service.patch(id.into_inner(), &payload).await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// 직원 삭제 핸들러
///
/// 성공 시 `{"message": "Employee deleted"}`를 반환합니다.
#[delete("/{id}")]
pub async fn delete_employee(
    service: web::Data<EmployeeService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::employee_deleted()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, http::StatusCode, test};
    use serde_json::{Value, json};

    use crate::repositories::employees::InMemoryEmployeeRepository;
    use crate::routes::configure_all_routes;
    use crate::services::employees::EmployeeService;

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(actix_web::web::Data::new(EmployeeService::new(Arc::new(
                        InMemoryEmployeeRepository::new(),
                    ))))
                    .configure(configure_all_routes),
            )
            .await
        };
    }

    fn elena() -> Value {
        json!({
            "name": "Elena",
            "email": "elena@example.com",
            "salary": 52000.00,
            "hireDate": "2023-03-01"
        })
    }

    async fn create(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
        body: Value,
    ) -> Value {
        let req = test::TestRequest::post()
            .uri("/api/v1/employees")
            .set_json(body)
            .to_request();
        let resp = test::call_service(app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        test::read_body_json(resp).await
    }

    #[actix_web::test]
    async fn create_returns_id_and_submitted_fields() {
        let app = app!();
        let body = create(&app, json!({
            "id": 999,
            "name": "Elena",
            "email": "elena@example.com",
            "salary": 52000.00,
            "hireDate": "2023-03-01"
        }))
        .await;

        assert!(body["id"].as_i64().is_some());
        assert_ne!(body["id"], 999);
        assert_eq!(body["name"], "Elena");
        assert_eq!(body["email"], "elena@example.com");
        assert_eq!(body["salary"], json!(52000.0));
        assert_eq!(body["hireDate"], "2023-03-01");
    }

    #[actix_web::test]
    async fn duplicate_email_create_is_bad_request() {
        let app = app!();
        create(&app, elena()).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/employees")
            .set_json(elena())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 400);
        assert_eq!(body["message"], "Email already registered");
    }

    #[actix_web::test]
    async fn invalid_create_body_is_bad_request() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/v1/employees")
            .set_json(json!({ "name": " ", "email": "not-an-email" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn get_missing_id_is_not_found_with_error_body() {
        let app = app!();
        let req = test::TestRequest::get().uri("/api/v1/employees/4242").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 404);
        assert_eq!(body["error"], "NOT_FOUND");
        assert_eq!(body["message"], "Employee not found");
        assert!(body["timestamp"].is_string());
    }

    #[actix_web::test]
    async fn non_integer_id_is_bad_request() {
        let app = app!();
        let req = test::TestRequest::get().uri("/api/v1/employees/abc").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 400);
    }

    #[actix_web::test]
    async fn list_returns_employees_in_id_order() {
        let app = app!();
        let first = create(&app, elena()).await;
        let second = create(&app, json!({ "name": "Maria", "email": "maria@example.com" })).await;

        let req = test::TestRequest::get().uri("/api/v1/employees").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body, json!([first, second]));
    }

    #[actix_web::test]
    async fn patch_with_unknown_field_changes_nothing() {
        let app = app!();
        let created = create(&app, elena()).await;
        let id = created["id"].as_i64().unwrap();

        let req = test::TestRequest::patch()
            .uri(&format!("/api/v1/employees/{id}"))
            .set_json(json!({ "foo": "bar", "name": "Changed" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Field not allowed: foo");

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/employees/{id}"))
            .to_request();
        let stored: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(stored, created);
    }

    #[actix_web::test]
    async fn patch_salary_string_is_stored_as_decimal() {
        let app = app!();
        let created = create(&app, elena()).await;
        let id = created["id"].as_i64().unwrap();

        let req = test::TestRequest::patch()
            .uri(&format!("/api/v1/employees/{id}"))
            .set_json(json!({ "salary": "45000.00" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["salary"].is_number());
        let salary: rust_decimal::Decimal = serde_json::from_value(body["salary"].clone()).unwrap();
        assert_eq!(salary, rust_decimal::Decimal::new(4500000, 2));
        assert_eq!(body["name"], "Elena");
    }

    #[actix_web::test]
    async fn patch_own_email_is_not_a_conflict() {
        let app = app!();
        let created = create(&app, elena()).await;
        let id = created["id"].as_i64().unwrap();

        let req = test::TestRequest::patch()
            .uri(&format!("/api/v1/employees/{id}"))
            .set_json(json!({ "email": "elena@example.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn delete_then_get_is_not_found() {
        let app = app!();
        let created = create(&app, elena()).await;
        let uri = format!("/api/v1/employees/{}", created["id"]);

        let req = test::TestRequest::delete().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "message": "Employee deleted" }));

        let req = test::TestRequest::get().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn put_on_missing_id_is_not_found_not_bad_request() {
        let app = app!();
        let req = test::TestRequest::put()
            .uri("/api/v1/employees/77")
            .set_json(json!({ "name": "", "email": "broken" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn put_on_missing_id_with_partial_body_is_not_found() {
        let app = app!();

        for body in [json!({}), json!({ "salary": 1 }), json!({ "name": "X" })] {
            let req = test::TestRequest::put()
                .uri("/api/v1/employees/77")
                .set_json(&body)
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "body: {}", body);
        }
    }

    #[actix_web::test]
    async fn put_with_missing_fields_on_existing_id_is_bad_request() {
        let app = app!();
        let created = create(&app, elena()).await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/employees/{}", created["id"]))
            .set_json(json!({ "salary": 1 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn patch_name_longer_than_put_allows_is_rejected() {
        let app = app!();
        let created = create(&app, elena()).await;
        let uri = format!("/api/v1/employees/{}", created["id"]);
        let long_name = "a".repeat(101);

        let req = test::TestRequest::patch()
            .uri(&uri)
            .set_json(json!({ "name": long_name }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get().uri(&uri).to_request();
        let stored: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(stored["name"], "Elena");
    }

    #[actix_web::test]
    async fn put_replaces_all_fields() {
        let app = app!();
        let created = create(&app, elena()).await;
        let id = created["id"].as_i64().unwrap();

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/employees/{id}"))
            .set_json(json!({ "name": "Elena G.", "email": "elena.g@example.com" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["id"], id);
        assert_eq!(body["name"], "Elena G.");
        assert_eq!(body["email"], "elena.g@example.com");
        assert!(body["salary"].is_null());
        assert!(body["hireDate"].is_null());
    }

    #[actix_web::test]
    async fn malformed_json_is_structured_bad_request() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/v1/employees")
            .insert_header(("content-type", "application/json"))
            .set_payload("{ not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "BAD_REQUEST");
    }
}
