//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 구체 타입이 아니라 `Arc<dyn EmployeeRepository>`에 의존합니다.
//! 어떤 구현체를 쓸지는 `main`에서 설정에 따라 결정하여 주입합니다.

pub mod employees;
