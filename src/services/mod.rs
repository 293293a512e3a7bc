//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 리포지토리를 생성자로 주입받고, `web::Data`로 핸들러에 공유됩니다.

pub mod employees;
