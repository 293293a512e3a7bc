//! # MongoDB 직원 리포지토리
//!
//! `employees` 컬렉션에 직원 레코드를 저장하는 구현체입니다.
//!
//! ## 특징
//!
//! - **정수 ID**: `counters` 컬렉션의 시퀀스 문서를 `$inc`로 원자적으로 증가시켜 부여
//! - **데이터 무결성**: `email` 유니크 인덱스가 쓰기 시점의 중복을 차단
//! - **에러 매핑**: 중복 키(11000)는 `ValidationError`, 나머지 드라이버 에러는 `DatabaseError`

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, IndexModel,
    bson::doc,
    error::{ErrorKind, WriteFailure},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::employees::{Employee, NewEmployee};
use crate::repositories::employees::employee_repo::{EMAIL_TAKEN_MESSAGE, EmployeeRepository};

const COLLECTION: &str = "employees";
const COUNTERS: &str = "counters";
const DUPLICATE_KEY: i32 = 11000;

/// 컬렉션에 저장되는 문서 형태 (`id` → `_id`)
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EmployeeDocument {
    #[serde(rename = "_id")]
    id: i64,
    name: String,
    email: String,
    #[serde(default)]
    salary: Option<Decimal>,
    #[serde(default)]
    hire_date: Option<NaiveDate>,
}

impl From<&Employee> for EmployeeDocument {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name.clone(),
            email: employee.email.clone(),
            salary: employee.salary,
            hire_date: employee.hire_date,
        }
    }
}

impl From<EmployeeDocument> for Employee {
    fn from(document: EmployeeDocument) -> Self {
        Self {
            id: document.id,
            name: document.name,
            email: document.email,
            salary: document.salary,
            hire_date: document.hire_date,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Counter {
    seq: i64,
}

/// 드라이버 에러를 애플리케이션 에러로 변환합니다.
fn map_mongo_error(error: mongodb::error::Error) -> AppError {
    if let ErrorKind::Write(WriteFailure::WriteError(write_error)) = error.kind.as_ref() {
        if write_error.code == DUPLICATE_KEY {
            return AppError::ValidationError(EMAIL_TAKEN_MESSAGE.to_string());
        }
    }
    AppError::DatabaseError(error.to_string())
}

pub struct MongoEmployeeRepository {
    db: Arc<Database>,
}

impl MongoEmployeeRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<EmployeeDocument> {
        self.db.get_database().collection(COLLECTION)
    }

    /// 다음 직원 ID를 원자적으로 발급합니다.
    async fn next_id(&self) -> AppResult<i64> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self
            .db
            .get_database()
            .collection::<Counter>(COUNTERS)
            .find_one_and_update(doc! { "_id": COLLECTION }, doc! { "$inc": { "seq": 1_i64 } })
            .with_options(options)
            .await
            .map_err(map_mongo_error)?
            .ok_or_else(|| AppError::DatabaseError("ID 시퀀스 발급 실패".to_string()))?;

        Ok(counter.seq)
    }

    /// 이메일 유니크 인덱스를 생성합니다. 기동 시 한 번 호출합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_index(email_index)
            .await
            .map_err(map_mongo_error)?;

        log::info!("✅ {} 컬렉션 인덱스 준비 완료", COLLECTION);
        Ok(())
    }
}

#[async_trait]
impl EmployeeRepository for MongoEmployeeRepository {
    async fn find_all(&self) -> AppResult<Vec<Employee>> {
        let documents: Vec<EmployeeDocument> = self
            .collection()
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await
            .map_err(map_mongo_error)?
            .try_collect()
            .await
            .map_err(map_mongo_error)?;

        Ok(documents.into_iter().map(Employee::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Employee>> {
        let document = self
            .collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(map_mongo_error)?;

        Ok(document.map(Employee::from))
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let document = self
            .collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(map_mongo_error)?;

        Ok(document.is_some())
    }

    async fn insert(&self, employee: NewEmployee) -> AppResult<Employee> {
        let id = self.next_id().await?;
        let stored = Employee::from_new(id, employee);

        self.collection()
            .insert_one(EmployeeDocument::from(&stored))
            .await
            .map_err(map_mongo_error)?;

        Ok(stored)
    }

    async fn replace(&self, employee: &Employee) -> AppResult<Option<Employee>> {
        let result = self
            .collection()
            .replace_one(doc! { "_id": employee.id }, EmployeeDocument::from(employee))
            .await
            .map_err(map_mongo_error)?;

        if result.matched_count == 0 {
            return Ok(None);
        }
        Ok(Some(employee.clone()))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let result = self
            .collection()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(map_mongo_error)?;

        Ok(result.deleted_count > 0)
    }

    fn backend_name(&self) -> &'static str {
        "mongodb"
    }
}
