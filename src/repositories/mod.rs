//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB를 주 저장소로 사용하며, 컬렉션별 리포지토리가
//! 쿼리와 영속화 로직을 캡슐화합니다.
//!
//! # Features
//!
//! - 생성자 주입을 통한 명시적 의존성 구성
//! - 컬렉션 단위의 CRUD 및 인덱스 관리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::user_repo::UserRepository;
//!
//! let user_repo = UserRepository::new(database.clone());
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

pub mod courses;
pub mod users;
