//! # Domain Entities Module
//!
//! 이 모듈은 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! MongoDB 문서와 직접 매핑되는 데이터 구조체들을 포함합니다.
//!
//! ## 주요 역할
//!
//! - **도메인 모델링**: 비즈니스 도메인의 핵심 개념들을 Rust 구조체로 표현
//! - **데이터베이스 매핑**: MongoDB 컬렉션과 1:1 대응되는 문서 구조 정의
//! - **타입 안전성**: 컴파일 타임에 데이터 일관성 보장
//! - **직렬화/역직렬화**: JSON/BSON ↔ Rust 구조체 변환 지원
//!
//! ## 모듈 구성
//!
//! ```text
//! entities/
//! ├── users/       ← 사용자 계정 (users 컬렉션)
//! └── courses/     ← 강의 애그리게잇 (courses 컬렉션)
//! ```
//!
//! ## 엔티티 설계 원칙
//!
//! ### MongoDB 통합
//! 모든 엔티티는 다음 특징을 가집니다:
//! - **BSON 직렬화**: `serde`와 `bson` 크레이트를 통한 자동 변환
//! - **ObjectId 지원**: MongoDB의 `_id` 필드와 매핑 (중첩 노드 포함)
//! - **camelCase 필드명**: 저장 문서와 API 응답이 동일한 필드명 사용
//!
//! ### 애그리게잇 경계
//! Course는 애그리게잇 루트입니다. Chapter/SubTopic/Quiz는 독립 컬렉션이
//! 아니라 루트 문서에 내장되며, 모든 변경은 루트를 통해 이루어집니다.

pub mod users;
pub mod courses;
