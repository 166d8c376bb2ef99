//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 비즈니스 객체와 도메인 규칙을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 핵심 비즈니스 객체 (MongoDB 문서)
//! ├── DTOs          - 데이터 전송 객체 (Request/Response)
//! └── Models        - 인증 파이프라인 값 객체 (클레임, 요청 컨텍스트)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! 영속 가능한 비즈니스 객체들입니다. User 계정과 Course 애그리게잇
//! (Chapter → SubTopic → Quiz)을 포함합니다.
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! API 계약을 정의합니다. 요청 DTO는 `validator` 기반 검증을 수행하고,
//! 응답 DTO는 ObjectId를 hex 문자열로 변환해 클라이언트 친화적인
//! JSON을 만듭니다.
//!
//! ### [`models`] - 인증 값 객체
//!
//! JWT 클레임(`TokenClaims`)과 미들웨어가 핸들러로 전달하는
//! 인증 컨텍스트(`AuthenticatedUser`)를 정의합니다.
//!
//! ## 설계 원칙
//!
//! 1. **작은 인터페이스**: 각 DTO는 특정 용도에만 최적화
//! 2. **명시적 변환**: From/Into trait을 통한 타입 변환
//! 3. **테스트 작성**: 도메인 로직에 대한 충분한 단위 테스트

pub mod entities;
pub mod dto;
pub mod models;
