//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! ## 주요 역할
//!
//! - **요청 매핑**: JSON 본문을 구조화된 Rust 타입으로 역직렬화
//! - **응답 변환**: 엔티티를 클라이언트 친화적인 형태로 변환
//!   (ObjectId → hex 문자열, 비밀번호 해시 제외, 내부 필드 은닉)
//! - **계약 안정성**: 엔티티 내부 구조 변경이 API 계약에 새지 않도록 격리
//!
//! ## 모듈 구성
//!
//! ```text
//! dto/
//! ├── users/      ← 회원가입/로그인/프로필 요청, 사용자 응답
//! └── courses/    ← 강의/챕터/서브토픽/퀴즈 요청, 강의 트리 응답
//! ```

pub mod users;
pub mod courses;
