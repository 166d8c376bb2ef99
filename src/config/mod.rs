//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경 관련 설정
//! - [`auth_config`] - JWT 관련 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 환경 분리 (Environment Separation)
//!
//! 개발, 테스트, 스테이징, 프로덕션 환경별로 다른 설정값을 제공합니다.
//!
//! ### 2. 보안 우선 (Security First)
//!
//! - 민감한 정보는 환경 변수로만 제공
//! - 기본값은 개발 환경에서만 안전
//! - `MONGO_URI` 누락 시 부트스트랩 단계에서 프로세스 종료
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 저장소 설정 (필수)
//! export MONGO_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="course_catalog"
//!
//! # JWT 설정
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_HOURS="24"
//!
//! # 보안 설정
//! export BCRYPT_COST="12"          # 4-15 범위
//! ```

pub mod auth_config;
pub mod data_config;

pub use auth_config::*;
pub use data_config::*;
