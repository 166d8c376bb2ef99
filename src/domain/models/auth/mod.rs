//! 인증 컨텍스트 모델
//!
//! 미들웨어가 검증한 토큰에서 추출되어 핸들러로 전달되는 값 객체입니다.

pub mod authenticated_user;

pub use authenticated_user::AuthenticatedUser;
