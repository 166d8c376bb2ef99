//! 강의 카탈로그 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! MongoDB 연결을 설정하고 JWT 인증 기반의 REST API를 제공합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use course_service_backend::core::state::AppState;
use course_service_backend::config::ServerConfig;
use course_service_backend::db::Database;
use course_service_backend::routes::configure_all_routes;
use course_service_backend::utils::display_terminal::{print_boxed_title, print_sub_task};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    print_boxed_title("Course Catalog Service");
    info!("🚀 강의 카탈로그 서비스 시작중...");

    // 데이터 스토어 및 서비스 초기화
    let state = initialize_app_state().await;

    print_sub_task("MongoDB", "Connected");
    print_sub_task("Services", "Ready");
    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(state).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Actix-web 기반 HTTP 서버를 설정하고 실행합니다.
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Returns
///
/// * `Ok(())` - 서버가 정상적으로 종료됨
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(state: web::Data<AppState>) -> std::io::Result<()> {
    let bind_address = (ServerConfig::host(), ServerConfig::port());

    info!(
        "🌐 서버가 http://{}:{} 에서 실행중입니다",
        bind_address.0, bind_address.1
    );
    info!(
        "📍 Health check: http://{}:{}/health",
        bind_address.0, bind_address.1
    );
    info!(
        "📍 API 엔드포인트: http://{}:{}/api/v1",
        bind_address.0, bind_address.1
    );

    HttpServer::new(move || {
        App::new()
            // 서비스 컨테이너 주입
            .app_data(state.clone())
            // CORS 설정 (모든 origin 허용, 자격증명 포함)
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            // 라우트 설정
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(4) // 워커 스레드 수
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
/// 개발환경과 운영환경을 구분하여 설정을 관리합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// # Examples
///
/// ```bash
/// # 개발 환경
/// PROFILE=dev cargo run
///
/// # 운영 환경
/// PROFILE=prod cargo run
/// ```
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
/// 기본값은 info 레벨이며, actix_web은 debug 레벨로 설정됩니다.
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB 연결과 서비스 그래프를 초기화합니다
///
/// `MONGO_URI`가 없거나 저장소에 연결할 수 없으면 프로세스를 종료합니다.
/// 연결은 프로세스 전역에서 하나만 유지되며 모든 요청이 재사용합니다.
///
/// # Returns
///
/// * `web::Data<AppState>` - 핸들러에 주입될 서비스 컨테이너
async fn initialize_app_state() -> web::Data<AppState> {
    info!("📡 데이터베이스 연결 중...");

    let database = match Database::new().await {
        Ok(database) => Arc::new(database),
        Err(e) => {
            error!("❌ 데이터베이스 연결 실패: {}", e);
            std::process::exit(1);
        }
    };

    info!("✅ MongoDB 연결 성공");

    match AppState::new(database).await {
        Ok(state) => web::Data::new(state),
        Err(e) => {
            error!("❌ 서비스 초기화 실패: {}", e);
            std::process::exit(1);
        }
    }
}
