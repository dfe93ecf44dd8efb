//! 백엔드 템플릿 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다. MongoDB 연결을 설정하고,
//! 모든 서비스 의존성을 명시적으로 생성하여 `web::Data` 로 주입한 뒤
//! JWT 인증 기반의 REST API 를 제공합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use backend_template::config::ServerConfig;
use backend_template::db::Database;
use backend_template::repositories::users::UserRepository;
use backend_template::routes::configure_all_routes;
use backend_template::services::{AuthService, PasswordHasher, TokenService, UserService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 로깅 및 환경 설정 초기화
    init_logging();
    load_env_file();

    info!("🚀 백엔드 템플릿 서비스 시작중...");

    // 데이터 스토어 초기화
    info!("📡 데이터베이스 연결 중...");
    let database = Arc::new(Database::new().await.expect("데이터베이스 연결 실패"));

    // 의존성 명시적 조립: 리포지토리 → 서비스
    let user_repo = Arc::new(UserRepository::new(&database));
    user_repo.create_indexes().await.expect("인덱스 생성 실패");
    info!("✅ 데이터베이스 인덱스 준비 완료");

    let hasher = PasswordHasher::from_env();
    let tokens = Arc::new(TokenService::from_env());
    let auth_service = web::Data::new(AuthService::new(
        user_repo.clone(),
        hasher.clone(),
        tokens.clone(),
    ));
    let user_service = web::Data::new(UserService::new(user_repo, hasher));

    // HTTP 서버 시작
    start_http_server(auth_service, user_service, tokens).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 요청 로깅, 경로 정규화 미들웨어를 포함하며, 조립된 서비스들을
/// 애플리케이션 데이터로 등록합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    auth_service: web::Data<AuthService>,
    user_service: web::Data<UserService>,
    tokens: Arc<TokenService>,
) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        let cors = configure_cors();
        let tokens = tokens.clone();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(auth_service.clone())
            .app_data(user_service.clone())
            .configure(move |cfg| configure_all_routes(cfg, tokens))
    })
    .bind(&bind_address)?
    .workers(4)
    .run()
    .await
}

/// 프로파일에 맞는 .env 파일을 로드합니다
///
/// `PROFILE` 환경변수가 `dev`(기본값) 또는 `prod`면 해당 접미사의
/// 파일(`.env.dev`, `.env.prod`)을, 그 외에는 기본 `.env` 파일을 읽습니다.
/// 파일이 없어도 서비스는 기본값으로 기동합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "dev" | "prod" => dotenv::from_filename(format!(".env.{}", profile)),
        _ => dotenv(),
    };

    match loaded {
        Ok(path) => info!("환경 파일 로드 됨 (profile={}): {}", profile, path.display()),
        Err(e) => error!("환경 파일 로드 실패 (profile={}): {}", profile, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG` 가 설정되어 있으면 그대로 따르고, 없으면 info 레벨을
/// 기본으로 사용합니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
}

/// CORS 정책을 구성합니다
///
/// `ALLOWED_ORIGIN` 환경변수로 허용 오리진을 지정하며,
/// 기본값은 로컬 개발용 오리진입니다.
fn configure_cors() -> Cors {
    let allowed_origin =
        std::env::var("ALLOWED_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".to_string());

    Cors::default()
        .allowed_origin(&allowed_origin)
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
