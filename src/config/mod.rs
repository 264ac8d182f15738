//! # Configuration Module
//!
//! 환경 변수 기반 설정값들을 중앙에서 관리합니다.
//! 각 설정 구조체는 필드가 없는 타입이며, 호출 시점에 환경 변수를 읽습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, 데이터 디렉터리, bcrypt cost
//! - [`recovery_config`] - 비밀번호 재설정 토큰 유효 시간과 링크
//!
//! ## 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="development"   # development, test, staging, production
//! export HOST="127.0.0.1"
//! export PORT="8000"
//! export DATA_DIR="./data"
//! export BCRYPT_COST="12"            # 4-15 범위
//! export PASSWORD_RESET_TTL_MINUTES="30"
//! export PASSWORD_RESET_URL="http://localhost:5173/reset-password"
//! ```
//!
//! `PROFILE=dev|prod`에 따라 `.env.dev` / `.env.prod` 파일이 먼저 로드됩니다 (`main.rs`).

pub mod data_config;
pub mod recovery_config;

pub use data_config::*;
pub use recovery_config::*;
