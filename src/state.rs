//! # 애플리케이션 상태
//!
//! 서비스 인스턴스 묶음입니다. `main`에서 한 번 만들어 `web::Data<AppState>`로 등록하면
//! 모든 워커가 같은 저장소와 같은 테이블 잠금을 공유합니다.
//!
//! ```rust,ignore
//! let store = Arc::new(JsonStore::open(StoreConfig::data_dir()).await?);
//! let state = web::Data::new(AppState::from_env(store));
//!
//! HttpServer::new(move || App::new().app_data(state.clone()).configure(configure_all_routes))
//! ```

use std::sync::Arc;

use chrono::Duration;

use crate::{
    config::{PasswordConfig, PasswordResetConfig},
    db::JsonStore,
    repositories::{collections::CollectionRepository, items::ItemRepository, users::UserRepository},
    services::{
        auth::{AuthService, PasswordRecoveryService},
        collections::CollectionService,
        items::ItemService,
        notifications::{LogResetNotifier, ResetNotifier},
        users::UserService,
    },
};

/// 비밀번호 관련 설정값
#[derive(Debug, Clone)]
pub struct SecuritySettings {
    pub bcrypt_cost: u32,
    pub reset_token_ttl: Duration,
    pub reset_url: String,
}

impl SecuritySettings {
    pub fn from_env() -> Self {
        Self {
            bcrypt_cost: PasswordConfig::bcrypt_cost(),
            reset_token_ttl: PasswordResetConfig::token_ttl(),
            reset_url: PasswordResetConfig::reset_url(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub password_recovery_service: Arc<PasswordRecoveryService>,
    pub user_service: Arc<UserService>,
    pub collection_service: Arc<CollectionService>,
    pub item_service: Arc<ItemService>,
}

impl AppState {
    /// 환경변수 설정과 로그 발송기로 상태를 구성합니다.
    pub fn from_env(store: Arc<JsonStore>) -> Self {
        Self::new(store, SecuritySettings::from_env(), Arc::new(LogResetNotifier))
    }

    pub fn new(store: Arc<JsonStore>, settings: SecuritySettings, notifier: Arc<dyn ResetNotifier>) -> Self {
        let users = Arc::new(UserRepository::new(store.clone()));
        let collections = Arc::new(CollectionRepository::new(store.clone()));
        let items = Arc::new(ItemRepository::new(store));

        Self {
            auth_service: Arc::new(AuthService::new(users.clone(), settings.bcrypt_cost)),
            password_recovery_service: Arc::new(PasswordRecoveryService::new(
                users.clone(),
                notifier,
                settings.bcrypt_cost,
                settings.reset_token_ttl,
                settings.reset_url,
            )),
            user_service: Arc::new(UserService::new(users, collections.clone())),
            collection_service: Arc::new(CollectionService::new(collections)),
            item_service: Arc::new(ItemService::new(items)),
        }
    }
}
