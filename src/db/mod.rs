//! JSON File Store
//!
//! 엔티티 타입별로 JSON 파일 하나를 사용하는 영속성 계층입니다.
//! 각 파일은 식별자(문자열화된 정수)를 키로 하는 레코드 맵이며,
//! 연산마다 통째로 읽고 통째로 다시 씁니다.
//!
//! ```text
//! $DATA_DIR/
//! ├── users.json         {"1": {...}, "2": {...}}
//! ├── collections.json
//! └── items.json
//! ```
//!
//! # 동시성
//!
//! 테이블마다 비동기 뮤텍스 하나를 둡니다.
//! 읽기-수정-쓰기는 [`JsonTable::begin`]으로 얻은 [`TableTx`] 안에서 이루어지며,
//! 트랜잭션은 로드 시점부터 [`TableTx::commit`]까지 잠금을 유지합니다.
//! 커밋되지 않은 채 drop 된 트랜잭션의 변경 사항은 버려집니다.
//!
//! 두 테이블을 함께 수정하는 연산은 항상 `collections` → `items` 순서로 잠급니다.
//!
//! # 파일 쓰기
//!
//! 같은 디렉터리의 임시 파일에 먼저 쓰고 rename 하므로
//! 쓰기 도중 프로세스가 죽어도 기존 파일이 반쯤 덮어써지지 않습니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! let store = JsonStore::open(StoreConfig::data_dir()).await?;
//!
//! let mut tx = store.users.begin().await?;
//! let id = tx.next_id();
//! tx.insert(User::new(id, name, email, password_hash));
//! tx.commit().await?;
//! ```

use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::{Mutex, MutexGuard};
use uuid::Uuid;

use crate::core::errors::{AppResult, ErrorContext};
use crate::domain::entities::{Collection, Item, User};

/// 파일 저장소에 저장되는 레코드
///
/// `TABLE`은 파일 이름(확장자 제외)이고, `id()`는 맵의 키가 됩니다.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const TABLE: &'static str;

    fn id(&self) -> u64;
}

/// 레코드 타입 하나에 대응하는 JSON 파일
pub struct JsonTable<T: Record> {
    path: PathBuf,
    lock: Mutex<()>,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> JsonTable<T> {
    fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(format!("{}.json", T::TABLE)),
            lock: Mutex::new(()),
            _record: PhantomData,
        }
    }

    /// 파일 경로
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 잠금을 잡고 전체 레코드를 읽은 뒤 곧바로 잠금을 놓습니다.
    pub async fn read(&self) -> AppResult<BTreeMap<u64, T>> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    /// 읽기-수정-쓰기 트랜잭션을 시작합니다.
    ///
    /// 반환된 트랜잭션이 살아있는 동안 같은 테이블의 다른 `read`/`begin` 호출은 대기합니다.
    pub async fn begin(&self) -> AppResult<TableTx<'_, T>> {
        let guard = self.lock.lock().await;
        let records = self.load().await?;

        Ok(TableTx {
            table: self,
            _guard: guard,
            records,
            dirty: false,
        })
    }

    /// 파일이 없거나 비어 있으면 빈 레코드 집합입니다.
    /// 파싱할 수 없는 파일은 `StorageError`로 보고하며 절대 빈 집합으로 대체하지 않습니다.
    async fn load(&self) -> AppResult<BTreeMap<u64, T>> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(e).storage_context(&format!("{} 읽기 실패", self.path.display()));
            }
        };

        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(BTreeMap::new());
        }

        serde_json::from_slice(&raw)
            .storage_context(&format!("{} 파싱 실패", self.path.display()))
    }

    async fn save(&self, records: &BTreeMap<u64, T>) -> AppResult<()> {
        let content = serde_json::to_vec_pretty(records)
            .storage_context(&format!("{} 직렬화 실패", T::TABLE))?;

        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let tmp_path = dir.join(format!(".{}-{}.tmp", T::TABLE, Uuid::new_v4()));

        tokio::fs::write(&tmp_path, content)
            .await
            .storage_context(&format!("{} 임시 파일 쓰기 실패", tmp_path.display()))?;

        if let Err(e) = tokio::fs::rename(&tmp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(e).storage_context(&format!("{} 교체 실패", self.path.display()));
        }

        debug!("💾 {} 저장 완료 ({}건)", T::TABLE, records.len());
        Ok(())
    }
}

/// 한 테이블에 대한 잠금이 유지되는 읽기-수정-쓰기 단위
pub struct TableTx<'a, T: Record> {
    table: &'a JsonTable<T>,
    _guard: MutexGuard<'a, ()>,
    records: BTreeMap<u64, T>,
    dirty: bool,
}

impl<'a, T: Record> TableTx<'a, T> {
    /// 다음 식별자: 현재 최대 ID + 1 (비어 있으면 1)
    pub fn next_id(&self) -> u64 {
        self.records.keys().next_back().map_or(1, |max| max + 1)
    }

    pub fn get(&self, id: u64) -> Option<&T> {
        self.records.get(&id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut T> {
        self.dirty = true;
        self.records.get_mut(&id)
    }

    /// ID 오름차순으로 전체 레코드를 순회합니다.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.records.values()
    }

    /// 레코드를 추가하거나 같은 ID의 레코드를 교체합니다.
    pub fn insert(&mut self, record: T) {
        self.dirty = true;
        self.records.insert(record.id(), record);
    }

    pub fn remove(&mut self, id: u64) -> Option<T> {
        let removed = self.records.remove(&id);
        if removed.is_some() {
            self.dirty = true;
        }
        removed
    }

    /// 조건을 만족하지 않는 레코드를 제거하고 제거된 개수를 반환합니다.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.records.len();
        self.records.retain(|_, record| keep(record));
        let removed = before - self.records.len();
        if removed > 0 {
            self.dirty = true;
        }
        removed
    }

    /// 변경 사항을 파일에 기록하고 잠금을 해제합니다.
    /// 변경이 없으면 파일을 건드리지 않습니다.
    pub async fn commit(self) -> AppResult<()> {
        if self.dirty {
            self.table.save(&self.records).await?;
        }
        Ok(())
    }
}

/// 전체 엔티티 테이블 묶음
///
/// 애플리케이션 시작 시 한 번 열고 `Arc`로 리포지토리들에 공유합니다.
pub struct JsonStore {
    pub users: JsonTable<User>,
    pub collections: JsonTable<Collection>,
    pub items: JsonTable<Item>,
    data_dir: PathBuf,
}

impl JsonStore {
    /// 데이터 디렉터리를 (필요하면 생성하고) 저장소를 엽니다.
    pub async fn open(data_dir: impl Into<PathBuf>) -> AppResult<Self> {
        let data_dir = data_dir.into();

        tokio::fs::create_dir_all(&data_dir)
            .await
            .storage_context(&format!("데이터 디렉터리 생성 실패: {}", data_dir.display()))?;

        info!("📂 JSON 저장소 열림: {}", data_dir.display());

        Ok(Self {
            users: JsonTable::new(&data_dir),
            collections: JsonTable::new(&data_dir),
            items: JsonTable::new(&data_dir),
            data_dir,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
