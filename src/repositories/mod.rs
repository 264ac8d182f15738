//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 리포지토리는 `Arc<JsonStore>`를 공유하며, 도메인 가드(이메일 유일성,
//! 소유자/컬렉션 존재 여부, 집계 값 유지)를 쓰기 트랜잭션 안에서 검사합니다.
//!
//! | 리포지토리 | 테이블 | 가드 |
//! |------------|--------|------|
//! | [`users::UserRepository`] | users | 이메일 유일성, 재설정 토큰 1회 사용 |
//! | [`collections::CollectionRepository`] | collections (+items) | 소유자 존재, 삭제 시 아이템 연쇄 삭제 |
//! | [`items::ItemRepository`] | items (+collections) | 컬렉션 존재, 집계 값 재계산 |

pub mod users;
pub mod collections;
pub mod items;
