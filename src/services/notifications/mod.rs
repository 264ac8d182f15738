//! 사용자 알림 (out-of-band) 모듈

pub mod reset_notifier;

pub use reset_notifier::{LogResetNotifier, ResetNotifier};
