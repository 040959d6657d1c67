//! 바닥난방 코일 길이 계산 로직을 라이브러리로 분리하여 CLI 와 GUI 가 함께 쓴다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod i18n;
pub mod report;
pub mod ufh;
pub mod ui_cli;
pub mod units;
