//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 뿐 아니라 대시보드 백엔드에서도 재사용한다.

pub mod app;
pub mod config;
pub mod demand;
pub mod equipment;
pub mod finance;
pub mod fleet;
pub mod i18n;
pub mod market;
pub mod recommendation;
pub mod reference_db;
pub mod simulation;
pub mod ui_cli;
pub mod warehouse;
