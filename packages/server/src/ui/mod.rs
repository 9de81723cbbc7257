//! UI 層
//!
//! HTTP / WebSocket の境界。イベントの直列化・配送と、UseCase 層への
//! ディスパッチを担当します。

pub mod handler;
pub mod runner;
mod signal;
pub mod state;
