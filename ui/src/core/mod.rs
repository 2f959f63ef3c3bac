//! Platform-agnostic page logic: section anchors, scroll tracking, reveal
//! latches and the view state they feed. Browser glue lives in `platform`.

pub mod config;
pub mod platform;
pub mod reveal;
pub mod scroll;
pub mod sections;
pub mod view_state;
