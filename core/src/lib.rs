//! UrBoard domain logic — settings persistence, layout reconciliation,
//! and widget data.
//!
//! The settings store (`store`) owns the persisted configuration record
//! and reconciles it against the hardcoded defaults (`layout`) on every
//! load. The board runtime (`board`) dispatches typed commands
//! (`command`) from front ends against the stores. Persistence goes
//! through the injected `storage` facility; derived accent values come
//! from `theme` and are never persisted.

pub mod board;
pub mod command;
pub mod help;
pub mod layout;
pub mod locale;
pub mod response;
pub mod storage;
pub mod store;
pub mod theme;
pub mod types;
pub mod widgets;
