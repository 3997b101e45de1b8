//! Core UI functionality for FinVani.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Keyboard and resize input polling
//! - [`task_manager`] - Background backend calls reporting back as actions
//!
//! Components turn key presses into [`Action`]s. Background tasks send their
//! results over the [`TaskManager`] channel as actions too, and the app
//! component drains that channel on every tick, so all state changes happen
//! on the UI loop.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, DialogType, Tab};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
