//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that holds all application data
//! - Status filtering for the visible todo list
//! - Failure notices with their auto-dismiss deadline

pub mod filter;
mod notice;
mod state_impl;

pub use filter::StatusFilter;
pub use notice::Notice;
pub use state_impl::State;
