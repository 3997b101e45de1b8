//! FinVani - a terminal dashboard for MSME financial-news sentiment
//!
//! The dashboard talks to an external inference backend over HTTP JSON.
//! It fetches multilingual headlines, classifies the leading ones, tallies
//! the labels into market indicators and renders everything with Ratatui.
//!
//! # Modules
//!
//! * [`api`] - Backend client and wire models
//! * [`analytics`] - Headline enrichment and sentiment aggregation
//! * [`config`] - Application configuration management
//! * [`state`] - View state holders, independent of the terminal
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Sentiment enrichment and aggregation
pub mod analytics;

/// Backend API client and data models
pub mod api;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Languages offered by the headline feed
pub mod languages;

/// Logging setup and the in-memory log buffer
pub mod logger;

/// View state shared between the UI and tests
pub mod state;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling and other helpers
pub mod utils;
