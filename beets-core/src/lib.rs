//! beets-core - API client and view controllers for the beets web front-end
//!
//! Everything here is UI-framework agnostic: the controllers hold view state,
//! hand out request descriptions, apply responses, and produce plain render
//! descriptions that the Dioxus views in `beets-ui` draw.

pub mod browser;
pub mod client;
pub mod config;
pub mod connection;
pub mod detail;
pub mod error;
pub mod models;
pub mod notice;
pub mod runner;
pub mod settings;

pub use client::BeetsClient;
pub use config::{ClientConfig, SortKey};
pub use error::ApiError;
pub use notice::{Notice, NoticeLevel};
