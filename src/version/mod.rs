//! Version resolution for chromedriver downloads
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Fetcher   │────▶│  Manifest   │────▶│  Resolver   │
//! │   (fetch)   │     │   (parse)   │     │  (select)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                           │       │
//!                                           ▼       ▼
//!                                  ┌───────────┐ ┌───────────┐
//!                                  │   Local   │ │ Normalize │
//!                                  │ (cached)  │ │ (compare) │
//!                                  └───────────┘ └───────────┘
//! ```
//!
//! # Modules
//!
//! - [`fetcher`]: Fetcher trait for retrieving remote documents
//! - [`fetchers`]: Concrete fetcher implementations (HTTP)
//! - [`manifest`]: Chrome for Testing manifest types and parsing
//! - [`listing`]: Legacy bucket listing parsing and filtering
//! - [`local`]: Enumeration of already downloaded drivers
//! - [`normalize`]: Version string normalization
//! - [`resolver`]: Version to download URL resolution
//! - [`error`]: Error types for fetch and resolution
//! - [`types`]: Common types like `BinaryUrl`

pub mod error;
pub mod fetcher;
pub mod fetchers;
pub mod listing;
pub mod local;
pub mod manifest;
pub mod normalize;
pub mod resolver;
pub mod types;
