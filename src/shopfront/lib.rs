//! # Shopfront Architecture
//!
//! Shopfront is a **UI-agnostic storefront library**: catalog browsing driven
//! by URL query strings, plus a cart. The `shopfront` binary is one client of
//! it; a web handler would be another.
//!
//! ## URL as the Single Source of Truth
//!
//! What the shopper sees is a pure function of the query string. Every
//! render parses it, every interaction computes the next state and writes it
//! back. No layer keeps its own copy of the filter state.
//!
//! ```text
//!  "gender=men&color=red,blue&sort=price_asc"
//!        │ parse_filters            ▲ stringify_filters
//!        ▼                          │
//!   FilterState ──toggle/add/remove/clear──▶ FilterState
//!        │
//!        ▼ query::apply
//!   filtered + sorted products ──paginate──▶ one page
//! ```
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (key names → FilterKey, sort names)    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - browse, refine, cart, import, seed, config               │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                │                              │
//!                ▼                              ▼
//! ┌──────────────────────────────┐ ┌────────────────────────────┐
//! │  Core (pure, infallible)     │ │  Storage Layer (store/)    │
//! │  filters/, query, catalog    │ │  DataStore trait           │
//! │                              │ │  FileStore, InMemoryStore  │
//! └──────────────────────────────┘ └────────────────────────────┘
//! ```
//!
//! The core never fails: malformed query input is dropped, unknown sort
//! names fall back to featured, and impossible price ranges just match
//! nothing. Errors ([`error::ShopError`]) only come from storage and from
//! the API rejecting names it does not know.
//!
//! ## Module Overview
//!
//! - [`filters`]: FilterState, the query-string codec and the state transitions
//! - [`query`]: filtering, sorting, active-filter count, pagination
//! - [`catalog`]: option tables and active-filter badges
//! - [`model`]: `Product`
//! - [`cart`]: `Cart` and `CartItem`
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: business logic for each command
//! - [`store`]: storage abstraction and implementations
//! - [`config`]: configuration management
//! - [`error`]: error types
//! - `cli`: argument parsing, printing and logging setup for the binary (not part of the lib API)

pub mod api;
pub mod cart;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod filters;
pub mod model;
pub mod query;
pub mod store;
