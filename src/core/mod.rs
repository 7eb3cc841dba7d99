//! # Core Application Logic
//!
//! The shortener workflow, independent of any UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • App (state)          │
//!                    │  • Action (commands)    │
//!                    │  • update() (reducer)   │
//!                    │  • project() (view)     │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  backend   │      │ capability │
//!     │ (ratatui)  │      │ (reqwest)  │      │ (clipboard,│
//!     │            │      │            │      │  browser)  │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `App` and `ShortenResult`
//! - [`action`]: `Action`, `Effect` and `update()`
//! - [`validate`]: URL checks done before any request
//! - [`dispatch`]: one bounded backend round trip
//! - [`presenter`]: result variant → what is visible
//! - [`qr`]: QR code artifacts
//! - [`config`]: settings resolution

pub mod action;
pub mod config;
pub mod dispatch;
pub mod presenter;
pub mod qr;
pub mod state;
pub mod validate;
