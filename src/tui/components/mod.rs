//! # TUI Components
//!
//! Every piece of the shortener screen.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as fields:
//! - `TitleBar`: top status line with backend name and spinner
//! - `ResultPanel`: error text, or the short link with its action hints
//! - `QrPanel`: the QR code for the current link
//! - `AlertBanner`: transient notice after copy/save
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `InputBox`: the long-URL field; keeps its own buffer and cursor
//!
//! ### Props-Based Data Flow
//!
//! Components never read `App` directly. The result panels only ever see a
//! `ResultView` from `core::presenter`, so the visibility rules live in one
//! place.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status line)
//! ├── result_panel.rs  (Error / short link / action hints)
//! ├── qr_panel.rs      (QR code)
//! ├── alert.rs         (Notice banner)
//! └── input_box/       (URL field with wrapping and cursor)
//! ```

mod alert;
mod qr_panel;
mod result_panel;
mod title_bar;

pub mod input_box;

pub use alert::AlertBanner;
pub use input_box::{InputBox, InputEvent};
pub use qr_panel::QrPanel;
pub use result_panel::ResultPanel;
pub use title_bar::TitleBar;
