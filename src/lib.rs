//! # dotprops
//!
//! A lossless, format-preserving editor for Java-style `.properties` text:
//! - Comments, blank lines, delimiters and spacing survive a round trip
//! - Keyed reads and writes with first-match semantics
//! - `${key}` references expanded against the live document on read
//! - Structural escapes and `\uXXXX` escapes that invert exactly
//!
//! ## Architecture Overview
//!
//! ```text
//!   raw text
//!      │  split on unescaped '\n'
//!      ▼
//! ┌─────────────┐     ┌─────────────┐
//! │  Tokenizer  │────▶│ Escape Codec│
//! └──────┬──────┘     └──────▲──────┘
//!        │ Entry             │
//!        ▼                   │
//! ┌─────────────┐     ┌──────┴──────┐
//! │ Entry Store │────▶│ Serializer  │────▶ text
//! │  (Vec, in   │     └─────────────┘
//! │   order)    │     ┌─────────────┐
//! │             │────▶│ View (map)  │────▶ IndexMap / JSON
//! └──────▲──────┘     └─────────────┘
//!        │ get / set / delete / append / filters
//! ┌──────┴──────┐
//! │ Properties  │  (expansion re-reads the store)
//! └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use dotprops::Properties;
//!
//! let mut props = Properties::parse("# greeting\nname   = world\nmsg = hello ${name}");
//! assert_eq!(props.get("msg").unwrap().as_deref(), Some("hello world"));
//!
//! props.set("name", "there");
//! assert_eq!(props.to_text(), "# greeting\nname   = there\nmsg = hello ${name}");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod codec;
pub mod tokenizer;
pub mod store;
pub mod serializer;
pub mod view;
pub mod properties;

mod expand;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{PropsError, Result};
pub use config::Config;
pub use store::{Entry, EntryKind};
pub use properties::Properties;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of dotprops
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
