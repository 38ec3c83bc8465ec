//! # Falcata
//!
//! A multi-language suffix-stripping stemmer library for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Nine Snowball-family algorithms (Danish, Dutch, English, Finnish,
//!   French, Italian, Norwegian, Portuguese, Swedish)
//! - Shared R1/R2/RV region model and suffix primitives
//! - Case-pair pattern matching, no input normalization required
//! - Stateless stemmers, safe to share across threads
//!
//! ## Example
//!
//! ```
//! use falcata::language::{Language, Stemmer};
//!
//! let stemmer = Language::English.stemmer();
//! assert_eq!(stemmer.stem("documentation"), "document");
//! ```

pub mod char_class;
pub mod error;
pub mod hash;
pub mod language;
pub mod region;
pub mod word;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
