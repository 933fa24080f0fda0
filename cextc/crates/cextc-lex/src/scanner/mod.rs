//! Scanner module.
//!
//! This module organizes the scanner implementation into smaller, focused components:
//! - `core` - Scanner struct, scan loop and dispatch
//! - `identifier` - Identifier, keyword and builtin type scanning
//! - `number` - Integer and float literal scanning
//! - `string` - String and character literal scanning
//! - `operator` - Operator and punctuation table lookup
//! - `comment` - Line and block comment scanning

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::{tokenize, Scanner};
