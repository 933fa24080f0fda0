//! Edge case and property tests for cextc-lex
