//! Edge case tests for cextc-par
