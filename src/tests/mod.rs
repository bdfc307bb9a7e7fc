//! Test suite for tree building
//!
//! Scenario tests exercise `build` end to end; property tests check the
//! invariants of every tree `build` accepts.
