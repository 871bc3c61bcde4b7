//! Manifest tests
