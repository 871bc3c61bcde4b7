//! Scanner tests
