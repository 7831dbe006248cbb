//! Integration tests for the UI layer
