//! Cross-module tests for ISO 8601 parsing and serialization.
