//! Tests for the request handlers and error mapping.
