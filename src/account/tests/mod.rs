//! Unit tests for the account bounded context.

mod domain_tests;
