//! Common test utilities for REST API testing.
//!
//! - [`harness`] - Test server around the real router
//! - [`mock_api`] - Recording in-memory engine
//! - [`assertions`] - Envelope and status assertions

#![allow(dead_code)]

pub mod assertions;
pub mod harness;
pub mod mock_api;
