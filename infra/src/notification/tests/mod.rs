//! Tests for delivery backends and router construction

mod router_tests;
