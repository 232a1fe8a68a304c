//! Integration test modules.

mod dashboard_flow_test;
mod export_flow_test;
