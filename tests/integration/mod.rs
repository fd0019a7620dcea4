//! Integration test modules.

mod config_test;
mod plan_workflow_test;
