//! Integration tests for the flow-control window ledger

mod window_update;
