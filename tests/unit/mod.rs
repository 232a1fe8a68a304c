//! Unit test modules.

mod docx_export_test;
mod entry_wire_test;
mod filter_test;
mod metrics_test;
