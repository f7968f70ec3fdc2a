//! Terminal front end for the Connected Vehicles docs.

pub mod code_block;
pub mod common;
pub mod dashboard;
pub mod explorer;
pub mod guides;
pub mod quick_start;
pub mod status;

pub use code_block::CodeBlockView;
pub use dashboard::{display_docs_dashboard, App, Page};
pub use explorer::{ExplorerPage, Field, OutputTab};
pub use guides::GuidesPage;
pub use quick_start::QuickStartPage;
pub use status::StatusPage;
