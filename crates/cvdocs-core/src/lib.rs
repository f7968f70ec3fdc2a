//! cvdocs-core - the interactive pieces of the Connected Vehicles docs.
//!
//! Two components carry all the runtime behavior: [`CodeBlock`], a tabbed
//! snippet with copy-to-clipboard feedback, and [`Explorer`], the mock
//! request panel. Both are built from a [`DocsContext`] and schedule their
//! delayed updates through a [`TimerSet`] that dies with them.

pub mod catalog;
pub mod clipboard;
pub mod code_block;
pub mod config;
pub mod content;
pub mod context;
pub mod error;
pub mod explorer;
pub mod snippet;
pub mod status;
pub mod timer;

// Re-export common items for convenience
pub use catalog::{Endpoint, EndpointCatalog, HttpMethod, QuickExample, ResponseCatalog, QUICK_EXAMPLES};
pub use clipboard::{ClipboardWriter, SystemClipboard};
pub use code_block::CodeBlock;
pub use config::{get_config_dir, DocsConfig};
pub use content::{all_snippets, find_snippet, quick_start_snippets, snippets_in, NamedSnippet, Section};
pub use context::DocsContext;
pub use error::{DocsError, Result};
pub use explorer::{Explorer, RequestDraft, SubmitOutcome};
pub use snippet::{Snippet, SnippetSet, Variant};
pub use timer::TimerSet;
