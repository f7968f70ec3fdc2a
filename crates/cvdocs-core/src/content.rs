//! The documentation's example snippets, addressable by slug.

mod authentication;
mod overview;
mod practices;
mod quick_start;
mod reference;
mod sdks;
mod webhooks;

use crate::error::{DocsError, Result};
use crate::snippet::SnippetSet;

/// A step card on the quick start page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
}

pub const QUICK_START_STEPS: [Step; 3] = [
    Step {
        title: "Get API Credentials",
        description: "Register your application and obtain your client ID and secret",
        duration: "5 min",
    },
    Step {
        title: "Install SDK",
        description: "Choose your preferred programming language and install our SDK",
        duration: "2 min",
    },
    Step {
        title: "Make Your First Request",
        description: "Authenticate and fetch vehicle data with a simple API call",
        duration: "3 min",
    },
];

/// The documentation page a snippet belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Overview,
    QuickStart,
    Authentication,
    Webhooks,
    Sdks,
    Reference,
    Practices,
}

impl Section {
    /// Sections in navigation order.
    pub const ALL: [Section; 7] = [
        Section::Overview,
        Section::QuickStart,
        Section::Authentication,
        Section::Webhooks,
        Section::Sdks,
        Section::Reference,
        Section::Practices,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::QuickStart => "Quick Start",
            Section::Authentication => "Authentication",
            Section::Webhooks => "Webhooks",
            Section::Sdks => "SDKs",
            Section::Reference => "API Reference",
            Section::Practices => "Best Practices",
        }
    }

    fn snippets(self) -> Vec<NamedSnippet> {
        match self {
            Section::Overview => overview::snippets(),
            Section::QuickStart => quick_start::snippets(),
            Section::Authentication => authentication::snippets(),
            Section::Webhooks => webhooks::snippets(),
            Section::Sdks => sdks::snippets(),
            Section::Reference => reference::snippets(),
            Section::Practices => practices::snippets(),
        }
    }
}

/// A snippet set addressable from the command line.
#[derive(Debug, Clone)]
pub struct NamedSnippet {
    pub slug: &'static str,
    pub section: Section,
    pub set: SnippetSet,
}

impl NamedSnippet {
    fn new(slug: &'static str, section: Section, set: SnippetSet) -> Self {
        Self { slug, section, set }
    }
}

/// Every snippet, grouped by section in navigation order.
pub fn all_snippets() -> Vec<NamedSnippet> {
    Section::ALL.into_iter().flat_map(Section::snippets).collect()
}

pub fn snippets_in(section: Section) -> Vec<NamedSnippet> {
    section.snippets()
}

pub fn quick_start_snippets() -> Vec<NamedSnippet> {
    snippets_in(Section::QuickStart)
}

pub fn find_snippet(slug: &str) -> Result<SnippetSet> {
    all_snippets()
        .into_iter()
        .find(|named| named.slug == slug)
        .map(|named| named.set)
        .ok_or_else(|| DocsError::SnippetNotFound(slug.to_string()))
}
