use indexmap::IndexMap;

/// Example source text, either one blob or one blob per language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Snippet {
    Single { code: String, language: String },
    /// Keyed by language tag; insertion order is tab order.
    MultiVariant(IndexMap<String, String>),
}

/// A snippet together with the header shown above it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetSet {
    pub title: Option<String>,
    pub snippet: Snippet,
}

/// One selectable variant, borrowed from its set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Variant<'a> {
    pub language: &'a str,
    pub code: &'a str,
}

impl SnippetSet {
    pub fn single(code: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            title: None,
            snippet: Snippet::Single {
                code: code.into(),
                language: language.into(),
            },
        }
    }

    /// Build a multi-language set. A repeated tag keeps its first position
    /// and takes the later text.
    pub fn multi<I, K, V>(variants: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            title: None,
            snippet: Snippet::MultiVariant(
                variants
                    .into_iter()
                    .map(|(language, code)| (language.into(), code.into()))
                    .collect(),
            ),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn len(&self) -> usize {
        match &self.snippet {
            Snippet::Single { .. } => 1,
            Snippet::MultiVariant(variants) => variants.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the set is laid out with a tab strip.
    pub fn has_tabs(&self) -> bool {
        matches!(&self.snippet, Snippet::MultiVariant(variants) if !variants.is_empty())
    }

    /// The tab selected before any user interaction: the first variant.
    pub fn default_tab(&self) -> Option<usize> {
        (!self.is_empty()).then_some(0)
    }

    pub fn variant(&self, index: usize) -> Option<Variant<'_>> {
        match &self.snippet {
            Snippet::Single { code, language } => (index == 0).then_some(Variant {
                language: language.as_str(),
                code: code.as_str(),
            }),
            Snippet::MultiVariant(variants) => {
                variants
                    .get_index(index)
                    .map(|(language, code)| Variant {
                        language: language.as_str(),
                        code: code.as_str(),
                    })
            }
        }
    }

    pub fn variants(&self) -> impl Iterator<Item = Variant<'_>> + '_ {
        (0..self.len()).filter_map(move |index| self.variant(index))
    }

    pub fn position(&self, language: &str) -> Option<usize> {
        self.variants()
            .position(|variant| variant.language == language)
    }

    /// Tab captions in display order.
    pub fn tab_labels(&self) -> Vec<String> {
        self.variants()
            .map(|variant| tab_label(variant.language))
            .collect()
    }
}

/// Capitalize the first character of a language tag: `python` -> `Python`.
pub fn tab_label(language: &str) -> String {
    let mut chars = language.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
