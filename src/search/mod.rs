//! Catalog filtering.
//!
//! Matching is a case-insensitive substring test against the emoticon text
//! and its category name. There is no ranking: categories and emoticons keep
//! catalog order, and categories left without matches are dropped.
//!
//! The filter text is used as typed. Whitespace is part of the query, so a
//! lone space still filters (it matches emoticons containing a space).

use std::collections::BTreeMap;

use crate::catalog::Category;

/// A category that survived filtering, with its matching emoticons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredCategory {
    /// Category display name.
    pub name: &'static str,
    /// Matching emoticons in catalog order.
    pub emoticons: Vec<&'static str>,
}

/// Whether the history panel should be shown for this filter text.
pub fn show_history(text: &str) -> bool {
    text.is_empty()
}

/// Filter the catalog with the default options.
pub fn filter(catalog: &[Category], text: &str) -> Vec<FilteredCategory> {
    CatalogFilter::new(text).apply(catalog)
}

/// Catalog filter with optional keyword and emoji-name matching.
///
/// Category keywords are looked up by category name ignoring case.
/// Emoticon keywords are looked up by the exact emoticon text.
///
/// # Example
/// ```ignore
/// let shown = CatalogFilter::new("dog")
///     .with_emoji_names(true)
///     .apply(catalog::categories());
/// ```
pub struct CatalogFilter<'a> {
    /// Lowercased filter text.
    query: String,
    /// Extra search terms per category name.
    keywords: Option<&'a BTreeMap<String, Vec<String>>>,
    /// Extra search terms per emoticon.
    emoticon_keywords: Option<&'a BTreeMap<String, Vec<String>>>,
    /// Also match Unicode names and shortcodes.
    emoji_names: bool,
}

impl<'a> CatalogFilter<'a> {
    /// Create a filter for the given text.
    pub fn new(text: &str) -> Self {
        Self {
            query: text.to_lowercase(),
            keywords: None,
            emoticon_keywords: None,
            emoji_names: false,
        }
    }

    /// Treat a match on any of a category's keywords as a category-name match.
    pub fn with_keywords(mut self, keywords: &'a BTreeMap<String, Vec<String>>) -> Self {
        self.keywords = Some(keywords);
        self
    }

    /// Let an emoticon match through any of its own keywords.
    pub fn with_emoticon_keywords(
        mut self,
        emoticon_keywords: &'a BTreeMap<String, Vec<String>>,
    ) -> Self {
        self.emoticon_keywords = Some(emoticon_keywords);
        self
    }

    /// Match emoji names and shortcodes in addition to the glyph itself.
    pub fn with_emoji_names(mut self, enabled: bool) -> Self {
        self.emoji_names = enabled;
        self
    }

    /// Whether this filter lets everything through.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    /// Apply the filter to a catalog.
    pub fn apply(&self, catalog: &[Category]) -> Vec<FilteredCategory> {
        catalog
            .iter()
            .filter_map(|category| {
                let emoticons: Vec<&'static str> = if self.is_empty()
                    || self.matches_category(category.name)
                {
                    category.emoticons.to_vec()
                } else {
                    category
                        .emoticons
                        .iter()
                        .copied()
                        .filter(|e| self.matches_emoticon(e))
                        .collect()
                };

                (!emoticons.is_empty()).then_some(FilteredCategory {
                    name: category.name,
                    emoticons,
                })
            })
            .collect()
    }

    fn matches_category(&self, name: &str) -> bool {
        if name.to_lowercase().contains(&self.query) {
            return true;
        }

        let Some(keywords) = self.keywords else {
            return false;
        };
        let name = name.to_lowercase();
        keywords
            .iter()
            .filter(|(category, _)| category.to_lowercase() == name)
            .flat_map(|(_, terms)| terms)
            .any(|term| self.matches_term(term))
    }

    fn matches_emoticon(&self, emoticon: &str) -> bool {
        if emoticon.to_lowercase().contains(&self.query) {
            return true;
        }

        if self
            .emoticon_keywords
            .and_then(|keywords| keywords.get(emoticon))
            .is_some_and(|terms| terms.iter().any(|term| self.matches_term(term)))
        {
            return true;
        }

        if !self.emoji_names {
            return false;
        }

        emojis::get(emoticon).is_some_and(|emoji| {
            self.matches_term(emoji.name()) || emoji.shortcodes().any(|code| self.matches_term(code))
        })
    }

    fn matches_term(&self, term: &str) -> bool {
        term.to_lowercase().contains(&self.query)
    }
}
