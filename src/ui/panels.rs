//! What the picker shows for a given filter and history.

use crate::catalog::Category;
use crate::search::CatalogFilter;

/// Title of the history panel.
pub const HISTORY_TITLE: &str = "Recently Used";

/// Text shown when nothing matches the filter.
pub const EMPTY_STATE_TEXT: &str = "No emoticons found";

/// One titled grid of emoticons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub title: &'static str,
    pub emoticons: Vec<String>,
}

impl Panel {
    pub fn len(&self) -> usize {
        self.emoticons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emoticons.is_empty()
    }
}

/// Build the panels in display order: history first (only while the filter
/// is empty), then every category with matches.
pub fn build_panels(history: &[String], filter: &CatalogFilter, catalog: &[Category]) -> Vec<Panel> {
    let mut panels = Vec::new();

    if filter.is_empty() && !history.is_empty() {
        panels.push(Panel {
            title: HISTORY_TITLE,
            emoticons: history.to_vec(),
        });
    }

    panels.extend(filter.apply(catalog).into_iter().map(|category| Panel {
        title: category.name,
        emoticons: category.emoticons.into_iter().map(str::to_string).collect(),
    }));

    panels
}

/// Cell counts per panel, for grid navigation.
pub fn panel_lengths(panels: &[Panel]) -> Vec<usize> {
    panels.iter().map(Panel::len).collect()
}

/// Emoticon at a flat cell index.
pub fn emoticon_at(panels: &[Panel], index: usize) -> Option<&str> {
    panels
        .iter()
        .flat_map(|panel| panel.emoticons.iter())
        .nth(index)
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::categories;
    use crate::test_utils::history_list;

    fn titles(panels: &[Panel]) -> Vec<&'static str> {
        panels.iter().map(|p| p.title).collect()
    }

    #[test]
    fn test_history_panel_first_when_unfiltered() {
        let history = history_list(&["<3", "😀"]);
        let panels = build_panels(&history, &CatalogFilter::new(""), categories());

        assert_eq!(panels[0].title, HISTORY_TITLE);
        assert_eq!(panels[0].emoticons, history);
        assert_eq!(panels.len(), categories().len() + 1);
    }

    #[test]
    fn test_no_history_panel_when_history_empty() {
        let panels = build_panels(&[], &CatalogFilter::new(""), categories());
        assert_eq!(titles(&panels)[0], "Happy");
        assert_eq!(panels.len(), categories().len());
    }

    #[test]
    fn test_history_hidden_while_filtering() {
        let history = history_list(&["😀"]);
        let panels = build_panels(&history, &CatalogFilter::new("happy"), categories());
        assert!(!titles(&panels).contains(&HISTORY_TITLE));
        assert!(titles(&panels).contains(&"Happy"));
    }

    #[test]
    fn test_space_filter_hides_history() {
        let history = history_list(&["😀"]);
        let panels = build_panels(&history, &CatalogFilter::new(" "), categories());
        assert_eq!(titles(&panels), vec!["Classic"]);
        assert_eq!(panels[0].emoticons, vec!["(╯°□°）╯︵ ┻━┻"]);
    }

    #[test]
    fn test_no_match_builds_nothing() {
        let history = history_list(&["😀"]);
        let panels = build_panels(&history, &CatalogFilter::new("zzzz-nothing"), categories());
        assert!(panels.is_empty());
    }

    #[test]
    fn test_emoticon_at_spans_panels() {
        let history = history_list(&["A", "B"]);
        let panels = build_panels(&history, &CatalogFilter::new(""), categories());

        assert_eq!(emoticon_at(&panels, 0), Some("A"));
        assert_eq!(emoticon_at(&panels, 1), Some("B"));
        assert_eq!(emoticon_at(&panels, 2), Some(categories()[0].emoticons[0]));

        let total: usize = panel_lengths(&panels).iter().sum();
        assert_eq!(emoticon_at(&panels, total), None);
    }
}
