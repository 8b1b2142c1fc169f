//! Category filter and search over article cards.
//!
//! A card is shown when its category matches the active filter (`all`
//! matches everything) and the search term is empty or appears, ignoring
//! case, in its title or excerpt.

use std::sync::{RwLock, RwLockWriteGuard};

use folio_dom::{Display, Element, Event, SharedDocument};
use log::debug;
use nucleo_matcher::pattern::{Atom, AtomKind, CaseMatching, Normalization};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use crate::page::{Behavior, EventResult};

pub const ALL_CATEGORIES: &str = "all";
pub const ACTIVE_CLASS: &str = "active";

/// Element IDs and classes the filter binds to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogIds {
    pub filter_button_class: String,
    pub article_class: String,
    pub tag_class: String,
    pub search_id: String,
    /// Container the no-results message is appended to.
    pub list_id: String,
    pub no_results_id: String,
}

impl Default for BlogIds {
    fn default() -> Self {
        Self {
            filter_button_class: "filter-btn".into(),
            article_class: "article-card".into(),
            tag_class: "tag".into(),
            search_id: "blog-search".into(),
            list_id: "blog-articles".into(),
            no_results_id: "no-results-message".into(),
        }
    }
}

/// Searchable text of one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleEntry {
    pub id: String,
    pub category: String,
    pub title: String,
    pub excerpt: String,
}

impl ArticleEntry {
    fn from_element(el: &Element) -> Self {
        Self {
            id: el.id.clone(),
            category: el.get_data("category").cloned().unwrap_or_default(),
            title: el
                .first_with_tag(&["h2", "h3"])
                .map(Element::text_content)
                .unwrap_or_default(),
            excerpt: el
                .first_with_tag(&["p"])
                .map(Element::text_content)
                .unwrap_or_default(),
        }
    }

    pub fn matches_category(&self, category: &str) -> bool {
        category == ALL_CATEGORIES || self.category == category
    }
}

/// Case-insensitive substring search over title and excerpt.
pub fn matches_search(entry: &ArticleEntry, term: &str, matcher: &mut Matcher) -> bool {
    if term.is_empty() {
        return true;
    }
    let atom = Atom::new(
        term,
        CaseMatching::Ignore,
        Normalization::Never,
        AtomKind::Substring,
        false,
    );
    let mut buf = Vec::new();
    [&entry.title, &entry.excerpt]
        .into_iter()
        .any(|text| atom.score(Utf32Str::new(text, &mut buf), matcher).is_some())
}

#[derive(Debug)]
struct FilterState {
    category: String,
    term: String,
}

#[derive(Debug)]
pub struct BlogFilter {
    document: SharedDocument,
    ids: BlogIds,
    articles: Vec<ArticleEntry>,
    state: RwLock<FilterState>,
}

impl BlogFilter {
    /// Returns `None` when there is no search box.
    pub fn install(document: &SharedDocument, ids: BlogIds) -> Option<Self> {
        let (articles, category) = document.with(|doc| {
            if !doc.contains(&ids.search_id) {
                return None;
            }
            let articles = doc
                .query_class(&ids.article_class)
                .iter()
                .filter_map(|id| doc.get(id).map(ArticleEntry::from_element))
                .collect::<Vec<_>>();
            let category = doc
                .query_class(&ids.filter_button_class)
                .iter()
                .filter_map(|id| doc.get(id))
                .find(|btn| btn.has_class(ACTIVE_CLASS))
                .and_then(|btn| btn.get_data("category").cloned())
                .unwrap_or_else(|| ALL_CATEGORIES.to_string());
            Some((articles, category))
        })?;
        debug!("blog filter: {} articles", articles.len());

        Some(Self {
            document: document.clone(),
            ids,
            articles,
            state: RwLock::new(FilterState {
                category,
                term: String::new(),
            }),
        })
    }

    fn state(&self) -> RwLockWriteGuard<'_, FilterState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn articles(&self) -> &[ArticleEntry] {
        &self.articles
    }

    pub fn category(&self) -> String {
        self.state().category.clone()
    }

    pub fn search_term(&self) -> String {
        self.state().term.clone()
    }

    /// IDs of cards currently shown.
    pub fn visible(&self) -> Vec<String> {
        self.document.with(|doc| {
            self.articles
                .iter()
                .filter(|a| doc.get(&a.id).is_some_and(|el| !el.style.is_hidden()))
                .map(|a| a.id.clone())
                .collect()
        })
    }

    pub fn has_no_results_message(&self) -> bool {
        self.document.with(|doc| doc.contains(&self.ids.no_results_id))
    }

    /// Select a category and mark its button active.
    pub fn select_category(&self, button_id: &str) -> bool {
        let category = self.document.with_mut(|doc| {
            let category = doc.get(button_id)?.get_data("category").cloned()?;
            for id in doc.query_class(&self.ids.filter_button_class) {
                doc.set_class(&id, ACTIVE_CLASS, id == button_id);
            }
            Some(category)
        });
        let Some(category) = category else {
            return false;
        };
        let mut state = self.state();
        state.category = category;
        self.apply(&state);
        true
    }

    /// Set the search term and re-filter.
    pub fn search(&self, term: &str) {
        let mut state = self.state();
        state.term = term.to_lowercase();
        self.apply(&state);
    }

    /// Put a tag's text into the search box and search for it.
    pub fn search_tag(&self, tag_id: &str) -> bool {
        let Some(term) = self
            .document
            .with_mut(|doc| {
                let text = doc.get(tag_id)?.text_content().to_lowercase();
                doc.set_attr(&self.ids.search_id, "value", text.clone());
                Some(text)
            })
        else {
            return false;
        };
        self.search(&term);
        true
    }

    fn apply(&self, state: &FilterState) {
        let FilterState { category, term } = state;
        let mut matcher = Matcher::new(Config::DEFAULT);
        let shown: Vec<bool> = self
            .articles
            .iter()
            .map(|a| a.matches_category(category) && matches_search(a, term, &mut matcher))
            .collect();
        let any = shown.iter().any(|s| *s);
        debug!(
            "blog filter: category={category} term={term:?} -> {} shown",
            shown.iter().filter(|s| **s).count()
        );

        self.document.with_mut(|doc| {
            for (article, show) in self.articles.iter().zip(&shown) {
                let display = if *show { Display::Grid } else { Display::None };
                doc.update(&article.id, |el| el.style.display = display);
            }

            let exists = doc.contains(&self.ids.no_results_id);
            if !any && !exists {
                let message = Element::div()
                    .id(&self.ids.no_results_id)
                    .class("no-results-message")
                    .child(Element::text("h3", "No articles found"))
                    .child(Element::text("p", "Try different search terms"));
                doc.append_child(&self.ids.list_id, message);
            } else if any && exists {
                doc.remove(&self.ids.no_results_id);
            }
        });
    }

    fn is_class_member(&self, id: &str, class: &str) -> bool {
        self.document.with(|doc| doc.has_class(id, class))
    }
}

impl Behavior for BlogFilter {
    fn name(&self) -> &'static str {
        "blog-filter"
    }

    fn on_event(&self, event: &Event) -> EventResult {
        match event {
            Event::Input { target, value } if *target == self.ids.search_id => {
                self.search(value);
                EventResult::Consumed
            }
            Event::Click { target }
                if self.is_class_member(target, &self.ids.filter_button_class) =>
            {
                self.select_category(target).into()
            }
            Event::Click { target } if self.is_class_member(target, &self.ids.tag_class) => {
                self.search_tag(target).into()
            }
            _ => EventResult::Ignored,
        }
    }
}
