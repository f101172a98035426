//! Category tree builder.
//!
//! Fetches raw categories through a caller-supplied collaborator, maps and
//! sorts them into display categories, then applies home-page selection to
//! the top level. Fetch failures never reach the caller: they are reported
//! to a [`DiagnosticSink`] and turned into an empty tree.

use std::future::Future;

use tracing::{debug, error, instrument};

use categorytree_shared::{
    CategoriesResponse, CategoryTreeError, DisplayCategory, RawCategory, Result,
};

use crate::home::{HomePolicy, set_show_on_home_with};
use crate::mapper::{map_category, sort_categories};

// ---------------------------------------------------------------------------
// FetchOutcome
// ---------------------------------------------------------------------------

/// Classified result of a category fetch.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The fetch returned at least one category.
    Categories(Vec<RawCategory>),
    /// The fetch succeeded but `data` was empty or missing.
    Empty,
    /// The fetch failed.
    Failed(CategoryTreeError),
}

impl From<Result<CategoriesResponse>> for FetchOutcome {
    fn from(result: Result<CategoriesResponse>) -> Self {
        match result {
            Ok(CategoriesResponse {
                data: Some(categories),
            }) if !categories.is_empty() => Self::Categories(categories),
            Ok(_) => Self::Empty,
            Err(e) => Self::Failed(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

/// Receives fetch failures swallowed by the tree builder.
pub trait DiagnosticSink: Send + Sync {
    /// Called once per failed fetch.
    fn fetch_failed(&self, error: &CategoryTreeError);
}

/// Reports fetch failures through `tracing`.
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn fetch_failed(&self, error: &CategoryTreeError) {
        error!(error = %error, "error while fetching categories");
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Build the display tree from whatever `fetch` yields, using the default
/// home thresholds and logging failures via `tracing`.
pub async fn category_tree<F, Fut>(fetch: F) -> Vec<DisplayCategory>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<CategoriesResponse>>,
{
    category_tree_with(fetch, &HomePolicy::default(), &TracingSink).await
}

/// Build the display tree with an explicit home policy and diagnostic sink.
///
/// `fetch` is awaited exactly once. A failed fetch is passed to `sink` and
/// yields an empty tree; an empty or missing `data` yields an empty tree
/// without a report.
#[instrument(skip_all)]
pub async fn category_tree_with<F, Fut>(
    fetch: F,
    policy: &HomePolicy,
    sink: &dyn DiagnosticSink,
) -> Vec<DisplayCategory>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<CategoriesResponse>>,
{
    match FetchOutcome::from(fetch().await) {
        FetchOutcome::Categories(raw) => build_tree(&raw, policy),
        FetchOutcome::Empty => {
            debug!("fetch returned no categories");
            Vec::new()
        }
        FetchOutcome::Failed(e) => {
            sink.fetch_failed(&e);
            Vec::new()
        }
    }
}

/// Map, sort and home-flag a list of top-level raw categories.
#[instrument(skip_all, fields(top_level = raw.len()))]
pub fn build_tree(raw: &[RawCategory], policy: &HomePolicy) -> Vec<DisplayCategory> {
    let mut categories: Vec<DisplayCategory> =
        raw.iter().map(|category| map_category(category, true)).collect();
    sort_categories(&mut categories);

    let tree = set_show_on_home_with(policy, categories);
    debug!(
        shown = tree.iter().filter(|c| c.show_on_home).count(),
        "category tree built"
    );
    tree
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
