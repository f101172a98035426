//! Home-page selection for top-level categories.

use tracing::debug;

use categorytree_shared::{
    AppConfig, DEFAULT_CATEGORIES_TO_SHOW, DisplayCategory, HomeConfig, MAX_CATEGORIES_TO_SHOW,
};

/// Thresholds used by [`set_show_on_home_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomePolicy {
    /// Sibling lists at or below this length are shown in full.
    pub max_categories_to_show: usize,
    /// Leading categories shown when none is flagged.
    pub default_categories_to_show: usize,
}

impl Default for HomePolicy {
    fn default() -> Self {
        Self {
            max_categories_to_show: MAX_CATEGORIES_TO_SHOW,
            default_categories_to_show: DEFAULT_CATEGORIES_TO_SHOW,
        }
    }
}

impl From<&HomeConfig> for HomePolicy {
    fn from(home: &HomeConfig) -> Self {
        Self {
            max_categories_to_show: home.max_categories_to_show,
            default_categories_to_show: home.default_categories_to_show,
        }
    }
}

impl From<&AppConfig> for HomePolicy {
    fn from(config: &AppConfig) -> Self {
        Self::from(&config.home)
    }
}

/// Decide which top-level categories appear on the home page, using the
/// default thresholds.
pub fn set_show_on_home(categories: Vec<DisplayCategory>) -> Vec<DisplayCategory> {
    set_show_on_home_with(&HomePolicy::default(), categories)
}

/// Decide which top-level categories appear on the home page.
///
/// 1. Short lists (`<= max_categories_to_show`) are shown in full.
/// 2. If any category is already flagged, the list is returned as is.
/// 3. Otherwise the first `default_categories_to_show` are flagged.
///
/// Only `show_on_home` of the given siblings is rewritten; order and
/// children are left alone.
pub fn set_show_on_home_with(
    policy: &HomePolicy,
    categories: Vec<DisplayCategory>,
) -> Vec<DisplayCategory> {
    if categories.len() <= policy.max_categories_to_show {
        debug!(count = categories.len(), "showing all categories on home");
        return categories
            .into_iter()
            .map(|category| DisplayCategory {
                show_on_home: true,
                ..category
            })
            .collect();
    }

    if categories.iter().any(|category| category.show_on_home) {
        debug!("keeping explicit home flags");
        return categories;
    }

    debug!(
        count = categories.len(),
        shown = policy.default_categories_to_show,
        "showing leading categories on home"
    );
    categories
        .into_iter()
        .enumerate()
        .map(|(index, category)| DisplayCategory {
            show_on_home: index < policy.default_categories_to_show,
            ..category
        })
        .collect()
}
