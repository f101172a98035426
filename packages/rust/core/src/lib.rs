//! Category tree domain logic for categorytree.
//!
//! Turns raw category records from a content API into a sorted,
//! display-ready tree with home-page selection:
//! - [`title`] — order numbers parsed from titles
//! - [`mapper`] — recursive raw-to-display mapping and sibling sorting
//! - [`home`] — "show on home" selection for top-level categories
//! - [`tree`] — fetch-then-transform orchestration with graceful degradation

pub mod home;
pub mod mapper;
pub mod title;
pub mod tree;

pub use home::{HomePolicy, set_show_on_home, set_show_on_home_with};
pub use mapper::{map_category, sort_by_order, sort_categories};
pub use title::parse_leading_number;
pub use tree::{
    DiagnosticSink, FetchOutcome, TracingSink, build_tree, category_tree, category_tree_with,
};
