//! Raw API records to display categories.

use std::cmp::Ordering;

use categorytree_shared::{DisplayCategory, RawCategory};

use crate::title::parse_leading_number;

/// Compare two categories by `order`.
pub fn sort_by_order(a: &DisplayCategory, b: &DisplayCategory) -> Ordering {
    a.order.cmp(&b.order)
}

/// Sort siblings ascending by `order`. Equal orders keep their input order.
pub fn sort_categories(categories: &mut [DisplayCategory]) {
    // `sort_by` is stable.
    categories.sort_by(sort_by_order);
}

/// Map a raw record and its whole subtree into display categories.
///
/// `order` is the title's leading number, falling back to `id`. Only a
/// top-level record whose title contains `#` starts out flagged for the
/// home page; nested records never are.
pub fn map_category(raw: &RawCategory, is_top_level: bool) -> DisplayCategory {
    let order = parse_leading_number(&raw.title).unwrap_or(raw.id);

    let mut children: Vec<DisplayCategory> = raw
        .children
        .iter()
        .map(|child| map_category(child, false))
        .collect();
    sort_categories(&mut children);

    DisplayCategory {
        id: raw.id,
        order,
        name: raw.name.clone(),
        image: raw.meta_description.clone(),
        show_on_home: is_top_level && raw.title.contains('#'),
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: i64, title: &str, children: Vec<RawCategory>) -> RawCategory {
        RawCategory {
            id,
            title: title.into(),
            meta_description: format!("img-{id}"),
            name: format!("cat-{id}"),
            children,
        }
    }

    fn display(id: i64, order: i64) -> DisplayCategory {
        DisplayCategory {
            id,
            order,
            name: "name".into(),
            image: "image".into(),
            show_on_home: false,
            children: vec![],
        }
    }

    #[test]
    fn sort_by_order_compares_order() {
        assert_eq!(sort_by_order(&display(1, 1), &display(1, 2)), Ordering::Less);
        assert_eq!(sort_by_order(&display(1, 2), &display(1, 1)), Ordering::Greater);
        assert_eq!(sort_by_order(&display(1, 1), &display(1, 1)), Ordering::Equal);
    }

    #[test]
    fn sort_is_stable_for_equal_orders() {
        let mut categories = vec![
            display(10, 2),
            display(11, 1),
            display(12, 2),
            display(13, 1),
            display(14, 2),
        ];
        sort_categories(&mut categories);

        let ids: Vec<i64> = categories.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![11, 13, 10, 12, 14]);
    }

    #[test]
    fn maps_fields() {
        let mapped = map_category(&raw(1, "2#", vec![]), true);
        assert_eq!(
            mapped,
            DisplayCategory {
                id: 1,
                order: 2,
                name: "cat-1".into(),
                image: "img-1".into(),
                show_on_home: true,
                children: vec![],
            }
        );
    }

    #[test]
    fn order_falls_back_to_id() {
        assert_eq!(map_category(&raw(42, "Shoes", vec![]), false).order, 42);
        assert_eq!(map_category(&raw(43, "#", vec![]), false).order, 43);
    }

    #[test]
    fn show_on_home_needs_top_level_and_hash() {
        assert!(map_category(&raw(1, "1#", vec![]), true).show_on_home);
        assert!(!map_category(&raw(1, "1", vec![]), true).show_on_home);
        assert!(!map_category(&raw(1, "1#", vec![]), false).show_on_home);
    }

    #[test]
    fn children_are_mapped_recursively_and_sorted() {
        let tree = raw(
            1,
            "1",
            vec![
                raw(2, "3#", vec![raw(5, "9", vec![]), raw(6, "4", vec![])]),
                raw(3, "1", vec![]),
                raw(4, "2", vec![]),
            ],
        );

        let mapped = map_category(&tree, true);
        let orders: Vec<i64> = mapped.children.iter().map(|c| c.order).collect();
        assert_eq!(orders, vec![1, 2, 3]);

        // Nested children never carry the home flag, even with `#` titles.
        assert!(mapped.children.iter().all(|c| !c.show_on_home));

        let grandchildren: Vec<i64> = mapped.children[2].children.iter().map(|c| c.id).collect();
        assert_eq!(grandchildren, vec![6, 5]);
    }
}
