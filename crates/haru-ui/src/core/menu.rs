//! Navigation menu model with user-defined ordering.

/// One entry in the reorderable navigation menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    /// Stable identifier persisted in the saved ordering.
    pub id: &'static str,
    /// Label rendered in the header and bottom bar.
    pub label: &'static str,
    /// Route path the entry links to.
    pub path: &'static str,
}

/// Built-in menu entries in default order.
pub const DEFAULT_MENU: [MenuItem; 5] = [
    MenuItem {
        id: "home",
        label: "홈",
        path: "/",
    },
    MenuItem {
        id: "posts",
        label: "포스트",
        path: "/posts",
    },
    MenuItem {
        id: "todo",
        label: "투두",
        path: "/todo",
    },
    MenuItem {
        id: "community",
        label: "커뮤니티",
        path: "/community",
    },
    MenuItem {
        id: "profile",
        label: "프로필",
        path: "/profile",
    },
];

/// Move the entry at `from` so it lands at `to`; out-of-range indices are a
/// no-op.
pub fn move_item(items: &mut Vec<MenuItem>, from: usize, to: usize) {
    if from >= items.len() || to >= items.len() || from == to {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

/// Rebuild the menu from a saved id ordering.
///
/// Unknown ids are dropped; entries missing from the saved order keep their
/// default relative position at the end, so new built-ins appear after an
/// upgrade.
#[must_use]
pub fn ordered(saved: &[String]) -> Vec<MenuItem> {
    let mut items: Vec<MenuItem> = saved
        .iter()
        .filter_map(|id| DEFAULT_MENU.iter().copied().find(|item| item.id == *id))
        .collect();
    for item in DEFAULT_MENU {
        if !items.iter().any(|existing| existing.id == item.id) {
            items.push(item);
        }
    }
    items
}

/// Ids of `items` in their current order, for persistence.
#[must_use]
pub fn order_ids(items: &[MenuItem]) -> Vec<String> {
    items.iter().map(|item| item.id.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_MENU, move_item, order_ids, ordered};

    #[test]
    fn move_reorders_within_bounds() {
        let mut items = DEFAULT_MENU.to_vec();
        move_item(&mut items, 0, 2);
        assert_eq!(order_ids(&items), ["posts", "todo", "home", "community", "profile"]);
        move_item(&mut items, 2, 0);
        assert_eq!(order_ids(&items), ["home", "posts", "todo", "community", "profile"]);
    }

    #[test]
    fn move_ignores_out_of_range_indices() {
        let mut items = DEFAULT_MENU.to_vec();
        move_item(&mut items, 9, 0);
        move_item(&mut items, 0, 9);
        move_item(&mut items, 1, 1);
        assert_eq!(items, DEFAULT_MENU.to_vec());
    }

    #[test]
    fn ordered_restores_saved_order_and_appends_new_items() {
        let saved = vec!["profile".to_string(), "home".to_string()];
        let items = ordered(&saved);
        assert_eq!(order_ids(&items), ["profile", "home", "posts", "todo", "community"]);
    }

    #[test]
    fn ordered_drops_unknown_ids() {
        let saved = vec!["legacy".to_string(), "posts".to_string()];
        let items = ordered(&saved);
        assert_eq!(items.first().map(|item| item.id), Some("posts"));
        assert_eq!(items.len(), DEFAULT_MENU.len());
    }

    #[test]
    fn empty_saved_order_yields_defaults() {
        assert_eq!(ordered(&[]), DEFAULT_MENU.to_vec());
    }
}
