//! DOM focus and menu-keyboard helpers for the start menu and navigation dropdowns.

use wasm_bindgen::JsCast;

fn menu_items(menu_id: &str) -> Vec<web_sys::HtmlElement> {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return Vec::new();
    };
    let Some(menu) = document.get_element_by_id(menu_id) else {
        return Vec::new();
    };
    let Ok(nodes) = menu.query_selector_all(r#"[role="menuitem"]"#) else {
        return Vec::new();
    };

    let mut items = Vec::new();
    for index in 0..nodes.length() {
        let Some(item) = nodes
            .item(index)
            .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            continue;
        };
        if item.has_attribute("disabled")
            || item.get_attribute("aria-disabled").as_deref() == Some("true")
        {
            continue;
        }
        items.push(item);
    }
    items
}

fn active_index(items: &[web_sys::HtmlElement]) -> Option<usize> {
    let active = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.active_element())?;
    items
        .iter()
        .position(|item| item.is_same_node(Some(active.as_ref())))
}

/// Focuses the first enabled item of a menu and reports whether one was found.
pub(super) fn focus_first_menu_item(menu_id: &str) -> bool {
    match menu_items(menu_id).first() {
        Some(first) => first.focus().is_ok(),
        None => false,
    }
}

/// Index a roving-focus key moves to, or `None` when the key is not a menu navigation key.
pub(super) fn roving_target(key: &str, current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    match key {
        "ArrowDown" => Some(current.map_or(0, |idx| if idx >= last { 0 } else { idx + 1 })),
        "ArrowUp" => Some(current.map_or(last, |idx| if idx == 0 { last } else { idx - 1 })),
        "Home" => Some(0),
        "End" => Some(last),
        _ => None,
    }
}

/// Handles arrow/home/end menu navigation and prevents default when handled.
pub(super) fn handle_menu_roving_keydown(ev: &web_sys::KeyboardEvent, menu_id: &str) -> bool {
    let items = menu_items(menu_id);
    let Some(target) = roving_target(&ev.key(), active_index(&items), items.len()) else {
        return false;
    };
    let _ = items[target].focus();
    ev.prevent_default();
    ev.stop_propagation();
    true
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::roving_target;

    #[test]
    fn arrows_wrap_around_the_menu() {
        assert_eq!(roving_target("ArrowDown", Some(2), 3), Some(0));
        assert_eq!(roving_target("ArrowUp", Some(0), 3), Some(2));
        assert_eq!(roving_target("ArrowDown", None, 3), Some(0));
        assert_eq!(roving_target("ArrowUp", None, 3), Some(2));
    }

    #[test]
    fn home_end_and_other_keys() {
        assert_eq!(roving_target("Home", Some(1), 4), Some(0));
        assert_eq!(roving_target("End", Some(1), 4), Some(3));
        assert_eq!(roving_target("Enter", Some(1), 4), None);
        assert_eq!(roving_target("ArrowDown", None, 0), None);
    }
}
