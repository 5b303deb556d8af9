//! URL-hash routing and the path-to-window registry.
//!
//! Hashes look like `#our-kennel#about-us`: one kebab-case segment per tree level. Tree keys are
//! camelCase, so conversion is a per-segment case change.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    content::{ContentCatalog, ContentError},
    location::TreeLocation,
    model::WindowId,
};

/// Converts `my-computer` to `myComputer`.
///
/// Only a dash followed by a lowercase ASCII letter is folded; `dog-2` stays `dog-2`.
pub fn kebab_to_camel(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut chars = segment.chars().peekable();
    while let Some(ch) = chars.next() {
        match chars.peek() {
            Some(next) if ch == '-' && next.is_ascii_lowercase() => {
                out.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Converts `ourKennel` to `our-kennel`.
pub fn camel_to_kebab(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len() + 4);
    for ch in segment.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
        }
        out.extend(ch.to_lowercase());
    }
    out
}

/// Derives a dotted camelCase path from a location hash.
///
/// Returns `None` for an empty hash or one with empty segments.
pub fn hash_to_path(hash: &str) -> Option<String> {
    let trimmed = hash.strip_prefix('#').unwrap_or(hash);
    if trimmed.is_empty() {
        return None;
    }
    let segments: Vec<String> = trimmed.split('#').map(kebab_to_camel).collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return None;
    }
    Some(segments.join("."))
}

/// Builds the location hash for a dotted path.
pub fn path_to_hash(path: &str) -> String {
    let segments: Vec<String> = path.split('.').map(camel_to_kebab).collect();
    format!("#{}", segments.join("#"))
}

/// Builds the location hash for a typed location.
pub fn location_to_hash(location: &TreeLocation) -> String {
    path_to_hash(&location.to_string())
}

/// Maps launcher and hash paths onto tree locations.
///
/// A first segment naming a menu alias (`my-computer` or `myComputer`) is replaced by the aliased
/// root key. Legacy start-menu ids such as `my-computer-aboutUs` expand to `ourKennel.aboutUs`.
///
/// # Errors
///
/// Returns [`ContentError::EmptyPath`] when the path has no keys. The returned location is not
/// checked against the tree.
pub fn resolve_launch_target(
    catalog: &ContentCatalog,
    path: &str,
) -> Result<TreeLocation, ContentError> {
    let path = path.trim();
    let mut segments: Vec<String> = path.split('.').map(str::to_string).collect();
    let Some(first) = segments.first().cloned() else {
        return Err(ContentError::EmptyPath);
    };

    if let Some(root) = alias_root(catalog, &first) {
        segments[0] = root.to_string();
    } else if let Some((root, rest)) = legacy_menu_id(catalog, &first) {
        segments.splice(0..1, std::iter::once(root.to_string()).chain(rest));
    }

    TreeLocation::from_segments(segments)
}

fn alias_root<'a>(catalog: &'a ContentCatalog, segment: &str) -> Option<&'a str> {
    catalog
        .aliases
        .iter()
        .find(|alias| alias.id == segment || kebab_to_camel(&alias.id) == segment)
        .map(|alias| alias.root.as_str())
}

fn legacy_menu_id<'a>(
    catalog: &'a ContentCatalog,
    segment: &str,
) -> Option<(&'a str, Vec<String>)> {
    catalog.aliases.iter().find_map(|alias| {
        let rest = segment.strip_prefix(alias.id.as_str())?.strip_prefix('-')?;
        if rest.is_empty() {
            return None;
        }
        Some((
            alias.root.as_str(),
            rest.split('-').map(str::to_string).collect(),
        ))
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// At most one open window per location.
pub struct WindowRegistry {
    entries: BTreeMap<TreeLocation, WindowId>,
}

impl WindowRegistry {
    /// Window currently registered for `location`.
    pub fn lookup(&self, location: &TreeLocation) -> Option<WindowId> {
        self.entries.get(location).copied()
    }

    /// Registers `window_id` under `location`, replacing any previous entry.
    pub fn register(&mut self, location: TreeLocation, window_id: WindowId) {
        self.entries.insert(location, window_id);
    }

    /// Drops every entry owned by `window_id`.
    pub fn unregister(&mut self, window_id: WindowId) {
        self.entries.retain(|_, id| *id != window_id);
    }

    /// Moves the entry of `window_id` to `location`.
    pub fn rekey(&mut self, window_id: WindowId, location: TreeLocation) {
        self.unregister(window_id);
        self.register(location, window_id);
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no window is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered `(location, window)` pairs in location order.
    pub fn iter(&self) -> impl Iterator<Item = (&TreeLocation, WindowId)> {
        self.entries.iter().map(|(location, id)| (location, *id))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::content::ContentNode;

    #[test]
    fn segment_case_conversion_round_trips() {
        for key in ["ourKennel", "aboutUs", "dogB", "pastLitters", "news"] {
            assert_eq!(kebab_to_camel(&camel_to_kebab(key)), key);
        }
        assert_eq!(camel_to_kebab("kennelHistory"), "kennel-history");
        assert_eq!(kebab_to_camel("my-computer"), "myComputer");
    }

    #[test]
    fn hash_and_path_round_trip() {
        let path = "ourKennel.aboutUs.ourStory";
        let hash = path_to_hash(path);
        assert_eq!(hash, "#our-kennel#about-us#our-story");
        assert_eq!(hash_to_path(&hash), Some(path.to_string()));
    }

    #[test]
    fn every_catalog_location_survives_the_hash_round_trip() {
        fn walk(location: TreeLocation, node: &ContentNode, seen: &mut Vec<TreeLocation>) {
            for child in &node.children {
                walk(location.child(child.key.clone()), child, seen);
            }
            seen.push(location);
        }

        let mut locations = Vec::new();
        for root in &ContentCatalog::builtin().roots {
            walk(TreeLocation::root(root.key.clone()), root, &mut locations);
        }
        assert!(locations.len() > ContentCatalog::builtin().roots.len());
        for location in &locations {
            assert_eq!(
                hash_to_path(&location_to_hash(location)),
                Some(location.to_string()),
                "{location}"
            );
        }
    }

    #[test]
    fn only_dash_letter_pairs_fold_to_uppercase() {
        assert_eq!(kebab_to_camel("dog-2"), "dog-2");
        assert_eq!(kebab_to_camel("a--b"), "a-B");
        assert_eq!(kebab_to_camel("trailing-"), "trailing-");
        assert_eq!(kebab_to_camel("our-kennel"), "ourKennel");
    }

    #[test]
    fn empty_and_malformed_hashes_yield_no_path() {
        assert_eq!(hash_to_path(""), None);
        assert_eq!(hash_to_path("#"), None);
        assert_eq!(hash_to_path("#our-kennel##about-us"), None);
    }

    #[test]
    fn menu_alias_hash_maps_to_root() {
        let catalog = ContentCatalog::builtin();
        let path = hash_to_path("#my-computer").expect("path");
        assert_eq!(path, "myComputer");
        let location = resolve_launch_target(catalog, &path).expect("location");
        assert_eq!(location, TreeLocation::root("ourKennel"));
        assert_eq!(
            resolve_launch_target(catalog, "control-panel").expect("kebab alias"),
            TreeLocation::root("contactInfo")
        );
    }

    #[test]
    fn legacy_menu_ids_expand_to_child_paths() {
        let catalog = ContentCatalog::builtin();
        let location = resolve_launch_target(catalog, "my-computer-aboutUs").expect("legacy id");
        assert_eq!(location.to_string(), "ourKennel.aboutUs");
        let plain = resolve_launch_target(catalog, "ourDogs.children.packOfPaws").expect("plain");
        assert_eq!(plain.to_string(), "ourDogs.packOfPaws");
    }

    #[test]
    fn registry_rekey_leaves_no_stale_entry() {
        let mut registry = WindowRegistry::default();
        let kennel = TreeLocation::root("ourKennel");
        let about = kennel.child("aboutUs");
        registry.register(kennel.clone(), WindowId(1));
        registry.rekey(WindowId(1), about.clone());
        assert_eq!(registry.lookup(&kennel), None);
        assert_eq!(registry.lookup(&about), Some(WindowId(1)));
        assert_eq!(registry.len(), 1);
        registry.unregister(WindowId(1));
        assert!(registry.is_empty());
    }
}
