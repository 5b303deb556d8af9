//! Built-in kennel content catalog and path resolution.
//!
//! The catalog is authored in `content/kennel.toml`, validated by the build script and embedded
//! as JSON. It is parsed once and never mutated afterwards.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::location::TreeLocation;

include!(concat!(env!("OUT_DIR"), "/kennel_catalog_generated.rs"));

/// Title shown for windows opened on a path that does not resolve.
pub const INVALID_LOCATION_TITLE: &str = "Invalid Location";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Path resolution failures.
pub enum ContentError {
    /// The path had no keys.
    #[error("empty content path")]
    EmptyPath,
    /// A segment did not name a child of the previous node.
    #[error("content path not found: {0}")]
    NotFound(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Content node type tag.
pub enum ContentKind {
    /// Top-level entry.
    Root,
    /// Drive-like container.
    Drive,
    /// Plain folder.
    Folder,
    /// Leaf document.
    File,
}

impl ContentKind {
    /// Returns `true` for kinds that list children.
    pub const fn is_container(self) -> bool {
        !matches!(self, Self::File)
    }

    /// Stable lowercase token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Drive => "drive",
            Self::Folder => "folder",
            Self::File => "file",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Viewer used when a file is opened.
pub enum FileView {
    /// Editable plain text.
    #[default]
    Notepad,
    /// Fetched dog profile.
    Profile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One node of the content tree. Children keep catalog order.
pub struct ContentNode {
    /// Key unique among siblings.
    pub key: String,
    /// Display title.
    pub title: String,
    /// Emoji icon.
    pub icon: String,
    /// Type tag.
    pub kind: ContentKind,
    /// Viewer for files.
    #[serde(default)]
    pub view: Option<FileView>,
    /// Ordered children (always empty for files).
    #[serde(default)]
    pub children: Vec<ContentNode>,
}

impl ContentNode {
    /// Looks up a direct child by key.
    pub fn child(&self, key: &str) -> Option<&ContentNode> {
        self.children.iter().find(|child| child.key == key)
    }

    /// Returns `true` for leaf documents.
    pub fn is_file(&self) -> bool {
        self.kind == ContentKind::File
    }

    /// Returns `true` for roots, drives and folders.
    pub fn is_folder(&self) -> bool {
        self.kind.is_container()
    }

    /// Viewer used to open this node when it is a file.
    pub fn file_view(&self) -> FileView {
        self.view.unwrap_or_default()
    }

    /// Empty folder standing in for a location that failed to resolve.
    pub fn invalid_location(key: &str) -> Self {
        Self {
            key: key.to_string(),
            title: INVALID_LOCATION_TITLE.to_string(),
            icon: "📁".to_string(),
            kind: ContentKind::Folder,
            view: None,
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Legacy start-menu id mapped onto a root key.
pub struct MenuAlias {
    /// Kebab-case menu id, for example `my-computer`.
    pub id: String,
    /// Target root key.
    pub root: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Desktop shortcut seed.
pub struct ShortcutEntry {
    /// Dotted target path.
    pub path: String,
    /// Caption.
    pub title: String,
    /// Emoji icon.
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Sticky note seed.
pub struct StickyEntry {
    /// Header text.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Left offset in desktop pixels.
    pub x: i32,
    /// Top offset in desktop pixels.
    pub y: i32,
    /// Palette name or CSS colour.
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One resolvable step of an address-bar trail.
pub struct Breadcrumb {
    /// Location of this step.
    pub location: TreeLocation,
    /// Node title.
    pub title: String,
    /// Node icon.
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Whole content catalog: tree, menu aliases, desktop seeds.
pub struct ContentCatalog {
    /// Catalog schema version.
    pub schema_version: u32,
    /// Top-level entries in display order.
    pub roots: Vec<ContentNode>,
    /// Start-menu aliases in display order.
    #[serde(default)]
    pub aliases: Vec<MenuAlias>,
    /// Desktop shortcuts.
    #[serde(default)]
    pub shortcuts: Vec<ShortcutEntry>,
    /// Sticky notes shown on first load.
    #[serde(default)]
    pub stickies: Vec<StickyEntry>,
}

impl ContentCatalog {
    /// Returns the catalog embedded at build time.
    pub fn builtin() -> &'static ContentCatalog {
        static CATALOG: OnceLock<ContentCatalog> = OnceLock::new();
        CATALOG.get_or_init(|| {
            serde_json::from_str(KENNEL_CATALOG_JSON)
                .expect("generated kennel catalog should parse")
        })
    }

    /// Top-level entry by key.
    pub fn root(&self, key: &str) -> Option<&ContentNode> {
        self.roots.iter().find(|root| root.key == key)
    }

    /// Walks the tree along `location`.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::NotFound`] when any segment is missing; no partial result is
    /// returned.
    pub fn resolve(&self, location: &TreeLocation) -> Result<&ContentNode, ContentError> {
        let not_found = || ContentError::NotFound(location.to_string());
        let mut segments = location.segments().iter();
        let first = segments.next().ok_or(ContentError::EmptyPath)?;
        let mut node = self.root(first).ok_or_else(not_found)?;
        for segment in segments {
            node = node.child(segment).ok_or_else(not_found)?;
        }
        Ok(node)
    }

    /// Parses and resolves a dotted path.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::EmptyPath`] for paths without keys and
    /// [`ContentError::NotFound`] for missing segments.
    pub fn resolve_path(&self, path: &str) -> Result<&ContentNode, ContentError> {
        self.resolve(&TreeLocation::parse(path)?)
    }

    /// Trail of every resolvable prefix of `location`, root first.
    pub fn breadcrumbs(&self, location: &TreeLocation) -> Vec<Breadcrumb> {
        location
            .prefixes()
            .map_while(|prefix| {
                self.resolve(&prefix).ok().map(|node| Breadcrumb {
                    title: node.title.clone(),
                    icon: node.icon.clone(),
                    location: prefix,
                })
            })
            .collect()
    }
}

/// Resolves a sticky-note palette name to its hex colour; other values pass through unchanged.
pub fn sticky_color(color: &str) -> String {
    let hex = match color {
        "yellow" => "#fff740",
        "salmon" => "#ffa07a",
        "green" => "#98fb98",
        "blue" => "#87cefa",
        "purple" => "#dda0dd",
        "pink" => "#ffb6c1",
        "orange" => "#ffa500",
        "white" => "#ffffff",
        "grey" => "#d3d3d3",
        other => other,
    };
    hex.to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn catalog() -> &'static ContentCatalog {
        ContentCatalog::builtin()
    }

    #[test]
    fn builtin_catalog_keeps_authored_root_order() {
        let keys: Vec<&str> = catalog().roots.iter().map(|root| root.key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["ourKennel", "ourDogs", "photoGallery", "communityHub", "contactInfo"]
        );
        assert!(catalog().roots.iter().all(|root| root.kind == ContentKind::Root));
    }

    #[test]
    fn resolves_file_through_children_segments() {
        let node = catalog()
            .resolve_path("ourKennel.children.aboutUs.children.ourStory")
            .expect("our story");
        assert_eq!(node.title, "Our Story");
        assert_eq!(node.icon, "📄");
        assert_eq!(node.kind, ContentKind::File);
        assert_eq!(node.file_view(), FileView::Notepad);
    }

    #[test]
    fn resolve_matches_a_manual_walk() {
        let manual = catalog()
            .root("ourDogs")
            .and_then(|root| root.child("packOfPaws"))
            .and_then(|folder| folder.child("example"))
            .expect("manual walk");
        let resolved = catalog().resolve_path("ourDogs.packOfPaws.example").expect("resolve");
        assert_eq!(resolved, manual);
        assert_eq!(resolved.file_view(), FileView::Profile);
    }

    #[test]
    fn missing_segments_do_not_yield_partial_results() {
        assert_eq!(
            catalog().resolve_path("ourKennel.aboutUs.nope"),
            Err(ContentError::NotFound("ourKennel.aboutUs.nope".to_string()))
        );
        assert_eq!(
            catalog().resolve_path("nowhere"),
            Err(ContentError::NotFound("nowhere".to_string()))
        );
        assert_eq!(catalog().resolve_path(""), Err(ContentError::EmptyPath));
    }

    #[test]
    fn breadcrumbs_stop_at_the_first_unresolvable_prefix() {
        let location = TreeLocation::parse("ourKennel.services.missing").expect("location");
        let titles: Vec<String> = catalog()
            .breadcrumbs(&location)
            .into_iter()
            .map(|crumb| crumb.title)
            .collect();
        assert_eq!(titles, vec!["Our Kennel", "Services (D:)"]);
    }

    #[test]
    fn files_never_carry_children() {
        fn check(node: &ContentNode) {
            if node.is_file() {
                assert!(node.children.is_empty(), "{} has children", node.key);
            }
            node.children.iter().for_each(check);
        }
        catalog().roots.iter().for_each(check);
    }

    #[test]
    fn invalid_location_sentinel_is_an_empty_folder() {
        let node = ContentNode::invalid_location("bogus");
        assert_eq!(node.title, INVALID_LOCATION_TITLE);
        assert!(node.is_folder());
        assert!(node.children.is_empty());
    }

    #[test]
    fn sticky_palette_names_resolve_to_hex() {
        assert_eq!(sticky_color("yellow"), "#fff740");
        assert_eq!(sticky_color("grey"), "#d3d3d3");
        assert_eq!(sticky_color("#123456"), "#123456");
    }
}
