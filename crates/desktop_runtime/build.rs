use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const CATALOG_SCHEMA_VERSION: u32 = 1;
const NODE_KINDS: [&str; 4] = ["root", "drive", "folder", "file"];
const FILE_VIEWS: [&str; 2] = ["notepad", "profile"];
const STICKY_PALETTE: [&str; 9] = [
    "yellow", "salmon", "green", "blue", "purple", "pink", "orange", "white", "grey",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct NodeEntry {
    key: String,
    title: String,
    icon: String,
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    view: Option<String>,
    #[serde(default)]
    children: Vec<NodeEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AliasEntry {
    id: String,
    root: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ShortcutEntry {
    path: String,
    title: String,
    icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StickyEntry {
    title: String,
    content: String,
    x: i32,
    y: i32,
    color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogFile {
    schema_version: u32,
    roots: Vec<NodeEntry>,
    #[serde(default)]
    aliases: Vec<AliasEntry>,
    #[serde(default)]
    shortcuts: Vec<ShortcutEntry>,
    #[serde(default)]
    stickies: Vec<StickyEntry>,
}

fn validate_siblings(parent: &str, nodes: &[NodeEntry], depth: usize) {
    let mut seen = HashSet::new();
    for node in nodes {
        let here = if parent.is_empty() {
            node.key.clone()
        } else {
            format!("{parent}.{}", node.key)
        };
        if node.key.is_empty() || node.key.contains('.') || node.key == "children" {
            panic!("catalog key `{here}` must be non-empty, dot-free and not `children`");
        }
        if !seen.insert(node.key.as_str()) {
            panic!("duplicate catalog key `{here}`");
        }
        if !NODE_KINDS.contains(&node.kind.as_str()) {
            panic!("catalog node `{here}` has unknown kind `{}`", node.kind);
        }
        if (depth == 0) != (node.kind == "root") {
            panic!("catalog node `{here}`: kind `root` is reserved for top-level entries");
        }
        if node.kind == "file" && !node.children.is_empty() {
            panic!("catalog file `{here}` cannot have children");
        }
        if let Some(view) = node.view.as_deref() {
            if node.kind != "file" || !FILE_VIEWS.contains(&view) {
                panic!("catalog node `{here}` has invalid view `{view}`");
            }
        }
        validate_siblings(&here, &node.children, depth + 1);
    }
}

fn path_resolves(roots: &[NodeEntry], path: &str) -> bool {
    let mut level = roots;
    let mut found = false;
    for segment in path.split('.').filter(|segment| *segment != "children") {
        match level.iter().find(|node| node.key == segment) {
            Some(node) => {
                level = &node.children;
                found = true;
            }
            None => return false,
        }
    }
    found
}

fn validate(catalog: &CatalogFile) {
    if catalog.schema_version != CATALOG_SCHEMA_VERSION {
        panic!(
            "catalog schema mismatch: expected {CATALOG_SCHEMA_VERSION} found {}",
            catalog.schema_version
        );
    }
    if catalog.roots.is_empty() {
        panic!("catalog must declare at least one root");
    }
    validate_siblings("", &catalog.roots, 0);

    let mut alias_ids = HashSet::new();
    for alias in &catalog.aliases {
        if !alias_ids.insert(alias.id.as_str()) {
            panic!("duplicate menu alias `{}`", alias.id);
        }
        if !catalog.roots.iter().any(|root| root.key == alias.root) {
            panic!("menu alias `{}` targets unknown root `{}`", alias.id, alias.root);
        }
    }

    for shortcut in &catalog.shortcuts {
        if !path_resolves(&catalog.roots, &shortcut.path) {
            panic!("desktop shortcut `{}` targets unknown path `{}`", shortcut.title, shortcut.path);
        }
    }

    for sticky in &catalog.stickies {
        let color = sticky.color.as_str();
        if !STICKY_PALETTE.contains(&color) && !color.starts_with('#') {
            panic!("sticky note `{}` has unknown color `{color}`", sticky.title);
        }
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("content").join("kennel.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: CatalogFile = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    validate(&catalog);

    let json = serde_json::to_string_pretty(&catalog).expect("serialize kennel catalog");
    let generated = format!(
        "/// Build-time generated kennel content catalog JSON.\n\
pub const KENNEL_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("kennel_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
