//! Desktop session state owned by the runtime provider.

use platform_host::DogProfile;
use serde::{Deserialize, Serialize};

use crate::{
    content::{sticky_color, ContentCatalog, ContentKind, ContentNode, FileView},
    location::TreeLocation,
    router::WindowRegistry,
};

/// Logical desktop width in CSS pixels before viewport scaling.
pub const DESKTOP_WIDTH: i32 = 1024;
/// Logical desktop height in CSS pixels before viewport scaling.
pub const DESKTOP_HEIGHT: i32 = 800;
/// Height reserved for the taskbar; windows never move above it.
pub const TASKBAR_HEIGHT: i32 = 30;
/// Width of a newly opened window.
pub const DEFAULT_WINDOW_WIDTH: i32 = 400;
/// Height of a newly opened window.
pub const DEFAULT_WINDOW_HEIGHT: i32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

impl WindowId {
    /// DOM id of the window frame element.
    pub fn dom_id(self) -> String {
        format!("window-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

impl Default for WindowRect {
    fn default() -> Self {
        Self {
            x: 0,
            y: TASKBAR_HEIGHT,
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    /// Converts client coordinates into logical desktop coordinates.
    pub fn unscaled(self, scale: f64) -> Self {
        if !(scale.is_finite() && scale > 0.0) {
            return self;
        }
        Self {
            x: (f64::from(self.x) / scale).round() as i32,
            y: (f64::from(self.y) / scale).round() as i32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Content renderer selected for a window.
pub enum WindowView {
    /// Directory listing with an address bar.
    Folder,
    /// Editable text document.
    Notepad,
    /// Tabbed dog profile.
    Profile,
}

impl WindowView {
    /// Picks the renderer for a resolved node.
    pub fn for_node(node: &ContentNode) -> Self {
        if node.is_folder() {
            return Self::Folder;
        }
        match node.file_view() {
            FileView::Notepad => Self::Notepad,
            FileView::Profile => Self::Profile,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Dog-profile fetch progress for a profile window.
pub enum ProfileLoad {
    /// Fetch in flight.
    Loading,
    /// Record decoded.
    Loaded(DogProfile),
    /// Fetch or decode failed; carries the display message.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub location: TreeLocation,
    pub title: String,
    pub icon: String,
    pub kind: ContentKind,
    pub view: WindowView,
    pub rect: WindowRect,
    pub restore_rect: Option<WindowRect>,
    pub z_index: u32,
    pub is_focused: bool,
    pub minimized: bool,
    pub maximized: bool,
    /// Key of the selected folder entry.
    pub selected_item: Option<String>,
    /// Present only while the window shows a profile.
    pub profile: Option<ProfileLoad>,
}

impl WindowRecord {
    /// Points the record at a (resolved or sentinel) node, resetting per-location view state.
    pub fn show_node(&mut self, location: TreeLocation, node: &ContentNode) {
        self.location = location;
        self.title = node.title.clone();
        self.icon = node.icon.clone();
        self.kind = node.kind;
        self.view = WindowView::for_node(node);
        self.selected_item = None;
        self.profile = (self.view == WindowView::Profile).then_some(ProfileLoad::Loading);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickyNote {
    pub id: u32,
    pub title: String,
    pub content: String,
    pub x: i32,
    pub y: i32,
    /// Resolved CSS colour.
    pub color: String,
    pub z_index: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopState {
    pub next_window_id: u64,
    /// Stack order: the last element is on top.
    pub windows: Vec<WindowRecord>,
    pub registry: WindowRegistry,
    pub start_menu_open: bool,
    /// Root key of the open navigation-strip dropdown.
    pub open_nav_menu: Option<String>,
    /// Index of the selected desktop shortcut.
    pub selected_shortcut: Option<usize>,
    pub stickies: Vec<StickyNote>,
    /// Ratio between the browser viewport and the logical desktop.
    pub viewport_scale: f64,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            next_window_id: 1,
            windows: Vec::new(),
            registry: WindowRegistry::default(),
            start_menu_open: false,
            open_nav_menu: None,
            selected_shortcut: None,
            stickies: Vec::new(),
            viewport_scale: 1.0,
        }
    }
}

impl DesktopState {
    /// Fresh session seeded with the catalog's sticky notes.
    pub fn from_catalog(catalog: &ContentCatalog) -> Self {
        let stickies = catalog
            .stickies
            .iter()
            .enumerate()
            .map(|(idx, seed)| StickyNote {
                id: idx as u32 + 1,
                title: seed.title.clone(),
                content: seed.content.clone(),
                x: seed.x,
                y: seed.y,
                color: sticky_color(&seed.color),
                z_index: 1,
            })
            .collect();
        Self {
            stickies,
            ..Self::default()
        }
    }

    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.windows.iter().find(|w| w.is_focused).map(|w| w.id)
    }

    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    /// Focused window, or the top of the stack when nothing has focus.
    pub fn top_window(&self) -> Option<&WindowRecord> {
        self.windows
            .iter()
            .find(|w| w.is_focused)
            .or_else(|| self.windows.last())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
}
