//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use platform_host::{DogProfile, DogProfileError};
use thiserror::Error;

use crate::{
    content::{ContentCatalog, ContentError, ContentNode},
    location::TreeLocation,
    model::{
        DesktopState, DragSession, InteractionState, PointerPosition, ProfileLoad, WindowId,
        WindowRecord, WindowView,
    },
    router::{hash_to_path, resolve_launch_target},
    window_manager::{
        dragged_rect, focus_window_internal, initial_window_rect, maximized_rect,
        normalize_window_stack,
    },
};

/// Prefix of the inline message shown when a dog profile cannot be loaded.
pub const PROFILE_ERROR_PREFIX: &str = "Error loading dog profile";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Where an open request came from.
pub enum LaunchOrigin {
    /// Start menu, navigation strip, desktop shortcut or other UI launcher.
    Launcher,
    /// The location hash changed (or was present on startup). The URL already matches.
    HashChange,
}

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open (or focus) a window for a launcher path; menu aliases are honoured.
    OpenPath {
        /// Dotted path, alias or legacy start-menu id.
        path: String,
    },
    /// Open (or focus) a window for a typed location.
    OpenLocation {
        /// Target location.
        location: TreeLocation,
        /// Request source.
        origin: LaunchOrigin,
    },
    /// React to a `hashchange` (or the initial hash on startup).
    HashChanged {
        /// Raw `location.hash` value.
        hash: String,
    },
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Focus (and raise) a window by id.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Maximize a window to the desktop area below the taskbar.
    MaximizeWindow {
        /// Window to maximize.
        window_id: WindowId,
    },
    /// Restore a minimized or maximized window.
    RestoreWindow {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Maximize, or restore when already maximized (titlebar double click, control button).
    ToggleMaximize {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Taskbar button: minimize when visible, restore when minimized.
    ToggleTaskbarWindow {
        /// Window associated with the taskbar button.
        window_id: WindowId,
    },
    /// Navigate a window to any location (address-bar breadcrumbs).
    NavigateTo {
        /// Window to navigate.
        window_id: WindowId,
        /// New location.
        location: TreeLocation,
    },
    /// Open a child of the window's current location in place. Containers are navigated into
    /// and files replace the listing with their viewer.
    OpenChild {
        /// Window showing the parent.
        window_id: WindowId,
        /// Child key.
        key: String,
    },
    /// Navigate a window to its parent location.
    NavigateUp {
        /// Window to navigate.
        window_id: WindowId,
    },
    /// Re-resolve the current location (and refetch a profile).
    Refresh {
        /// Window to refresh.
        window_id: WindowId,
    },
    /// Select (or clear) a folder entry.
    SelectItem {
        /// Window owning the listing.
        window_id: WindowId,
        /// Selected child key.
        key: Option<String>,
    },
    /// Begin dragging a window by its titlebar.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position in client coordinates.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Pointer position in client coordinates.
        pointer: PointerPosition,
    },
    /// End the active window drag.
    EndMove,
    /// Cache a new viewport scale after a browser resize.
    SetViewportScale {
        /// Browser-to-desktop scale factor.
        scale: f64,
    },
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu and any navigation dropdown.
    CloseMenus,
    /// Toggle a navigation-strip dropdown.
    ToggleNavMenu {
        /// Root key of the dropdown.
        root: String,
    },
    /// Select (or clear) a desktop shortcut.
    SelectShortcut {
        /// Shortcut index.
        index: Option<usize>,
    },
    /// Raise a sticky note above the others.
    FocusSticky {
        /// Sticky note id.
        id: u32,
    },
    /// Remove a sticky note.
    CloseSticky {
        /// Sticky note id.
        id: u32,
    },
    /// Completion of a dog-profile fetch.
    DogProfileLoaded {
        /// Window that requested the profile.
        window_id: WindowId,
        /// Location the profile was requested for.
        location: TreeLocation,
        /// Fetch outcome.
        result: Result<DogProfile, DogProfileError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Push a history entry for the location, or clear the hash for `None`.
    UpdateUrl(Option<TreeLocation>),
    /// Fetch the dog profile named by the location's last key.
    LoadDogProfile {
        /// Window waiting for the profile.
        window_id: WindowId,
        /// Profile location.
        location: TreeLocation,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for invalid actions (for example, referencing a missing window).
pub enum ReducerError {
    /// The target window id was not found in the current state.
    #[error("window not found")]
    WindowNotFound,
    /// A navigation target did not resolve in the content tree.
    #[error("location not found: {0}")]
    LocationNotFound(String),
}

impl From<ContentError> for ReducerError {
    fn from(err: ContentError) -> Self {
        match err {
            ContentError::EmptyPath => Self::LocationNotFound(String::new()),
            ContentError::NotFound(path) => Self::LocationNotFound(path),
        }
    }
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// This function is the authoritative state transition engine for window management, the
/// path registry and desktop chrome state. Content lookups go through
/// [`ContentCatalog::builtin`].
///
/// # Errors
///
/// Returns [`ReducerError::WindowNotFound`] when an action references a window that is not
/// present and [`ReducerError::LocationNotFound`] when an in-window navigation target does not
/// resolve. The state is left unchanged in both cases.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let catalog = ContentCatalog::builtin();
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenPath { path } => {
            let location = resolve_launch_target(catalog, &path)
                .map_err(|_| ReducerError::LocationNotFound(path))?;
            open_location(state, catalog, location, LaunchOrigin::Launcher, &mut effects);
        }
        DesktopAction::OpenLocation { location, origin } => {
            open_location(state, catalog, location, origin, &mut effects);
        }
        DesktopAction::HashChanged { hash } => {
            let Some(path) = hash_to_path(&hash) else {
                return Ok(effects);
            };
            let location = resolve_launch_target(catalog, &path)
                .map_err(|_| ReducerError::LocationNotFound(path))?;
            open_location(state, catalog, location, LaunchOrigin::HashChange, &mut effects);
        }
        DesktopAction::CloseWindow { window_id } => {
            let before_len = state.windows.len();
            state.windows.retain(|w| w.id != window_id);
            if state.windows.len() == before_len {
                return Err(ReducerError::WindowNotFound);
            }
            state.registry.unregister(window_id);
            if interaction
                .dragging
                .is_some_and(|session| session.window_id == window_id)
            {
                interaction.dragging = None;
            }
            normalize_window_stack(state);
            let next = state.top_window().map(|w| w.location.clone());
            effects.push(RuntimeEffect::UpdateUrl(next));
        }
        DesktopAction::FocusWindow { window_id } => {
            focus_existing(state, window_id)?;
            close_menus(state);
        }
        DesktopAction::MinimizeWindow { window_id } => {
            let window = find_window_mut(state, window_id)?;
            window.minimized = true;
            window.is_focused = false;
        }
        DesktopAction::MaximizeWindow { window_id } => {
            maximize(state, window_id)?;
        }
        DesktopAction::RestoreWindow { window_id } => {
            restore(state, window_id)?;
        }
        DesktopAction::ToggleMaximize { window_id } => {
            if find_window_mut(state, window_id)?.maximized {
                restore(state, window_id)?;
            } else {
                maximize(state, window_id)?;
            }
        }
        DesktopAction::ToggleTaskbarWindow { window_id } => {
            let minimized = find_window_mut(state, window_id)?.minimized;
            let action = if minimized {
                DesktopAction::RestoreWindow { window_id }
            } else {
                DesktopAction::MinimizeWindow { window_id }
            };
            effects.extend(reduce_desktop(state, interaction, action)?);
        }
        DesktopAction::NavigateTo {
            window_id,
            location,
        } => {
            navigate_window(state, catalog, window_id, location, &mut effects)?;
        }
        DesktopAction::OpenChild { window_id, key } => {
            let location = find_window_mut(state, window_id)?.location.child(key);
            navigate_window(state, catalog, window_id, location, &mut effects)?;
        }
        DesktopAction::NavigateUp { window_id } => {
            let parent = find_window_mut(state, window_id)?.location.parent();
            if let Some(location) = parent {
                navigate_window(state, catalog, window_id, location, &mut effects)?;
            }
        }
        DesktopAction::Refresh { window_id } => {
            let window = find_window_mut(state, window_id)?;
            let location = window.location.clone();
            let node = catalog
                .resolve(&location)
                .cloned()
                .unwrap_or_else(|_| ContentNode::invalid_location(location.last_key()));
            window.show_node(location.clone(), &node);
            if window.view == WindowView::Profile {
                effects.push(RuntimeEffect::LoadDogProfile {
                    window_id,
                    location,
                });
            }
        }
        DesktopAction::SelectItem { window_id, key } => {
            find_window_mut(state, window_id)?.selected_item = key;
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            let window = find_window_mut(state, window_id)?;
            let rect_start = window.rect;
            let maximized = window.maximized;
            focus_window_internal(state, window_id);
            close_menus(state);
            if !maximized {
                interaction.dragging = Some(DragSession {
                    window_id,
                    pointer_start: pointer.unscaled(state.viewport_scale),
                    rect_start,
                });
            }
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging {
                let pointer = pointer.unscaled(state.viewport_scale);
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                let window = find_window_mut(state, session.window_id)?;
                if !window.maximized {
                    window.rect = dragged_rect(session.rect_start, dx, dy);
                }
            }
        }
        DesktopAction::EndMove => {
            interaction.dragging = None;
        }
        DesktopAction::SetViewportScale { scale } => {
            if scale.is_finite() && scale > 0.0 {
                state.viewport_scale = scale;
            }
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
            state.open_nav_menu = None;
        }
        DesktopAction::CloseMenus => {
            close_menus(state);
        }
        DesktopAction::ToggleNavMenu { root } => {
            state.start_menu_open = false;
            state.open_nav_menu = if state.open_nav_menu.as_deref() == Some(root.as_str()) {
                None
            } else {
                Some(root)
            };
        }
        DesktopAction::SelectShortcut { index } => {
            state.selected_shortcut = index;
        }
        DesktopAction::FocusSticky { id } => {
            for note in &mut state.stickies {
                note.z_index = if note.id == id { 2 } else { 1 };
            }
        }
        DesktopAction::CloseSticky { id } => {
            state.stickies.retain(|note| note.id != id);
        }
        DesktopAction::DogProfileLoaded {
            window_id,
            location,
            result,
        } => {
            let Some(window) = state.windows.iter_mut().find(|w| w.id == window_id) else {
                return Ok(effects);
            };
            if window.location != location || window.view != WindowView::Profile {
                return Ok(effects);
            }
            window.profile = Some(match result {
                Ok(profile) => ProfileLoad::Loaded(profile),
                Err(err) => ProfileLoad::Failed(profile_error_message(&err)),
            });
        }
    }

    normalize_window_stack(state);
    Ok(effects)
}

/// Inline text rendered for a failed profile load.
pub fn profile_error_message(err: &DogProfileError) -> String {
    format!("{PROFILE_ERROR_PREFIX}: {err}")
}

fn open_location(
    state: &mut DesktopState,
    catalog: &ContentCatalog,
    location: TreeLocation,
    origin: LaunchOrigin,
    effects: &mut Vec<RuntimeEffect>,
) {
    close_menus(state);
    state.selected_shortcut = None;

    if let Some(existing) = state.registry.lookup(&location) {
        focus_window_internal(state, existing);
        return;
    }

    let node = match catalog.resolve(&location) {
        Ok(node) => node.clone(),
        Err(err) => {
            leptos::logging::warn!("invalid path {location}: {err}");
            ContentNode::invalid_location(location.last_key())
        }
    };

    let window_id = next_window_id(state);
    let mut record = WindowRecord {
        id: window_id,
        location: location.clone(),
        title: String::new(),
        icon: String::new(),
        kind: node.kind,
        view: WindowView::Folder,
        rect: initial_window_rect(state.windows.len()),
        restore_rect: None,
        z_index: 0,
        is_focused: false,
        minimized: false,
        maximized: false,
        selected_item: None,
        profile: None,
    };
    record.show_node(location.clone(), &node);
    let loads_profile = record.view == WindowView::Profile;

    state.windows.push(record);
    state.registry.register(location.clone(), window_id);
    focus_window_internal(state, window_id);

    if origin == LaunchOrigin::Launcher {
        effects.push(RuntimeEffect::UpdateUrl(Some(location.clone())));
    }
    if loads_profile {
        effects.push(RuntimeEffect::LoadDogProfile {
            window_id,
            location,
        });
    }
}

fn navigate_window(
    state: &mut DesktopState,
    catalog: &ContentCatalog,
    window_id: WindowId,
    location: TreeLocation,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), ReducerError> {
    find_window_mut(state, window_id)?;
    let node = catalog.resolve(&location)?.clone();

    match state.registry.lookup(&location) {
        Some(owner) if owner == window_id => {
            focus_window_internal(state, window_id);
            return Ok(());
        }
        Some(owner) => {
            focus_window_internal(state, owner);
            return Ok(());
        }
        None => {}
    }

    let window = find_window_mut(state, window_id)?;
    window.show_node(location.clone(), &node);
    let loads_profile = window.view == WindowView::Profile;
    state.registry.rekey(window_id, location.clone());
    focus_window_internal(state, window_id);

    effects.push(RuntimeEffect::UpdateUrl(Some(location.clone())));
    if loads_profile {
        effects.push(RuntimeEffect::LoadDogProfile {
            window_id,
            location,
        });
    }
    Ok(())
}

fn maximize(state: &mut DesktopState, window_id: WindowId) -> Result<(), ReducerError> {
    let window = find_window_mut(state, window_id)?;
    if !window.maximized {
        window.restore_rect = Some(window.rect);
    }
    window.rect = maximized_rect();
    window.maximized = true;
    window.minimized = false;
    focus_window_internal(state, window_id);
    Ok(())
}

fn restore(state: &mut DesktopState, window_id: WindowId) -> Result<(), ReducerError> {
    let window = find_window_mut(state, window_id)?;
    if window.maximized {
        if let Some(restore_rect) = window.restore_rect.take() {
            window.rect = restore_rect;
        }
        window.maximized = false;
    }
    window.minimized = false;
    focus_window_internal(state, window_id);
    Ok(())
}

fn focus_existing(state: &mut DesktopState, window_id: WindowId) -> Result<(), ReducerError> {
    if focus_window_internal(state, window_id) {
        Ok(())
    } else {
        Err(ReducerError::WindowNotFound)
    }
}

fn close_menus(state: &mut DesktopState) {
    state.start_menu_open = false;
    state.open_nav_menu = None;
}

fn next_window_id(state: &mut DesktopState) -> WindowId {
    let id = WindowId(state.next_window_id);
    state.next_window_id = state.next_window_id.saturating_add(1);
    id
}

fn find_window_mut(
    state: &mut DesktopState,
    window_id: WindowId,
) -> Result<&mut WindowRecord, ReducerError> {
    state
        .windows
        .iter_mut()
        .find(|w| w.id == window_id)
        .ok_or(ReducerError::WindowNotFound)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{WindowRect, DESKTOP_HEIGHT, TASKBAR_HEIGHT};

    fn session() -> (DesktopState, InteractionState) {
        (
            DesktopState::from_catalog(ContentCatalog::builtin()),
            InteractionState::default(),
        )
    }

    fn run(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        action: DesktopAction,
    ) -> Vec<RuntimeEffect> {
        reduce_desktop(state, interaction, action).expect("reduce")
    }

    fn open(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        path: &str,
    ) -> (WindowId, Vec<RuntimeEffect>) {
        let effects = run(
            state,
            interaction,
            DesktopAction::OpenPath {
                path: path.to_string(),
            },
        );
        let id = state.focused_window_id().expect("focused window");
        (id, effects)
    }

    fn loc(path: &str) -> TreeLocation {
        TreeLocation::parse(path).expect("location")
    }

    #[test]
    fn open_path_creates_registers_and_pushes_url() {
        let (mut state, mut interaction) = session();
        let (id, effects) = open(&mut state, &mut interaction, "my-computer");

        let window = state.window(id).expect("window");
        assert_eq!(window.location, loc("ourKennel"));
        assert_eq!(window.title, "Our Kennel");
        assert_eq!(window.view, WindowView::Folder);
        assert_eq!(state.registry.lookup(&loc("ourKennel")), Some(id));
        assert_eq!(effects, vec![RuntimeEffect::UpdateUrl(Some(loc("ourKennel")))]);
    }

    #[test]
    fn doubled_dots_open_the_real_folder_and_push_a_reopenable_hash() {
        let (mut state, mut interaction) = session();
        let (id, effects) = open(&mut state, &mut interaction, "ourKennel..aboutUs");

        let window = state.window(id).expect("window");
        assert_eq!(window.location, loc("ourKennel.aboutUs"));
        assert_eq!(window.title, "About Us (C:)");
        assert_eq!(
            effects,
            vec![RuntimeEffect::UpdateUrl(Some(loc("ourKennel.aboutUs")))]
        );

        let hash = crate::router::location_to_hash(&window.location);
        assert_eq!(hash, "#our-kennel#about-us");
        assert_eq!(hash_to_path(&hash).as_deref(), Some("ourKennel.aboutUs"));
        assert_eq!(
            ContentCatalog::builtin()
                .resolve_path("ourKennel.aboutUs.")
                .map(|node| node.title.as_str()),
            Ok("About Us (C:)")
        );
    }

    #[test]
    fn opening_the_same_path_twice_focuses_the_existing_window() {
        let (mut state, mut interaction) = session();
        let (first, _) = open(&mut state, &mut interaction, "ourKennel");
        let (second, _) = open(&mut state, &mut interaction, "ourDogs");
        assert_eq!(state.focused_window_id(), Some(second));

        let effects = run(
            &mut state,
            &mut interaction,
            DesktopAction::OpenPath {
                path: "my-computer".to_string(),
            },
        );

        assert!(effects.is_empty());
        assert_eq!(state.windows.len(), 2);
        assert_eq!(state.registry.len(), 2);
        assert_eq!(state.focused_window_id(), Some(first));
        assert_eq!(state.windows.last().map(|w| w.id), Some(first));
    }

    #[test]
    fn new_windows_cascade_from_the_centre() {
        let (mut state, mut interaction) = session();
        let (first, _) = open(&mut state, &mut interaction, "ourKennel");
        let (second, _) = open(&mut state, &mut interaction, "ourDogs");
        let a = state.window(first).expect("first").rect;
        let b = state.window(second).expect("second").rect;
        assert_eq!((b.x - a.x, b.y - a.y), (20, 20));
    }

    #[test]
    fn hash_change_opens_without_pushing_and_focuses_existing() {
        let (mut state, mut interaction) = session();
        let effects = run(
            &mut state,
            &mut interaction,
            DesktopAction::HashChanged {
                hash: "#my-computer".to_string(),
            },
        );
        assert!(effects.is_empty());
        let id = state.registry.lookup(&loc("ourKennel")).expect("registered");

        open(&mut state, &mut interaction, "ourDogs");
        run(
            &mut state,
            &mut interaction,
            DesktopAction::HashChanged {
                hash: "#our-kennel".to_string(),
            },
        );
        assert_eq!(state.windows.len(), 2);
        assert_eq!(state.focused_window_id(), Some(id));
    }

    #[test]
    fn empty_hash_is_ignored() {
        let (mut state, mut interaction) = session();
        let before = state.clone();
        let effects = run(
            &mut state,
            &mut interaction,
            DesktopAction::HashChanged {
                hash: String::new(),
            },
        );
        assert!(effects.is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn unresolvable_path_opens_invalid_location_folder() {
        let (mut state, mut interaction) = session();
        let (id, _) = open(&mut state, &mut interaction, "ourKennel.nowhere");
        let window = state.window(id).expect("window");
        assert_eq!(window.title, "Invalid Location");
        assert_eq!(window.icon, "📁");
        assert_eq!(window.view, WindowView::Folder);
        assert_eq!(state.registry.lookup(&loc("ourKennel.nowhere")), Some(id));
    }

    #[test]
    fn closing_last_window_clears_the_hash() {
        let (mut state, mut interaction) = session();
        let (id, _) = open(&mut state, &mut interaction, "ourKennel");
        let effects = run(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: id },
        );
        assert_eq!(effects, vec![RuntimeEffect::UpdateUrl(None)]);
        assert!(state.windows.is_empty());
        assert!(state.registry.is_empty());
    }

    #[test]
    fn closing_a_window_pushes_the_remaining_focused_path() {
        let (mut state, mut interaction) = session();
        open(&mut state, &mut interaction, "ourKennel");
        let (dogs, _) = open(&mut state, &mut interaction, "ourDogs");
        let effects = run(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: dogs },
        );
        assert_eq!(effects, vec![RuntimeEffect::UpdateUrl(Some(loc("ourKennel")))]);
        assert_eq!(state.registry.lookup(&loc("ourDogs")), None);
    }

    #[test]
    fn closing_unknown_window_is_an_error() {
        let (mut state, mut interaction) = session();
        assert_eq!(
            reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::CloseWindow {
                    window_id: WindowId(99)
                },
            ),
            Err(ReducerError::WindowNotFound)
        );
    }

    #[test]
    fn in_window_navigation_rekeys_the_registry() {
        let (mut state, mut interaction) = session();
        let (id, _) = open(&mut state, &mut interaction, "ourKennel");
        run(
            &mut state,
            &mut interaction,
            DesktopAction::SelectItem {
                window_id: id,
                key: Some("aboutUs".to_string()),
            },
        );
        let effects = run(
            &mut state,
            &mut interaction,
            DesktopAction::OpenChild {
                window_id: id,
                key: "aboutUs".to_string(),
            },
        );

        let window = state.window(id).expect("window");
        assert_eq!(window.title, "About Us (C:)");
        assert_eq!(window.selected_item, None);
        assert_eq!(state.registry.lookup(&loc("ourKennel")), None);
        assert_eq!(state.registry.lookup(&loc("ourKennel.aboutUs")), Some(id));
        assert_eq!(
            effects,
            vec![RuntimeEffect::UpdateUrl(Some(loc("ourKennel.aboutUs")))]
        );

        run(
            &mut state,
            &mut interaction,
            DesktopAction::NavigateUp { window_id: id },
        );
        assert_eq!(state.registry.lookup(&loc("ourKennel")), Some(id));
    }

    #[test]
    fn files_open_in_place() {
        let (mut state, mut interaction) = session();
        let (id, _) = open(&mut state, &mut interaction, "ourKennel.aboutUs");
        run(
            &mut state,
            &mut interaction,
            DesktopAction::OpenChild {
                window_id: id,
                key: "ourStory".to_string(),
            },
        );
        let window = state.window(id).expect("window");
        assert_eq!(window.view, WindowView::Notepad);
        assert_eq!(window.title, "Our Story");
        assert_eq!(state.windows.len(), 1);
    }

    #[test]
    fn failed_navigation_keeps_the_current_view() {
        let (mut state, mut interaction) = session();
        let (id, _) = open(&mut state, &mut interaction, "ourKennel");
        let before = state.clone();
        let result = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenChild {
                window_id: id,
                key: "missing".to_string(),
            },
        );
        assert_eq!(
            result,
            Err(ReducerError::LocationNotFound("ourKennel.missing".to_string()))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn navigating_onto_an_open_location_focuses_its_window() {
        let (mut state, mut interaction) = session();
        let (about, _) = open(&mut state, &mut interaction, "ourKennel.aboutUs");
        let (kennel, _) = open(&mut state, &mut interaction, "ourKennel");
        let effects = run(
            &mut state,
            &mut interaction,
            DesktopAction::OpenChild {
                window_id: kennel,
                key: "aboutUs".to_string(),
            },
        );
        assert!(effects.is_empty());
        assert_eq!(state.focused_window_id(), Some(about));
        assert_eq!(state.window(kennel).map(|w| w.title.as_str()), Some("Our Kennel"));
    }

    #[test]
    fn profile_windows_request_a_fetch_and_accept_results() {
        let (mut state, mut interaction) = session();
        let (id, effects) = open(&mut state, &mut interaction, "ourDogs.packOfPaws.example");
        let location = loc("ourDogs.packOfPaws.example");
        assert_eq!(
            effects,
            vec![
                RuntimeEffect::UpdateUrl(Some(location.clone())),
                RuntimeEffect::LoadDogProfile {
                    window_id: id,
                    location: location.clone(),
                },
            ]
        );
        assert_eq!(
            state.window(id).and_then(|w| w.profile.clone()),
            Some(ProfileLoad::Loading)
        );

        run(
            &mut state,
            &mut interaction,
            DesktopAction::DogProfileLoaded {
                window_id: id,
                location,
                result: Err(DogProfileError::NotFound),
            },
        );
        assert_eq!(
            state.window(id).and_then(|w| w.profile.clone()),
            Some(ProfileLoad::Failed(
                "Error loading dog profile: Dog profile not found".to_string()
            ))
        );
    }

    #[test]
    fn late_profile_results_are_dropped() {
        let (mut state, mut interaction) = session();
        let (id, _) = open(&mut state, &mut interaction, "ourDogs.packOfPaws.dogB");
        run(
            &mut state,
            &mut interaction,
            DesktopAction::NavigateUp { window_id: id },
        );
        let before = state.clone();
        run(
            &mut state,
            &mut interaction,
            DesktopAction::DogProfileLoaded {
                window_id: id,
                location: loc("ourDogs.packOfPaws.dogB"),
                result: Err(DogProfileError::NotFound),
            },
        );
        assert_eq!(state, before);

        run(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: id },
        );
        let effects = run(
            &mut state,
            &mut interaction,
            DesktopAction::DogProfileLoaded {
                window_id: id,
                location: loc("ourDogs.packOfPaws.dogB"),
                result: Err(DogProfileError::NotFound),
            },
        );
        assert!(effects.is_empty());
    }

    #[test]
    fn drag_snaps_to_left_edge_and_respects_viewport_scale() {
        let (mut state, mut interaction) = session();
        let (id, _) = open(&mut state, &mut interaction, "ourKennel");
        run(
            &mut state,
            &mut interaction,
            DesktopAction::SetViewportScale { scale: 0.5 },
        );
        let start = state.window(id).expect("window").rect;
        assert_eq!(start.x, 312);

        run(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: id,
                pointer: PointerPosition { x: 200, y: 100 },
            },
        );
        // 150 client px at half scale is 300 logical px: 312 - 300 = 12, inside the snap band.
        run(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 50, y: 100 },
            },
        );
        assert_eq!(state.window(id).expect("window").rect.x, 0);

        run(&mut state, &mut interaction, DesktopAction::EndMove);
        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn maximized_windows_do_not_start_a_drag() {
        let (mut state, mut interaction) = session();
        let (id, _) = open(&mut state, &mut interaction, "ourKennel");
        run(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize { window_id: id },
        );
        run(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: id,
                pointer: PointerPosition { x: 10, y: 10 },
            },
        );
        assert_eq!(interaction.dragging, None);
    }

    #[test]
    fn maximize_round_trip_restores_geometry() {
        let (mut state, mut interaction) = session();
        let (id, _) = open(&mut state, &mut interaction, "ourKennel");
        let original = state.window(id).expect("window").rect;

        run(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize { window_id: id },
        );
        let window = state.window(id).expect("window");
        assert!(window.maximized);
        assert_eq!(
            window.rect,
            WindowRect {
                x: 0,
                y: TASKBAR_HEIGHT,
                w: 1024,
                h: DESKTOP_HEIGHT - TASKBAR_HEIGHT
            }
        );

        run(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleMaximize { window_id: id },
        );
        let window = state.window(id).expect("window");
        assert!(!window.maximized);
        assert_eq!(window.rect, original);
    }

    #[test]
    fn taskbar_toggle_minimizes_and_restores() {
        let (mut state, mut interaction) = session();
        let (id, _) = open(&mut state, &mut interaction, "ourKennel");

        run(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleTaskbarWindow { window_id: id },
        );
        let record = state.window(id).expect("window");
        assert!(record.minimized);
        assert!(!record.is_focused);

        run(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleTaskbarWindow { window_id: id },
        );
        let record = state.window(id).expect("window");
        assert!(!record.minimized);
        assert!(record.is_focused);
    }

    #[test]
    fn focus_keeps_a_single_focused_window_on_top() {
        let (mut state, mut interaction) = session();
        let (first, _) = open(&mut state, &mut interaction, "ourKennel");
        let (second, _) = open(&mut state, &mut interaction, "ourDogs");
        let effects = run(
            &mut state,
            &mut interaction,
            DesktopAction::FocusWindow { window_id: first },
        );
        assert!(effects.is_empty());
        assert_eq!(state.focused_window_id(), Some(first));
        assert_eq!(state.windows.iter().filter(|w| w.is_focused).count(), 1);
        assert_eq!(state.window(first).map(|w| w.z_index), Some(2));
        assert_eq!(state.window(second).map(|w| w.z_index), Some(1));
    }

    #[test]
    fn menus_are_mutually_exclusive_and_close_on_open() {
        let (mut state, mut interaction) = session();
        run(&mut state, &mut interaction, DesktopAction::ToggleStartMenu);
        assert!(state.start_menu_open);
        run(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleNavMenu {
                root: "ourDogs".to_string(),
            },
        );
        assert!(!state.start_menu_open);
        assert_eq!(state.open_nav_menu.as_deref(), Some("ourDogs"));
        open(&mut state, &mut interaction, "ourDogs.packOfPaws");
        assert_eq!(state.open_nav_menu, None);
    }

    #[test]
    fn sticky_notes_raise_and_close() {
        let (mut state, mut interaction) = session();
        let first = state.stickies[0].id;
        run(
            &mut state,
            &mut interaction,
            DesktopAction::FocusSticky { id: first },
        );
        assert_eq!(state.stickies[0].z_index, 2);
        assert!(state.stickies[1..].iter().all(|note| note.z_index == 1));
        run(
            &mut state,
            &mut interaction,
            DesktopAction::CloseSticky { id: first },
        );
        assert!(state.stickies.iter().all(|note| note.id != first));
    }
}
