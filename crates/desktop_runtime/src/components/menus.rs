use system_ui::{Button, ButtonVariant, MenuItem, MenuSeparator, MenuSurface};

use super::{
    a11y::{focus_first_menu_item, handle_menu_roving_keydown},
    *,
};
use crate::{
    content::{ContentCatalog, ContentNode},
    location::TreeLocation,
    reducer::LaunchOrigin,
};

const START_MENU_ID: &str = "desktop-start-menu";

#[derive(Debug, Clone, PartialEq, Eq)]
struct StartMenuEntry {
    alias: String,
    title: String,
    icon: String,
}

/// One entry per menu alias whose root exists, in catalog order.
fn start_menu_entries(catalog: &ContentCatalog) -> Vec<StartMenuEntry> {
    catalog
        .aliases
        .iter()
        .filter_map(|alias| {
            let root = catalog.root(&alias.root)?;
            Some(StartMenuEntry {
                alias: alias.id.clone(),
                title: root.title.clone(),
                icon: root.icon.clone(),
            })
        })
        .collect()
}

/// Navigation label: the title without its parenthesised drive suffix.
fn nav_label(title: &str) -> &str {
    title.split(" (").next().unwrap_or(title)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct NavMenuItem {
    target: TreeLocation,
    icon: String,
    label: String,
}

/// Dropdown entries for a root: one per direct child, in catalog order.
fn nav_menu_items(root: &ContentNode) -> Vec<NavMenuItem> {
    root.children
        .iter()
        .map(|child| NavMenuItem {
            target: TreeLocation::root(root.key.clone()).child(child.key.clone()),
            icon: child.icon.clone(),
            label: nav_label(&child.title).to_string(),
        })
        .collect()
}

fn nav_menu_id(root_key: &str) -> String {
    format!("nav-menu-{root_key}")
}

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let was_open = create_rw_signal(false);

    create_effect(move |_| {
        let is_open = state.get().start_menu_open;
        if is_open && !was_open.get_untracked() {
            was_open.set(true);
            let _ = focus_first_menu_item(START_MENU_ID);
        } else if !is_open && was_open.get_untracked() {
            was_open.set(false);
        }
    });

    let entries = start_menu_entries(ContentCatalog::builtin());

    view! {
        <Show when=move || state.get().start_menu_open fallback=|| ()>
            <StartMenuPanel entries=entries.clone() />
        </Show>
    }
}

#[component]
fn StartMenuPanel(entries: Vec<StartMenuEntry>) -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <div
            class="start-menu-host"
            on:mousedown=move |ev| ev.stop_propagation()
            on:keydown=move |ev| {
                let _ = handle_menu_roving_keydown(&ev, START_MENU_ID);
            }
        >
            <MenuSurface
                id=START_MENU_ID
                role="menu"
                aria_label="Start menu"
                ui_slot="start-menu"
            >
                <div class="start-menu-header">
                    <div class="account-image-wrapper" aria-hidden="true">"🐶"</div>
                    <h1 class="account-name">"Visitor"</h1>
                </div>
                <div class="start-menu-body">
                    <div class="start-menu-favorites">
                        <MenuItem layout_class="intent-item" aria_label="Internet" disabled=true>
                            <span class="icon" aria-hidden="true">"🌐"</span>
                            <span class="label">
                                <span class="intent">"Internet"</span>
                                <span class="program">"Internet Explorer"</span>
                            </span>
                        </MenuItem>
                        <MenuItem layout_class="intent-item" aria_label="E-mail" disabled=true>
                            <span class="icon" aria-hidden="true">"📧"</span>
                            <span class="label">
                                <span class="intent">"E-mail"</span>
                                <span class="program">"Outlook Express"</span>
                            </span>
                        </MenuItem>
                        <MenuSeparator />
                        <MenuItem layout_class="all-programs-button" disabled=true>
                            "All Programs"
                        </MenuItem>
                    </div>
                    <div class="start-menu-shortcuts">
                        {entries
                            .into_iter()
                            .map(|StartMenuEntry { alias, title, icon }| {
                                view! {
                                    <MenuItem
                                        layout_class="my-item"
                                        aria_label=title.clone()
                                        on_click=Callback::new(move |_| {
                                            runtime.dispatch_action(DesktopAction::OpenPath {
                                                path: alias.clone(),
                                            });
                                        })
                                    >
                                        <span class="icon" aria-hidden="true">{icon}</span>
                                        <span class="menu-link">{title}</span>
                                    </MenuItem>
                                }
                            })
                            .collect_view()}
                        <MenuSeparator />
                        <MenuItem aria_label="Help and Support" disabled=true>
                            <span class="icon" aria-hidden="true">"❓"</span>
                            <span class="label">"Help and Support"</span>
                        </MenuItem>
                    </div>
                </div>
                <div class="start-menu-footer">
                    <Button
                        layout_class="log-off-button"
                        variant=ButtonVariant::Quiet
                        on_click=Callback::new(move |_| {
                            runtime.dispatch_action(DesktopAction::CloseMenus);
                        })
                    >
                        <span class="icon" aria-hidden="true">"🔒"</span>
                        <span>"Log Off"</span>
                    </Button>
                </div>
            </MenuSurface>
        </div>
    }
}

#[component]
pub(super) fn NavStrip() -> impl IntoView {
    view! {
        <div class="nav-strip" role="menubar" aria-label="Kennel sections">
            {ContentCatalog::builtin()
                .roots
                .iter()
                .map(|root| view! { <NavDropdown root=root.clone() /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn NavDropdown(root: ContentNode) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let menu_id = nav_menu_id(&root.key);
    let open = {
        let root_key = root.key.clone();
        Signal::derive(move || state.get().open_nav_menu.as_deref() == Some(root_key.as_str()))
    };
    let toggle = {
        let root_key = root.key.clone();
        Callback::new(move |_| {
            runtime.dispatch_action(DesktopAction::ToggleNavMenu {
                root: root_key.clone(),
            });
        })
    };
    let button_id = format!("{}-dropdown", root.key);
    let icon = root.icon.clone();
    let label = nav_label(&root.title).to_string();
    let menu_label = root.title.clone();
    let items = nav_menu_items(&root);

    view! {
        <div class="nav-dropdown">
            <Button
                id=button_id
                role="menuitem"
                aria_haspopup="menu"
                aria_controls=menu_id.clone()
                aria_expanded=open
                pressed=open
                on_click=toggle
            >
                <span class="menu-icon" aria-hidden="true">{icon}</span>
                {label}
            </Button>
            <Show when=move || open.get() fallback=|| ()>
                <NavDropdownMenu
                    menu_id=menu_id.clone()
                    aria_label=menu_label.clone()
                    items=items.clone()
                />
            </Show>
        </div>
    }
}

#[component]
fn NavDropdownMenu(menu_id: String, aria_label: String, items: Vec<NavMenuItem>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let keydown_menu_id = menu_id.clone();

    view! {
        <div
            class="nav-dropdown-menu"
            on:keydown=move |ev| {
                let _ = handle_menu_roving_keydown(&ev, &keydown_menu_id);
            }
        >
            <MenuSurface id=menu_id role="menu" aria_label=aria_label>
                {items
                    .into_iter()
                    .map(|NavMenuItem { target, icon, label }| {
                        view! {
                            <MenuItem
                                aria_label=label.clone()
                                on_click=Callback::new(move |_| {
                                    runtime.dispatch_action(DesktopAction::OpenLocation {
                                        location: target.clone(),
                                        origin: LaunchOrigin::Launcher,
                                    });
                                })
                            >
                                <span class="menu-icon" aria-hidden="true">{icon}</span>
                                {label}
                            </MenuItem>
                        }
                    })
                    .collect_view()}
            </MenuSurface>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn start_menu_lists_every_alias_with_its_root() {
        let entries = start_menu_entries(ContentCatalog::builtin());
        let aliases: Vec<&str> = entries.iter().map(|entry| entry.alias.as_str()).collect();
        assert_eq!(
            aliases,
            vec![
                "my-computer",
                "my-documents",
                "my-pictures",
                "my-music",
                "control-panel"
            ]
        );
        let kennel = ContentCatalog::builtin().root("ourKennel").expect("root");
        assert_eq!(entries[0].title, kennel.title);
        assert_eq!(entries[0].icon, kennel.icon);
    }

    #[test]
    fn nav_labels_drop_the_drive_suffix() {
        assert_eq!(nav_label("Services (D:)"), "Services");
        assert_eq!(nav_label("Our Kennel"), "Our Kennel");
        assert_eq!(nav_menu_id("ourDogs"), "nav-menu-ourDogs");
    }

    #[test]
    fn nav_menu_items_target_direct_children_of_the_root() {
        let kennel = ContentCatalog::builtin().root("ourKennel").expect("root");
        let items = nav_menu_items(kennel);
        assert_eq!(items.len(), kennel.children.len());
        let about = items
            .iter()
            .find(|item| item.target.last_key() == "aboutUs")
            .expect("about us entry");
        assert_eq!(about.target.to_string(), "ourKennel.aboutUs");
        assert!(items.iter().all(|item| item.target.depth() == 2));
        assert!(items.iter().all(|item| !item.label.contains(" (")));
    }
}
