//! Shared shell, navigation, data-display and control primitives.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

mod controls;
mod data_display;
mod navigation;
mod shell;

pub use controls::{Button, TextArea};
pub use data_display::{FieldRow, FieldSet, StatusText};
pub use navigation::{
    MenuBar, MenuBarItem, MenuItem, MenuSeparator, MenuSurface, Tab, TabList, TabPanel,
};
pub use shell::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer, Taskbar,
    TaskbarButton, TaskbarSection, WindowBody, WindowControlButton, WindowControls, WindowFrame,
    WindowTitle, WindowTitleBar,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Visual button variants.
pub enum ButtonVariant {
    /// Raised bevelled button.
    #[default]
    Standard,
    /// Flat button that only shows a bevel on hover or press.
    Quiet,
}

impl ButtonVariant {
    fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Quiet => "quiet",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_class_is_appended_only_when_present() {
        assert_eq!(merge_layout_class("ui-button", None), "ui-button");
        assert_eq!(merge_layout_class("ui-button", Some("")), "ui-button");
        assert_eq!(
            merge_layout_class("ui-button", Some("start-button")),
            "ui-button start-button"
        );
    }

    #[test]
    fn tokens_are_stable() {
        assert_eq!(bool_token(true), "true");
        assert_eq!(bool_token(false), "false");
        assert_eq!(ButtonVariant::default().token(), "standard");
        assert_eq!(ButtonVariant::Quiet.token(), "quiet");
    }
}
