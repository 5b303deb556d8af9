//! Shared UI primitive library for the kennel desktop shell and its content views.
//!
//! The crate owns reusable Leptos primitives and the stable `data-ui-*` DOM contract consumed by
//! the desktop stylesheet. Shell components compose these primitives instead of emitting ad hoc
//! control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    Button, ButtonVariant, DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot,
    DesktopWindowLayer, FieldRow, FieldSet, MenuBar, MenuBarItem, MenuItem, MenuSeparator,
    MenuSurface, StatusText, Tab, TabList, TabPanel, Taskbar, TaskbarButton, TaskbarSection,
    TextArea, WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle,
    WindowTitleBar,
};

/// Convenience imports for crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Button, ButtonVariant, DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot,
        DesktopWindowLayer, FieldRow, FieldSet, MenuBar, MenuBarItem, MenuItem, MenuSeparator,
        MenuSurface, StatusText, Tab, TabList, TabPanel, Taskbar, TaskbarButton, TaskbarSection,
        TextArea, WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle,
        WindowTitleBar,
    };
}
