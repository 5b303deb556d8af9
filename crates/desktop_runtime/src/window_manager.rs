//! Shared window-manager transition helpers used by the desktop reducer.

use crate::model::{
    DesktopState, WindowId, WindowRect, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH,
    DESKTOP_HEIGHT, DESKTOP_WIDTH, TASKBAR_HEIGHT,
};

/// Distance (in logical px) under which a dragged window snaps to a desktop edge.
pub const SNAP_DISTANCE: i32 = 20;
/// Offset applied per already-open window when cascading new windows.
pub const CASCADE_STEP: i32 = 20;

/// Focuses and raises `window_id`, ensuring it is the top/focused non-minimized window.
///
/// Returns `false` when the window does not exist.
pub fn focus_window_internal(state: &mut DesktopState, window_id: WindowId) -> bool {
    let Some(index) = state.windows.iter().position(|w| w.id == window_id) else {
        return false;
    };

    let already_focused_top = index + 1 == state.windows.len()
        && state
            .windows
            .get(index)
            .map(|w| w.is_focused && !w.minimized)
            .unwrap_or(false);
    if already_focused_top {
        return true;
    }

    for window in &mut state.windows {
        window.is_focused = false;
    }
    let mut window = state.windows.remove(index);
    window.is_focused = true;
    window.minimized = false;
    state.windows.push(window);
    normalize_window_stack(state);
    true
}

/// Normalizes z-index ordering and focus invariants for all managed windows.
pub fn normalize_window_stack(state: &mut DesktopState) {
    let mut has_focused = false;
    for (idx, window) in state.windows.iter_mut().enumerate() {
        window.z_index = (idx + 1) as u32;
        if window.minimized {
            window.is_focused = false;
        }
        if window.is_focused {
            if has_focused {
                window.is_focused = false;
            } else {
                has_focused = true;
            }
        }
    }

    if !has_focused {
        if let Some(last_non_minimized) = state.windows.iter_mut().rev().find(|w| !w.minimized) {
            last_non_minimized.is_focused = true;
        }
    }
}

/// Geometry for a new window: centred on the desktop, cascaded by `open_windows`.
pub fn initial_window_rect(open_windows: usize) -> WindowRect {
    let offset = CASCADE_STEP * open_windows as i32;
    let centre_x = (DESKTOP_WIDTH - DEFAULT_WINDOW_WIDTH) / 2;
    let centre_y = (DESKTOP_HEIGHT - DEFAULT_WINDOW_HEIGHT) / 2;
    WindowRect {
        x: (centre_x + offset).max(0),
        y: (centre_y + offset).max(TASKBAR_HEIGHT),
        w: DEFAULT_WINDOW_WIDTH,
        h: DEFAULT_WINDOW_HEIGHT,
    }
}

/// Rectangle applied to maximized windows: the whole desktop below the taskbar.
pub fn maximized_rect() -> WindowRect {
    WindowRect {
        x: 0,
        y: TASKBAR_HEIGHT,
        w: DESKTOP_WIDTH,
        h: DESKTOP_HEIGHT - TASKBAR_HEIGHT,
    }
}

/// Applies a drag delta to `start`, snapping to edges within [`SNAP_DISTANCE`] and keeping the
/// window inside the desktop below the taskbar.
pub fn dragged_rect(start: WindowRect, dx: i32, dy: i32) -> WindowRect {
    let min_x = 0;
    let max_x = (DESKTOP_WIDTH - start.w).max(min_x);
    let min_y = TASKBAR_HEIGHT;
    let max_y = (DESKTOP_HEIGHT - start.h).max(min_y);

    let moved = start.offset(dx, dy);
    let x = snap_axis(moved.x, min_x, max_x).clamp(min_x, max_x);
    let y = snap_axis(moved.y, min_y, max_y).clamp(min_y, max_y);
    WindowRect { x, y, ..start }
}

fn snap_axis(value: i32, min: i32, max: i32) -> i32 {
    let mut snapped = value;
    if (snapped - min).abs() < SNAP_DISTANCE {
        snapped = min;
    }
    if (snapped - max).abs() < SNAP_DISTANCE {
        snapped = max;
    }
    snapped
}

/// Scale that fits the logical desktop into a `width` x `height` browser viewport.
pub fn viewport_scale_for(width: f64, height: f64) -> f64 {
    let scale = (width / f64::from(DESKTOP_WIDTH)).min(height / f64::from(DESKTOP_HEIGHT));
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    }
}
