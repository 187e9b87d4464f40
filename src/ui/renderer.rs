//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view
//! model computation and delegation to UI components.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Computes the view model from application state and delegates to the
/// component layer. The consumed contract is: an ordered record window plus
/// a count, or an explicit empty / loading / error display mode; the
/// alphabet strip's single active flag; and, when requested, one record for
/// the detail projection.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `rows` - Pane height in rows
/// * `cols` - Pane width in columns
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    components::render_browser(&viewmodel, &state.theme, cols, rows);
}
