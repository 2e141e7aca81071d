//! Presentational Leptos widgets for browser front-ends.
//!
//! The crate ships three leaf widgets, an application bar, a transition-driven
//! modal, and a floating-label select, plus the icon-button leaf the bar is
//! built from. Every widget composes its `class` list from the named style
//! fragments in [`styles`]; mount [`ThemeStyles`] once so those classes resolve.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
pub mod styles;
pub mod transition;
mod widgets;

pub use icon::{Icon, IconName};
pub use styles::{compose_classes, ThemeStyles, THEME_STYLESHEET};
pub use transition::{
    reduce_transition, TransitionAction, TransitionEffect, TransitionError, TransitionPhase,
    TransitionState, DEFAULT_TRANSITION_MS,
};
pub use widgets::{
    AppBar, AppBarState, FloatingLabel, IconButton, MeasureError, Modal, SelectField, SelectValue,
};

/// Convenience imports for host applications.
pub mod prelude {
    pub use crate::{
        AppBar, Icon, IconButton, IconName, Modal, SelectField, SelectValue, ThemeStyles,
    };
}
