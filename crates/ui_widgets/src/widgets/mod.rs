//! Widget components and the per-instance state they derive from.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::styles::{self, compose_classes};
use crate::{Icon, IconName};

mod app_bar;
mod controls;
mod modal;
mod select;

pub use app_bar::{AppBar, AppBarState};
pub use controls::IconButton;
pub use modal::Modal;
pub use select::{FloatingLabel, MeasureError, SelectField, SelectValue};

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Event handler that forwards each event to an optional caller callback.
pub(crate) fn forward<E: 'static>(callback: Option<Callback<E>>) -> impl Fn(E) + Copy + 'static {
    move |event| {
        if let Some(callback) = callback.as_ref() {
            callback.call(event);
        }
    }
}
