use leptos::*;

use crate::styles;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Glyphs available to [`Icon`].
pub enum IconName {
    /// Three-bar navigation glyph.
    Menu,
    /// Close/dismiss cross.
    Dismiss,
}

impl IconName {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::Dismiss => "dismiss",
        }
    }

    fn path(self) -> &'static str {
        match self {
            Self::Menu => "M3,6H21V8H3V6M3,11H21V13H3V11M3,16H21V18H3V16Z",
            Self::Dismiss => {
                "M19,6.41L17.59,5L12,10.59L6.41,5L5,6.41L10.59,12L5,17.59L6.41,19L12,13.41L17.59,19L19,17.59L13.41,12L19,6.41Z"
            }
        }
    }
}

#[component]
/// Inline 24px SVG glyph.
pub fn Icon(icon: IconName) -> impl IntoView {
    view! {
        <svg
            class=styles::ICON
            viewBox="0 0 24 24"
            aria-hidden="true"
            focusable="false"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
        >
            <path d=icon.path()></path>
        </svg>
    }
}
