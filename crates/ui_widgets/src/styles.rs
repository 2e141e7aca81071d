//! Named style fragments and class-list composition.
//!
//! Every class below is backed by a rule in one of the `theme/*.toml` style
//! tables. `build.rs` compiles those tables into [`THEME_STYLESHEET`], which
//! [`ThemeStyles`] injects into the document once per host.

use leptos::*;

include!(concat!(env!("OUT_DIR"), "/theme_generated.rs"));

pub(crate) const GRAD_ASH: &str = "ui-grad-ash";
pub(crate) const CL_WHITE: &str = "ui-cl-white";
pub(crate) const ICON_BUTTON: &str = "ui-icon-button";
pub(crate) const ICON: &str = "ui-icon";

pub(crate) const APP_BAR_GROW: &str = "ui-app-bar-grow";
pub(crate) const APP_BAR: &str = "ui-app-bar";
pub(crate) const APP_BAR_TOGGLE: &str = "ui-app-bar-toggle";
pub(crate) const APP_BAR_START: &str = "ui-app-bar-start";

pub(crate) const MODAL_ROOT: &str = "ui-modal-root";
pub(crate) const MODAL_WRAPPER: &str = "ui-modal-wrapper";
pub(crate) const MODAL_OVERLAY: &str = "ui-modal-overlay";
pub(crate) const MODAL_PANEL: &str = "ui-modal-panel";
pub(crate) const MODAL_HEADER: &str = "ui-modal-header";
pub(crate) const MODAL_BODY: &str = "ui-modal-body";
pub(crate) const MODAL_FOOTER: &str = "ui-modal-footer";
pub(crate) const MODAL_ENTER: &str = "ui-modal-enter";
pub(crate) const MODAL_ENTER_ACTIVE: &str = "ui-modal-enter-active";
pub(crate) const MODAL_ENTER_DONE: &str = "ui-modal-enter-done";
pub(crate) const MODAL_EXIT: &str = "ui-modal-exit";

pub(crate) const INPUT_WRAPPER: &str = "ui-input-wrapper";
pub(crate) const INPUT_FIELD: &str = "ui-input-field";
pub(crate) const INPUT_LEGEND: &str = "ui-input-legend";
pub(crate) const INPUT_LABEL: &str = "ui-input-label";
pub(crate) const INPUT_LABEL_RAISED: &str = "ui-input-label-raised";
pub(crate) const SELECT: &str = "ui-select";
pub(crate) const FULL_WIDTH: &str = "ui-full-width";

#[cfg(test)]
pub(crate) const ALL_CLASSES: &[&str] = &[
    GRAD_ASH,
    CL_WHITE,
    ICON_BUTTON,
    ICON,
    APP_BAR_GROW,
    APP_BAR,
    APP_BAR_TOGGLE,
    APP_BAR_START,
    MODAL_ROOT,
    MODAL_WRAPPER,
    MODAL_OVERLAY,
    MODAL_PANEL,
    MODAL_HEADER,
    MODAL_BODY,
    MODAL_FOOTER,
    MODAL_ENTER,
    MODAL_ENTER_ACTIVE,
    MODAL_ENTER_DONE,
    MODAL_EXIT,
    INPUT_WRAPPER,
    INPUT_FIELD,
    INPUT_LEGEND,
    INPUT_LABEL,
    INPUT_LABEL_RAISED,
    SELECT,
    FULL_WIDTH,
];

/// Joins class fragments into one `class` attribute value, skipping absent
/// and blank entries.
pub fn compose_classes<'a, I>(fragments: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    fragments
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
/// Injects the compiled widget stylesheet. Mount once near the app root.
pub fn ThemeStyles() -> impl IntoView {
    view! {
        <style id="ui-widgets-theme" data-ui-kind="theme">
            {THEME_STYLESHEET}
        </style>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn selector_classes() -> Vec<&'static str> {
        THEME_SELECTORS
            .iter()
            .copied()
            .flat_map(|selector| selector.split([',', ' ']))
            .map(|part| part.split(':').next().unwrap_or_default())
            .filter_map(|part| part.strip_prefix('.'))
            .collect()
    }

    #[test]
    fn compose_drops_missing_and_blank_fragments() {
        let composed = compose_classes([Some(GRAD_ASH), None, Some("  "), Some(APP_BAR), Some("x")]);
        assert_eq!(composed, "ui-grad-ash ui-app-bar x");
    }

    #[test]
    fn compose_of_nothing_is_empty() {
        assert_eq!(compose_classes(std::iter::empty()), "");
    }

    #[test]
    fn every_widget_class_has_a_compiled_rule() {
        let compiled = selector_classes();
        let missing = ALL_CLASSES
            .iter()
            .copied()
            .filter(|class| !compiled.contains(class))
            .collect::<Vec<_>>();
        assert_eq!(missing, Vec::<&str>::new());
    }

    #[test]
    fn stylesheet_keeps_table_order() {
        let global = THEME_STYLESHEET.find("/* global */").expect("global table");
        let select = THEME_STYLESHEET.find("/* select */").expect("select table");
        let resting = THEME_STYLESHEET.find(".ui-input-label {").expect("label rule");
        let raised = THEME_STYLESHEET
            .find(".ui-input-label-raised {")
            .expect("raised rule");
        assert!(global < select);
        assert!(resting < raised);
    }

    #[test]
    fn visible_combination_only_targets_active_and_done_phases() {
        let visible = THEME_SELECTORS
            .iter()
            .filter(|selector| selector.ends_with(MODAL_OVERLAY) && selector.contains(','))
            .collect::<Vec<_>>();
        assert_eq!(visible.len(), 1);
        assert!(visible[0].contains(MODAL_ENTER_ACTIVE));
        assert!(visible[0].contains(MODAL_ENTER_DONE));
        assert!(!visible[0].contains(MODAL_EXIT));
    }
}
