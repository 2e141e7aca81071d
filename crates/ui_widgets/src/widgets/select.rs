use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::*;

/// Scale applied to the label in its raised position. Matches `.ui-input-label-raised`.
pub(crate) const RAISED_LABEL_SCALE: f64 = 0.8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
/// Controlled value of a [`SelectField`]: option text or a numeric option value.
pub enum SelectValue {
    /// Numeric option value.
    Number(f64),
    /// Text option value. Empty text means no selection.
    Text(String),
}

impl Default for SelectValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl SelectValue {
    /// Whether the control holds a value, which keeps the label raised. Zero counts as empty.
    pub fn is_present(&self) -> bool {
        match self {
            Self::Number(number) => *number != 0.0 && !number.is_nan(),
            Self::Text(text) => !text.is_empty(),
        }
    }
}

impl fmt::Display for SelectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) if number.fract() == 0.0 && number.is_finite() => {
                write!(f, "{number:.0}")
            }
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<String> for SelectValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for SelectValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<f64> for SelectValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for SelectValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
/// Label measurement failures. The previously measured width is kept.
pub enum MeasureError {
    /// The label node is no longer attached to the document.
    #[error("label element is detached from the document")]
    Detached,
    /// The label has text but no layout box (for example inside a hidden subtree).
    #[error("label `{label}` has no layout width")]
    NoLayout {
        /// Label text at measurement time.
        label: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
/// Floating-label state of one select instance.
pub struct FloatingLabel {
    /// Whether the select currently holds focus.
    pub focus: bool,
    /// Measured unscaled label width in CSS pixels. Always finite and non-negative.
    pub label_width: f64,
}

impl FloatingLabel {
    /// Whether the label sits in its raised position.
    pub fn is_raised(self, value: &SelectValue) -> bool {
        self.focus || value.is_present()
    }

    /// Records a new measurement, clamping unusable readings to zero.
    pub fn with_measured_width(self, width: f64) -> Self {
        let label_width = if width.is_finite() && width > 0.0 {
            width
        } else {
            0.0
        };
        Self {
            label_width,
            ..self
        }
    }

    /// Width of the border notch behind a raised label, or `None` to leave the legend collapsed.
    pub fn legend_width(self, label: &str, value: &SelectValue) -> Option<f64> {
        (!label.is_empty() && self.is_raised(value))
            .then_some(self.label_width * RAISED_LABEL_SCALE)
    }
}

fn measure_label(label: &HtmlElement<html::Label>, text: &str) -> Result<f64, MeasureError> {
    if !label.is_connected() {
        return Err(MeasureError::Detached);
    }
    // Layout width ignores the raise transform, so the reading is the same in either position.
    let width = f64::from(label.offset_width());
    if width <= 0.0 && !text.is_empty() {
        return Err(MeasureError::NoLayout {
            label: text.to_string(),
        });
    }
    Ok(width)
}

#[component]
/// Native `<select>` with a floating label and a notched outline.
///
/// The label rests over the control as a placeholder and rises while the control is focused or
/// holds a value. The value is fully controlled: render the current `value` and update it from
/// `on_change`.
pub fn SelectField(
    #[prop(into)] value: MaybeSignal<SelectValue>,
    #[prop(optional)] on_change: Option<Callback<web_sys::Event>>,
    #[prop(optional)] full_width: bool,
    #[prop(optional, into)] label: MaybeSignal<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] style: Option<String>,
    children: Children,
) -> impl IntoView {
    let floating = create_rw_signal(FloatingLabel::default());
    let label_ref = create_node_ref::<html::Label>();
    let value = Signal::derive(move || value.get());
    let label_text = Signal::derive(move || label.get());

    // Re-measure only when the label node or its text changes.
    create_effect(move |_| {
        let text = label_text.get();
        if label_ref.get().is_none() {
            return;
        }
        request_animation_frame(move || {
            let Some(node) = label_ref.get_untracked() else {
                return;
            };
            match measure_label(&node, &text) {
                Ok(width) => {
                    let Some(current) = floating.try_get_untracked() else {
                        return;
                    };
                    let next = current.with_measured_width(width);
                    if next != current {
                        floating.set(next);
                    }
                }
                Err(err) => logging::warn!("select label measurement failed: {err}"),
            }
        });
    });

    let raised = Signal::derive(move || value.with(|value| floating.get().is_raised(value)));
    let legend_style = move || {
        value.with(|value| {
            label_text.with(|label| {
                floating
                    .get()
                    .legend_width(label, value)
                    .map(|width| format!("width: {width}px"))
            })
        })
    };
    let wrapper_class = compose_classes([
        Some(styles::INPUT_WRAPPER),
        full_width.then_some(styles::FULL_WIDTH),
    ]);
    let select_class = compose_classes([
        Some(styles::SELECT),
        Some(styles::FULL_WIDTH),
        class.as_deref(),
    ]);

    view! {
        <div
            class=wrapper_class
            data-ui-primitive="true"
            data-ui-kind="select"
            data-ui-raised=move || bool_token(raised.get())
        >
            <fieldset class=styles::INPUT_FIELD aria-hidden="true">
                <legend class=styles::INPUT_LEGEND style=legend_style>
                    "\u{200B}"
                </legend>
            </fieldset>
            <label
                node_ref=label_ref
                for=id.clone()
                class=move || {
                    compose_classes([
                        Some(styles::INPUT_LABEL),
                        raised.get().then_some(styles::INPUT_LABEL_RAISED),
                    ])
                }
            >
                {move || label_text.get()}
            </label>
            <select
                class=select_class
                id=id
                name=name
                style=style
                prop:value=move || value.with(ToString::to_string)
                on:change=move |ev| {
                    if let Some(on_change) = on_change.as_ref() {
                        on_change.call(ev);
                    }
                }
                on:focus=move |_| floating.update(|state| state.focus = true)
                on:blur=move |_| floating.update(|state| state.focus = false)
            >
                {children()}
            </select>
        </div>
    }
}
