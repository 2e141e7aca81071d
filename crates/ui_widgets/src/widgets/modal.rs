use std::time::Duration;

use leptos::leptos_dom::helpers::TimeoutHandle;

use super::*;
use crate::transition::{
    reduce_transition, TransitionAction, TransitionEffect, TransitionState, DEFAULT_TRANSITION_MS,
};

/// Feeds transition actions through the reducer and performs the returned scheduling effects.
#[derive(Clone, Copy)]
struct TransitionDriver {
    state: RwSignal<TransitionState>,
    pending: StoredValue<Option<TimeoutHandle>>,
    timeout: Duration,
}

impl TransitionDriver {
    fn dispatch(self, action: TransitionAction) {
        // Callbacks may land after the owning modal was disposed.
        let Some(current) = self.state.try_get_untracked() else {
            return;
        };
        let mut next = current;
        match reduce_transition(&mut next, action) {
            Ok(effects) => {
                if next != current {
                    self.state.set(next);
                }
                self.perform(effects);
            }
            Err(err) => logging::debug_warn!("modal transition ignored: {err}"),
        }
    }

    fn perform(self, effects: Vec<TransitionEffect>) {
        for effect in effects {
            match effect {
                TransitionEffect::CancelTimer => self.cancel_timer(),
                TransitionEffect::RequestFrame { generation } => {
                    // Two frames so the enter class is painted before the active class lands.
                    request_animation_frame(move || {
                        request_animation_frame(move || {
                            self.dispatch(TransitionAction::FrameElapsed { generation });
                        });
                    });
                }
                TransitionEffect::StartTimer { generation } => {
                    let elapsed =
                        move || self.dispatch(TransitionAction::TimeoutElapsed { generation });
                    match set_timeout_with_handle(elapsed, self.timeout) {
                        Ok(handle) => self.pending.set_value(Some(handle)),
                        Err(err) => {
                            logging::warn!("modal transition timer failed: {err:?}");
                            self.dispatch(TransitionAction::TimeoutElapsed { generation });
                        }
                    }
                }
            }
        }
    }

    fn cancel_timer(self) {
        if let Some(handle) = self.pending.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    }
}

#[component]
/// Overlay plus centered panel with header, body, and footer regions.
///
/// Visibility is owned by the caller through `show`. The panel mounts on show, animates in over
/// `timeout_ms`, and is removed from the tree once the exit animation has run. Clicking the
/// overlay calls `on_close`; the modal never hides itself.
pub fn Modal(
    #[prop(optional, into)] show: MaybeSignal<bool>,
    #[prop(optional)] on_close: Option<Callback<MouseEvent>>,
    #[prop(optional, into)] header: Option<ViewFn>,
    #[prop(optional, into)] footer: Option<ViewFn>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] style: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(default = DEFAULT_TRANSITION_MS)] timeout_ms: u64,
    children: ChildrenFn,
) -> impl IntoView {
    let transition = create_rw_signal(TransitionState::default());
    let driver = TransitionDriver {
        state: transition,
        pending: store_value(None),
        timeout: Duration::from_millis(timeout_ms),
    };

    create_effect(move |_| {
        let action = if show.get() {
            TransitionAction::Show
        } else {
            TransitionAction::Hide
        };
        driver.dispatch(action);
    });
    on_cleanup(move || driver.cancel_timer());

    let class = store_value(class);
    let style = store_value(style);
    let aria_label = store_value(aria_label);
    let header = store_value(header);
    let footer = store_value(footer);
    let children = store_value(children);

    let wrapper_class = move || {
        class.with_value(|class| {
            compose_classes([
                Some(styles::MODAL_ROOT),
                Some(styles::MODAL_WRAPPER),
                class.as_deref(),
                transition.get().lifecycle_class(),
            ])
        })
    };

    view! {
        <Show when=move || transition.get().phase.is_mounted() fallback=|| ()>
            <div
                class=wrapper_class
                data-ui-primitive="true"
                data-ui-kind="modal"
                data-ui-state=move || transition.get().phase.token()
                data-ui-visible=move || bool_token(transition.get().is_visible())
            >
                <div
                    class=styles::MODAL_OVERLAY
                    data-ui-slot="overlay"
                    on:click=forward(on_close)
                ></div>
                <div
                    class=styles::MODAL_PANEL
                    style=style.get_value()
                    role="dialog"
                    aria-modal="true"
                    aria-label=aria_label.get_value()
                    data-ui-slot="panel"
                >
                    <div class=styles::MODAL_HEADER data-ui-slot="header">
                        {header.get_value().map(|header| header.run())}
                    </div>
                    <div class=styles::MODAL_BODY data-ui-slot="body">
                        <div>{children.with_value(|children| children())}</div>
                    </div>
                    <div class=styles::MODAL_FOOTER data-ui-slot="footer">
                        {footer.get_value().map(|footer| footer.run())}
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn overlay_handler_calls_close_once_per_click() {
        let _ = leptos::create_runtime();
        let closes = Rc::new(Cell::new(0_u32));
        let counter = Rc::clone(&closes);
        let on_close = Callback::new(move |_: u8| counter.set(counter.get() + 1));
        let click = forward(Some(on_close));

        click(0);
        assert_eq!(closes.get(), 1);
        click(0);
        assert_eq!(closes.get(), 2);
    }

    #[test]
    fn overlay_handler_without_close_is_inert() {
        let _ = leptos::create_runtime();
        let click = forward::<u8>(None);
        click(0);
    }
}
