use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Per-instance application bar state.
pub struct AppBarState {
    /// Navigation open flag. Only meaningful while `is_show` holds.
    pub is_open: bool,
    /// Whether the menu toggle is rendered.
    pub is_show: bool,
}

impl AppBarState {
    /// State after one toggle click. Derived from the same flag it replaces.
    pub fn toggled(self) -> Self {
        Self {
            is_open: !self.is_open,
            ..self
        }
    }

    /// Whether the menu toggle is part of the rendered bar.
    pub fn shows_toggle(self) -> bool {
        self.is_show
    }

    /// Whether the bar should advertise an open navigation.
    pub fn exposes_open(self) -> bool {
        self.is_show && self.is_open
    }
}

#[component]
/// Fixed-height horizontal bar with an optional menu toggle, a title, and a profile slot.
///
/// Pass `open` to own the navigation flag from the caller; otherwise the bar keeps its own flag
/// seeded from `is_open`. Either way the toggle flips that single flag.
pub fn AppBar(
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] is_show: bool,
    #[prop(optional)] is_open: bool,
    #[prop(optional)] open: Option<RwSignal<bool>>,
    #[prop(optional)] on_toggle: Option<Callback<bool>>,
    #[prop(default = "Profile")] profile_label: &'static str,
) -> impl IntoView {
    let open = open.unwrap_or_else(|| create_rw_signal(is_open));
    let state = Signal::derive(move || AppBarState {
        is_open: open.get(),
        is_show,
    });
    let bar_class = compose_classes([
        Some(styles::GRAD_ASH),
        Some(styles::CL_WHITE),
        Some(styles::APP_BAR),
        class.as_deref(),
    ]);

    let toggle = Callback::new(move |_: MouseEvent| {
        let next = state.get_untracked().toggled();
        open.set(next.is_open);
        if let Some(on_toggle) = on_toggle.as_ref() {
            on_toggle.call(next.is_open);
        }
    });

    view! {
        <div class=styles::APP_BAR_GROW data-ui-primitive="true" data-ui-kind="app-bar">
            <div
                class=bar_class
                role="banner"
                data-ui-open=move || bool_token(state.get().exposes_open())
            >
                <div class=styles::APP_BAR_START>
                    {menu_toggle(state.get_untracked(), open, toggle)}
                    <p data-ui-slot="title">{move || title.get()}</p>
                </div>
                <div>
                    <p data-ui-slot="profile">{profile_label}</p>
                </div>
            </div>
        </div>
    }
}

fn menu_toggle(
    state: AppBarState,
    open: RwSignal<bool>,
    toggle: Callback<MouseEvent>,
) -> Option<View> {
    state.shows_toggle().then(|| {
        view! {
            <IconButton
                icon=IconName::Menu
                layout_class=styles::APP_BAR_TOGGLE
                aria_label="Toggle navigation"
                expanded=Signal::derive(move || open.get())
                on_click=toggle
            />
        }
        .into_view()
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn toggle_flips_the_same_flag_each_time() {
        let start = AppBarState {
            is_open: false,
            is_show: true,
        };
        let once = start.toggled();
        let twice = once.toggled();

        assert!(once.is_open);
        assert_eq!(twice, start);
    }

    #[test]
    fn toggling_never_hides_the_toggle() {
        let state = AppBarState {
            is_open: false,
            is_show: true,
        };
        assert!(state.toggled().is_show);
        assert!(state.toggled().exposes_open());
    }

    #[test]
    fn hidden_toggle_renders_no_icon_button() {
        let _ = leptos::create_runtime();
        let open = create_rw_signal(true);
        let toggle = Callback::new(move |_: MouseEvent| open.update(|open| *open = !*open));

        let hidden = AppBarState {
            is_open: true,
            is_show: false,
        };

        assert!(!hidden.shows_toggle());
        assert!(menu_toggle(hidden, open, toggle).is_none());
        assert!(menu_toggle(hidden.toggled(), open, toggle).is_none());
    }

    #[test]
    fn open_is_not_exposed_without_toggle() {
        let state = AppBarState {
            is_open: true,
            is_show: false,
        };
        assert!(!state.exposes_open());
        assert!(!state.toggled().is_show);
    }

    #[test]
    fn defaults_are_closed_and_hidden() {
        assert_eq!(
            AppBarState::default(),
            AppBarState {
                is_open: false,
                is_show: false,
            }
        );
    }
}
