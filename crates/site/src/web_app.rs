use leptos::*;
use leptos_meta::*;
use ui_widgets::prelude::*;

const COUNTRIES: [(&str, &str); 4] = [
    ("CA", "Canada"),
    ("DE", "Germany"),
    ("JP", "Japan"),
    ("NZ", "New Zealand"),
];

const SEATS: [u8; 3] = [1, 2, 4];

#[derive(Debug, Clone, PartialEq)]
/// Gallery-level state owned by the host; the widgets only render it.
pub struct GalleryState {
    pub country: SelectValue,
    pub seats: SelectValue,
    pub modal_open: bool,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            country: SelectValue::default(),
            seats: SelectValue::from(1),
            modal_open: false,
        }
    }
}

impl GalleryState {
    pub fn country_name(&self) -> Option<&'static str> {
        let SelectValue::Text(code) = &self.country else {
            return None;
        };
        COUNTRIES
            .iter()
            .find(|(candidate, _)| candidate == code)
            .map(|(_, name)| *name)
    }

    pub fn summary(&self) -> String {
        match self.country_name() {
            Some(name) => format!("{name}, {} seat(s)", self.seats),
            None => "No country selected".to_string(),
        }
    }

    /// Numeric options arrive from the DOM as text.
    pub fn set_seats(&mut self, raw: &str) {
        self.seats = match raw.parse::<f64>() {
            Ok(number) => SelectValue::from(number),
            Err(_) => SelectValue::from(raw),
        };
    }
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="ui_widgets gallery" />
        <Meta name="description" content="App bar, modal, and floating-label select widgets." />
        <ThemeStyles />
        <main class="site-root">
            <WidgetGallery />
        </main>
    }
}

#[component]
fn WidgetGallery() -> impl IntoView {
    let state = create_rw_signal(GalleryState::default());
    let nav_open = create_rw_signal(false);

    view! {
        <AppBar title="Dashboard" is_show=true open=nav_open />
        <Show when=move || nav_open.get() fallback=|| ()>
            <nav class="site-nav" aria-label="Sections">
                <a href="#country">"Country"</a>
                <a href="#seats">"Seats"</a>
            </nav>
        </Show>
        <section class="site-gallery">
            <SelectField
                id="country"
                name="country"
                label="Country"
                full_width=true
                value=Signal::derive(move || state.with(|value| value.country.clone()))
                on_change=Callback::new(move |ev| {
                    let code = event_target_value(&ev);
                    state.update(|value| value.country = SelectValue::from(code));
                })
            >
                <option value=""></option>
                {COUNTRIES
                    .iter()
                    .map(|(code, name)| view! { <option value=*code>{*name}</option> })
                    .collect_view()}
            </SelectField>
            <SelectField
                id="seats"
                name="seats"
                label="Seats"
                value=Signal::derive(move || state.with(|value| value.seats.clone()))
                on_change=Callback::new(move |ev| {
                    let raw = event_target_value(&ev);
                    state.update(|value| value.set_seats(&raw));
                })
            >
                {SEATS
                    .iter()
                    .map(|seats| view! { <option value=seats.to_string()>{*seats}</option> })
                    .collect_view()}
            </SelectField>
            <p data-ui-slot="summary">{move || state.with(GalleryState::summary)}</p>
            <button
                type="button"
                on:click=move |_| state.update(|value| value.modal_open = true)
            >
                "Review selection"
            </button>
        </section>
        <Modal
            show=Signal::derive(move || state.with(|value| value.modal_open))
            on_close=Callback::new(move |_| state.update(|value| value.modal_open = false))
            aria_label="Selection review"
            header=|| view! { <h2>"Review selection"</h2> }
            footer=move || {
                view! {
                    <IconButton
                        icon=IconName::Dismiss
                        aria_label="Close"
                        on_click=Callback::new(move |_| {
                            state.update(|value| value.modal_open = false);
                        })
                    />
                }
            }
        >
            <p>{move || state.with(GalleryState::summary)}</p>
        </Modal>
    }
}
