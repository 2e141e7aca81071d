use super::*;

#[component]
/// Circular icon-only button. Leaf collaborator for bar and dialog actions.
pub fn IconButton(
    icon: IconName,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    /// Rendered as `aria-expanded` when the button discloses other content.
    #[prop(optional, into)]
    expanded: Option<MaybeSignal<bool>>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=compose_classes([Some(styles::ICON_BUTTON), layout_class])
            aria-label=move || aria_label.get()
            title=move || title.get()
            aria-expanded=move || expanded.map(|expanded| bool_token(expanded.get()))
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="icon-button"
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <Icon icon />
        </button>
    }
}
