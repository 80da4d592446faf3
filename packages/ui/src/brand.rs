use dioxus::prelude::*;

/// Decorative right-hand pane of the auth pages. Hidden on narrow screens.
#[component]
pub fn BrandPanel() -> Element {
    rsx! {
        div {
            class: "brand-panel",
            div {
                class: "brand-panel__content",
                h2 { class: "brand-panel__title", "ScanDoc" }
                p { class: "brand-panel__tagline", "The future of secure document management." }
            }
        }
    }
}
