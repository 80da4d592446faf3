use dioxus::prelude::*;

/// A styled text `input`. Extra attributes (`name`, `type`, `required`, ...) pass through.
#[component]
pub fn Input(
    #[props(default)] class: String,
    oninput: Option<EventHandler<FormEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = input)]
    attributes: Vec<Attribute>,
) -> Element {
    rsx! {
        input {
            class: "input {class}",
            oninput: move |evt| _ = oninput.map(|callback| callback(evt)),
            ..attributes,
        }
    }
}
