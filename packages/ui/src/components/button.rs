use dioxus::prelude::*;

#[derive(PartialEq, Clone, Copy, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button button--primary",
            ButtonVariant::Outline => "button button--outline",
        }
    }
}

/// A styled `button`. Extra attributes (`type`, `disabled`, ...) pass through.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] class: String,
    onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)]
    #[props(extends = button)]
    attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = variant.class();

    rsx! {
        button {
            class: "{base} {class}",
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            ..attributes,
            {children}
        }
    }
}
