//! Sign-in landing view. Signing in itself is handled by the hosted auth service.

use dioxus::prelude::*;
use ui::BrandPanel;

use crate::Route;

/// Sign-in page component, the destination after a successful sign-up.
#[component]
pub fn SignIn() -> Element {
    rsx! {
        div {
            class: "auth-page",

            div {
                class: "auth-page__form-pane",
                div {
                    class: "auth-page__form-inner",
                    div {
                        h1 { class: "auth-page__title", "Sign in" }
                        p {
                            class: "auth-page__subtitle",
                            "Check your inbox to confirm your email, then sign in to continue."
                        }
                    }

                    p {
                        class: "auth-form__switch",
                        "Don't have an account? "
                        Link { to: Route::SignUp {}, "Sign up" }
                    }
                }
            }

            BrandPanel {}
        }
    }
}
