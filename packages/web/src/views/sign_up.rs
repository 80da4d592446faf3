//! Sign-up page view: name, email and password form beside the brand panel.

use api::AuthService;
use dioxus::prelude::*;
use ui::components::{use_toast, Button, Input, Label, ToastOptions};
use ui::sign_up::PASSWORD_HINT;
use ui::{use_auth_service, BrandPanel, NoticeKind, SignUpField, SignUpState};

use crate::Route;

/// Sign-up page component.
#[component]
pub fn SignUp() -> Element {
    let auth = use_auth_service();
    let toast = use_toast();
    let nav = use_navigator();
    let mut state = use_signal(SignUpState::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let Some(request) = state.write().begin(&ui::page_origin()) else {
            return;
        };
        let auth = auth.clone();

        spawn(async move {
            let result = auth.sign_up(request).await;
            let completion = state.write().finish(result);

            completion.apply(
                |notice| {
                    let options = ToastOptions::new().description(notice.description);
                    match notice.kind {
                        NoticeKind::Success => {
                            toast.success(notice.title, options);
                        }
                        NoticeKind::Destructive => {
                            toast.error(notice.title, options);
                        }
                    }
                },
                // `SIGN_IN_PATH` is the only redirect and renders as `Route::SignIn`.
                |_| {
                    nav.push(Route::SignIn {});
                },
            );
        });
    };

    let busy = state.read().is_busy();
    let form = state.read().form.clone();

    rsx! {
        div {
            class: "auth-page",

            div {
                class: "auth-page__form-pane",
                div {
                    class: "auth-page__form-inner",

                    div {
                        h1 { class: "auth-page__title", "Create an account" }
                        p { class: "auth-page__subtitle", "Enter your information to get started" }
                    }

                    form {
                        class: "auth-form",
                        onsubmit: handle_submit,

                        div {
                            class: "auth-form__row",
                            div {
                                class: "auth-form__field",
                                Label { html_for: SignUpField::FirstName.name(), "First name" }
                                Input {
                                    id: SignUpField::FirstName.name(),
                                    name: SignUpField::FirstName.name(),
                                    placeholder: "Max",
                                    required: true,
                                    value: form.first_name,
                                    oninput: move |evt: FormEvent| state.write().update(SignUpField::FirstName, evt.value()),
                                }
                            }
                            div {
                                class: "auth-form__field",
                                Label { html_for: SignUpField::LastName.name(), "Last name" }
                                Input {
                                    id: SignUpField::LastName.name(),
                                    name: SignUpField::LastName.name(),
                                    placeholder: "Robinson",
                                    required: true,
                                    value: form.last_name,
                                    oninput: move |evt: FormEvent| state.write().update(SignUpField::LastName, evt.value()),
                                }
                            }
                        }

                        div {
                            class: "auth-form__field",
                            Label { html_for: SignUpField::Email.name(), "Email" }
                            Input {
                                id: SignUpField::Email.name(),
                                name: SignUpField::Email.name(),
                                r#type: "email",
                                placeholder: "you@example.com",
                                required: true,
                                value: form.email,
                                oninput: move |evt: FormEvent| state.write().update(SignUpField::Email, evt.value()),
                            }
                        }

                        div {
                            class: "auth-form__field",
                            Label { html_for: SignUpField::Password.name(), "Password" }
                            Input {
                                id: SignUpField::Password.name(),
                                name: SignUpField::Password.name(),
                                r#type: "password",
                                placeholder: "••••••••",
                                required: true,
                                value: form.password,
                                oninput: move |evt: FormEvent| state.write().update(SignUpField::Password, evt.value()),
                            }
                            p { class: "auth-form__hint", "{PASSWORD_HINT}" }
                        }

                        Button {
                            class: "button--full",
                            r#type: "submit",
                            disabled: busy,
                            if busy { "Creating account..." } else { "Create an account" }
                        }

                        p {
                            class: "auth-form__switch",
                            "Already have an account? "
                            Link { to: Route::SignIn {}, "Sign in" }
                        }
                    }

                    p {
                        class: "auth-page__footer",
                        "Copyright © 2025 | Powered by Wan Buffer Services"
                    }
                }
            }

            BrandPanel {}
        }
    }
}
