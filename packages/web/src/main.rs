use dioxus::prelude::*;

use ui::components::ToastProvider;
use ui::AuthProvider;
use views::{SignIn, SignUp};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/signup")]
    SignUp {},
    #[route("/signin")]
    SignIn {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }
        document::Title { "ScanDoc" }

        AuthProvider {
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Redirect `/` to `/signup`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::SignUp {});
    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_route_matches_redirect_path() {
        assert_eq!(Route::SignIn {}.to_string(), ui::sign_up::SIGN_IN_PATH);
    }

    #[test]
    fn test_routes_parse() {
        assert_eq!("/signup".parse::<Route>().ok(), Some(Route::SignUp {}));
        assert_eq!("/signin".parse::<Route>().ok(), Some(Route::SignIn {}));
        assert_eq!("/".parse::<Route>().ok(), Some(Route::Root {}));
    }
}
