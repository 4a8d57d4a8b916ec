use dioxus::prelude::*;
use dioxus_router::Router;

use crate::components::{ConfirmHost, ToastHost};
use crate::routes::{ReturnTo, Route};

#[component]
pub fn App() -> Element {
    let return_to = use_signal(|| None);
    use_context_provider(|| ReturnTo(return_to));

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Aula" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }

            // Overlays live outside the router so they survive navigation.
            ToastHost {}
            ConfirmHost {}
        }
    }
}
