use dioxus::prelude::*;
use dioxus_router::use_navigator;

use services::AuthServiceError;

use crate::context::AppContext;
use crate::routes::{ReturnTo, Route};

#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let return_to = use_context::<ReturnTo>();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }

        let user = username().trim().to_string();
        let pass = password();
        // Field checks happen before any network call.
        if user.is_empty() || pass.is_empty() {
            ctx.toasts().error("Please enter a username and password.");
            return;
        }

        let auth = ctx.auth();
        let toasts = ctx.toasts();
        let mut return_slot = return_to.0;
        busy.set(true);
        spawn(async move {
            match auth.login(&user, &pass).await {
                Ok(session) => {
                    toasts.success(format!("Welcome back, {}!", session.name));
                    let target = return_slot.take().unwrap_or(Route::Home {});
                    navigator.replace(target);
                }
                Err(AuthServiceError::InvalidCredentials) => {
                    toasts.error("Invalid username or password.");
                }
                Err(AuthServiceError::Api(err)) => {
                    toasts.error(err.user_message());
                }
                Err(err) => {
                    toasts.error(err.to_string());
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "page login-page",
            h2 { "Log in" }
            form { class: "login-form", onsubmit: submit,
                label { r#for: "username", "Username" }
                input {
                    id: "username",
                    name: "username",
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value()),
                }
                label { r#for: "password", "Password" }
                input {
                    id: "password",
                    name: "password",
                    r#type: "password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: busy(),
                    if busy() { "Logging in..." } else { "Log in" }
                }
            }
        }
    }
}
