use dioxus::prelude::*;

use services::ConfirmRequest;

use crate::context::AppContext;

/// Renders the single pending confirmation dialog, if any.
///
/// Confirm resolves `true`; cancel and a click on the overlay both resolve
/// `false` (dismissing is a "no").
#[component]
pub fn ConfirmHost() -> Element {
    let ctx = use_context::<AppContext>();
    let mut pending = use_signal(|| Option::<ConfirmRequest>::None);

    let subscription = ctx.confirms();
    use_future(move || {
        let service = subscription.clone();
        async move {
            let mut rx = service.subscribe();
            loop {
                let snapshot = rx.borrow_and_update().clone();
                pending.set(snapshot);
                if rx.changed().await.is_err() {
                    break;
                }
            }
        }
    });

    let Some(request) = pending() else {
        return rsx! {};
    };

    let confirms_on_overlay = ctx.confirms();
    let confirms_on_cancel = ctx.confirms();
    let confirms_on_confirm = ctx.confirms();

    rsx! {
        div {
            class: "confirm-overlay",
            onclick: move |_| confirms_on_overlay.resolve(false),
            div {
                class: "confirm-dialog confirm-{request.severity.css_class()}",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "confirm-title", "{request.title}" }
                p { class: "confirm-message", "{request.message}" }
                div { class: "confirm-actions",
                    button {
                        class: "btn confirm-cancel",
                        r#type: "button",
                        onclick: move |_| confirms_on_cancel.resolve(false),
                        "{request.cancel_label}"
                    }
                    button {
                        class: "btn confirm-accept",
                        r#type: "button",
                        onclick: move |_| confirms_on_confirm.resolve(true),
                        "{request.confirm_label}"
                    }
                }
            }
        }
    }
}
