use dioxus::prelude::*;

use services::Toast;

use crate::context::AppContext;

/// Renders the shared toast list and keeps it in sync with the coordinator.
///
/// Every published snapshot replaces the local signal wholesale; the host
/// never tracks deltas.
#[component]
pub fn ToastHost() -> Element {
    let ctx = use_context::<AppContext>();
    let service = ctx.toasts();
    let mut toasts = use_signal(Vec::<Toast>::new);

    let subscription = ctx.toasts();
    use_future(move || {
        let service = subscription.clone();
        async move {
            let mut rx = service.subscribe();
            loop {
                let snapshot = rx.borrow_and_update().clone();
                toasts.set(snapshot);
                if rx.changed().await.is_err() {
                    break;
                }
            }
        }
    });

    rsx! {
        div { class: "toast-stack",
            for toast in toasts() {
                ToastCard { toast: toast.clone(), on_dismiss: {
                    let service = service.clone();
                    let id = toast.id.clone();
                    move |()| service.remove(&id)
                } }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ToastCardProps {
    toast: Toast,
    on_dismiss: Callback<()>,
}

#[component]
fn ToastCard(props: ToastCardProps) -> Element {
    let toast = props.toast;
    let on_dismiss = props.on_dismiss;
    rsx! {
        div { class: "toast toast-{toast.kind.css_class()}",
            span { class: "toast-message", "{toast.message}" }
            button {
                class: "toast-close",
                r#type: "button",
                onclick: move |_| on_dismiss.call(()),
                "×"
            }
        }
    }
}
