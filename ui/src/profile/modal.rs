use dioxus::prelude::*;

/// Confirmation dialog shown before a record is deleted.
#[component]
pub fn ConfirmDeleteModal(
    open: bool,
    on_cancel: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div { class: "modal-overlay", onclick: move |_| on_cancel.call(()),
            div {
                class: "modal",
                role: "dialog",
                aria_modal: "true",
                // Keep clicks inside the dialog from hitting the overlay.
                onclick: move |evt| evt.stop_propagation(),

                h2 { "Delete log?" }
                p { "This cannot be undone." }

                div { class: "modal__actions",
                    button {
                        r#type: "button",
                        class: "button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        r#type: "button",
                        class: "button button--danger",
                        onclick: move |_| on_confirm.call(()),
                        "Delete"
                    }
                }
            }
        }
    }
}
