//! Dialog shell used by the label dialog.
//!
//! Focus moves into the dialog when it opens so Escape reaches it without a click.

use gloo::console;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::features::labels::logic::is_dismiss_key;

#[derive(Properties, PartialEq)]
pub(crate) struct ModalProps {
    #[prop_or_default]
    pub open: bool,
    /// Id of the element that names the dialog.
    #[prop_or_default]
    pub labelled_by: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub on_close: Callback<()>,
}

#[function_component(Modal)]
pub(crate) fn modal(props: &ModalProps) -> Html {
    let panel_ref = use_node_ref();

    {
        let panel_ref = panel_ref.clone();
        use_effect_with_deps(
            move |open: &bool| {
                if *open {
                    if let Some(panel) = panel_ref.cast::<HtmlElement>() {
                        if let Err(err) = panel.focus() {
                            console::warn!("dialog focus failed", err);
                        }
                    }
                }
                || ()
            },
            props.open,
        );
    }

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_keydown = {
        let on_close = props.on_close.clone();
        let open = props.open;
        Callback::from(move |event: KeyboardEvent| {
            if open && is_dismiss_key(&event.key()) {
                event.prevent_default();
                on_close.emit(());
            }
        })
    };

    html! {
        <div
            class={classes!("modal", props.open.then_some("modal-open"))}
            role="dialog"
            aria-modal="true"
            aria-hidden={(!props.open).to_string()}
            aria-labelledby={props.labelled_by.clone()}
            onkeydown={on_keydown}
        >
            <div ref={panel_ref} class="modal-box max-w-4xl" tabindex="-1">
                { for props.children.iter() }
            </div>
            <button class="modal-backdrop" aria-label="Close" onclick={on_backdrop}></button>
        </div>
    }
}
