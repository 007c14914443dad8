use crate::app::state::ToastMessage;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ToastStackProps {
    pub toasts: Vec<ToastMessage>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(ToastStack)]
pub fn toast_stack(props: &ToastStackProps) -> Html {
    html! {
        <div class="toast toast-end toast-top" role="status" aria-live="polite">
            { for props.toasts.iter().map(|toast| {
                let dismiss = {
                    let on_dismiss = props.on_dismiss.clone();
                    let id = toast.id;
                    Callback::from(move |_| on_dismiss.emit(id))
                };
                html! {
                    <div class={classes!("alert", toast.kind.class(), "flex", "items-center", "gap-2")}>
                        <span>{ toast.text.clone() }</span>
                        <button class="btn btn-ghost btn-xs" aria-label="Dismiss" onclick={dismiss}>{"✕"}</button>
                    </div>
                }
            })}
        </div>
    }
}
