use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    if !props.open {
        return Html::default();
    }
    let close_overlay = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let close_button = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div class="modal-overlay fixed inset-0 bg-black/50 flex items-center justify-center z-50 p-4" onclick={close_overlay}>
            <div
                class="modal-box bg-base-100 rounded-xl max-w-md w-full p-6"
                role="dialog"
                aria-modal="true"
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-xl font-bold">{ props.title.clone() }</h2>
                    <button class="btn btn-ghost btn-sm" aria-label="Close" onclick={close_button}>{"✕"}</button>
                </div>
                { for props.children.iter() }
            </div>
        </div>
    }
}
