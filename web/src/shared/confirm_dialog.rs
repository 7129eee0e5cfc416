use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub title: String,
    pub message: String,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Yes/no modal. Carries no state of its own; the caller decides what both
/// buttons mean.
#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &Props) -> Html {
    let confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };
    let cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <div class="dialog-backdrop">
            <div class="dialog">
                <h3>{ &props.title }</h3>
                <p>{ &props.message }</p>
                <div class="dialog-actions">
                    <button class="btn btn-danger" onclick={confirm}>{ "Confirmar" }</button>
                    <button class="btn" onclick={cancel}>{ "Cancelar" }</button>
                </div>
            </div>
        </div>
    }
}
