use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use model::{is_email_taken, validate_form, Chamber, UserDraft, UserRecord, UserRole};

use crate::errors::Error;
use crate::services::{list_chambers, user_store};

/// How long the success message stays up before the form asks the parent to
/// close and refresh.
const CLOSE_DELAY_MS: u32 = 1500;

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    /// Prefilled from the record being edited, or defaults for "add new".
    pub user: UserDraft,
    pub on_close: Callback<()>,
}

#[function_component(UserForm)]
pub fn user_form(props: &Props) -> Html {
    let draft = {
        let user = props.user.clone();
        use_state(move || user)
    };
    let records = use_state(Vec::<UserRecord>::new);
    let chambers = use_state(Vec::<Chamber>::new);
    let error = use_state(|| None::<String>);
    let saved = use_state(|| false);
    // Owns the pending close callback; replacing or dropping it cancels.
    let close_timer = use_mut_ref(|| None::<Timeout>);

    {
        let records = records.clone();
        let chambers = chambers.clone();
        let error = error.clone();
        use_mount(move || {
            records.set(user_store().list());
            match list_chambers() {
                Ok(listed) => chambers.set(listed),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    }

    // Recomputed whenever the email changes, against everyone but the
    // record being edited.
    let email_taken = use_state(|| false);
    {
        let email_taken = email_taken.clone();
        let excluding = props.user.id.clone();
        use_effect_with_deps(
            move |(email, records): &(String, Vec<UserRecord>)| {
                let excluding = (!excluding.is_empty()).then_some(excluding.as_str());
                email_taken.set(is_email_taken(records, email, excluding));
                || ()
            },
            (draft.email.clone(), (*records).clone()),
        );
    }

    let onsubmit = {
        let draft = draft.clone();
        let records = records.clone();
        let error = error.clone();
        let saved = saved.clone();
        let close_timer = close_timer.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let current = (*draft).clone();
            if let Err(e) = validate_form(&records, &current) {
                error.set(Some(e.to_string()));
                return;
            }

            let store = user_store();
            let outcome = if current.is_new() {
                store.add(current.to_new_user()).map(Some)
            } else {
                store.update(&current.id, current.to_update())
            };

            match outcome {
                Ok(Some(user)) => {
                    log::info!("user-form: saved {}", user.id);
                    error.set(None);
                    saved.set(true);
                    let on_close = on_close.clone();
                    *close_timer.borrow_mut() = Some(Timeout::new(CLOSE_DELAY_MS, move || {
                        on_close.emit(());
                    }));
                }
                Ok(None) => error.set(Some(Error::Save.to_string())),
                Err(e) => error.set(Some(Error::save(e).to_string())),
            }
        })
    };

    let oninput_name = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut current = (*draft).clone();
            current.name = input.value();
            draft.set(current);
        })
    };
    let oninput_email = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut current = (*draft).clone();
            current.email = input.value();
            draft.set(current);
        })
    };
    let oninput_password = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut current = (*draft).clone();
            current.password = input.value();
            draft.set(current);
        })
    };
    let onchange_role = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut current = (*draft).clone();
            current.role = match select.value().as_str() {
                "camaraAdmin" => UserRole::ChamberAdmin,
                _ => UserRole::Admin,
            };
            draft.set(current);
        })
    };
    let onchange_chamber = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut current = (*draft).clone();
            current.chamber_id = select.value();
            draft.set(current);
        })
    };
    let onchange_active = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut current = (*draft).clone();
            current.active = input.checked();
            draft.set(current);
        })
    };
    let cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let title = if draft.is_new() {
        "Novo Usuário"
    } else {
        "Editar Usuário"
    };

    let error_banner = match &*error {
        Some(message) => html! { <div class="feedback error">{ message }</div> },
        None => html! {},
    };

    let saved_banner = if *saved {
        html! { <div class="feedback success">{ "Usuário salvo com sucesso." }</div> }
    } else {
        html! {}
    };

    let email_hint = if *email_taken {
        html! {
            <span class="field-error">
                { "Este e-mail já está em uso por outro usuário." }
            </span>
        }
    } else {
        html! {}
    };

    let chamber_selector = if draft.role == UserRole::ChamberAdmin {
        html! {
            <fieldset class="form-group">
                <label>{ "Câmara" }</label>
                <select value={draft.chamber_id.clone()} onchange={onchange_chamber}>
                    <option value="" selected={draft.chamber_id.is_empty()}>
                        { "Selecione..." }
                    </option>
                    { for chambers.iter().map(|chamber| html! {
                        <option
                            value={chamber.id.clone()}
                            selected={draft.chamber_id == chamber.id}>
                            { &chamber.name }
                        </option>
                    }) }
                </select>
            </fieldset>
        }
    } else {
        html! {}
    };

    html! {
        <div class="dialog-backdrop">
            <div class="dialog user-form">
                <h3>{ title }</h3>
                { error_banner }
                { saved_banner }
                <form {onsubmit}>
                    <fieldset>
                        <fieldset class="form-group">
                            <label>{ "Nome" }</label>
                            <input
                                type="text"
                                value={draft.name.clone()}
                                oninput={oninput_name}
                                />
                        </fieldset>
                        <fieldset class="form-group">
                            <label>{ "E-mail" }</label>
                            <input
                                type="text"
                                value={draft.email.clone()}
                                oninput={oninput_email}
                                />
                            { email_hint }
                        </fieldset>
                        <fieldset class="form-group">
                            <label>{ "Senha" }</label>
                            <input
                                type="password"
                                placeholder={if draft.is_new() { "" } else { "Deixe em branco para manter" }}
                                value={draft.password.clone()}
                                oninput={oninput_password}
                                />
                        </fieldset>
                        <fieldset class="form-group">
                            <label>{ "Perfil" }</label>
                            <select onchange={onchange_role}>
                                <option value="admin" selected={draft.role == UserRole::Admin}>
                                    { UserRole::Admin.label() }
                                </option>
                                <option value="camaraAdmin" selected={draft.role == UserRole::ChamberAdmin}>
                                    { UserRole::ChamberAdmin.label() }
                                </option>
                            </select>
                        </fieldset>
                        { chamber_selector }
                        <fieldset class="form-group">
                            <label>
                                <input
                                    type="checkbox"
                                    checked={draft.active}
                                    onchange={onchange_active}
                                    />
                                { " Ativo" }
                            </label>
                        </fieldset>
                        <fieldset class="form-group">
                            <button class="btn btn-primary" type="submit" disabled={*saved}>
                                { "Salvar" }
                            </button>
                            <button class="btn" type="button" onclick={cancel}>
                                { "Cancelar" }
                            </button>
                        </fieldset>
                    </fieldset>
                </form>
            </div>
        </div>
    }
}
