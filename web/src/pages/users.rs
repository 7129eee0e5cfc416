use gloo_timers::callback::Timeout;
use yew::prelude::*;

use model::{UserDraft, UserRecord};

use crate::errors::Error;
use crate::services::user_store;
use crate::shared::{ConfirmDialog, UserForm};

/// How long a transient success or error message stays visible.
const FEEDBACK_MS: u32 = 3000;

pub enum Msg {
    AddNew,
    Edit(UserRecord),
    CloseForm,
    RequestDelete(UserRecord),
    ConfirmDelete,
    CancelDelete,
    DismissFeedback,
}

pub struct Users {
    users: Vec<UserRecord>,
    form: Option<UserDraft>,
    deleting: Option<UserRecord>,
    feedback: Option<(bool, String)>,
    // Dropping the timeout cancels it, so a superseding message or the page
    // unmounting never leaves a dangling dismissal behind.
    feedback_timer: Option<Timeout>,
}

impl Users {
    fn reload(&mut self) {
        self.users = user_store().list();
        log::debug!("users: loaded {}", self.users.len());
    }

    fn show_feedback(&mut self, ctx: &Context<Self>, ok: bool, message: String) {
        self.feedback = Some((ok, message));
        let dismiss = ctx.link().callback(|_| Msg::DismissFeedback);
        self.feedback_timer = Some(Timeout::new(FEEDBACK_MS, move || dismiss.emit(())));
    }

    fn row(&self, ctx: &Context<Self>, user: &UserRecord) -> Html {
        let edit = {
            let user = user.clone();
            ctx.link().callback(move |_| Msg::Edit(user.clone()))
        };
        let delete = {
            let user = user.clone();
            ctx.link().callback(move |_| Msg::RequestDelete(user.clone()))
        };

        let badge = if user.active {
            html! { <span class="badge active">{ "Ativo" }</span> }
        } else {
            html! { <span class="badge inactive">{ "Inativo" }</span> }
        };

        html! {
            <tr key={user.id.clone()}>
                <td>{ &user.name }</td>
                <td>{ &user.email }</td>
                <td>{ user.role.label() }</td>
                <td>{ badge }</td>
                <td class="actions">
                    <button class="btn" onclick={edit}>{ "Editar" }</button>
                    <button class="btn btn-danger" onclick={delete}>{ "Excluir" }</button>
                </td>
            </tr>
        }
    }
}

impl Component for Users {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let mut page = Self {
            users: Vec::new(),
            form: None,
            deleting: None,
            feedback: None,
            feedback_timer: None,
        };
        page.reload();
        page
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::AddNew => {
                self.form = Some(UserDraft::default());

                true
            }
            Msg::Edit(user) => {
                self.form = Some(UserDraft::from(&user));

                true
            }
            Msg::CloseForm => {
                self.form = None;
                self.reload();

                true
            }
            Msg::RequestDelete(user) => {
                self.deleting = Some(user);

                true
            }
            Msg::ConfirmDelete => {
                // The dialog closes no matter how the delete goes.
                if let Some(user) = self.deleting.take() {
                    match user_store().delete(&user.id) {
                        Ok(true) => {
                            self.show_feedback(ctx, true, "Usuário excluído.".to_owned())
                        }
                        Ok(false) => self.show_feedback(
                            ctx,
                            false,
                            "Usuário não encontrado.".to_owned(),
                        ),
                        Err(e) => {
                            self.show_feedback(ctx, false, Error::delete(e).to_string())
                        }
                    }
                }
                self.reload();

                true
            }
            Msg::CancelDelete => {
                self.deleting = None;

                true
            }
            Msg::DismissFeedback => {
                self.feedback = None;
                self.feedback_timer = None;

                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let add = ctx.link().callback(|_| Msg::AddNew);

        let feedback = match &self.feedback {
            Some((true, message)) => html! { <div class="feedback success">{ message }</div> },
            Some((false, message)) => html! { <div class="feedback error">{ message }</div> },
            None => html! {},
        };

        let form = match &self.form {
            Some(draft) => html! {
                <UserForm
                    user={draft.clone()}
                    on_close={ctx.link().callback(|_| Msg::CloseForm)}
                    />
            },
            None => html! {},
        };

        let dialog = match &self.deleting {
            Some(user) => html! {
                <ConfirmDialog
                    title={"Excluir usuário".to_owned()}
                    message={format!("Tem certeza que deseja excluir \"{}\"?", user.name)}
                    on_confirm={ctx.link().callback(|_| Msg::ConfirmDelete)}
                    on_cancel={ctx.link().callback(|_| Msg::CancelDelete)}
                    />
            },
            None => html! {},
        };

        html! {
            <div class="users-page">
                <div class="page-header">
                    <h2>{ "Usuários" }</h2>
                    <button class="btn btn-primary" onclick={add}>{ "Novo usuário" }</button>
                </div>
                { feedback }
                <table class="users">
                    <thead>
                        <tr>
                            <th>{ "Nome" }</th>
                            <th>{ "E-mail" }</th>
                            <th>{ "Perfil" }</th>
                            <th>{ "Situação" }</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        { for self.users.iter().map(|user| self.row(ctx, user)) }
                    </tbody>
                </table>
                { form }
                { dialog }
            </div>
        }
    }
}
