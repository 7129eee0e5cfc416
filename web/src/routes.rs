use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::Home;
use crate::pages::Users;

#[derive(Debug, Clone, Copy, PartialEq, Routable)]
pub enum Route {
    #[at("/usuarios")]
    Users,
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(selected_route: Route) -> Html {
    match selected_route {
        Route::Users => html! { <Users /> },
        Route::Home => html! { <Home /> },
        Route::NotFound => html! { <div class="not-found">{ "Página não encontrada." }</div> },
    }
}
