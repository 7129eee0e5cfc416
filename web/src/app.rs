use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::*;
use crate::shared::Sidebar;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div id="app">
                <Sidebar />
                <main class="content">
                    <Switch<Route> render={switch}/>
                </main>
            </div>
        </BrowserRouter>
    }
}
