use yew::prelude::*;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home">
            <h2>{ "ePlenarius" }</h2>
            <p>{ "Administração da câmara: use o menu ao lado para navegar." }</p>
        </div>
    }
}
