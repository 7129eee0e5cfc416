use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuGroup {
    Sessions,
    Members,
    Bills,
}

impl MenuGroup {
    fn title(&self) -> &'static str {
        match self {
            MenuGroup::Sessions => "Sessões",
            MenuGroup::Members => "Vereadores",
            MenuGroup::Bills => "Projetos",
        }
    }

    fn entries(&self) -> &'static [&'static str] {
        match self {
            MenuGroup::Sessions => &["Agenda", "Pautas", "Atas"],
            MenuGroup::Members => &["Lista", "Comissões", "Mesa Diretora"],
            MenuGroup::Bills => &["Em tramitação", "Votações", "Arquivados"],
        }
    }
}

/// Presentation only: which group is disclosed and whether the sidebar is in
/// its narrow mode. Nothing here survives a remount.
#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let open = use_state(|| None::<MenuGroup>);
    let collapsed = use_state(|| false);

    let toggle_collapsed = {
        let collapsed = collapsed.clone();
        Callback::from(move |_: MouseEvent| collapsed.set(!*collapsed))
    };

    let group = |which: MenuGroup| -> Html {
        let is_open = *open == Some(which);
        let toggle = {
            let open = open.clone();
            // Opening one group closes whichever other one was open.
            Callback::from(move |_: MouseEvent| {
                open.set(if is_open { None } else { Some(which) })
            })
        };

        let submenu = if is_open {
            let class = if *collapsed {
                // Narrow sidebar: the submenu floats next to its trigger
                // instead of pushing the links below it down.
                "submenu floating"
            } else {
                "submenu"
            };
            html! {
                <ul {class}>
                    { for which.entries().iter().map(|entry| html! {
                        <li class="submenu-entry">{ entry }</li>
                    }) }
                </ul>
            }
        } else {
            html! {}
        };

        html! {
            <li class={classes!("menu-group", is_open.then_some("open"))}>
                <a class="menu-title" onclick={toggle}>{ which.title() }</a>
                { submenu }
            </li>
        }
    };

    html! {
        <nav class={classes!("sidebar", (*collapsed).then_some("collapsed"))}>
            <button class="collapse-toggle" onclick={toggle_collapsed}>
                { if *collapsed { "»" } else { "«" } }
            </button>
            <ul class="menu">
                <li class="menu-link">
                    <Link<Route> to={Route::Home}>{ "Início" }</Link<Route>>
                </li>
                { group(MenuGroup::Sessions) }
                { group(MenuGroup::Members) }
                { group(MenuGroup::Bills) }
                <li class="menu-link">
                    <Link<Route> to={Route::Users}>{ "Usuários" }</Link<Route>>
                </li>
            </ul>
        </nav>
    }
}
