use pangan_dashboard::components::Dashboard;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <Dashboard />

            <style>
                {include_str!("style.css")}
            </style>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
