use yew::prelude::*;

use crate::models::filter::MarketFilter;

#[derive(Properties, PartialEq)]
pub struct CategoryTabsProps {
    pub markets: Vec<String>,
    pub active: MarketFilter,
    pub on_select: Callback<MarketFilter>,
}

/// One tab per market plus "Semua". A tab other than "Semua" overrides the
/// market dropdown.
#[function_component(CategoryTabs)]
pub fn category_tabs(props: &CategoryTabsProps) -> Html {
    let tab = |filter: MarketFilter, label: String| {
        let active = filter == props.active;
        let on_select = props.on_select.clone();
        let onclick = Callback::from(move |_: MouseEvent| on_select.emit(filter.clone()));
        html! {
            <button
                key={label.clone()}
                class={classes!("tab", active.then_some("active"))}
                role="tab"
                aria-selected={active.to_string()}
                {onclick}
            >
                {label}
            </button>
        }
    };

    html! {
        <nav class="category-tabs" role="tablist">
            {tab(MarketFilter::All, "Semua".to_string())}
            {
                props.markets.iter().map(|market| {
                    tab(MarketFilter::Market(market.clone()), market.clone())
                }).collect::<Html>()
            }
        </nav>
    }
}
