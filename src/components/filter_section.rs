use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::filter::{ALL, Condition, MarketFilter};
use crate::models::price::Direction;

#[derive(Properties, PartialEq)]
pub struct FilterSectionProps {
    /// Text shown in the search box, ahead of the debounced filter
    pub search: String,
    pub market: MarketFilter,
    pub condition: Condition,
    pub markets: Vec<String>,
    pub on_search: Callback<String>,
    pub on_market: Callback<MarketFilter>,
    pub on_condition: Callback<Condition>,
}

#[function_component(FilterSection)]
pub fn filter_section(props: &FilterSectionProps) -> Html {
    let on_input = {
        let callback = props.on_search.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlInputElement = e.target_unchecked_into();
            callback.emit(target.value());
        })
    };

    let on_market = {
        let callback = props.on_market.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            callback.emit(MarketFilter::from_value(&target.value()));
        })
    };

    let on_condition = {
        let callback = props.on_condition.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            match target.value().parse::<Condition>() {
                Ok(condition) => callback.emit(condition),
                Err(err) => {
                    gloo::console::warn!(format!("Ignoring condition: {err}"));
                }
            }
        })
    };

    html! {
        <section class="filter-section">
            <div class="filter-controls">
                <input
                    type="search"
                    class="search-input"
                    placeholder="Cari komoditas..."
                    aria-label="Cari komoditas"
                    value={props.search.clone()}
                    oninput={on_input}
                />

                <select class="filter-select" onchange={on_market} aria-label="Pilih pasar">
                    <option value={ALL} selected={props.market.is_all()}>{"Semua Pasar"}</option>
                    {
                        props.markets.iter().map(|market| {
                            let selected = props.market.value() == market.as_str();
                            html! {
                                <option value={market.clone()} {selected}>{market}</option>
                            }
                        }).collect::<Html>()
                    }
                </select>

                <select class="filter-select" onchange={on_condition} aria-label="Kondisi harga">
                    {
                        Condition::all().iter().map(|c| {
                            let selected = *c == props.condition;
                            html! {
                                <option value={c.code()} {selected}>{c.label()}</option>
                            }
                        }).collect::<Html>()
                    }
                </select>
            </div>

            <div class="direction-legend">
                {
                    [Direction::Up, Direction::Down, Direction::Unchanged].iter().map(|d| html! {
                        <span class={classes!("legend-item", d.css_class())}>
                            <span class="change-icon">{d.icon()}</span>
                            {d.label()}
                        </span>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}
