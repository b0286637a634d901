use chrono::{Local, NaiveDate};
use std::collections::HashMap;
use std::rc::Rc;
use yew::prelude::*;

use crate::components::category_tabs::CategoryTabs;
use crate::components::filter_section::FilterSection;
use crate::components::layout::{Footer, Header};
use crate::components::pagination::PaginationBar;
use crate::components::price_chart_modal::PriceChartModal;
use crate::components::product_card::ProductCard;
use crate::components::status::{FallbackNotice, InfoBanner, LoadingSkeleton};
use crate::config::Config;
use crate::hooks::use_debounced_search::use_debounced_search;
use crate::hooks::use_filters::use_filters;
use crate::hooks::use_prices::use_prices;
use crate::models::dataset::Dataset;
use crate::models::pagination::Pagination;
use crate::models::price::PriceRecord;
use crate::models::snapshot::Snapshot;
use crate::models::trend::{ChartTable, TrendPoint, trend_or_placeholder};
use crate::services::api::ApiConfig;

const EMPTY_RESULT: &str = "Tidak ada data yang sesuai dengan filter yang dipilih.";

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let prices = use_prices();
    let filters = use_filters();
    let search = use_debounced_search(filters.set_search.clone(), Config::SEARCH_DEBOUNCE_MS);
    let selected = use_state(|| None::<PriceRecord>);
    let api_config = use_memo((), |_| ApiConfig::default());

    let dataset = prices.data().cloned();
    let records = dataset
        .as_ref()
        .map(|dataset| dataset.records.clone())
        .unwrap_or_default();

    let snapshot = use_memo(records.clone(), |records| {
        Snapshot::select(records, today())
    });

    let markets = use_memo(snapshot.clone(), |snapshot| snapshot.markets());

    // The page number is not part of the key: paging never re-filters
    let filtered = {
        let state = &filters.state;
        use_memo(
            (
                snapshot.clone(),
                state.search.clone(),
                state.market.clone(),
                state.tab.clone(),
                state.condition,
            ),
            {
                let state = state.clone();
                move |(snapshot, ..)| state.apply(snapshot.records())
            },
        )
    };

    // Records without a commodity id are left out and get a placeholder
    let trends = use_memo((dataset.clone(), snapshot.clone()), |(dataset, snapshot)| {
        let history = dataset.as_deref().map_or(&[][..], Dataset::trend_history);
        let today = today();
        let mut trends: HashMap<i64, Rc<Vec<TrendPoint>>> = HashMap::new();
        for record in snapshot.records() {
            if let Some(id) = record.commodity_id {
                trends.entry(id).or_insert_with(|| {
                    Rc::new(trend_or_placeholder(history, record, today, Config::TREND_WINDOW))
                });
            }
        }
        trends
    });

    let chart_tables = use_memo((dataset.clone(), (*selected).clone()), |(dataset, selected)| {
        let history = dataset.as_deref().map_or(&[][..], Dataset::trend_history);
        selected.as_ref().map(|record| {
            let full = ChartTable::for_commodity(history, record.commodity_id);
            let recent = full.tail(Config::TREND_WINDOW);
            (Rc::new(recent), Rc::new(full))
        })
    });

    let pagination = Pagination::new(filtered.len(), Config::PAGE_SIZE, filters.state.page);

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |record: PriceRecord| selected.set(Some(record)))
    };

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |()| selected.set(None))
    };

    let content = if prices.is_loading() {
        html! { <LoadingSkeleton /> }
    } else if filtered.is_empty() {
        html! { <p class="empty-state">{EMPTY_RESULT}</p> }
    } else {
        html! {
            <div class="product-grid">
                {
                    pagination.slice(filtered.as_slice()).iter().map(|record| {
                        let trend = record
                            .commodity_id
                            .and_then(|id| trends.get(&id).cloned())
                            .unwrap_or_else(|| {
                                let placeholder =
                                    trend_or_placeholder(&[], record, today(), Config::TREND_WINDOW);
                                Rc::new(placeholder)
                            });
                        html! {
                            <ProductCard
                                key={format!("{}-{}", record.id, record.market)}
                                record={record.clone()}
                                image_url={api_config.image_url(record.image.as_deref())}
                                {trend}
                                on_select={on_select.clone()}
                            />
                        }
                    }).collect::<Html>()
                }
            </div>
        }
    };

    html! {
        <div class="app-container">
            <Header snapshot_date={snapshot.date()} />

            <main class="app-main">
                <InfoBanner />

                if let (Some(detail), Some(dataset)) = (prices.notice(), dataset.as_ref()) {
                    <FallbackNotice source={dataset.source} detail={detail.to_string()} />
                }

                <FilterSection
                    search={search.value.clone()}
                    market={filters.state.market.clone()}
                    condition={filters.state.condition}
                    markets={(*markets).clone()}
                    on_search={search.on_input.clone()}
                    on_market={filters.set_market.clone()}
                    on_condition={filters.set_condition.clone()}
                />

                <CategoryTabs
                    markets={(*markets).clone()}
                    active={filters.state.tab.clone()}
                    on_select={filters.set_tab.clone()}
                />

                {content}

                <PaginationBar {pagination} on_page={filters.set_page.clone()} />
            </main>

            <Footer />

            if let (Some(record), Some((table, full_table))) =
                ((*selected).clone(), (*chart_tables).clone())
            {
                <PriceChartModal
                    commodity_id={record.commodity_id}
                    name={record.name.clone()}
                    {table}
                    {full_table}
                    snapshot_date={snapshot.date()}
                    {on_close}
                />
            }
        </div>
    }
}
