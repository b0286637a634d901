use chrono::NaiveDate;
use std::rc::Rc;
use yew::prelude::*;

use crate::components::chart::{PriceChart, market_color};
use crate::hooks::use_commodity::use_commodity;
use crate::models::trend::ChartTable;
use crate::services::export::{download_csv, export_filename};

#[derive(Properties, PartialEq)]
pub struct PriceChartModalProps {
    pub commodity_id: Option<i64>,
    pub name: String,
    /// Recent dates shown in the chart
    pub table: Rc<ChartTable>,
    /// Every date the feed reports, used for export
    pub full_table: Rc<ChartTable>,
    pub snapshot_date: Option<NaiveDate>,
    pub on_close: Callback<()>,
}

#[function_component(PriceChartModal)]
pub fn price_chart_modal(props: &PriceChartModalProps) -> Html {
    let commodity = use_commodity(props.commodity_id);
    let export_error = use_state(|| None::<String>);

    let on_export = {
        let table = props.full_table.clone();
        let filename = export_filename(&props.name, props.snapshot_date);
        let export_error = export_error.clone();
        Callback::from(move |_: MouseEvent| match download_csv(&table, &filename) {
            Ok(()) => export_error.set(None),
            Err(e) => {
                gloo::console::error!(format!("CSV export failed: {e}"));
                export_error.set(Some(e.to_string()));
            }
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    // Clicks inside the dialog must not reach the backdrop
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    let subtitle = match commodity.data() {
        Some(data) if !data.category.is_empty() => format!("{} ({})", props.name, data.category),
        _ => props.name.clone(),
    };

    html! {
        <div class="modal-backdrop" onclick={on_close.clone()}>
            <div class="modal" role="dialog" aria-modal="true" onclick={stop}>
                <div class="modal-header">
                    <h2>{format!("Grafik Harga - {}", props.name)}</h2>
                    <div class="modal-actions">
                        <button
                            class="icon-button"
                            onclick={on_export}
                            disabled={props.full_table.is_empty()}
                            title="Unduh CSV"
                            aria-label="Unduh CSV"
                        >
                            {"⬇"}
                        </button>
                        <button class="icon-button" onclick={on_close} title="Tutup" aria-label="Tutup">
                            {"✕"}
                        </button>
                    </div>
                </div>

                <div class="modal-body">
                    <h3 class="modal-subtitle">{subtitle}</h3>

                    if let Some(message) = (*export_error).clone() {
                        <p class="export-error">{message}</p>
                    }

                    if props.table.is_empty() {
                        <p class="empty-state">{"Belum ada riwayat harga untuk komoditas ini."}</p>
                    } else {
                        <PriceChart table={props.table.clone()} title={props.name.clone()} />

                        <div class="chart-legend">
                            {
                                props.table.markets.iter().enumerate().map(|(index, market)| {
                                    let style = format!("background-color: {}", market_color(index));
                                    html! {
                                        <div class="legend-item" key={market.clone()}>
                                            <span class="legend-swatch" {style} />
                                            <span>{market}</span>
                                        </div>
                                    }
                                }).collect::<Html>()
                            }
                        </div>
                    }
                </div>
            </div>
        </div>
    }
}
