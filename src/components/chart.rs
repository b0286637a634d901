use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Title},
    datatype::CompositeValue,
    element::{
        AxisLabel, AxisType, ItemStyle, LineStyle, LineStyleType, SplitLine, TextStyle, Tooltip,
        Trigger,
    },
    renderer::WasmRenderer,
    series::Line,
};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::models::trend::ChartTable;
use crate::utils::debounce::create_debounced_resize_listener;
use crate::utils::format::format_short_date;

const CHART_ID: &str = "price-chart";
const RESIZE_DEBOUNCE_MS: u32 = 150;

/// Line colours, assigned to markets in column order
pub const MARKET_COLORS: [&str; 8] = [
    "#22c55e", // green
    "#06b6d4", // cyan
    "#1e40af", // blue
    "#f59e0b", // amber
    "#ef4444", // red
    "#8b5cf6", // violet
    "#f97316", // orange
    "#10b981", // emerald
];

pub fn market_color(index: usize) -> &'static str {
    MARKET_COLORS[index % MARKET_COLORS.len()]
}

#[derive(Properties, PartialEq)]
pub struct PriceChartProps {
    pub table: Rc<ChartTable>,
    pub title: String,
}

/// One line per market over the dates in the table.
#[function_component(PriceChart)]
pub fn price_chart(props: &PriceChartProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();

        use_effect_with(
            (props.table.clone(), props.title.clone(), container_ref),
            |(table, title, container_ref)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    render_chart(&container, table, title);

                    let table = table.clone();
                    let title = title.clone();
                    create_debounced_resize_listener(
                        move || render_chart(&container, &table, &title),
                        RESIZE_DEBOUNCE_MS,
                    )
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={CHART_ID} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, table: &ChartTable, title: &str) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let chart = build_chart(table, title);
    if let Err(e) = WasmRenderer::new(width, height).render(CHART_ID, &chart) {
        gloo::console::error!(format!("Chart render error: {e:?}"));
    }
}

/// ECharts treats "-" as a missing observation and leaves a gap in the line.
fn series_values(table: &ChartTable, market_index: usize) -> Vec<CompositeValue> {
    table
        .column(market_index)
        .into_iter()
        .map(|value| match value {
            Some(price) => CompositeValue::from(price.round()),
            None => CompositeValue::from("-"),
        })
        .collect()
}

fn build_chart(table: &ChartTable, title: &str) -> CharmingChart {
    let (title_color, axis_color, grid_color) = ("#1f2937", "#6b7280", "#e5e7eb");

    let x_data: Vec<String> = table.dates().into_iter().map(format_short_date).collect();

    let mut chart = CharmingChart::new()
        .title(
            Title::new()
                .text(title)
                .left("center")
                .text_style(TextStyle::new().font_size(16).color(title_color)),
        )
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .grid(
            Grid::new()
                .left("6%")
                .right("4%")
                .bottom("14%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(x_data)
                .axis_label(AxisLabel::new().color(axis_color)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("Rp")
                .axis_label(AxisLabel::new().color(axis_color))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(grid_color)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        );

    for (index, market) in table.markets.iter().enumerate() {
        let color = market_color(index);
        chart = chart.series(
            Line::new()
                .name(market.as_str())
                .data(series_values(table, index))
                .item_style(ItemStyle::new().color(color))
                .line_style(LineStyle::new().color(color)),
        );
    }

    chart
}
