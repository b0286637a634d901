use std::rc::Rc;
use yew::prelude::*;

use crate::models::price::PriceRecord;
use crate::models::trend::TrendPoint;
use crate::utils::format::{format_rupiah, format_thousands};

const MIN_BAR_PERCENT: f64 = 20.0;

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub record: PriceRecord,
    pub image_url: Option<String>,
    pub trend: Rc<Vec<TrendPoint>>,
    pub on_select: Callback<PriceRecord>,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let image_failed = use_state(|| false);
    let record = &props.record;
    let change = record.change();
    let direction = change.direction();

    let onclick = {
        let on_select = props.on_select.clone();
        let record = record.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(record.clone()))
    };

    let onerror = {
        let image_failed = image_failed.clone();
        Callback::from(move |_: Event| image_failed.set(true))
    };

    let image = match props.image_url.as_deref() {
        Some(src) if !*image_failed => html! {
            <img src={src.to_string()} alt={record.name.clone()} loading="lazy" {onerror} />
        },
        _ => html! { <div class="image-placeholder">{"🛒"}</div> },
    };

    let change_text = format!(
        "{:.2}% (Rp {})",
        change.percent.abs(),
        format_thousands(change.nominal.abs())
    );

    html! {
        <div class="product-card" {onclick} role="button" tabindex="0">
            <div class="product-image">{image}</div>
            <div class="product-body">
                <h3 class="product-name">{&record.name}</h3>
                <p class="product-market">{&record.market}</p>
                <p class="product-price">
                    {format_rupiah(record.price)}
                    if !record.unit.is_empty() {
                        <span class="product-unit">{format!(" / {}", record.unit)}</span>
                    }
                </p>
                <p class={classes!("product-change", direction.css_class())}>
                    <span class="change-icon" title={direction.label()}>{direction.icon()}</span>
                    {change_text}
                </p>
                <div class="trend-bars" aria-hidden="true">
                    {
                        bar_heights(&props.trend).into_iter().zip(props.trend.iter()).map(|(height, point)| {
                            let style = format!("height: {height:.0}%");
                            let title = format!("{}: {}", point.date.format("%d/%m"), format_rupiah(point.price as f64));
                            html! {
                                <span class={classes!("trend-bar", direction.css_class())} {style} {title} />
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </div>
    }
}

/// Bar heights as a percentage of the tallest point. The lowest price still
/// gets a visible stub; a flat series fills every bar.
pub fn bar_heights(trend: &[TrendPoint]) -> Vec<f64> {
    let Some(max) = trend.iter().map(|p| p.price).max() else {
        return Vec::new();
    };
    let min = trend.iter().map(|p| p.price).min().unwrap_or(max);

    if max == min {
        return vec![100.0; trend.len()];
    }

    let span = (max - min) as f64;
    trend
        .iter()
        .map(|p| MIN_BAR_PERCENT + (p.price - min) as f64 / span * (100.0 - MIN_BAR_PERCENT))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn point(day: u32, price: i64) -> TrendPoint {
        TrendPoint {
            date: NaiveDate::from_ymd_opt(2025, 7, day).unwrap(),
            price,
        }
    }

    #[test]
    fn test_bar_heights_scale_between_stub_and_full() {
        let heights = bar_heights(&[point(1, 100), point(2, 150), point(3, 200)]);
        assert_eq!(heights, vec![20.0, 60.0, 100.0]);
    }

    #[test]
    fn test_bar_heights_flat_and_empty() {
        assert_eq!(bar_heights(&[point(1, 50), point(2, 50)]), vec![100.0, 100.0]);
        assert!(bar_heights(&[]).is_empty());
    }
}
