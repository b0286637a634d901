use chrono::NaiveDate;
use yew::prelude::*;

use crate::utils::format::format_long_date;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub snapshot_date: Option<NaiveDate>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="app-header">
            <h1>{"Harga Pangan Hari Ini"}</h1>
            if let Some(date) = props.snapshot_date {
                <p class="snapshot-date">{format!("Data per {}", format_long_date(date))}</p>
            }
        </header>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="app-footer">
            <p>{"Sumber data: Sistem Informasi Harga Pangan Kabupaten Ciamis"}</p>
        </footer>
    }
}
