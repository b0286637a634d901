use yew::prelude::*;

use crate::models::dataset::DatasetSource;

const SKELETON_CARDS: usize = 6;

pub const FALLBACK_NOTICE: &str = "Gagal memuat data. Menampilkan data contoh.";
pub const RESIDENT_NOTICE: &str = "Gagal memperbarui data. Menampilkan data terakhir.";

/// Placeholder grid shown until the first load settles.
#[function_component(LoadingSkeleton)]
pub fn loading_skeleton() -> Html {
    html! {
        <div class="product-grid loading" aria-busy="true">
            {
                (0..SKELETON_CARDS).map(|i| html! {
                    <div class="product-card skeleton" key={i}>
                        <div class="skeleton-image" />
                        <div class="skeleton-line wide" />
                        <div class="skeleton-line" />
                        <div class="skeleton-line short" />
                    </div>
                }).collect::<Html>()
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeProps {
    pub source: DatasetSource,
    /// Why the latest fetch could not be used
    pub detail: String,
}

/// Shown above the records when the latest fetch failed.
#[function_component(FallbackNotice)]
pub fn fallback_notice(props: &NoticeProps) -> Html {
    let message = match props.source {
        DatasetSource::Resident => RESIDENT_NOTICE,
        DatasetSource::Remote | DatasetSource::Fallback => FALLBACK_NOTICE,
    };

    html! {
        <div class="status error" role="alert" title={props.detail.clone()}>
            <p>{message}</p>
        </div>
    }
}

#[function_component(InfoBanner)]
pub fn info_banner() -> Html {
    html! {
        <div class="info-banner">
            <p>
                {"Harga rata-rata komoditas pangan di pasar-pasar Kabupaten Ciamis. "}
                {"Klik kartu komoditas untuk melihat grafik perkembangan harga per pasar."}
            </p>
        </div>
    }
}
