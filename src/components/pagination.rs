use yew::prelude::*;

use crate::models::pagination::Pagination;

#[derive(Properties, PartialEq)]
pub struct PaginationBarProps {
    pub pagination: Pagination,
    pub on_page: Callback<usize>,
}

#[function_component(PaginationBar)]
pub fn pagination_bar(props: &PaginationBarProps) -> Html {
    let pagination = props.pagination;
    let total_pages = pagination.total_pages();

    if total_pages <= 1 {
        return html! {};
    }

    let go_to = |page: usize| {
        let on_page = props.on_page.clone();
        Callback::from(move |_: MouseEvent| on_page.emit(page))
    };

    html! {
        <nav class="pagination" aria-label="Halaman">
            <button
                class="page-button"
                disabled={!pagination.has_previous()}
                onclick={go_to(pagination.page.saturating_sub(1))}
            >
                {"Sebelumnya"}
            </button>
            {
                (1..=total_pages).map(|page| {
                    let current = page == pagination.page;
                    html! {
                        <button
                            key={page}
                            class={classes!("page-button", current.then_some("active"))}
                            aria-current={current.then_some("page")}
                            onclick={go_to(page)}
                        >
                            {page}
                        </button>
                    }
                }).collect::<Html>()
            }
            <button
                class="page-button"
                disabled={!pagination.has_next()}
                onclick={go_to(pagination.page + 1)}
            >
                {"Berikutnya"}
            </button>
        </nav>
    }
}
