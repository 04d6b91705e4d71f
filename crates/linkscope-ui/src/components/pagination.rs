use crate::core::logic::{next_page, page_numbers, prev_page};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PaginationProps {
    pub page: usize,
    pub total_pages: usize,
    pub on_page: Callback<usize>,
}

#[function_component(Pagination)]
pub(crate) fn pagination(props: &PaginationProps) -> Html {
    let jump = |target: Option<usize>| {
        let on_page = props.on_page.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(page) = target {
                on_page.emit(page);
            }
        })
    };
    let prev = prev_page(props.page);
    let next = next_page(props.page, props.total_pages);

    html! {
        <nav class="pagination" aria-label="Pagination">
            <button class="btn" disabled={prev.is_none()} onclick={jump(prev)}>{"Prev"}</button>
            {for page_numbers(props.total_pages).into_iter().map(|page| {
                let active = page == props.page;
                html! {
                    <button
                        class={classes!("btn", active.then_some("btn-active"))}
                        aria-current={active.then_some("page")}
                        onclick={jump(Some(page))}
                    >
                        {page}
                    </button>
                }
            })}
            <button class="btn" disabled={next.is_none()} onclick={jump(next)}>{"Next"}</button>
        </nav>
    }
}
