use crate::shared::hooks::table_controls::{PaginationChange, PER_PAGE_OPTIONS};
use crate::shared::icons::icon;
use contracts::shared::table::PageQuery;
use leptos::prelude::*;

/// Number of pages needed for `total_count` rows, at least 1.
pub fn total_pages(total_count: i64, per_page: i64) -> i64 {
    if per_page <= 0 || total_count <= 0 {
        return 1;
    }
    (total_count - 1) / per_page + 1
}

/// PaginationControls component - first/prev/next/last buttons and page size
/// selector bound to a 1-based [`PageQuery`].
#[component]
pub fn PaginationControls(
    /// Current page window
    #[prop(into)]
    pagination_query: Signal<PageQuery>,

    /// Total count of items known to the data source
    #[prop(into)]
    total_count: Signal<i64>,

    /// Callback receiving the requested change
    on_change: Callback<PaginationChange>,

    /// Available page size options (optional, defaults to `PER_PAGE_OPTIONS`)
    #[prop(optional)]
    per_page_options: Option<Vec<i64>>,
) -> impl IntoView {
    let per_page_opts = per_page_options.unwrap_or_else(|| PER_PAGE_OPTIONS.to_vec());

    let page = move || pagination_query.get().page;
    let pages = move || total_pages(total_count.get(), pagination_query.get().per_page);
    let is_first = move || page() <= 1;
    let is_last = move || page() >= pages();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_change.run(PaginationChange::page(1))
                disabled=is_first
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if !is_first() {
                        on_change.run(PaginationChange::page(page() - 1));
                    }
                }
                disabled=is_first
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!("{} / {} ({})", page(), pages(), total_count.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if !is_last() {
                        on_change.run(PaginationChange::page(page() + 1));
                    }
                }
                disabled=is_last
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_change.run(PaginationChange::page(pages()))
                disabled=is_last
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    match event_target_value(&ev).parse::<i64>() {
                        // a new page size restarts from the first page
                        Ok(per_page) => on_change.run(PaginationChange::with_per_page(1, per_page)),
                        Err(e) => log::error!("invalid page size: {}", e),
                    }
                }
                prop:value=move || pagination_query.get().per_page.to_string()
            >
                {per_page_opts.iter().map(|&size| {
                    view! {
                        <option
                            value=size.to_string()
                            selected=move || pagination_query.get().per_page == size
                        >
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(95, 20), 5);
    }

    #[test]
    fn test_total_pages_with_degenerate_page_size() {
        assert_eq!(total_pages(50, 0), 1);
        assert_eq!(total_pages(50, -5), 1);
    }

    #[test]
    fn test_total_pages_near_i64_max() {
        assert_eq!(total_pages(i64::MAX, 1), i64::MAX);
        assert_eq!(total_pages(i64::MAX, 2), i64::MAX / 2 + 1);
        assert_eq!(total_pages(i64::MAX, i64::MAX), 1);
    }
}
