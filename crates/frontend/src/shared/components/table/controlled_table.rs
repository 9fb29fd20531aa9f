use super::SortableHeaderCell;
use crate::shared::api_utils::api_url;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::hooks::table_controls::TableControls;
use leptos::prelude::*;
use thaw::*;

/// Table skeleton driven by [`TableControls`]: sortable headers, pagination
/// and the request the data source would receive for the current state.
///
/// Rows are supplied by the caller; without them an empty-state row is shown.
#[component]
pub fn ControlledTable(
    controls: TableControls,

    /// Column labels, in column index order
    columns: Vec<&'static str>,

    /// Data API path the fetch query is addressed to
    endpoint: &'static str,

    #[prop(into)]
    total_count: Signal<i64>,

    #[prop(optional)]
    empty_text: Option<&'static str>,

    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let fetch_query = controls.fetch_query();
    let column_count = columns.len();

    let request_url = Memo::new(move |_| match fetch_query.get().to_query_string() {
        Ok(query) => Some(api_url(endpoint, &query)),
        Err(e) => {
            log::error!("failed to encode table query for {}: {}", endpoint, e);
            None
        }
    });

    Effect::new(move |_| {
        if let Some(url) = request_url.get() {
            log::debug!("table request: {}", url);
        }
    });

    let body = match children {
        Some(children) => children().into_any(),
        None => view! {
            <TableRow>
                <td class="thaw-table-cell table__empty" colspan=column_count.to_string()>
                    {empty_text.unwrap_or("No data")}
                </td>
            </TableRow>
        }
        .into_any(),
    };

    view! {
        <div
            class="table-wrapper"
            data-request=move || request_url.get()
            data-changed=move || controls.changed.get().to_string()
        >
            <Table>
                <TableHeader>
                    <TableRow>
                        {columns
                            .into_iter()
                            .enumerate()
                            .map(|(index, label)| {
                                view! {
                                    <SortableHeaderCell
                                        label=label
                                        index=index
                                        sort_by=controls.sort_by_query
                                        on_sort=controls.on_sort_change()
                                    />
                                }
                            })
                            .collect_view()}
                    </TableRow>
                </TableHeader>
                <TableBody>{body}</TableBody>
            </Table>
            <PaginationControls
                pagination_query=controls.pagination_query
                total_count=total_count
                on_change=controls.on_pagination_change()
            />
        </div>
    }
}
