//! Sortable table header cell bound to a column index.
//!
//! # Example
//!
//! ```ignore
//! let controls = use_table_controls(TableControlsArgs::default());
//!
//! <SortableHeaderCell
//!     label="Name"
//!     index=0
//!     sort_by=controls.sort_by_query
//!     on_sort=controls.on_sort_change()
//! />
//! ```

use contracts::shared::table::{SortByQuery, SortDirection};
use leptos::prelude::*;
use thaw::*;

/// Direction requested by a click on column `index`: the active column flips,
/// any other column starts ascending.
pub fn next_sort_direction(current: Option<SortByQuery>, index: usize) -> SortDirection {
    match current {
        Some(sort_by) if sort_by.index == index => sort_by.direction.toggled(),
        _ => SortDirection::Asc,
    }
}

pub fn sort_indicator(current: Option<SortByQuery>, index: usize) -> &'static str {
    match current {
        Some(sort_by) if sort_by.index == index => match sort_by.direction {
            SortDirection::Asc => " ▲",
            SortDirection::Desc => " ▼",
        },
        _ => " ⇅",
    }
}

pub fn sort_class(current: Option<SortByQuery>, index: usize) -> &'static str {
    match current {
        Some(sort_by) if sort_by.index == index => "table__sort-icon table__sort-icon--active",
        _ => "table__sort-icon",
    }
}

#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    /// Column position reported to `on_sort`
    index: usize,

    #[prop(into)]
    sort_by: Signal<Option<SortByQuery>>,

    on_sort: Callback<(usize, SortDirection)>,

    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Header alignment (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,

    #[prop(optional, default = true)]
    resizable: bool,
) -> impl IntoView {
    let handle_click = move |_| {
        let direction = next_sort_direction(sort_by.get_untracked(), index);
        on_sort.run((index, direction));
    };

    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px;"
    } else {
        "cursor: pointer; padding-right: 12px;"
    };

    view! {
        <TableHeaderCell
            resizable=resizable
            min_width=min_width
            class="resizable"
        >
            <div
                class="table__sortable-header"
                style=header_style
                on:click=handle_click
            >
                {label}
                <span class=move || sort_class(sort_by.get(), index)>
                    {move || sort_indicator(sort_by.get(), index)}
                </span>
            </div>
        </TableHeaderCell>
    }
}
