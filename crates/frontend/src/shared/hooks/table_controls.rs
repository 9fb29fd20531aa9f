//! Pagination and sort state of a table view.
//!
//! The state itself is a small reducer (`reduce`) over two actions. The hook
//! wraps it in an `RwSignal` owned by the calling component, so every table
//! gets its own independent state that lives as long as the view.

use contracts::shared::table::{PageQuery, SortByQuery, SortDirection};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use serde::Serialize;

/// Page sizes offered by the pagination controls.
pub const PER_PAGE_OPTIONS: &[i64] = &[10, 20, 50, 100];

/// Requested pagination change. `per_page: None` (or `0`) keeps the current size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaginationChange {
    pub page: i64,
    pub per_page: Option<i64>,
}

impl PaginationChange {
    pub fn page(page: i64) -> Self {
        Self {
            page,
            per_page: None,
        }
    }

    pub fn with_per_page(page: i64, per_page: i64) -> Self {
        Self {
            page,
            per_page: Some(per_page),
        }
    }
}

/// Column metadata passed along by table widgets on sort clicks. Not used by
/// the state, kept so sort handlers share one signature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtraColumnData {
    pub column_index: usize,
    pub property: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableControlsAction {
    SetPagination(PaginationChange),
    SetSortBy(SortByQuery),
}

/// Initial values supplied by the owning view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableControlsArgs {
    pub pagination_query: Option<PageQuery>,
    pub sort_by_query: Option<SortByQuery>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableControlsState {
    /// Set by the first dispatched action and never cleared.
    pub changed: bool,
    pub pagination_query: PageQuery,
    pub sort_by_query: Option<SortByQuery>,
}

impl Default for TableControlsState {
    fn default() -> Self {
        Self {
            changed: false,
            pagination_query: PageQuery::default(),
            sort_by_query: None,
        }
    }
}

impl TableControlsState {
    /// Defaults, then the caller's pagination, then the caller's sort.
    ///
    /// A caller pagination with `per_page == 0` keeps the default page size.
    pub fn initial(args: TableControlsArgs) -> Self {
        let mut state = Self::default();
        if let Some(pagination) = args.pagination_query {
            state.pagination_query.page = pagination.page;
            if pagination.per_page != 0 {
                state.pagination_query.per_page = pagination.per_page;
            }
        }
        if let Some(sort_by) = args.sort_by_query {
            state.sort_by_query = Some(sort_by);
        }
        state
    }
}

pub fn reduce(state: &TableControlsState, action: TableControlsAction) -> TableControlsState {
    match action {
        TableControlsAction::SetPagination(change) => TableControlsState {
            changed: true,
            pagination_query: PageQuery {
                page: change.page,
                per_page: change
                    .per_page
                    .filter(|per_page| *per_page != 0)
                    .unwrap_or(state.pagination_query.per_page),
            },
            ..*state
        },
        TableControlsAction::SetSortBy(sort_by) => TableControlsState {
            changed: true,
            sort_by_query: Some(sort_by),
            ..*state
        },
    }
}

/// Query parameters handed to whatever loads the rows of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableFetchQuery {
    pub page: i64,
    pub per_page: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<SortDirection>,
}

impl TableFetchQuery {
    pub fn new(pagination: PageQuery, sort_by: Option<SortByQuery>) -> Self {
        Self {
            page: pagination.page,
            per_page: pagination.per_page,
            sort_index: sort_by.map(|s| s.index),
            sort_direction: sort_by.map(|s| s.direction),
        }
    }

    pub fn to_query_string(&self) -> Result<String, serde_qs::Error> {
        serde_qs::to_string(self)
    }
}

/// Handle returned by [`use_table_controls`]. Cheap to copy into closures.
#[derive(Clone, Copy)]
pub struct TableControls {
    state: RwSignal<TableControlsState>,
    pub pagination_query: Signal<PageQuery>,
    pub sort_by_query: Signal<Option<SortByQuery>>,
    pub changed: Signal<bool>,
}

impl TableControls {
    fn dispatch(&self, action: TableControlsAction) {
        log::debug!("table controls: {:?}", action);
        self.state.update(|state| *state = reduce(state, action));
    }

    pub fn handle_pagination_change(&self, change: PaginationChange) {
        self.dispatch(TableControlsAction::SetPagination(change));
    }

    /// Signature mirrors table widget sort callbacks; `_event` and `_extra`
    /// do not affect the state.
    pub fn handle_sort_change(
        &self,
        _event: Option<MouseEvent>,
        index: usize,
        direction: SortDirection,
        _extra: ExtraColumnData,
    ) {
        self.dispatch(TableControlsAction::SetSortBy(SortByQuery::new(
            index, direction,
        )));
    }

    pub fn on_pagination_change(&self) -> Callback<PaginationChange> {
        let controls = *self;
        Callback::new(move |change| controls.handle_pagination_change(change))
    }

    pub fn on_sort_change(&self) -> Callback<(usize, SortDirection)> {
        let controls = *self;
        Callback::new(move |(index, direction): (usize, SortDirection)| {
            controls.handle_sort_change(
                None,
                index,
                direction,
                ExtraColumnData {
                    column_index: index,
                    property: None,
                },
            )
        })
    }

    pub fn snapshot(&self) -> TableControlsState {
        self.state.get_untracked()
    }

    pub fn fetch_query(&self) -> Signal<TableFetchQuery> {
        let state = self.state;
        Signal::derive(move || {
            state.with(|s| TableFetchQuery::new(s.pagination_query, s.sort_by_query))
        })
    }
}

pub fn use_table_controls(args: TableControlsArgs) -> TableControls {
    let state = RwSignal::new(TableControlsState::initial(args));

    TableControls {
        state,
        pagination_query: Signal::derive(move || state.with(|s| s.pagination_query)),
        sort_by_query: Signal::derive(move || state.with(|s| s.sort_by_query)),
        changed: Signal::derive(move || state.with(|s| s.changed)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    fn state(page: i64, per_page: i64, sort_by: Option<SortByQuery>) -> TableControlsState {
        TableControlsState {
            changed: false,
            pagination_query: PageQuery::new(page, per_page),
            sort_by_query: sort_by,
        }
    }

    #[test]
    fn test_initial_state_uses_defaults() {
        let s = TableControlsState::initial(TableControlsArgs::default());
        assert!(!s.changed);
        assert_eq!(s.pagination_query, PageQuery::new(1, 10));
        assert_eq!(s.sort_by_query, None);
    }

    #[test]
    fn test_initial_state_merges_caller_values() {
        let s = TableControlsState::initial(TableControlsArgs {
            pagination_query: Some(PageQuery::new(4, 50)),
            sort_by_query: Some(SortByQuery::new(2, SortDirection::Desc)),
        });
        assert!(!s.changed);
        assert_eq!(s.pagination_query, PageQuery::new(4, 50));
        assert_eq!(s.sort_by_query, Some(SortByQuery::new(2, SortDirection::Desc)));
    }

    #[test]
    fn test_initial_pagination_without_page_size_keeps_default() {
        let s = TableControlsState::initial(TableControlsArgs {
            pagination_query: Some(PageQuery::new(3, 0)),
            sort_by_query: None,
        });
        assert_eq!(s.pagination_query, PageQuery::new(3, 10));
    }

    #[test]
    fn test_pagination_without_per_page_keeps_previous() {
        let next = reduce(
            &state(1, 25, None),
            TableControlsAction::SetPagination(PaginationChange::page(2)),
        );
        assert_eq!(next.pagination_query, PageQuery::new(2, 25));
        assert!(next.changed);
    }

    #[test]
    fn test_pagination_with_zero_per_page_keeps_previous() {
        let next = reduce(
            &state(1, 25, None),
            TableControlsAction::SetPagination(PaginationChange::with_per_page(2, 0)),
        );
        assert_eq!(next.pagination_query, PageQuery::new(2, 25));
    }

    #[test]
    fn test_pagination_with_per_page_replaces_it() {
        let next = reduce(
            &state(1, 25, None),
            TableControlsAction::SetPagination(PaginationChange::with_per_page(3, 50)),
        );
        assert_eq!(next.pagination_query, PageQuery::new(3, 50));
    }

    #[test]
    fn test_pagination_passes_page_through_unvalidated() {
        let next = reduce(
            &state(1, 10, None),
            TableControlsAction::SetPagination(PaginationChange::page(-1)),
        );
        assert_eq!(next.pagination_query.page, -1);
    }

    #[test]
    fn test_pagination_keeps_sort() {
        let sort_by = Some(SortByQuery::new(1, SortDirection::Asc));
        let next = reduce(
            &state(1, 10, sort_by),
            TableControlsAction::SetPagination(PaginationChange::page(5)),
        );
        assert_eq!(next.sort_by_query, sort_by);
    }

    #[test]
    fn test_sort_replaces_previous_sort() {
        let next = reduce(
            &state(3, 20, Some(SortByQuery::new(1, SortDirection::Asc))),
            TableControlsAction::SetSortBy(SortByQuery::new(2, SortDirection::Desc)),
        );
        assert_eq!(next.sort_by_query, Some(SortByQuery::new(2, SortDirection::Desc)));
        assert_eq!(next.pagination_query, PageQuery::new(3, 20));
        assert!(next.changed);
    }

    #[test]
    fn test_changed_is_sticky() {
        let mut s = TableControlsState::default();
        assert!(!s.changed);

        let actions = [
            TableControlsAction::SetSortBy(SortByQuery::new(0, SortDirection::Asc)),
            TableControlsAction::SetPagination(PaginationChange::page(1)),
            TableControlsAction::SetPagination(PaginationChange::with_per_page(1, 10)),
            TableControlsAction::SetSortBy(SortByQuery::new(0, SortDirection::Asc)),
        ];
        for action in actions {
            s = reduce(&s, action);
            assert!(s.changed);
        }
    }

    #[test]
    fn test_fetch_query_string() {
        let unsorted = TableFetchQuery::new(PageQuery::new(2, 25), None);
        assert_eq!(unsorted.to_query_string().unwrap(), "page=2&perPage=25");

        let sorted = TableFetchQuery::new(
            PageQuery::new(1, 10),
            Some(SortByQuery::new(3, SortDirection::Desc)),
        );
        assert_eq!(
            sorted.to_query_string().unwrap(),
            "page=1&perPage=10&sortIndex=3&sortDirection=desc"
        );
    }

    #[test]
    fn test_hook_dispatches_into_its_own_state() {
        let owner = Owner::new();
        owner.with(|| {
            let controls = use_table_controls(TableControlsArgs {
                pagination_query: Some(PageQuery::new(1, 25)),
                sort_by_query: None,
            });
            let other = use_table_controls(TableControlsArgs::default());

            assert!(!controls.changed.get_untracked());

            controls.handle_pagination_change(PaginationChange::page(2));
            assert_eq!(controls.pagination_query.get_untracked(), PageQuery::new(2, 25));
            assert!(controls.changed.get_untracked());

            controls.on_sort_change().run((4, SortDirection::Desc));
            assert_eq!(
                controls.sort_by_query.get_untracked(),
                Some(SortByQuery::new(4, SortDirection::Desc))
            );
            assert_eq!(
                controls.fetch_query().get_untracked(),
                TableFetchQuery {
                    page: 2,
                    per_page: 25,
                    sort_index: Some(4),
                    sort_direction: Some(SortDirection::Desc),
                }
            );

            assert_eq!(other.snapshot(), TableControlsState::default());
        });
    }
}
