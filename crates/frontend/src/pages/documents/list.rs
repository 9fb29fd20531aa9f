use crate::shared::components::table::ControlledTable;
use crate::shared::components::{MenuAction, PageHeader};
use crate::shared::hooks::{use_table_controls, PaginationChange, TableControlsArgs};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::shared::routes::Paths;
use contracts::shared::table::PageQuery;
use leptos::prelude::*;

const DOCUMENTS_PER_PAGE: i64 = 20;

#[component]
pub fn DocumentList() -> impl IntoView {
    let controls = use_table_controls(TableControlsArgs {
        pagination_query: Some(PageQuery::new(1, DOCUMENTS_PER_PAGE)),
        sort_by_query: None,
    });

    let back_to_first_page = Callback::new(move |_: ()| {
        controls.handle_pagination_change(PaginationChange::page(1));
    });

    view! {
        <PageFrame page_id="documents--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <PageHeader
                    title="Documents"
                    menu_actions=vec![
                        MenuAction::link("New document", Paths::NewDocument.as_str()),
                        MenuAction::new("First page", back_to_first_page),
                    ]
                />
            </div>
            <div class="page__content">
                <ControlledTable
                    controls=controls
                    columns=vec!["Title", "Company", "Updated"]
                    endpoint="/api/documents"
                    total_count=Signal::derive(|| 0)
                />
            </div>
        </PageFrame>
    }
}
