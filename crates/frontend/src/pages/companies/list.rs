use crate::shared::components::table::ControlledTable;
use crate::shared::components::{MenuAction, PageHeader};
use crate::shared::hooks::{use_table_controls, TableControlsArgs};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::shared::routes::Paths;
use leptos::prelude::*;

#[component]
pub fn CompanyList() -> impl IntoView {
    let controls = use_table_controls(TableControlsArgs::default());

    view! {
        <PageFrame page_id="companies--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <PageHeader
                    title="Companies"
                    menu_actions=vec![MenuAction::link("New company", Paths::NewCompany.as_str())]
                />
            </div>
            <div class="page__content">
                <ControlledTable
                    controls=controls
                    columns=vec!["Name", "Description", "Documents"]
                    endpoint="/api/companies"
                    total_count=Signal::derive(|| 0)
                    empty_text="No companies available"
                />
            </div>
        </PageFrame>
    }
}
