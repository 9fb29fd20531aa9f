use crate::shared::components::{Breadcrumb, PageHeader};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use contracts::shared::routes::Paths;
use leptos::prelude::*;

#[component]
pub fn NewCompany() -> impl IntoView {
    view! {
        <PageFrame page_id="companies--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <PageHeader
                    title="New company"
                    breadcrumbs=vec![
                        Breadcrumb::link("Companies", Paths::CompanyList.as_str()),
                        Breadcrumb::current("New company"),
                    ]
                />
            </div>
        </PageFrame>
    }
}
