use crate::shared::components::{Breadcrumb, PageHeader};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use contracts::shared::routes::Paths;
use leptos::prelude::*;

#[component]
pub fn NewDocument() -> impl IntoView {
    view! {
        <PageFrame page_id="documents--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <PageHeader
                    title="New document"
                    breadcrumbs=vec![
                        Breadcrumb::link("Documents", Paths::DocumentList.as_str()),
                        Breadcrumb::current("New document"),
                    ]
                />
            </div>
        </PageFrame>
    }
}
