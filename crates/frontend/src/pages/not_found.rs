use crate::shared::components::{Breadcrumb, PageHeader};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use contracts::shared::routes::Paths;
use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <PageFrame page_id="not_found--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <PageHeader
                    title="Page not found"
                    breadcrumbs=vec![Breadcrumb::link("Home", Paths::Base.as_str())]
                />
            </div>
            <div class="page__content">
                <p>"The requested page does not exist."</p>
            </div>
        </PageFrame>
    }
}
