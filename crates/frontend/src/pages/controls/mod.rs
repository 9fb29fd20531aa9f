pub mod controls_header;
pub mod lists;

pub use controls_header::ControlsHeader;
pub use lists::{BusinessServiceList, StakeholderGroupList, StakeholderList, TagList};

use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use leptos::prelude::*;
use leptos_router::components::Outlet;

/// Controls section: shared header with tabs, active tab below.
#[component]
pub fn ControlsPage() -> impl IntoView {
    view! {
        <PageFrame page_id="controls--list" category=PAGE_CAT_LIST>
            <ControlsHeader />
            <div class="page__content">
                <Outlet />
            </div>
        </PageFrame>
    }
}
