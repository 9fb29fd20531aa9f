use crate::layout::Shell;
use crate::pages::companies::{CompanyDetails, CompanyList, NewCompany};
use crate::pages::controls::{
    BusinessServiceList, ControlsPage, StakeholderGroupList, StakeholderList, TagList,
};
use crate::pages::documents::{DocumentList, NewDocument};
use crate::pages::not_found::NotFound;
use contracts::shared::routes::Paths;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::{path, StaticSegment};

/// Mounts every entry of [`Paths`]. Static segments are declared before the
/// `:company` segment so `~new` is not taken for a company name.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route
                        path=path!("/")
                        view=|| view! { <Redirect path=Paths::CompanyList.as_str() /> }
                    />
                    <Route path=path!("/not-found") view=NotFound />

                    <Route path=path!("/companies") view=CompanyList />
                    <Route path=(StaticSegment("companies"), StaticSegment("~new")) view=NewCompany />
                    <Route path=path!("/companies/:company") view=CompanyDetails />

                    <Route path=path!("/documents") view=DocumentList />
                    <Route path=(StaticSegment("documents"), StaticSegment("~new")) view=NewDocument />

                    <ParentRoute path=path!("/controls") view=ControlsPage>
                        <Route
                            path=path!("")
                            view=|| view! { <Redirect path=Paths::ControlsBusinessServices.as_str() /> }
                        />
                        <Route path=path!("business-services") view=BusinessServiceList />
                        <Route path=path!("stakeholders") view=StakeholderList />
                        <Route path=path!("stakeholder-groups") view=StakeholderGroupList />
                        <Route path=path!("tags") view=TagList />
                    </ParentRoute>
                </Routes>
            </Shell>
        </Router>
    }
}
