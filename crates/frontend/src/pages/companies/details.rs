use crate::shared::components::{Breadcrumb, NavItem, PageHeader};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use contracts::shared::routes::{format_route, CompanyRoute, Paths};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Tabs of a single company. Returns an error when the route cannot be built.
pub fn company_nav_items(company: &str) -> anyhow::Result<Vec<NavItem>> {
    let route = CompanyRoute {
        company: company.to_string(),
    };
    Ok(vec![
        NavItem::with_path("Details", format_route(Paths::EditCompany, &route)?),
        NavItem::new("Documents", Paths::DocumentList),
    ])
}

#[component]
pub fn CompanyDetails() -> impl IntoView {
    let params = use_params_map();
    let company = move || params.with(|p| p.get("company")).unwrap_or_default();

    let header = move || {
        let company = company();
        let nav_items = company_nav_items(&company).unwrap_or_else(|e| {
            log::error!("cannot build company tabs: {:#}", e);
            Vec::new()
        });
        view! {
            <PageHeader
                title=company.clone()
                breadcrumbs=vec![
                    Breadcrumb::link("Companies", Paths::CompanyList.as_str()),
                    Breadcrumb::current(company),
                ]
                nav_items=nav_items
            />
        }
    };

    view! {
        <PageFrame page_id="companies--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">{header}</div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_tabs() {
        let items = company_nav_items("acme").unwrap();
        assert_eq!(items[0].path, "/companies/acme");
        assert_eq!(items[1].path, "/documents");
    }

    #[test]
    fn test_empty_company_still_formats() {
        let items = company_nav_items("").unwrap();
        assert_eq!(items[0].path, "/companies/");
    }
}
