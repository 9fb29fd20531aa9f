//! Tab contents of the controls section. Every tab is a listing with its own
//! table controls, sorted by name until the user picks another column.

use crate::shared::components::table::ControlledTable;
use crate::shared::hooks::{use_table_controls, TableControlsArgs};
use contracts::shared::table::{SortByQuery, SortDirection};
use leptos::prelude::*;

fn sorted_by_name() -> TableControlsArgs {
    TableControlsArgs {
        pagination_query: None,
        sort_by_query: Some(SortByQuery::new(0, SortDirection::Asc)),
    }
}

#[component]
fn ControlsList(columns: Vec<&'static str>, endpoint: &'static str) -> impl IntoView {
    let controls = use_table_controls(sorted_by_name());

    view! {
        <ControlledTable
            controls=controls
            columns=columns
            endpoint=endpoint
            total_count=Signal::derive(|| 0)
        />
    }
}

#[component]
pub fn BusinessServiceList() -> impl IntoView {
    view! {
        <ControlsList
            columns=vec!["Name", "Description", "Owner"]
            endpoint="/api/controls/business-services"
        />
    }
}

#[component]
pub fn StakeholderList() -> impl IntoView {
    view! {
        <ControlsList
            columns=vec!["Email", "Display name", "Job function", "Groups"]
            endpoint="/api/controls/stakeholders"
        />
    }
}

#[component]
pub fn StakeholderGroupList() -> impl IntoView {
    view! {
        <ControlsList
            columns=vec!["Name", "Description", "Members"]
            endpoint="/api/controls/stakeholder-groups"
        />
    }
}

#[component]
pub fn TagList() -> impl IntoView {
    view! {
        <ControlsList
            columns=vec!["Tag type", "Rank", "Color", "Tags"]
            endpoint="/api/controls/tags"
        />
    }
}
