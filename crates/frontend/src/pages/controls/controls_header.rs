use crate::shared::components::{NavItem, PageHeader};
use contracts::shared::routes::Paths;
use leptos::prelude::*;

pub fn controls_nav_items() -> Vec<NavItem> {
    vec![
        NavItem::new("Business services", Paths::ControlsBusinessServices),
        NavItem::new("Stakeholders", Paths::ControlsStakeholders),
        NavItem::new("Stakeholder groups", Paths::ControlsStakeholderGroups),
        NavItem::new("Tags", Paths::ControlsTags),
    ]
}

#[component]
pub fn ControlsHeader() -> impl IntoView {
    view! {
        <div class="page__header">
            <PageHeader title="Controls" nav_items=controls_nav_items() />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_point_into_controls_section() {
        let items = controls_nav_items();
        assert_eq!(items.len(), 4);
        for item in &items {
            assert!(item.path.starts_with(Paths::Controls.as_str()));
            assert!(Paths::from_path(&item.path).is_some());
        }
    }
}
