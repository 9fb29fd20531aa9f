use crate::shared::components::page_header::is_nav_item_active;
use contracts::shared::routes::Paths;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

/// Top-level sections shown in the application bar.
pub const SECTIONS: &[(&str, Paths)] = &[
    ("Companies", Paths::CompanyList),
    ("Documents", Paths::DocumentList),
    ("Controls", Paths::Controls),
];

#[component]
pub fn Header() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <A href=Paths::Base.as_str() attr:class="header__title">"Portal"</A>
                <nav class="header__sections">
                    {SECTIONS
                        .iter()
                        .map(|&(title, path)| {
                            let class = move || {
                                if is_nav_item_active(&pathname.get(), path.as_str()) {
                                    "header__section header__section--active"
                                } else {
                                    "header__section"
                                }
                            };
                            view! {
                                <span class=class>
                                    <A href=path.as_str()>{title}</A>
                                </span>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </header>
    }
}
