use contracts::shared::routes::Paths;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub title: String,
    /// `None` renders plain text (usually the current page).
    pub path: Option<String>,
}

impl Breadcrumb {
    pub fn link(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: Some(path.into()),
        }
    }

    pub fn current(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: None,
        }
    }
}

#[derive(Clone)]
pub enum MenuTarget {
    Path(String),
    Callback(Callback<()>),
}

#[derive(Clone)]
pub struct MenuAction {
    pub label: String,
    pub target: MenuTarget,
}

impl MenuAction {
    pub fn new(label: impl Into<String>, on_select: Callback<()>) -> Self {
        Self {
            label: label.into(),
            target: MenuTarget::Callback(on_select),
        }
    }

    pub fn link(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: MenuTarget::Path(path.into()),
        }
    }
}

/// Tab of the header navigation, bound to an application path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub title: String,
    pub path: String,
}

impl NavItem {
    pub fn new(title: impl Into<String>, path: Paths) -> Self {
        Self {
            title: title.into(),
            path: path.as_str().to_string(),
        }
    }

    /// For tabs pointing to an already formatted (parameterized) path.
    pub fn with_path(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
        }
    }
}

/// A tab is active on its own path and on any path nested below it.
pub fn is_nav_item_active(current_path: &str, item_path: &str) -> bool {
    let current = current_path.trim_end_matches('/');
    let item = item_path.trim_end_matches('/');
    if item.is_empty() {
        return current.is_empty();
    }
    current == item
        || current
            .strip_prefix(item)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Which optional regions of a [`PageHeader`] are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderSections {
    pub breadcrumbs: bool,
    pub actions: bool,
    pub tabs: bool,
}

impl HeaderSections {
    pub fn of(breadcrumbs: &[Breadcrumb], menu_actions: &[MenuAction], nav_items: &[NavItem]) -> Self {
        Self {
            breadcrumbs: !breadcrumbs.is_empty(),
            actions: !menu_actions.is_empty(),
            tabs: !nav_items.is_empty(),
        }
    }
}

/// PageHeader component - title, breadcrumbs, menu actions and navigation tabs
///
/// Purely structural: every list is optional and renders nothing when empty.
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    #[prop(optional)]
    breadcrumbs: Vec<Breadcrumb>,

    #[prop(optional)]
    menu_actions: Vec<MenuAction>,

    #[prop(optional)]
    nav_items: Vec<NavItem>,
) -> impl IntoView {
    let pathname = use_location().pathname;
    let sections = HeaderSections::of(&breadcrumbs, &menu_actions, &nav_items);

    let breadcrumbs_view = sections.breadcrumbs.then(|| {
        view! {
            <nav class="page-header__breadcrumbs" aria-label="Breadcrumb">
                <ol>
                    {breadcrumbs
                        .into_iter()
                        .map(|crumb| {
                            let item = match crumb.path {
                                Some(path) => view! { <A href=path>{crumb.title}</A> }.into_any(),
                                None => view! { <span>{crumb.title}</span> }.into_any(),
                            };
                            view! { <li class="page-header__breadcrumb">{item}</li> }
                        })
                        .collect_view()}
                </ol>
            </nav>
        }
    });

    let actions_view = sections.actions.then(|| {
        view! {
            <div class="page-header__actions">
                {menu_actions
                    .into_iter()
                    .map(|action| match action.target {
                        MenuTarget::Path(path) => view! {
                            <A href=path attr:class="button button--ghost">{action.label}</A>
                        }
                        .into_any(),
                        MenuTarget::Callback(on_select) => view! {
                            <button
                                class="button button--ghost"
                                on:click=move |_| on_select.run(())
                            >
                                {action.label}
                            </button>
                        }
                        .into_any(),
                    })
                    .collect_view()}
            </div>
        }
    });

    let tabs_view = sections.tabs.then(|| {
        view! {
            <nav class="page-header__tabs">
                <ul>
                    {nav_items
                        .into_iter()
                        .map(|item| {
                            let item_path = item.path.clone();
                            let class = move || {
                                if is_nav_item_active(&pathname.get(), &item_path) {
                                    "page-header__tab page-header__tab--active"
                                } else {
                                    "page-header__tab"
                                }
                            };
                            view! {
                                <li class=class>
                                    <A href=item.path>{item.title}</A>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
        }
    });

    view! {
        <div class="page-header">
            {breadcrumbs_view}
            <div class="page-header__content">
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                </div>
                {actions_view}
            </div>
            {tabs_view}
        </div>
    }
}
