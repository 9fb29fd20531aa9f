pub mod header;

pub use header::Header;

use leptos::prelude::*;

/// Application shell: top bar and the routed page below it.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <main class="app-layout__content">{children()}</main>
        </div>
    }
}
