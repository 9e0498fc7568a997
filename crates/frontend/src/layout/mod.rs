pub mod nav_bar;

use leptos::prelude::*;
use nav_bar::NavBar;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |                 NavBar                   |
/// +------------------------------------------+
/// |             routed content               |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <NavBar />
            <main class="app-content">{children()}</main>
        </div>
    }
}
