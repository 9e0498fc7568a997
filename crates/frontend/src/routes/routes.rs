use crate::layout::Shell;
use crate::pages::form_builder::FormBuilderPage;
use crate::pages::form_preview::FormPreviewPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Route table. `base` is the mount prefix; every path below is nested under it.
#[component]
pub fn AppRoutes(#[prop(into)] base: String) -> impl IntoView {
    view! {
        <Router base=base>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/form-builder") view=FormBuilderPage />
                    <Route path=path!("/form-preview") view=FormPreviewPage />
                </Routes>
            </Shell>
        </Router>
    }
}
