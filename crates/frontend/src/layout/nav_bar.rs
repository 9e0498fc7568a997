use crate::routes::AppRoute;
use crate::shared::config::use_base_path;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

/// Top navigation bar; highlights the link of the active view.
#[component]
pub fn NavBar() -> impl IntoView {
    let base = use_base_path();
    let location = use_location();
    let active = {
        let base = base.clone();
        Memo::new(move |_| AppRoute::resolve(&base, &location.pathname.get()))
    };

    Effect::new(move |_| match active.get() {
        Some(route) => log::debug!("Active route: {}", route.name()),
        None => log::debug!("No route matches the current path"),
    });

    view! {
        <nav class="top-nav">
            <span class="top-nav__brand">"Генератор форм"</span>
            {AppRoute::all()
                .into_iter()
                .map(|route| {
                    view! {
                        <A
                            href=route.href(&base)
                            attr:class=move || {
                                if active.get() == Some(route) {
                                    "top-nav__link top-nav__link--active"
                                } else {
                                    "top-nav__link"
                                }
                            }
                        >
                            {route.title()}
                        </A>
                    }
                })
                .collect_view()}
        </nav>
    }
}
