use crate::routes::AppRoute;
use crate::shared::config::use_base_path;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let base = use_base_path();

    view! {
        <section class="page page--not-found">
            <h1>"Страница не найдена"</h1>
            <A href=AppRoute::Home.href(&base)>"На главную"</A>
        </section>
    }
}
