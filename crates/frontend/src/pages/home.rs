use crate::routes::AppRoute;
use crate::shared::config::use_base_path;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    let base = use_base_path();

    view! {
        <section class="page page--home">
            <h1>"Генератор форм"</h1>
            <p>"Соберите форму из полей, сохраните её и проверьте, как она выглядит для пользователя."</p>
            <div class="page__actions">
                <A href=AppRoute::FormBuilder.href(&base) attr:class="button button--primary">
                    "Создать форму"
                </A>
                <A href=AppRoute::FormPreview.href(&base) attr:class="button">
                    "Открыть сохранённую"
                </A>
            </div>
        </section>
    }
}
