use crate::routes::routes::AppRoutes;
use crate::shared::config::{load_config, AppConfig};
use crate::shared::state::FormStore;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config().unwrap_or_else(|e| {
        log::error!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });
    let base = config.router.base_path.clone();

    provide_context(config);
    // One store per session, shared by every view
    provide_context(FormStore::new());

    view! {
        <AppRoutes base=base />
    }
}
