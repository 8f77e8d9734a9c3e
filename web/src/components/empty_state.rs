use leptos::prelude::*;
use shared::display::DisplayConfig;

/// "No data" placeholder. Both props are optional; an omitted message falls
/// back to "No items found", an omitted class to the default empty-state
/// token. A supplied class replaces the default, it is not merged.
#[component]
pub fn EmptyState(
    #[prop(optional)] message: Option<&'static str>,
    #[prop(optional)] class: Option<&'static str>,
) -> impl IntoView {
    let resolved = DisplayConfig {
        message: message.map(str::to_string),
        container_class: class.map(str::to_string),
    }
    .resolve();

    view! {
        <div class=resolved.container_class>
            <p>{resolved.message}</p>
        </div>
    }
}
