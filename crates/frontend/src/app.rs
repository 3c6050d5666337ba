use crate::domain::chat::ui::ChatView;
use contracts::shared::endpoints::ChatEndpoints;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Fixed service locations, shared with every view via context.
    provide_context(ChatEndpoints::default());

    view! {
        <ConfigProvider>
            <ChatView />
        </ConfigProvider>
    }
}
