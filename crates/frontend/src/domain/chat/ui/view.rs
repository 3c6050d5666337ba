//! Chat View - View Component

use super::message_row::{MessageRow, TypingRow};
use super::view_model::ChatViewVm;
use crate::shared::icons::icon;
use contracts::domain::chat::texts;
use contracts::shared::endpoints::ChatEndpoints;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ChatView() -> impl IntoView {
    let endpoints = use_context::<ChatEndpoints>().unwrap_or_default();
    let accept_mime = endpoints.accept_mime.clone();
    let vm = ChatViewVm::new(endpoints);
    let end_of_chat_ref = NodeRef::<leptos::html::Div>::new();

    let messages = Memo::new(move |_| vm.session.with(|s| s.messages().to_vec()));
    let is_sending = Memo::new(move |_| vm.session.with(|s| s.show_typing()));
    let is_uploading = Memo::new(move |_| vm.session.with(|s| s.upload.is_uploading()));
    let can_send = Memo::new(move |_| vm.session.with(|s| s.composer.can_send()));
    let draft = Memo::new(move |_| vm.session.with(|s| s.composer.draft.clone()));
    let upload_label = Memo::new(move |_| vm.session.with(|s| s.upload.label()));

    // Scroll to the newest row after every transcript or typing change
    Effect::new(move |_| {
        messages.track();
        is_sending.track();
        if let Some(end) = end_of_chat_ref.get() {
            request_animation_frame(move || {
                let opts = web_sys::ScrollIntoViewOptions::new();
                opts.set_behavior(web_sys::ScrollBehavior::Smooth);
                end.scroll_into_view_with_scroll_into_view_options(&opts);
            });
        }
    });

    let on_file_change = move |ev: leptos::ev::Event| {
        use wasm_bindgen::JsCast;
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            vm.upload_file(file);
        }
        // Allow picking the same file again
        input.set_value("");
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_message();
    };

    view! {
        <div style="position: fixed; inset: 0; display: flex; flex-direction: column; overflow: hidden; background: linear-gradient(to bottom right, #f8fafc, #eaf1fb);">
            // Header
            <Flex
                align=FlexAlign::Center
                style="gap: 12px; padding: 20px 24px; background: white; border-bottom: 1px solid var(--colorNeutralStroke2);"
            >
                <div style="width: 12px; height: 12px; border-radius: 50%; padding: 6px; background: linear-gradient(to right, #4285F4, #34A853, #FBBC05);"></div>
                <div>
                    <div style="font-size: 18px; font-weight: 600;">{texts::HEADER_TITLE}</div>
                    <div style="font-size: 12px; color: var(--colorNeutralForeground3);">
                        {texts::HEADER_SUBTITLE}
                    </div>
                </div>
            </Flex>

            // Messages area
            <div style="flex: 1; overflow-y: auto; padding: 24px;">
                <Show when=move || messages.with(|m| m.is_empty())>
                    <div style="display: flex; flex-direction: column; align-items: center; margin-top: 96px; text-align: center; color: var(--colorNeutralForeground3);">
                        <div style="font-size: 20px; font-weight: 600; margin-bottom: 8px;">
                            {texts::EMPTY_TITLE}
                        </div>
                        <div style="font-size: 14px;">{texts::EMPTY_SUBTITLE}</div>
                    </div>
                </Show>
                <div style="display: flex; flex-direction: column; gap: 24px;">
                    <For each=move || messages.get() key=|msg| msg.id let:msg>
                        <MessageRow message=msg />
                    </For>
                    <Show when=move || is_sending.get()>
                        <TypingRow />
                    </Show>
                    <div node_ref=end_of_chat_ref></div>
                </div>
            </div>

            // File upload + input
            <div style="display: flex; flex-direction: column; gap: 8px; padding: 16px 24px; background: white; border-top: 1px solid var(--colorNeutralStroke2);">
                <label style=move || {
                    if is_uploading.get() {
                        "display: flex; align-items: center; gap: 8px; padding: 12px; border-radius: 12px; border: 1px dashed var(--colorNeutralStroke1); opacity: 0.6; pointer-events: none;"
                    } else {
                        "display: flex; align-items: center; gap: 8px; padding: 12px; border-radius: 12px; border: 1px dashed var(--colorNeutralStroke1); cursor: pointer;"
                    }
                }>
                    {move || {
                        if is_uploading.get() {
                            view! { <Spinner size=SpinnerSize::Small /> }.into_any()
                        } else {
                            icon("upload")
                        }
                    }}
                    <span style="font-size: 14px; font-weight: 500;">{move || upload_label.get()}</span>
                    <input
                        type="file"
                        accept=accept_mime
                        style="display: none;"
                        disabled=move || is_uploading.get()
                        on:change=on_file_change
                    />
                </label>

                <form on:submit=on_submit style="display: flex; align-items: center; gap: 12px; margin-top: 4px;">
                    <input
                        type="text"
                        autocomplete="off"
                        placeholder=texts::COMPOSER_PLACEHOLDER
                        style="flex: 1; padding: 10px 16px; border-radius: 9999px; border: 1px solid var(--colorNeutralStroke2); background: #f1f3f4;"
                        prop:value=move || draft.get()
                        on:input=move |ev| vm.set_draft(event_target_value(&ev))
                        disabled=move || is_sending.get()
                    />
                    <button
                        type="submit"
                        style="width: 40px; height: 40px; border: none; border-radius: 50%; display: flex; align-items: center; justify-content: center; color: white; cursor: pointer; background: linear-gradient(to top right, #4285F4, #34A853);"
                        disabled=move || !can_send.get()
                    >
                        {icon("send")}
                    </button>
                </form>
            </div>
        </div>
    }
}
