use crate::shared::icons::icon;
use contracts::domain::chat::{texts, Message};
use leptos::prelude::*;

const BUBBLE_BASE: &str = "padding: 12px 16px; max-width: 70%; font-size: 14px; white-space: pre-wrap; word-break: break-word; border-radius: 12px; box-shadow: 0 1px 2px rgba(0, 0, 0, 0.08);";

#[component]
#[allow(non_snake_case)]
pub fn MessageRow(message: Message) -> impl IntoView {
    let is_user = message.is_user();
    let sender = message.sender.as_str();
    let bubble_style = if is_user {
        format!("{BUBBLE_BASE} background: var(--colorBrandBackground); color: var(--colorNeutralForegroundOnBrand); border-bottom-right-radius: 4px;")
    } else {
        format!("{BUBBLE_BASE} background: var(--colorNeutralBackground1); border: 1px solid var(--colorNeutralStroke2); border-bottom-left-radius: 4px;")
    };

    view! {
        <div
            class="chat-row"
            data-sender=sender
            style=if is_user {
                "display: flex; justify-content: flex-end; align-items: flex-end; gap: 12px;"
            } else {
                "display: flex; justify-content: flex-start; align-items: flex-end; gap: 12px;"
            }
        >
            {(!is_user).then(|| view! { <Avatar is_user=false /> })}
            <div style=bubble_style>{message.text.clone()}</div>
            {is_user.then(|| view! { <Avatar is_user=true /> })}
        </div>
    }
}

/// Временная строка, пока ждём ответ. В транскрипт не попадает.
#[component]
#[allow(non_snake_case)]
pub fn TypingRow() -> impl IntoView {
    view! {
        <div class="chat-row chat-row--typing" style="display: flex; justify-content: flex-start;">
            <div style=format!("{BUBBLE_BASE} background: var(--colorNeutralBackground1); border: 1px solid var(--colorNeutralStroke2); opacity: 0.7;")>
                {texts::TYPING}
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn Avatar(is_user: bool) -> impl IntoView {
    let background = if is_user {
        "linear-gradient(to top right, #FBBC05, #EA4335)"
    } else {
        "linear-gradient(to top right, #4285F4, #34A853)"
    };
    view! {
        <div style=format!("width: 32px; height: 32px; flex-shrink: 0; border-radius: 50%; display: flex; align-items: center; justify-content: center; color: white; background: {background};")>
            {icon(if is_user { "user" } else { "bot" })}
        </div>
    }
}
