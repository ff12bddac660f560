//! Assistant Chat - Floating widget

use super::chat_log::ChatMessage;
use super::model::{ask_assistant, is_send_key, reply_for};
use super::view_model::ChatWidgetVm;
use crate::shared::api_utils::AppConfig;
use crate::shared::icons::icon;
use contracts::domain::a002_assistant_chat::ChatRole;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u503_ask_assistant::AskAssistant;
use leptos::prelude::*;
use thaw::*;

fn bubble_style(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => "background: #007bff; color: white; padding: 10px; border-radius: 10px; margin-bottom: 10px; max-width: 80%; align-self: flex-end;",
        ChatRole::Assistant => "background: #f1f1f1; color: black; padding: 10px; border-radius: 10px; margin-bottom: 10px; max-width: 80%; align-self: flex-start;",
    }
}

#[component]
#[allow(non_snake_case)]
fn ChatBubble(message: ChatMessage) -> impl IntoView {
    let class = if message.is_placeholder {
        "chat-bubble chat-bubble--typing"
    } else {
        "chat-bubble"
    };
    let time = message.sent_at.format("%H:%M").to_string();

    view! {
        <div class=class style=bubble_style(message.role)>
            <strong>{format!("{}:", message.sender())}</strong>
            " "
            <span style="white-space: pre-wrap;">{message.text.clone()}</span>
            <div style="font-size: 10px; opacity: 0.6; margin-top: 4px; text-align: right;">{time}</div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ChatWidget() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig context not found");
    let vm = ChatWidgetVm::new();
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();
    let url = config.api_url(AskAssistant::endpoint());

    // Keep the newest bubble in view after every append
    Effect::new(move |_| {
        vm.log.track();
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    let handle_send = Callback::new(move |_: ()| {
        let mut pending = None;
        vm.log.update(|log| pending = log.submit(&vm.input.get_untracked()));
        let Some(pending) = pending else {
            return;
        };
        vm.input.set(String::new());

        let url = url.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let reply = reply_for(ask_assistant(&url, pending.message).await);
            vm.log
                .update(|log| log.finish_reply(pending.placeholder_id, reply));
        });
    });

    view! {
        <div class="chat-widget" style="position: fixed; right: 24px; bottom: 24px; z-index: 1000; display: flex; flex-direction: column; align-items: flex-end; gap: 12px;">
            <div
                id="chatBox"
                class="chat-widget__panel"
                style=move || format!(
                    "display: {}; flex-direction: column; width: 340px; height: 440px; background: white; border: 1px solid #ddd; border-radius: 12px; box-shadow: 0 8px 24px rgba(0,0,0,0.15); overflow: hidden;",
                    if vm.is_open.get() { "flex" } else { "none" },
                )
            >
                <Flex
                    justify=FlexJustify::SpaceBetween
                    align=FlexAlign::Center
                    style="padding: 10px 12px; background: #007bff; color: white;"
                >
                    <strong>{AskAssistant::display_name()}</strong>
                    <Button appearance=ButtonAppearance::Transparent on_click=move |_| vm.toggle()>
                        {icon("close")}
                    </Button>
                </Flex>

                <div
                    id="chatMessages"
                    node_ref=messages_container_ref
                    style="flex: 1; overflow-y: auto; display: flex; flex-direction: column; padding: 12px;"
                >
                    <For
                        each=move || vm.log.with(|log| log.messages().to_vec())
                        key=|msg| msg.id
                        let:msg
                    >
                        <ChatBubble message=msg />
                    </For>
                </div>

                <Flex style="gap: 8px; padding: 10px; border-top: 1px solid #eee;">
                    <input
                        id="chatInput"
                        type="text"
                        placeholder="Ask about certificates..."
                        style="flex: 1; padding: 8px; border: 1px solid #ccc; border-radius: 6px;"
                        prop:value=move || vm.input.get()
                        on:input=move |ev| vm.input.set(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if is_send_key(&ev.key(), ev.is_composing()) {
                                ev.prevent_default();
                                handle_send.run(());
                            }
                        }
                    />
                    <Button
                        attr:id="sendMessage"
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| handle_send.run(())
                    >
                        {icon("send")}
                    </Button>
                </Flex>
            </div>

            <Button
                attr:id="chatButton"
                appearance=ButtonAppearance::Primary
                shape=ButtonShape::Circular
                on_click=move |_| vm.toggle()
            >
                {icon("chat")}
            </Button>
        </div>
    }
}
