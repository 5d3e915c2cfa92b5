use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands;
use crate::components::toast::{ToastView, Toasts};

#[derive(Debug, Clone)]
struct ChatLine {
    from_user: bool,
    text: String,
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let toasts = Toasts::new();
    let (question, set_question) = signal(String::new());
    let (lines, set_lines) = signal::<Vec<ChatLine>>(vec![]);
    let (waiting, set_waiting) = signal(false);

    let ask = move || {
        let text = question.get();
        if text.trim().is_empty() {
            toasts.error("Please enter a question for the coach.");
            return;
        }
        set_lines.update(|l| l.push(ChatLine { from_user: true, text: text.clone() }));
        set_question.set(String::new());
        set_waiting.set(true);
        spawn_local(async move {
            match commands::send_chat_message(&text).await {
                Ok(reply) => set_lines.update(|l| l.push(ChatLine { from_user: false, text: reply })),
                Err(e) => toasts.error(e),
            }
            set_waiting.set(false);
        });
    };

    view! {
        <div class="page chat-page">
            <h2>"Ask NutriTrack AI"</h2>
            <p class="page-description">"Questions about food, calories and healthy habits."</p>
            <ToastView toasts=toasts />

            <div class="chat-log">
                {move || lines.get().into_iter().map(|line| {
                    let class = if line.from_user { "chat-line chat-user" } else { "chat-line chat-bot" };
                    view! { <div class=class>{line.text}</div> }
                }).collect_view()}
                <Show when=move || waiting.get()>
                    <div class="chat-line chat-bot chat-pending">"Thinking..."</div>
                </Show>
            </div>

            <div class="input-row">
                <input
                    type="text"
                    class="input"
                    placeholder="e.g. How much protein do I need?"
                    prop:value=move || question.get()
                    on:input=move |ev| set_question.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" && !waiting.get() {
                            ask();
                        }
                    }
                />
                <button class="btn btn-primary" on:click=move |_| ask() disabled=move || waiting.get()>
                    "Send"
                </button>
            </div>
        </div>
    }
}
