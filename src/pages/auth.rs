use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::commands::{self, LoginRequest, SignupRequest};
use crate::components::toast::{ToastView, Toasts};
use crate::pages::parse_number;
use crate::session::use_session;

#[component]
pub fn AuthPage() -> impl IntoView {
    let ctx = use_session();
    let navigate = use_navigate();
    let toasts = Toasts::new();

    let (is_signup, set_is_signup) = signal(false);
    let (busy, set_busy) = signal(false);
    let (name, set_name) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (age, set_age) = signal(String::new());
    let (weight, set_weight) = signal(String::new());
    let (height, set_height) = signal(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let navigate = navigate.clone();
        set_busy.set(true);
        spawn_local(async move {
            let result = if is_signup.get_untracked() {
                let request = SignupRequest {
                    name: name.get_untracked(),
                    phone: phone.get_untracked(),
                    email: email.get_untracked(),
                    password: password.get_untracked(),
                    age: parse_number(&age.get_untracked()),
                    weight: parse_number(&weight.get_untracked()),
                    height: parse_number(&height.get_untracked()),
                };
                commands::signup(&request).await
            } else {
                let request = LoginRequest {
                    email: email.get_untracked(),
                    password: password.get_untracked(),
                };
                commands::login(&request).await
            };
            set_busy.set(false);
            match result {
                Ok(session) => {
                    ctx.set_session.set(Some(session));
                    set_password.set(String::new());
                    navigate("/track", Default::default());
                }
                Err(e) => toasts.error(e),
            }
        });
    };

    let field = move |label: &'static str, kind: &'static str, value: ReadSignal<String>, set: WriteSignal<String>| {
        view! {
            <div class="form-group">
                <label>{label}</label>
                <input
                    type=kind
                    class="input"
                    prop:value=move || value.get()
                    on:input=move |ev| set.set(event_target_value(&ev))
                />
            </div>
        }
    };

    view! {
        <div class="page auth-page">
            <h2>{move || if is_signup.get() { "Create an Account" } else { "Sign In" }}</h2>
            <ToastView toasts=toasts />

            <form class="auth-form" on:submit=submit>
                <Show when=move || is_signup.get()>
                    {field("Name", "text", name, set_name)}
                    {field("Phone", "tel", phone, set_phone)}
                </Show>
                {field("Email", "email", email, set_email)}
                {field("Password", "password", password, set_password)}
                <Show when=move || is_signup.get()>
                    <div class="form-row">
                        {field("Age", "number", age, set_age)}
                        {field("Weight (kg)", "number", weight, set_weight)}
                        {field("Height (cm)", "number", height, set_height)}
                    </div>
                </Show>
                <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                    {move || match (busy.get(), is_signup.get()) {
                        (true, _) => "Please wait...",
                        (false, true) => "Sign Up",
                        (false, false) => "Sign In",
                    }}
                </button>
            </form>

            <button class="btn btn-link" on:click=move |_| set_is_signup.update(|s| *s = !*s)>
                {move || if is_signup.get() {
                    "Already have an account? Sign in"
                } else {
                    "New here? Create an account"
                }}
            </button>
        </div>
    }
}
