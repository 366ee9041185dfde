//! Login Page
//!
//! Username/password sign in.

use leptos::*;
use leptos_router::*;

use crate::state::{Notifications, Session};

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let notify = use_context::<Notifications>().expect("Notifications not found");
    let navigate = use_navigate();

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let user = username.get();
        let pass = password.get();
        if user.is_empty() || pass.is_empty() {
            notify.show_error("Username and password are required");
            return;
        }

        set_submitting.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            match session.login(&user, &pass).await {
                Ok(()) => {
                    notify.show_success("Login successful");
                    navigate("/dashboard", Default::default());
                }
                Err(e) => {
                    notify.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-100 px-4">
            <div class="bg-white shadow rounded-xl p-8 w-full max-w-md">
                // Brand header
                <div class="flex flex-col items-center mb-8">
                    <span class="text-4xl">"🏢"</span>
                    <h1 class="text-2xl font-bold text-gray-900 mt-2">"Sign in to EMS"</h1>
                    <p class="text-sm text-gray-500 mt-1">"Employee Management System"</p>
                </div>

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-600 mb-2">"Username"</label>
                        <input
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            class="w-full rounded-md border border-gray-300 px-4 py-3
                                   focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-600 mb-2">"Password"</label>
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full rounded-md border border-gray-300 px-4 py-3
                                   focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-400
                               rounded-md py-3 font-semibold text-white transition-colors"
                    >
                        {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <p class="text-sm text-gray-500 text-center mt-6">
                    "No account yet? "
                    <A href="/register" class="text-primary-600 hover:text-primary-700 font-medium">
                        "Register"
                    </A>
                </p>
            </div>
        </div>
    }
}
