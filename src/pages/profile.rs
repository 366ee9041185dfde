//! Profile Page
//!
//! Account details and the profile edit form.

use leptos::*;

use crate::api::ProfileUpdate;
use crate::state::{Notifications, Session};

/// Profile page component
#[component]
pub fn Profile() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let notify = use_context::<Notifications>().expect("Notifications not found");

    let initial = session.user();
    let (first_name, set_first_name) = create_signal(
        initial.as_ref().map(|u| u.first_name.clone()).unwrap_or_default(),
    );
    let (last_name, set_last_name) = create_signal(
        initial.as_ref().map(|u| u.last_name.clone()).unwrap_or_default(),
    );
    let (email, set_email) = create_signal(
        initial.as_ref().map(|u| u.email.clone()).unwrap_or_default(),
    );
    let (saving, set_saving) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let update = ProfileUpdate {
            first_name: first_name.get().trim().to_string(),
            last_name: last_name.get().trim().to_string(),
            email: email.get().trim().to_string(),
        };
        if update.first_name.is_empty() || update.last_name.is_empty() || update.email.is_empty() {
            notify.show_error("Name and email are required");
            return;
        }

        set_saving.set(true);

        spawn_local(async move {
            match session.update_profile(&update).await {
                Ok(()) => notify.show_success("Profile updated successfully"),
                Err(e) => notify.show_error(&e),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="space-y-8 max-w-2xl">
            // Header
            <div>
                <h1 class="text-2xl font-semibold text-gray-900">"Profile"</h1>
                <p class="text-gray-500 mt-1">"Your account details"</p>
            </div>

            // Account summary
            <section class="bg-white shadow rounded-lg p-6">
                {move || {
                    session.user().map(|user| view! {
                        <dl class="grid grid-cols-1 sm:grid-cols-2 gap-4 text-sm">
                            <div>
                                <dt class="text-gray-500">"Username"</dt>
                                <dd class="text-gray-900 font-medium">{user.username.clone()}</dd>
                            </div>
                            <div>
                                <dt class="text-gray-500">"Role"</dt>
                                <dd class="text-gray-900 font-medium">{user.role.label()}</dd>
                            </div>
                            {user.department.clone().map(|department| view! {
                                <div>
                                    <dt class="text-gray-500">"Department"</dt>
                                    <dd class="text-gray-900 font-medium">{department}</dd>
                                </div>
                            })}
                            {user.position.clone().map(|position| view! {
                                <div>
                                    <dt class="text-gray-500">"Position"</dt>
                                    <dd class="text-gray-900 font-medium">{position}</dd>
                                </div>
                            })}
                        </dl>
                    })
                }}
            </section>

            // Edit form
            <section class="bg-white shadow rounded-lg p-6">
                <h2 class="text-lg font-semibold text-gray-900 mb-4">"Edit profile"</h2>

                <form on:submit=on_submit class="space-y-4">
                    <div class="grid sm:grid-cols-2 gap-4">
                        <div>
                            <label class="block text-sm text-gray-600 mb-2">"First name"</label>
                            <input
                                type="text"
                                prop:value=move || first_name.get()
                                on:input=move |ev| set_first_name.set(event_target_value(&ev))
                                class="w-full rounded-md border border-gray-300 px-4 py-3
                                       focus:border-primary-500 focus:outline-none"
                            />
                        </div>
                        <div>
                            <label class="block text-sm text-gray-600 mb-2">"Last name"</label>
                            <input
                                type="text"
                                prop:value=move || last_name.get()
                                on:input=move |ev| set_last_name.set(event_target_value(&ev))
                                class="w-full rounded-md border border-gray-300 px-4 py-3
                                       focus:border-primary-500 focus:outline-none"
                            />
                        </div>
                    </div>

                    <div>
                        <label class="block text-sm text-gray-600 mb-2">"Email"</label>
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            class="w-full rounded-md border border-gray-300 px-4 py-3
                                   focus:border-primary-500 focus:outline-none"
                        />
                    </div>

                    <div class="flex justify-end">
                        <button
                            type="submit"
                            disabled=move || saving.get()
                            class="px-4 py-2 rounded-md bg-primary-600 hover:bg-primary-700
                                   disabled:bg-gray-400 text-sm font-medium text-white transition-colors"
                        >
                            {move || if saving.get() { "Saving..." } else { "Save changes" }}
                        </button>
                    </div>
                </form>
            </section>
        </div>
    }
}
