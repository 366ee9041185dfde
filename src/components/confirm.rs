//! Confirm Dialog Component
//!
//! Explicit confirmation step for destructive actions. The caller keeps the
//! pending action in its own state and reacts to the user's choice.

use leptos::*;

/// Modal confirmation dialog
#[component]
pub fn ConfirmDialog(
    /// Question shown to the user
    #[prop(into)]
    message: String,
    /// Label for the confirming button
    #[prop(default = "Confirm")]
    confirm_label: &'static str,
    /// Called when the user confirms
    on_confirm: impl Fn() + 'static,
    /// Called when the user cancels
    on_cancel: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-white rounded-xl p-6 w-full max-w-sm mx-4 shadow-lg">
                <p class="text-sm text-gray-900">{message}</p>

                <div class="flex justify-end space-x-3 mt-6">
                    <button
                        on:click=move |_| on_cancel()
                        class="px-4 py-2 rounded-md border border-gray-300 bg-white text-sm
                               font-medium text-gray-700 hover:bg-gray-50 transition-colors"
                    >
                        "Cancel"
                    </button>
                    <button
                        on:click=move |_| on_confirm()
                        class="px-4 py-2 rounded-md bg-red-600 hover:bg-red-700 text-sm
                               font-medium text-white transition-colors"
                    >
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
