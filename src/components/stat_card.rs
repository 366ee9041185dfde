//! Stat Card Component
//!
//! Displays a single dashboard statistic.

use leptos::*;

/// Dashboard statistic card
#[component]
pub fn StatCard(
    /// Statistic label
    label: &'static str,
    /// Icon shown next to the value
    icon: &'static str,
    /// Formatted value to display
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="relative bg-white shadow rounded-lg p-5 overflow-hidden">
            <div class="flex items-center">
                <div class="bg-primary-500 rounded-md p-3 text-2xl">{icon}</div>
                <div class="ml-4">
                    <p class="text-sm font-medium text-gray-500 truncate">{label}</p>
                    <p class="text-2xl font-semibold text-gray-900">
                        {move || value.get()}
                    </p>
                </div>
            </div>
        </div>
    }
}
