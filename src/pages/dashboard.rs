//! Dashboard Page
//!
//! Work-hour and earnings statistics for the signed-in user.

use leptos::*;

use crate::api;
use crate::components::loading::CardSkeleton;
use crate::components::StatCard;
use crate::state::Session;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");

    let (stats, set_stats) = create_signal(api::DashboardStats::default());
    let (loading, set_loading) = create_signal(true);

    // Fetch stats on mount
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_dashboard_stats().await {
                Ok(fetched) => {
                    set_stats.set(fetched);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch dashboard stats: {}", e).into(),
                    );
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="space-y-8">
            // Welcome header
            <div>
                <h1 class="text-2xl font-semibold text-gray-900">
                    {move || {
                        session.user()
                            .map(|user| format!("Welcome back, {}!", user.first_name))
                            .unwrap_or_else(|| "Welcome back!".to_string())
                    }}
                </h1>
                <p class="text-gray-500 mt-1">"Your work at a glance"</p>
            </div>

            // Stat cards
            {move || {
                if loading.get() {
                    view! {
                        <div class="grid grid-cols-1 gap-5 sm:grid-cols-2 lg:grid-cols-4">
                            {(0..4).map(|_| view! { <CardSkeleton /> }).collect_view()}
                        </div>
                    }.into_view()
                } else {
                    view! {
                        <div class="grid grid-cols-1 gap-5 sm:grid-cols-2 lg:grid-cols-4">
                            <StatCard
                                label="Total Hours"
                                icon="🕒"
                                value=Signal::derive(move || format!("{:.1}", stats.get().total_hours))
                            />
                            <StatCard
                                label="Pending Logs"
                                icon="📋"
                                value=Signal::derive(move || stats.get().pending_logs.to_string())
                            />
                            <StatCard
                                label="Approved Logs"
                                icon="✅"
                                value=Signal::derive(move || stats.get().approved_logs.to_string())
                            />
                            <StatCard
                                label="Total Earnings"
                                icon="💰"
                                value=Signal::derive(move || format!("${:.2}", stats.get().total_earnings))
                            />
                        </div>
                    }.into_view()
                }
            }}
        </div>
    }
}
