//! Navigation Component
//!
//! Header bar with role-gated links, the signed-in user chip, and sign-out.

use leptos::*;
use leptos_router::*;

use crate::state::{Notifications, Role, Session};

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let notify = use_context::<Notifications>().expect("Notifications not found");

    view! {
        <nav class="bg-primary-600 border-b border-primary-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/dashboard" class="flex items-center space-x-3">
                        <span class="text-2xl">"🏢"</span>
                        <span class="text-xl font-bold text-white">"EMS"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        <NavLink href="/dashboard" label="Dashboard" />
                        <NavLink href="/worklogs" label="Work Logs" />
                        {move || match session.user().map(|user| user.role) {
                            Some(Role::Admin) => view! {
                                <NavLink href="/payroll" label="Payroll" />
                            }.into_view(),
                            Some(Role::Employee) | None => view! {}.into_view(),
                        }}
                        <NavLink href="/profile" label="Profile" />
                    </div>

                    // User chip and sign-out
                    <div class="flex items-center space-x-4">
                        {move || {
                            session.user().map(|user| view! {
                                <div class="flex items-center space-x-3">
                                    <div class="h-8 w-8 rounded-full bg-primary-700 flex items-center justify-center">
                                        <span class="text-sm font-medium text-white">
                                            {user.initials()}
                                        </span>
                                    </div>
                                    <div class="hidden sm:flex flex-col text-sm leading-tight">
                                        <span class="text-white">{user.full_name()}</span>
                                        <span class="text-primary-200 text-xs">{user.role.label()}</span>
                                    </div>
                                </div>
                            })
                        }}

                        <button
                            on:click=move |_| {
                                session.logout();
                                notify.show_info("Logged out successfully");
                            }
                            class="px-3 py-2 rounded-lg text-sm text-primary-100 hover:text-white
                                   hover:bg-primary-700 transition-colors"
                        >
                            "Sign out"
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-primary-100 hover:text-white hover:bg-primary-700 transition-colors"
            active_class="bg-primary-700 text-white"
        >
            {label}
        </A>
    }
}
