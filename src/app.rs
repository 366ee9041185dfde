//! App Root Component
//!
//! Routing, session bootstrap, and global providers. The route tree encodes
//! the authorization contract: protected views only render for an
//! authenticated session, the payroll view only for admins, and nothing
//! protected renders while the stored credential is still being validated.

use leptos::*;
use leptos_router::*;

use crate::components::{Loading, Nav, Toast};
use crate::pages::{Dashboard, Login, Payroll, Profile, Register, WorkLogs};
use crate::state::{
    provide_notifications, provide_session, provide_work_logs, AuthState, Role, Session,
};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_notifications();
    let session = provide_session();
    provide_work_logs();

    // Validate any persisted credential before the first route resolves
    spawn_local(async move {
        session.restore().await;
    });

    view! {
        <Router>
            <div class="min-h-screen bg-gray-100 text-gray-900 flex flex-col">
                <Routes>
                    // Public routes
                    <Route path="/login" view=Login />
                    <Route path="/register" view=Register />

                    // Protected routes
                    <Route path="/" view=Shell>
                        <Route path="" view=|| view! { <Redirect path="/dashboard" /> } />
                        <Route path="dashboard" view=Dashboard />
                        <Route path="worklogs" view=WorkLogs />
                        <Route path="profile" view=Profile />

                        // Admin routes
                        <Route path="payroll" view=PayrollGate />
                    </Route>

                    <Route path="/*any" view=NotFound />
                </Routes>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Layout for authenticated routes. Anonymous visitors are sent to the login
/// page; while the stored credential is being validated only a neutral
/// loading view renders.
#[component]
fn Shell() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");

    move || match session.snapshot() {
        AuthState::Restoring => view! { <Loading /> }.into_view(),
        AuthState::SignedOut => view! { <Redirect path="/login" /> }.into_view(),
        AuthState::SignedIn(_) => view! {
            <Nav />
            <main class="flex-1 container mx-auto px-4 py-8">
                <Outlet />
            </main>
        }
        .into_view(),
    }
}

/// Role check for the payroll view. `Shell` has already handled the
/// anonymous cases; employees are routed back to the dashboard without an
/// error message.
#[component]
fn PayrollGate() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");

    move || match session.user().map(|user| user.role) {
        Some(Role::Admin) => view! { <Payroll /> }.into_view(),
        Some(Role::Employee) | None => view! { <Redirect path="/dashboard" /> }.into_view(),
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/dashboard"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 text-white rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
