//! Status Badge Component
//!
//! Colored pill for a work log's lifecycle state.

use leptos::*;

use crate::state::WorkLogStatus;

/// Work-log status pill
#[component]
pub fn StatusBadge(status: WorkLogStatus) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-flex rounded-full px-2 text-xs font-semibold leading-5 {}",
            status.badge_class()
        )>
            {status.label()}
        </span>
    }
}
