//! Work Logs Page
//!
//! Work-log table with the entry form, delete confirmation, and the admin
//! approve/reject workflow. Actions only appear on pending rows; approved
//! and rejected entries are read-only.

use chrono::NaiveDate;
use leptos::*;

use crate::components::loading::ListSkeleton;
use crate::components::{ConfirmDialog, StatusBadge};
use crate::state::{Notifications, Session, WorkLog, WorkLogDraft, WorkLogStore};

/// Work logs page component
#[component]
pub fn WorkLogs() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let store = use_context::<WorkLogStore>().expect("WorkLogStore not found");
    let notify = use_context::<Notifications>().expect("Notifications not found");

    let (show_form, set_show_form) = create_signal(false);
    let (editing, set_editing) = create_signal(None::<WorkLog>);
    let (pending_delete, set_pending_delete) = create_signal(None::<i64>);

    // Fetch the list on mount
    create_effect(move |_| {
        spawn_local(async move {
            if let Err(e) = store.refresh().await {
                notify.show_error(&e);
            }
        });
    });

    let start_create = move |_| {
        set_editing.set(None);
        set_show_form.set(true);
    };

    let start_edit = move |log: WorkLog| {
        set_editing.set(Some(log));
        set_show_form.set(true);
    };

    let decide = move |id: i64, approve: bool| {
        spawn_local(async move {
            let result = if approve {
                store.approve(id).await
            } else {
                store.reject(id).await
            };
            match result {
                Ok(()) => notify.show_success(if approve {
                    "Work log approved"
                } else {
                    "Work log rejected"
                }),
                Err(e) => notify.show_error(&e),
            }
        });
    };

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-semibold text-gray-900">"Work Logs"</h1>
                    <p class="text-gray-500 mt-1">"Manage your work logs and track your hours"</p>
                </div>

                <button
                    on:click=start_create
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-md
                           text-sm font-medium text-white transition-colors"
                >
                    "+ New Work Log"
                </button>
            </div>

            // Entry form
            {move || {
                if show_form.get() {
                    let initial = editing.get();
                    view! {
                        <WorkLogForm
                            initial=initial
                            on_close=move || {
                                set_editing.set(None);
                                set_show_form.set(false);
                            }
                        />
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            // Table
            <div class="bg-white shadow rounded-lg overflow-x-auto">
                {move || {
                    if store.loading.get() {
                        return view! { <div class="p-6"><ListSkeleton count=4 /></div> }.into_view();
                    }

                    let logs = store.logs.get();
                    if logs.is_empty() {
                        return view! {
                            <p class="p-6 text-gray-500 text-sm">
                                "No work logs yet. Log your first day!"
                            </p>
                        }.into_view();
                    }

                    let is_admin = session.is_admin();
                    view! {
                        <table class="min-w-full divide-y divide-gray-300">
                            <thead class="bg-gray-50">
                                <tr>
                                    <th class="px-6 py-3 text-left text-sm font-semibold text-gray-900">"Date"</th>
                                    {is_admin.then(|| view! {
                                        <th class="px-6 py-3 text-left text-sm font-semibold text-gray-900">"Employee"</th>
                                    })}
                                    <th class="px-6 py-3 text-left text-sm font-semibold text-gray-900">"Hours"</th>
                                    <th class="px-6 py-3 text-left text-sm font-semibold text-gray-900">"Remarks"</th>
                                    <th class="px-6 py-3 text-left text-sm font-semibold text-gray-900">"Status"</th>
                                    <th class="px-6 py-3 text-right text-sm font-semibold text-gray-900">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-gray-200">
                                {logs.into_iter().map(|log| {
                                    let pending = log.status.is_pending();
                                    let id = log.id;
                                    let edit_target = log.clone();

                                    view! {
                                        <tr>
                                            <td class="whitespace-nowrap px-6 py-4 text-sm text-gray-900">
                                                {log.date.format("%b %d, %Y").to_string()}
                                            </td>
                                            {is_admin.then(|| view! {
                                                <td class="whitespace-nowrap px-6 py-4 text-sm text-gray-900">
                                                    {log.user_name.clone().unwrap_or_else(|| "—".to_string())}
                                                </td>
                                            })}
                                            <td class="whitespace-nowrap px-6 py-4 text-sm text-gray-900">
                                                {format!("{:.1}", log.hours_worked)}
                                            </td>
                                            <td class="px-6 py-4 text-sm text-gray-900">{log.remarks.clone()}</td>
                                            <td class="whitespace-nowrap px-6 py-4 text-sm">
                                                <StatusBadge status=log.status />
                                            </td>
                                            <td class="whitespace-nowrap px-6 py-4 text-right text-sm">
                                                <div class="flex justify-end space-x-3">
                                                    {(is_admin && pending).then(|| view! {
                                                        <button
                                                            on:click=move |_| decide(id, true)
                                                            class="text-green-600 hover:text-green-800 font-medium"
                                                        >
                                                            "✓ Approve"
                                                        </button>
                                                        <button
                                                            on:click=move |_| decide(id, false)
                                                            class="text-red-600 hover:text-red-800 font-medium"
                                                        >
                                                            "✕ Reject"
                                                        </button>
                                                    })}
                                                    {pending.then(|| view! {
                                                        <button
                                                            on:click=move |_| start_edit(edit_target.clone())
                                                            class="text-primary-600 hover:text-primary-800 font-medium"
                                                        >
                                                            "Edit"
                                                        </button>
                                                        <button
                                                            on:click=move |_| set_pending_delete.set(Some(id))
                                                            class="text-red-600 hover:text-red-800 font-medium"
                                                        >
                                                            "Delete"
                                                        </button>
                                                    })}
                                                </div>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    }.into_view()
                }}
            </div>

            // Delete confirmation
            {move || {
                pending_delete.get().map(|id| view! {
                    <ConfirmDialog
                        message="Are you sure you want to delete this work log?"
                        confirm_label="Delete"
                        on_confirm=move || {
                            set_pending_delete.set(None);
                            spawn_local(async move {
                                match store.remove(id).await {
                                    Ok(()) => notify.show_success("Work log deleted successfully"),
                                    Err(e) => notify.show_error(&e),
                                }
                            });
                        }
                        on_cancel=move || set_pending_delete.set(None)
                    />
                })
            }}
        </div>
    }
}

/// Create/edit form. `initial` carries the entry being edited, if any.
#[component]
fn WorkLogForm(
    initial: Option<WorkLog>,
    on_close: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let store = use_context::<WorkLogStore>().expect("WorkLogStore not found");
    let notify = use_context::<Notifications>().expect("Notifications not found");

    let editing_id = initial.as_ref().map(|log| log.id);
    let (date, set_date) = create_signal(
        initial
            .as_ref()
            .map(|log| log.date.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
    );
    let (hours, set_hours) = create_signal(
        initial
            .as_ref()
            .map(|log| log.hours_worked.to_string())
            .unwrap_or_default(),
    );
    let (remarks, set_remarks) = create_signal(
        initial.map(|log| log.remarks).unwrap_or_default(),
    );
    let (submitting, set_submitting) = create_signal(false);

    let on_close_for_submit = on_close.clone();
    let on_close_for_cancel = on_close;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = match parse_draft(&date.get(), &hours.get(), remarks.get()) {
            Ok(draft) => draft,
            Err(e) => {
                notify.show_error(&e);
                return;
            }
        };

        set_submitting.set(true);

        let on_close_inner = on_close_for_submit.clone();
        spawn_local(async move {
            let result = match editing_id {
                Some(id) => store
                    .update(id, &draft)
                    .await
                    .map(|()| "Work log updated successfully"),
                None => store
                    .create(&draft)
                    .await
                    .map(|()| "Work log created successfully"),
            };

            match result {
                Ok(message) => {
                    notify.show_success(message);
                    on_close_inner();
                }
                Err(e) => notify.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="bg-white shadow rounded-lg p-6 space-y-6">
            <div class="grid grid-cols-1 gap-6 sm:grid-cols-3">
                <div>
                    <label class="block text-sm text-gray-600 mb-2">"Date"</label>
                    <input
                        type="date"
                        prop:value=move || date.get()
                        on:input=move |ev| set_date.set(event_target_value(&ev))
                        class="w-full rounded-md border border-gray-300 px-4 py-3
                               focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-600 mb-2">"Hours Worked"</label>
                    <input
                        type="number"
                        min="0"
                        max="24"
                        step="0.5"
                        prop:value=move || hours.get()
                        on:input=move |ev| set_hours.set(event_target_value(&ev))
                        class="w-full rounded-md border border-gray-300 px-4 py-3
                               focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <div class="sm:col-span-3">
                    <label class="block text-sm text-gray-600 mb-2">"Remarks"</label>
                    <textarea
                        rows=3
                        prop:value=move || remarks.get()
                        on:input=move |ev| set_remarks.set(event_target_value(&ev))
                        class="w-full rounded-md border border-gray-300 px-4 py-3
                               focus:border-primary-500 focus:outline-none"
                    />
                </div>
            </div>

            <div class="flex justify-end space-x-3">
                <button
                    type="button"
                    on:click=move |_| on_close_for_cancel()
                    class="px-4 py-2 rounded-md border border-gray-300 bg-white text-sm
                           font-medium text-gray-700 hover:bg-gray-50 transition-colors"
                >
                    "Cancel"
                </button>
                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="px-4 py-2 rounded-md bg-primary-600 hover:bg-primary-700
                           disabled:bg-gray-400 text-sm font-medium text-white transition-colors"
                >
                    {move || {
                        if submitting.get() {
                            "Saving..."
                        } else if editing_id.is_some() {
                            "Update Work Log"
                        } else {
                            "Create Work Log"
                        }
                    }}
                </button>
            </div>
        </form>
    }
}

/// Parse and validate the raw form values into a draft.
fn parse_draft(date: &str, hours: &str, remarks: String) -> Result<WorkLogDraft, String> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| "A date is required".to_string())?;
    let hours_worked = hours
        .parse::<f64>()
        .map_err(|_| "Hours worked must be a number".to_string())?;

    let draft = WorkLogDraft {
        date,
        hours_worked,
        remarks,
    };
    draft.validate()?;
    Ok(draft)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_parses_from_form_values() {
        let draft = parse_draft("2024-01-05", "8", "on-site".to_string()).unwrap();
        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(draft.hours_worked, 8.0);
    }

    #[test]
    fn empty_date_is_rejected() {
        assert!(parse_draft("", "8", String::new()).is_err());
    }

    #[test]
    fn non_numeric_hours_are_rejected() {
        assert!(parse_draft("2024-01-05", "", String::new()).is_err());
        assert!(parse_draft("2024-01-05", "lots", String::new()).is_err());
    }

    #[test]
    fn out_of_range_hours_are_rejected() {
        assert!(parse_draft("2024-01-05", "25", String::new()).is_err());
        assert!(parse_draft("2024-01-05", "-2", String::new()).is_err());
    }
}
