//! Payroll Page
//!
//! Monthly payroll table for administrators. Pay figures are computed
//! server-side; this page only renders them and sums the money columns.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::api;
use crate::api::PayrollRecord;
use crate::components::loading::ListSkeleton;
use crate::state::Notifications;

/// Payroll page component
#[component]
pub fn Payroll() -> impl IntoView {
    let notify = use_context::<Notifications>().expect("Notifications not found");

    let (month, set_month) = create_signal(current_month());
    let (records, set_records) = create_signal(Vec::<PayrollRecord>::new());
    let (loading, set_loading) = create_signal(true);
    let (generating, set_generating) = create_signal(false);

    // Fetch whenever the selected month changes
    create_effect(move |_| {
        let selected = month.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_payroll(&selected).await {
                Ok(data) => set_records.set(data),
                Err(e) => notify.show_error(&e),
            }
            set_loading.set(false);
        });
    });

    let generate = move |_| {
        let selected = month.get();
        set_generating.set(true);
        spawn_local(async move {
            match api::generate_payroll(&selected).await {
                Ok(()) => {
                    notify.show_success("Payroll generated successfully");
                    match api::fetch_payroll(&selected).await {
                        Ok(data) => set_records.set(data),
                        Err(e) => notify.show_error(&e),
                    }
                }
                Err(e) => notify.show_error(&e),
            }
            set_generating.set(false);
        });
    };

    let download = move |_| {
        let selected = month.get();
        spawn_local(async move {
            match api::fetch_payroll_report(&selected).await {
                Ok(bytes) => save_report(&bytes, &format!("payroll-{}.pdf", selected)),
                Err(e) => notify.show_error(&e),
            }
        });
    };

    view! {
        <div class="space-y-8">
            // Page header and controls
            <div class="sm:flex sm:items-center sm:justify-between">
                <div>
                    <h1 class="text-2xl font-semibold text-gray-900">"Payroll"</h1>
                    <p class="text-gray-500 mt-1">"Monthly payroll information for all employees"</p>
                </div>

                <div class="mt-4 sm:mt-0 flex items-center space-x-3">
                    <input
                        type="month"
                        prop:value=move || month.get()
                        on:input=move |ev| set_month.set(event_target_value(&ev))
                        class="rounded-md border border-gray-300 px-3 py-2 text-sm
                               focus:border-primary-500 focus:outline-none"
                    />
                    <button
                        on:click=generate
                        disabled=move || generating.get()
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-400
                               rounded-md text-sm font-medium text-white transition-colors"
                    >
                        {move || if generating.get() { "Generating..." } else { "Generate Payroll" }}
                    </button>
                    <button
                        on:click=download
                        class="px-4 py-2 rounded-md border border-gray-300 bg-white text-sm
                               font-medium text-gray-700 hover:bg-gray-50 transition-colors"
                    >
                        "Download Report"
                    </button>
                </div>
            </div>

            // Payroll table
            <div class="bg-white shadow rounded-lg overflow-x-auto">
                {move || {
                    if loading.get() {
                        return view! { <div class="p-6"><ListSkeleton count=4 /></div> }.into_view();
                    }

                    let data = records.get();
                    if data.is_empty() {
                        return view! {
                            <p class="p-6 text-gray-500 text-sm">
                                "No payroll records for this month yet."
                            </p>
                        }.into_view();
                    }

                    let (gross, deductions, net) = totals(&data);
                    view! {
                        <table class="min-w-full divide-y divide-gray-300">
                            <thead class="bg-gray-50">
                                <tr>
                                    <th class="px-6 py-3 text-left text-sm font-semibold text-gray-900">"Employee"</th>
                                    <th class="px-6 py-3 text-left text-sm font-semibold text-gray-900">"Department"</th>
                                    <th class="px-6 py-3 text-left text-sm font-semibold text-gray-900">"Position"</th>
                                    <th class="px-6 py-3 text-right text-sm font-semibold text-gray-900">"Hours Worked"</th>
                                    <th class="px-6 py-3 text-right text-sm font-semibold text-gray-900">"Hourly Rate"</th>
                                    <th class="px-6 py-3 text-right text-sm font-semibold text-gray-900">"Gross Pay"</th>
                                    <th class="px-6 py-3 text-right text-sm font-semibold text-gray-900">"Deductions"</th>
                                    <th class="px-6 py-3 text-right text-sm font-semibold text-gray-900">"Net Pay"</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-gray-200">
                                {data.iter().map(|record| view! {
                                    <tr>
                                        <td class="whitespace-nowrap px-6 py-4 text-sm text-gray-900">
                                            {record.employee_name.clone()}
                                        </td>
                                        <td class="whitespace-nowrap px-6 py-4 text-sm text-gray-900">
                                            {record.department.clone()}
                                        </td>
                                        <td class="whitespace-nowrap px-6 py-4 text-sm text-gray-900">
                                            {record.position.clone()}
                                        </td>
                                        <td class="whitespace-nowrap px-6 py-4 text-sm text-right text-gray-900">
                                            {format!("{:.1}", record.hours_worked)}
                                        </td>
                                        <td class="whitespace-nowrap px-6 py-4 text-sm text-right text-gray-900">
                                            {format!("${:.2}", record.hourly_rate)}
                                        </td>
                                        <td class="whitespace-nowrap px-6 py-4 text-sm text-right text-gray-900">
                                            {format!("${:.2}", record.gross_pay)}
                                        </td>
                                        <td class="whitespace-nowrap px-6 py-4 text-sm text-right text-gray-900">
                                            {format!("${:.2}", record.deductions)}
                                        </td>
                                        <td class="whitespace-nowrap px-6 py-4 text-sm text-right text-gray-900">
                                            {format!("${:.2}", record.net_pay)}
                                        </td>
                                    </tr>
                                }).collect_view()}
                            </tbody>
                            <tfoot class="bg-gray-50">
                                <tr>
                                    <td colspan="5" class="px-6 py-3 text-right text-sm font-semibold text-gray-900">
                                        "Total:"
                                    </td>
                                    <td class="whitespace-nowrap px-6 py-3 text-sm text-right font-semibold text-gray-900">
                                        {format!("${:.2}", gross)}
                                    </td>
                                    <td class="whitespace-nowrap px-6 py-3 text-sm text-right font-semibold text-gray-900">
                                        {format!("${:.2}", deductions)}
                                    </td>
                                    <td class="whitespace-nowrap px-6 py-3 text-sm text-right font-semibold text-gray-900">
                                        {format!("${:.2}", net)}
                                    </td>
                                </tr>
                            </tfoot>
                        </table>
                    }.into_view()
                }}
            </div>
        </div>
    }
}

/// The month shown on first load, as `yyyy-mm`.
fn current_month() -> String {
    chrono::Utc::now().format("%Y-%m").to_string()
}

/// Column totals for the footer row: gross pay, deductions, net pay.
fn totals(records: &[PayrollRecord]) -> (f64, f64, f64) {
    records.iter().fold((0.0, 0.0, 0.0), |(gross, ded, net), r| {
        (gross + r.gross_pay, ded + r.deductions, net + r.net_pay)
    })
}

/// Stream bytes to the browser as a file download.
fn save_report(bytes: &[u8], filename: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array.into());
    let Ok(blob) = web_sys::Blob::new_with_u8_array_sequence(&parts) else {
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        return;
    };

    if let Some(document) = window.document() {
        if let Ok(anchor) = document.create_element("a") {
            let _ = anchor.set_attribute("href", &url);
            let _ = anchor.set_attribute("download", filename);
            if let Some(element) = anchor.dyn_ref::<web_sys::HtmlElement>() {
                element.click();
            }
        }
    }
    let _ = web_sys::Url::revoke_object_url(&url);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(gross: f64, deductions: f64, net: f64) -> PayrollRecord {
        PayrollRecord {
            employee_id: 1,
            employee_name: "Jane Doe".to_string(),
            department: "IT".to_string(),
            position: "Developer".to_string(),
            hours_worked: 160.0,
            hourly_rate: 25.0,
            gross_pay: gross,
            deductions,
            net_pay: net,
        }
    }

    #[test]
    fn totals_sum_the_money_columns() {
        let records = vec![record(100.0, 20.0, 80.0), record(50.0, 10.0, 40.0)];
        assert_eq!(totals(&records), (150.0, 30.0, 120.0));
    }

    #[test]
    fn totals_of_nothing_are_zero() {
        assert_eq!(totals(&[]), (0.0, 0.0, 0.0));
    }
}
