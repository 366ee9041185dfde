//! Register Page
//!
//! Self-service account creation. New accounts are employees; admins are
//! provisioned server-side.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::state::{Notifications, Role};

/// Registration page component
#[component]
pub fn Register() -> impl IntoView {
    let notify = use_context::<Notifications>().expect("Notifications not found");
    let navigate = use_navigate();

    let (username, set_username) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (first_name, set_first_name) = create_signal(String::new());
    let (last_name, set_last_name) = create_signal(String::new());
    let (department, set_department) = create_signal(String::new());
    let (position, set_position) = create_signal(String::new());
    let (hourly_rate, set_hourly_rate) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let request = match build_request(
            &username.get(),
            &email.get(),
            &password.get(),
            &first_name.get(),
            &last_name.get(),
            &department.get(),
            &position.get(),
            &hourly_rate.get(),
        ) {
            Ok(request) => request,
            Err(e) => {
                notify.show_error(&e);
                return;
            }
        };

        set_submitting.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::register(&request).await {
                Ok(()) => {
                    notify.show_success("Registration successful");
                    navigate("/login", Default::default());
                }
                Err(e) => {
                    notify.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-100 px-4 py-8">
            <div class="bg-white shadow rounded-xl p-8 w-full max-w-lg">
                <div class="flex flex-col items-center mb-8">
                    <span class="text-4xl">"🏢"</span>
                    <h1 class="text-2xl font-bold text-gray-900 mt-2">"Create your account"</h1>
                </div>

                <form on:submit=on_submit class="space-y-4">
                    <div class="grid sm:grid-cols-2 gap-4">
                        <Field label="First name" value=first_name set_value=set_first_name />
                        <Field label="Last name" value=last_name set_value=set_last_name />
                    </div>

                    <Field label="Username" value=username set_value=set_username />
                    <Field label="Email" input_type="email" value=email set_value=set_email />
                    <Field label="Password" input_type="password" value=password set_value=set_password />

                    <div class="grid sm:grid-cols-2 gap-4">
                        <Field label="Department (optional)" value=department set_value=set_department />
                        <Field label="Position (optional)" value=position set_value=set_position />
                    </div>

                    <Field label="Hourly rate (optional)" input_type="number" value=hourly_rate set_value=set_hourly_rate />

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-400
                               rounded-md py-3 font-semibold text-white transition-colors"
                    >
                        {move || if submitting.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>

                <p class="text-sm text-gray-500 text-center mt-6">
                    "Already registered? "
                    <A href="/login" class="text-primary-600 hover:text-primary-700 font-medium">
                        "Sign in"
                    </A>
                </p>
            </div>
        </div>
    }
}

/// Labeled text input bound to a signal pair.
#[component]
fn Field(
    label: &'static str,
    #[prop(default = "text")]
    input_type: &'static str,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-600 mb-2">{label}</label>
            <input
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
                class="w-full rounded-md border border-gray-300 px-4 py-3
                       focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}

/// Assemble the registration payload from the raw form values.
#[allow(clippy::too_many_arguments)]
fn build_request(
    username: &str,
    email: &str,
    password: &str,
    first_name: &str,
    last_name: &str,
    department: &str,
    position: &str,
    hourly_rate: &str,
) -> Result<api::RegisterRequest, String> {
    if [username, email, password, first_name, last_name]
        .iter()
        .any(|field| field.trim().is_empty())
    {
        return Err("Please fill in all required fields".to_string());
    }

    let rate = match hourly_rate.trim() {
        "" => None,
        raw => match raw.parse::<f64>() {
            Ok(rate) if rate >= 0.0 => Some(rate),
            _ => return Err("Hourly rate must be a positive number".to_string()),
        },
    };

    let optional = |raw: &str| {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    };

    Ok(api::RegisterRequest {
        username: username.trim().to_string(),
        email: email.trim().to_string(),
        password: password.to_string(),
        first_name: first_name.trim().to_string(),
        last_name: last_name.trim().to_string(),
        role: Role::Employee,
        department: optional(department),
        position: optional(position),
        hourly_rate: rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_fields_are_rejected() {
        assert!(build_request("", "a@b.c", "pw", "A", "B", "", "", "").is_err());
        assert!(build_request("user", "a@b.c", "pw", "A", "", "", "", "").is_err());
    }

    #[test]
    fn bad_hourly_rate_is_rejected() {
        assert!(build_request("user", "a@b.c", "pw", "A", "B", "", "", "abc").is_err());
        assert!(build_request("user", "a@b.c", "pw", "A", "B", "", "", "-5").is_err());
    }

    #[test]
    fn optional_fields_default_to_absent() {
        let request = build_request("user", "a@b.c", "pw", "A", "B", "", "", "").unwrap();
        assert_eq!(request.department, None);
        assert_eq!(request.hourly_rate, None);
        assert_eq!(request.role, Role::Employee);
    }

    #[test]
    fn filled_form_builds_a_full_request() {
        let request = build_request("user", "a@b.c", "pw", "A", "B", "IT", "Dev", "25.5").unwrap();
        assert_eq!(request.department.as_deref(), Some("IT"));
        assert_eq!(request.hourly_rate, Some(25.5));
    }
}
