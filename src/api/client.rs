//! HTTP API Client
//!
//! Functions for communicating with the EMS REST API. Every function maps
//! failures to a user-facing message; nothing here panics on a bad response.

use gloo_net::http::{Request, RequestBuilder, Response};

use crate::state::session::{Role, User};
use crate::state::worklogs::{WorkLog, WorkLogDraft};

/// Default API base URL; the client is normally served from the same origin
/// as the API.
pub const DEFAULT_API_BASE: &str = "/api";

/// Local storage key for the bearer credential.
const TOKEN_KEY: &str = "ems_token";

/// Local storage key overriding the API base URL, for development against a
/// remote server.
const API_BASE_KEY: &str = "ems_api_url";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

/// Get the API base URL from local storage or use the default.
pub fn get_api_base() -> String {
    let url = local_storage()
        .and_then(|storage| storage.get_item(API_BASE_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Read the persisted bearer credential, if any.
pub fn stored_token() -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
}

/// Persist the bearer credential across reloads.
pub fn store_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

/// Drop the persisted credential. Called on logout and on validation failure.
pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

/// Attach the stored bearer credential, when one exists.
fn authorized(request: RequestBuilder) -> RequestBuilder {
    match stored_token() {
        Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
        None => request,
    }
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Successful login payload: a token plus the user record.
#[derive(Debug, serde::Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(flatten)]
    pub user: User,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_hours: f64,
    pub pending_logs: u32,
    pub approved_logs: u32,
    pub total_earnings: f64,
}

/// One employee's server-computed payroll line for a month. The client only
/// renders and sums these values.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRecord {
    pub employee_id: i64,
    pub employee_name: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub position: String,
    pub hours_worked: f64,
    pub hourly_rate: f64,
    pub gross_pay: f64,
    pub deductions: f64,
    pub net_pay: f64,
}

// ============ Request Types ============

/// Registration payload. New accounts sign up as employees.
#[derive(Clone, Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
}

/// Partial profile update; the server echoes back the whole user record.
#[derive(Clone, Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Extract the server's error message, falling back to generic text.
async fn read_error(response: Response, fallback: &str) -> String {
    match response.json::<ApiError>().await {
        Ok(body) => body
            .message
            .or(body.error)
            .unwrap_or_else(|| fallback.to_string()),
        Err(_) => fallback.to_string(),
    }
}

// ============ Auth ============

/// Validate a stored credential and fetch the matching user record.
pub async fn validate_token(token: &str) -> Result<User, String> {
    let response = Request::get(&format!("{}/auth/validate", get_api_base()))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(read_error(response, "Session expired").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Exchange credentials for a token and user record.
pub async fn login(username: &str, password: &str) -> Result<AuthResponse, String> {
    #[derive(serde::Serialize)]
    struct LoginRequest<'a> {
        username: &'a str,
        password: &'a str,
    }

    let response = Request::post(&format!("{}/auth/login", get_api_base()))
        .json(&LoginRequest { username, password })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(read_error(response, "Login failed").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Create a new account.
pub async fn register(request: &RegisterRequest) -> Result<(), String> {
    let response = Request::post(&format!("{}/auth/register", get_api_base()))
        .json(request)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(read_error(response, "Registration failed").await);
    }

    Ok(())
}

/// Update the signed-in user's profile.
pub async fn update_profile(update: &ProfileUpdate) -> Result<User, String> {
    let response = authorized(Request::put(&format!("{}/users/profile", get_api_base())))
        .json(update)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(read_error(response, "Profile update failed").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

// ============ Dashboard ============

/// Fetch the signed-in user's dashboard statistics.
pub async fn fetch_dashboard_stats() -> Result<DashboardStats, String> {
    let response = authorized(Request::get(&format!("{}/dashboard/stats", get_api_base())))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(read_error(response, "Failed to fetch dashboard stats").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

// ============ Work Logs ============

/// Fetch all work logs visible to the caller.
pub async fn fetch_work_logs() -> Result<Vec<WorkLog>, String> {
    let response = authorized(Request::get(&format!("{}/worklogs", get_api_base())))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(read_error(response, "Failed to fetch work logs").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Submit a new work log; the server assigns the id and pending status.
pub async fn create_work_log(draft: &WorkLogDraft) -> Result<WorkLog, String> {
    let response = authorized(Request::post(&format!("{}/worklogs", get_api_base())))
        .json(draft)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(read_error(response, "Failed to create work log").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Replace a pending work log's fields.
pub async fn update_work_log(id: i64, draft: &WorkLogDraft) -> Result<WorkLog, String> {
    let response = authorized(Request::put(&format!("{}/worklogs/{}", get_api_base(), id)))
        .json(draft)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(read_error(response, "Failed to update work log").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Delete a pending work log.
pub async fn delete_work_log(id: i64) -> Result<(), String> {
    let response = authorized(Request::delete(&format!("{}/worklogs/{}", get_api_base(), id)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(read_error(response, "Failed to delete work log").await);
    }

    Ok(())
}

/// Approve a pending work log. Admin only.
pub async fn approve_work_log(id: i64) -> Result<WorkLog, String> {
    decide_work_log(id, "approve", "Failed to approve work log").await
}

/// Reject a pending work log. Admin only.
pub async fn reject_work_log(id: i64) -> Result<WorkLog, String> {
    decide_work_log(id, "reject", "Failed to reject work log").await
}

async fn decide_work_log(id: i64, action: &str, fallback: &str) -> Result<WorkLog, String> {
    let url = format!("{}/worklogs/{}/{}", get_api_base(), id, action);
    let response = authorized(Request::put(&url))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(read_error(response, fallback).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

// ============ Payroll ============

/// Fetch payroll records for a month (`yyyy-mm`). Admin only.
pub async fn fetch_payroll(month: &str) -> Result<Vec<PayrollRecord>, String> {
    let response = authorized(Request::get(&format!("{}/payroll/{}", get_api_base(), month)))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(read_error(response, "Failed to fetch payroll data").await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Trigger payroll generation for a month. Admin only.
pub async fn generate_payroll(month: &str) -> Result<(), String> {
    let url = format!("{}/payroll/generate/{}", get_api_base(), month);
    let response = authorized(Request::post(&url))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(read_error(response, "Failed to generate payroll").await);
    }

    Ok(())
}

/// Download the month's payroll report as raw bytes. Admin only.
pub async fn fetch_payroll_report(month: &str) -> Result<Vec<u8>, String> {
    let url = format!("{}/payroll/{}/report", get_api_base(), month);
    let response = authorized(Request::get(&url))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(read_error(response, "Failed to download payroll report").await);
    }

    response
        .binary()
        .await
        .map_err(|e| format!("Download error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_response_flattens_the_user_record() {
        let auth: AuthResponse = serde_json::from_str(
            r#"{
                "token": "jwt.token.here",
                "username": "jdoe",
                "email": "jdoe@example.com",
                "firstName": "Jane",
                "lastName": "Doe",
                "role": "ROLE_EMPLOYEE",
                "message": "Authentication successful"
            }"#,
        )
        .unwrap();

        assert_eq!(auth.token, "jwt.token.here");
        assert_eq!(auth.user.username, "jdoe");
        assert_eq!(auth.user.role, Role::Employee);
    }

    #[test]
    fn register_request_omits_empty_optionals() {
        let request = RegisterRequest {
            username: "jdoe".to_string(),
            email: "jdoe@example.com".to_string(),
            password: "secret".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            role: Role::Employee,
            department: None,
            position: None,
            hourly_rate: None,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"firstName\":\"Jane\""));
        assert!(json.contains("\"role\":\"ROLE_EMPLOYEE\""));
        assert!(!json.contains("department"));
        assert!(!json.contains("hourlyRate"));
    }

    #[test]
    fn payroll_record_deserializes_from_camel_case() {
        let record: PayrollRecord = serde_json::from_str(
            r#"{
                "employeeId": 7,
                "employeeName": "Jane Doe",
                "department": "IT",
                "position": "Developer",
                "hoursWorked": 160.0,
                "hourlyRate": 25.0,
                "grossPay": 4000.0,
                "deductions": 400.0,
                "netPay": 3600.0
            }"#,
        )
        .unwrap();

        assert_eq!(record.employee_name, "Jane Doe");
        assert_eq!(record.net_pay, 3600.0);
    }
}
