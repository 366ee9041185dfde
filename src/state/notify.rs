//! Notifications
//!
//! Transient toast messages. Each slot auto-clears on a timer.

use leptos::*;

/// Toast message signals provided to the component tree.
#[derive(Clone, Copy)]
pub struct Notifications {
    pub success: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
    pub info: RwSignal<Option<String>>,
}

/// Create the notification store and provide it via context.
pub fn provide_notifications() -> Notifications {
    let notifications = Notifications {
        success: create_rw_signal(None),
        error: create_rw_signal(None),
        info: create_rw_signal(None),
    };
    provide_context(notifications);
    notifications
}

impl Notifications {
    pub fn show_success(&self, message: &str) {
        flash(self.success, message, 3000);
    }

    pub fn show_error(&self, message: &str) {
        flash(self.error, message, 5000);
    }

    pub fn show_info(&self, message: &str) {
        flash(self.info, message, 3000);
    }
}

fn flash(slot: RwSignal<Option<String>>, message: &str, millis: u32) {
    slot.set(Some(message.to_string()));

    gloo_timers::callback::Timeout::new(millis, move || {
        slot.set(None);
    })
    .forget();
}
