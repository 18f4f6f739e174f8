use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use chrono::{DateTime, Utc};
use leptos::prelude::*;
use uuid::Uuid;

/// Время показа уведомления, мс
pub const NOTIFY_TIMEOUT_MS: u32 = 6_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Danger,
    Warning,
    Success,
    Info,
}

impl Severity {
    fn class(&self) -> &'static str {
        match self {
            Severity::Danger => "notification notification--danger",
            Severity::Warning => "notification notification--warning",
            Severity::Success => "notification notification--success",
            Severity::Info => "notification notification--info",
        }
    }
}

/// Уведомление пользователю
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub severity: Severity,
    pub title: String,
    pub icon: &'static str,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    pub fn new(severity: Severity, title: impl Into<String>, icon: &'static str, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            severity,
            title: title.into(),
            icon,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// Ошибка сервиса: фиксированная иконка, текст сервиса, текущее время
    pub fn danger(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(Severity::Danger, title, "alert", text)
    }
}

/// Стек уведомлений в правом нижнем углу
#[component]
pub fn NotificationHost() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not provided in context");

    view! {
        <div class="notification-host">
            <For
                each=move || ctx.notifications.get()
                key=|n| n.id
                children=move |n: Notification| {
                    let id = n.id;
                    view! {
                        <div class=n.severity.class() role="alert">
                            <i class="notification__icon">{icon(n.icon)}</i>
                            <div class="notification__body">
                                <strong class="notification__title">{n.title}</strong>
                                <span class="notification__text">{n.text}</span>
                                <time class="notification__time">
                                    {n.timestamp.format("%H:%M:%S").to_string()}
                                </time>
                            </div>
                            <button
                                type="button"
                                class="button button--icon"
                                on:click=move |_| ctx.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_danger_notification() {
        let before = Utc::now();
        let n = Notification::danger("Error", "Network unreachable");
        assert_eq!(n.severity, Severity::Danger);
        assert_eq!(n.icon, "alert");
        assert_eq!(n.text, "Network unreachable");
        assert!(n.timestamp >= before);
    }

    #[test]
    fn test_notifications_get_distinct_ids() {
        let a = Notification::danger("Error", "a");
        let b = Notification::danger("Error", "a");
        assert_ne!(a.id, b.id);
    }
}
