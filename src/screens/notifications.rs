//! Notification center.

use crate::db::Storage;
use crate::errors::AppError;
use crate::models::{Notification, NotificationCategory, Route};
use crate::AppContext;

/// Tab selection on the notification center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationFilter {
    #[default]
    All,
    Category(NotificationCategory),
}

impl NotificationFilter {
    pub fn matches(&self, notification: &Notification) -> bool {
        match self {
            NotificationFilter::All => true,
            NotificationFilter::Category(category) => notification.category == *category,
        }
    }
}

pub async fn list_notifications<S: Storage>(
    ctx: &AppContext<S>,
    filter: NotificationFilter,
) -> Result<Vec<Notification>, AppError> {
    Ok(ctx
        .notifications
        .get_notifications()
        .await?
        .into_iter()
        .filter(|n| filter.matches(n))
        .collect())
}

pub async fn unread_count<S: Storage>(ctx: &AppContext<S>) -> Result<usize, AppError> {
    ctx.notifications.unread_count().await
}

/// Mark a notification read and return where tapping it leads.
///
/// Notices linked to an appointment open that appointment; everything else
/// opens the notification detail view. Unknown ids return `None`.
pub async fn open_notification<S: Storage>(
    ctx: &AppContext<S>,
    notification_id: &str,
) -> Result<Option<Route>, AppError> {
    let Some(notification) = ctx
        .notifications
        .get_notification_by_id(notification_id)
        .await?
    else {
        return Ok(None);
    };

    if !notification.read {
        ctx.notifications
            .mark_notification_as_read(notification_id)
            .await?;
    }

    let route = match notification.appointment_id {
        Some(appointment_id) => Route::AppointmentDetails { appointment_id },
        None => Route::NotificationDetails {
            notification_id: notification.id,
        },
    };
    Ok(Some(route))
}

pub async fn mark_all_read<S: Storage>(ctx: &AppContext<S>) -> Result<usize, AppError> {
    let changed = ctx.notifications.mark_all_as_read().await?;
    tracing::debug!(changed, "Marked notifications read");
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::db::MemoryStorage;
    use crate::models::NotificationType;

    fn notice(id: &str, category: NotificationCategory, appointment_id: Option<&str>) -> Notification {
        Notification {
            id: id.to_string(),
            kind: NotificationType::Other,
            title: id.to_string(),
            description: String::new(),
            time: "2 hours ago".to_string(),
            read: false,
            category,
            appointment_id: appointment_id.map(str::to_string),
        }
    }

    async fn seeded() -> AppContext<MemoryStorage> {
        let ctx = AppContext::new(MemoryStorage::new(), Config::default());
        for n in [
            notice("policy-1", NotificationCategory::Policy, None),
            notice("apt-note", NotificationCategory::Services, Some("apt-7")),
            notice("survey-1", NotificationCategory::Participation, None),
        ] {
            ctx.notifications.add_notification(n).await.unwrap();
        }
        ctx
    }

    #[tokio::test]
    async fn test_filter_by_category() {
        let ctx = seeded().await;

        let all = list_notifications(&ctx, NotificationFilter::All).await.unwrap();
        assert_eq!(all.len(), 3);

        let services = list_notifications(
            &ctx,
            NotificationFilter::Category(NotificationCategory::Services),
        )
        .await
        .unwrap();
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].id, "apt-note");
    }

    #[tokio::test]
    async fn test_open_marks_read_and_routes() {
        let ctx = seeded().await;
        assert_eq!(unread_count(&ctx).await.unwrap(), 3);

        let route = open_notification(&ctx, "apt-note").await.unwrap();
        assert_eq!(
            route,
            Some(Route::AppointmentDetails {
                appointment_id: "apt-7".to_string()
            })
        );

        let route = open_notification(&ctx, "policy-1").await.unwrap();
        assert_eq!(
            route,
            Some(Route::NotificationDetails {
                notification_id: "policy-1".to_string()
            })
        );
        assert_eq!(unread_count(&ctx).await.unwrap(), 1);

        assert_eq!(open_notification(&ctx, "nope").await.unwrap(), None);

        assert_eq!(mark_all_read(&ctx).await.unwrap(), 1);
        assert_eq!(unread_count(&ctx).await.unwrap(), 0);
    }
}
