use crate::calendar::resolve_assignment::{resolve_assignment_full, ResolvedAssignment};
use crate::shared::usecase::UseCase;
use chrono::NaiveDate;
use serde_json::json;
use tracing::{error, info, warn};
use wildcal_domain::{NotificationChannel, NotificationLogEntry, NotificationStatus};
use wildcal_infra::WildcalContext;

/// Notifies the featured photographer for a single date over every
/// configured channel, writing one log entry per attempt. A channel that
/// fails never blocks the remaining channels.
#[derive(Debug)]
pub struct SendDailyNotificationsUseCase {
    pub date: NaiveDate,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendDailyNotificationsUseCase {
    type Response = Vec<NotificationLogEntry>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &WildcalContext) -> Result<Self::Response, Self::Errors> {
        let assignment = match ctx.repos.assignments.find_by_date(self.date).await {
            Some(assignment) => assignment,
            None => {
                info!("No featured photo for {}, nothing to notify", self.date);
                return Ok(vec![]);
            }
        };

        let resolved = match resolve_assignment_full(&assignment, ctx).await {
            Some(resolved) => resolved,
            None => {
                info!("No featured photo for {}, nothing to notify", self.date);
                return Ok(vec![]);
            }
        };

        let mut entries = Vec::with_capacity(ctx.config.notification_channels.len());
        for channel in &ctx.config.notification_channels {
            let entry = attempt_channel(*channel, &resolved, self.date, ctx).await;
            ctx.repos.notification_log.insert(&entry).await.map_err(|e| {
                error!("Unable to record notification log entry: {:?}", e);
                UseCaseErrors::StorageError
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }
}

async fn attempt_channel(
    channel: NotificationChannel,
    resolved: &ResolvedAssignment,
    date: NaiveDate,
    ctx: &WildcalContext,
) -> NotificationLogEntry {
    let photographer = &resolved.photographer;
    let now = ctx.sys.get_timestamp_millis();

    let recipient = match channel {
        NotificationChannel::Email => Some(photographer.email.clone()),
        NotificationChannel::Instagram => photographer.instagram_handle.clone(),
    };
    let recipient = match recipient {
        Some(recipient) => recipient,
        None => {
            // Instagram channel without a handle on file
            warn!(
                "Photographer {} has no {} recipient, logging a failed attempt",
                photographer.id, channel
            );
            return NotificationLogEntry::new(
                date,
                photographer.id.clone(),
                channel,
                NotificationStatus::Failed,
                json!({ "error": format!("No {} recipient on file", channel) }),
                now,
            );
        }
    };

    let message = format!(
        "Hi {}! Your photo is featured on the wildlife calendar today, {}.",
        photographer.name, date
    );
    let provider = ctx.notifiers.provider_for(channel);
    let res = provider
        .send_notification(
            &recipient,
            &message,
            Some(resolved.submission.image_web_url.as_str()),
        )
        .await;

    let (status, details) = match res {
        Ok(outcome) if outcome.delivered => (NotificationStatus::Sent, outcome.detail),
        Ok(outcome) => (NotificationStatus::Queued, outcome.detail),
        Err(e) => {
            warn!("Notification over {} for {} failed: {}", channel, date, e);
            (NotificationStatus::Failed, json!({ "error": e.to_string() }))
        }
    };

    NotificationLogEntry::new(date, photographer.id.clone(), channel, status, details, now)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::Arc;
    use wildcal_domain::{Assignment, Photographer, Submission};
    use wildcal_infra::{
        FixedSys, INotificationProvider, NotificationOutcome, StubNotificationProvider,
    };

    struct FailingProvider {}

    #[async_trait::async_trait]
    impl INotificationProvider for FailingProvider {
        async fn send_notification(
            &self,
            _recipient: &str,
            _message: &str,
            _asset_url: Option<&str>,
        ) -> anyhow::Result<NotificationOutcome> {
            Err(anyhow::anyhow!("relay unreachable"))
        }
    }

    fn test_context(channels: Vec<NotificationChannel>) -> WildcalContext {
        let mut ctx = WildcalContext::create_inmemory();
        ctx.config.notification_channels = channels;
        ctx.sys = Arc::new(FixedSys {
            timestamp_millis: 1_767_868_200_000,
            datetime: chrono::NaiveDate::from_ymd_opt(2026, 1, 26)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
        });
        ctx
    }

    async fn seed_featured_photo(ctx: &WildcalContext, instagram_handle: Option<String>) {
        let photographer =
            Photographer::new("Jane".into(), "jane@example.com".into(), instagram_handle);
        ctx.repos.photographers.insert(&photographer).await.unwrap();

        let mut submission = Submission::new(
            photographer.id.clone(),
            "/uploads/original.jpg".into(),
            "/uploads/web.jpg".into(),
            Some("A tiger at dawn".into()),
            0,
        );
        submission.approve(1).unwrap();
        ctx.repos.submissions.insert(&submission).await.unwrap();

        let mut assignment = Assignment::new(ctx.sys.get_local_date());
        assignment.submission_id = Some(submission.id.clone());
        ctx.repos.assignments.upsert(&assignment).await.unwrap();
    }

    #[actix_web::main]
    #[test]
    async fn it_logs_one_entry_per_configured_channel() {
        let ctx = test_context(vec![
            NotificationChannel::Email,
            NotificationChannel::Instagram,
        ]);
        seed_featured_photo(&ctx, Some("@jane".into())).await;

        let date = ctx.sys.get_local_date();
        let mut usecase = SendDailyNotificationsUseCase { date };
        let entries = usecase.execute(&ctx).await.unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].channel, NotificationChannel::Email);
        assert_eq!(entries[1].channel, NotificationChannel::Instagram);

        let logged = ctx.repos.notification_log.find_by_date(date).await.unwrap();
        assert_eq!(logged.len(), 2);
    }

    #[actix_web::main]
    #[test]
    async fn it_does_nothing_without_a_featured_photo() {
        let ctx = test_context(vec![NotificationChannel::Email]);

        let date = ctx.sys.get_local_date();
        let mut usecase = SendDailyNotificationsUseCase { date };
        let entries = usecase.execute(&ctx).await.unwrap();

        assert!(entries.is_empty());
        assert!(ctx
            .repos
            .notification_log
            .find_by_date(date)
            .await
            .unwrap()
            .is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn it_logs_a_failed_channel_without_blocking_the_next() {
        let mut ctx = test_context(vec![
            NotificationChannel::Email,
            NotificationChannel::Instagram,
        ]);
        ctx.notifiers.email = Arc::new(FailingProvider {});
        seed_featured_photo(&ctx, Some("@jane".into())).await;

        let date = ctx.sys.get_local_date();
        let mut usecase = SendDailyNotificationsUseCase { date };
        let entries = usecase.execute(&ctx).await.unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].status, NotificationStatus::Failed);
        assert_ne!(entries[1].status, NotificationStatus::Failed);
    }

    #[actix_web::main]
    #[test]
    async fn it_logs_a_failure_when_the_instagram_handle_is_missing() {
        let ctx = test_context(vec![NotificationChannel::Instagram]);
        seed_featured_photo(&ctx, None).await;

        let date = ctx.sys.get_local_date();
        let mut usecase = SendDailyNotificationsUseCase { date };
        let entries = usecase.execute(&ctx).await.unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].status, NotificationStatus::Failed);
    }

    #[actix_web::main]
    #[test]
    async fn it_marks_delivered_sends_as_sent_and_handoffs_as_queued() {
        let mut ctx = test_context(vec![NotificationChannel::Email]);
        seed_featured_photo(&ctx, None).await;
        let date = ctx.sys.get_local_date();

        ctx.notifiers.email = Arc::new(StubNotificationProvider::delivered());
        let mut usecase = SendDailyNotificationsUseCase { date };
        let entries = usecase.execute(&ctx).await.unwrap();
        assert_eq!(entries[0].status, NotificationStatus::Sent);

        ctx.notifiers.email = Arc::new(StubNotificationProvider::queued());
        let mut usecase = SendDailyNotificationsUseCase { date };
        let entries = usecase.execute(&ctx).await.unwrap();
        assert_eq!(entries[0].status, NotificationStatus::Queued);
    }

    #[actix_web::main]
    #[test]
    async fn it_appends_entries_on_reruns() {
        let ctx = test_context(vec![NotificationChannel::Email]);
        seed_featured_photo(&ctx, None).await;

        let date = ctx.sys.get_local_date();
        for _ in 0..2 {
            let mut usecase = SendDailyNotificationsUseCase { date };
            usecase.execute(&ctx).await.unwrap();
        }

        let logged = ctx.repos.notification_log.find_by_date(date).await.unwrap();
        assert_eq!(logged.len(), 2);
    }
}
