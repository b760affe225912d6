use crate::notification::send_daily_notifications::SendDailyNotificationsUseCase;
use crate::shared::usecase::execute;
use actix_web::rt::time::{interval, sleep};
use chrono::{Duration as ChronoDuration, NaiveDateTime};
use std::time::Duration;
use tracing::info;
use wildcal_infra::WildcalContext;

/// Seconds from `now` until the next local `hour:00:00`. If that time has
/// already passed today the job waits for tomorrow's occurrence.
pub fn get_start_delay(now: NaiveDateTime, hour: u32) -> u64 {
    let mut target = now
        .date()
        .and_hms_opt(hour, 0, 0)
        .unwrap_or_else(|| now.date().and_hms_opt(0, 0, 0).unwrap());
    if target <= now {
        target += ChronoDuration::days(1);
    }
    (target - now).num_seconds() as u64
}

pub fn start_daily_notification_job(ctx: WildcalContext) {
    actix_web::rt::spawn(async move {
        let delay = get_start_delay(ctx.sys.get_local_datetime(), ctx.config.notification_hour);
        info!(
            "Daily notification job starts in {} seconds, then fires every 24h at local hour {}",
            delay, ctx.config.notification_hour
        );
        sleep(Duration::from_secs(delay)).await;

        let mut daily_interval = interval(Duration::from_secs(24 * 60 * 60));
        loop {
            daily_interval.tick().await;

            // Each run only ever covers the single day it fires for
            let usecase = SendDailyNotificationsUseCase {
                date: ctx.sys.get_local_date(),
            };
            let _ = execute(usecase, &ctx).await;
        }
    });
}
