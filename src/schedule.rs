//! The daily evaluation trigger.
//!
//! A cron job fires once a day at the configured hour (UTC) and runs the
//! full evaluation pipeline with the current date. The engine itself holds
//! no scheduler state; the job is owned by the binary's composition root,
//! which keeps the returned scheduler alive for the process lifetime.

use chrono::Utc;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};
use tracing::{error, info};

use crate::api::AppState;
use crate::pipeline::run_evaluation;

/// Starts the daily evaluation job.
///
/// The job fires at `notify_hour` UTC every day, evaluates the roster
/// against the current date, and delivers the payload to the configured
/// webhook. Failures are logged and do not stop the schedule; the next day's
/// run starts from a fresh roster snapshot.
///
/// Returns the running scheduler; dropping it stops the job.
pub async fn start_daily_job(state: AppState) -> Result<JobScheduler, JobSchedulerError> {
    let schedule = format!("0 0 {} * * *", state.config().notify_hour);
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(schedule.as_str(), move |_id, _scheduler| {
        let state = state.clone();
        Box::pin(async move {
            let today = Utc::now().date_naive();
            match run_evaluation(state.config(), today, true).await {
                Ok(result) => {
                    info!(
                        reference_date = %today,
                        notifications = result.len(),
                        "Scheduled evaluation completed"
                    );
                }
                Err(err) => {
                    error!(error = %err, "Scheduled evaluation failed");
                }
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;
    info!(schedule = %schedule, "Daily evaluation job scheduled");

    Ok(scheduler)
}
