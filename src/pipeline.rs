//! The evaluation pipeline.
//!
//! One composition point shared by the HTTP trigger and the scheduled job:
//! load the roster, evaluate it against the reference date, build the
//! webhook payload, and deliver it when a target is configured.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::config::TrackerConfig;
use crate::delivery::WebhookSender;
use crate::error::EngineResult;
use crate::evaluation::evaluate;
use crate::models::EvaluationResult;
use crate::payload::build_payload;
use crate::roster::load_roster;

/// Runs one full evaluation cycle.
///
/// The roster is reloaded from disk on every run so each invocation sees a
/// fresh snapshot. Delivery is skipped (and logged) when no webhook URL is
/// configured or when `deliver` is false; the evaluation result is returned
/// either way. A run that produces no notifications is a valid result and
/// is still delivered.
///
/// # Arguments
///
/// * `config` - The runtime configuration (roster path, webhook target).
/// * `reference_date` - The date to evaluate obligations against.
/// * `deliver` - Whether to POST the payload to the configured webhook.
pub async fn run_evaluation(
    config: &TrackerConfig,
    reference_date: NaiveDate,
    deliver: bool,
) -> EngineResult<EvaluationResult> {
    let employees = load_roster(&config.roster_path)?;
    let result = evaluate(&employees, reference_date);

    info!(
        reference_date = %reference_date,
        employees = employees.len(),
        initial_tests = result.initial_tests.len(),
        followup_tests = result.followup_tests.len(),
        "Evaluation completed"
    );

    if !deliver {
        return Ok(result);
    }

    match &config.webhook_url {
        Some(url) => {
            let payload = build_payload(&result);
            let sender = WebhookSender::new(url.as_str());
            sender.send(&payload).await?;
            info!(
                url = %url,
                notifications = payload.notifications.len(),
                "Webhook delivered"
            );
        }
        None => {
            warn!("No webhook URL configured; skipping delivery");
        }
    }

    Ok(result)
}
