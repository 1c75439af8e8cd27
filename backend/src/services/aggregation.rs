//! One polling cycle: fan out to every signal service, merge the results
//!
//! Sources run as separate tasks so a panic in one only costs that source.
//! Cancelling the cycle token aborts whatever is still running and the
//! partial results are discarded.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use shared::{ConnectionStatus, CropHealthRecord, DashboardSnapshot, DashboardSummary, Sourced};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use uuid::Uuid;

use super::Services;
use crate::error::AppError;

const CROPS_UNAVAILABLE: &str = "Crop data unavailable";

/// `connected` only when every required source produced a result.
/// Crops are optional and never affect the status.
pub fn connection_status(weather_ok: bool, alerts_ok: bool, health_ok: bool) -> ConnectionStatus {
    if weather_ok && alerts_ok && health_ok {
        ConnectionStatus::Connected
    } else {
        ConnectionStatus::Error
    }
}

fn settled<T>(name: &str, result: Result<T, tokio::task::JoinError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            let err = AppError::from(err);
            warn!(source = name, error = %err, "Signal source task failed");
            None
        }
    }
}

/// Run one cycle. Returns `None` if `cancel` fires before every source settles.
pub async fn run_cycle(
    services: &Services,
    now: DateTime<Utc>,
    cancel: CancellationToken,
) -> Option<DashboardSnapshot> {
    let cycle_id = Uuid::new_v4();

    let mut weather = {
        let service = services.weather.clone();
        tokio::spawn(async move { service.current_readings(now) })
    };
    let mut alerts = {
        let service = services.alerts.clone();
        tokio::spawn(async move { service.collect(now).await })
    };
    let mut health = {
        let service = services.health.clone();
        tokio::spawn(async move { service.health_risks(now).await })
    };
    let mut crops = {
        let service = services.crops.clone();
        tokio::spawn(async move { service.crop_health(now).await })
    };

    let settled_all = tokio::select! {
        _ = cancel.cancelled() => None,
        results = async { tokio::join!(&mut weather, &mut alerts, &mut health, &mut crops) } => Some(results),
    };

    let Some((weather, alerts, health, crops)) = settled_all else {
        weather.abort();
        alerts.abort();
        health.abort();
        crops.abort();
        info!(%cycle_id, "Polling cycle cancelled");
        return None;
    };

    let weather = settled("weather", weather);
    let alerts = settled("alerts", alerts);
    let health = settled("health", health);
    let crops: Sourced<Vec<CropHealthRecord>> = settled("crops", crops)
        .unwrap_or_else(|| Sourced::fallback(Vec::new(), CROPS_UNAVAILABLE));

    let status = connection_status(weather.is_some(), alerts.is_some(), health.is_some());

    let mut sources = Vec::new();
    if let Some(w) = &weather {
        sources.push(w.source.clone());
    }
    if let Some(a) = &alerts {
        sources.extend(a.sources.iter().cloned());
    }
    if let Some(h) = &health {
        sources.push(h.source.clone());
    }
    sources.push(crops.source.clone());
    let mut seen = HashSet::new();
    sources.retain(|source| seen.insert(source.clone()));

    let weather = weather.map(|w| w.data).unwrap_or_default();
    let alerts = alerts.map(|a| a.alerts).unwrap_or_default();
    let health = health.map(|h| h.data).unwrap_or_default();
    let crops = crops.data;

    let summary = DashboardSummary::derive(&weather, &alerts, &crops);

    info!(
        %cycle_id,
        ?status,
        districts = weather.len(),
        alerts = alerts.len(),
        critical_alerts = summary.critical_alerts.len(),
        "Polling cycle complete"
    );

    Some(DashboardSnapshot {
        cycle_id: Some(cycle_id),
        weather,
        alerts,
        health,
        crops,
        sources,
        summary,
        status,
        last_updated: Some(now),
    })
}
