use std::sync::Arc;
use std::time::Duration;

use log::{error, info};
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};

use crate::radar::ReleaseRadar;

/// Start one run in the background and hand back its handle.
///
/// The outcome is only logged: the handle resolves to `()` whether the run
/// succeeded or not. Await it before treating the invocation as finished.
pub fn dispatch(radar: Arc<ReleaseRadar>) -> JoinHandle<()> {
    tokio::spawn(async move {
        match radar.run().await {
            Ok(count) => info!("notify completed ({count} playlist entries)"),
            Err(e) => match e.stage() {
                Some(stage) => error!("{stage} stage failed: {e}"),
                None => error!("{e}"),
            },
        }
    })
}

/// Fire a run every `every`, waiting for each run before the next tick.
///
/// A run that outlasts the period delays the next one instead of overlapping it.
pub async fn schedule(radar: Arc<ReleaseRadar>, every: Duration) {
    let mut ticker = interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        if let Err(e) = dispatch(radar.clone()).await {
            error!("Release radar run aborted: {e}");
        }
        info!("Next run in {}", humantime::format_duration(every));
    }
}
