//! Performance monitor: reports navigation timing of the current page load.

use contracts::system::vitals::{VitalsReport, VITALS_PATH};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::window;

const POLL_INTERVAL_MS: u32 = 100;
const MAX_POLLS: u32 = 100;

/// Raw `PerformanceTiming` marks, epoch milliseconds.
#[derive(Clone, Copy, Debug)]
pub struct TimingMarks {
    pub navigation_start: f64,
    pub response_start: f64,
    pub dom_content_loaded_end: f64,
    pub load_event_end: f64,
}

impl TimingMarks {
    pub fn report(&self, path: &str) -> VitalsReport {
        let since_start = |mark: f64| mark - self.navigation_start;
        VitalsReport {
            path: path.to_string(),
            ttfb_ms: since_start(self.response_start),
            dom_content_loaded_ms: since_start(self.dom_content_loaded_end),
            load_ms: since_start(self.load_event_end),
        }
    }
}

fn read_marks() -> Option<TimingMarks> {
    let timing = window()?.performance()?.timing();
    Some(TimingMarks {
        navigation_start: timing.navigation_start(),
        response_start: timing.response_start(),
        dom_content_loaded_end: timing.dom_content_loaded_event_end(),
        load_event_end: timing.load_event_end(),
    })
}

fn document_complete() -> bool {
    window()
        .and_then(|w| w.document())
        .map(|d| d.ready_state() == "complete")
        .unwrap_or(false)
}

async fn send(report: &VitalsReport) -> Result<(), String> {
    let response = Request::post(VITALS_PATH)
        .json(report)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Vitals rejected: {}", response.status()));
    }
    Ok(())
}

async fn collect_and_send() {
    for _ in 0..MAX_POLLS {
        if document_complete() {
            break;
        }
        TimeoutFuture::new(POLL_INTERVAL_MS).await;
    }
    // loadEventEnd is only set after the load handlers returned.
    TimeoutFuture::new(0).await;

    let Some(marks) = read_marks() else {
        return;
    };
    let path = window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    let report = marks.report(&path);

    if !report.is_plausible() {
        log::debug!("Skipping implausible timing: {:?}", report);
        return;
    }
    if let Err(e) = send(&report).await {
        log::warn!("{}", e);
    }
}

/// Invisible component; starts one report per page load.
#[component]
pub fn PerformanceMonitor() -> impl IntoView {
    spawn_local(collect_and_send());
    view! { <></> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_relative_to_navigation_start() {
        let marks = TimingMarks {
            navigation_start: 1_000.0,
            response_start: 1_080.0,
            dom_content_loaded_end: 1_400.0,
            load_event_end: 1_900.0,
        };
        let report = marks.report("/movies");
        assert_eq!(report.path, "/movies");
        assert_eq!(report.ttfb_ms, 80.0);
        assert_eq!(report.dom_content_loaded_ms, 400.0);
        assert_eq!(report.load_ms, 900.0);
        assert!(report.is_plausible());
    }

    #[test]
    fn test_unfinished_load_is_implausible() {
        let marks = TimingMarks {
            navigation_start: 1_000.0,
            response_start: 1_080.0,
            dom_content_loaded_end: 1_400.0,
            load_event_end: 0.0,
        };
        assert!(!marks.report("/").is_plausible());
    }
}
