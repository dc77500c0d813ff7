use serde::{Deserialize, Serialize};

/// Endpoint the client posts navigation timings to.
pub const VITALS_PATH: &str = "/api/vitals";

/// Navigation timing of one page load, in milliseconds since navigation start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalsReport {
    pub path: String,
    pub ttfb_ms: f64,
    pub dom_content_loaded_ms: f64,
    pub load_ms: f64,
}

impl VitalsReport {
    /// Browsers report zero or negative values for phases that never ran.
    pub fn is_plausible(&self) -> bool {
        let phases = [self.ttfb_ms, self.dom_content_loaded_ms, self.load_ms];
        phases.iter().all(|v| v.is_finite() && *v >= 0.0)
            && self.ttfb_ms <= self.dom_content_loaded_ms
            && self.dom_content_loaded_ms <= self.load_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(ttfb: f64, dcl: f64, load: f64) -> VitalsReport {
        VitalsReport {
            path: "/".to_string(),
            ttfb_ms: ttfb,
            dom_content_loaded_ms: dcl,
            load_ms: load,
        }
    }

    #[test]
    fn test_plausible() {
        assert!(report(80.0, 400.0, 900.0).is_plausible());
        assert!(!report(80.0, 400.0, -1.0).is_plausible());
        assert!(!report(500.0, 400.0, 900.0).is_plausible());
        assert!(!report(f64::NAN, 400.0, 900.0).is_plausible());
    }
}
