use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    copy_runs: AtomicU64,
    copy_successes: AtomicU64,
    copy_failures: AtomicU64,
    series_listings: AtomicU64,
    connection_checks: AtomicU64,
}

impl Metrics {
    pub fn record_copy_started(&self) {
        self.copy_runs.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_copy_finished(&self, success: bool) {
        if success {
            self.copy_successes.fetch_add(1, Ordering::Relaxed);
        } else {
            self.copy_failures.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_series_listing(&self) {
        self.series_listings.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_connection_check(&self) {
        self.connection_checks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let runs = self.copy_runs.load(Ordering::Relaxed);
        let successes = self.copy_successes.load(Ordering::Relaxed);
        let failures = self.copy_failures.load(Ordering::Relaxed);
        let listings = self.series_listings.load(Ordering::Relaxed);
        let checks = self.connection_checks.load(Ordering::Relaxed);

        format!(
            "# TYPE boxoffice_copy_runs_total counter\n\
boxoffice_copy_runs_total {}\n\
# TYPE boxoffice_copy_successes_total counter\n\
boxoffice_copy_successes_total {}\n\
# TYPE boxoffice_copy_failures_total counter\n\
boxoffice_copy_failures_total {}\n\
# TYPE boxoffice_series_listings_total counter\n\
boxoffice_series_listings_total {}\n\
# TYPE boxoffice_connection_checks_total counter\n\
boxoffice_connection_checks_total {}\n",
            runs, successes, failures, listings, checks
        )
    }
}
