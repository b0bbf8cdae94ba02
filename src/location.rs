/// Geolocation adapter
///
/// Wraps the platform's position capability behind one async query.
/// Desktop builds have no standard positioning service, so the concrete
/// provider reads an optional fixed position from the environment
/// (`HAZARD_REPORT_LAT` / `HAZARD_REPORT_LON`) — the same stand-in
/// approach the submission backend uses. Support is probed before any
/// query is attempted, and the query itself is wrapped in a bounded
/// timeout so a hung provider cannot leave the form waiting forever.

use std::time::Duration;

use thiserror::Error;

use crate::notify::Notification;
use crate::state::draft::Coordinates;

/// Upper bound on a single position query
pub const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variables the desktop provider reads its fix from
const ENV_LAT: &str = "HAZARD_REPORT_LAT";
const ENV_LON: &str = "HAZARD_REPORT_LON";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("no location capability on this platform")]
    Unsupported,
    #[error("position query failed: {0}")]
    QueryFailed(String),
}

impl LocationError {
    /// The user-facing message for this failure
    pub fn notification(&self) -> Notification {
        match self {
            LocationError::Unsupported => Notification::error(
                "Geolocation not supported",
                "This device has no location capability. Please enter the location manually.",
            ),
            LocationError::QueryFailed(_) => Notification::error(
                "Location error",
                "Unable to get your location. Please enter it manually.",
            ),
        }
    }
}

/// The platform location capability, probed once at startup
#[derive(Debug, Clone)]
pub struct SystemLocation {
    fix: Option<Coordinates>,
    query_delay: Duration,
    timeout: Duration,
}

impl SystemLocation {
    /// Probe the environment for a configured position
    pub fn from_env() -> Self {
        let fix = read_env_fix();
        match fix {
            Some(coordinates) => println!(
                "📍 Location capability available ({:.4}, {:.4})",
                coordinates.latitude, coordinates.longitude
            ),
            None => println!("📍 No location capability; manual entry only"),
        }
        Self {
            fix,
            query_delay: Duration::from_millis(400),
            timeout: ACQUIRE_TIMEOUT,
        }
    }

    /// A provider with a known fix (used by tests)
    pub fn with_fix(latitude: f64, longitude: f64) -> Self {
        Self {
            fix: Some(Coordinates {
                latitude,
                longitude,
            }),
            query_delay: Duration::ZERO,
            timeout: ACQUIRE_TIMEOUT,
        }
    }

    /// A provider with no capability at all (used by tests)
    pub fn unsupported() -> Self {
        Self {
            fix: None,
            query_delay: Duration::ZERO,
            timeout: ACQUIRE_TIMEOUT,
        }
    }

    /// Override the query timeout (used by tests)
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the simulated query latency (used by tests)
    pub fn with_query_delay(mut self, delay: Duration) -> Self {
        self.query_delay = delay;
        self
    }

    /// Whether a position query can be attempted at all
    pub fn is_supported(&self) -> bool {
        self.fix.is_some()
    }

    /// Issue one position query.
    ///
    /// Fails fast with `Unsupported` before touching the provider; a
    /// query that outlives the timeout reports `QueryFailed`.
    pub async fn acquire(&self) -> Result<Coordinates, LocationError> {
        let Some(fix) = self.fix else {
            return Err(LocationError::Unsupported);
        };

        let query = async {
            // Stand-in for the platform round-trip
            tokio::time::sleep(self.query_delay).await;
            fix
        };

        match tokio::time::timeout(self.timeout, query).await {
            Ok(coordinates) => Ok(coordinates),
            Err(_) => Err(LocationError::QueryFailed(format!(
                "timed out after {:?}",
                self.timeout
            ))),
        }
    }
}

fn read_env_fix() -> Option<Coordinates> {
    let latitude: f64 = std::env::var(ENV_LAT).ok()?.trim().parse().ok()?;
    let longitude: f64 = std::env::var(ENV_LON).ok()?.trim().parse().ok()?;
    Some(Coordinates {
        latitude,
        longitude,
    })
}
