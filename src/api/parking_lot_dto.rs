use serde::Deserialize;
use std::num::NonZeroUsize;

/// On-disk description of a parking lot.
///
/// ```json
/// { "capacity": 6, "log_level": "debug" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParkingLotDto {
    /// Zero is rejected while parsing.
    pub capacity: NonZeroUsize,

    /// Overrides `RUST_LOG` when no `--log-level` flag is given.
    #[serde(default)]
    pub log_level: Option<String>,
}
