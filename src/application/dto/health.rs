use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Liveness payload. `ts` is milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthDto {
    pub ok: bool,
    #[schema(example = 1_700_000_000_000_i64)]
    pub ts: i64,
}
