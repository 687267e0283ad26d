use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Body of `/actuator/health`, `UP` or `DOWN`.
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct HealthDto {
    pub status: String,
}
