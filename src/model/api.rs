use serde::{Deserialize, Serialize};

use crate::model::user::UserDto;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Payload returned by the `privateData` procedure
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PrivateDataDto {
    pub message: String,
    /// The user the request was authenticated as
    pub user: UserDto,
}

/// Generic acknowledgement for endpoints without a meaningful body
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct SuccessDto {
    pub success: bool,
}
