//! RPC procedures.
//!
//! Procedure bodies only see the context type they are registered with: public procedures
//! take a [`RequestContext`], private ones an [`AuthenticatedContext`].

use crate::{
    model::api::PrivateDataDto,
    server::model::context::{AuthenticatedContext, RequestContext},
};

pub static HEALTH_CHECK_RESPONSE: &str = "OK";
pub static PRIVATE_DATA_MESSAGE: &str = "This is private";

/// Public procedure, always answers with [`HEALTH_CHECK_RESPONSE`].
pub fn health_check(_ctx: &RequestContext) -> &'static str {
    HEALTH_CHECK_RESPONSE
}

/// Private procedure returning the caller's user.
pub fn private_data(ctx: &AuthenticatedContext) -> PrivateDataDto {
    PrivateDataDto {
        message: PRIVATE_DATA_MESSAGE.to_string(),
        user: ctx.session.user.clone(),
    }
}
