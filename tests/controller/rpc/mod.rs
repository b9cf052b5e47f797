
use super::*;
use homepage::server::{
    api::{create_api, ApiDeps},
    context::create_context,
};
