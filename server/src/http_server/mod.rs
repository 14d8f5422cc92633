use axum::response::Response;

use errors::ServerError;

pub(crate) mod cmd;
pub(crate) mod routes;

pub(crate) mod api {
    pub mod ingredients;
    pub mod locations;
    pub mod recipes;
}

pub(crate) mod pages {
    pub mod home;
}

mod config;
pub(crate) mod errors;
mod server;
mod templates;
mod trace;

#[cfg(test)]
pub(crate) mod test_helpers;

const SITE_STYLES: &str = include_str!("../../static/site.css");

pub(crate) type ResponseResult<T = Response> = Result<T, ServerError>;
