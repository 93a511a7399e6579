//! JSON HTTP surface of the service, mounted under [`crate::consts::API_PREFIX`].

pub mod errors;
pub mod horse;
pub mod medical_record;
pub mod routes;
pub mod schemas;
pub mod server;

use crate::repo;

pub struct AppState {
    pub repo: repo::ImplAppRepo,
}
