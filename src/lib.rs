pub mod config;
pub mod error;
pub mod geo;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use geo::{
    build_clusters, distance_km, find_within_radius, Cluster, Coordinate, GeoError, GeoPoint,
    Match,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
