// Route exports
pub mod errors;
pub mod schools;

use actix_web::web;

pub use errors::{handle_json_payload_error, handle_query_payload_error, ApiError};
pub use schools::AppState;

/// Routes live at the root so existing clients keep working
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(schools::configure);
}
