use crate::error::WildcalError;
use actix_web::HttpRequest;
use wildcal_infra::WildcalContext;

pub const ADMIN_API_KEY_HEADER: &str = "wildcal-admin-api-key";

/// Gates the moderation routes behind the shared admin API key from config.
/// This is a placeholder for a real session layer, not account
/// authentication.
pub fn protect_admin_route(
    http_req: &HttpRequest,
    ctx: &WildcalContext,
) -> Result<(), WildcalError> {
    let api_key = match http_req.headers().get(ADMIN_API_KEY_HEADER) {
        Some(api_key) => match api_key.to_str() {
            Ok(api_key) => api_key,
            Err(_) => {
                return Err(WildcalError::Unauthorized(
                    "Malformed api key header".into(),
                ))
            }
        },
        None => {
            return Err(WildcalError::Unauthorized(format!(
                "Missing `{}` header",
                ADMIN_API_KEY_HEADER
            )))
        }
    };

    if api_key == ctx.config.admin_api_key {
        Ok(())
    } else {
        Err(WildcalError::Unauthorized("Invalid admin api key".into()))
    }
}
