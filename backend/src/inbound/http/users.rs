//! Users API handlers.
//!
//! ```text
//! POST /users [{"name":"Aabhash","pan":"ABCDE1234F","mobile":"9876543210","email":"aabhash@example.com"}]
//! ```

use actix_web::{post, web};

use crate::domain::CandidateRecord;
use crate::inbound::http::ApiResult;
use crate::inbound::http::batch_response::BatchResponse;
use crate::inbound::http::schemas::{CandidateRecordSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// Validate and store a batch of users.
///
/// Each record is judged on its own: valid records are stored with a fresh
/// identifier, invalid ones are listed with their reason. A batch where
/// every record fails is still a `200`. Only a body that is not a JSON
/// array of objects is refused outright.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_ingest::inbound::http::users::create_users;
///
/// let app = App::new().service(create_users);
/// ```
#[utoipa::path(
    post,
    path = "/users",
    request_body = Vec<CandidateRecordSchema>,
    responses(
        (status = 200, description = "Batch processed", body = BatchResponse),
        (status = 400, description = "Malformed request body", body = ErrorSchema),
        (status = 413, description = "Request body too large", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUsers"
)]
#[post("/users")]
pub async fn create_users(
    state: web::Data<HttpState>,
    payload: web::Json<Vec<CandidateRecord>>,
) -> ApiResult<web::Json<BatchResponse>> {
    let result = state.users.submit(payload.into_inner())?;
    Ok(web::Json(BatchResponse::from(result)))
}
