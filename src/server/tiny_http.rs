//! tiny_http server adapter
//!
//! Routing, body parsing, and response conversion for tiny_http. Routes
//! mirror the GPSS wire surface: `POST /api/v2/pksm/legality` and
//! `POST /api/v2/pksm/legalize`.

use std::io::Cursor;
use std::io::Read as _;

use serde::{Serialize, de::DeserializeOwned};
use tiny_http::{Header, Method, Request, Response, StatusCode};

use crate::api::{self, ApiError, ApiResponse, LegalityRequest, LegalizeRequest};

/// Handle an API request and produce a response.
pub fn handle_api_request(request: &mut Request) -> Response<Cursor<Vec<u8>>> {
    let path = request.url().to_string();
    let method = request.method().clone();

    match (&method, path.as_str()) {
        (&Method::Post, "/api/v2/pksm/legality") => {
            match read_json_body::<LegalityRequest>(request) {
                Ok(body) => handle_result(api::check_legality(&body)),
                Err(err) => error_response(&err),
            }
        },
        (&Method::Post, "/api/v2/pksm/legalize") => {
            match read_json_body::<LegalizeRequest>(request) {
                Ok(body) => handle_result(api::legalize(&body)),
                Err(err) => error_response(&err),
            }
        },
        _ => error_response(&ApiError::not_found(format!(
            "API endpoint not found: {method} {path}"
        ))),
    }
}

/// Read and parse a JSON body.
fn read_json_body<T: DeserializeOwned>(request: &mut Request) -> Result<T, ApiError> {
    let mut body = String::new();
    request
        .as_reader()
        .read_to_string(&mut body)
        .map_err(|err| ApiError::bad_request(format!("failed to read request body: {err}")))?;

    serde_json::from_str(&body).map_err(|err| ApiError::bad_request(format!("invalid JSON: {err}")))
}

/// Convert a handler result to an HTTP response.
fn handle_result<T: Serialize>(result: Result<T, ApiError>) -> Response<Cursor<Vec<u8>>> {
    match result {
        Ok(data) => json_response(&ApiResponse::success(data), 200),
        Err(err) => error_response(&err),
    }
}

/// Error JSON response with the error's status code.
fn error_response(error: &ApiError) -> Response<Cursor<Vec<u8>>> {
    json_response(&ApiResponse::failure(error), error.status_code())
}

/// Serialize data as a JSON response.
fn json_response<T: Serialize>(data: &T, status: u16) -> Response<Cursor<Vec<u8>>> {
    let json = serde_json::to_string(data).unwrap_or_else(|_| r#"{"success":false}"#.to_string());
    let mut response = Response::from_data(json.into_bytes()).with_status_code(StatusCode(status));
    if let Ok(header) = Header::from_bytes("Content-Type", "application/json") {
        response = response.with_header(header);
    }
    response
}
