use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use bunner_cors_policy::{
    CorsError, CorsOutcome, CorsRequest, Headers, PreflightResponse, constants::header,
};

use super::AppState;

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let owned_ctx = OwnedRequestContext::from_request(&request);
    let mut cors_headers = Headers::new();

    match state
        .cors
        .handle(&owned_ctx, &mut cors_headers, || next.run(request))
    {
        Ok(CorsOutcome::Preflight(preflight)) => preflight_response(preflight),
        Ok(CorsOutcome::Proceed(pending)) => {
            let mut response = pending.await;
            apply_headers(response.headers_mut(), &cors_headers);
            response
        }
        Err(err) => middleware_error_response(err),
    }
}

fn middleware_error_response(err: CorsError) -> Response {
    tracing::warn!(error = %err, "cors evaluation failed");

    let mut response = Response::new(Body::from(format!("CORS evaluation error: {err}")));
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
}

fn preflight_response(preflight: PreflightResponse) -> Response {
    let mut response = Response::new(Body::from(preflight.body().to_vec()));
    *response.status_mut() =
        StatusCode::from_u16(preflight.status).unwrap_or(StatusCode::NO_CONTENT);
    apply_headers(response.headers_mut(), &preflight.headers);
    response
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        if let (Ok(header_name), Ok(header_value)) =
            (HeaderName::try_from(name), HeaderValue::from_str(value))
        {
            map.insert(header_name, header_value);
        }
    }
}

struct OwnedRequestContext {
    method: String,
    origin: Option<String>,
}

impl OwnedRequestContext {
    fn from_request(request: &Request) -> Self {
        Self {
            method: request.method().as_str().to_string(),
            origin: request
                .headers()
                .get(header::ORIGIN)
                .and_then(|value| value.to_str().ok())
                .map(|value| value.to_string()),
        }
    }
}

impl CorsRequest for OwnedRequestContext {
    fn method(&self) -> &str {
        &self.method
    }

    fn header(&self, name: &str) -> Option<&str> {
        if name.eq_ignore_ascii_case(header::ORIGIN) {
            self.origin.as_deref()
        } else {
            None
        }
    }
}
