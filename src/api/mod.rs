use axum::{
    Router,
    extract::Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use serde_json::Value;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::core::calc_income_tax_for_severance_pay;

#[derive(Debug, Serialize)]
struct CalcTaxResponse {
    tax: i64,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    message: String,
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = router();

    let listener = TcpListener::bind(addr).await?;
    info!("severance tax API listening on http://{addr}");

    axum::serve(listener, app).await
}

fn router() -> Router {
    Router::new()
        .route("/calc-tax", post(calc_tax_handler))
        .fallback(not_found_handler)
}

async fn calc_tax_handler(Json(payload): Json<Value>) -> Response {
    match calc_income_tax_for_severance_pay(payload) {
        Ok(tax) => json_response(StatusCode::OK, CalcTaxResponse { tax }),
        Err(err) => {
            debug!(violation = %err.violation(), "rejected calc-tax payload");
            error_response(StatusCode::BAD_REQUEST, "Invalid parameter.")
        }
    }
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        "no-store".parse().expect("valid header"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            message: msg.to_string(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        serde_json::from_slice(&bytes).expect("body should be JSON")
    }

    #[test]
    fn calc_tax_response_serializes_tax_field() {
        let body = serde_json::to_value(CalcTaxResponse { tax: 482_422 }).unwrap();
        assert_eq!(body, json!({ "tax": 482_422 }));
    }

    #[tokio::test]
    async fn calc_tax_handler_returns_tax_for_valid_payload() {
        let payload = json!({
            "yearsOfService": 5,
            "isDisability": false,
            "isOfficer": false,
            "severancePay": 8_000_000,
        });
        let response = calc_tax_handler(Json(payload)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "no-store"
        );
        assert_eq!(body_json(response).await, json!({ "tax": 482_422 }));
    }

    #[tokio::test]
    async fn calc_tax_handler_rejects_invalid_payload_with_generic_message() {
        let payload = json!({
            "yearsOfService": 0,
            "isDisability": false,
            "isOfficer": false,
            "severancePay": 8_000_000,
        });
        let response = calc_tax_handler(Json(payload)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "Invalid parameter." })
        );
    }

    #[tokio::test]
    async fn calc_tax_handler_rejects_unknown_fields() {
        let payload = json!({
            "yearsOfService": 5,
            "isDisability": false,
            "isOfficer": false,
            "severancePay": 8_000_000,
            "note": "year-end bonus",
        });
        let response = calc_tax_handler(Json(payload)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "Invalid parameter." })
        );
    }
}
