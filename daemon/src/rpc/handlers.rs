use actix_web::{error::BlockingError, http::StatusCode, web, HttpResponse};
use landchain_common::{
    abi::{dispatch, dispatch_group},
    parcel::Parcel,
    registry::ParcelRegistry,
};
use log::{debug, error, info};
use serde_json::json;

use super::types::*;

// Registry calls take a std lock and may persist to disk, so they run on the
// blocking pool instead of the HTTP workers.

pub async fn handle_health() -> HttpResponse {
    HttpResponse::Ok().body("OK\n")
}

pub async fn handle_register(
    registry: web::Data<ParcelRegistry>,
    body: web::Json<RegisterRequest>,
) -> HttpResponse {
    let RegisterRequest {
        id,
        owner,
        area,
        location,
    } = body.into_inner();
    match web::block(move || registry.register(id, owner, area, location)).await {
        Ok(message) => HttpResponse::Ok().json(OperationResponse::ok(message)),
        Err(e) => internal_error(e),
    }
}

pub async fn handle_certify(
    registry: web::Data<ParcelRegistry>,
    body: web::Json<CertifyRequest>,
) -> HttpResponse {
    let certificate_number = body.into_inner().certificate_number;
    match web::block(move || registry.certify(certificate_number)).await {
        Ok(message) => HttpResponse::Ok().json(OperationResponse::ok(message)),
        Err(e) => internal_error(e),
    }
}

pub async fn handle_verify(registry: web::Data<ParcelRegistry>) -> HttpResponse {
    match web::block(move || registry.verify()).await {
        Ok(message) => HttpResponse::Ok().json(OperationResponse::ok(message)),
        Err(e) => internal_error(e),
    }
}

pub async fn handle_transfer(
    registry: web::Data<ParcelRegistry>,
    body: web::Json<TransferRequest>,
) -> HttpResponse {
    let new_owner = body.into_inner().new_owner;
    match web::block(move || registry.transfer(new_owner)).await {
        Ok(Ok(message)) => HttpResponse::Ok().json(OperationResponse::ok(message)),
        Ok(Err(rejected)) => {
            let code = rejected.code();
            HttpResponse::build(StatusCode::CONFLICT)
                .json(OperationResponse::rejected(rejected.message, code))
        }
        Err(e) => internal_error(e),
    }
}

pub async fn handle_report(registry: web::Data<ParcelRegistry>) -> HttpResponse {
    match web::block(move || registry.report()).await {
        Ok(report) => HttpResponse::Ok().json(OperationResponse::ok(report)),
        Err(e) => internal_error(e),
    }
}

pub async fn handle_hello(
    registry: web::Data<ParcelRegistry>,
    body: web::Json<HelloRequest>,
) -> HttpResponse {
    HttpResponse::Ok().json(OperationResponse::ok(registry.hello(&body.name)))
}

pub async fn handle_state_export(registry: web::Data<ParcelRegistry>) -> HttpResponse {
    match web::block(move || registry.snapshot()).await {
        Ok(parcel) => HttpResponse::Ok().json(parcel),
        Err(e) => internal_error(e),
    }
}

pub async fn handle_state_load(
    registry: web::Data<ParcelRegistry>,
    body: web::Json<Parcel>,
) -> HttpResponse {
    let parcel = body.into_inner();
    if log::log_enabled!(log::Level::Info) {
        info!("Loading parcel '{}' into the registry", parcel.id);
    }
    match web::block(move || registry.restore(parcel)).await {
        Ok(()) => HttpResponse::Ok().json(json!({ "success": true })),
        Err(e) => internal_error(e),
    }
}

pub async fn handle_state_reset(registry: web::Data<ParcelRegistry>) -> HttpResponse {
    if log::log_enabled!(log::Level::Info) {
        info!("Resetting the registry");
    }
    match web::block(move || registry.reset()).await {
        Ok(()) => HttpResponse::Ok().json(json!({ "success": true })),
        Err(e) => internal_error(e),
    }
}

pub async fn handle_state_global(registry: web::Data<ParcelRegistry>) -> HttpResponse {
    match web::block(move || registry.snapshot().to_global_state()).await {
        Ok(state) => HttpResponse::Ok().json(state),
        Err(e) => internal_error(e),
    }
}

pub async fn handle_abi_call(
    registry: web::Data<ParcelRegistry>,
    body: web::Json<AbiCallRequest>,
) -> HttpResponse {
    let args = match body.decode_args() {
        Ok(args) => args,
        Err(e) => return bad_request(format!("Invalid hex argument: {e}")),
    };

    match web::block(move || dispatch(&registry, &args)).await {
        Ok(Ok(result)) => HttpResponse::Ok().json(AbiCallResponse::from(result)),
        Ok(Err(e)) => bad_request(e),
        Err(e) => internal_error(e),
    }
}

pub async fn handle_abi_group(
    registry: web::Data<ParcelRegistry>,
    body: web::Json<AbiGroupRequest>,
) -> HttpResponse {
    let mut group = Vec::with_capacity(body.calls.len());
    for (index, call) in body.calls.iter().enumerate() {
        match call.decode_args() {
            Ok(args) => group.push(args),
            Err(e) => return bad_request(format!("Invalid hex argument in call {index}: {e}")),
        }
    }

    match web::block(move || dispatch_group(&registry, &group)).await {
        Ok(Ok(results)) => HttpResponse::Ok().json(AbiGroupResponse {
            results: results.into_iter().map(AbiCallResponse::from).collect(),
        }),
        Ok(Err(e)) => bad_request(e),
        Err(e) => internal_error(e),
    }
}

fn bad_request(error: impl ToString) -> HttpResponse {
    let response = ErrorResponse::new(error);
    if log::log_enabled!(log::Level::Debug) {
        debug!("Rejecting request: {}", response.error);
    }
    HttpResponse::BadRequest().json(response)
}

fn internal_error(e: BlockingError) -> HttpResponse {
    if log::log_enabled!(log::Level::Error) {
        error!("Registry task failed: {}", e);
    }
    HttpResponse::InternalServerError().json(ErrorResponse::new(e))
}
