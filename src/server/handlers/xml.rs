//! Markup printing handler.

use axum::{body::Bytes, extract::State, http::StatusCode};
use std::sync::Arc;

use crate::{
    Error,
    device::{self, StarDevice},
    ir::Program,
    markup,
    printer::PrinterConfig,
    transport::SerialTransport,
};

use super::super::state::AppState;

/// Handle POST /xml - interpret the posted document on the printer.
///
/// The document is parsed and compiled before the printer is touched, so a
/// malformed document or attribute never leaves the printer half-styled.
pub async fn print(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<&'static str, (StatusCode, String)> {
    let program = markup::compile_bytes(&body).map_err(|e| {
        tracing::warn!(error = %e, "rejected markup document");
        (status_for(&e), e.to_string())
    })?;
    tracing::info!(ops = program.len(), bytes = body.len(), "printing document");

    // The guard moves into the blocking job, so a dropped request cannot
    // free the printer while its bytes are still being written.
    let guard = state.print_lock.clone().lock_owned().await;
    let printer = state.config.printer.clone();
    let print_result = tokio::task::spawn_blocking(move || {
        let _guard = guard;
        print_to_device(&printer, program)
    })
    .await;

    match print_result {
        Ok(Ok(())) => Ok("Ok"),
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "print failed");
            Err((status_for(&e), format!("Print failed: {}", e)))
        }
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Task error: {}", e),
        )),
    }
}

/// Send a compiled program to the physical device.
fn print_to_device(printer: &PrinterConfig, program: Program) -> Result<(), Error> {
    let transport = SerialTransport::open_with(printer)?;
    let mut star = StarDevice::new(transport);
    device::replay(program, &mut star)
}

fn status_for(error: &Error) -> StatusCode {
    match error {
        Error::Parse(_) | Error::TooDeep { .. } | Error::Encoding(_) => StatusCode::BAD_REQUEST,
        Error::InvalidAttribute { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        Error::Device(_) => StatusCode::SERVICE_UNAVAILABLE,
        Error::Cancelled | Error::Config(_) | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
