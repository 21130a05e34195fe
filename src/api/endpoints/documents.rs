//! Document upload endpoints: schema validation and patient name
//! extraction over multipart JSON uploads.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::MedicalDocument;

/// Minimum upload size in bytes. Anything smaller cannot be a real
/// token dump and is rejected before parsing.
const MIN_UPLOAD_BYTES: usize = 100;

#[derive(Serialize)]
pub struct ValidateResponse {
    pub success: bool,
    pub document_id: Option<String>,
}

#[derive(Serialize)]
pub struct ExtractResponse {
    pub success: bool,
    pub document_id: Option<String>,
    pub patient_name: Option<PatientNameBody>,
}

/// The name pair exposed to clients; token indices stay internal.
#[derive(Serialize)]
pub struct PatientNameBody {
    pub first_name: String,
    pub family_name: String,
}

/// `POST /validate` — parse and schema-check an uploaded document.
pub async fn validate(mut multipart: Multipart) -> Result<Json<ValidateResponse>, ApiError> {
    let document = read_document(&mut multipart).await?;

    Ok(Json(ValidateResponse {
        success: true,
        document_id: document.document_id,
    }))
}

/// `POST /extract-patient` — run the name-detection engine on an
/// uploaded document.
pub async fn extract_patient(
    State(ctx): State<ApiContext>,
    mut multipart: Multipart,
) -> Result<Json<ExtractResponse>, ApiError> {
    let document = read_document(&mut multipart).await?;

    let found = ctx.extractor.extract_patient_name(&document)?;

    Ok(Json(ExtractResponse {
        success: true,
        document_id: document.document_id,
        patient_name: found.map(|name| PatientNameBody {
            first_name: name.first_name().to_string(),
            family_name: name.family_name().to_string(),
        }),
    }))
}

/// Read the uploaded `file` part: enforce the declared content type and
/// minimum size, then parse and schema-check the JSON body.
async fn read_document(multipart: &mut Multipart) -> Result<MedicalDocument, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        if field.content_type() != Some("application/json") {
            return Err(ApiError::BadRequest("Only JSON files accepted".into()));
        }

        let content = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {e}")))?;

        if content.len() < MIN_UPLOAD_BYTES {
            return Err(ApiError::BadRequest(format!(
                "JSON file must contain at least {MIN_UPLOAD_BYTES} characters"
            )));
        }

        return serde_json::from_slice(&content)
            .map_err(|e| ApiError::BadRequest(format!("Invalid JSON file: {e}")));
    }

    Err(ApiError::BadRequest("Missing 'file' upload field".into()))
}
