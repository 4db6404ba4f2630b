//! Tenant administration operations.

use std::sync::Arc;

use alumnet_domain::request::{ApiRequest, UploadForm};
use alumnet_domain::{ImportReport, Page, PageQuery, University};
use serde::Serialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::ports::{ApiTransport, ProgressFn};

/// Payload for creating a university tenant (superadmin only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUniversity {
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Email domain for auto-assignment, when used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_domain: Option<String>,
}

/// Admin and superadmin back-office operations.
pub struct AdminApi<T> {
    transport: Arc<T>,
}

impl<T: ApiTransport> AdminApi<T> {
    /// Creates the service.
    pub const fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Lists university tenants.
    ///
    /// # Errors
    ///
    /// [`ApiError::Http`] with 403 for non-superadmins.
    pub async fn universities(&self, query: &PageQuery) -> Result<Page<University>, ApiError> {
        let req = ApiRequest::get("/admin/universities").with_query(query)?;
        self.transport.execute(req).await?.json()
    }

    /// Creates a university tenant.
    ///
    /// # Errors
    ///
    /// [`ApiError::Http`] with 409 for a duplicate slug.
    pub async fn create_university(&self, payload: &NewUniversity) -> Result<University, ApiError> {
        let req = ApiRequest::post("/admin/universities").with_json(payload)?;
        self.transport.execute(req).await?.json()
    }

    /// Bulk-imports users from a CSV export.
    ///
    /// The file is uploaded as-is; the backend parses and validates rows and
    /// reports per-line errors. The optional progress callback fires per
    /// chunk sent.
    ///
    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn import_users(
        &self,
        university_id: Uuid,
        csv_file_name: &str,
        csv_bytes: Vec<u8>,
        progress: Option<ProgressFn>,
    ) -> Result<ImportReport, ApiError> {
        let form = UploadForm::new()
            .text("university_id", university_id.to_string())
            .file("file", csv_file_name, csv_bytes);
        let path = format!("/admin/universities/{university_id}/import");
        self.transport.upload(&path, form, progress).await?.json()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::atomic::{AtomicU64, Ordering};

    use alumnet_domain::request::UploadField;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::StubTransport;

    #[tokio::test]
    async fn test_import_users_uploads_csv_with_tenant_field() {
        let body = serde_json::json!({
            "created": 2,
            "updated": 0,
            "skipped": 0,
            "errors": [{"line": 3, "message": "missing email"}],
        })
        .to_string();
        let transport = Arc::new(StubTransport::replying(&[&body]));
        let api = AdminApi::new(Arc::clone(&transport));

        let university_id = Uuid::now_v7();
        let csv = b"email,full_name\ngrad@example.edu,Grad User\n".to_vec();

        let seen = Arc::new(AtomicU64::new(0));
        let seen_in_callback = Arc::clone(&seen);
        let report = api
            .import_users(
                university_id,
                "users.csv",
                csv.clone(),
                Some(Arc::new(move |sent, _total| {
                    seen_in_callback.store(sent, Ordering::SeqCst);
                })),
            )
            .await
            .unwrap();

        assert_eq!(report.created, 2);
        assert!(!report.is_clean());

        let uploads = transport.uploads();
        assert_eq!(uploads.len(), 1);
        assert_eq!(
            uploads[0].0,
            format!("/admin/universities/{university_id}/import")
        );
        let form = &uploads[0].1;
        assert!(matches!(
            &form.fields[0],
            UploadField::Text { name, value }
                if name == "university_id" && *value == university_id.to_string()
        ));
        assert!(matches!(
            &form.fields[1],
            UploadField::File { file_name, bytes, .. }
                if file_name == "users.csv" && *bytes == csv
        ));
        // Progress callback observed the full file size.
        assert_eq!(seen.load(Ordering::SeqCst), csv.len() as u64);
    }
}
