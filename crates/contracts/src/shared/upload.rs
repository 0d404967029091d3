use serde::{Deserialize, Serialize};

/// Wire response of the external upload service.
///
/// One stored-file URL per uploaded file, order preserved. The service
/// itself is provided by the deployment; only its contract lives here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub urls: Vec<String>,
}
