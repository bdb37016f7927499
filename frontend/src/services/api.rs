use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{
    endpoints, ApiError, AppConfig, DashboardStats, DrivePayload, DriveStatus, ExportRequest,
    LoginRequest, LoginResponse, PreviewRequest, Session, Student, StudentPayload, StudentSearch,
    VaccinateRequest, VaccinationDrive,
};
use web_sys::{File, FormData};

/// API client for the vaccination backend.
///
/// Carries the session explicitly: every authenticated call adds the bearer
/// header from the session it was built with. Mutations never re-fetch;
/// callers refresh what they display once a mutation is confirmed.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(config: &AppConfig, session: Session) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.authorization_header() {
            Some(header) => builder.header("Authorization", &header),
            None => builder,
        }
    }

    /// Turn non-2xx responses into `ApiError::Status`, keeping the body text.
    async fn check(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status { status, body })
    }

    async fn send(request: Result<Request, gloo::net::Error>) -> Result<Response, ApiError> {
        let request = request.map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(response).await
    }

    async fn send_builder(builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check(response).await
    }

    async fn json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn text(response: Response) -> Result<String, ApiError> {
        response
            .text()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Self::send_builder(self.authorized(Request::get(&self.url(path)))).await?;
        Self::json(response).await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = Self::send(Request::post(&self.url(endpoints::LOGIN)).json(request)).await?;
        Self::json(response).await
    }

    pub async fn get_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get_json(endpoints::STATS).await
    }

    pub async fn get_drives(&self) -> Result<Vec<VaccinationDrive>, ApiError> {
        self.get_json(endpoints::DRIVES).await
    }

    pub async fn get_drive(&self, id: &str) -> Result<VaccinationDrive, ApiError> {
        self.get_json(&endpoints::drive(id)).await
    }

    /// Returns the backend's confirmation text.
    pub async fn create_drive(&self, payload: &DrivePayload) -> Result<String, ApiError> {
        let builder = self.authorized(Request::post(&self.url(endpoints::CREATE_DRIVE)));
        let response = Self::send(builder.json(payload)).await?;
        Self::text(response).await
    }

    pub async fn update_drive(&self, id: &str, payload: &DrivePayload) -> Result<String, ApiError> {
        let builder = self.authorized(Request::put(&self.url(&endpoints::drive(id))));
        let response = Self::send(builder.json(payload)).await?;
        Self::text(response).await
    }

    pub async fn update_drive_status(&self, id: &str, status: DriveStatus) -> Result<(), ApiError> {
        let builder = self
            .authorized(Request::put(&self.url(&endpoints::drive_status(id))))
            .query([("status", status.as_str())]);
        Self::send_builder(builder).await?;
        Ok(())
    }

    /// Returns the backend's confirmation text.
    pub async fn vaccinate(
        &self,
        student_id: &str,
        drive_id: &str,
        request: &VaccinateRequest,
    ) -> Result<String, ApiError> {
        let path = endpoints::vaccinate(student_id, drive_id);
        let builder = self.authorized(Request::post(&self.url(&path)));
        let response = Self::send(builder.json(request)).await?;
        Self::text(response).await
    }

    pub async fn get_students(&self) -> Result<Vec<Student>, ApiError> {
        self.get_json(endpoints::STUDENTS).await
    }

    /// Public endpoint, sent without the bearer header.
    pub async fn search_students(&self, search: &StudentSearch) -> Result<Vec<Student>, ApiError> {
        let response = Self::send_builder(Request::get(&self.url(&search.path_and_query()))).await?;
        Self::json(response).await
    }

    pub async fn get_student(&self, id: &str) -> Result<Student, ApiError> {
        self.get_json(&endpoints::student(id)).await
    }

    pub async fn create_student(&self, payload: &StudentPayload) -> Result<(), ApiError> {
        let builder = self.authorized(Request::post(&self.url(endpoints::STUDENTS)));
        Self::send(builder.json(payload)).await?;
        Ok(())
    }

    pub async fn update_student(&self, id: &str, payload: &StudentPayload) -> Result<(), ApiError> {
        let builder = self.authorized(Request::put(&self.url(&endpoints::student(id))));
        Self::send(builder.json(payload)).await?;
        Ok(())
    }

    pub async fn delete_student(&self, id: &str) -> Result<(), ApiError> {
        let builder = self.authorized(Request::delete(&self.url(&endpoints::student(id))));
        Self::send_builder(builder).await?;
        Ok(())
    }

    /// Multipart upload of a student CSV. The browser sets the boundary header.
    pub async fn bulk_upload(&self, file: &File) -> Result<String, ApiError> {
        let form = FormData::new().map_err(|e| ApiError::Encode(format!("{:?}", e)))?;
        form.append_with_blob_and_filename(endpoints::BULK_UPLOAD_FIELD, file, &file.name())
            .map_err(|e| ApiError::Encode(format!("{:?}", e)))?;
        let builder = self.authorized(Request::post(&self.url(endpoints::BULK_UPLOAD)));
        let response = Self::send(builder.body(form)).await?;
        Self::text(response).await
    }

    /// Raw report rows; shape depends on the report kind.
    pub async fn fetch_report(&self, request: &PreviewRequest) -> Result<Value, ApiError> {
        self.get_json(&request.path).await
    }

    pub async fn export_report(&self, request: &ExportRequest) -> Result<Vec<u8>, ApiError> {
        let builder = self.authorized(Request::get(&self.url(&request.path_and_query())));
        let response = Self::send_builder(builder).await?;
        response
            .binary()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}
