//! Types and logic shared by the vaccination portal front end.
//!
//! Everything here is target independent so it can be unit tested natively;
//! the wasm front end only adds the browser and HTTP plumbing.

pub mod api;
pub mod config;
pub mod models;
pub mod report;
pub mod routes;
pub mod search;
pub mod student_id;
pub mod validation;

pub use api::{add_student_error, endpoints, prefixed_error, ApiError, GENERIC_FAILURE};
pub use config::{AppConfig, ConfigError, LogLevel};
pub use models::*;
pub use report::{
    export_extension, Cell, Column, ExportFormat, ExportRequest, ParamKey, PreviewRequest,
    ReportKind, ReportPhase, ReportSelection, ReportWorkflow,
};
pub use routes::{guard, resolve, Access, Role, Route, Session};
pub use search::StudentSearch;
pub use student_id::next_student_id;
pub use validation::{DriveForm, StudentForm, ValidationError};
