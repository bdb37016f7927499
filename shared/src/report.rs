//! Dashboard reporting: report kinds, their parameters and columns, and the
//! select → preview → export workflow.
//!
//! The workflow never talks to the network. It validates the current
//! selection and hands back a request plan (`PreviewRequest` /
//! `ExportRequest`); the caller issues the request and feeds the response
//! back in. A validation failure means no plan, and therefore no request.

use serde_json::Value;

use crate::api::endpoints;
use crate::validation::ValidationError;

/// Parameter keys, named as the backend expects them in query strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKey {
    DriveId,
    ClassName,
}

impl ParamKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamKey::DriveId => "driveId",
            ParamKey::ClassName => "className",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Drive,
    Class,
    DriveSummary,
    MissedVaccinations,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::Drive,
        ReportKind::Class,
        ReportKind::DriveSummary,
        ReportKind::MissedVaccinations,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            ReportKind::Drive => "drive-report",
            ReportKind::Class => "class-report",
            ReportKind::DriveSummary => "drive-summary",
            ReportKind::MissedVaccinations => "missed-vaccinations",
        }
    }

    pub fn parse(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.slug() == slug)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::Drive => "Drive-wise Vaccination Report",
            ReportKind::Class => "Class-wise Vaccination Report",
            ReportKind::DriveSummary => "Drive Summary Report",
            ReportKind::MissedVaccinations => "Missed Vaccinations Report",
        }
    }

    pub fn required_params(&self) -> &'static [ParamKey] {
        match self {
            ReportKind::Drive => &[ParamKey::DriveId],
            ReportKind::Class => &[ParamKey::ClassName],
            ReportKind::DriveSummary | ReportKind::MissedVaccinations => &[],
        }
    }

    pub fn columns(&self) -> &'static [Column] {
        match self {
            ReportKind::Drive => DRIVE_REPORT_COLUMNS,
            ReportKind::Class => CLASS_REPORT_COLUMNS,
            ReportKind::DriveSummary => DRIVE_SUMMARY_COLUMNS,
            ReportKind::MissedVaccinations => MISSED_VACCINATION_COLUMNS,
        }
    }
}

/// A report kind together with the parameter values it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSelection {
    Drive { drive_id: String },
    Class { class_name: String },
    DriveSummary,
    MissedVaccinations,
}

impl ReportSelection {
    /// A fresh selection of `kind` with every parameter empty.
    pub fn empty(kind: ReportKind) -> Self {
        match kind {
            ReportKind::Drive => ReportSelection::Drive {
                drive_id: String::new(),
            },
            ReportKind::Class => ReportSelection::Class {
                class_name: String::new(),
            },
            ReportKind::DriveSummary => ReportSelection::DriveSummary,
            ReportKind::MissedVaccinations => ReportSelection::MissedVaccinations,
        }
    }

    pub fn kind(&self) -> ReportKind {
        match self {
            ReportSelection::Drive { .. } => ReportKind::Drive,
            ReportSelection::Class { .. } => ReportKind::Class,
            ReportSelection::DriveSummary => ReportKind::DriveSummary,
            ReportSelection::MissedVaccinations => ReportKind::MissedVaccinations,
        }
    }

    pub fn param(&self, key: ParamKey) -> Option<&str> {
        match (self, key) {
            (ReportSelection::Drive { drive_id }, ParamKey::DriveId) => Some(drive_id.as_str()),
            (ReportSelection::Class { class_name }, ParamKey::ClassName) => Some(class_name.as_str()),
            _ => None,
        }
    }

    /// Set a parameter value. Keys the selected kind does not take are ignored.
    pub fn set_param(&mut self, key: ParamKey, value: &str) {
        match (self, key) {
            (ReportSelection::Drive { drive_id }, ParamKey::DriveId) => *drive_id = value.to_string(),
            (ReportSelection::Class { class_name }, ParamKey::ClassName) => {
                *class_name = value.to_string()
            }
            _ => {}
        }
    }

    /// First required parameter that is still blank.
    pub fn missing_param(&self) -> Option<ParamKey> {
        self.kind()
            .required_params()
            .iter()
            .copied()
            .find(|key| self.param(*key).map_or(true, |v| v.trim().is_empty()))
    }

    /// Required parameters as `(key, trimmed value)` pairs, in schema order.
    pub fn param_pairs(&self) -> Vec<(&'static str, String)> {
        self.kind()
            .required_params()
            .iter()
            .map(|key| {
                let value = self.param(*key).unwrap_or_default().trim().to_string();
                (key.as_str(), value)
            })
            .collect()
    }

    pub fn preview_path(&self) -> String {
        match self {
            ReportSelection::Drive { drive_id } => endpoints::drive_report(drive_id.trim()),
            ReportSelection::Class { class_name } => endpoints::class_report(class_name.trim()),
            ReportSelection::DriveSummary => endpoints::DRIVE_SUMMARY_REPORT.to_string(),
            ReportSelection::MissedVaccinations => {
                endpoints::MISSED_VACCINATIONS_REPORT.to_string()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Excel,
    Pdf,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Csv, ExportFormat::Excel, ExportFormat::Pdf];

    /// Wire name sent as the `format` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Excel => "EXCEL",
            ExportFormat::Pdf => "PDF",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Excel => "Excel",
            ExportFormat::Pdf => "PDF",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Excel => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Excel => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            ExportFormat::Pdf => "application/pdf",
        }
    }

    /// Case-insensitive parse of a wire name.
    pub fn parse(value: &str) -> Option<Self> {
        let upper = value.trim().to_uppercase();
        Self::ALL.into_iter().find(|f| f.as_str() == upper)
    }
}

/// File extension for a raw format name; unknown formats get `dat`.
pub fn export_extension(format: &str) -> &'static str {
    ExportFormat::parse(format).map_or("dat", |f| f.extension())
}

/// What a table cell shows: a single value, or one line per entry for
/// list-valued fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Lines(Vec<String>),
}

impl Cell {
    pub fn empty() -> Self {
        Cell::Text(String::new())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
    transform: Option<fn(&Value) -> Cell>,
}

impl Column {
    const fn plain(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            transform: None,
        }
    }

    const fn transformed(key: &'static str, label: &'static str, transform: fn(&Value) -> Cell) -> Self {
        Self {
            key,
            label,
            transform: Some(transform),
        }
    }

    pub fn render(&self, row: &Value) -> Cell {
        match row.get(self.key) {
            None | Some(Value::Null) => Cell::empty(),
            Some(value) => match self.transform {
                Some(transform) => transform(value),
                None => Cell::Text(raw_text(value)),
            },
        }
    }
}

fn raw_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// `[{driveName, vaccinationStatus, vaccinationDate?}]` → one line per drive.
fn vaccination_status_lines(value: &Value) -> Cell {
    let Some(entries) = value.as_array() else {
        return Cell::Text(raw_text(value));
    };
    let lines = entries
        .iter()
        .map(|entry| {
            let field = |key: &str| entry.get(key).map(raw_text).unwrap_or_default();
            let mut line = format!("{}: {}", field("driveName"), field("vaccinationStatus"));
            let date = field("vaccinationDate");
            if !date.is_empty() {
                line.push_str(" on ");
                line.push_str(&date);
            }
            line
        })
        .collect();
    Cell::Lines(lines)
}

const DRIVE_REPORT_COLUMNS: &[Column] = &[
    Column::plain("studentName", "Student Name"),
    Column::plain("className", "Class"),
    Column::plain("vaccineName", "Vaccine"),
    Column::plain("vaccinationDate", "Date"),
    Column::plain("vaccineStatus", "Vaccination Status"),
    Column::plain("driveStatus", "Drive Status"),
];

const CLASS_REPORT_COLUMNS: &[Column] = &[
    Column::plain("studentName", "Student Name"),
    Column::plain("studentClass", "Class"),
    Column::transformed("vaccinationStatuses", "Vaccination Statuses", vaccination_status_lines),
];

const DRIVE_SUMMARY_COLUMNS: &[Column] = &[
    Column::plain("vaccineName", "Drive"),
    Column::plain("driveDate", "Date"),
    Column::plain("driveStatus", "Drive Status"),
    Column::plain("totalDoses", "Total Doses"),
    Column::plain("usedDoses", "Used Doses"),
    Column::plain("remainingDoses", "Remaining Doses"),
];

const MISSED_VACCINATION_COLUMNS: &[Column] = &[
    Column::plain("studentName", "Student Name"),
    Column::plain("studentClass", "Class"),
    Column::plain("vaccineName", "Vaccine"),
];

/// Rows of a report response: the `content` array of a paged envelope, or
/// the body itself when it is already an array.
pub fn unwrap_rows(body: Value) -> Vec<Value> {
    match body {
        Value::Array(rows) => rows,
        Value::Object(mut map) => match map.remove("content") {
            Some(Value::Array(rows)) => rows,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Key to keep row identity stable across re-renders.
pub fn row_key(row: &Value, index: usize) -> String {
    match row.get("id") {
        Some(Value::Null) | None => index.to_string(),
        Some(id) => raw_text(id),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRequest {
    pub selection: ReportSelection,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    pub kind: ReportKind,
    pub format: ExportFormat,
    pub query: Vec<(&'static str, String)>,
    pub file_name: String,
}

impl ExportRequest {
    pub fn path_and_query(&self) -> String {
        endpoints::with_query(endpoints::REPORT_EXPORT, &self.query)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPhase {
    Idle,
    ParamsPending,
    Ready,
    Previewing,
    Exporting,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportWorkflow {
    selection: Option<ReportSelection>,
    rows: Vec<Value>,
    preview_open: bool,
    export_format: Option<ExportFormat>,
    exporting: bool,
}

impl ReportWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ReportPhase {
        match &self.selection {
            None => ReportPhase::Idle,
            Some(_) if self.exporting => ReportPhase::Exporting,
            Some(_) if self.preview_open => ReportPhase::Previewing,
            Some(selection) if selection.missing_param().is_some() => ReportPhase::ParamsPending,
            Some(_) => ReportPhase::Ready,
        }
    }

    /// Preview needs a report kind; missing parameters are reported on click.
    pub fn can_preview(&self) -> bool {
        self.phase() != ReportPhase::Idle
    }

    /// Download is offered while the preview is shown and a format is chosen.
    pub fn can_export(&self) -> bool {
        self.phase() == ReportPhase::Previewing && self.export_format.is_some()
    }

    pub fn selection(&self) -> Option<&ReportSelection> {
        self.selection.as_ref()
    }

    pub fn kind(&self) -> Option<ReportKind> {
        self.selection.as_ref().map(ReportSelection::kind)
    }

    pub fn rows(&self) -> &[Value] {
        &self.rows
    }

    pub fn export_format(&self) -> Option<ExportFormat> {
        self.export_format
    }

    pub fn is_preview_open(&self) -> bool {
        self.preview_open
    }

    pub fn is_exporting(&self) -> bool {
        self.exporting
    }

    /// Switch report kind. Always discards parameters, rows, the chosen
    /// export format and any open preview.
    pub fn select_kind(&mut self, kind: Option<ReportKind>) {
        *self = Self {
            selection: kind.map(ReportSelection::empty),
            ..Self::default()
        };
    }

    pub fn set_param(&mut self, key: ParamKey, value: &str) {
        if let Some(selection) = self.selection.as_mut() {
            selection.set_param(key, value);
        }
    }

    pub fn set_export_format(&mut self, format: Option<ExportFormat>) {
        self.export_format = format;
    }

    fn validated_selection(&self) -> Result<&ReportSelection, ValidationError> {
        let selection = self.selection.as_ref().ok_or(ValidationError::NoReportType)?;
        if let Some(key) = selection.missing_param() {
            return Err(ValidationError::MissingParameter(key.as_str()));
        }
        Ok(selection)
    }

    /// Validate and open the preview. On success the caller must GET the
    /// returned path and pass the body to [`ReportWorkflow::load_rows`].
    pub fn open_preview(&mut self) -> Result<PreviewRequest, ValidationError> {
        let selection = self.validated_selection()?.clone();
        let path = selection.preview_path();
        self.preview_open = true;
        self.rows.clear();
        Ok(PreviewRequest { selection, path })
    }

    /// Store the preview response. Responses for a selection that is no
    /// longer current are dropped; returns whether the rows were applied.
    pub fn load_rows(&mut self, request: &PreviewRequest, body: Value) -> bool {
        if self.selection.as_ref() != Some(&request.selection) {
            return false;
        }
        self.rows = unwrap_rows(body);
        true
    }

    pub fn close_preview(&mut self) {
        self.preview_open = false;
        self.exporting = false;
    }

    /// Validate and start an export. On success the caller must GET
    /// [`ExportRequest::path_and_query`] and then call
    /// [`ReportWorkflow::finish_export`].
    pub fn begin_export(&mut self) -> Result<ExportRequest, ValidationError> {
        let selection = self.validated_selection()?;
        let format = self.export_format.ok_or(ValidationError::NoExportFormat)?;
        let kind = selection.kind();

        let mut query = vec![("reportType", kind.slug().to_string())];
        query.extend(selection.param_pairs());
        query.push(("format", format.as_str().to_string()));

        let request = ExportRequest {
            kind,
            format,
            query,
            file_name: format!("{}.{}", kind.slug(), format.extension()),
        };
        self.exporting = true;
        Ok(request)
    }

    pub fn finish_export(&mut self) {
        self.exporting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_slugs_parse_back() {
        for kind in ReportKind::ALL {
            assert_eq!(ReportKind::parse(kind.slug()), Some(kind));
        }
        assert_eq!(ReportKind::parse("weekly"), None);
    }

    #[test]
    fn test_export_extension_mapping() {
        assert_eq!(export_extension("CSV"), "csv");
        assert_eq!(export_extension("EXCEL"), "xlsx");
        assert_eq!(export_extension("pdf"), "pdf");
        assert_eq!(export_extension("XML"), "dat");
        assert_eq!(export_extension(""), "dat");
    }

    #[test]
    fn test_initial_phase_is_idle() {
        let workflow = ReportWorkflow::new();
        assert_eq!(workflow.phase(), ReportPhase::Idle);
        assert_eq!(workflow.kind(), None);
    }

    #[test]
    fn test_phase_transitions_through_preview_and_export() {
        let mut workflow = ReportWorkflow::new();
        workflow.select_kind(Some(ReportKind::Drive));
        assert_eq!(workflow.phase(), ReportPhase::ParamsPending);

        workflow.set_param(ParamKey::DriveId, "7");
        assert_eq!(workflow.phase(), ReportPhase::Ready);

        let preview = workflow.open_preview().unwrap();
        assert_eq!(preview.path, "/api/reports/drive/7");
        assert_eq!(workflow.phase(), ReportPhase::Previewing);

        workflow.set_export_format(Some(ExportFormat::Excel));
        let export = workflow.begin_export().unwrap();
        assert_eq!(workflow.phase(), ReportPhase::Exporting);
        assert_eq!(export.file_name, "drive-report.xlsx");
        assert_eq!(
            export.path_and_query(),
            "/api/reports/export?reportType=drive-report&driveId=7&format=EXCEL"
        );

        workflow.finish_export();
        assert_eq!(workflow.phase(), ReportPhase::Previewing);
        workflow.close_preview();
        assert_eq!(workflow.phase(), ReportPhase::Ready);
    }

    #[test]
    fn test_kinds_without_params_are_ready_immediately() {
        let mut workflow = ReportWorkflow::new();
        workflow.select_kind(Some(ReportKind::DriveSummary));
        assert_eq!(workflow.phase(), ReportPhase::Ready);
        let preview = workflow.open_preview().unwrap();
        assert_eq!(preview.path, "/api/reports/drive-summary");
    }

    #[test]
    fn test_preview_without_drive_reports_missing_parameter() {
        let mut workflow = ReportWorkflow::new();
        workflow.select_kind(Some(ReportKind::Drive));
        let err = workflow.open_preview().unwrap_err();
        assert_eq!(err.to_string(), "Missing parameter: driveId");
        assert!(!workflow.is_preview_open());
    }

    #[test]
    fn test_blank_parameter_counts_as_missing() {
        let mut workflow = ReportWorkflow::new();
        workflow.select_kind(Some(ReportKind::Class));
        workflow.set_param(ParamKey::ClassName, "   ");
        assert_eq!(workflow.phase(), ReportPhase::ParamsPending);
        assert_eq!(
            workflow.open_preview(),
            Err(ValidationError::MissingParameter("className"))
        );
    }

    #[test]
    fn test_preview_without_kind_is_rejected() {
        let mut workflow = ReportWorkflow::new();
        assert_eq!(workflow.open_preview(), Err(ValidationError::NoReportType));
        assert_eq!(workflow.begin_export(), Err(ValidationError::NoReportType));
    }

    #[test]
    fn test_export_requires_format_and_params() {
        let mut workflow = ReportWorkflow::new();
        workflow.select_kind(Some(ReportKind::Class));
        workflow.set_export_format(Some(ExportFormat::Csv));
        assert_eq!(
            workflow.begin_export(),
            Err(ValidationError::MissingParameter("className"))
        );

        workflow.set_param(ParamKey::ClassName, "5A");
        workflow.set_export_format(None);
        assert_eq!(workflow.begin_export(), Err(ValidationError::NoExportFormat));
        assert!(!workflow.is_exporting());
    }

    #[test]
    fn test_changing_kind_resets_everything() {
        let mut workflow = ReportWorkflow::new();
        workflow.select_kind(Some(ReportKind::Drive));
        workflow.set_param(ParamKey::DriveId, "3");
        let preview = workflow.open_preview().unwrap();
        workflow.load_rows(&preview, json!([{"studentName": "Asha"}]));
        workflow.set_export_format(Some(ExportFormat::Pdf));

        workflow.select_kind(Some(ReportKind::Class));
        assert_eq!(workflow.phase(), ReportPhase::ParamsPending);
        assert!(workflow.rows().is_empty());
        assert_eq!(workflow.export_format(), None);
        assert!(!workflow.is_preview_open());

        workflow.select_kind(None);
        assert_eq!(workflow.phase(), ReportPhase::Idle);
    }

    #[test]
    fn test_stale_preview_response_is_dropped() {
        let mut workflow = ReportWorkflow::new();
        workflow.select_kind(Some(ReportKind::Drive));
        workflow.set_param(ParamKey::DriveId, "3");
        let stale = workflow.open_preview().unwrap();

        workflow.select_kind(Some(ReportKind::MissedVaccinations));
        assert!(!workflow.load_rows(&stale, json!([{"studentName": "Asha"}])));
        assert!(workflow.rows().is_empty());
    }

    #[test]
    fn test_param_for_other_kind_is_ignored() {
        let mut selection = ReportSelection::empty(ReportKind::Drive);
        selection.set_param(ParamKey::ClassName, "5A");
        assert_eq!(selection.param(ParamKey::ClassName), None);
        assert_eq!(selection.missing_param(), Some(ParamKey::DriveId));
    }

    #[test]
    fn test_class_report_path_is_encoded() {
        let mut selection = ReportSelection::empty(ReportKind::Class);
        selection.set_param(ParamKey::ClassName, " 5 A/B ");
        assert_eq!(selection.preview_path(), "/api/reports/class/5%20A%2FB");
    }

    #[test]
    fn test_unwrap_rows() {
        assert_eq!(unwrap_rows(json!([{"a": 1}])).len(), 1);
        assert_eq!(unwrap_rows(json!({"content": [{"a": 1}, {"a": 2}], "totalPages": 1})).len(), 2);
        assert!(unwrap_rows(json!({"content": null})).is_empty());
        assert!(unwrap_rows(json!("nope")).is_empty());
    }

    #[test]
    fn test_plain_cells() {
        let row = json!({"studentName": "Asha", "totalDoses": 40, "driveStatus": null});
        let columns = ReportKind::DriveSummary.columns();
        let total = columns.iter().find(|c| c.key == "totalDoses").unwrap();
        let status = columns.iter().find(|c| c.key == "driveStatus").unwrap();
        let drive = columns.iter().find(|c| c.key == "vaccineName").unwrap();
        assert_eq!(total.render(&row), Cell::Text("40".to_string()));
        assert_eq!(status.render(&row), Cell::empty());
        assert_eq!(drive.render(&row), Cell::empty());
    }

    #[test]
    fn test_class_report_status_lines() {
        let row = json!({
            "studentName": "Asha",
            "studentClass": "5A",
            "vaccinationStatuses": [
                {"driveName": "MMR", "vaccinationStatus": "VACCINATED", "vaccinationDate": "2026-10-01"},
                {"driveName": "Polio", "vaccinationStatus": "PENDING", "vaccinationDate": null}
            ]
        });
        let column = &ReportKind::Class.columns()[2];
        assert_eq!(column.label, "Vaccination Statuses");
        assert_eq!(
            column.render(&row),
            Cell::Lines(vec![
                "MMR: VACCINATED on 2026-10-01".to_string(),
                "Polio: PENDING".to_string(),
            ])
        );
    }

    #[test]
    fn test_column_labels_follow_kind() {
        let labels: Vec<_> = ReportKind::MissedVaccinations
            .columns()
            .iter()
            .map(|c| c.label)
            .collect();
        assert_eq!(labels, vec!["Student Name", "Class", "Vaccine"]);
        assert_eq!(ReportKind::Drive.columns().len(), 6);
    }

    #[test]
    fn test_row_key_prefers_id() {
        assert_eq!(row_key(&json!({"id": 12}), 0), "12");
        assert_eq!(row_key(&json!({"name": "x"}), 3), "3");
    }

    #[test]
    fn test_button_availability_follows_phase() {
        let mut workflow = ReportWorkflow::new();
        assert!(!workflow.can_preview());

        workflow.select_kind(Some(ReportKind::Drive));
        assert!(workflow.can_preview());
        assert!(!workflow.can_export());

        workflow.set_param(ParamKey::DriveId, "7");
        workflow.open_preview().unwrap();
        assert!(!workflow.can_export());

        workflow.set_export_format(Some(ExportFormat::Pdf));
        assert!(workflow.can_export());

        workflow.begin_export().unwrap();
        assert!(!workflow.can_export());
    }
}
