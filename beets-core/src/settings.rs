//! Settings page: installation health, beets info, plugins, config editor
//! and database maintenance

use beets_common::{ActionPhase, RequestTracker, Ticket};
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::error::ApiError;
use crate::models::{ConfigHealth, MaintenanceOutcome};
use crate::notice::Notice;

/// One remotely loaded section of the page
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Loadable<T> {
    #[default]
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Loadable<T> {
    fn from_result(section: &str, result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Loadable::Loaded(value),
            Err(e) => {
                error!("Error loading {}: {}", section, e);
                Loadable::Failed(format!("Failed to load {}: {}", section, e.summary()))
            }
        }
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Loadable::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// Destructive database operations, each confirmed before running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaintenanceAction {
    /// `POST /api/beets/reset`
    Reset,
    /// `POST /api/beets/initialize`
    Initialize,
}

impl MaintenanceAction {
    pub fn title(self) -> &'static str {
        match self {
            MaintenanceAction::Reset => "Reset Database",
            MaintenanceAction::Initialize => "Initialize Database",
        }
    }

    pub fn confirmation(self) -> &'static str {
        match self {
            MaintenanceAction::Reset => {
                "This deletes the beets database and every item in it. A backup is kept next to it. Continue?"
            }
            MaintenanceAction::Initialize => {
                "This creates a new, empty beets database at the configured path. Continue?"
            }
        }
    }

    fn default_success(self) -> &'static str {
        match self {
            MaintenanceAction::Reset => "Database reset successfully",
            MaintenanceAction::Initialize => "Database initialized successfully",
        }
    }

    fn failure_prefix(self) -> &'static str {
        match self {
            MaintenanceAction::Reset => "Failed to reset database",
            MaintenanceAction::Initialize => "Failed to initialize database",
        }
    }
}

/// Tickets for one load of the page's sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsLoad {
    pub ticket: Ticket,
    pub health: HealthLoad,
}

/// Ticket for the health section, which also reloads on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthLoad {
    pub ticket: Ticket,
}

/// A validated configuration to `POST`, passed back to `apply_save`
#[derive(Debug, Clone, PartialEq)]
pub struct SaveRequest {
    pub ticket: Ticket,
    pub body: Value,
}

/// Controller behind the settings page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsPanel {
    health: Loadable<ConfigHealth>,
    info: Loadable<Value>,
    plugins: Loadable<Value>,
    config: Loadable<Value>,
    /// Text in the config editor
    draft: String,
    save: ActionPhase,
    save_tracker: RequestTracker,
    confirming: Option<MaintenanceAction>,
    maintenance: ActionPhase,
    tracker: RequestTracker,
    health_tracker: RequestTracker,
}

impl SettingsPanel {
    /// Start (re)loading every section.
    ///
    /// A save still in flight is superseded: the reload shows whatever the
    /// server holds, so its response is dropped.
    pub fn load(&mut self) -> SettingsLoad {
        self.save_tracker.invalidate();
        self.save = ActionPhase::Idle;
        self.health = Loadable::Loading;
        self.info = Loadable::Loading;
        self.plugins = Loadable::Loading;
        self.config = Loadable::Loading;
        SettingsLoad {
            ticket: self.tracker.issue(),
            health: self.reload_health(),
        }
    }

    /// Reload only the health section, e.g. after a maintenance action.
    pub fn reload_health(&mut self) -> HealthLoad {
        self.health = Loadable::Loading;
        HealthLoad {
            ticket: self.health_tracker.issue(),
        }
    }

    pub fn apply_health(&mut self, load: HealthLoad, result: Result<ConfigHealth, ApiError>) {
        if self.health_tracker.is_current(load.ticket) {
            self.health = Loadable::from_result("configuration status", result);
        }
    }

    pub fn apply_info(&mut self, load: SettingsLoad, result: Result<Value, ApiError>) {
        if self.tracker.is_current(load.ticket) {
            self.info = Loadable::from_result("beets info", result);
        }
    }

    pub fn apply_plugins(&mut self, load: SettingsLoad, result: Result<Value, ApiError>) {
        if self.tracker.is_current(load.ticket) {
            self.plugins = Loadable::from_result("plugins", result);
        }
    }

    pub fn apply_config(&mut self, load: SettingsLoad, result: Result<Value, ApiError>) {
        if !self.tracker.is_current(load.ticket) {
            return;
        }
        if let Ok(config) = &result {
            self.draft = serde_json::to_string_pretty(config).unwrap_or_default();
        }
        self.config = Loadable::from_result("configuration", result);
    }

    pub fn health(&self) -> &Loadable<ConfigHealth> {
        &self.health
    }

    pub fn info(&self) -> &Loadable<Value> {
        &self.info
    }

    pub fn plugins(&self) -> &Loadable<Value> {
        &self.plugins
    }

    pub fn config(&self) -> &Loadable<Value> {
        &self.config
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn edit_draft(&mut self, text: String) {
        self.draft = text;
    }

    pub fn is_saving(&self) -> bool {
        self.save.is_pending()
    }

    /// Validate the editor text as a JSON object and return the body to
    /// `POST`. Invalid text, or a save already in flight, is an error notice
    /// and nothing is sent.
    pub fn save_config(&mut self) -> Result<SaveRequest, Notice> {
        if self.is_saving() {
            return Err(Notice::error("Configuration is already being saved"));
        }
        let value: Value = serde_json::from_str(&self.draft)
            .map_err(|e| Notice::error(format!("Invalid configuration: {}", e)))?;
        if !value.is_object() {
            return Err(Notice::error("Configuration must be a JSON object"));
        }
        self.save = ActionPhase::Pending;
        Ok(SaveRequest {
            ticket: self.save_tracker.issue(),
            body: value,
        })
    }

    /// `None` when the page was reloaded while the save was in flight.
    pub fn apply_save(
        &mut self,
        request: SaveRequest,
        result: Result<Value, ApiError>,
    ) -> Option<Notice> {
        if !self.save_tracker.is_current(request.ticket) {
            debug!("Dropping superseded configuration save");
            return None;
        }
        let saved = request.body;
        let notice = match result {
            Ok(reply) if reply.get("success").and_then(Value::as_bool) == Some(false) => {
                let message = reply_message(&reply)
                    .unwrap_or_else(|| "Failed to save configuration".to_string());
                warn!("Configuration rejected: {}", message);
                self.save = ActionPhase::Failed(message.clone());
                Notice::error(message)
            }
            Ok(_) => {
                info!("Configuration saved");
                self.config = Loadable::Loaded(saved);
                self.save = ActionPhase::Succeeded;
                Notice::success("Configuration saved")
            }
            Err(e) => {
                error!("Error saving configuration: {}", e);
                let message = format!("Failed to save configuration: {}", e.summary());
                self.save = ActionPhase::Failed(message.clone());
                Notice::error(message)
            }
        };
        Some(notice)
    }

    /// Action awaiting confirmation, if the dialog is open
    pub fn confirming(&self) -> Option<MaintenanceAction> {
        self.confirming
    }

    pub fn is_running_maintenance(&self) -> bool {
        self.maintenance.is_pending()
    }

    /// Open the confirmation dialog for `action`.
    pub fn request_maintenance(&mut self, action: MaintenanceAction) {
        if !self.is_running_maintenance() {
            self.confirming = Some(action);
        }
    }

    pub fn cancel_maintenance(&mut self) {
        self.confirming = None;
    }

    /// Confirm the open dialog, returning the action to perform.
    pub fn confirm_maintenance(&mut self) -> Option<MaintenanceAction> {
        let action = self.confirming.take()?;
        self.maintenance = ActionPhase::Pending;
        Some(action)
    }

    pub fn apply_maintenance(
        &mut self,
        action: MaintenanceAction,
        result: Result<MaintenanceOutcome, ApiError>,
    ) -> Notice {
        match result {
            Ok(outcome) if outcome.success => {
                info!("{} done", action.title());
                self.maintenance = ActionPhase::Succeeded;
                Notice::success(
                    outcome
                        .message
                        .filter(|m| !m.is_empty())
                        .unwrap_or_else(|| action.default_success().to_string()),
                )
            }
            Ok(outcome) => {
                let message = outcome
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| action.failure_prefix().to_string());
                warn!("{} refused: {}", action.title(), message);
                self.maintenance = ActionPhase::Failed(message.clone());
                Notice::error(message)
            }
            Err(e) => {
                error!("{}: {}", action.failure_prefix(), e);
                let message = format!("{}: {}", action.failure_prefix(), e.summary());
                self.maintenance = ActionPhase::Failed(message.clone());
                Notice::error(message)
            }
        }
    }

    /// Render description of the health section; `None` until loaded.
    pub fn health_report(&self) -> Option<HealthReport> {
        self.health.loaded().map(HealthReport::from)
    }
}

fn reply_message(reply: &Value) -> Option<String> {
    reply
        .get("message")
        .or_else(|| reply.get("error"))
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthTone {
    Success,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthLine {
    pub ok: bool,
    pub tone: HealthTone,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthReport {
    pub tone: HealthTone,
    pub headline: &'static str,
    pub lines: Vec<HealthLine>,
}

impl From<&ConfigHealth> for HealthReport {
    fn from(health: &ConfigHealth) -> Self {
        let (tone, headline) = if !health.beets_installed {
            (
                HealthTone::Danger,
                "Beets is not installed or not in PATH. Please install beets first.",
            )
        } else if !health.config_exists || !health.db_exists {
            (
                HealthTone::Warning,
                "Beets is installed but not fully configured. Please check the configuration.",
            )
        } else {
            (
                HealthTone::Success,
                "Beets is installed and configured correctly.",
            )
        };

        let path = |p: &Option<String>| p.clone().unwrap_or_else(|| "-".to_string());
        let found = |ok: bool| if ok { "Found" } else { "Not Found" };
        let missing_tone = |ok: bool| if ok { HealthTone::Success } else { HealthTone::Warning };

        let lines = vec![
            HealthLine {
                ok: health.beets_installed,
                tone: if health.beets_installed {
                    HealthTone::Success
                } else {
                    HealthTone::Danger
                },
                text: format!(
                    "Beets Installation: {}",
                    if health.beets_installed {
                        "Installed"
                    } else {
                        "Not Installed"
                    }
                ),
            },
            HealthLine {
                ok: health.config_exists,
                tone: missing_tone(health.config_exists),
                text: format!(
                    "Configuration File: {} ({})",
                    found(health.config_exists),
                    path(&health.config_path)
                ),
            },
            HealthLine {
                ok: health.db_exists,
                tone: missing_tone(health.db_exists),
                text: format!(
                    "Database File: {} ({})",
                    found(health.db_exists),
                    path(&health.db_path)
                ),
            },
        ];

        Self {
            tone,
            headline,
            lines,
        }
    }
}

/// Flatten a JSON document into label/value rows for display.
///
/// Nested objects become dotted keys, arrays are joined with `, `, and a
/// bare array at the top level lists one entry per element.
pub fn entries(value: &Value) -> Vec<(String, String)> {
    let mut rows = Vec::new();
    match value {
        Value::Object(_) => flatten_into(&mut rows, "", value),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                rows.push(((i + 1).to_string(), scalar_text(item)));
            }
        }
        other => rows.push((String::new(), scalar_text(other))),
    }
    rows
}

fn flatten_into(rows: &mut Vec<(String, String)>, prefix: &str, value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let key = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_into(rows, &key, child);
            }
        }
        other => rows.push((prefix.to_string(), scalar_text(other))),
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(scalar_text)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn healthy() -> ConfigHealth {
        ConfigHealth {
            beets_installed: true,
            config_exists: true,
            db_exists: true,
            config_path: Some("/home/u/.config/beets/config.yaml".into()),
            db_path: Some("/home/u/.config/beets/library.db".into()),
        }
    }

    #[test]
    fn health_report_tones() {
        let report = HealthReport::from(&healthy());
        assert_eq!(report.tone, HealthTone::Success);
        assert!(report.lines.iter().all(|l| l.ok));
        assert_eq!(
            report.lines[1].text,
            "Configuration File: Found (/home/u/.config/beets/config.yaml)"
        );

        let no_db = ConfigHealth {
            db_exists: false,
            ..healthy()
        };
        let report = HealthReport::from(&no_db);
        assert_eq!(report.tone, HealthTone::Warning);
        assert_eq!(report.lines[2].tone, HealthTone::Warning);
        assert!(report.lines[2].text.starts_with("Database File: Not Found"));

        let missing = ConfigHealth::default();
        let report = HealthReport::from(&missing);
        assert_eq!(report.tone, HealthTone::Danger);
        assert_eq!(report.lines[0].text, "Beets Installation: Not Installed");
    }

    #[test]
    fn sections_load_independently() {
        let mut panel = SettingsPanel::default();
        let load = panel.load();
        panel.apply_info(
            load,
            Err(ApiError::Status {
                status: 500,
                message: Some("beet not found".into()),
            }),
        );
        panel.apply_health(load.health, Ok(healthy()));

        assert_eq!(
            panel.info(),
            &Loadable::Failed("Failed to load beets info: beet not found".into())
        );
        assert!(panel.health_report().is_some());
        assert_eq!(panel.plugins(), &Loadable::Loading);
    }

    #[test]
    fn config_load_fills_editor() {
        let mut panel = SettingsPanel::default();
        let load = panel.load();
        panel.apply_config(load, Ok(json!({"directory": "~/Music"})));
        assert_eq!(panel.draft(), "{\n  \"directory\": \"~/Music\"\n}");
    }

    #[test]
    fn invalid_config_is_not_sent() {
        let mut panel = SettingsPanel::default();
        panel.edit_draft("{ not json".into());
        let notice = panel.save_config().unwrap_err();
        assert!(notice.message.starts_with("Invalid configuration: "));
        assert!(!panel.is_saving());

        panel.edit_draft("[1, 2]".into());
        assert_eq!(
            panel.save_config().unwrap_err().message,
            "Configuration must be a JSON object"
        );
    }

    #[test]
    fn save_config_round() {
        let mut panel = SettingsPanel::default();
        panel.edit_draft(r#"{"library": "/music/library.db"}"#.into());
        let request = panel.save_config().unwrap();
        let body = request.body.clone();
        assert!(panel.is_saving());

        let notice = panel.apply_save(request, Ok(json!({"success": true})));
        assert_eq!(notice, Some(Notice::success("Configuration saved")));
        assert_eq!(panel.config().loaded(), Some(&body));

        let request = panel.save_config().unwrap();
        let notice = panel.apply_save(
            request,
            Ok(json!({"success": false, "message": "Permission denied"})),
        );
        assert_eq!(notice, Some(Notice::error("Permission denied")));
    }

    #[test]
    fn second_save_is_refused_while_saving() {
        let mut panel = SettingsPanel::default();
        panel.edit_draft("{}".into());
        panel.save_config().unwrap();
        assert_eq!(
            panel.save_config().unwrap_err().message,
            "Configuration is already being saved"
        );
    }

    #[test]
    fn reload_supersedes_slow_save() {
        let mut panel = SettingsPanel::default();
        panel.edit_draft(r#"{"directory": "/old"}"#.into());
        let save = panel.save_config().unwrap();

        let load = panel.load();
        assert!(!panel.is_saving());
        panel.apply_config(load, Ok(json!({"directory": "/new"})));

        assert_eq!(panel.apply_save(save, Ok(json!({"success": true}))), None);
        assert_eq!(panel.config().loaded(), Some(&json!({"directory": "/new"})));
        assert_eq!(panel.draft(), "{\n  \"directory\": \"/new\"\n}");
    }

    #[test]
    fn maintenance_requires_confirmation() {
        let mut panel = SettingsPanel::default();
        assert_eq!(panel.confirm_maintenance(), None);

        panel.request_maintenance(MaintenanceAction::Reset);
        assert_eq!(panel.confirming(), Some(MaintenanceAction::Reset));
        panel.cancel_maintenance();
        assert_eq!(panel.confirm_maintenance(), None);

        panel.request_maintenance(MaintenanceAction::Initialize);
        let action = panel.confirm_maintenance().unwrap();
        assert!(panel.is_running_maintenance());
        assert_eq!(panel.confirming(), None);

        let notice = panel.apply_maintenance(
            action,
            Ok(MaintenanceOutcome {
                success: true,
                message: None,
            }),
        );
        assert_eq!(notice, Notice::success("Database initialized successfully"));
        assert!(!panel.is_running_maintenance());
    }

    #[test]
    fn maintenance_failures() {
        let mut panel = SettingsPanel::default();
        panel.request_maintenance(MaintenanceAction::Reset);
        let action = panel.confirm_maintenance().unwrap();
        let notice = panel.apply_maintenance(
            action,
            Ok(MaintenanceOutcome {
                success: false,
                message: Some("Database is in use".into()),
            }),
        );
        assert_eq!(notice, Notice::error("Database is in use"));

        panel.request_maintenance(MaintenanceAction::Reset);
        let action = panel.confirm_maintenance().unwrap();
        let notice = panel.apply_maintenance(action, Err(ApiError::Decode("eof".into())));
        assert_eq!(
            notice.message,
            "Failed to reset database: unexpected response: eof"
        );
    }

    #[test]
    fn entries_flatten_nested_values() {
        let rows = entries(&json!({
            "version": "1.6.0",
            "paths": {"default": "$albumartist/$album/$title"},
            "plugins": ["fetchart", "lyrics"],
            "threaded": true,
            "art": null
        }));
        assert!(rows.contains(&("version".into(), "1.6.0".into())));
        assert!(rows.contains(&("paths.default".into(), "$albumartist/$album/$title".into())));
        assert!(rows.contains(&("plugins".into(), "fetchart, lyrics".into())));
        assert!(rows.contains(&("threaded".into(), "true".into())));
        assert!(rows.contains(&("art".into(), "-".into())));
    }

    #[test]
    fn entries_of_top_level_array() {
        let rows = entries(&json!(["fetchart", "embedart"]));
        assert_eq!(
            rows,
            vec![
                ("1".to_string(), "fetchart".to_string()),
                ("2".to_string(), "embedart".to_string())
            ]
        );
    }
}
