use pkg_types::{QuotaSettings, TenantId};
use tracing::{debug, info, warn};

use crate::client::QuotaSettingsStore;
use crate::error::{SaveError, SubmitError, ValidationError};
use crate::field::{QuotaField, QuotaFields, QuotaResource};

/// Working state of the personal-workspace override form.
/// `None` means the operator left the field blank.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QuotaSettingsDraft {
    pub enabled: bool,
    pub cpu: Option<f64>,
    pub memory: Option<f64>,
    pub instances: Option<f64>,
}

impl QuotaSettingsDraft {
    pub fn value(&self, resource: QuotaResource) -> Option<f64> {
        match resource {
            QuotaResource::Cpu => self.cpu,
            QuotaResource::Memory => self.memory,
            QuotaResource::Instances => self.instances,
        }
    }

    fn value_mut(&mut self, resource: QuotaResource) -> &mut Option<f64> {
        match resource {
            QuotaResource::Cpu => &mut self.cpu,
            QuotaResource::Memory => &mut self.memory,
            QuotaResource::Instances => &mut self.instances,
        }
    }

    /// Check every field against its default minimum under the current
    /// `enabled` flag. Returns all failures, in field order.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let errors: Vec<ValidationError> = QuotaResource::ALL
            .iter()
            .filter_map(|&r| {
                crate::field::check_minimum(r, r.default_minimum(), self.enabled, self.value(r))
                    .err()
            })
            .collect();
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl From<QuotaSettings> for QuotaSettingsDraft {
    fn from(s: QuotaSettings) -> Self {
        Self {
            enabled: s.enabled,
            cpu: s.cpu,
            memory: s.memory,
            instances: s.instances,
        }
    }
}

impl From<QuotaSettingsDraft> for QuotaSettings {
    fn from(d: QuotaSettingsDraft) -> Self {
        Self {
            enabled: d.enabled,
            cpu: d.cpu,
            memory: d.memory,
            instances: d.instances,
        }
    }
}

/// Which part of the form is live. Only the toggle moves between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Override disabled: numeric fields are kept but not constrained.
    Collapsed,
    /// Override enabled: every numeric field obeys its minimum.
    Expanded,
}

/// Progress of the last hand-off to the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved,
    /// Recoverable; the draft is kept so the operator can retry.
    Failed(String),
}

/// Personal-workspace quota override form.
#[derive(Debug, Clone, PartialEq)]
pub struct QuotaSettingsForm {
    draft: QuotaSettingsDraft,
    fields: QuotaFields,
    status: SaveStatus,
}

impl Default for QuotaSettingsForm {
    fn default() -> Self {
        Self::new()
    }
}

impl QuotaSettingsForm {
    pub fn new() -> Self {
        Self {
            draft: QuotaSettingsDraft::default(),
            fields: QuotaFields::new(),
            status: SaveStatus::Idle,
        }
    }

    /// Form mounted for a tenant, pre-filled with its stored override if any.
    pub fn from_settings(settings: Option<QuotaSettings>) -> Self {
        Self {
            draft: settings.map(QuotaSettingsDraft::from).unwrap_or_default(),
            ..Self::new()
        }
    }

    /// Use a different minimum for one field.
    pub fn with_minimum(mut self, resource: QuotaResource, minimum: f64) -> Self {
        self.fields.get_mut(resource).set_minimum(minimum);
        self
    }

    pub fn draft(&self) -> &QuotaSettingsDraft {
        &self.draft
    }

    pub fn mode(&self) -> FormMode {
        if self.draft.enabled {
            FormMode::Expanded
        } else {
            FormMode::Collapsed
        }
    }

    pub fn field(&self, resource: QuotaResource) -> &QuotaField {
        self.fields.get(resource)
    }

    pub fn error(&self, resource: QuotaResource) -> Option<&ValidationError> {
        self.fields.get(resource).error()
    }

    /// Errors currently shown, in field order.
    pub fn errors(&self) -> Vec<&ValidationError> {
        self.fields.iter().filter_map(QuotaField::error).collect()
    }

    pub fn status(&self) -> &SaveStatus {
        &self.status
    }

    /// Flip the enablement gate and re-run every field's rule against it.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.draft.enabled != enabled {
            debug!("Quota override {:?} -> enabled={}", self.mode(), enabled);
        }
        self.draft.enabled = enabled;
        self.settle_status();
        let draft = self.draft;
        for field in self.fields.iter_mut() {
            field.revalidate(&draft);
        }
    }

    /// Store a value. Validation waits for [`blur`](Self::blur).
    pub fn set_field(&mut self, resource: QuotaResource, value: Option<f64>) {
        *self.draft.value_mut(resource) = value;
        self.settle_status();
    }

    /// Store raw text input. Blank clears the field; anything unparseable is
    /// kept as NaN so that it fails the rule while the override is enabled.
    pub fn set_field_text(&mut self, resource: QuotaResource, text: &str) {
        let text = text.trim();
        let value = if text.is_empty() {
            None
        } else {
            Some(text.parse::<f64>().unwrap_or(f64::NAN))
        };
        self.set_field(resource, value);
    }

    /// The field lost focus.
    pub fn blur(&mut self, resource: QuotaResource) {
        let draft = self.draft;
        self.fields.get_mut(resource).blur(&draft);
    }

    /// Validate the whole draft at once. Every field is marked visited so all
    /// failures become visible; on success the plain payload is returned.
    pub fn submit(&mut self) -> Result<QuotaSettings, SubmitError> {
        let draft = self.draft;
        for field in self.fields.iter_mut() {
            field.blur(&draft);
        }
        let errors: Vec<ValidationError> = self.errors().into_iter().cloned().collect();
        if !errors.is_empty() {
            debug!("Quota settings submit rejected: {} invalid field(s)", errors.len());
            return Err(SubmitError::Invalid(errors));
        }
        Ok(draft.into())
    }

    /// First half of a save: submit, then mark the form as saving. Refused
    /// while an earlier save is still outstanding.
    pub fn begin_save(&mut self) -> Result<QuotaSettings, SubmitError> {
        if self.status == SaveStatus::Saving {
            debug!("Quota settings save refused: previous save still in flight");
            return Err(SubmitError::InProgress);
        }
        self.status = SaveStatus::Idle;
        let payload = self.submit()?;
        self.status = SaveStatus::Saving;
        Ok(payload)
    }

    /// Second half of a save: record what the persistence collaborator said.
    /// On success the draft stops being a draft and its touched state resets.
    pub fn finish_save(&mut self, result: Result<(), SaveError>) -> Result<(), SubmitError> {
        match result {
            Ok(()) => {
                self.status = SaveStatus::Saved;
                for field in self.fields.iter_mut() {
                    field.clear();
                }
                Ok(())
            }
            Err(e) => {
                self.status = SaveStatus::Failed(e.to_string());
                Err(e.into())
            }
        }
    }

    /// An edit makes a previous `Saved`/`Failed` outcome stale. An outstanding
    /// save keeps its `Saving` status until it finishes.
    fn settle_status(&mut self) {
        if self.status != SaveStatus::Saving {
            self.status = SaveStatus::Idle;
        }
    }

    /// Submit and hand the payload to `store`. No retries, no rollback.
    pub async fn save<S>(&mut self, store: &S, tenant: &TenantId) -> Result<QuotaSettings, SubmitError>
    where
        S: QuotaSettingsStore + ?Sized,
    {
        let payload = self.begin_save()?;
        let result = store.save_quota_settings(tenant, &payload).await;
        match &result {
            Ok(()) => info!("Saved workspace quota override for tenant {}", tenant),
            Err(e) => warn!("Saving workspace quota override for {} failed: {}", tenant, e),
        }
        self.finish_save(result)?;
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingStore {
        saved: Mutex<Vec<(TenantId, QuotaSettings)>>,
        fail_with: Option<SaveError>,
    }

    #[async_trait]
    impl QuotaSettingsStore for RecordingStore {
        async fn save_quota_settings(
            &self,
            tenant: &TenantId,
            settings: &QuotaSettings,
        ) -> Result<(), SaveError> {
            self.saved.lock().unwrap().push((tenant.clone(), *settings));
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(()),
            }
        }
    }

    fn tenant() -> TenantId {
        TenantId::parse("s123").unwrap()
    }

    #[test]
    fn toggle_controls_mode() {
        let mut form = QuotaSettingsForm::new();
        assert_eq!(form.mode(), FormMode::Collapsed);
        form.set_enabled(true);
        assert_eq!(form.mode(), FormMode::Expanded);
        form.set_field(QuotaResource::Cpu, Some(4.0));
        assert_eq!(form.mode(), FormMode::Expanded);
        form.set_enabled(false);
        assert_eq!(form.mode(), FormMode::Collapsed);
    }

    #[test]
    fn validation_waits_for_blur() {
        let mut form = QuotaSettingsForm::new();
        form.set_enabled(true);
        form.set_field(QuotaResource::Cpu, Some(-1.0));
        assert!(form.error(QuotaResource::Cpu).is_none());

        form.blur(QuotaResource::Cpu);
        assert_eq!(
            form.error(QuotaResource::Cpu).unwrap().to_string(),
            "CPU must be at least 0"
        );

        // editing does not clear or re-check until the next blur
        form.set_field(QuotaResource::Cpu, Some(2.0));
        assert!(form.error(QuotaResource::Cpu).is_some());
        form.blur(QuotaResource::Cpu);
        assert!(form.error(QuotaResource::Cpu).is_none());
    }

    #[test]
    fn disabling_clears_error_and_keeps_value() {
        let mut form = QuotaSettingsForm::new();
        form.set_enabled(true);
        form.set_field(QuotaResource::Memory, Some(-3.5));
        form.blur(QuotaResource::Memory);
        assert!(form.error(QuotaResource::Memory).is_some());

        form.set_enabled(false);
        assert!(form.error(QuotaResource::Memory).is_none());
        assert_eq!(form.draft().memory, Some(-3.5));

        // re-enabling brings the error back without re-entering the value
        form.set_enabled(true);
        assert!(form.error(QuotaResource::Memory).is_some());
    }

    #[test]
    fn enabling_does_not_flag_untouched_fields() {
        let mut form = QuotaSettingsForm::new();
        form.set_enabled(true);
        assert!(form.errors().is_empty());
    }

    #[test]
    fn text_input_parsing() {
        let mut form = QuotaSettingsForm::new();
        form.set_field_text(QuotaResource::Memory, " 2.5 ");
        assert_eq!(form.draft().memory, Some(2.5));
        form.set_field_text(QuotaResource::Memory, "");
        assert_eq!(form.draft().memory, None);
        form.set_field_text(QuotaResource::Memory, "lots");
        assert!(form.draft().memory.unwrap().is_nan());

        form.set_enabled(true);
        form.blur(QuotaResource::Memory);
        assert!(form.error(QuotaResource::Memory).is_some());
    }

    #[test]
    fn submit_disabled_passes_with_any_values() {
        let mut form = QuotaSettingsForm::new();
        form.set_field(QuotaResource::Cpu, Some(-10.0));
        let payload = form.submit().unwrap();
        assert!(!payload.enabled);
        assert_eq!(payload.cpu, Some(-10.0));
        assert_eq!(payload.memory, None);
    }

    #[test]
    fn submit_reports_every_failing_field() {
        let mut form = QuotaSettingsForm::new();
        form.set_enabled(true);
        match form.submit() {
            Err(SubmitError::Invalid(errors)) => {
                let fields: Vec<QuotaResource> = errors.iter().map(|e| e.field).collect();
                assert_eq!(fields, QuotaResource::ALL.to_vec());
            }
            other => panic!("expected validation failure, got {:?}", other),
        }
        assert_eq!(form.errors().len(), 3);
    }

    #[test]
    fn custom_minimum() {
        let mut form = QuotaSettingsForm::new().with_minimum(QuotaResource::Instances, 1.0);
        form.set_enabled(true);
        form.set_field(QuotaResource::Cpu, Some(0.0));
        form.set_field(QuotaResource::Memory, Some(0.0));
        form.set_field(QuotaResource::Instances, Some(0.0));
        let err = form.submit().unwrap_err();
        assert_eq!(err.to_string(), "1 field(s) failed validation");
        assert_eq!(
            form.error(QuotaResource::Instances).unwrap().to_string(),
            "Instances must be at least 1"
        );
    }

    #[tokio::test]
    async fn invalid_cpu_is_never_persisted() {
        let store = RecordingStore::default();
        let mut form = QuotaSettingsForm::new();
        form.set_enabled(true);
        form.set_field(QuotaResource::Cpu, Some(-1.0));
        form.set_field(QuotaResource::Memory, Some(2.0));
        form.set_field(QuotaResource::Instances, Some(1.0));

        let err = form.save(&store, &tenant()).await.unwrap_err();
        match err {
            SubmitError::Invalid(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, QuotaResource::Cpu);
            }
            other => panic!("expected validation failure, got {:?}", other),
        }
        assert!(store.saved.lock().unwrap().is_empty());
        assert_eq!(form.status(), &SaveStatus::Idle);
    }

    #[tokio::test]
    async fn valid_payload_is_handed_over() {
        let store = RecordingStore::default();
        let mut form = QuotaSettingsForm::new();
        form.set_enabled(true);
        form.set_field(QuotaResource::Cpu, Some(4.0));
        form.set_field(QuotaResource::Memory, Some(8.5));
        form.set_field(QuotaResource::Instances, Some(2.0));

        let payload = form.save(&store, &tenant()).await.unwrap();
        assert_eq!(
            payload,
            QuotaSettings {
                enabled: true,
                cpu: Some(4.0),
                memory: Some(8.5),
                instances: Some(2.0),
            }
        );
        let saved = store.saved.lock().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].0.as_str(), "s123");
        assert_eq!(saved[0].1, payload);
        assert_eq!(form.status(), &SaveStatus::Saved);
        assert!(!form.field(QuotaResource::Cpu).is_touched());
    }

    #[tokio::test]
    async fn persistence_failure_keeps_draft() {
        let store = RecordingStore {
            fail_with: Some(SaveError::Transport("connection reset".into())),
            ..Default::default()
        };
        let mut form = QuotaSettingsForm::from_settings(Some(QuotaSettings {
            enabled: true,
            cpu: Some(1.0),
            memory: Some(1.0),
            instances: Some(1.0),
        }));

        let err = form.save(&store, &tenant()).await.unwrap_err();
        assert!(matches!(err, SubmitError::Save(SaveError::Transport(_))));
        assert_eq!(
            form.status(),
            &SaveStatus::Failed("Saving failed: connection reset".into())
        );
        assert_eq!(form.draft().cpu, Some(1.0));
        assert!(form.draft().enabled);
    }

    #[test]
    fn second_save_is_refused_while_first_is_outstanding() {
        let mut form = QuotaSettingsForm::new();
        assert!(form.begin_save().is_ok());
        assert_eq!(form.status(), &SaveStatus::Saving);
        assert_eq!(form.begin_save().unwrap_err(), SubmitError::InProgress);

        // edits during the save do not hide it
        form.set_field(QuotaResource::Cpu, Some(1.0));
        assert_eq!(form.status(), &SaveStatus::Saving);

        form.finish_save(Ok(())).unwrap();
        assert!(form.begin_save().is_ok());
    }

    #[test]
    fn edits_clear_previous_outcome() {
        let mut form = QuotaSettingsForm::new();
        form.begin_save().unwrap();
        form.finish_save(Err(SaveError::Transport("timeout".into())))
            .unwrap_err();
        assert!(matches!(form.status(), SaveStatus::Failed(_)));
        form.set_field(QuotaResource::Memory, Some(2.0));
        assert_eq!(form.status(), &SaveStatus::Idle);

        form.begin_save().unwrap();
        form.finish_save(Ok(())).unwrap();
        assert_eq!(form.status(), &SaveStatus::Saved);
        form.set_enabled(true);
        assert_eq!(form.status(), &SaveStatus::Idle);
    }

    #[test]
    fn rejected_submit_clears_previous_outcome() {
        let mut form = QuotaSettingsForm::new();
        form.begin_save().unwrap();
        form.finish_save(Ok(())).unwrap();
        assert_eq!(form.status(), &SaveStatus::Saved);

        form.draft.enabled = true;
        assert!(matches!(form.begin_save(), Err(SubmitError::Invalid(_))));
        assert_eq!(form.status(), &SaveStatus::Idle);
    }

    #[test]
    fn draft_validate_matches_rule() {
        let draft = QuotaSettingsDraft {
            enabled: true,
            cpu: Some(-1.0),
            memory: Some(2.0),
            instances: Some(1.0),
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, QuotaResource::Cpu);

        let disabled = QuotaSettingsDraft {
            enabled: false,
            ..draft
        };
        assert!(disabled.validate().is_ok());
    }
}
