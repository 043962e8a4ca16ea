use pkg_constants::quota::{MIN_CPU, MIN_INSTANCES, MIN_MEMORY};
use std::fmt;

use crate::error::ValidationError;
use crate::settings::QuotaSettingsDraft;

/// One of the three quota resources a tenant is measured and limited on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuotaResource {
    Cpu,
    Memory,
    Instances,
}

impl QuotaResource {
    pub const ALL: [QuotaResource; 3] = [Self::Cpu, Self::Memory, Self::Instances];

    /// Name used in validation messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Cpu => "CPU",
            Self::Memory => "Memory",
            Self::Instances => "Instances",
        }
    }

    /// Key of the field in the settings payload.
    pub fn key(self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Memory => "memory",
            Self::Instances => "instances",
        }
    }

    pub fn default_minimum(self) -> f64 {
        match self {
            Self::Cpu => MIN_CPU,
            Self::Memory => MIN_MEMORY,
            Self::Instances => MIN_INSTANCES,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Cpu => 0,
            Self::Memory => 1,
            Self::Instances => 2,
        }
    }
}

impl fmt::Display for QuotaResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The enablement-gated minimum rule.
///
/// With the override disabled every value passes, including negative, blank
/// and NaN ones. With it enabled the value must be present and `>= minimum`.
pub fn check_minimum(
    resource: QuotaResource,
    minimum: f64,
    enabled: bool,
    value: Option<f64>,
) -> Result<(), ValidationError> {
    if !enabled {
        return Ok(());
    }
    match value {
        // NaN compares false, so unparseable input fails here too
        Some(v) if v >= minimum => Ok(()),
        _ => Err(ValidationError {
            field: resource,
            minimum,
        }),
    }
}

/// Validation state of one numeric field of the settings form. The value
/// itself lives in the draft; this holds the rule parameters and what the
/// operator currently sees.
#[derive(Debug, Clone, PartialEq)]
pub struct QuotaField {
    resource: QuotaResource,
    minimum: f64,
    touched: bool,
    error: Option<ValidationError>,
}

impl QuotaField {
    pub fn new(resource: QuotaResource) -> Self {
        Self {
            resource,
            minimum: resource.default_minimum(),
            touched: false,
            error: None,
        }
    }

    pub fn resource(&self) -> QuotaResource {
        self.resource
    }

    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    /// Whether the operator has left this field at least once (or submitted).
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// The error currently shown next to this field.
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Run the rule against the whole draft. Pure: nothing is recorded.
    pub fn check(&self, draft: &QuotaSettingsDraft) -> Result<(), ValidationError> {
        check_minimum(
            self.resource,
            self.minimum,
            draft.enabled,
            draft.value(self.resource),
        )
    }

    pub(crate) fn set_minimum(&mut self, minimum: f64) {
        self.minimum = minimum;
    }

    /// Field lost focus: it becomes visible to validation from now on.
    pub(crate) fn blur(&mut self, draft: &QuotaSettingsDraft) {
        self.touched = true;
        self.revalidate(draft);
    }

    /// Re-run the rule; untouched fields never show an error.
    pub(crate) fn revalidate(&mut self, draft: &QuotaSettingsDraft) {
        self.error = if self.touched {
            self.check(draft).err()
        } else {
            None
        };
    }

    pub(crate) fn clear(&mut self) {
        self.touched = false;
        self.error = None;
    }
}

/// The three fields, indexable by resource.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct QuotaFields([QuotaField; 3]);

impl QuotaFields {
    pub(crate) fn new() -> Self {
        Self(QuotaResource::ALL.map(QuotaField::new))
    }

    pub(crate) fn get(&self, resource: QuotaResource) -> &QuotaField {
        &self.0[resource.index()]
    }

    pub(crate) fn get_mut(&mut self, resource: QuotaResource) -> &mut QuotaField {
        &mut self.0[resource.index()]
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &QuotaField> {
        self.0.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut QuotaField> {
        self.0.iter_mut()
    }
}
