use pkg_types::{TenantId, TenantRecord};
use tracing::debug;

use crate::client::TenantLookup;
use crate::display::QuotaDisplay;
use crate::error::LookupError;
use crate::lookup::{LookupState, LookupTicket, TenantLookupController};
use crate::settings::QuotaSettingsForm;

/// What the search panel shows while no tenant is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStatus {
    pub loading: bool,
    pub error: Option<LookupError>,
}

/// An opened tenant: its record, the derived usage summary and the
/// override form bound to it.
#[derive(Debug, Clone, PartialEq)]
pub struct TenantDetail {
    record: TenantRecord,
    usage: QuotaDisplay,
    settings: QuotaSettingsForm,
    search: SearchStatus,
}

impl TenantDetail {
    fn new(record: TenantRecord) -> Self {
        let usage = QuotaDisplay::render(
            record.consumed_quota.as_ref(),
            record.workspace_quota.as_ref(),
        );
        let settings = QuotaSettingsForm::from_settings(record.personal_workspace);
        Self {
            record,
            usage,
            settings,
            search: SearchStatus::default(),
        }
    }

    pub fn record(&self) -> &TenantRecord {
        &self.record
    }

    pub fn tenant(&self) -> &TenantId {
        &self.record.id
    }

    pub fn usage(&self) -> &QuotaDisplay {
        &self.usage
    }

    pub fn settings(&self) -> &QuotaSettingsForm {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut QuotaSettingsForm {
        &mut self.settings
    }

    /// Progress of a search started while this tenant is open. The detail
    /// stays until that search resolves; a failure is reported here.
    pub fn search_status(&self) -> &SearchStatus {
        &self.search
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewMode {
    Searching(SearchStatus),
    Viewing(Box<TenantDetail>),
}

/// The tenant management screen: a search panel until a lookup resolves,
/// then the tenant detail until the operator goes back.
#[derive(Debug, Clone, PartialEq)]
pub struct TenantsView {
    lookup: TenantLookupController,
    mode: ViewMode,
}

impl Default for TenantsView {
    fn default() -> Self {
        Self::new()
    }
}

impl TenantsView {
    pub fn new() -> Self {
        Self {
            lookup: TenantLookupController::new(),
            mode: ViewMode::Searching(SearchStatus::default()),
        }
    }

    pub fn mode(&self) -> &ViewMode {
        &self.mode
    }

    pub fn lookup(&self) -> &TenantLookupController {
        &self.lookup
    }

    pub fn is_searching(&self) -> bool {
        matches!(self.mode, ViewMode::Searching(_))
    }

    pub fn detail(&self) -> Option<&TenantDetail> {
        match &self.mode {
            ViewMode::Viewing(detail) => Some(detail.as_ref()),
            ViewMode::Searching(_) => None,
        }
    }

    pub fn detail_mut(&mut self) -> Option<&mut TenantDetail> {
        match &mut self.mode {
            ViewMode::Viewing(detail) => Some(detail.as_mut()),
            ViewMode::Searching(_) => None,
        }
    }

    /// Normalize the operator's input and start a lookup for it. Blank input
    /// is refused before anything is issued.
    pub fn submit_search(&mut self, raw: &str) -> anyhow::Result<LookupTicket> {
        let tenant = TenantId::parse(raw)?;
        let ticket = self.lookup.search(tenant);
        self.sync();
        Ok(ticket)
    }

    /// Feed a lookup response back. Stale responses change nothing.
    pub fn complete_search(
        &mut self,
        ticket: &LookupTicket,
        result: Result<TenantRecord, LookupError>,
    ) -> bool {
        let applied = self.lookup.complete(ticket, result);
        if applied {
            self.sync();
        }
        applied
    }

    /// Leave the tenant detail and discard its record.
    pub fn back(&mut self) {
        debug!("Leaving tenant view");
        self.lookup.reset();
        self.mode = ViewMode::Searching(SearchStatus::default());
    }

    /// Search and apply the response in one go.
    pub async fn search<L>(&mut self, lookup: &L, raw: &str) -> anyhow::Result<bool>
    where
        L: TenantLookup + ?Sized,
    {
        let ticket = self.submit_search(raw)?;
        let result = lookup.lookup(ticket.tenant()).await;
        Ok(self.complete_search(&ticket, result))
    }

    fn sync(&mut self) {
        match self.lookup.state() {
            LookupState::Resolved(record) => {
                debug!("Opening tenant {}", record.id);
                self.mode = ViewMode::Viewing(Box::new(TenantDetail::new(record.clone())));
            }
            LookupState::Pending(_) => {
                let status = search_status_mut(&mut self.mode);
                status.loading = true;
                status.error = None;
            }
            LookupState::Idle => {
                let error = self.lookup.last_error().cloned();
                let status = search_status_mut(&mut self.mode);
                status.loading = false;
                status.error = error;
            }
        }
    }
}

fn search_status_mut(mode: &mut ViewMode) -> &mut SearchStatus {
    match mode {
        ViewMode::Searching(status) => status,
        ViewMode::Viewing(detail) => &mut detail.search,
    }
}
