use pkg_types::{TenantId, TenantRecord};
use tracing::{debug, info, warn};

use crate::client::TenantLookup;
use crate::error::LookupError;

/// Handle of one issued lookup. Only the most recently issued ticket can
/// still change the controller's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    seq: u64,
    tenant: TenantId,
}

impl LookupTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn tenant(&self) -> &TenantId {
        &self.tenant
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LookupState {
    Idle,
    Pending(LookupTicket),
    Resolved(TenantRecord),
}

/// Tracks the single outstanding tenant lookup.
///
/// Every `search` supersedes the previous one: a response that arrives for
/// an older ticket, or after `reset`, is dropped (last issued wins).
#[derive(Debug, Clone, PartialEq)]
pub struct TenantLookupController {
    state: LookupState,
    last_error: Option<LookupError>,
    issued: u64,
}

impl Default for TenantLookupController {
    fn default() -> Self {
        Self::new()
    }
}

impl TenantLookupController {
    pub fn new() -> Self {
        Self {
            state: LookupState::Idle,
            last_error: None,
            issued: 0,
        }
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LookupState::Pending(_))
    }

    pub fn record(&self) -> Option<&TenantRecord> {
        match &self.state {
            LookupState::Resolved(record) => Some(record),
            _ => None,
        }
    }

    /// Failure of the most recent lookup, cleared by the next `search`.
    pub fn last_error(&self) -> Option<&LookupError> {
        self.last_error.as_ref()
    }

    /// Enter `Pending` for `tenant` and hand out the ticket the caller must
    /// present when the response arrives.
    pub fn search(&mut self, tenant: TenantId) -> LookupTicket {
        self.issued += 1;
        let ticket = LookupTicket {
            seq: self.issued,
            tenant,
        };
        debug!("Lookup #{} issued for tenant {}", ticket.seq, ticket.tenant);
        self.last_error = None;
        self.state = LookupState::Pending(ticket.clone());
        ticket
    }

    /// Apply a response. Returns `false` when the ticket is stale and the
    /// response was ignored. A record for any tenant other than the one the
    /// ticket asked for is treated as a failed lookup.
    pub fn complete(
        &mut self,
        ticket: &LookupTicket,
        result: Result<TenantRecord, LookupError>,
    ) -> bool {
        match &self.state {
            LookupState::Pending(current) if current == ticket => {}
            _ => {
                debug!(
                    "Dropping stale lookup #{} for tenant {}",
                    ticket.seq, ticket.tenant
                );
                return false;
            }
        }
        let result = result.and_then(|record| {
            if &record.id == ticket.tenant() {
                Ok(record)
            } else {
                Err(LookupError::Transport(format!(
                    "server returned tenant {} for {}",
                    record.id, ticket.tenant
                )))
            }
        });
        match result {
            Ok(record) => {
                info!("Tenant {} loaded", record.id);
                self.state = LookupState::Resolved(record);
            }
            Err(e) => {
                warn!("Lookup of tenant {} failed: {}", ticket.tenant, e);
                self.last_error = Some(e);
                self.state = LookupState::Idle;
            }
        }
        true
    }

    /// Back to `Idle`: drops the held record and invalidates any in-flight ticket.
    pub fn reset(&mut self) {
        self.state = LookupState::Idle;
        self.last_error = None;
    }

    /// Issue a lookup and apply its response in one go.
    pub async fn run<L>(&mut self, lookup: &L, tenant: TenantId) -> bool
    where
        L: TenantLookup + ?Sized,
    {
        let ticket = self.search(tenant);
        let result = lookup.lookup(ticket.tenant()).await;
        self.complete(&ticket, result)
    }
}
