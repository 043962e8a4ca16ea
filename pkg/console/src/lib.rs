//! Operator console core: the tenant lookup/detail view state machine and the
//! personal-workspace quota settings form with its conditional validation.
//!
//! Nothing here renders or performs I/O directly. Rendering surfaces read the
//! state these types expose; lookups and saves go through the collaborator
//! traits in [`client`].

pub mod client;
pub mod display;
pub mod error;
pub mod field;
pub mod lookup;
pub mod settings;
pub mod view;

#[cfg(feature = "http")]
pub mod http;

pub use client::{QuotaSettingsStore, TenantLookup};
pub use display::{QuotaDisplay, QuotaRow};
pub use error::{LookupError, SaveError, SubmitError, ValidationError};
pub use field::{QuotaField, QuotaResource};
pub use lookup::{LookupState, LookupTicket, TenantLookupController};
pub use settings::{FormMode, QuotaSettingsDraft, QuotaSettingsForm, SaveStatus};
pub use view::{SearchStatus, TenantDetail, TenantsView, ViewMode};
