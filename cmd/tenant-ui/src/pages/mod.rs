mod quota_display;
mod tenants;
mod workspace_settings;

pub use quota_display::*;
pub use tenants::*;
pub use workspace_settings::*;
