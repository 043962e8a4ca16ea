use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::*;
use dioxus_free_icons::Icon;
use pkg_console::{QuotaDisplay, QuotaResource};

/// Consumed/allotted summary of the tenant's personal workspace.
#[component]
pub fn QuotaDisplayBar(usage: QuotaDisplay) -> Element {
    rsx! {
        div { class: "quota-grid",
            for row in usage.rows() {
                {
                    let pct = row.utilization().map(|u| (u * 100.0).clamp(0.0, 100.0)).unwrap_or(0.0);
                    let over = row.utilization().is_some_and(|u| u > 1.0);
                    let key = row.resource.key();
                    let ratio = row.ratio();
                    let label = row.label;
                    let icon = match row.resource {
                        QuotaResource::Cpu => rsx! { Icon { width: 18, height: 18, icon: LdCpu } },
                        QuotaResource::Memory => rsx! { Icon { width: 18, height: 18, icon: LdDatabase } },
                        QuotaResource::Instances => rsx! { Icon { width: 18, height: 18, icon: LdCloud } },
                    };
                    rsx! {
                        div { key: "{key}", class: "quota-tile",
                            div { class: "quota-icon", {icon} }
                            div { class: "quota-body",
                                p { class: "quota-ratio", "{ratio}" }
                                p { class: "quota-label", "{label}" }
                                div { class: "meter",
                                    div {
                                        class: if over { "meter-fill over" } else { "meter-fill" },
                                        style: "width: {pct:.0}%",
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
