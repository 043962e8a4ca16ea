use crate::api;
use crate::pages::{QuotaDisplayBar, PersonalWorkspaceSettings};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::*;
use dioxus_free_icons::Icon;
use pkg_console::{SearchStatus, TenantsView, ViewMode};

/// Tenant management page. Search by ID, then inspect and edit the tenant.
#[component]
pub fn Tenants() -> Element {
    let mut view = use_signal(TenantsView::new);
    let viewing = !view.read().is_searching();

    rsx! {
        div { class: "page-header",
            if viewing {
                button {
                    class: "back-button",
                    title: "Back to search",
                    onclick: move |_| view.write().back(),
                    Icon { width: 18, height: 18, icon: LdChevronLeft }
                }
            }
            div {
                h2 { "Manage tenant" }
                p { "Look up a tenant to review usage and workspace limits" }
            }
        }

        if viewing {
            TenantDetailPanel { view }
        } else {
            TenantSearchForm { view }
        }
    }
}

#[component]
fn TenantSearchForm(mut view: Signal<TenantsView>) -> Element {
    let mut query = use_signal(String::new);
    let mut input_error = use_signal(|| None::<String>);

    let status = match view.read().mode() {
        ViewMode::Searching(status) => status.clone(),
        ViewMode::Viewing(_) => SearchStatus::default(),
    };

    rsx! {
        form {
            class: "card search-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                let submitted = view.write().submit_search(&query.read());
                let ticket = match submitted {
                    Ok(ticket) => {
                        input_error.set(None);
                        ticket
                    }
                    Err(e) => {
                        input_error.set(Some(e.to_string()));
                        return;
                    }
                };
                spawn(async move {
                    let result = api::lookup_tenant(ticket.tenant()).await;
                    view.write().complete_search(&ticket, result);
                });
            },

            label { r#for: "tenant-id", "Tenant ID" }
            div { class: "search-row",
                input {
                    id: "tenant-id",
                    r#type: "text",
                    placeholder: "e.g. abc123",
                    autocomplete: "off",
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                }
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: status.loading,
                    Icon { width: 14, height: 14, icon: LdSearch }
                    if status.loading { span { "Searching..." } } else { span { "Search" } }
                }
            }

            if let Some(message) = input_error.read().as_ref() {
                p { class: "field-error", "{message}" }
            }
            if let Some(err) = status.error.as_ref() {
                div { class: "banner error", "{err}" }
            }
        }
    }
}

#[component]
fn TenantDetailPanel(view: Signal<TenantsView>) -> Element {
    let detail = view.read().detail().cloned();
    let Some(detail) = detail else {
        return rsx! {};
    };

    let record = detail.record();
    let title = record
        .display_name
        .clone()
        .unwrap_or_else(|| record.id.to_string());
    let raw = serde_json::to_string_pretty(record).unwrap_or_default();

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h3 { "{title}" }
                span { class: "tenant-id", "{record.id}" }
            }
            QuotaDisplayBar { usage: detail.usage().clone() }
        }

        PersonalWorkspaceSettings { view }

        details { class: "card raw-record",
            summary { "Raw record" }
            pre { "{raw}" }
        }
    }
}
