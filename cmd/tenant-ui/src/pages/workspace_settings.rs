use crate::api;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::*;
use dioxus_free_icons::Icon;
use pkg_console::{FormMode, QuotaResource, QuotaSettingsForm, SaveStatus, TenantsView};

/// Run `f` against the open tenant's settings form, if any.
fn edit_form(mut view: Signal<TenantsView>, f: impl FnOnce(&mut QuotaSettingsForm)) {
    if let Some(detail) = view.write().detail_mut() {
        f(detail.settings_mut());
    }
}

/// Personal workspace quota override for the open tenant.
#[component]
pub fn PersonalWorkspaceSettings(mut view: Signal<TenantsView>) -> Element {
    let form = view.read().detail().map(|d| d.settings().clone());
    let Some(form) = form else {
        return rsx! {};
    };

    let enabled = form.draft().enabled;
    let collapsed = form.mode() == FormMode::Collapsed;
    let status = form.status().clone();
    let saving = status == SaveStatus::Saving;

    rsx! {
        div { class: "card",
            div { class: "card-header",
                h3 { "Personal workspace" }
            }

            label { class: "toggle",
                input {
                    r#type: "checkbox",
                    checked: enabled,
                    onchange: move |evt| {
                        let checked = evt.checked();
                        edit_form(view, |f| f.set_enabled(checked));
                    },
                }
                span { "Override workspace quota" }
            }

            // Hidden rather than unmounted so typed values survive a toggle.
            div { class: "quota-fields", hidden: collapsed,
                for resource in QuotaResource::ALL {
                    {
                        let key = resource.key();
                        rsx! { QuotaInput { key: "{key}", view, resource } }
                    }
                }
            }

            div { class: "form-actions",
                button {
                    class: "primary",
                    disabled: saving,
                    onclick: move |_| {
                        let tenant = view.read().detail().map(|d| d.tenant().clone());
                        let Some(tenant) = tenant else {
                            return;
                        };
                        let mut payload = None;
                        edit_form(view, |f| payload = f.begin_save().ok());
                        let Some(payload) = payload else {
                            return;
                        };
                        spawn(async move {
                            let result = api::store_workspace_quota(&tenant, &payload).await;
                            // The operator may have left or switched tenants meanwhile.
                            if let Some(detail) = view.write().detail_mut() {
                                if detail.tenant() == &tenant {
                                    // The form records the outcome in its status.
                                    if let Err(e) = detail.settings_mut().finish_save(result) {
                                        tracing::warn!("Workspace quota for {} not saved: {}", tenant, e);
                                    }
                                }
                            }
                        });
                    },
                    Icon { width: 14, height: 14, icon: LdSave }
                    span { "Save" }
                }

                {match status {
                    SaveStatus::Idle => rsx! {},
                    SaveStatus::Saving => rsx! { span { class: "status muted", "Saving..." } },
                    SaveStatus::Saved => rsx! { span { class: "status ok", "Saved" } },
                    SaveStatus::Failed(message) => rsx! { div { class: "banner error", "{message}" } },
                }}
            }
        }
    }
}

#[component]
fn QuotaInput(view: Signal<TenantsView>, resource: QuotaResource) -> Element {
    let (initial, error) = {
        let guard = view.read();
        match guard.detail() {
            Some(detail) => (
                detail.settings().draft().value(resource),
                detail.settings().error(resource).map(ToString::to_string),
            ),
            None => (None, None),
        }
    };
    // Raw text stays local so partial input like "1." is not rewritten.
    let mut text = use_signal(move || {
        initial
            .filter(|v| v.is_finite())
            .map(|v| v.to_string())
            .unwrap_or_default()
    });

    let id = format!("quota-{}", resource.key());
    let label = resource.label();
    let input_cls = if error.is_some() { "invalid" } else { "" };

    rsx! {
        div { class: "quota-field",
            label { r#for: "{id}", "{label}" }
            input {
                id: "{id}",
                class: input_cls,
                r#type: "number",
                step: "any",
                value: "{text}",
                oninput: move |evt| {
                    let value = evt.value();
                    edit_form(view, |f| f.set_field_text(resource, &value));
                    text.set(value);
                },
                onblur: move |_| edit_form(view, |f| f.blur(resource)),
            }
            if let Some(message) = error.as_ref() {
                p { class: "field-error", "{message}" }
            }
        }
    }
}
