use crate::api::ReclaimClient;
use crate::components::{PieChart, Toast, ToastMessage, stream_series};
use crate::format::{PENDING_PLACEHOLDER, format_compliance_pct, format_rand};
use crate::models::edit_buffer::EditBuffer;
use shared::models::{EprReport, User, UserRole};
use strum::IntoEnumIterator;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Load state of a fetched resource. Failures stay visible instead of
/// degrading to an empty view.
#[derive(Clone, PartialEq)]
enum Fetch<T> {
    Pending,
    Ready(T),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsTab {
    Roles,
    Reporting,
}

/// Both panels stay mounted so staged edits survive tab switches.
fn panel_class(active: SettingsTab, tab: SettingsTab) -> &'static str {
    if active == tab { "mt-6" } else { "hidden" }
}

/// The save action is available only with pending edits and no save in
/// flight.
fn save_disabled(edits: &EditBuffer, saving: bool) -> bool {
    edits.is_empty() || saving
}

/// A missing session is denied the same way an insufficient role is.
fn is_admin(current_user: Option<&User>) -> bool {
    current_user.is_some_and(|user| user.role == UserRole::Admin)
}

// Pending overlay: a staged value wins over the server value.
fn effective_role(user: &User, edits: &EditBuffer) -> UserRole {
    edits.staged_role(user.id).unwrap_or(user.role)
}

fn effective_active(user: &User, edits: &EditBuffer) -> bool {
    edits.staged_active(user.id).unwrap_or(user.active)
}

#[derive(Properties, PartialEq)]
struct PanelProps {
    on_notify: Callback<ToastMessage>,
}

fn user_row(
    user: &User,
    edits: &EditBuffer,
    locked: bool,
    on_role: &Callback<(Uuid, UserRole)>,
    on_active: &Callback<(Uuid, bool)>,
) -> Html {
    let id = user.id;
    let current_role = effective_role(user, edits);
    let current_active = effective_active(user, edits);

    let onchange_role = {
        let on_role = on_role.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                if let Ok(role) = select.value().parse::<UserRole>() {
                    on_role.emit((id, role));
                }
            }
        })
    };

    let onchange_active = {
        let on_active = on_active.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                on_active.emit((id, input.checked()));
            }
        })
    };

    html! {
        <tr key={id.to_string()}>
            <td>{ user.username.clone() }</td>
            <td>
                <select
                    class="select select-bordered select-sm w-44"
                    disabled={locked}
                    onchange={onchange_role}
                >
                    { for UserRole::iter().map(|role| html! {
                        <option value={role.as_str()} selected={role == current_role}>
                            { role.label() }
                        </option>
                    })}
                </select>
            </td>
            <td>
                <input
                    type="checkbox"
                    class="toggle toggle-success"
                    checked={current_active}
                    disabled={locked}
                    onchange={onchange_active}
                />
            </td>
        </tr>
    }
}

#[function_component(UserRolesPanel)]
fn user_roles_panel(props: &PanelProps) -> Html {
    let users = use_state(|| Fetch::<Vec<User>>::Pending);
    let edits = use_state(EditBuffer::default);
    let saving = use_state(|| false);
    let reload = use_state(|| 0_u32);

    {
        let users = users.clone();
        use_effect_with(*reload, move |_| {
            users.set(Fetch::Pending);
            spawn_local(async move {
                let client = ReclaimClient::shared();
                match client.get_config_users().await {
                    Ok(list) => users.set(Fetch::Ready(list)),
                    Err(err) => {
                        users.set(Fetch::Failed(format!("Failed to load users: {err}")));
                    }
                }
            });
            || ()
        });
    }

    let on_role_change = {
        let edits = edits.clone();
        Callback::from(move |(id, role): (Uuid, UserRole)| {
            let mut next = (*edits).clone();
            next.stage_role(id, role);
            edits.set(next);
        })
    };

    let on_active_change = {
        let edits = edits.clone();
        Callback::from(move |(id, active): (Uuid, bool)| {
            let mut next = (*edits).clone();
            next.stage_active(id, active);
            edits.set(next);
        })
    };

    let on_save = {
        let edits = edits.clone();
        let saving = saving.clone();
        let reload = reload.clone();
        let on_notify = props.on_notify.clone();
        Callback::from(move |_: MouseEvent| {
            if save_disabled(&edits, *saving) {
                return;
            }
            let updates = edits.updates();
            saving.set(true);

            let edits = edits.clone();
            let saving = saving.clone();
            let reload = reload.clone();
            let on_notify = on_notify.clone();
            spawn_local(async move {
                let client = ReclaimClient::shared();
                match client.update_config_users(&updates).await {
                    Ok(()) => {
                        on_notify.emit(ToastMessage::success(
                            "User configurations saved successfully!",
                        ));
                        edits.set(EditBuffer::default());
                        // Refetch so rows show server-confirmed state.
                        reload.set(*reload + 1);
                    }
                    Err(err) => {
                        // Buffer stays intact so staged work survives a retry.
                        on_notify.emit(ToastMessage::error(
                            "Failed to save changes",
                            err.to_string(),
                        ));
                    }
                }
                saving.set(false);
            });
        })
    };

    // Edits are locked while a save is in flight so the success handler can
    // never clear a change staged after the snapshot was taken.
    let locked = *saving;
    let disable_save = save_disabled(&edits, *saving);

    let body = match &*users {
        Fetch::Pending => html! {
            <tr><td colspan="3" class="text-center">{"Loading users..."}</td></tr>
        },
        Fetch::Failed(message) => html! {
            <tr><td colspan="3" class="text-center text-error">{ message.clone() }</td></tr>
        },
        Fetch::Ready(list) => html! {
            { for list.iter().map(|user| {
                user_row(user, &edits, locked, &on_role_change, &on_active_change)
            })}
        },
    };

    html! {
        <div class="card bg-base-200 shadow-xl">
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h2 class="card-title">{"User Role Management"}</h2>
                    <button
                        class="btn btn-primary"
                        type="button"
                        disabled={disable_save}
                        onclick={on_save}
                    >
                        if *saving {
                            <span class="loading loading-spinner loading-sm"></span>
                        } else {
                            <i class="fa-solid fa-floppy-disk"></i>
                        }
                        {"Save Changes"}
                        if !edits.is_empty() {
                            <span class="badge badge-neutral">{ edits.len() }</span>
                        }
                    </button>
                </div>
                <div class="overflow-x-auto border border-base-300 rounded-lg mt-4">
                    <table class="table">
                        <thead>
                            <tr>
                                <th>{"Username"}</th>
                                <th>{"Role"}</th>
                                <th>{"Status"}</th>
                            </tr>
                        </thead>
                        <tbody>{ body }</tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}

#[function_component(EprReportingPanel)]
fn epr_reporting_panel(props: &PanelProps) -> Html {
    let report = use_state(|| Fetch::<EprReport>::Pending);

    {
        let report = report.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = ReclaimClient::shared();
                match client.get_epr_report().await {
                    Ok(fetched) => report.set(Fetch::Ready(fetched)),
                    Err(err) => {
                        report.set(Fetch::Failed(format!("Failed to load report: {err}")));
                    }
                }
            });
            || ()
        });
    }

    let on_export = {
        let on_notify = props.on_notify.clone();
        Callback::from(move |_: MouseEvent| {
            let on_notify = on_notify.clone();
            spawn_local(async move {
                let client = ReclaimClient::shared();
                match client.export_report().await {
                    Ok(()) => on_notify.emit(ToastMessage::info(
                        "PRO XML Export",
                        "This is a mock export. In production, this would download \
                         a compliant XML file.",
                    )),
                    Err(err) => {
                        on_notify.emit(ToastMessage::error("Export failed", err.to_string()));
                    }
                }
            });
        })
    };

    let (pct, fees) = match &*report {
        Fetch::Ready(report) => (
            format_compliance_pct(report.compliance_pct),
            format_rand(report.total_fees),
        ),
        Fetch::Pending | Fetch::Failed(_) => (
            PENDING_PLACEHOLDER.to_string(),
            PENDING_PLACEHOLDER.to_string(),
        ),
    };

    html! {
        <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
            <div class="card bg-base-200 shadow-xl lg:col-span-1">
                <div class="card-body space-y-4">
                    <h2 class="card-title">{"Compliance Overview"}</h2>
                    if let Fetch::Failed(message) = &*report {
                        <div class="alert alert-error"><span>{ message.clone() }</span></div>
                    }
                    <div class="text-center">
                        <div class="text-4xl font-bold">{ pct }</div>
                        <p class="text-sm text-base-content/70">{"WEEE Compliant Suppliers"}</p>
                    </div>
                    <div class="text-center">
                        <div class="text-4xl font-bold">{ fees }</div>
                        <p class="text-sm text-base-content/70">{"Total EPR Fees Collected"}</p>
                    </div>
                    <button class="btn btn-primary w-full" type="button" onclick={on_export}>
                        <i class="fa-solid fa-download"></i>
                        {"Export PRO XML"}
                    </button>
                </div>
            </div>
            <div class="card bg-base-200 shadow-xl lg:col-span-2">
                <div class="card-body">
                    <h2 class="card-title">{"Weight by EPR Stream (kg)"}</h2>
                    {
                        match &*report {
                            Fetch::Pending => html! {
                                <div class="p-8 text-center">
                                    <span class="loading loading-spinner"></span>
                                </div>
                            },
                            Fetch::Failed(_) => html! {
                                <div class="p-8 text-center text-sm text-base-content/70">
                                    {"Report unavailable."}
                                </div>
                            },
                            Fetch::Ready(report) => html! {
                                <PieChart series={stream_series(report)} />
                            },
                        }
                    }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SettingsPageProps {
    /// The authenticated user, injected by the routing layer. `None` means
    /// no valid session, which is treated the same as insufficient role.
    #[prop_or_default]
    pub current_user: Option<User>,
}

/// Admin-only settings screen: role configuration and EPR reporting.
#[function_component(SettingsPage)]
pub fn settings_page(props: &SettingsPageProps) -> Html {
    let toast = use_state(|| None::<ToastMessage>);
    let active_tab = use_state(|| SettingsTab::Roles);

    if !is_admin(props.current_user.as_ref()) {
        // Panels are never mounted, so no data is fetched and no mutation
        // capability exists for non-admin sessions.
        return html! {
            <div class="alert alert-error max-w-2xl mx-auto" role="alert">
                <i class="fa-solid fa-shield-halved"></i>
                <div>
                    <h3 class="font-bold">{"Access Denied"}</h3>
                    <div class="text-sm">
                        {"You do not have the required permissions to access the settings page."}
                    </div>
                </div>
            </div>
        };
    }

    let on_notify = {
        let toast = toast.clone();
        Callback::from(move |message: ToastMessage| toast.set(Some(message)))
    };

    let on_dismiss = {
        let toast = toast.clone();
        Callback::from(move |()| toast.set(None))
    };

    let active = *active_tab;
    let tab_button = |tab: SettingsTab, label: &'static str| {
        let active_tab = active_tab.clone();
        let class = if active == tab { "tab tab-active" } else { "tab" };
        html! {
            <a role="tab" {class} onclick={Callback::from(move |_| active_tab.set(tab))}>
                { label }
            </a>
        }
    };

    html! {
        <div class="space-y-8">
            <h1 class="text-3xl font-bold tracking-tight">{"System Settings"}</h1>
            <div role="tablist" class="tabs tabs-boxed w-fit">
                { tab_button(SettingsTab::Roles, "Role Configuration") }
                { tab_button(SettingsTab::Reporting, "EPR Reporting") }
            </div>
            <div class={panel_class(active, SettingsTab::Roles)}>
                <UserRolesPanel on_notify={on_notify.clone()} />
            </div>
            <div class={panel_class(active, SettingsTab::Reporting)}>
                <EprReportingPanel on_notify={on_notify} />
            </div>
            <Toast message={(*toast).clone()} on_dismiss={on_dismiss} />
        </div>
    }
}
