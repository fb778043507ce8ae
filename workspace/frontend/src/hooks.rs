use yew::prelude::*;

use crate::api_client::prediction::check_health;

/// Reachability of the forecasting backend
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BackendStatus {
    Checking,
    Online,
    Offline,
}

impl BackendStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BackendStatus::Checking => "Checking backend",
            BackendStatus::Online => "Backend online",
            BackendStatus::Offline => "Backend offline",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            BackendStatus::Checking => "badge-ghost",
            BackendStatus::Online => "badge-success",
            BackendStatus::Offline => "badge-error",
        }
    }
}

/// Probe `/health` once on mount.
#[hook]
pub fn use_backend_health() -> BackendStatus {
    let status = use_state(|| BackendStatus::Checking);

    {
        let status = status.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let next = match check_health().await {
                    Ok(health) if health.is_ok() => BackendStatus::Online,
                    Ok(health) => {
                        log::warn!("Backend reported status: {}", health.status);
                        BackendStatus::Offline
                    }
                    Err(e) => {
                        log::warn!("Health check failed: {}", e);
                        BackendStatus::Offline
                    }
                };
                status.set(next);
            });
            || ()
        });
    }

    *status
}
