use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Development API port used when the console is served from a loopback or LAN host.
pub const DEV_API_PORT: u16 = 8000;
pub const DEFAULT_PUSH_KEY: &str = "a1b2c3d4e5f6a7b8c9d0";
pub const DEFAULT_PUSH_CLUSTER: &str = "ap1";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
    #[serde(default, alias = "PUSH_KEY")]
    pub push_key: Option<String>,
    #[serde(default, alias = "PUSH_CLUSTER")]
    pub push_cluster: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushConfig {
    pub key: String,
    pub cluster: String,
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

fn is_private_ipv4(host: &str) -> bool {
    let octets: Vec<u8> = match host
        .split('.')
        .map(|part| part.parse::<u8>())
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(octets) if octets.len() == 4 => octets,
        _ => return false,
    };
    match (octets[0], octets[1]) {
        (10, _) | (127, _) => true,
        (192, 168) => true,
        (172, second) => (16..=31).contains(&second),
        _ => false,
    }
}

pub fn is_local_host(hostname: &str) -> bool {
    let host = hostname.trim().trim_start_matches('[').trim_end_matches(']');
    host.eq_ignore_ascii_case("localhost") || host == "::1" || is_private_ipv4(host)
}

/// Derives the API base from where the console is served.
pub fn api_base_for_host(hostname: &str, origin: &str) -> String {
    if is_local_host(hostname) {
        let host = if hostname.contains(':') && !hostname.starts_with('[') {
            format!("[{}]", hostname)
        } else {
            hostname.to_string()
        };
        format!("http://{}:{}/api", host, DEV_API_PORT)
    } else {
        format!("{}/api", origin.trim_end_matches('/'))
    }
}

pub fn push_config_from(cfg: &RuntimeConfig) -> PushConfig {
    PushConfig {
        key: cfg
            .push_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PUSH_KEY.to_string()),
        cluster: cfg
            .push_cluster
            .clone()
            .filter(|cluster| !cluster.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PUSH_CLUSTER.to_string()),
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;

    fn read_key(obj: &js_sys::Object, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(obj, &(*key).into())
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
                .and_then(|v| v.as_string())
        })
    }

    /// Reads the optional `window.__TRAVEL_ADMIN_ENV = { API_BASE_URL, PUSH_KEY, PUSH_CLUSTER }`.
    pub fn from_env_js() -> Option<RuntimeConfig> {
        let w = web_sys::window()?;
        let any = js_sys::Reflect::get(&w, &"__TRAVEL_ADMIN_ENV".into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        Some(RuntimeConfig {
            api_base_url: read_key(&obj, &["API_BASE_URL", "api_base_url"]),
            push_key: read_key(&obj, &["PUSH_KEY", "push_key"]),
            push_cluster: read_key(&obj, &["PUSH_CLUSTER", "push_cluster"]),
        })
    }

    pub async fn fetch_config_json() -> Option<RuntimeConfig> {
        let resp = reqwest::get("./config.json").await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }

    pub fn host_and_origin() -> Option<(String, String)> {
        let location = web_sys::window()?.location();
        Some((location.hostname().ok()?, location.origin().ok()?))
    }
}

async fn load_runtime_config() -> RuntimeConfig {
    #[cfg(target_arch = "wasm32")]
    {
        let mut cfg = match browser::from_env_js() {
            Some(cfg) => cfg,
            None => browser::fetch_config_json().await.unwrap_or_default(),
        };
        if cfg.api_base_url.is_none() {
            if let Some((host, origin)) = browser::host_and_origin() {
                cfg.api_base_url = Some(api_base_for_host(&host, &origin));
            }
        }
        cfg
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        RuntimeConfig::default()
    }
}

pub async fn runtime_config() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    let loaded = load_runtime_config().await;
    RUNTIME_CONFIG.get_or_init(|| loaded).clone()
}

pub async fn await_api_base_url() -> String {
    runtime_config()
        .await
        .api_base_url
        .unwrap_or_else(|| api_base_for_host("localhost", "http://localhost"))
}

pub async fn push_config() -> PushConfig {
    push_config_from(&runtime_config().await)
}

pub async fn init() {
    let cfg = runtime_config().await;
    log::info!(
        "runtime config loaded (api base: {})",
        cfg.api_base_url.as_deref().unwrap_or("default")
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loopback_hosts_use_dev_port() {
        assert_eq!(
            api_base_for_host("localhost", "http://localhost:5173"),
            "http://localhost:8000/api"
        );
        assert_eq!(
            api_base_for_host("127.0.0.1", "http://127.0.0.1:5173"),
            "http://127.0.0.1:8000/api"
        );
        assert_eq!(api_base_for_host("::1", "http://[::1]:5173"), "http://[::1]:8000/api");
    }

    #[test]
    fn private_lan_hosts_use_dev_port() {
        assert_eq!(
            api_base_for_host("192.168.1.20", "http://192.168.1.20:5173"),
            "http://192.168.1.20:8000/api"
        );
        assert!(is_local_host("10.0.0.4"));
        assert!(is_local_host("172.20.1.1"));
        assert!(!is_local_host("172.32.1.1"));
        assert!(!is_local_host("8.8.8.8"));
    }

    #[test]
    fn public_hosts_use_same_origin_api() {
        assert_eq!(
            api_base_for_host("travel.example.gov.ph", "https://travel.example.gov.ph/"),
            "https://travel.example.gov.ph/api"
        );
    }

    #[test]
    fn push_config_falls_back_to_defaults() {
        let cfg = RuntimeConfig {
            api_base_url: None,
            push_key: Some("  ".into()),
            push_cluster: Some("mt1".into()),
        };
        let push = push_config_from(&cfg);
        assert_eq!(push.key, DEFAULT_PUSH_KEY);
        assert_eq!(push.cluster, "mt1");
    }

    #[test]
    fn runtime_config_accepts_upper_case_keys() {
        let cfg: RuntimeConfig = serde_json::from_value(serde_json::json!({
            "API_BASE_URL": "https://api.example/api",
            "PUSH_KEY": "k"
        }))
        .unwrap();
        assert_eq!(cfg.api_base_url.as_deref(), Some("https://api.example/api"));
        assert_eq!(cfg.push_key.as_deref(), Some("k"));
        assert!(cfg.push_cluster.is_none());
    }
}
