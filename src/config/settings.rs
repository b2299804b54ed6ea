use std::net::{IpAddr, Ipv4Addr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub bind_host: IpAddr,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ViewSettings {
    pub user_agent: &'static str,
    /// chrono format for tournament dates, en-US short month style
    pub date_format: &'static str,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            user_agent: "DotaPlayersView/0.1",
            date_format: "%b %-d, %Y", // Mar 15, 2025
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub view: ViewSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            server: ServerSettings::default(),
            view: ViewSettings::default(),
        }
    }
}
