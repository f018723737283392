use std::env;
use tracing::warn;

/// Largest UTC offset a clinic clock may be configured with (UTC+14 / UTC-14).
const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub clinic_utc_offset_minutes: i32,
    pub default_locale: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            supabase_url: env::var("SUPABASE_URL")
                .unwrap_or_else(|_| {
                    warn!("SUPABASE_URL not set, using empty value");
                    String::new()
                }),
            supabase_anon_key: env::var("SUPABASE_ANON_PUBLIC_KEY")
                .unwrap_or_else(|_| {
                    warn!("SUPABASE_ANON_PUBLIC_KEY not set, using empty value");
                    String::new()
                }),
            clinic_utc_offset_minutes: parse_utc_offset(env::var("CLINIC_UTC_OFFSET_MINUTES").ok()),
            default_locale: env::var("APP_LOCALE")
                .unwrap_or_else(|_| "pt-BR".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.supabase_url.is_empty() && !self.supabase_anon_key.is_empty()
    }
}

fn parse_utc_offset(raw: Option<String>) -> i32 {
    let Some(raw) = raw else {
        return 0;
    };

    match raw.trim().parse::<i32>() {
        Ok(minutes) if minutes.abs() <= MAX_UTC_OFFSET_MINUTES => minutes,
        Ok(minutes) => {
            warn!("CLINIC_UTC_OFFSET_MINUTES={} out of range, clamping", minutes);
            minutes.clamp(-MAX_UTC_OFFSET_MINUTES, MAX_UTC_OFFSET_MINUTES)
        }
        Err(_) => {
            warn!("CLINIC_UTC_OFFSET_MINUTES={} is not a number, using UTC", raw);
            0
        }
    }
}
