use std::path::{Path, PathBuf};

use accredit_core::models::user::Role;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const CONFIG_FILE: &str = "config.json";

/// Keys that v0 configs stored at the top level and v1 nests under `profile`.
const V0_PROFILE_KEYS: [&str; 5] = ["name", "email", "role", "language", "timezone"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    pub profile: Profile,
    /// Added in v1.
    #[serde(default)]
    pub notifications: NotificationPrefs,
    #[serde(default)]
    pub system: SystemPrefs,
    pub created_at: jiff::Timestamp,
}

impl AdminConfig {
    pub fn new(profile: Profile, created_at: jiff::Timestamp) -> Self {
        Self {
            config_version: CURRENT_VERSION,
            profile,
            notifications: NotificationPrefs::default(),
            system: SystemPrefs::default(),
            created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub language: Language,
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Admin User".to_string(),
            email: "admin@example.com".to_string(),
            role: Role::Admin,
            language: Language::default(),
            timezone: default_timezone(),
        }
    }
}

fn default_timezone() -> String {
    "UTC+7".to_string()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    English,
    Indonesian,
    Spanish,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPrefs {
    pub email: bool,
    pub browser: bool,
    pub mobile: bool,
    pub weekly_report: bool,
    pub new_assignment: bool,
    pub assessment_completion: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            email: true,
            browser: true,
            mobile: false,
            weekly_report: true,
            new_assignment: true,
            assessment_completion: true,
        }
    }
}

impl NotificationPrefs {
    pub const KEYS: [&str; 6] = [
        "email",
        "browser",
        "mobile",
        "weekly_report",
        "new_assignment",
        "assessment_completion",
    ];

    /// Flip one preference by key. Returns `None` for an unknown key.
    pub fn set(&mut self, key: &str, enabled: bool) -> Option<()> {
        let slot = match key {
            "email" => &mut self.email,
            "browser" => &mut self.browser,
            "mobile" => &mut self.mobile,
            "weekly_report" => &mut self.weekly_report,
            "new_assignment" => &mut self.new_assignment,
            "assessment_completion" => &mut self.assessment_completion,
            _ => return None,
        };
        *slot = enabled;
        Some(())
    }

    pub fn get(&self, key: &str) -> Option<bool> {
        match key {
            "email" => Some(self.email),
            "browser" => Some(self.browser),
            "mobile" => Some(self.mobile),
            "weekly_report" => Some(self.weekly_report),
            "new_assignment" => Some(self.new_assignment),
            "assessment_completion" => Some(self.assessment_completion),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemPrefs {
    pub automatic_backups: bool,
    pub backup_frequency: BackupFrequency,
}

impl Default for SystemPrefs {
    fn default() -> Self {
        Self {
            automatic_backups: true,
            backup_frequency: BackupFrequency::Daily,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackupFrequency {
    Hourly,
    Daily,
    Weekly,
    Monthly,
}

pub fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.accredit.admin"))
}

fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE))
}

pub fn has_config() -> bool {
    config_path().map(|p| p.exists()).unwrap_or(false)
}

pub fn load_config() -> eyre::Result<AdminConfig> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(path: &Path) -> eyre::Result<AdminConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: AdminConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update accredit-admin."
        ));
    }

    // v0 → v1: profile fields move under `profile`, notifications added
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;

        // A nested `profile` wins over a flat key of the same name.
        let mut profile = match obj.remove("profile") {
            Some(serde_json::Value::Object(existing)) => existing,
            _ => serde_json::Map::new(),
        };
        for key in V0_PROFILE_KEYS {
            let Some(value) = obj.remove(key) else {
                continue;
            };
            if profile.contains_key(key) {
                tracing::warn!(key, "flat v0 profile key shadowed by nested profile, dropped");
            } else {
                profile.insert(key.to_string(), value);
            }
        }
        obj.insert("profile".to_string(), serde_json::Value::Object(profile));
        obj.entry("notifications")
            .or_insert(serde_json::to_value(NotificationPrefs::default())?);
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (nested profile, added notifications)");
    }

    Ok(json)
}

pub fn save_config_to(dir: &Path, config: &AdminConfig) -> eyre::Result<()> {
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
