use std::{
    env,
    net::{AddrParseError, IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use api::state::DEFAULT_MAX_SESSIONS;
use thiserror::Error;

const DEFAULT_LISTEN_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8080);
const DEFAULT_PHOTO_PATH: &str = "my_photo.jpg";
const DEFAULT_LOG_LEVEL: &str = "info";
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub photo_path: PathBuf,
    pub profile_path: Option<PathBuf>,
    pub max_sessions: usize,
    pub log_level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("INTRO_SERVER_ADDR is not a valid socket address: {0}")]
    InvalidListenAddr(#[source] AddrParseError),
    #[error("INTRO_PHOTO_PATH must not be empty or whitespace")]
    InvalidPhotoPath,
    #[error("INTRO_PROFILE_PATH must not be empty or whitespace")]
    InvalidProfilePath,
    #[error("INTRO_MAX_SESSIONS must be a positive integer")]
    InvalidMaxSessions,
    #[error("INTRO_LOG_LEVEL must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel,
    #[error("{0} contains non-unicode data")]
    NonUnicode(&'static str),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let listen_addr = match read_env("INTRO_SERVER_ADDR")? {
            Some(value) => value.parse().map_err(ConfigError::InvalidListenAddr)?,
            None => DEFAULT_LISTEN_ADDR,
        };

        let photo_path = match read_env("INTRO_PHOTO_PATH")? {
            Some(value) => non_blank_path(value).ok_or(ConfigError::InvalidPhotoPath)?,
            None => PathBuf::from(DEFAULT_PHOTO_PATH),
        };

        let profile_path = match read_env("INTRO_PROFILE_PATH")? {
            Some(value) => Some(non_blank_path(value).ok_or(ConfigError::InvalidProfilePath)?),
            None => None,
        };

        let max_sessions = match read_env("INTRO_MAX_SESSIONS")? {
            Some(value) => match value.parse::<usize>() {
                Ok(parsed) if parsed > 0 => parsed,
                _ => return Err(ConfigError::InvalidMaxSessions),
            },
            None => DEFAULT_MAX_SESSIONS,
        };

        let log_level = match read_env("INTRO_LOG_LEVEL")? {
            Some(value) => {
                let level = value.to_ascii_lowercase();
                if !LOG_LEVELS.contains(&level.as_str()) {
                    return Err(ConfigError::InvalidLogLevel);
                }
                level
            }
            None => DEFAULT_LOG_LEVEL.to_owned(),
        };

        Ok(Self {
            listen_addr,
            photo_path,
            profile_path,
            max_sessions,
            log_level,
        })
    }
}

fn read_env(key: &'static str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NonUnicode(key)),
    }
}

fn non_blank_path(value: String) -> Option<PathBuf> {
    if value.trim().is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}

#[cfg(test)]
mod tests {
    use std::{env, path::PathBuf, sync::Mutex};

    use super::{Config, ConfigError};

    static ENV_LOCK: Mutex<()> = Mutex::new(());
    const ENV_ADDR_KEY: &str = "INTRO_SERVER_ADDR";
    const ENV_PHOTO_KEY: &str = "INTRO_PHOTO_PATH";
    const ENV_PROFILE_KEY: &str = "INTRO_PROFILE_PATH";
    const ENV_SESSIONS_KEY: &str = "INTRO_MAX_SESSIONS";
    const ENV_LOG_KEY: &str = "INTRO_LOG_LEVEL";

    struct EnvVarGuard {
        key: &'static str,
        previous: Option<std::ffi::OsString>,
    }

    impl EnvVarGuard {
        fn set(key: &'static str, value: &str) -> Self {
            let previous = env::var_os(key);
            env::set_var(key, value);
            Self { key, previous }
        }

        fn unset(key: &'static str) -> Self {
            let previous = env::var_os(key);
            env::remove_var(key);
            Self { key, previous }
        }

        #[cfg(unix)]
        fn set_os(key: &'static str, value: std::ffi::OsString) -> Self {
            let previous = env::var_os(key);
            env::set_var(key, value);
            Self { key, previous }
        }
    }

    impl Drop for EnvVarGuard {
        fn drop(&mut self) {
            match self.previous.take() {
                Some(value) => env::set_var(self.key, value),
                None => env::remove_var(self.key),
            }
        }
    }

    fn reset_config_env_baseline() -> [EnvVarGuard; 5] {
        [
            EnvVarGuard::unset(ENV_ADDR_KEY),
            EnvVarGuard::unset(ENV_PHOTO_KEY),
            EnvVarGuard::unset(ENV_PROFILE_KEY),
            EnvVarGuard::unset(ENV_SESSIONS_KEY),
            EnvVarGuard::unset(ENV_LOG_KEY),
        ]
    }

    #[test]
    fn defaults_when_env_is_unset() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.photo_path, PathBuf::from("my_photo.jpg"));
        assert_eq!(config.profile_path, None);
        assert_eq!(config.max_sessions, 1024);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn uses_listen_address_override_from_env() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();
        let _guard = EnvVarGuard::set(ENV_ADDR_KEY, "127.0.0.1:9090");

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:9090".parse().unwrap());
    }

    #[test]
    fn returns_error_for_invalid_listen_address_override() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();
        let _guard = EnvVarGuard::set(ENV_ADDR_KEY, "not-an-addr");

        let err = Config::from_env().unwrap_err();

        assert!(matches!(err, ConfigError::InvalidListenAddr(_)));
    }

    #[test]
    fn uses_photo_and_profile_overrides() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();
        let _photo = EnvVarGuard::set(ENV_PHOTO_KEY, "assets/me.png");
        let _profile = EnvVarGuard::set(ENV_PROFILE_KEY, "assets/profile.json");

        let config = Config::from_env().unwrap();

        assert_eq!(config.photo_path, PathBuf::from("assets/me.png"));
        assert_eq!(config.profile_path, Some(PathBuf::from("assets/profile.json")));
    }

    #[test]
    fn returns_error_for_whitespace_photo_path() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();
        let _guard = EnvVarGuard::set(ENV_PHOTO_KEY, "   ");

        let err = Config::from_env().unwrap_err();

        assert!(matches!(err, ConfigError::InvalidPhotoPath));
    }

    #[test]
    fn returns_error_for_empty_profile_path() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();
        let _guard = EnvVarGuard::set(ENV_PROFILE_KEY, "");

        let err = Config::from_env().unwrap_err();

        assert!(matches!(err, ConfigError::InvalidProfilePath));
    }

    #[test]
    fn returns_error_for_zero_or_garbage_max_sessions() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();

        {
            let _guard = EnvVarGuard::set(ENV_SESSIONS_KEY, "0");
            assert!(matches!(
                Config::from_env().unwrap_err(),
                ConfigError::InvalidMaxSessions
            ));
        }

        let _guard = EnvVarGuard::set(ENV_SESSIONS_KEY, "many");
        assert!(matches!(
            Config::from_env().unwrap_err(),
            ConfigError::InvalidMaxSessions
        ));
    }

    #[test]
    fn log_level_is_case_insensitive_and_validated() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();

        {
            let _guard = EnvVarGuard::set(ENV_LOG_KEY, "DEBUG");
            assert_eq!(Config::from_env().unwrap().log_level, "debug");
        }

        let _guard = EnvVarGuard::set(ENV_LOG_KEY, "loud");
        assert!(matches!(
            Config::from_env().unwrap_err(),
            ConfigError::InvalidLogLevel
        ));
    }

    #[cfg(unix)]
    #[test]
    fn returns_error_for_non_unicode_env_var() {
        use std::os::unix::ffi::OsStringExt;

        let _lock = ENV_LOCK.lock().unwrap();
        let _baseline = reset_config_env_baseline();
        let _guard = EnvVarGuard::set_os(
            ENV_ADDR_KEY,
            std::ffi::OsString::from_vec(vec![0x66, 0x6f, 0x80]),
        );

        let err = Config::from_env().unwrap_err();

        assert!(matches!(err, ConfigError::NonUnicode("INTRO_SERVER_ADDR")));
        assert_eq!(err.to_string(), "INTRO_SERVER_ADDR contains non-unicode data");
    }
}
