//! Service configuration from environment variables
//!
//! - `HOST`: bind host (default: 0.0.0.0)
//! - `PORT`: bind port (default: 5000)
//! - `EPHEM_DATA_DIR`: directory holding the kernels (default: `./data` when
//!   present, otherwise the platform data directory)
//! - `EPHEM_KERNELS`: comma separated kernel files, relative to the data dir
//! - `SPACECRAFT_ID`: NAIF id of the spacecraft (default: 23)
//! - `ORBIT_STEP_SECS`: spacing of orbit samples (default: 3600)
//! - `ORBIT_START_OFFSET_SECS`: offset of the first sample from the start of
//!   coverage, 0 to 86400 (default: 1)

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::Duration;
use directories::ProjectDirs;

use crate::ephemeris::{Body, NaifId, ARTEMIS};
use crate::error::ConfigError;

pub const DEFAULT_KERNELS: &[&str] = &[
    "naif0012.tls",
    "orion.spk",
    "earth_assoc_itrf93.tf",
    "de430.bsp",
    "latest_leapseconds.tls",
];

/// First orbit sample may sit at most one day past the start of coverage
pub const MAX_ORBIT_OFFSET_SECS: i64 = 86_400;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    pub kernels: Vec<PathBuf>,
    pub spacecraft_id: NaifId,
    pub orbit_step: Duration,
    pub orbit_offset: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from any variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_var(&lookup, "PORT", 5000)?;

        let data_dir = lookup("EPHEM_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        let kernels: Vec<PathBuf> = match lookup("EPHEM_KERNELS") {
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(|name| resolve(&data_dir, name))
                .collect(),
            None => DEFAULT_KERNELS
                .iter()
                .map(|name| resolve(&data_dir, name))
                .collect(),
        };
        if kernels.is_empty() {
            return Err(ConfigError::NoKernels);
        }

        let spacecraft_id = parse_var(&lookup, "SPACECRAFT_ID", ARTEMIS)?;

        let step_secs: i64 = parse_var(&lookup, "ORBIT_STEP_SECS", 3600)?;
        if step_secs <= 0 {
            return Err(ConfigError::NotPositive {
                name: "ORBIT_STEP_SECS",
                value: step_secs,
            });
        }
        let orbit_step = seconds("ORBIT_STEP_SECS", step_secs)?;

        let offset_secs: i64 = parse_var(&lookup, "ORBIT_START_OFFSET_SECS", 1)?;
        if !(0..=MAX_ORBIT_OFFSET_SECS).contains(&offset_secs) {
            return Err(ConfigError::OutOfRange {
                name: "ORBIT_START_OFFSET_SECS",
                value: offset_secs,
                min: 0,
                max: MAX_ORBIT_OFFSET_SECS,
            });
        }
        let orbit_offset = seconds("ORBIT_START_OFFSET_SECS", offset_secs)?;

        Ok(Self {
            host,
            port,
            data_dir,
            kernels,
            spacecraft_id,
            orbit_step,
            orbit_offset,
        })
    }

    pub fn spacecraft(&self) -> Body {
        Body::Spacecraft(self.spacecraft_id)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        None => Ok(default),
    }
}

fn seconds(name: &'static str, secs: i64) -> Result<Duration, ConfigError> {
    Duration::try_seconds(secs).ok_or(ConfigError::InvalidValue {
        name,
        value: secs.to_string(),
    })
}

fn resolve(data_dir: &Path, name: &str) -> PathBuf {
    let path = Path::new(name);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        data_dir.join(path)
    }
}

fn default_data_dir() -> PathBuf {
    let local = PathBuf::from("data");
    if local.is_dir() {
        return local;
    }
    if let Some(proj_dirs) = ProjectDirs::from("com", "artemis-ephem", "artemis-ephem") {
        proj_dirs.data_dir().to_path_buf()
    } else {
        local
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[("EPHEM_DATA_DIR", "/srv/kernels")]).unwrap();

        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
        assert_eq!(config.spacecraft(), Body::Spacecraft(23));
        assert_eq!(config.orbit_step, Duration::hours(1));
        assert_eq!(config.orbit_offset, Duration::seconds(1));
        assert_eq!(config.kernels.len(), DEFAULT_KERNELS.len());
        assert_eq!(config.kernels[1], PathBuf::from("/srv/kernels/orion.spk"));
    }

    #[test]
    fn test_kernel_list() {
        let config = config(&[
            ("EPHEM_DATA_DIR", "/srv/kernels"),
            ("EPHEM_KERNELS", "orion.spk, /opt/de440s.bsp,,"),
        ])
        .unwrap();

        assert_eq!(
            config.kernels,
            vec![
                PathBuf::from("/srv/kernels/orion.spk"),
                PathBuf::from("/opt/de440s.bsp"),
            ]
        );
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("SPACECRAFT_ID", "-1023"),
            ("ORBIT_STEP_SECS", "600"),
            ("ORBIT_START_OFFSET_SECS", "0"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.spacecraft_id, -1023);
        assert_eq!(config.orbit_step, Duration::minutes(10));
        assert_eq!(config.orbit_offset, Duration::zero());
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            config(&[("PORT", "http")]),
            Err(ConfigError::InvalidValue { name: "PORT", .. })
        ));
        assert!(matches!(
            config(&[("ORBIT_STEP_SECS", "0")]),
            Err(ConfigError::NotPositive { .. })
        ));
        assert!(matches!(
            config(&[("ORBIT_STEP_SECS", "9223372036854775807")]),
            Err(ConfigError::InvalidValue { name: "ORBIT_STEP_SECS", .. })
        ));
        assert!(matches!(
            config(&[("ORBIT_START_OFFSET_SECS", "9223372036854775807")]),
            Err(ConfigError::OutOfRange { name: "ORBIT_START_OFFSET_SECS", .. })
        ));
        assert!(matches!(
            config(&[("ORBIT_START_OFFSET_SECS", "9000000000000000")]),
            Err(ConfigError::OutOfRange { .. })
        ));
        assert!(matches!(
            config(&[("ORBIT_START_OFFSET_SECS", "-1")]),
            Err(ConfigError::OutOfRange { value: -1, .. })
        ));
        assert!(config(&[("ORBIT_START_OFFSET_SECS", "86400")]).is_ok());
        assert!(matches!(
            config(&[("EPHEM_KERNELS", " , ")]),
            Err(ConfigError::NoKernels)
        ));
    }
}
