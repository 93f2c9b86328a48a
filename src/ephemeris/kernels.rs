//! Furnishing SPICE kernel files into the toolkit almanac

use std::path::{Path, PathBuf};

use anise::prelude::Almanac;

use crate::error::EphemerisError;

/// How a kernel file is handled, decided by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelKind {
    /// Binary SPK ephemeris (.bsp, .spk)
    Spk,
    /// Binary planetary constants (.bpc)
    Bpc,
    /// Toolkit-native planetary data (.pca, .anise)
    Native,
    /// Text kernel (.tls, .tf, .tpc); not loaded
    Text,
    /// Meta-kernel (.tm); neither it nor the kernels it lists are loaded
    Meta,
}

impl KernelKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "bsp" | "spk" => Some(KernelKind::Spk),
            "bpc" => Some(KernelKind::Bpc),
            "pca" | "anise" => Some(KernelKind::Native),
            "tls" | "tf" | "tpc" => Some(KernelKind::Text),
            "tm" => Some(KernelKind::Meta),
            _ => None,
        }
    }
}

/// An almanac together with the record of what went into it
pub struct LoadedKernels {
    pub almanac: Almanac,
    pub loaded: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Load every kernel in order into a single almanac
pub fn load_kernels<P: AsRef<Path>>(paths: &[P]) -> Result<LoadedKernels, EphemerisError> {
    tracing::info!("Loading {} ephemeris kernels", paths.len());

    let mut almanac = Almanac::default();
    let mut loaded = Vec::new();
    let mut skipped = Vec::new();

    for path in paths {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(EphemerisError::KernelNotFound(path.to_path_buf()));
        }

        match KernelKind::from_path(path) {
            Some(KernelKind::Text) => {
                // Leap seconds come from the toolkit's built-in table and all
                // queries are in J2000, so text kernels carry nothing we use.
                tracing::warn!("Skipping text kernel {}", path.display());
                skipped.push(path.to_path_buf());
                continue;
            }
            Some(KernelKind::Meta) => {
                tracing::warn!(
                    "Skipping meta-kernel {}: the kernels in its KERNELS_TO_LOAD are not \
                     loaded, list them in EPHEM_KERNELS instead",
                    path.display()
                );
                skipped.push(path.to_path_buf());
                continue;
            }
            Some(kind) => tracing::debug!("Loading {:?} kernel {}", kind, path.display()),
            None => tracing::debug!("Loading kernel {} of unknown kind", path.display()),
        }

        almanac = almanac
            .load(&path.to_string_lossy())
            .map_err(|e| EphemerisError::KernelLoad {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        loaded.push(path.to_path_buf());
    }

    if loaded.is_empty() {
        return Err(EphemerisError::NoKernels);
    }

    tracing::info!(
        "Loaded {} kernels ({} skipped)",
        loaded.len(),
        skipped.len()
    );

    Ok(LoadedKernels {
        almanac,
        loaded,
        skipped,
    })
}
