//! Host platform detection
//!
//! Two views of the host are needed because the two remote data sources name
//! platforms differently:
//! - [`Platform`]: the structured identifier used by the Chrome for Testing manifests
//! - [`OsFamily`]: the coarse name embedded in legacy bucket object keys

use std::fmt;
use std::str::FromStr;

/// Platform identifier used by the Chrome for Testing manifests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Linux64,
    MacArm64,
    MacX64,
    Win32,
    Win64,
}

impl Platform {
    /// Returns the manifest representation of the platform
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Linux64 => "linux64",
            Platform::MacArm64 => "mac-arm64",
            Platform::MacX64 => "mac-x64",
            Platform::Win32 => "win32",
            Platform::Win64 => "win64",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linux64" => Ok(Platform::Linux64),
            "mac-arm64" => Ok(Platform::MacArm64),
            "mac-x64" => Ok(Platform::MacX64),
            "win32" => Ok(Platform::Win32),
            "win64" => Ok(Platform::Win64),
            _ => Err(format!("unknown platform: {s}")),
        }
    }
}

/// Coarse operating system name found in bucket object keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsFamily {
    Mac,
    Win,
    Linux,
}

impl OsFamily {
    /// Map an OS name to its family. Anything that is not mac or windows is linux.
    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" | "darwin" | "mac" => OsFamily::Mac,
            "windows" | "win32" | "win" => OsFamily::Win,
            _ => OsFamily::Linux,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OsFamily::Mac => "mac",
            OsFamily::Win => "win",
            OsFamily::Linux => "linux",
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operating system family and CPU architecture of the machine drivers are resolved for
///
/// The architecture uses the upstream vocabulary (`x64`, `arm64`, `ia32`),
/// not Rust's (`x86_64`, `aarch64`, `x86`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
    pub os: OsFamily,
    pub arch: String,
}

impl Host {
    /// Build a host from an OS name and an architecture name.
    /// Rust architecture names are translated, unknown ones pass through.
    pub fn new(os: &str, arch: &str) -> Self {
        Self {
            os: OsFamily::from_os(os),
            arch: normalize_arch(arch).to_string(),
        }
    }

    /// Detect the host the process is running on
    pub fn detect() -> Self {
        Self::new(std::env::consts::OS, std::env::consts::ARCH)
    }

    /// Platform identifier used to pick a manifest download
    pub fn platform(&self) -> Platform {
        match (self.os, self.arch.as_str()) {
            (OsFamily::Mac, "x64") => Platform::MacX64,
            (OsFamily::Mac, _) => Platform::MacArm64,
            (OsFamily::Win, "x64") => Platform::Win64,
            (OsFamily::Win, _) => Platform::Win32,
            (OsFamily::Linux, _) => Platform::Linux64,
        }
    }
}

fn normalize_arch(arch: &str) -> &str {
    match arch {
        "x86_64" | "amd64" => "x64",
        "aarch64" => "arm64",
        "x86" | "i386" | "i686" => "ia32",
        other => other,
    }
}
