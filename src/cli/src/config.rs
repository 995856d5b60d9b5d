use std::{
    fmt, fs,
    ops::Index,
    path::{Path, PathBuf},
    str::FromStr,
};

use color_eyre::eyre::WrapErr;
use fmc_core::Face;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Settings for the `fmc` command line tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub colors: FaceColors,
}

impl Config {
    /// Reads the configuration at `path`, or at the default location if none
    /// is given. A missing default file means the default configuration; a
    /// missing explicit file is an error.
    pub fn load(path: Option<&Path>) -> color_eyre::Result<Config> {
        let path = match path {
            Some(path) => path.to_owned(),
            None => match default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    debug!("No configuration file found; using the defaults");
                    return Ok(Config::default());
                }
            },
        };

        info!("Reading configuration from {}", path.display());

        let text = fs::read_to_string(&path)
            .wrap_err_with(|| format!("Failed to read configuration file {}", path.display()))?;

        toml::from_str(&text)
            .wrap_err_with(|| format!("Failed to parse configuration file {}", path.display()))
    }
}

fn default_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push("fmc");
    path.push("config.toml");
    Some(path)
}

/// The sticker color drawn for each face.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceColors {
    pub u: HexColor,
    pub r: HexColor,
    pub f: HexColor,
    pub d: HexColor,
    pub l: HexColor,
    pub b: HexColor,
}

impl Default for FaceColors {
    fn default() -> Self {
        FaceColors {
            u: HexColor(0xff, 0xff, 0xff),
            r: HexColor(0xff, 0x00, 0x00),
            f: HexColor(0x00, 0xff, 0x00),
            d: HexColor(0xff, 0xff, 0x00),
            l: HexColor(0xff, 0x80, 0x00),
            b: HexColor(0x00, 0x00, 0xff),
        }
    }
}

impl Index<Face> for FaceColors {
    type Output = HexColor;

    fn index(&self, index: Face) -> &Self::Output {
        match index {
            Face::U => &self.u,
            Face::R => &self.r,
            Face::F => &self.f,
            Face::D => &self.d,
            Face::L => &self.l,
            Face::B => &self.b,
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ColorError {
    #[error("Expected a color of the form `#rrggbb`, found {0:?}")]
    Malformed(String),
}

/// An RGB color written as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(pub u8, pub u8, pub u8);

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ColorError::Malformed(s.to_owned());

        let hex = s.strip_prefix('#').ok_or_else(malformed)?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(malformed());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| malformed());

        Ok(HexColor(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for HexColor {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.to_string()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}
