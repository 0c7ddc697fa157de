use std::{fmt, str::FromStr};

/// The version number compiled into the application, as `(major, minor, patch, build)`.
pub const APP_VERSION: AppVersion = AppVersion::new(10, 2, 7, 3);

/// The short version information.
pub const SHORT_VERSION: &str = env!("SHORT_VERSION");

/// The long version information.
pub const LONG_VERSION: &str = concat!(
    env!("LONG_VERSION0"),
    "\n",
    env!("LONG_VERSION1"),
    "\n",
    env!("LONG_VERSION2"),
    "\n",
    env!("LONG_VERSION3"),
);

/// Returns the application version as its 4 integer components.
pub const fn app_version() -> [i32; 4] {
    APP_VERSION.to_array()
}

/// A 4-component application version number.
///
/// Ordering is lexicographic over `(major, minor, patch, build)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AppVersion {
    pub major: i32,
    pub minor: i32,
    pub patch: i32,
    pub build: i32,
}

impl AppVersion {
    pub const fn new(major: i32, minor: i32, patch: i32, build: i32) -> Self {
        Self { major, minor, patch, build }
    }

    pub const fn from_array([major, minor, patch, build]: [i32; 4]) -> Self {
        Self::new(major, minor, patch, build)
    }

    pub const fn to_array(self) -> [i32; 4] {
        [self.major, self.minor, self.patch, self.build]
    }
}

impl fmt::Display for AppVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}.{}", self.major, self.minor, self.patch, self.build)
    }
}

impl FromStr for AppVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('.');
        let mut next = |name: &str| {
            let part = parts.next().ok_or_else(|| format!("missing {name} component"))?;
            part.parse::<i32>().map_err(|e| format!("invalid {name} component {part:?}: {e}"))
        };
        let version = Self::new(next("major")?, next("minor")?, next("patch")?, next("build")?);
        if parts.next().is_some() {
            return Err("expected exactly 4 components".to_string());
        }
        Ok(version)
    }
}

impl serde::Serialize for AppVersion {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for AppVersion {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct Visitor;

        impl serde::de::Visitor<'_> for Visitor {
            type Value = AppVersion;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a version string like \"10.2.7.3\"")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(Visitor)
    }
}
