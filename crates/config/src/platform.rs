str_enum! {
    /// A recognized build target platform.
    #[derive(strum::EnumIs)]
    #[strum(serialize_all = "lowercase")]
    pub enum Platform {
        Windows,
        Ubuntu,
        Linux,
        MacOsX,
    }
}

cfg_if::cfg_if! {
    if #[cfg(windows)] {
        const HOST: Platform = Platform::Windows;
    } else if #[cfg(all(target_os = "linux", feature = "ubuntu"))] {
        const HOST: Platform = Platform::Ubuntu;
    } else if #[cfg(target_os = "linux")] {
        const HOST: Platform = Platform::Linux;
    } else if #[cfg(target_os = "macos")] {
        const HOST: Platform = Platform::MacOsX;
    } else {
        compile_error!(
            "unrecognized target platform; expected Windows, Ubuntu/generic Linux, or macOS"
        );
    }
}

impl Platform {
    /// The platform this binary was built for.
    pub const HOST: Self = HOST;

    /// Returns the human-readable identifier for `self`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Windows => "Windows XP x86",
            Self::Ubuntu => "Ubuntu i386",
            Self::Linux => "Linux",
            Self::MacOsX => "MacOSX x64",
        }
    }
}

/// The platform identifier compiled into the application.
pub const PLATFORM_NAME: &str = Platform::HOST.name();

/// Returns the platform identifier selected at build time.
pub const fn platform_name() -> &'static str {
    PLATFORM_NAME
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn host_platform() {
        assert!(!platform_name().is_empty());
        assert_eq!(platform_name(), PLATFORM_NAME);
        assert_eq!(PLATFORM_NAME, Platform::HOST.name());
    }

    #[test]
    fn identifiers() {
        for platform in Platform::iter() {
            let s = platform.to_str();
            assert_eq!(platform.to_string(), s);
            assert_eq!(platform, s.parse().unwrap());
            assert!(!platform.name().is_empty());

            let json_s = format!("\"{platform}\"");
            assert_eq!(serde_json::to_string(&platform).unwrap(), json_s);
            assert_eq!(serde_json::from_str::<Platform>(&json_s).unwrap(), platform);
        }
    }

    #[test]
    fn names_unique() {
        let names: Vec<_> = Platform::iter().map(Platform::name).collect();
        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), names.len());
    }

    #[cfg(all(target_os = "linux", not(feature = "ubuntu")))]
    #[test]
    fn linux_name() {
        assert_eq!(PLATFORM_NAME, "Linux");
    }

    #[cfg(all(target_os = "linux", feature = "ubuntu"))]
    #[test]
    fn ubuntu_name() {
        assert_eq!(PLATFORM_NAME, "Ubuntu i386");
    }

    #[cfg(windows)]
    #[test]
    fn windows_name() {
        assert_eq!(PLATFORM_NAME, "Windows XP x86");
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn macos_name() {
        assert_eq!(PLATFORM_NAME, "MacOSX x64");
    }
}
