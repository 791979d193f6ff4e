//! Line-terminator selection.

/// Host platform family, as far as line terminators are concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    /// The platform this library was compiled for.
    pub const fn host() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }
}

/// Line terminator appended after every written line.
///
/// The default follows the host platform convention; callers that need
/// deterministic cross-platform output should pick a terminator explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Newline {
    /// `\n` (Unix convention).
    Lf,
    /// `\r\n` (Windows convention).
    CrLf,
}

impl Newline {
    /// The conventional terminator for `platform`.
    pub const fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Windows => Self::CrLf,
            Platform::Unix => Self::Lf,
        }
    }

    /// The terminator characters.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

impl Default for Newline {
    fn default() -> Self {
        Self::for_platform(Platform::host())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str() {
        assert_eq!(Newline::Lf.as_str(), "\n");
        assert_eq!(Newline::CrLf.as_str(), "\r\n");
    }

    #[test]
    fn test_for_platform() {
        assert_eq!(Newline::for_platform(Platform::Windows), Newline::CrLf);
        assert_eq!(Newline::for_platform(Platform::Unix), Newline::Lf);
    }

    #[test]
    fn test_default_matches_host() {
        assert_eq!(Newline::default(), Newline::for_platform(Platform::host()));
    }
}
