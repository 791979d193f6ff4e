use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

/// A semantic `major.minor.patch` version.
///
/// Serializes to and from its string form (`"1.2.3"`), which is also the
/// form embedded into generated-code attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Version {
    major: u32,
    minor: u32,
    patch: u32,
}

impl Version {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl TryFrom<String> for Version {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('.');
        let mut component = |name: &str| -> Result<u32, String> {
            parts
                .next()
                .ok_or_else(|| format!("invalid version '{s}', expected 'X.Y.Z'"))?
                .parse()
                .map_err(|_| format!("invalid {name} component in version '{s}'"))
        };

        let version = Self {
            major: component("major")?,
            minor: component("minor")?,
            patch: component("patch")?,
        };
        if parts.next().is_some() {
            return Err(format!("invalid version '{s}', expected 'X.Y.Z'"));
        }
        Ok(version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Version::new(1, 2, 3).to_string(), "1.2.3");
        assert_eq!(Version::new(0, 1, 0).to_string(), "0.1.0");
        assert_eq!(Version::default().to_string(), "0.0.0");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("1.2.3".parse::<Version>().unwrap(), Version::new(1, 2, 3));
        assert_eq!(
            "10.20.30".parse::<Version>().unwrap(),
            Version::new(10, 20, 30)
        );
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("1.2".parse::<Version>().is_err());
        assert!("1.2.3.4".parse::<Version>().is_err());
        assert!("a.b.c".parse::<Version>().is_err());
        assert!("1.2.x".parse::<Version>().is_err());
        assert!("".parse::<Version>().is_err());
    }

    #[test]
    fn test_serialize() {
        #[derive(Serialize)]
        struct Tool {
            version: Version,
        }
        let tool = Tool {
            version: Version::new(1, 2, 3),
        };
        let toml = toml::to_string(&tool).unwrap();
        assert_eq!(toml.trim(), r#"version = "1.2.3""#);
    }

    #[test]
    fn test_deserialize() {
        #[derive(Deserialize)]
        struct Tool {
            version: Version,
        }
        let tool: Tool = toml::from_str(r#"version = "0.4.1""#).unwrap();
        assert_eq!(tool.version, Version::new(0, 4, 1));
    }
}
