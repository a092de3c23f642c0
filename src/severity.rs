/// Log severity levels (0-4, higher is more severe).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Fine-grained diagnostic messages.
    Debug = 0,
    /// Normal operational messages.
    Info = 1,
    /// Suspicious conditions that do not prevent progress.
    Warning = 2,
    /// Failures the application may recover from.
    Error = 3,
    /// Failures that usually precede shutdown.
    Critical = 4,
}

impl Severity {
    /// Numeric value of the severity (0-4).
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Fixed label written at the head of every record body.
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }

    /// Create a severity from its numeric value, if valid (0-4).
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Severity::Debug),
            1 => Some(Severity::Info),
            2 => Some(Severity::Warning),
            3 => Some(Severity::Error),
            4 => Some(Severity::Critical),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::Critical);
    }

    #[test]
    fn test_severity_values() {
        assert_eq!(Severity::Debug.as_u8(), 0);
        assert_eq!(Severity::Info.as_u8(), 1);
        assert_eq!(Severity::Warning.as_u8(), 2);
        assert_eq!(Severity::Error.as_u8(), 3);
        assert_eq!(Severity::Critical.as_u8(), 4);
    }

    #[test]
    fn test_severity_from_u8_roundtrip() {
        for value in 0..=4 {
            let severity = Severity::from_u8(value).unwrap();
            assert_eq!(severity.as_u8(), value);
        }
        assert_eq!(Severity::from_u8(5), None);
        assert_eq!(Severity::from_u8(u8::MAX), None);
    }

    #[test]
    fn test_severity_labels() {
        assert_eq!(Severity::Debug.as_str(), "DEBUG");
        assert_eq!(Severity::Info.as_str(), "INFO");
        assert_eq!(Severity::Warning.as_str(), "WARNING");
        assert_eq!(Severity::Error.as_str(), "ERROR");
        assert_eq!(Severity::Critical.as_str(), "CRITICAL");
        assert_eq!(format!("{}", Severity::Warning), "WARNING");
    }
}
