//! Station identity type.

use std::fmt;

/// An opaque station identity.
///
/// Stations are identified by the name the upstream loader resolved for
/// them. The core treats the value purely as a map/set key and as a row
/// label; it never interprets the contents.
///
/// # Examples
///
/// ```
/// use timetable_gen::domain::Station;
///
/// let a = Station::new("Ashford");
/// let b = Station::new("Ashford");
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "Ashford");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Station(String);

impl Station {
    /// Create a station from its resolved name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the station name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({})", self.0)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Station {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Station {
    fn from(name: String) -> Self {
        Self(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality() {
        assert_eq!(Station::new("York"), Station::new("York"));
        assert_ne!(Station::new("York"), Station::new("Leeds"));
    }

    #[test]
    fn display() {
        assert_eq!(Station::new("King's Cross").to_string(), "King's Cross");
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Station::new("York")), "Station(York)");
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Station::new("York"));
        assert!(set.contains(&Station::new("York")));
        assert!(!set.contains(&Station::new("Leeds")));
    }
}
