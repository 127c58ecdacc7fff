//! Consist (equipment) references.

use std::fmt;

/// One unit of the equipment operating a trip, with its orientation.
///
/// A trip may reference several components; a coupled train is rendered by
/// joining the components with `+`. Because `+` and `$` are reserved in the
/// timetable format, an id containing either must be bracketed as `<id>`,
/// and a bracketed reversed unit takes `$reverse` with no separating space.
///
/// # Examples
///
/// ```
/// use timetable_gen::domain::ConsistComponent;
///
/// assert_eq!(ConsistComponent::new("AC44W", false).to_string(), "AC44W");
/// assert_eq!(ConsistComponent::new("AC44W", true).to_string(), "AC44W $reverse");
/// assert_eq!(ConsistComponent::new("A+B", true).to_string(), "<A+B>$reverse");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsistComponent {
    consist: String,
    reverse: bool,
}

impl ConsistComponent {
    /// Create a component from an equipment id and its orientation.
    pub fn new(consist: impl Into<String>, reverse: bool) -> Self {
        Self {
            consist: consist.into(),
            reverse,
        }
    }

    /// Returns the raw equipment id.
    pub fn consist(&self) -> &str {
        &self.consist
    }

    /// Whether the unit runs reversed.
    pub fn reverse(&self) -> bool {
        self.reverse
    }
}

impl fmt::Display for ConsistComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.consist.contains(['+', '$']) {
            if self.reverse {
                write!(f, "<{}>$reverse", self.consist)
            } else {
                write!(f, "<{}>", self.consist)
            }
        } else if self.reverse {
            write!(f, "{} $reverse", self.consist)
        } else {
            f.write_str(&self.consist)
        }
    }
}
