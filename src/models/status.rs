use serde::Serialize;
use std::fmt;

/// What the user can do with a day right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    /// Today, no open session: the next punch checks in.
    Available,
    /// Today, the last session is open: the next punch checks out.
    Working,
    /// Any other day: entries can be corrected but not punched.
    ViewingPast,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Available => "Available",
            Status::Working => "Working",
            Status::ViewingPast => "ViewingPast",
        }
    }

    /// Label of the action a punch would perform.
    pub fn next_action(&self) -> Option<&'static str> {
        match self {
            Status::Available => Some("Check-in"),
            Status::Working => Some("Check-out"),
            Status::ViewingPast => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
