//! The two-category agent type tag.

use std::fmt;

/// Which of the two populations an agent belongs to.
///
/// Fixed at creation; nothing in the engine ever mutates it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum AgentKind {
    #[default]
    Majority = 0,
    Minority = 1,
}

impl AgentKind {
    /// Numeric tag (`0` majority, `1` minority), as used by plotting tools.
    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// The other population.
    #[inline]
    pub fn other(self) -> AgentKind {
        match self {
            AgentKind::Majority => AgentKind::Minority,
            AgentKind::Minority => AgentKind::Majority,
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AgentKind::Majority => "majority",
            AgentKind::Minority => "minority",
        };
        f.write_str(s)
    }
}
