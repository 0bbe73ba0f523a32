use serde::{Deserialize, Serialize};
use std::fmt;

/// CRUD action a role may be granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
}

impl Action {
    pub fn code(self) -> char {
        match self {
            Action::Create => 'c',
            Action::Read => 'r',
            Action::Update => 'u',
            Action::Delete => 'd',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'c' => Some(Action::Create),
            'r' => Some(Action::Read),
            'u' => Some(Action::Update),
            'd' => Some(Action::Delete),
            _ => None,
        }
    }
}

/// One-character role code, e.g. `a` for admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Role(pub char);

impl Role {
    /// Wildcard marker: any role, including anonymous visitors.
    pub const ANY: Role = Role('*');

    pub fn is_any(self) -> bool {
        self == Role::ANY
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single sprite symbol: `id` is referenced from `<use href="#id">`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Icon {
    pub id: String,
    pub svg: String,
}

impl Icon {
    pub fn new(id: impl Into<String>, svg: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            svg: svg.into(),
        }
    }
}
