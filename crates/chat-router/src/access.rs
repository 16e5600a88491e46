//! Channel based access control.
//!
//! A role (e.g. `general`, `admin`) is mapped to one transport channel. A
//! command lists the roles it may run under; a message is allowed when it
//! arrived on the channel of one of those roles.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Role for everyday commands.
pub const ROLE_GENERAL: &str = "general";

/// Role for privileged commands.
pub const ROLE_ADMIN: &str = "admin";

/// Mapping from role to transport channel id.
pub type ChannelMap = HashMap<String, String>;

/// Canonical global ordering of roles.
///
/// Every command's access list is normalized to a subsequence of this order.
/// Deserializes from a list or from a comma separated string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RolesRepr", into = "Vec<String>")]
pub struct AccessOrder(Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum RolesRepr {
    List(Vec<String>),
    Csv(String),
}

impl From<RolesRepr> for AccessOrder {
    fn from(repr: RolesRepr) -> Self {
        match repr {
            RolesRepr::List(roles) => Self::new(roles),
            RolesRepr::Csv(roles) => Self::new(
                roles
                    .split(',')
                    .map(str::trim)
                    .filter(|role| !role.is_empty()),
            ),
        }
    }
}

impl From<AccessOrder> for Vec<String> {
    fn from(order: AccessOrder) -> Self {
        order.0
    }
}

impl AccessOrder {
    /// Build an access order. Repeated roles keep their first position.
    pub fn new<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let roles = roles
            .into_iter()
            .map(Into::into)
            .filter(|role: &String| seen.insert(role.clone()))
            .collect();

        Self(roles)
    }

    /// Roles in priority order.
    pub fn roles(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Recompute a requested access list in canonical order.
    ///
    /// Duplicates and roles outside this order are dropped.
    pub fn normalize<S: AsRef<str>>(&self, requested: &[S]) -> Vec<String> {
        let requested: HashSet<&str> = requested.iter().map(AsRef::as_ref).collect();

        self.0
            .iter()
            .filter(|role| requested.contains(role.as_str()))
            .cloned()
            .collect()
    }
}

impl Default for AccessOrder {
    fn default() -> Self {
        Self::new([ROLE_GENERAL, ROLE_ADMIN])
    }
}

/// Check whether `channel_id` may run a command restricted to `roles`.
///
/// An empty role list means the command is public.
pub fn allowed<S: AsRef<str>>(channel_id: &str, roles: &[S], channels: &ChannelMap) -> bool {
    if roles.is_empty() {
        return true;
    }

    roles.iter().any(|role| {
        channels
            .get(role.as_ref())
            .is_some_and(|mapped| mapped == channel_id)
    })
}
