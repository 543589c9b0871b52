// Copyright 2026 - developers of the `telepurge` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// Handles that always refer to the logged-in account ("Saved Messages").
const SELF_ALIASES: [&str; 2] = ["me", "self"];

/// A user-supplied reference to a chat, before it has been resolved.
///
/// Numeric identifiers use the Bot API dialog format (see
/// [`crate::PeerRef::from_dialog_id`]). Textual handles can be a username
/// (with or without the leading `@`), the phone number of a contact, or
/// one of the reserved aliases `"me"` and `"self"`.
///
/// # Examples
///
/// ```
/// use telepurge_session::ChatRef;
///
/// assert_eq!(ChatRef::from(-1001234567890i64), ChatRef::Id(-1001234567890));
/// assert_eq!(ChatRef::from("@username"), ChatRef::Handle("@username".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatRef {
    Id(i64),
    Handle(String),
}

impl ChatRef {
    /// Whether this reference is one of the reserved aliases for the logged-in account.
    pub fn is_self(&self) -> bool {
        match self {
            Self::Id(_) => false,
            Self::Handle(handle) => SELF_ALIASES
                .iter()
                .any(|alias| handle.trim().eq_ignore_ascii_case(alias)),
        }
    }
}

impl From<i64> for ChatRef {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for ChatRef {
    fn from(handle: &str) -> Self {
        Self::Handle(handle.to_string())
    }
}

impl From<String> for ChatRef {
    fn from(handle: String) -> Self {
        Self::Handle(handle)
    }
}

impl From<&String> for ChatRef {
    fn from(handle: &String) -> Self {
        Self::Handle(handle.clone())
    }
}

/// Normalize a username or phone number for lookups.
///
/// Every `@`, `+` and whitespace character is dropped and the rest is lowercased,
/// so `"@UserName"` and `"username"`, or `"+34 600 000 000"` and `"34600000000"`,
/// produce the same key.
pub(crate) fn normalize_handle(handle: &str) -> String {
    handle
        .chars()
        .filter(|c| !matches!(c, '@' | '+') && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
