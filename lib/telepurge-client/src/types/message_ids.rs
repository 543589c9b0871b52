// Copyright 2026 - developers of the `telepurge` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// The identifiers of the messages a request acts upon, in order.
///
/// Duplicates are kept, and an empty list is not rejected: Telegram decides
/// what to make of both.
///
/// # Examples
///
/// ```
/// use telepurge_client::types::MessageIds;
///
/// assert_eq!(MessageIds::from(7), MessageIds::from([7]));
/// assert_eq!(MessageIds::from(vec![1, 2]), (1..=2).collect());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageIds(Vec<i32>);

impl MessageIds {
    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<i32> {
        self.0
    }
}

impl From<i32> for MessageIds {
    fn from(id: i32) -> Self {
        Self(vec![id])
    }
}

impl From<Vec<i32>> for MessageIds {
    fn from(ids: Vec<i32>) -> Self {
        Self(ids)
    }
}

impl From<&Vec<i32>> for MessageIds {
    fn from(ids: &Vec<i32>) -> Self {
        Self(ids.clone())
    }
}

impl From<&[i32]> for MessageIds {
    fn from(ids: &[i32]) -> Self {
        Self(ids.to_vec())
    }
}

impl<const N: usize> From<[i32; N]> for MessageIds {
    fn from(ids: [i32; N]) -> Self {
        Self(ids.to_vec())
    }
}

impl<const N: usize> From<&[i32; N]> for MessageIds {
    fn from(ids: &[i32; N]) -> Self {
        Self(ids.to_vec())
    }
}

/// Drains the iterator once, keeping its order.
impl FromIterator<i32> for MessageIds {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
