// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Errors used when constructing buildings.

use thiserror::Error;

/// Error returned when a [`City`][crate::buildings::City] is given a number of towers outside of
/// `City::MIN_TOWERS..=City::MAX_TOWERS`.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("invalid tower count {towers}: a city has between 1 and 3 towers")]
pub struct InvalidTowerCount {
    /// The rejected number of towers.
    towers: usize,
}

impl InvalidTowerCount {
    /// Create an [`InvalidTowerCount`] for the rejected tower count.
    pub(super) fn new(towers: usize) -> Self {
        Self { towers }
    }

    /// The tower count that was rejected.
    pub fn towers(&self) -> usize {
        self.towers
    }
}

impl From<InvalidTowerCount> for usize {
    /// Allows retrieving the rejected tower count from the error with into.
    fn from(err: InvalidTowerCount) -> Self {
        err.towers
    }
}
