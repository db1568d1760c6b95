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

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::buildings::Building;

/// Error returned when trying to build on a square past the end of the fiefdom.
#[derive(Error, Clone, Eq, PartialEq)]
#[error("square {index} is out of bounds for a fiefdom of {len} squares")]
pub struct OutOfBounds {
    /// Index of the square that was requested.
    index: usize,

    /// Number of squares in the fiefdom.
    len: usize,

    /// The building that was not placed.
    building: Building,
}

impl OutOfBounds {
    /// Create an [`OutOfBounds`] error for the given index, fiefdom length, and building.
    pub(super) fn new(index: usize, len: usize, building: Building) -> Self {
        Self {
            index,
            len,
            building,
        }
    }

    /// Index of the square that was requested.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of squares in the fiefdom.
    pub fn len(&self) -> usize {
        self.len
    }

    /// The building that was not placed.
    pub fn building(&self) -> &Building {
        &self.building
    }

    /// Extract the building that was not placed.
    pub fn into_building(self) -> Building {
        self.building
    }
}

impl From<OutOfBounds> for Building {
    /// Allows retrieving the unplaced building from the error with into.
    fn from(err: OutOfBounds) -> Self {
        err.into_building()
    }
}

impl Debug for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
