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

//! The building slot shared by every buildable square.
use log::{debug, trace};
use once_cell::sync::OnceCell;

use crate::buildings::Building;

/// Holds the building on a buildable square. Starts empty and can be filled exactly
/// once, only through [`attempt_build`][BuildSlot::attempt_build]. There is no way to
/// clear or replace the building afterwards.
///
/// Filling the slot is atomic, so when several threads race to build on the same square
/// exactly one of them succeeds.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct BuildSlot {
    building: OnceCell<Building>,
}

impl BuildSlot {
    /// Construct an empty slot.
    pub fn new() -> Self {
        Self {
            building: OnceCell::new(),
        }
    }

    /// The building in this slot, if one has been built.
    pub fn building(&self) -> Option<&Building> {
        self.building.get()
    }

    /// Returns true if a building has been placed in this slot.
    pub fn occupied(&self) -> bool {
        self.building.get().is_some()
    }

    /// Attempts to place `building` in this slot. Returns `true` if the slot was empty
    /// and now holds `building`. Returns `false` without changing anything if the slot
    /// was already occupied.
    pub fn attempt_build(&self, building: Building) -> bool {
        match self.building.set(building) {
            Ok(()) => {
                trace!("built {:?}", building);
                true
            }
            Err(refused) => {
                debug!(
                    "refused to build {:?}: slot already holds {:?}",
                    refused,
                    self.building.get()
                );
                false
            }
        }
    }
}
