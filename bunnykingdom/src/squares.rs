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

//! Types that make up the squares of a fiefdom.
//!
//! A [`Town`] is never buildable. [`ResourceSquare`] and [`EmptySquare`] each own a
//! [`BuildSlot`] which can receive a single building over the whole game.
use log::debug;

use crate::{
    buildings::Building,
    provider::Provider,
    resources::{ResourceKind, Resources},
};

pub use self::slot::BuildSlot;

mod slot;

/// A town. Contributes one tower and can never be built on.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Town;

impl Town {
    /// Construct a town.
    pub fn new() -> Self {
        Town
    }

    /// Towns never hold a building, so this is always `None`.
    pub fn building(&self) -> Option<&Building> {
        None
    }

    /// Towns cannot be built on. Always returns `false`.
    pub fn attempt_build(&self, building: Building) -> bool {
        debug!("refused to build {:?}: towns are not buildable", building);
        false
    }
}

impl Provider for Town {
    fn tower_count(&self) -> usize {
        1
    }
}

/// A buildable square that produces a resource.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ResourceSquare {
    /// Resource produced by the square itself.
    resource: ResourceKind,

    /// Building on this square, if any.
    slot: BuildSlot,
}

impl ResourceSquare {
    /// Construct an unbuilt square producing `resource`.
    pub fn new(resource: ResourceKind) -> Self {
        Self {
            resource,
            slot: BuildSlot::new(),
        }
    }

    /// The resource this square produces.
    pub fn resource(&self) -> ResourceKind {
        self.resource
    }

    /// The building on this square, if any.
    pub fn building(&self) -> Option<&Building> {
        self.slot.building()
    }

    /// Attempt to build on this square. See [`BuildSlot::attempt_build`].
    pub fn attempt_build(&self, building: Building) -> bool {
        self.slot.attempt_build(building)
    }
}

impl Provider for ResourceSquare {
    fn resources(&self) -> Resources {
        Resources::from(self.resource)
    }
}

/// A buildable square with no resource of its own.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct EmptySquare {
    slot: BuildSlot,
}

impl EmptySquare {
    /// Construct an unbuilt empty square.
    pub fn new() -> Self {
        Self {
            slot: BuildSlot::new(),
        }
    }

    /// The building on this square, if any.
    pub fn building(&self) -> Option<&Building> {
        self.slot.building()
    }

    /// Attempt to build on this square. See [`BuildSlot::attempt_build`].
    pub fn attempt_build(&self, building: Building) -> bool {
        self.slot.attempt_build(building)
    }
}

impl Provider for EmptySquare {}

/// Any square of a fiefdom.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Square {
    Town(Town),
    Resource(ResourceSquare),
    Empty(EmptySquare),
}

impl Square {
    /// Shorthand for a [`Town`].
    pub fn town() -> Self {
        Square::Town(Town)
    }

    /// Shorthand for an unbuilt [`ResourceSquare`] producing `resource`.
    pub fn resource(resource: ResourceKind) -> Self {
        Square::Resource(ResourceSquare::new(resource))
    }

    /// Shorthand for an unbuilt [`EmptySquare`].
    pub fn empty() -> Self {
        Square::Empty(EmptySquare::new())
    }

    /// Returns true if this kind of square can hold a building at all, whether or not
    /// one has already been built.
    pub fn is_buildable(&self) -> bool {
        match self {
            Square::Town(_) => false,
            Square::Resource(_) | Square::Empty(_) => true,
        }
    }

    /// The building on this square, if any. Always `None` for a town.
    pub fn building(&self) -> Option<&Building> {
        match self {
            Square::Town(town) => town.building(),
            Square::Resource(square) => square.building(),
            Square::Empty(square) => square.building(),
        }
    }

    /// Attempt to place `building` on this square. Returns `true` if the square was
    /// buildable and empty. Returns `false` for towns and squares that already hold a
    /// building; in that case nothing changes.
    pub fn attempt_build(&self, building: Building) -> bool {
        match self {
            Square::Town(town) => town.attempt_build(building),
            Square::Resource(square) => square.attempt_build(building),
            Square::Empty(square) => square.attempt_build(building),
        }
    }

    /// Get this square as a [`Provider`] trait object.
    fn as_provider(&self) -> &dyn Provider {
        match self {
            Square::Town(town) => town,
            Square::Resource(square) => square,
            Square::Empty(square) => square,
        }
    }
}

impl Provider for Square {
    fn resources(&self) -> Resources {
        self.as_provider().resources()
    }

    fn is_market(&self) -> bool {
        self.as_provider().is_market()
    }

    fn tower_count(&self) -> usize {
        self.as_provider().tower_count()
    }
}

impl From<Town> for Square {
    fn from(town: Town) -> Self {
        Square::Town(town)
    }
}

impl From<ResourceSquare> for Square {
    fn from(square: ResourceSquare) -> Self {
        Square::Resource(square)
    }
}

impl From<EmptySquare> for Square {
    fn from(square: EmptySquare) -> Self {
        Square::Empty(square)
    }
}
