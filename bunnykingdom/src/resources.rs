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

//! Resource kinds produced by squares and buildings.
use enumflags2::BitFlags;

/// Number of distinct [`ResourceKind`]s. Caps the resource part of a score, since markets
/// can only unlock kinds that exist.
pub const MAX_RESOURCE_COUNT: usize = 5;

/// A kind of resource that can be produced in the kingdom.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum ResourceKind {
    Wood = 0b00001,
    Carrot = 0b00010,
    Fish = 0b00100,
    Mushroom = 0b01000,
    Gold = 0b10000,
}

impl ResourceKind {
    /// Every resource kind, in declaration order.
    pub const ALL: [ResourceKind; MAX_RESOURCE_COUNT] = [
        ResourceKind::Wood,
        ResourceKind::Carrot,
        ResourceKind::Fish,
        ResourceKind::Mushroom,
        ResourceKind::Gold,
    ];
}

/// Set of [`ResourceKind`]s. Union is `|`; duplicates collapse.
pub type Resources = BitFlags<ResourceKind>;

/// Number of distinct kinds in a [`Resources`] set.
pub fn distinct(resources: Resources) -> usize {
    resources.bits().count_ones() as usize
}
