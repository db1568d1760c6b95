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

//! Scoring for the BunnyKingdom board game.
//!
//! A player's [`Fiefdom`] is a sequence of [`Square`]s. Buildable squares can each hold
//! one [`Building`], placed with `attempt_build`. Squares and buildings both implement
//! [`Provider`], and all of the scoring in [`scoring`] is written against that trait so
//! the same rules apply to either.
//!
//! ```
//! use bunnykingdom::{total_points, Building, ResourceKind, Square};
//!
//! let fiefdom = vec![Square::empty(), Square::resource(ResourceKind::Gold)];
//! assert!(fiefdom[0].attempt_build(Building::city(2).unwrap()));
//! assert!(!fiefdom[0].attempt_build(Building::market()));
//!
//! // One resource times two towers.
//! assert_eq!(total_points(&fiefdom), 2);
//! ```

pub use crate::{
    buildings::{Building, City, Factory, InvalidTowerCount, Market},
    fiefdom::{Fiefdom, OutOfBounds},
    provider::Provider,
    resources::{ResourceKind, Resources, MAX_RESOURCE_COUNT},
    scoring::{
        count_points, count_resources, count_towers, score, square_buildings, total_points,
        Score,
    },
    squares::{BuildSlot, EmptySquare, ResourceSquare, Square, Town},
};

pub mod buildings;
pub mod fiefdom;
pub mod provider;
pub mod resources;
pub mod scoring;
pub mod squares;

#[cfg(feature = "rng_gen")]
mod random;
