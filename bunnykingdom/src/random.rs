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

//! Random generation of kingdom pieces. Enabled by the `rng_gen` feature.
//!
//! Resource kinds, buildings, and squares can all be drawn from
//! [`Standard`][rand::distributions::Standard], so `rng.gen::<Building>()` works. Squares
//! are always generated unbuilt.
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::{
    buildings::{Building, City},
    fiefdom::Fiefdom,
    resources::ResourceKind,
    squares::Square,
};

impl Distribution<ResourceKind> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ResourceKind {
        ResourceKind::ALL[rng.gen_range(0, ResourceKind::ALL.len())]
    }
}

impl Distribution<Building> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Building {
        match rng.gen_range(0, 3) {
            0 => Building::factory(rng.gen()),
            1 => match City::new(rng.gen_range(City::MIN_TOWERS, City::MAX_TOWERS + 1)) {
                Ok(city) => city.into(),
                // The range above only produces valid tower counts.
                Err(_) => unreachable!(),
            },
            _ => Building::market(),
        }
    }
}

impl Distribution<Square> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Square {
        match rng.gen_range(0, 3) {
            0 => Square::town(),
            1 => Square::resource(rng.gen()),
            _ => Square::empty(),
        }
    }
}

impl Fiefdom {
    /// Generate a fiefdom of `len` random squares. Each buildable square receives a random
    /// building with probability `build_chance`.
    ///
    /// Panics if `build_chance` is not between 0 and 1.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, len: usize, build_chance: f64) -> Self {
        (0..len)
            .map(|_| {
                let square: Square = rng.gen();
                if square.is_buildable() && rng.gen_bool(build_chance) {
                    square.attempt_build(rng.gen());
                }
                square
            })
            .collect()
    }
}
