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

//! A single player's fiefdom: the ordered squares they hold.
use std::{iter::FromIterator, ops::Deref, slice};

use crate::{
    buildings::Building,
    provider::Provider,
    scoring::{self, Score},
    squares::Square,
};

pub use self::errors::OutOfBounds;

mod errors;

/// The squares held by one player. Order follows the layout of the board and does not
/// affect scoring.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct Fiefdom {
    squares: Vec<Square>,
}

impl Fiefdom {
    /// Construct a fiefdom with no squares.
    pub fn new() -> Self {
        Self {
            squares: Vec::new(),
        }
    }

    /// Add a square to the end of the fiefdom.
    pub fn push(&mut self, square: Square) {
        self.squares.push(square);
    }

    /// Get the square at `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<&Square> {
        self.squares.get(index)
    }

    /// Get an iterator over the squares in order.
    pub fn iter(&self) -> slice::Iter<Square> {
        self.squares.iter()
    }

    /// Get an iterator over the buildings placed in this fiefdom, in square order.
    pub fn buildings(&self) -> impl Iterator<Item = &Building> {
        scoring::square_buildings(&self.squares)
    }

    /// Attempt to build on the square at `index`. Returns `Ok(true)` if the building was
    /// placed, `Ok(false)` if the square is a town or already holds a building, and `Err`
    /// with the building if there is no square at `index`.
    pub fn attempt_build(&self, index: usize, building: Building) -> Result<bool, OutOfBounds> {
        match self.squares.get(index) {
            Some(square) => Ok(square.attempt_build(building)),
            None => Err(OutOfBounds::new(index, self.squares.len(), building)),
        }
    }

    /// Full score breakdown of this fiefdom, counting both squares and buildings.
    pub fn score(&self) -> Score {
        let squares = self.squares.iter().map(|square| square as &dyn Provider);
        let buildings = self.buildings().map(|building| building as &dyn Provider);
        scoring::score(squares.chain(buildings))
    }

    /// Points for this fiefdom. Same as [`total_points`][scoring::total_points] on its
    /// squares.
    pub fn total_points(&self) -> usize {
        scoring::total_points(&self.squares)
    }

    /// Consume the fiefdom, returning its squares.
    pub fn into_squares(self) -> Vec<Square> {
        self.squares
    }
}

impl Deref for Fiefdom {
    type Target = [Square];

    fn deref(&self) -> &Self::Target {
        &self.squares
    }
}

impl From<Vec<Square>> for Fiefdom {
    fn from(squares: Vec<Square>) -> Self {
        Self { squares }
    }
}

impl FromIterator<Square> for Fiefdom {
    fn from_iter<I: IntoIterator<Item = Square>>(squares: I) -> Self {
        Self {
            squares: squares.into_iter().collect(),
        }
    }
}

impl Extend<Square> for Fiefdom {
    fn extend<I: IntoIterator<Item = Square>>(&mut self, squares: I) {
        self.squares.extend(squares);
    }
}

impl<'a> IntoIterator for &'a Fiefdom {
    type Item = &'a Square;
    type IntoIter = slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.squares.iter()
    }
}
