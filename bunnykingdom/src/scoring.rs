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

//! Scoring rules.
//!
//! Every function here is generic over [`Provider`], so the same code scores a list of
//! buildings, a list of squares, or a mix of both through `&dyn Provider`. A score is the
//! resource score times the tower score:
//!
//! - The resource score is the number of distinct resources produced plus the number of
//!   markets, capped at [`MAX_RESOURCE_COUNT`].
//! - The tower score is the total number of towers, uncapped.
use std::cmp;

use log::trace;

use crate::{
    buildings::Building,
    provider::Provider,
    resources::{self, Resources, MAX_RESOURCE_COUNT},
    squares::Square,
};

/// Breakdown of the score of a set of providers.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Score {
    /// Union of all resources produced.
    resources: Resources,

    /// Number of providers that are markets.
    markets: usize,

    /// Total number of towers.
    towers: usize,
}

impl Score {
    /// Construct the score of no providers at all.
    pub fn new() -> Self {
        Self {
            resources: Resources::empty(),
            markets: 0,
            towers: 0,
        }
    }

    /// Add the contribution of a single provider.
    pub fn add<P: Provider + ?Sized>(&mut self, provider: &P) {
        self.resources = self.resources | provider.resources();
        if provider.is_market() {
            self.markets += 1;
        }
        self.towers += provider.tower_count();
    }

    /// Every resource produced by at least one provider.
    pub fn resources(&self) -> Resources {
        self.resources
    }

    /// Number of distinct resources produced, not counting markets.
    pub fn distinct_resources(&self) -> usize {
        resources::distinct(self.resources)
    }

    /// Number of markets.
    pub fn markets(&self) -> usize {
        self.markets
    }

    /// Distinct resources plus markets, capped at [`MAX_RESOURCE_COUNT`].
    pub fn resource_score(&self) -> usize {
        cmp::min(self.distinct_resources() + self.markets, MAX_RESOURCE_COUNT)
    }

    /// Total number of towers.
    pub fn towers(&self) -> usize {
        self.towers
    }

    /// Final points: resource score times towers.
    pub fn points(&self) -> usize {
        self.resource_score() * self.towers
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Provider> Extend<P> for Score {
    fn extend<I: IntoIterator<Item = P>>(&mut self, providers: I) {
        for provider in providers {
            self.add(&provider);
        }
    }
}

/// Compute the full score breakdown of some providers.
pub fn score<I>(providers: I) -> Score
where
    I: IntoIterator,
    I::Item: Provider,
{
    let mut score = Score::new();
    score.extend(providers);
    trace!("scored {:?}: {} points", score, score.points());
    score
}

/// Resource score of some providers: distinct resources plus markets, capped at
/// [`MAX_RESOURCE_COUNT`].
pub fn count_resources<I>(providers: I) -> usize
where
    I: IntoIterator,
    I::Item: Provider,
{
    score(providers).resource_score()
}

/// Tower score of some providers: the sum of their towers.
pub fn count_towers<I>(providers: I) -> usize
where
    I: IntoIterator,
    I::Item: Provider,
{
    providers
        .into_iter()
        .map(|provider| provider.tower_count())
        .sum()
}

/// Points for some providers: resource score times tower score.
pub fn count_points<I>(providers: I) -> usize
where
    I: IntoIterator,
    I::Item: Provider,
{
    score(providers).points()
}

/// Get an iterator over the buildings placed on the given squares, in order. Squares
/// without a building, including towns, are skipped.
pub fn square_buildings<'a, I>(squares: I) -> impl Iterator<Item = &'a Building>
where
    I: IntoIterator<Item = &'a Square>,
{
    squares.into_iter().filter_map(Square::building)
}

/// Points for a fiefdom. Both the squares and the buildings on them count, so a square
/// and its building can each contribute.
pub fn total_points(fiefdom: &[Square]) -> usize {
    let providers: Vec<&dyn Provider> = fiefdom
        .iter()
        .map(|square| square as &dyn Provider)
        .chain(square_buildings(fiefdom).map(|building| building as &dyn Provider))
        .collect();
    count_points(providers)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{
        buildings::{strategies::any_building, City, Factory, Market},
        resources::ResourceKind,
        squares::Town,
    };

    fn built(square: Square, building: Building) -> Square {
        assert!(square.attempt_build(building));
        square
    }

    #[test]
    fn empty_fiefdom_scores_zero() {
        assert_eq!(total_points(&[]), 0);
        assert_eq!(score(Vec::<Building>::new()), Score::new());
    }

    #[test]
    fn duplicate_resources_count_once() {
        let buildings = [
            Building::factory(ResourceKind::Wood),
            Building::factory(ResourceKind::Wood),
            Building::city(1).unwrap(),
        ];
        assert_eq!(count_resources(&buildings), 1);
        assert_eq!(count_towers(&buildings), 1);
        assert_eq!(count_points(&buildings), 1);
    }

    #[test]
    fn markets_add_to_resources() {
        let buildings = [
            Building::factory(ResourceKind::Fish),
            Building::market(),
            Building::market(),
            Building::city(3).unwrap(),
        ];
        let score = score(&buildings);
        assert_eq!(score.distinct_resources(), 1);
        assert_eq!(score.markets(), 2);
        assert_eq!(score.resource_score(), 3);
        assert_eq!(score.towers(), 3);
        assert_eq!(score.points(), 9);
    }

    #[test]
    fn resource_score_is_capped() {
        let mut buildings: Vec<Building> = ResourceKind::ALL
            .iter()
            .map(|&kind| Building::factory(kind))
            .collect();
        buildings.extend((0..4).map(|_| Building::market()));
        buildings.push(Building::city(2).unwrap());
        assert_eq!(count_resources(&buildings), MAX_RESOURCE_COUNT);
        assert_eq!(count_points(&buildings), MAX_RESOURCE_COUNT * 2);
    }

    #[test]
    fn no_towers_means_no_points() {
        let buildings = [Building::factory(ResourceKind::Gold), Building::market()];
        assert_eq!(count_resources(&buildings), 2);
        assert_eq!(count_points(&buildings), 0);
    }

    #[test]
    fn no_resources_means_no_points() {
        assert_eq!(count_points(&[Town, Town]), 0);
        assert_eq!(count_towers(&[Town, Town]), 2);
    }

    #[test]
    fn concrete_variants_score_directly() {
        let factories = [Factory::new(ResourceKind::Wood), Factory::new(ResourceKind::Fish)];
        assert_eq!(count_resources(&factories), 2);
        let cities = [City::new(1).unwrap(), City::new(3).unwrap()];
        assert_eq!(count_towers(&cities), 4);
        assert_eq!(count_resources(&[Market, Market]), 2);
    }

    #[test]
    fn mixed_providers_score_together() {
        let square = Square::resource(ResourceKind::Carrot);
        let city = Building::city(2).unwrap();
        let market = Market::new();
        let providers: [&dyn Provider; 3] = [&square, &city, &market];
        assert_eq!(count_resources(providers.iter().copied()), 2);
        assert_eq!(count_towers(providers.iter().copied()), 2);
        assert_eq!(count_points(providers.iter().copied()), 4);
    }

    #[test]
    fn square_buildings_skips_unbuilt_and_towns() {
        let fiefdom = vec![
            Square::town(),
            built(Square::empty(), Building::market()),
            Square::resource(ResourceKind::Wood),
            built(
                Square::resource(ResourceKind::Fish),
                Building::city(1).unwrap(),
            ),
        ];
        let buildings: Vec<&Building> = square_buildings(&fiefdom).collect();
        assert_eq!(
            buildings,
            vec![&Building::market(), &Building::city(1).unwrap()]
        );
    }

    #[test]
    fn city_and_gold_score_two() {
        let fiefdom = vec![
            built(Square::empty(), Building::city(2).unwrap()),
            Square::resource(ResourceKind::Gold),
        ];
        assert_eq!(total_points(&fiefdom), 2);
    }

    #[test]
    fn square_and_building_both_contribute() {
        let fiefdom = vec![
            built(
                Square::resource(ResourceKind::Wood),
                Building::factory(ResourceKind::Fish),
            ),
            built(Square::empty(), Building::market()),
            Square::town(),
        ];
        // Wood and fish, plus one market; one tower from the town.
        assert_eq!(total_points(&fiefdom), 3);
    }

    #[test]
    fn factory_matching_square_counts_once() {
        let fiefdom = vec![
            built(
                Square::resource(ResourceKind::Wood),
                Building::factory(ResourceKind::Wood),
            ),
            Square::town(),
        ];
        assert_eq!(total_points(&fiefdom), 1);
    }

    proptest! {
        #[test]
        fn resource_score_never_exceeds_cap(buildings in prop::collection::vec(any_building(), 0..32)) {
            prop_assert!(count_resources(&buildings) <= MAX_RESOURCE_COUNT);
        }

        #[test]
        fn repeating_providers_keeps_resources(buildings in prop::collection::vec(any_building(), 0..16)) {
            let markets = buildings.iter().filter(|b| b.is_market()).count();
            let doubled: Vec<Building> = buildings.iter().chain(buildings.iter()).copied().collect();
            let once = score(&buildings);
            let twice = score(&doubled);
            prop_assert_eq!(once.resources(), twice.resources());
            prop_assert_eq!(twice.markets(), 2 * markets);
            prop_assert_eq!(twice.towers(), 2 * once.towers());
        }

        #[test]
        fn order_does_not_matter(buildings in prop::collection::vec(any_building(), 0..16)) {
            let mut reversed = buildings.clone();
            reversed.reverse();
            prop_assert_eq!(score(&buildings), score(&reversed));
        }

        #[test]
        fn breakdown_matches_counts(buildings in prop::collection::vec(any_building(), 0..16)) {
            let score = score(&buildings);
            prop_assert_eq!(score.resource_score(), count_resources(&buildings));
            prop_assert_eq!(score.towers(), count_towers(&buildings));
            prop_assert_eq!(score.points(), count_points(&buildings));
        }
    }
}
