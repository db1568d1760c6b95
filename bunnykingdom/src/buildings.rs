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

//! Buildings that can be placed on buildable squares.
use crate::{
    provider::Provider,
    resources::{ResourceKind, Resources},
};

pub use self::errors::InvalidTowerCount;

mod errors;

/// A factory, producing a single kind of resource.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Factory {
    resource: ResourceKind,
}

impl Factory {
    /// Construct a factory producing the given resource.
    pub fn new(resource: ResourceKind) -> Self {
        Self { resource }
    }

    /// The resource this factory produces.
    pub fn resource(&self) -> ResourceKind {
        self.resource
    }
}

impl Provider for Factory {
    fn resources(&self) -> Resources {
        Resources::from(self.resource)
    }
}

/// A city with between one and three towers.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct City {
    towers: usize,
}

impl City {
    /// Fewest towers a city may have.
    pub const MIN_TOWERS: usize = 1;
    /// Most towers a city may have.
    pub const MAX_TOWERS: usize = 3;

    /// Construct a city with the given number of towers. Returns `Err` if `towers` is
    /// not between [`MIN_TOWERS`][Self::MIN_TOWERS] and [`MAX_TOWERS`][Self::MAX_TOWERS].
    pub fn new(towers: usize) -> Result<Self, InvalidTowerCount> {
        if (Self::MIN_TOWERS..=Self::MAX_TOWERS).contains(&towers) {
            Ok(Self { towers })
        } else {
            Err(InvalidTowerCount::new(towers))
        }
    }

    /// Number of towers in this city.
    pub fn towers(&self) -> usize {
        self.towers
    }
}

impl Provider for City {
    fn tower_count(&self) -> usize {
        self.towers
    }
}

/// A market. Produces nothing itself but raises the resource score by one.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Market;

impl Market {
    /// Construct a market.
    pub fn new() -> Self {
        Market
    }
}

impl Provider for Market {
    fn is_market(&self) -> bool {
        true
    }
}

/// Any building. The set of buildings is closed, so this is an enum over the concrete
/// building types rather than a trait object.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Building {
    Factory(Factory),
    City(City),
    Market(Market),
}

impl Building {
    /// Shorthand for a [`Factory`] producing `resource`.
    pub fn factory(resource: ResourceKind) -> Self {
        Building::Factory(Factory::new(resource))
    }

    /// Shorthand for a [`City`] with `towers` towers.
    pub fn city(towers: usize) -> Result<Self, InvalidTowerCount> {
        City::new(towers).map(Building::City)
    }

    /// Shorthand for a [`Market`].
    pub fn market() -> Self {
        Building::Market(Market)
    }

    /// Get this building as a [`Provider`] trait object.
    fn as_provider(&self) -> &dyn Provider {
        match self {
            Building::Factory(factory) => factory,
            Building::City(city) => city,
            Building::Market(market) => market,
        }
    }
}

impl Provider for Building {
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

impl From<Factory> for Building {
    fn from(factory: Factory) -> Self {
        Building::Factory(factory)
    }
}

impl From<City> for Building {
    fn from(city: City) -> Self {
        Building::City(city)
    }
}

impl From<Market> for Building {
    fn from(market: Market) -> Self {
        Building::Market(market)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_accepts_one_to_three_towers() {
        for towers in 1..=3 {
            let city = City::new(towers).unwrap();
            assert_eq!(city.towers(), towers);
            assert_eq!(city.tower_count(), towers);
            assert!(city.resources().is_empty());
            assert!(!city.is_market());
        }
    }

    #[test]
    fn city_rejects_out_of_range_towers() {
        for &towers in &[0, 4, 5, 100] {
            let err = City::new(towers).unwrap_err();
            assert_eq!(err.towers(), towers);
            assert_eq!(usize::from(err), towers);
        }
        assert!(Building::city(0).is_err());
    }

    #[test]
    fn invalid_tower_count_message_names_value() {
        let err = City::new(7).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid tower count 7: a city has between 1 and 3 towers"
        );
    }

    #[test]
    fn factory_produces_its_resource() {
        let factory = Factory::new(ResourceKind::Fish);
        assert_eq!(factory.resources(), Resources::from(ResourceKind::Fish));
        assert_eq!(factory.tower_count(), 0);
        assert!(!factory.is_market());
    }

    #[test]
    fn market_only_reports_market() {
        let market = Market::new();
        assert!(market.is_market());
        assert!(market.resources().is_empty());
        assert_eq!(market.tower_count(), 0);
    }

    #[test]
    fn building_delegates_to_variant() {
        let factory = Building::factory(ResourceKind::Gold);
        assert_eq!(factory.resources(), Resources::from(ResourceKind::Gold));

        let city = Building::city(2).unwrap();
        assert_eq!(city.tower_count(), 2);
        assert!(!city.is_market());

        let market = Building::market();
        assert!(market.is_market());
        assert!(market.resources().is_empty());
    }

    #[test]
    fn building_from_variants() {
        assert_eq!(
            Building::from(Factory::new(ResourceKind::Wood)),
            Building::factory(ResourceKind::Wood)
        );
        assert_eq!(Building::from(City::new(3).unwrap()), Building::city(3).unwrap());
        assert_eq!(Building::from(Market), Building::market());
    }
}
