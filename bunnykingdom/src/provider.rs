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

//! The capability shared by everything that contributes to a score.
use std::fmt::Debug;

use crate::resources::Resources;

/// Anything that can contribute resources, markets, or towers to a score. Implemented by
/// both buildings and squares so that scoring can be written once for either.
///
/// Every method has a default, so an implementation only overrides what it produces.
pub trait Provider: Debug {
    /// Resources directly produced by this provider. Markets do not produce resources
    /// themselves; they are counted through [`is_market`][Provider::is_market].
    fn resources(&self) -> Resources {
        Resources::empty()
    }

    /// Returns true if and only if this provider is a market.
    fn is_market(&self) -> bool {
        false
    }

    /// Number of towers this provider contributes.
    fn tower_count(&self) -> usize {
        0
    }
}

impl<P: Provider + ?Sized> Provider for &P {
    fn resources(&self) -> Resources {
        (**self).resources()
    }

    fn is_market(&self) -> bool {
        (**self).is_market()
    }

    fn tower_count(&self) -> usize {
        (**self).tower_count()
    }
}
