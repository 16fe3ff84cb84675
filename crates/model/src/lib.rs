// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2026 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Bounded, denomination-aware amount types.
//!
//! A raw big integer is an unsafe representation for ledger values and token supplies: nothing
//! stops it from leaving its legal range, and nothing says which decimal scale it was written in.
//! This crate wraps an arbitrary-precision magnitude in amount types that are:
//!
//! - **Bounded**: every amount type is parameterized by a [`ValueBound`](types::ValueBound)
//!   policy declaring its least and greatest magnitude. The bound is checked on construction and
//!   after every arithmetic operation.
//! - **Denomination-aware**: magnitudes supplied at a human-facing scale (e.g. `pico`) are
//!   rescaled exactly to the canonical smallest unit (`atto`, 10^-18) before anything else happens.
//! - **Domain-tagged**: a zero-sized [`AmountTrait`](types::AmountTrait) marker keeps amounts from
//!   different semantic domains (supplies vs tokens) from being mixed.
//!
//! # Errors and panics
//!
//! Construction from a raw magnitude is the only recoverable failure and returns a
//! [`ValueError`]. Arithmetic that leaves the bound, subtraction below zero, and a failed
//! subset conversion are programming errors and panic.
//!
//! # Feature flags
//!
//! - `stubs`: Enables type stubs and `rstest` fixtures for use in downstream tests.
//!
//! # Example
//!
//! ```
//! use amount_model::types::{Denomination, PositiveSupply};
//!
//! let from_pico = PositiveSupply::new_checked(15u32, Denomination::PICO).unwrap();
//! let from_atto = PositiveSupply::from_magnitude(15_000u32).unwrap();
//! assert_eq!(from_pico, from_atto);
//! assert_eq!(from_pico.to_string(), "15000 atto");
//! ```

pub mod error;
pub mod types;

pub use error::ValueError;
pub use num_bigint::BigUint;
