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

use std::hint::black_box;

use amount_model::types::{
    Denomination, Int256, PositiveSupply, Sign, UInt256, UInt256Bound, ValueBound,
};
use criterion::{Criterion, criterion_group};
use num_bigint::BigUint;

pub fn bench_new_checked_pico(c: &mut Criterion) {
    c.bench_function("positive_supply_new_checked_pico", |b| {
        b.iter(|| PositiveSupply::new_checked(black_box(15u32), black_box(Denomination::PICO)));
    });
}

pub fn bench_express_in_smallest(c: &mut Criterion) {
    let value = BigUint::from(u64::MAX);
    c.bench_function("express_in_smallest_pico", |b| {
        b.iter(|| Denomination::PICO.express_in_smallest(black_box(value.clone())));
    });
}

pub fn bench_uint256_checked_add(c: &mut Criterion) {
    // Half of the range on each side, so the sum never overflows
    let half = UInt256::from_magnitude(UInt256Bound::greatest_finite_magnitude() >> 1u32).unwrap();
    c.bench_function("uint256_checked_add", |b| {
        b.iter(|| black_box(&half).checked_add(black_box(&half)));
    });
}

pub fn bench_int256_add_mixed_signs(c: &mut Criterion) {
    let lhs = Int256::from_magnitude(Sign::Plus, u128::MAX).unwrap();
    let rhs = Int256::from_magnitude(Sign::Minus, u64::MAX).unwrap();
    c.bench_function("int256_add_mixed_signs", |b| {
        b.iter(|| black_box(&lhs) + black_box(&rhs));
    });
}

pub fn bench_int256_cmp(c: &mut Criterion) {
    let lhs = Int256::from_magnitude(Sign::Minus, u128::MAX).unwrap();
    let rhs = Int256::from_magnitude(Sign::Minus, u64::MAX).unwrap();
    c.bench_function("int256_cmp_negative", |b| {
        b.iter(|| black_box(&lhs).cmp(black_box(&rhs)));
    });
}

criterion_group!(
    benches,
    bench_new_checked_pico,
    bench_express_in_smallest,
    bench_uint256_checked_add,
    bench_int256_add_mixed_signs,
    bench_int256_cmp,
);
criterion::criterion_main!(benches);
