// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Sizing helpers that map accuracy targets to sketch dimensions.

use log::warn;

/// Error ratio used when the requested one is out of range.
pub const DEFAULT_ERROR_RATIO: f64 = 1e-3;

/// Uncertainty used when the requested one is out of range.
pub const DEFAULT_UNCERTAINTY: f64 = 1e-3;

const ACCURACY_MIN: f64 = 1e-9;
const ACCURACY_MAX: f64 = 0.1;

/// Returns the `(width, depth)` that size a sketch for the given accuracy
/// target.
///
/// `error_ratio` is the fraction of the total stream weight by which an
/// estimate may overstate the truth; `uncertainty` is the probability of
/// exceeding that bound (one minus the confidence). Following Cormode and
/// Muthukrishnan, "Approximating Data with the Count-Min Data Structure"
/// (2011):
///
/// ```text
/// width = ceil(2 / error_ratio)
/// depth = ceil(-ln(uncertainty) / ln(2))
/// ```
///
/// Both inputs must lie in `[1e-9, 0.1]`. A value outside that range (zero
/// and NaN included) is replaced by [`DEFAULT_ERROR_RATIO`] or
/// [`DEFAULT_UNCERTAINTY`] and the substitution is logged as a warning;
/// sizing never fails.
///
/// # Examples
///
/// ```
/// use countmin::suggest_width_depth;
///
/// assert_eq!(suggest_width_depth(0.01, 0.01), (200, 7));
/// ```
pub fn suggest_width_depth(error_ratio: f64, uncertainty: f64) -> (u32, u32) {
    let error_ratio = if (ACCURACY_MIN..=ACCURACY_MAX).contains(&error_ratio) {
        error_ratio
    } else {
        warn!("error ratio {error_ratio} not in [1e-9, 0.1], using default {DEFAULT_ERROR_RATIO}");
        DEFAULT_ERROR_RATIO
    };
    let uncertainty = if (ACCURACY_MIN..=ACCURACY_MAX).contains(&uncertainty) {
        uncertainty
    } else {
        warn!("uncertainty {uncertainty} not in [1e-9, 0.1], using default {DEFAULT_UNCERTAINTY}");
        DEFAULT_UNCERTAINTY
    };

    let width = (2.0 / error_ratio).ceil() as u32;
    let depth = (-uncertainty.ln() / std::f64::consts::LN_2).ceil() as u32;
    (width, depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizing_table() {
        assert_eq!(suggest_width_depth(0.1, 0.1), (20, 4));
        assert_eq!(suggest_width_depth(0.01, 0.01), (200, 7));
        assert_eq!(suggest_width_depth(0.001, 0.001), (2000, 10));
        assert_eq!(suggest_width_depth(1e-4, 1e-4), (20_000, 14));
        assert_eq!(suggest_width_depth(1e-8, 1e-8), (200_000_000, 27));
    }

    #[test]
    fn test_out_of_range_inputs_use_defaults() {
        let default_dims = suggest_width_depth(DEFAULT_ERROR_RATIO, DEFAULT_UNCERTAINTY);
        assert_eq!(default_dims, (2000, 10));

        assert_eq!(suggest_width_depth(0.0, 0.0), default_dims);
        assert_eq!(suggest_width_depth(-0.01, 0.01), (2000, 7));
        assert_eq!(suggest_width_depth(0.01, 0.5), (200, 10));
        assert_eq!(suggest_width_depth(1e-10, 1e-10), default_dims);
        assert_eq!(suggest_width_depth(f64::NAN, f64::NAN), default_dims);
    }
}
