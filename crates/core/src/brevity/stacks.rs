//! Altitude stack clustering.
//!
//! A STACK is a group of contacts within close vertical separation,
//! reported as one altitude band with a count ("two ship, stack twenty-five
//! thousand"). This module is independent of the radio parser; response
//! builders call it with whatever altitude sets they have on hand.

use serde::{Deserialize, Serialize};

/// Altitudes are reported in whole-thousand-foot bands.
const BAND_FT: f64 = 1000.0;

/// Contacts within this vertical distance of the stack's altitude join it.
const SEPARATION_FT: f64 = 9900.0;

/// One layer of an altitude stack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stack {
    /// Band altitude in feet, rounded to the nearest thousand.
    pub altitude_ft: f64,
    /// Number of contacts in this band.
    pub count: usize,
}

/// Cluster altitudes into stacks, highest first.
///
/// Each altitude is rounded to the nearest 1000 ft band, then the set is
/// swept from highest to lowest: a value joins the currently open stack
/// when it is within 9900 ft below that stack's altitude, otherwise it
/// opens a new stack. The input slice is copied, never reordered.
///
/// The counts always sum to the input length, every band is one of the
/// rounded inputs, and consecutive bands differ by more than 9900 ft.
pub fn stacks(altitudes: &[f64]) -> Vec<Stack> {
    let mut rounded: Vec<f64> = altitudes
        .iter()
        .map(|alt| (alt / BAND_FT).round() * BAND_FT)
        .collect();
    rounded.sort_by(|a, b| b.total_cmp(a));

    let mut out: Vec<Stack> = Vec::new();
    for alt in rounded {
        match out.last_mut() {
            Some(open) if alt > open.altitude_ft - SEPARATION_FT => open.count += 1,
            _ => out.push(Stack {
                altitude_ft: alt,
                count: 1,
            }),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clusters_within_separation() {
        let s = stacks(&[25000.0, 24000.0, 10000.0]);
        assert_eq!(
            s,
            vec![
                Stack {
                    altitude_ft: 25000.0,
                    count: 2
                },
                Stack {
                    altitude_ft: 10000.0,
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn empty_input_yields_no_stacks() {
        assert!(stacks(&[]).is_empty());
    }

    #[test]
    fn identical_altitudes_form_one_stack() {
        let s = stacks(&[30000.0, 30000.0, 30000.0, 30000.0]);
        assert_eq!(
            s,
            vec![Stack {
                altitude_ft: 30000.0,
                count: 4
            }]
        );
    }

    #[test]
    fn rounds_to_nearest_thousand() {
        let s = stacks(&[25450.0, 24600.0]);
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].altitude_ft, 25000.0);
        assert_eq!(s[0].count, 2);
    }

    #[test]
    fn counts_sum_to_input_length() {
        let input = [36000.0, 1000.0, 22000.0, 21000.0, 12000.0, 35500.0];
        let total: usize = stacks(&input).iter().map(|s| s.count).sum();
        assert_eq!(total, input.len());
    }

    #[test]
    fn input_slice_is_left_untouched() {
        let input = [10000.0, 25000.0, 24000.0];
        let _ = stacks(&input);
        assert_eq!(input, [10000.0, 25000.0, 24000.0]);
    }

    #[test]
    fn exact_separation_opens_a_new_stack() {
        // Bands are whole thousands, so a 10000 ft gap is the smallest
        // that exceeds the 9900 ft join window.
        let s = stacks(&[30000.0, 20000.0]);
        assert_eq!(s.len(), 2);
        let s = stacks(&[30000.0, 21000.0]);
        assert_eq!(s.len(), 1);
    }
}
