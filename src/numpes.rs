//! Process counts ("numpes") to sweep over, and the process grids some applications want for
//! them.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How to pick the process counts for a study.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessCountPolicy {
    /// `1^3, 2^3, ..., max_root^3`. Lulesh only wants cubed process counts, and the other
    /// grid-structured apps are run the same way so the results line up.
    Cubed { max_root: usize },

    /// `2^min_exp, ..., 2^max_exp`.
    PowersOfTwo { min_exp: u32, max_exp: u32 },
}

impl ProcessCountPolicy {
    /// Generate the process counts in increasing order.
    ///
    /// Fails if the policy would generate nothing, or a count that does not fit in a `usize`.
    pub fn gen_numpes(&self) -> Result<Vec<usize>, ConfigError> {
        let numpes: Option<Vec<usize>> = match *self {
            ProcessCountPolicy::Cubed { max_root } => {
                (1..=max_root).map(|x| x.checked_pow(3)).collect()
            }
            ProcessCountPolicy::PowersOfTwo { min_exp, max_exp } => {
                (min_exp..=max_exp).map(|x| 2usize.checked_pow(x)).collect()
            }
        };

        match numpes {
            None => Err(self.bad("a process count overflows")),
            Some(ref numpes) if numpes.is_empty() => Err(self.bad("no process counts")),
            Some(numpes) => Ok(numpes),
        }
    }

    fn bad(&self, reason: &str) -> ConfigError {
        ConfigError::BadProcessCounts {
            policy: format!("{:?}", self),
            reason: reason.into(),
        }
    }
}

/// Return the 3-D process grid `(x, y, z)` for a cubed process count, or `None` if `numpe` is
/// not a perfect cube.
pub fn proc_grid(numpe: usize) -> Option<(usize, usize, usize)> {
    if numpe == 0 {
        return None;
    }

    let cube = |r: usize| r.checked_pow(3);

    (1..=numpe)
        .take_while(|&r| cube(r).map_or(false, |c| c <= numpe))
        .find(|&r| cube(r) == Some(numpe))
        .map(|r| (r, r, r))
}
