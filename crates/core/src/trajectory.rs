use std::{ops::Index, slice};

use crate::State;

/// The ordered sequence of states produced by one stepping pass.
///
/// The length is fixed before stepping begins: index 0 holds the initial
/// condition and index `i + 1` is produced solely from index `i`.
/// A trajectory cannot be mutated or resized after it is produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    states: Vec<State>,
}

impl Trajectory {
    /// Produces a trajectory of `len` states by repeatedly applying a fallible step.
    ///
    /// The closure receives the index `i` of the current state and the state
    /// itself, and returns state `i + 1`. It is called `len - 1` times.
    /// A `len` of zero produces an empty trajectory without calling `next`.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `next`. No partial trajectory is
    /// returned.
    pub fn generate<E, F>(initial: State, len: usize, mut next: F) -> Result<Self, E>
    where
        F: FnMut(usize, State) -> Result<State, E>,
    {
        let mut states = Vec::with_capacity(len);
        if len == 0 {
            return Ok(Self { states });
        }

        let mut current = initial;
        states.push(current);

        for index in 0..len - 1 {
            current = next(index, current)?;
            states.push(current);
        }

        Ok(Self { states })
    }

    /// Produces a trajectory of `len` states by repeatedly applying an infallible step.
    ///
    /// See [`Trajectory::generate`] for the calling convention.
    pub fn unfold<F>(initial: State, len: usize, mut next: F) -> Self
    where
        F: FnMut(usize, State) -> State,
    {
        let mut states = Vec::with_capacity(len);
        if len == 0 {
            return Self { states };
        }

        let mut current = initial;
        states.push(current);

        for index in 0..len - 1 {
            current = next(index, current);
            states.push(current);
        }

        Self { states }
    }

    /// Returns the number of states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns `true` if the trajectory holds no states.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Returns the states as a slice.
    #[must_use]
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Returns the state at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&State> {
        self.states.get(index)
    }

    /// Returns the final state, if any.
    #[must_use]
    pub fn last(&self) -> Option<&State> {
        self.states.last()
    }

    /// Returns an iterator over the states.
    pub fn iter(&self) -> slice::Iter<'_, State> {
        self.states.iter()
    }

    /// Returns an iterator over the momenta.
    pub fn momenta(&self) -> impl Iterator<Item = f64> + '_ {
        self.states.iter().map(|state| state.p)
    }

    /// Returns an iterator over the positions.
    pub fn positions(&self) -> impl Iterator<Item = f64> + '_ {
        self.states.iter().map(|state| state.x)
    }

    /// Returns the largest componentwise difference between two trajectories.
    ///
    /// Returns `f64::INFINITY` if the lengths differ and `NaN` if any compared
    /// component is `NaN`.
    #[must_use]
    pub fn max_deviation(&self, other: &Trajectory) -> f64 {
        if self.len() != other.len() {
            return f64::INFINITY;
        }

        self.iter()
            .zip(other.iter())
            .flat_map(|(a, b)| [(a.p - b.p).abs(), (a.x - b.x).abs()])
            .fold(0.0, |max, diff| if diff.is_nan() || diff > max { diff } else { max })
    }

    /// Consumes the trajectory and returns its states.
    #[must_use]
    pub fn into_states(self) -> Vec<State> {
        self.states
    }
}

impl Index<usize> for Trajectory {
    type Output = State;

    fn index(&self, index: usize) -> &Self::Output {
        &self.states[index]
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a State;
    type IntoIter = slice::Iter<'a, State>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}
