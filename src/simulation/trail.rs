//! Bounded orbit trail
//!
//! Each body keeps the positions it reached at the end of every step so the
//! viewer can draw its path. With a capacity set, the trail is a ring: once
//! full, pushing a new point drops the oldest one.

use std::collections::VecDeque;

use super::states::NVec2;

/// Default number of points kept per body (about 5.5 years of daily steps)
pub const DEFAULT_TRAIL_CAPACITY: usize = 2000;

#[derive(Debug, Clone)]
pub struct Trail {
    points: VecDeque<NVec2>,
    capacity: Option<usize>, // None = unbounded
}

impl Trail {
    /// Trail holding at most `capacity` points, `None` grows without bound
    pub fn new(capacity: Option<usize>) -> Self {
        let points = match capacity {
            Some(cap) => VecDeque::with_capacity(cap),
            None => VecDeque::new(),
        };
        Self { points, capacity }
    }

    pub fn unbounded() -> Self {
        Self::new(None)
    }

    /// Append a position, evicting the oldest point when the ring is full
    pub fn push(&mut self, point: NVec2) {
        match self.capacity {
            Some(0) => {}
            Some(cap) => {
                while self.points.len() >= cap {
                    self.points.pop_front();
                }
                self.points.push_back(point);
            }
            None => self.points.push_back(point),
        }
    }

    /// Change the bound, trimming the oldest points if it shrank
    pub fn set_capacity(&mut self, capacity: Option<usize>) {
        self.capacity = capacity;
        if let Some(cap) = capacity {
            while self.points.len() > cap {
                self.points.pop_front();
            }
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Oldest to newest
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &NVec2> + ExactSizeIterator + '_ {
        self.points.iter()
    }

    pub fn last(&self) -> Option<&NVec2> {
        self.points.back()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new(Some(DEFAULT_TRAIL_CAPACITY))
    }
}
