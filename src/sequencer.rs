//! Ordered, deduplicated route points with position-derived roles.
//!
//! Every mutation goes through [`RouteSequencer`], which reassigns roles by index afterwards: the
//! first point is `start`, the last is `end` and everything in between is a `waypoint`. A lone
//! point is `start`.

use std::collections::HashSet;

use thiserror::Error;

use crate::entities::{assign_roles, Place, Role, RoutePoint};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("place {id} is already in the route")]
    Duplicate { id: String },
    #[error("reorder must be a permutation of the current {expected} points, got {given}")]
    InvalidReorder { expected: usize, given: usize },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouteSequencer {
    points: Vec<RoutePoint>,
}

impl RouteSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a sequence from an ordered list of places, rejecting repeated ids.
    pub fn from_places<I>(places: I) -> Result<Self, SequenceError>
    where
        I: IntoIterator<Item = Place>,
    {
        let mut sequencer = Self::new();
        for place in places {
            sequencer.add(place)?;
        }

        Ok(sequencer)
    }

    /// Appends `place` to the end of the route.
    pub fn add(&mut self, place: Place) -> Result<&[RoutePoint], SequenceError> {
        if self.contains(&place.id) {
            return Err(SequenceError::Duplicate { id: place.id });
        }

        self.points.push(RoutePoint {
            place,
            role: Role::Start,
        });
        assign_roles(&mut self.points);

        Ok(&self.points)
    }

    /// Removes the point with `id`. Absent ids leave the route untouched.
    pub fn remove(&mut self, id: &str) -> &[RoutePoint] {
        let before = self.points.len();
        self.points.retain(|point| point.id() != id);

        if self.points.len() != before {
            assign_roles(&mut self.points);
        }

        &self.points
    }

    /// Replaces the order with `ids`, which must name every current point exactly once.
    pub fn reorder<S: AsRef<str>>(&mut self, ids: &[S]) -> Result<&[RoutePoint], SequenceError> {
        let (expected, given) = (self.points.len(), ids.len());
        let invalid = || SequenceError::InvalidReorder { expected, given };

        if expected != given {
            return Err(invalid());
        }

        let mut seen = HashSet::with_capacity(ids.len());
        let mut reordered = Vec::with_capacity(ids.len());
        for id in ids {
            let id = id.as_ref();
            if !seen.insert(id) {
                return Err(invalid());
            }

            let point = self
                .points
                .iter()
                .find(|point| point.id() == id)
                .ok_or_else(invalid)?;
            reordered.push(point.clone());
        }

        assign_roles(&mut reordered);
        self.points = reordered;

        Ok(&self.points)
    }

    /// Reorders using the ids of a full sequence, e.g. the list a drag-and-drop produced. Only the
    /// ids are taken from `new_order`; point data and roles come from the current route.
    pub fn reorder_points(
        &mut self,
        new_order: &[RoutePoint],
    ) -> Result<&[RoutePoint], SequenceError> {
        let ids: Vec<&str> = new_order.iter().map(RoutePoint::id).collect();
        self.reorder(ids.as_slice())
    }

    pub fn current(&self) -> &[RoutePoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<RoutePoint> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.points.iter().any(|point| point.id() == id)
    }

    /// Looser duplicate check for places whose ids differ between entry points (search results vs.
    /// typed-in places). Places that both carry coordinates match on raw `mapx`/`mapy`; otherwise
    /// they match on markup-free title. `add` does not consult this.
    pub fn find_similar(&self, place: &Place) -> Option<&RoutePoint> {
        self.points.iter().find(|existing| {
            let existing = &existing.place;
            if place.has_coordinates() && existing.has_coordinates() {
                return same_raw(&place.mapx, &existing.mapx)
                    && same_raw(&place.mapy, &existing.mapy);
            }

            place.plain_title() == existing.plain_title()
        })
    }
}

fn same_raw(a: &Option<String>, b: &Option<String>) -> bool {
    a.as_deref().map(str::trim) == b.as_deref().map(str::trim)
}
