use serde::{Deserialize, Serialize};

use crate::entities::Place;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Start,
    Waypoint,
    End,
}

impl Role {
    /// Role of the element at `index` in a sequence of `len` elements.
    pub fn for_position(index: usize, len: usize) -> Self {
        if index == 0 {
            Role::Start
        } else if index + 1 == len {
            Role::End
        } else {
            Role::Waypoint
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Waypoint => "waypoint",
            Self::End => "end",
        }
    }
}

/// A place tagged with its position-derived role. Only the sequencer assigns `role`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    #[serde(flatten)]
    pub place: Place,
    #[serde(rename = "type")]
    pub role: Role,
}

impl RoutePoint {
    pub fn id(&self) -> &str {
        &self.place.id
    }
}

/// Reassigns every role from position.
pub fn assign_roles(points: &mut [RoutePoint]) {
    let len = points.len();
    for (index, point) in points.iter_mut().enumerate() {
        point.role = Role::for_position(index, len);
    }
}
