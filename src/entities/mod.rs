mod coordinates;
mod place;
mod route;
mod route_point;
mod session;

pub use coordinates::{decode_degrees, encode_degrees, CoordinateError, Coordinates};
pub use place::{strip_tags, Place};
pub use route::SavedRoute;
pub use route_point::{assign_roles, Role, RoutePoint};
pub use session::Session;
