//! 2D collision geometry and response
//!
//! - [`primitives`] - circles, rects and their contact tests
//! - [`response`] - hit impulses and boundary bounce

pub mod primitives;
pub mod response;

pub use primitives::{circle_overlap, circle_rect_contact, Circle, CircleContact, Rect, RectContact};
pub use response::{hit_impulse, resolve_boundary, restitution, HitImpulse};
