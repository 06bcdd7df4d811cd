//! Response classification for the MOT History trade API.
//!
//! The upstream API never tags its top-level responses: a vehicle lookup
//! returns either the tested-vehicle shape or the new-registration shape,
//! and only the nested `motTests` elements carry an explicit discriminant
//! (`dataSource`). This asymmetry is preserved here: top-level dispatch is
//! a structural trial over strictly validated candidate shapes in priority
//! order, nested dispatch is an exact-match lookup on the discriminant.
//!
//! All functions are pure over their inputs. They either produce a fully
//! validated record or a specific, inspectable error; there is no fallback
//! shape and no partial result.

mod bulk;
mod discriminate;
mod vehicle;

pub use bulk::parse_bulk_download;
pub use discriminate::discriminate;
pub use vehicle::classify_vehicle;
