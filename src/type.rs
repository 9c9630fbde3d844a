use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::num::ParseIntError;
use std::str::FromStr;

use num_traits::{PrimInt, Signed, ToPrimitive};

/// A trait for types that can be used as point coordinates.
///
/// This trait is sealed and cannot be implemented for external types. Coordinates are signed
/// primitive integers; coordinate differences are formed in `f64` and distances rounded to `f32`.
pub trait Coord:
    private::Sealed
    + PrimInt
    + Signed
    + ToPrimitive
    + FromStr<Err = ParseIntError>
    + Default
    + Hash
    + Debug
    + Display
    + Send
    + Sync
{
    /// Convert to `f64` for coordinate differences. Large `i64` values round.
    #[inline]
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl Coord for i8 {}
impl Coord for i16 {}
impl Coord for i32 {}
impl Coord for i64 {}

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}

    impl Sealed for i8 {}
    impl Sealed for i16 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
}
