use core::fmt::{Debug, Display};
use core::iter::Sum;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use num_traits::{Bounded, CheckedAdd, CheckedMul, CheckedSub, NumCast, One, ToPrimitive, Zero};

/// A trait representing the integer type capacities, flows and costs are expressed in.
///
/// Cost accumulation goes through the `Checked*` operations so that a misused priority bias
/// surfaces as an error instead of silently wrapping. Pick a type wide enough for the instance:
/// `i64` comfortably holds a bias of `10^14` applied a few hundred times.
pub trait Int:
    Copy
    + Sum<Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Ord
    + AddAssign
    + SubAssign
    + Zero
    + One
    + Bounded
    + CheckedAdd
    + CheckedSub
    + CheckedMul
    + NumCast
    + ToPrimitive
    + Debug
    + Display
    + Default
{
}

impl Int for i32 {}

impl Int for i64 {}

impl Int for i128 {}
