use num_traits::{CheckedAdd, CheckedMul, CheckedSub, Num, NumAssignOps};

use std::fmt;
use std::str::FromStr;

/// Matrix element
///
/// This trait bound gathers the assumptions the storage engine and the
/// arithmetic routines make about the numeric type of an entry. It is
/// implemented for the common signed integers and for 32bit and 64bit float
/// points. A matrix uses a single element type for all of its entries, chosen
/// at compile time.
///
/// Arithmetic on entries goes through the `try_*` methods, which return
/// `None` when the result does not fit the element type. Float points follow
/// IEEE arithmetic and never report overflow.
pub trait Element:
    Num
    + NumAssignOps
    + Copy
    + PartialOrd
    + Sync
    + Send
    + Default
    + fmt::Display
    + fmt::Debug
    + FromStr
    + 'static
{
    fn try_add(self, other: Self) -> Option<Self>;
    fn try_sub(self, other: Self) -> Option<Self>;
    fn try_mul(self, other: Self) -> Option<Self>;
}

macro_rules! impl_checked_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                fn try_add(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }

                fn try_sub(self, other: Self) -> Option<Self> {
                    CheckedSub::checked_sub(&self, &other)
                }

                fn try_mul(self, other: Self) -> Option<Self> {
                    CheckedMul::checked_mul(&self, &other)
                }
            }
        )*
    };
}

macro_rules! impl_float_element {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                fn try_add(self, other: Self) -> Option<Self> {
                    Some(self + other)
                }

                fn try_sub(self, other: Self) -> Option<Self> {
                    Some(self - other)
                }

                fn try_mul(self, other: Self) -> Option<Self> {
                    Some(self * other)
                }
            }
        )*
    };
}

impl_checked_element!(i32, i64);
impl_float_element!(f32, f64);

pub mod error;
pub mod helpers;
pub mod io;
pub mod matrix;
pub mod ops;
pub mod param_guard;
pub mod session;

pub use error::{MatrixError, Result};
pub use matrix::SparseMatrix;
