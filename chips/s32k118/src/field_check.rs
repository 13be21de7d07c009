// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Test helpers for checking bit-field geometry against the reference manual.

use tock_registers::fields::Field;
use tock_registers::{RegisterLongName, UIntLike};

/// Check that `field` sits at `shift` and is `width` bits wide, and that it
/// fits inside a register of type `T`.
pub fn check<T, R>(field: Field<T, R>, shift: usize, width: u32)
where
    T: UIntLike + Into<u32>,
    R: RegisterLongName,
{
    let reg_bits = (core::mem::size_of::<T>() * 8) as u32;
    let mask: u32 = field.mask.into();
    assert_eq!(field.shift, shift, "shift");
    assert_eq!(mask.count_ones(), width, "width");
    // Contiguous and unshifted.
    assert_eq!(u64::from(mask), (1u64 << width) - 1, "mask");
    assert!(field.shift as u32 + width <= reg_bits, "field overflows register");
    assert_eq!(
        (u64::from(mask) << field.shift) >> field.shift,
        u64::from(mask)
    );
}

/// Check that `field` is a contiguous mask that ends inside a register of
/// type `T`.
pub fn fits<T, R>(field: Field<T, R>, name: &str)
where
    T: UIntLike + Into<u32>,
    R: RegisterLongName,
{
    let reg_bits = (core::mem::size_of::<T>() * 8) as u32;
    let mask: u32 = field.mask.into();
    let width = mask.count_ones();
    assert!(width > 0, "{name}: empty field");
    assert_eq!(u64::from(mask), (1u64 << width) - 1, "{name}: mask not contiguous");
    assert!(field.shift as u32 + width <= reg_bits, "{name}: overflows register");
}

/// `assert_field!(REG::FIELD, shift, width)`
macro_rules! assert_field {
    ($field:expr, $shift:expr, $width:expr) => {
        $crate::field_check::check($field, $shift, $width)
    };
}

/// `assert_fields_fit!(REG [FIELD, ...], ...)` runs [`fits`] on every
/// listed field.
macro_rules! assert_fields_fit {
    ($($reg:ident [$($field:ident),* $(,)?]),* $(,)?) => {
        $($(
            $crate::field_check::fits(
                $reg::$field,
                concat!(stringify!($reg), "::", stringify!($field)),
            );
        )*)*
    };
}

pub(crate) use {assert_field, assert_fields_fit};
