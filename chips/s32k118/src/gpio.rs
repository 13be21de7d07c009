// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! General-purpose input/output (GPIO) data registers.
//!
//! Pin multiplexing, pulls and interrupt configuration live in the PORT
//! block, see [`crate::port`].

use tock_registers::registers::{ReadOnly, ReadWrite, WriteOnly};
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

pub const GPIO_INSTANCE_COUNT: usize = 5;
pub const GPIO_PINS_PER_PORT: usize = 32;

register_structs! {
    pub GpioRegisters {
        /// Port Data Output Register
        (0x00 => pub pdor: ReadWrite<u32, PDOR::Register>),
        /// Port Set Output Register
        (0x04 => pub psor: WriteOnly<u32, PSOR::Register>),
        /// Port Clear Output Register
        (0x08 => pub pcor: WriteOnly<u32, PCOR::Register>),
        /// Port Toggle Output Register
        (0x0C => pub ptor: WriteOnly<u32, PTOR::Register>),
        /// Port Data Input Register
        (0x10 => pub pdir: ReadOnly<u32, PDIR::Register>),
        /// Port Data Direction Register
        (0x14 => pub pddr: ReadWrite<u32, PDDR::Register>),
        /// Port Input Disable Register
        (0x18 => pub pidr: ReadWrite<u32, PIDR::Register>),
        (0x1C => @END),
    }
}

register_bitfields![u32,
    pub PDOR [
        PDO OFFSET(0) NUMBITS(32) []
    ],
    pub PSOR [
        PTSO OFFSET(0) NUMBITS(32) []
    ],
    pub PCOR [
        PTCO OFFSET(0) NUMBITS(32) []
    ],
    pub PTOR [
        PTTO OFFSET(0) NUMBITS(32) []
    ],
    pub PDIR [
        PDI OFFSET(0) NUMBITS(32) []
    ],
    pub PDDR [
        /// 1 configures the pin as output
        PDD OFFSET(0) NUMBITS(32) []
    ],
    pub PIDR [
        PID OFFSET(0) NUMBITS(32) []
    ]
];

pub const PTA_BASE_ADDR: usize = 0x400F_F000;
pub const PTB_BASE_ADDR: usize = 0x400F_F040;
pub const PTC_BASE_ADDR: usize = 0x400F_F080;
pub const PTD_BASE_ADDR: usize = 0x400F_F0C0;
pub const PTE_BASE_ADDR: usize = 0x400F_F100;

pub const PTA_BASE: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(PTA_BASE_ADDR as *const GpioRegisters) };
pub const PTB_BASE: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(PTB_BASE_ADDR as *const GpioRegisters) };
pub const PTC_BASE: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(PTC_BASE_ADDR as *const GpioRegisters) };
pub const PTD_BASE: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(PTD_BASE_ADDR as *const GpioRegisters) };
pub const PTE_BASE: StaticRef<GpioRegisters> =
    unsafe { StaticRef::new(PTE_BASE_ADDR as *const GpioRegisters) };

pub const GPIO_BASE_ADDRS: [usize; GPIO_INSTANCE_COUNT] = [
    PTA_BASE_ADDR,
    PTB_BASE_ADDR,
    PTC_BASE_ADDR,
    PTD_BASE_ADDR,
    PTE_BASE_ADDR,
];
pub const GPIO_BASE_PTRS: [StaticRef<GpioRegisters>; GPIO_INSTANCE_COUNT] =
    [PTA_BASE, PTB_BASE, PTC_BASE, PTD_BASE, PTE_BASE];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_check::assert_fields_fit;

    #[test]
    fn ports_are_packed_every_64_bytes() {
        assert_eq!(core::mem::size_of::<GpioRegisters>(), 0x1C);
        assert_eq!(core::mem::offset_of!(GpioRegisters, pidr), 0x18);
        for pair in GPIO_BASE_ADDRS.windows(2) {
            assert_eq!(pair[1] - pair[0], 0x40);
        }
        for (addr, ptr) in GPIO_BASE_ADDRS.iter().zip(GPIO_BASE_PTRS.iter()) {
            assert_eq!(*addr, ptr.address());
        }
    }

    #[test]
    fn every_field_fits_its_register() {
        assert_fields_fit!(
            PDOR [PDO],
            PSOR [PTSO],
            PCOR [PTCO],
            PTOR [PTTO],
            PDIR [PDI],
            PDDR [PDD],
            PIDR [PID],
        );
    }
}
