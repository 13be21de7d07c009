// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Peripheral Clock Controller (PCC).
//!
//! One control register per peripheral slot. Slots without a peripheral on
//! this part read as zero (`PR` clear).

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

pub const PCC_INSTANCE_COUNT: usize = 1;
pub const PCC_PCCN_COUNT: usize = 116;

pub const PCC_FTFC_INDEX: usize = 32;
pub const PCC_DMAMUX_INDEX: usize = 33;
pub const PCC_FLEXCAN0_INDEX: usize = 36;
pub const PCC_LPSPI0_INDEX: usize = 44;
pub const PCC_LPSPI1_INDEX: usize = 45;
pub const PCC_CRC_INDEX: usize = 50;
pub const PCC_PDB0_INDEX: usize = 54;
pub const PCC_LPIT_INDEX: usize = 55;
pub const PCC_FTM0_INDEX: usize = 56;
pub const PCC_FTM1_INDEX: usize = 57;
pub const PCC_ADC0_INDEX: usize = 59;
pub const PCC_RTC_INDEX: usize = 61;
pub const PCC_LPTMR0_INDEX: usize = 64;
pub const PCC_PORTA_INDEX: usize = 73;
pub const PCC_PORTB_INDEX: usize = 74;
pub const PCC_PORTC_INDEX: usize = 75;
pub const PCC_PORTD_INDEX: usize = 76;
pub const PCC_PORTE_INDEX: usize = 77;
pub const PCC_FLEXIO_INDEX: usize = 90;
pub const PCC_LPI2C0_INDEX: usize = 102;
pub const PCC_LPUART0_INDEX: usize = 106;
pub const PCC_LPUART1_INDEX: usize = 107;
pub const PCC_CMP0_INDEX: usize = 115;

register_structs! {
    pub PccRegisters {
        /// PCC Register n
        (0x000 => pub pccn: [ReadWrite<u32, PCCN::Register>; PCC_PCCN_COUNT]),
        (0x1D0 => @END),
    }
}

register_bitfields![u32,
    pub PCCN [
        /// Peripheral clock divider select, divide by PCD + 1
        PCD OFFSET(0) NUMBITS(3) [],
        /// Peripheral clock divider fraction, multiply by FRAC + 1
        FRAC OFFSET(3) NUMBITS(1) [],
        /// Peripheral clock source select
        PCS OFFSET(24) NUMBITS(3) [
            ClockOff = 0,
            SoscDiv = 1,
            SircDiv = 2,
            FircDiv = 3
        ],
        /// Clock gate control
        CGC OFFSET(30) NUMBITS(1) [],
        /// Peripheral present
        PR OFFSET(31) NUMBITS(1) []
    ]
];

pub const PCC_BASE_ADDR: usize = 0x4006_5000;

pub const PCC_BASE: StaticRef<PccRegisters> =
    unsafe { StaticRef::new(PCC_BASE_ADDR as *const PccRegisters) };

pub const PCC_BASE_ADDRS: [usize; PCC_INSTANCE_COUNT] = [PCC_BASE_ADDR];
pub const PCC_BASE_PTRS: [StaticRef<PccRegisters>; PCC_INSTANCE_COUNT] = [PCC_BASE];

/// Byte offset of slot `index` from the PCC base.
pub const fn register_offset(index: usize) -> usize {
    index * 4
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_check::{assert_field, assert_fields_fit};

    #[test]
    fn slot_offsets() {
        assert_eq!(core::mem::size_of::<PccRegisters>(), 0x1D0);
        assert_eq!(register_offset(PCC_FTFC_INDEX), 0x80);
        assert_eq!(register_offset(PCC_LPUART0_INDEX), 0x1A8);
        assert_eq!(register_offset(PCC_CMP0_INDEX), 0x1CC);
        assert!(PCC_CMP0_INDEX < PCC_PCCN_COUNT);
    }

    #[test]
    fn fields() {
        assert_field!(PCCN::PCD, 0, 3);
        assert_field!(PCCN::PCS, 24, 3);
        assert_field!(PCCN::CGC, 30, 1);
        assert_eq!(u32::from(PCCN::PCS::FircDiv + PCCN::CGC::SET), 0x4300_0000);
    }

    #[test]
    fn every_field_fits_its_register() {
        assert_fields_fit!(
            PCCN [PCD, FRAC, PCS, CGC, PR],
        );
    }
}
