// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Low Power Timer (LPTMR).

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::interrupts;
use crate::static_ref::StaticRef;

pub const LPTMR_INSTANCE_COUNT: usize = 1;

register_structs! {
    pub LptmrRegisters {
        /// Low Power Timer Control Status Register
        (0x0 => pub csr: ReadWrite<u32, CSR::Register>),
        /// Low Power Timer Prescale Register
        (0x4 => pub psr: ReadWrite<u32, PSR::Register>),
        /// Low Power Timer Compare Register
        (0x8 => pub cmr: ReadWrite<u32, CMR::Register>),
        /// Low Power Timer Counter Register. Write any value before reading
        /// to latch the counter.
        (0xC => pub cnr: ReadWrite<u32, CNR::Register>),
        (0x10 => @END),
    }
}

register_bitfields![u32,
    pub CSR [
        /// Timer enable
        TEN OFFSET(0) NUMBITS(1) [],
        /// Timer mode select
        TMS OFFSET(1) NUMBITS(1) [
            TimeCounter = 0,
            PulseCounter = 1
        ],
        /// Timer free-running counter
        TFC OFFSET(2) NUMBITS(1) [],
        /// Timer pin polarity
        TPP OFFSET(3) NUMBITS(1) [],
        /// Timer pin select
        TPS OFFSET(4) NUMBITS(2) [],
        /// Timer interrupt enable
        TIE OFFSET(6) NUMBITS(1) [],
        /// Timer compare flag
        TCF OFFSET(7) NUMBITS(1) [],
        /// Timer DMA request enable
        TDRE OFFSET(8) NUMBITS(1) []
    ],
    pub PSR [
        /// Prescaler clock select
        PCS OFFSET(0) NUMBITS(2) [
            Sirc = 0,
            Lpo1k = 1,
            Rtc = 2,
            Pcc = 3
        ],
        /// Prescaler bypass
        PBYP OFFSET(2) NUMBITS(1) [],
        /// Prescale value, 2^(PRESCALE + 1)
        PRESCALE OFFSET(3) NUMBITS(4) []
    ],
    pub CMR [
        COMPARE OFFSET(0) NUMBITS(16) []
    ],
    pub CNR [
        COUNTER OFFSET(0) NUMBITS(16) []
    ]
];

pub const LPTMR0_BASE_ADDR: usize = 0x4004_0000;

pub const LPTMR0_BASE: StaticRef<LptmrRegisters> =
    unsafe { StaticRef::new(LPTMR0_BASE_ADDR as *const LptmrRegisters) };

pub const LPTMR_BASE_ADDRS: [usize; LPTMR_INSTANCE_COUNT] = [LPTMR0_BASE_ADDR];
pub const LPTMR_BASE_PTRS: [StaticRef<LptmrRegisters>; LPTMR_INSTANCE_COUNT] = [LPTMR0_BASE];
pub const LPTMR_IRQS: [u32; LPTMR_INSTANCE_COUNT] = [interrupts::LPTMR0];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_check::{assert_field, assert_fields_fit};

    #[test]
    fn fields() {
        assert_eq!(core::mem::size_of::<LptmrRegisters>(), 0x10);
        assert_field!(CSR::TPS, 4, 2);
        assert_field!(CSR::TDRE, 8, 1);
        assert_field!(PSR::PRESCALE, 3, 4);
        assert_field!(CMR::COMPARE, 0, 16);
        assert_eq!(u32::from(PSR::PCS::Lpo1k + PSR::PBYP::SET), 0b101);
    }

    #[test]
    fn every_field_fits_its_register() {
        assert_fields_fit!(
            CSR [TEN, TMS, TFC, TPP, TPS, TIE, TCF, TDRE],
            PSR [PCS, PBYP, PRESCALE],
            CMR [COMPARE],
            CNR [COUNTER],
        );
    }
}
