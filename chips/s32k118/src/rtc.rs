// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Real Time Clock (RTC).

use tock_registers::registers::ReadWrite;
use tock_registers::{register_bitfields, register_structs};

use crate::interrupts;
use crate::static_ref::StaticRef;

pub const RTC_INSTANCE_COUNT: usize = 1;

register_structs! {
    pub RtcRegisters {
        /// RTC Time Seconds Register
        (0x00 => pub tsr: ReadWrite<u32>),
        /// RTC Time Prescaler Register
        (0x04 => pub tpr: ReadWrite<u32, TPR::Register>),
        /// RTC Time Alarm Register
        (0x08 => pub tar: ReadWrite<u32>),
        /// RTC Time Compensation Register
        (0x0C => pub tcr: ReadWrite<u32, TCR::Register>),
        /// RTC Control Register
        (0x10 => pub cr: ReadWrite<u32, CR::Register>),
        /// RTC Status Register
        (0x14 => pub sr: ReadWrite<u32, SR::Register>),
        /// RTC Lock Register
        (0x18 => pub lr: ReadWrite<u32, LR::Register>),
        /// RTC Interrupt Enable Register
        (0x1C => pub ier: ReadWrite<u32, IER::Register>),
        (0x20 => @END),
    }
}

register_bitfields![u32,
    pub TPR [
        TPR OFFSET(0) NUMBITS(16) []
    ],
    pub TCR [
        /// Time compensation register
        TCR OFFSET(0) NUMBITS(8) [],
        /// Compensation interval register
        CIR OFFSET(8) NUMBITS(8) [],
        /// Time compensation value
        TCV OFFSET(16) NUMBITS(8) [],
        /// Compensation interval counter
        CIC OFFSET(24) NUMBITS(8) []
    ],
    pub CR [
        /// Software reset
        SWR OFFSET(0) NUMBITS(1) [],
        /// Supervisor access
        SUP OFFSET(2) NUMBITS(1) [],
        /// Update mode
        UM OFFSET(3) NUMBITS(1) [],
        /// Clock pin select
        CPS OFFSET(5) NUMBITS(1) [],
        /// LPO select, counts the 1 kHz LPO instead of the 32 kHz clock
        LPOS OFFSET(7) NUMBITS(1) [],
        /// Clock pin enable
        CPE OFFSET(24) NUMBITS(1) []
    ],
    pub SR [
        /// Time invalid flag
        TIF OFFSET(0) NUMBITS(1) [],
        /// Time overflow flag
        TOF OFFSET(1) NUMBITS(1) [],
        /// Time alarm flag
        TAF OFFSET(2) NUMBITS(1) [],
        /// Time counter enable
        TCE OFFSET(4) NUMBITS(1) []
    ],
    pub LR [
        /// Time compensation lock
        TCL OFFSET(3) NUMBITS(1) [],
        /// Control register lock
        CRL OFFSET(4) NUMBITS(1) [],
        /// Status register lock
        SRL OFFSET(5) NUMBITS(1) [],
        /// Lock register lock
        LRL OFFSET(6) NUMBITS(1) []
    ],
    pub IER [
        /// Time invalid interrupt enable
        TIIE OFFSET(0) NUMBITS(1) [],
        /// Time overflow interrupt enable
        TOIE OFFSET(1) NUMBITS(1) [],
        /// Time alarm interrupt enable
        TAIE OFFSET(2) NUMBITS(1) [],
        /// Time seconds interrupt enable
        TSIE OFFSET(4) NUMBITS(1) [],
        /// Timer seconds interrupt configuration
        TSIC OFFSET(16) NUMBITS(3) [
            Hz1 = 0,
            Hz2 = 1,
            Hz4 = 2,
            Hz8 = 3,
            Hz16 = 4,
            Hz32 = 5,
            Hz64 = 6,
            Hz128 = 7
        ]
    ]
];

pub const RTC_BASE_ADDR: usize = 0x4003_D000;

pub const RTC_BASE: StaticRef<RtcRegisters> =
    unsafe { StaticRef::new(RTC_BASE_ADDR as *const RtcRegisters) };

pub const RTC_BASE_ADDRS: [usize; RTC_INSTANCE_COUNT] = [RTC_BASE_ADDR];
pub const RTC_BASE_PTRS: [StaticRef<RtcRegisters>; RTC_INSTANCE_COUNT] = [RTC_BASE];
pub const RTC_IRQS: [u32; RTC_INSTANCE_COUNT] = [interrupts::RTC];
pub const RTC_SECONDS_IRQS: [u32; RTC_INSTANCE_COUNT] = [interrupts::RTC_SECONDS];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_check::{assert_field, assert_fields_fit};

    #[test]
    fn layout() {
        assert_eq!(core::mem::offset_of!(RtcRegisters, ier), 0x1C);
        assert_eq!(core::mem::size_of::<RtcRegisters>(), 0x20);
        assert_field!(TCR::CIC, 24, 8);
        assert_field!(CR::CPE, 24, 1);
        assert_field!(IER::TSIC, 16, 3);
        assert_eq!(RTC_IRQS[0] + 1, RTC_SECONDS_IRQS[0]);
    }

    #[test]
    fn every_field_fits_its_register() {
        assert_fields_fit!(
            TPR [TPR],
            TCR [TCR, CIR, TCV, CIC],
            CR [SWR, SUP, UM, CPS, LPOS, CPE],
            SR [TIF, TOF, TAF, TCE],
            LR [TCL, CRL, SRL, LRL],
            IER [TIIE, TOIE, TAIE, TSIE, TSIC],
        );
    }
}
