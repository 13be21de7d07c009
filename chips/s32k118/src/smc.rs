// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! System Mode Controller (SMC).

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

pub const SMC_INSTANCE_COUNT: usize = 1;

register_structs! {
    pub SmcRegisters {
        /// SMC Version ID Register
        (0x00 => pub verid: ReadOnly<u32>),
        /// SMC Parameter Register
        (0x04 => pub param: ReadOnly<u32>),
        /// Power Mode Protection register
        (0x08 => pub pmprot: ReadWrite<u32, PMPROT::Register>),
        /// Power Mode Control register
        (0x0C => pub pmctrl: ReadWrite<u32, PMCTRL::Register>),
        /// Stop Control Register
        (0x10 => pub stopctrl: ReadWrite<u32, STOPCTRL::Register>),
        /// Power Mode Status register
        (0x14 => pub pmstat: ReadOnly<u32, PMSTAT::Register>),
        (0x18 => @END),
    }
}

register_bitfields![u32,
    pub PMPROT [
        /// Allow very low power modes, write once
        AVLP OFFSET(5) NUMBITS(1) []
    ],
    pub PMCTRL [
        /// Stop mode control
        STOPM OFFSET(0) NUMBITS(3) [
            Stop = 0,
            Vlps = 2
        ],
        /// Very low power stop aborted
        VLPSA OFFSET(3) NUMBITS(1) [],
        /// Run mode control
        RUNM OFFSET(5) NUMBITS(2) [
            Run = 0,
            Vlpr = 2
        ]
    ],
    pub STOPCTRL [
        /// Stop option
        STOPO OFFSET(6) NUMBITS(2) [
            Stop1 = 1,
            Stop2 = 2
        ]
    ],
    pub PMSTAT [
        PMSTAT OFFSET(0) NUMBITS(8) [
            Run = 0x01,
            Stop = 0x02,
            Vlpr = 0x04,
            Vlps = 0x10
        ]
    ]
];

pub const SMC_BASE_ADDR: usize = 0x4007_E000;

pub const SMC_BASE: StaticRef<SmcRegisters> =
    unsafe { StaticRef::new(SMC_BASE_ADDR as *const SmcRegisters) };

pub const SMC_BASE_ADDRS: [usize; SMC_INSTANCE_COUNT] = [SMC_BASE_ADDR];
pub const SMC_BASE_PTRS: [StaticRef<SmcRegisters>; SMC_INSTANCE_COUNT] = [SMC_BASE];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_check::{assert_field, assert_fields_fit};

    #[test]
    fn layout() {
        assert_eq!(core::mem::offset_of!(SmcRegisters, pmstat), 0x14);
        assert_eq!(core::mem::size_of::<SmcRegisters>(), 0x18);
        assert_field!(PMCTRL::RUNM, 5, 2);
        assert_field!(STOPCTRL::STOPO, 6, 2);
        assert_eq!(u32::from(PMCTRL::RUNM::Vlpr), 0x40);
    }

    #[test]
    fn every_field_fits_its_register() {
        assert_fields_fit!(
            PMPROT [AVLP],
            PMCTRL [STOPM, VLPSA, RUNM],
            STOPCTRL [STOPO],
            PMSTAT [PMSTAT],
        );
    }
}
