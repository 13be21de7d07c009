// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! ARM System Control Block, ARMv6-M subset.
//!
//! The block is addressed from the start of the System Control Space so that
//! register offsets read the same as in the Cortex-M0+ reference. It
//! overlaps the SysTick and NVIC blocks, which are mapped separately.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::static_ref::StaticRef;

pub const SCB_INSTANCE_COUNT: usize = 1;

/// Key that must accompany every write to AIRCR.
pub const VECTKEY: u32 = 0x05FA;

register_structs! {
    pub ScbRegisters {
        (0x000 => _reserved0),
        /// Auxiliary Control Register
        (0x008 => pub actlr: ReadOnly<u32>),
        (0x00C => _reserved1),
        /// CPUID Base Register
        (0xD00 => pub cpuid: ReadOnly<u32, CpuId::Register>),
        /// Interrupt Control and State Register
        (0xD04 => pub icsr: ReadWrite<u32, InterruptControlAndState::Register>),
        /// Vector Table Offset Register
        (0xD08 => pub vtor: ReadWrite<u32, VectorTableOffset::Register>),
        /// Application Interrupt and Reset Control Register
        (0xD0C => pub aircr: ReadWrite<u32, ApplicationInterruptAndReset::Register>),
        /// System Control Register
        (0xD10 => pub scr: ReadWrite<u32, SystemControl::Register>),
        /// Configuration and Control Register
        (0xD14 => pub ccr: ReadOnly<u32, ConfigurationAndControl::Register>),
        (0xD18 => _reserved2),
        /// System Handler Priority Register 2
        (0xD1C => pub shpr2: ReadWrite<u32, SystemHandlerPriority2::Register>),
        /// System Handler Priority Register 3
        (0xD20 => pub shpr3: ReadWrite<u32, SystemHandlerPriority3::Register>),
        /// System Handler Control and State Register
        (0xD24 => pub shcsr: ReadWrite<u32, SystemHandlerControlAndState::Register>),
        (0xD28 => @END),
    }
}

register_bitfields![u32,
    pub CpuId [
        /// Implementer code assigned by ARM. ARM implementations are 0x41.
        IMPLEMENTER     OFFSET(24)  NUMBITS(8),

        /// Implementer-defined variant number.
        VARIANT         OFFSET(20)  NUMBITS(4),

        /// Architecture always reads as 0xC for ARMv6-M.
        ARCHITECTURE    OFFSET(16)  NUMBITS(4),

        /// Implementer-defined part number.
        PARTNO          OFFSET(4)   NUMBITS(12),

        /// Implementer-defined revision number.
        REVISION        OFFSET(0)   NUMBITS(4)
    ],

    pub InterruptControlAndState [
        /// NMI set-pending bit.
        NMIPENDSET      OFFSET(31)  NUMBITS(1),

        /// Set the PendSV exception pending.
        PENDSVSET       OFFSET(28)  NUMBITS(1),

        /// Clear a pending PendSV exception.
        PENDSVCLR       OFFSET(27)  NUMBITS(1),

        /// Set the SysTick exception pending.
        PENDSTSET       OFFSET(26)  NUMBITS(1),

        /// Clear a pending SysTick exception.
        PENDSTCLR       OFFSET(25)  NUMBITS(1),

        /// Whether an external interrupt, generated by the NVIC, is pending.
        ISRPENDING      OFFSET(22)  NUMBITS(1),

        /// The exception number of the highest priority pending and enabled
        /// interrupt.
        VECTPENDING     OFFSET(12)  NUMBITS(6),

        /// The exception number of the current executing exception.
        VECTACTIVE      OFFSET(0)   NUMBITS(6)
    ],

    pub VectorTableOffset [
        /// Bits [31:7] of the vector table address.
        TBLOFF          OFFSET(7)   NUMBITS(25)
    ],

    pub ApplicationInterruptAndReset [
        /// Register key. Reads as 0xFA05, writes require 0x05FA.
        VECTKEY         OFFSET(16)  NUMBITS(16),

        /// Data endianness. Always 0 (little endian) on this part.
        ENDIANNESS      OFFSET(15)  NUMBITS(1),

        /// Request a system reset.
        SYSRESETREQ     OFFSET(2)   NUMBITS(1),

        /// Clear active state information. Debug use only.
        VECTCLRACTIVE   OFFSET(1)   NUMBITS(1)
    ],

    pub SystemControl [
        /// Whether an interrupt transitioning from inactive to pending is
        /// a wakeup event.
        SEVONPEND       OFFSET(4)   NUMBITS(1),

        /// Use deep sleep as the low power mode.
        SLEEPDEEP       OFFSET(2)   NUMBITS(1),

        /// Enter sleep on return from an ISR to Thread mode.
        SLEEPONEXIT     OFFSET(1)   NUMBITS(1)
    ],

    pub ConfigurationAndControl [
        /// 8-byte stack alignment on exception entry. Always 1.
        STKALIGN        OFFSET(9)   NUMBITS(1),

        /// Unaligned accesses trap. Always 1.
        UNALIGN_TRP     OFFSET(3)   NUMBITS(1)
    ],

    pub SystemHandlerPriority2 [
        /// Priority of SVCall.
        PRI_11          OFFSET(24)  NUMBITS(8)
    ],

    pub SystemHandlerPriority3 [
        /// Priority of SysTick.
        PRI_15          OFFSET(24)  NUMBITS(8),

        /// Priority of PendSV.
        PRI_14          OFFSET(16)  NUMBITS(8)
    ],

    pub SystemHandlerControlAndState [
        /// SVCall is pending.
        SVCALLPENDED    OFFSET(15)  NUMBITS(1)
    ]
];

/// Value to write to AIRCR to request a system reset, given its current
/// contents. The low half-word is preserved.
pub const fn reset_request_value(aircr: u32) -> u32 {
    (aircr & 0xFFFF) | (VECTKEY << 16) | (1 << 2)
}

pub const SCB_BASE_ADDR: usize = 0xE000_E000;

pub const SCB_BASE: StaticRef<ScbRegisters> =
    unsafe { StaticRef::new(SCB_BASE_ADDR as *const ScbRegisters) };

pub const SCB_BASE_ADDRS: [usize; SCB_INSTANCE_COUNT] = [SCB_BASE_ADDR];
pub const SCB_BASE_PTRS: [StaticRef<ScbRegisters>; SCB_INSTANCE_COUNT] = [SCB_BASE];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_check::{assert_field, assert_fields_fit};
    use core::mem::offset_of;

    #[test]
    fn registers_match_armv6m() {
        assert_eq!(offset_of!(ScbRegisters, actlr), 0x8);
        assert_eq!(offset_of!(ScbRegisters, cpuid), 0xD00);
        assert_eq!(offset_of!(ScbRegisters, aircr), 0xD0C);
        assert_eq!(offset_of!(ScbRegisters, shpr2), 0xD1C);
        assert_eq!(offset_of!(ScbRegisters, shcsr), 0xD24);
        assert_eq!(core::mem::size_of::<ScbRegisters>(), 0xD28);
        assert_field!(ApplicationInterruptAndReset::VECTKEY, 16, 16);
        assert_field!(ApplicationInterruptAndReset::SYSRESETREQ, 2, 1);
        assert_field!(InterruptControlAndState::VECTPENDING, 12, 6);
        assert_field!(VectorTableOffset::TBLOFF, 7, 25);
    }

    #[test]
    fn reset_request_replaces_key() {
        // AIRCR reads back the inverted key.
        assert_eq!(reset_request_value(0xFA05_0000), 0x05FA_0004);
        assert_eq!(reset_request_value(0xFA05_8002), 0x05FA_8006);
        let value = u32::from(
            ApplicationInterruptAndReset::VECTKEY.val(VECTKEY)
                + ApplicationInterruptAndReset::SYSRESETREQ::SET,
        );
        assert_eq!(reset_request_value(0), value);
    }

    #[test]
    fn every_field_fits_its_register() {
        assert_fields_fit!(
            CpuId [IMPLEMENTER, VARIANT, ARCHITECTURE, PARTNO, REVISION],
            InterruptControlAndState [NMIPENDSET, PENDSVSET, PENDSVCLR, PENDSTSET, PENDSTCLR,
                ISRPENDING, VECTPENDING, VECTACTIVE],
            VectorTableOffset [TBLOFF],
            ApplicationInterruptAndReset [VECTKEY, ENDIANNESS, SYSRESETREQ, VECTCLRACTIVE],
            SystemControl [SEVONPEND, SLEEPDEEP, SLEEPONEXIT],
            ConfigurationAndControl [STKALIGN, UNALIGN_TRP],
            SystemHandlerPriority2 [PRI_11],
            SystemHandlerPriority3 [PRI_15, PRI_14],
            SystemHandlerControlAndState [SVCALLPENDED],
        );
    }
}
