// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Flexible I/O (FlexIO): four shifters, four timers and eight pins.
//!
//! The shifter buffer is readable in four arrangements (`SHIFTBUF`,
//! bit-swapped, byte-swapped and bit-byte-swapped); each has its own
//! window.

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::interrupts;
use crate::static_ref::StaticRef;

pub const FLEXIO_INSTANCE_COUNT: usize = 1;
pub const FLEXIO_SHIFTERS: usize = 4;
pub const FLEXIO_TIMERS: usize = 4;

register_structs! {
    pub FlexioRegisters {
        /// Version ID Register
        (0x000 => pub verid: ReadOnly<u32, VERID::Register>),
        /// Parameter Register
        (0x004 => pub param: ReadOnly<u32, PARAM::Register>),
        /// FlexIO Control Register
        (0x008 => pub ctrl: ReadWrite<u32, CTRL::Register>),
        /// Pin State Register
        (0x00C => pub pin: ReadOnly<u32, PIN::Register>),
        /// Shifter Status Register
        (0x010 => pub shiftstat: ReadWrite<u32, SHIFTERS::Register>),
        /// Shifter Error Register
        (0x014 => pub shifterr: ReadWrite<u32, SHIFTERS::Register>),
        /// Timer Status Register
        (0x018 => pub timstat: ReadWrite<u32, SHIFTERS::Register>),
        (0x01C => _reserved0),
        /// Shifter Status Interrupt Enable
        (0x020 => pub shiftsien: ReadWrite<u32, SHIFTERS::Register>),
        /// Shifter Error Interrupt Enable
        (0x024 => pub shifteien: ReadWrite<u32, SHIFTERS::Register>),
        /// Timer Interrupt Enable Register
        (0x028 => pub timien: ReadWrite<u32, SHIFTERS::Register>),
        (0x02C => _reserved1),
        /// Shifter Status DMA Enable
        (0x030 => pub shiftsden: ReadWrite<u32, SHIFTERS::Register>),
        (0x034 => _reserved2),
        /// Shifter Control N Register
        (0x080 => pub shiftctl: [ReadWrite<u32, SHIFTCTL::Register>; FLEXIO_SHIFTERS]),
        (0x090 => _reserved3),
        /// Shifter Configuration N Register
        (0x100 => pub shiftcfg: [ReadWrite<u32, SHIFTCFG::Register>; FLEXIO_SHIFTERS]),
        (0x110 => _reserved4),
        /// Shifter Buffer N Register
        (0x200 => pub shiftbuf: [ReadWrite<u32>; FLEXIO_SHIFTERS]),
        (0x210 => _reserved5),
        /// Shifter Buffer N Bit Swapped Register
        (0x280 => pub shiftbufbis: [ReadWrite<u32>; FLEXIO_SHIFTERS]),
        (0x290 => _reserved6),
        /// Shifter Buffer N Byte Swapped Register
        (0x300 => pub shiftbufbys: [ReadWrite<u32>; FLEXIO_SHIFTERS]),
        (0x310 => _reserved7),
        /// Shifter Buffer N Bit Byte Swapped Register
        (0x380 => pub shiftbufbbs: [ReadWrite<u32>; FLEXIO_SHIFTERS]),
        (0x390 => _reserved8),
        /// Timer Control N Register
        (0x400 => pub timctl: [ReadWrite<u32, TIMCTL::Register>; FLEXIO_TIMERS]),
        (0x410 => _reserved9),
        /// Timer Configuration N Register
        (0x480 => pub timcfg: [ReadWrite<u32, TIMCFG::Register>; FLEXIO_TIMERS]),
        (0x490 => _reserved10),
        /// Timer Compare N Register
        (0x500 => pub timcmp: [ReadWrite<u32, TIMCMP::Register>; FLEXIO_TIMERS]),
        (0x510 => @END),
    }
}

register_bitfields![u32,
    pub VERID [
        FEATURE OFFSET(0) NUMBITS(16) [],
        MINOR OFFSET(16) NUMBITS(8) [],
        MAJOR OFFSET(24) NUMBITS(8) []
    ],
    pub PARAM [
        SHIFTER OFFSET(0) NUMBITS(8) [],
        TIMER OFFSET(8) NUMBITS(8) [],
        PIN OFFSET(16) NUMBITS(8) [],
        TRIGGER OFFSET(24) NUMBITS(8) []
    ],
    pub CTRL [
        /// FlexIO enable
        FLEXEN OFFSET(0) NUMBITS(1) [],
        /// Software reset
        SWRST OFFSET(1) NUMBITS(1) [],
        /// Fast access
        FASTACC OFFSET(2) NUMBITS(1) [],
        /// Debug enable
        DBGE OFFSET(30) NUMBITS(1) [],
        /// Doze enable
        DOZEN OFFSET(31) NUMBITS(1) []
    ],
    pub PIN [
        PDI OFFSET(0) NUMBITS(8) []
    ],
    // Status, error, interrupt and DMA enables: one bit per shifter or timer
    pub SHIFTERS [
        FLAGS OFFSET(0) NUMBITS(4) []
    ],
    pub SHIFTCTL [
        /// Shifter mode
        SMOD OFFSET(0) NUMBITS(3) [
            Disabled = 0,
            Receive = 1,
            Transmit = 2,
            MatchStore = 4,
            MatchContinuous = 5
        ],
        PINPOL OFFSET(7) NUMBITS(1) [],
        PINSEL OFFSET(8) NUMBITS(3) [],
        PINCFG OFFSET(16) NUMBITS(2) [
            Disabled = 0,
            OpenDrain = 1,
            Bidirectional = 2,
            Output = 3
        ],
        TIMPOL OFFSET(23) NUMBITS(1) [],
        TIMSEL OFFSET(24) NUMBITS(2) []
    ],
    pub SHIFTCFG [
        /// Shifter start bit
        SSTART OFFSET(0) NUMBITS(2) [],
        /// Shifter stop bit
        SSTOP OFFSET(4) NUMBITS(2) [],
        /// Input source
        INSRC OFFSET(8) NUMBITS(1) []
    ],
    pub TIMCTL [
        /// Timer mode
        TIMOD OFFSET(0) NUMBITS(2) [
            Disabled = 0,
            DualBaud8Bit = 1,
            DualPwm8Bit = 2,
            Counter16Bit = 3
        ],
        PINPOL OFFSET(7) NUMBITS(1) [],
        PINSEL OFFSET(8) NUMBITS(3) [],
        PINCFG OFFSET(16) NUMBITS(2) [],
        /// Trigger source
        TRGSRC OFFSET(22) NUMBITS(1) [
            External = 0,
            Internal = 1
        ],
        TRGPOL OFFSET(23) NUMBITS(1) [],
        TRGSEL OFFSET(24) NUMBITS(4) []
    ],
    pub TIMCFG [
        TSTART OFFSET(1) NUMBITS(1) [],
        TSTOP OFFSET(4) NUMBITS(2) [],
        TIMENA OFFSET(8) NUMBITS(3) [],
        TIMDIS OFFSET(12) NUMBITS(3) [],
        TIMRST OFFSET(16) NUMBITS(3) [],
        TIMDEC OFFSET(20) NUMBITS(2) [],
        TIMOUT OFFSET(24) NUMBITS(2) []
    ],
    pub TIMCMP [
        CMP OFFSET(0) NUMBITS(16) []
    ]
];

pub const FLEXIO_BASE_ADDR: usize = 0x4005_A000;

pub const FLEXIO_BASE: StaticRef<FlexioRegisters> =
    unsafe { StaticRef::new(FLEXIO_BASE_ADDR as *const FlexioRegisters) };

pub const FLEXIO_BASE_ADDRS: [usize; FLEXIO_INSTANCE_COUNT] = [FLEXIO_BASE_ADDR];
pub const FLEXIO_BASE_PTRS: [StaticRef<FlexioRegisters>; FLEXIO_INSTANCE_COUNT] = [FLEXIO_BASE];
pub const FLEXIO_IRQS: [u32; FLEXIO_INSTANCE_COUNT] = [interrupts::FLEXIO];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_check::{assert_field, assert_fields_fit};
    use core::mem::offset_of;

    #[test]
    fn buffer_windows() {
        assert_eq!(offset_of!(FlexioRegisters, shiftsden), 0x030);
        assert_eq!(offset_of!(FlexioRegisters, shiftctl), 0x080);
        assert_eq!(offset_of!(FlexioRegisters, shiftbuf), 0x200);
        assert_eq!(offset_of!(FlexioRegisters, shiftbufbbs), 0x380);
        assert_eq!(offset_of!(FlexioRegisters, timcmp), 0x500);
    }

    #[test]
    fn shifter_and_timer_fields() {
        assert_field!(SHIFTCTL::TIMSEL, 24, 2);
        assert_field!(SHIFTCTL::PINCFG, 16, 2);
        assert_field!(TIMCTL::TRGSEL, 24, 4);
        assert_field!(TIMCFG::TIMOUT, 24, 2);
        assert_field!(TIMCFG::TIMRST, 16, 3);
        assert_field!(CTRL::DOZEN, 31, 1);
    }

    #[test]
    fn every_field_fits_its_register() {
        assert_fields_fit!(
            VERID [FEATURE, MINOR, MAJOR],
            PARAM [SHIFTER, TIMER, PIN, TRIGGER],
            CTRL [FLEXEN, SWRST, FASTACC, DBGE, DOZEN],
            PIN [PDI],
            SHIFTERS [FLAGS],
            SHIFTCTL [SMOD, PINPOL, PINSEL, PINCFG, TIMPOL, TIMSEL],
            SHIFTCFG [SSTART, SSTOP, INSRC],
            TIMCTL [TIMOD, PINPOL, PINSEL, PINCFG, TRGSRC, TRGPOL, TRGSEL],
            TIMCFG [TSTART, TSTOP, TIMENA, TIMDIS, TIMRST, TIMDEC, TIMOUT],
            TIMCMP [CMP],
        );
    }
}
