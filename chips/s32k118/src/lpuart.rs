// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Low Power Universal Asynchronous Receiver/Transmitter (LPUART).

use tock_registers::registers::{ReadOnly, ReadWrite};
use tock_registers::{register_bitfields, register_structs};

use crate::interrupts;
use crate::static_ref::StaticRef;

pub const LPUART_INSTANCE_COUNT: usize = 2;

register_structs! {
    pub LpuartRegisters {
        (0x00 => pub verid: ReadOnly<u32, VERID::Register>),
        (0x04 => pub param: ReadOnly<u32, PARAM::Register>),
        (0x08 => pub global: ReadWrite<u32, GLOBAL::Register>),
        (0x0C => pub pincfg: ReadWrite<u32, PINCFG::Register>),
        (0x10 => pub baud: ReadWrite<u32, BAUD::Register>),
        // Flags in STAT[31:30] and STAT[20:14] are cleared by writing one.
        (0x14 => pub stat: ReadWrite<u32, STAT::Register>),
        (0x18 => pub ctrl: ReadWrite<u32, CTRL::Register>),
        (0x1C => pub data: ReadWrite<u32, DATA::Register>),
        (0x20 => pub match_addr: ReadWrite<u32, MATCH::Register>),
        (0x24 => pub modir: ReadWrite<u32, MODIR::Register>),
        (0x28 => pub fifo: ReadWrite<u32, FIFO::Register>),
        (0x2C => pub water: ReadWrite<u32, WATER::Register>),
        (0x30 => @END),
    }
}

register_bitfields![u32,
    pub VERID [
        FEATURE OFFSET(0) NUMBITS(16) [
            Standard = 1,
            ModemIrda = 3
        ],
        MINOR OFFSET(16) NUMBITS(8) [],
        MAJOR OFFSET(24) NUMBITS(8) []
    ],
    pub PARAM [
        /// log2 of the transmit FIFO depth
        TXFIFO OFFSET(0) NUMBITS(8) [],
        /// log2 of the receive FIFO depth
        RXFIFO OFFSET(8) NUMBITS(8) []
    ],
    pub GLOBAL [
        /// Hold every register except GLOBAL in reset
        RST OFFSET(1) NUMBITS(1) []
    ],
    pub PINCFG [
        TRGSEL OFFSET(0) NUMBITS(2) [
            Disabled = 0,
            RxdInput = 1,
            CtsInput = 2,
            TxdModulation = 3
        ]
    ],
    pub BAUD [
        /// Divider from the asynchronous module clock, zero stops the
        /// baud rate generator
        SBR OFFSET(0) NUMBITS(13) [],
        /// Two stop bits
        SBNS OFFSET(13) NUMBITS(1) [],
        RXEDGIE OFFSET(14) NUMBITS(1) [],
        LBKDIE OFFSET(15) NUMBITS(1) [],
        RESYNCDIS OFFSET(16) NUMBITS(1) [],
        /// Sample on both edges of the baud clock, required for OSR 3 to 6
        BOTHEDGE OFFSET(17) NUMBITS(1) [],
        MATCFG OFFSET(18) NUMBITS(2) [
            AddressMatchWakeup = 0,
            IdleMatchWakeup = 1,
            MatchOnMatchOff = 2,
            RwuOnDataMatch = 3
        ],
        /// Receive DMA request when RDRF is set
        RDMAE OFFSET(21) NUMBITS(1) [],
        /// Transmit DMA request when TDRE is set
        TDMAE OFFSET(23) NUMBITS(1) [],
        /// Samples per bit minus one. Values 1 and 2 are reserved
        OSR OFFSET(24) NUMBITS(5) [],
        M10 OFFSET(29) NUMBITS(1) [],
        MAEN2 OFFSET(30) NUMBITS(1) [],
        MAEN1 OFFSET(31) NUMBITS(1) []
    ],
    pub STAT [
        MA2F OFFSET(14) NUMBITS(1) [],
        MA1F OFFSET(15) NUMBITS(1) [],
        /// Parity error
        PF OFFSET(16) NUMBITS(1) [],
        /// Framing error
        FE OFFSET(17) NUMBITS(1) [],
        /// Noise detected
        NF OFFSET(18) NUMBITS(1) [],
        /// Receive overrun
        OR OFFSET(19) NUMBITS(1) [],
        IDLE OFFSET(20) NUMBITS(1) [],
        /// Receive data available
        RDRF OFFSET(21) NUMBITS(1) [],
        /// Transmission complete, including the stop bit
        TC OFFSET(22) NUMBITS(1) [],
        /// Room in the transmit buffer
        TDRE OFFSET(23) NUMBITS(1) [],
        RAF OFFSET(24) NUMBITS(1) [],
        LBKDE OFFSET(25) NUMBITS(1) [],
        BRK13 OFFSET(26) NUMBITS(1) [],
        RWUID OFFSET(27) NUMBITS(1) [],
        RXINV OFFSET(28) NUMBITS(1) [],
        MSBF OFFSET(29) NUMBITS(1) [],
        RXEDGIF OFFSET(30) NUMBITS(1) [],
        LBKDIF OFFSET(31) NUMBITS(1) []
    ],
    pub CTRL [
        PT OFFSET(0) NUMBITS(1) [
            Even = 0,
            Odd = 1
        ],
        PE OFFSET(1) NUMBITS(1) [],
        ILT OFFSET(2) NUMBITS(1) [
            AfterStart = 0,
            AfterStop = 1
        ],
        WAKE OFFSET(3) NUMBITS(1) [
            IdleLine = 0,
            AddressMark = 1
        ],
        /// Nine data bits
        M OFFSET(4) NUMBITS(1) [],
        RSRC OFFSET(5) NUMBITS(1) [],
        DOZEEN OFFSET(6) NUMBITS(1) [],
        LOOPS OFFSET(7) NUMBITS(1) [],
        /// Idle characters that must be seen before IDLE is set
        IDLECFG OFFSET(8) NUMBITS(3) [
            Idle1 = 0,
            Idle2 = 1,
            Idle4 = 2,
            Idle8 = 3,
            Idle16 = 4,
            Idle32 = 5,
            Idle64 = 6,
            Idle128 = 7
        ],
        /// Seven data bits
        M7 OFFSET(11) NUMBITS(1) [],
        MA2IE OFFSET(14) NUMBITS(1) [],
        MA1IE OFFSET(15) NUMBITS(1) [],
        SBK OFFSET(16) NUMBITS(1) [],
        RWU OFFSET(17) NUMBITS(1) [],
        RE OFFSET(18) NUMBITS(1) [],
        TE OFFSET(19) NUMBITS(1) [],
        ILIE OFFSET(20) NUMBITS(1) [],
        RIE OFFSET(21) NUMBITS(1) [],
        TCIE OFFSET(22) NUMBITS(1) [],
        TIE OFFSET(23) NUMBITS(1) [],
        PEIE OFFSET(24) NUMBITS(1) [],
        FEIE OFFSET(25) NUMBITS(1) [],
        NEIE OFFSET(26) NUMBITS(1) [],
        ORIE OFFSET(27) NUMBITS(1) [],
        TXINV OFFSET(28) NUMBITS(1) [],
        TXDIR OFFSET(29) NUMBITS(1) [],
        R9T8 OFFSET(30) NUMBITS(1) [],
        R8T9 OFFSET(31) NUMBITS(1) []
    ],
    pub DATA [
        /// Character bits, up to ten
        DATA OFFSET(0) NUMBITS(10) [],
        IDLINE OFFSET(11) NUMBITS(1) [],
        RXEMPT OFFSET(12) NUMBITS(1) [],
        /// On read, framing error. On write, send a break or idle character
        FRETSC OFFSET(13) NUMBITS(1) [],
        PARITYE OFFSET(14) NUMBITS(1) [],
        NOISY OFFSET(15) NUMBITS(1) []
    ],
    pub MATCH [
        MA1 OFFSET(0) NUMBITS(10) [],
        MA2 OFFSET(16) NUMBITS(10) []
    ],
    pub MODIR [
        TXCTSE OFFSET(0) NUMBITS(1) [],
        TXRTSE OFFSET(1) NUMBITS(1) [],
        TXRTSPOL OFFSET(2) NUMBITS(1) [],
        RXRTSE OFFSET(3) NUMBITS(1) [],
        TXCTSC OFFSET(4) NUMBITS(1) [],
        TXCTSSRC OFFSET(5) NUMBITS(1) [],
        RTSWATER OFFSET(8) NUMBITS(2) [],
        /// Width of the infrared transmit pulse, in OSR+1 units
        TNP OFFSET(16) NUMBITS(2) [],
        IREN OFFSET(18) NUMBITS(1) []
    ],
    pub FIFO [
        RXFIFOSIZE OFFSET(0) NUMBITS(3) [],
        RXFE OFFSET(3) NUMBITS(1) [],
        TXFIFOSIZE OFFSET(4) NUMBITS(3) [],
        TXFE OFFSET(7) NUMBITS(1) [],
        RXUFE OFFSET(8) NUMBITS(1) [],
        TXOFE OFFSET(9) NUMBITS(1) [],
        RXIDEN OFFSET(10) NUMBITS(3) [],
        RXFLUSH OFFSET(14) NUMBITS(1) [],
        TXFLUSH OFFSET(15) NUMBITS(1) [],
        RXUF OFFSET(16) NUMBITS(1) [],
        TXOF OFFSET(17) NUMBITS(1) [],
        RXEMPT OFFSET(22) NUMBITS(1) [],
        TXEMPT OFFSET(23) NUMBITS(1) []
    ],
    // The S32K118 FIFOs are four words deep, so counts need three bits and
    // watermarks two.
    pub WATER [
        TXWATER OFFSET(0) NUMBITS(2) [],
        TXCOUNT OFFSET(8) NUMBITS(3) [],
        RXWATER OFFSET(16) NUMBITS(2) [],
        RXCOUNT OFFSET(24) NUMBITS(3) []
    ]
];

pub const LPUART0_BASE_ADDR: usize = 0x4006_A000;
pub const LPUART1_BASE_ADDR: usize = 0x4006_B000;

pub const LPUART0_BASE: StaticRef<LpuartRegisters> =
    unsafe { StaticRef::new(LPUART0_BASE_ADDR as *const LpuartRegisters) };
pub const LPUART1_BASE: StaticRef<LpuartRegisters> =
    unsafe { StaticRef::new(LPUART1_BASE_ADDR as *const LpuartRegisters) };

pub const LPUART_BASE_ADDRS: [usize; LPUART_INSTANCE_COUNT] =
    [LPUART0_BASE_ADDR, LPUART1_BASE_ADDR];
pub const LPUART_BASE_PTRS: [StaticRef<LpuartRegisters>; LPUART_INSTANCE_COUNT] =
    [LPUART0_BASE, LPUART1_BASE];
pub const LPUART_RX_TX_IRQS: [u32; LPUART_INSTANCE_COUNT] =
    [interrupts::LPUART0_RXTX, interrupts::LPUART1_RXTX];

/// Every write-one-to-clear flag in `STAT`.
pub const STAT_REG_FLAGS_MASK: u32 = 0xC01F_C000;
/// Write-one-to-clear flags in `FIFO` (`RXUF`, `TXOF`).
pub const FIFO_REG_FLAGS_MASK: u32 = 0x0003_0000;
/// `FIFO` bits to write to flush both FIFOs and clear their error flags.
pub const FIFO_RESET_MASK: u32 = 0x0003_C000;

/// Entries in each of the transmit and receive FIFOs.
pub const FIFO_SIZE: usize = 4;

/// `BAUD.OSR` after reset (16x oversampling).
pub const DEFAULT_OSR: u32 = 0x0F;
/// `BAUD.SBR` after reset.
pub const DEFAULT_SBR: u32 = 0x04;

/// Baud rate produced by a module clock of `clock_hz` with the given `SBR`
/// and `OSR` field values. `None` if `SBR` is zero, which disables the
/// baud rate generator.
pub fn baud_rate(clock_hz: u32, sbr: u32, osr: u32) -> Option<u32> {
    let divisor = osr.checked_add(1)?.checked_mul(sbr)?;
    clock_hz.checked_div(divisor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_check::{assert_field, assert_fields_fit};

    #[test]
    fn layout() {
        assert_eq!(core::mem::offset_of!(LpuartRegisters, match_addr), 0x20);
        assert_eq!(core::mem::offset_of!(LpuartRegisters, water), 0x2C);
        assert_eq!(core::mem::size_of::<LpuartRegisters>(), 0x30);
        assert_eq!(LPUART_RX_TX_IRQS, [31, 30]);
    }

    #[test]
    fn fields() {
        assert_field!(BAUD::SBR, 0, 13);
        assert_field!(BAUD::OSR, 24, 5);
        assert_field!(DATA::DATA, 0, 10);
        assert_field!(DATA::NOISY, 15, 1);
        assert_field!(FIFO::RXIDEN, 10, 3);
        assert_field!(WATER::RXCOUNT, 24, 3);
        assert_field!(MODIR::TNP, 16, 2);
    }

    #[test]
    fn flag_masks() {
        let stat = STAT::LBKDIF::SET
            + STAT::RXEDGIF::SET
            + STAT::IDLE::SET
            + STAT::OR::SET
            + STAT::NF::SET
            + STAT::FE::SET
            + STAT::PF::SET
            + STAT::MA1F::SET
            + STAT::MA2F::SET;
        assert_eq!(u32::from(stat), STAT_REG_FLAGS_MASK);
        assert_eq!(u32::from(FIFO::RXUF::SET + FIFO::TXOF::SET), FIFO_REG_FLAGS_MASK);
        assert_eq!(
            u32::from(FIFO::RXFLUSH::SET + FIFO::TXFLUSH::SET) | FIFO_REG_FLAGS_MASK,
            FIFO_RESET_MASK
        );
    }

    #[test]
    fn reset_baud_configuration() {
        assert_eq!(DEFAULT_OSR, 0x0F);
        assert_eq!(DEFAULT_SBR, 0x04);
        assert_eq!(u32::from(BAUD::OSR.val(DEFAULT_OSR) + BAUD::SBR.val(DEFAULT_SBR)), 0x0F00_0004);
    }

    #[test]
    fn baud_rates() {
        // 48 MHz FIRC, 16x oversampling.
        assert_eq!(baud_rate(48_000_000, 26, 15), Some(115_384));
        assert_eq!(baud_rate(8_000_000, 52, 15), Some(9_615));
        assert_eq!(baud_rate(8_000_000, 0, 15), None);
    }

    #[test]
    fn every_field_fits_its_register() {
        assert_fields_fit!(
            VERID [FEATURE, MINOR, MAJOR],
            PARAM [TXFIFO, RXFIFO],
            GLOBAL [RST],
            PINCFG [TRGSEL],
            BAUD [SBR, SBNS, RXEDGIE, LBKDIE, RESYNCDIS, BOTHEDGE, MATCFG, RDMAE, TDMAE, OSR, M10,
                MAEN2, MAEN1],
            STAT [MA2F, MA1F, PF, FE, NF, OR, IDLE, RDRF, TC, TDRE, RAF, LBKDE, BRK13, RWUID, RXINV,
                MSBF, RXEDGIF, LBKDIF],
            CTRL [PT, PE, ILT, WAKE, M, RSRC, DOZEEN, LOOPS, IDLECFG, M7, MA2IE, MA1IE, SBK, RWU,
                RE, TE, ILIE, RIE, TCIE, TIE, PEIE, FEIE, NEIE, ORIE, TXINV, TXDIR, R9T8, R8T9],
            DATA [DATA, IDLINE, RXEMPT, FRETSC, PARITYE, NOISY],
            MATCH [MA1, MA2],
            MODIR [TXCTSE, TXRTSE, TXRTSPOL, RXRTSE, TXCTSC, TXCTSSRC, RTSWATER, TNP, IREN],
            FIFO [RXFIFOSIZE, RXFE, TXFIFOSIZE, TXFE, RXUFE, TXOFE, RXIDEN, RXFLUSH, TXFLUSH, RXUF,
                TXOF, RXEMPT, TXEMPT],
            WATER [TXWATER, TXCOUNT, RXWATER, RXCOUNT],
        );
    }
}
