// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Named interrupts for the S32K118.
//!
//! Device interrupts are numbered from 0 as seen by the NVIC. Core exceptions
//! use the negative CMSIS numbering, so that `16 + n` is always the slot in
//! the vector table.

// Cortex-M0+ core exceptions
pub const NON_MASKABLE_INT: i32 = -14;
pub const HARD_FAULT: i32 = -13;
pub const SV_CALL: i32 = -5;
pub const PEND_SV: i32 = -2;
pub const SYS_TICK: i32 = -1;

pub const DMA0: u32 = 0;
pub const DMA1: u32 = 1;
pub const DMA2: u32 = 2;
pub const DMA3: u32 = 3;
pub const DMA_ERROR: u32 = 4;
pub const ERM_FAULT: u32 = 5;
pub const RTC: u32 = 6; // alarm
pub const RTC_SECONDS: u32 = 7;
pub const LPTMR0: u32 = 8;
pub const PORT: u32 = 9; // all five ports share one line
pub const CAN0_ORED_ERR_WAKEUP: u32 = 10;
pub const CAN0_ORED_0_31_MB: u32 = 11;
pub const FTM0_CH0_7: u32 = 12;
pub const FTM0_FAULT: u32 = 13;
pub const FTM0_OVF_RELOAD: u32 = 14;
pub const FTM1_CH0_7: u32 = 15;
pub const FTM1_FAULT: u32 = 16;
pub const FTM1_OVF_RELOAD: u32 = 17;
pub const FTFC: u32 = 18;
pub const PDB0: u32 = 19;
pub const LPIT0: u32 = 20;
pub const SCG_CMU_LVD_LVWSCG: u32 = 21;
pub const WDOG: u32 = 22;
pub const RCM: u32 = 23;
pub const LPI2C0_MASTER_SLAVE: u32 = 24;
pub const FLEXIO: u32 = 25;
pub const LPSPI0: u32 = 26;
pub const LPSPI1: u32 = 27;
pub const ADC0: u32 = 28;
pub const CMP0: u32 = 29;
pub const LPUART1_RXTX: u32 = 30;
pub const LPUART0_RXTX: u32 = 31;

/// Number of device interrupt lines wired to the NVIC.
pub const NUMBER_OF_INTERRUPTS: usize = 32;

/// Name of each device interrupt, indexed by interrupt number.
pub const IRQ_NAMES: [&str; NUMBER_OF_INTERRUPTS] = [
    "DMA0",
    "DMA1",
    "DMA2",
    "DMA3",
    "DMA_Error",
    "ERM_fault",
    "RTC",
    "RTC_Seconds",
    "LPTMR0",
    "PORT",
    "CAN0_ORed_Err_Wakeup",
    "CAN0_ORed_0_31_MB",
    "FTM0_Ch0_7",
    "FTM0_Fault",
    "FTM0_Ovf_Reload",
    "FTM1_Ch0_7",
    "FTM1_Fault",
    "FTM1_Ovf_Reload",
    "FTFC",
    "PDB0",
    "LPIT0",
    "SCG_CMU_LVD_LVWSCG",
    "WDOG",
    "RCM",
    "LPI2C0_Master_Slave",
    "FLEXIO",
    "LPSPI0",
    "LPSPI1",
    "ADC0",
    "CMP0",
    "LPUART1_RxTx",
    "LPUART0_RxTx",
];

/// Core exceptions with their CMSIS number and name.
pub const CORE_EXCEPTIONS: [(i32, &str); 5] = [
    (NON_MASKABLE_INT, "NonMaskableInt"),
    (HARD_FAULT, "HardFault"),
    (SV_CALL, "SVCall"),
    (PEND_SV, "PendSV"),
    (SYS_TICK, "SysTick"),
];

/// Name of a device interrupt line, if it exists on this part.
pub fn irq_name(irq: u32) -> Option<&'static str> {
    IRQ_NAMES.get(irq as usize).copied()
}

/// Vector table slot of an interrupt given in CMSIS numbering.
pub const fn vector_slot(irqn: i32) -> usize {
    (irqn + 16) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_line_up_with_numbers() {
        assert_eq!(irq_name(DMA0), Some("DMA0"));
        assert_eq!(irq_name(PORT), Some("PORT"));
        assert_eq!(irq_name(FTFC), Some("FTFC"));
        assert_eq!(irq_name(LPUART0_RXTX), Some("LPUART0_RxTx"));
        assert_eq!(irq_name(32), None);
    }

    #[test]
    fn vector_slots() {
        assert_eq!(vector_slot(NON_MASKABLE_INT), 2);
        assert_eq!(vector_slot(HARD_FAULT), 3);
        assert_eq!(vector_slot(SYS_TICK), 15);
        assert_eq!(vector_slot(DMA0 as i32), 16);
        assert_eq!(vector_slot(LPUART0_RXTX as i32), 47);
    }
}
