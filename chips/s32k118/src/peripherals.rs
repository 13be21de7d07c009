// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Catalog of every peripheral instance on the chip.
//!
//! One entry per register block, with its address range, interrupt lines and
//! clock. Host tooling walks this table to print the memory map and to
//! cross-check the register descriptions.

use core::mem::size_of;

use crate::clocks::ClockName;
use crate::interrupts;
use crate::{
    adc, aips, can, cmp, crc, cse_pram, dma, dmamux, eim, erm, flexio, ftfc, ftm, gpio, lpi2c, lpit,
    lpspi, lptmr, lpuart, mcm, mpu, mscm, mtb, nvic, pcc, pdb, pmc, port, rcm, rom, rtc, scb, scg,
    sim, smc, systick, trgmux, wdog,
};

/// Where a register block lives in the address map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PeripheralKind {
    /// Slot behind the AIPS peripheral bridge.
    Bus,
    /// GPIO alias region.
    Gpio,
    /// Memory window rather than a register file.
    Memory,
    /// Private peripheral on the core platform bus.
    Private,
    /// Cortex-M0+ System Control Space. These blocks overlap by design of the
    /// architecture.
    Core,
}

#[derive(Clone, Copy, Debug)]
pub struct PeripheralInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub base: usize,
    /// Size in bytes of the register block.
    pub size: usize,
    /// Device interrupt lines raised by this instance.
    pub irqs: &'static [u32],
    /// Clock gating this instance, if it has its own.
    pub clock: Option<ClockName>,
    pub kind: PeripheralKind,
}

impl PeripheralInfo {
    /// One past the last byte of the register block.
    pub const fn end(&self) -> usize {
        self.base + self.size
    }

    pub fn contains(&self, addr: usize) -> bool {
        addr >= self.base && addr < self.end()
    }

    pub fn overlaps(&self, other: &PeripheralInfo) -> bool {
        self.base < other.end() && other.base < self.end()
    }

    pub fn pcc_index(&self) -> Option<usize> {
        self.clock.and_then(ClockName::pcc_index)
    }
}

pub const PERIPHERALS: &[PeripheralInfo] = &[
    PeripheralInfo {
        name: "ADC0",
        description: "12-bit SAR analog-to-digital converter",
        base: adc::ADC0_BASE_ADDR,
        size: size_of::<adc::AdcRegisters>(),
        irqs: &[interrupts::ADC0],
        clock: Some(ClockName::Adc0),
        kind: PeripheralKind::Bus,
    },
    PeripheralInfo {
        name: "AIPS",
        description: "Peripheral bridge",
        base: aips::AIPS_BASE_ADDR,
        size: size_of::<aips::AipsRegisters>(),
        irqs: &[],
        clock: None,
        kind: PeripheralKind::Bus,
    },
    PeripheralInfo {
        name: "CAN0",
        description: "FlexCAN controller",
        base: can::CAN0_BASE_ADDR,
        size: size_of::<can::CanRegisters>(),
        irqs: &[interrupts::CAN0_ORED_ERR_WAKEUP, interrupts::CAN0_ORED_0_31_MB],
        clock: Some(ClockName::FlexCan0),
        kind: PeripheralKind::Bus,
    },
    PeripheralInfo {
        name: "CMP0",
        description: "Analog comparator",
        base: cmp::CMP0_BASE_ADDR,
        size: size_of::<cmp::CmpRegisters>(),
        irqs: &[interrupts::CMP0],
        clock: Some(ClockName::Cmp0),
        kind: PeripheralKind::Bus,
    },
    PeripheralInfo {
        name: "CRC",
        description: "Cyclic redundancy check engine",
        base: crc::CRC_BASE_ADDR,
        size: size_of::<crc::CrcRegisters>(),
        irqs: &[],
        clock: Some(ClockName::Crc0),
        kind: PeripheralKind::Bus,
    },
    PeripheralInfo {
        name: "CSE_PRAM",
        description: "CSEc parameter RAM",
        base: cse_pram::CSE_PRAM_BASE_ADDR,
        size: size_of::<cse_pram::CsePramRegisters>(),
        irqs: &[],
        clock: None,
        kind: PeripheralKind::Memory,
    },
    PeripheralInfo {
        name: "DMA",
        description: "Enhanced direct memory access controller",
        base: dma::DMA_BASE_ADDR,
        size: size_of::<dma::DmaRegisters>(),
        irqs: &[
            interrupts::DMA0,
            interrupts::DMA1,
            interrupts::DMA2,
            interrupts::DMA3,
            interrupts::DMA_ERROR,
        ],
        clock: Some(ClockName::SimDma),
        kind: PeripheralKind::Bus,
    },
    PeripheralInfo {
        name: "DMAMUX",
        description: "DMA request multiplexer",
        base: dmamux::DMAMUX_BASE_ADDR,
        size: size_of::<dmamux::DmamuxRegisters>(),
        irqs: &[],
        clock: Some(ClockName::Dmamux0),
        kind: PeripheralKind::Bus,
    },
    PeripheralInfo {
        name: "EIM",
        description: "Error injection module",
        base: eim::EIM_BASE_ADDR,
        size: size_of::<eim::EimRegisters>(),
        irqs: &[],
        clock: Some(ClockName::SimEim),
        kind: PeripheralKind::Bus,
    },
    PeripheralInfo {
        name: "ERM",
        description: "Error reporting module",
        base: erm::ERM_BASE_ADDR,
        size: size_of::<erm::ErmRegisters>(),
        irqs: &[interrupts::ERM_FAULT],
        clock: Some(ClockName::SimErm),
        kind: PeripheralKind::Bus,
    },
    PeripheralInfo {
        name: "FLEXIO",
        description: "Flexible I/O",
        base: flexio::FLEXIO_BASE_ADDR,
        size: size_of::<flexio::FlexioRegisters>(),
        irqs: &[interrupts::FLEXIO],
        clock: Some(ClockName::FlexIo0),
        kind: PeripheralKind::Bus,
    },
    PeripheralInfo {
        name: "FTFC",
        description: "Flash memory controller",
        base: ftfc::FTFC_BASE_ADDR,
        size: size_of::<ftfc::FtfcRegisters>(),
        irqs: &[interrupts::FTFC],
        clock: Some(ClockName::Ftfc0),
        kind: PeripheralKind::Bus,
    },
    PeripheralInfo {
        name: "FTM0",
        description: "FlexTimer 0",
        base: ftm::FTM0_BASE_ADDR,
        size: size_of::<ftm::FtmRegisters>(),
        irqs: &[interrupts::FTM0_CH0_7, interrupts::FTM0_FAULT, interrupts::FTM0_OVF_RELOAD],
        clock: Some(ClockName::Ftm0),
        kind: PeripheralKind::Bus,
    },
    PeripheralInfo {
        name: "FTM1",
        description: "FlexTimer 1",
        base: ftm::FTM1_BASE_ADDR,
        size: size_of::<ftm::FtmRegisters>(),
        irqs: &[interrupts::FTM1_CH0_7, interrupts::FTM1_FAULT, interrupts::FTM1_OVF_RELOAD],
        clock: Some(ClockName::Ftm1),
        kind: PeripheralKind::Bus,
    },
    PeripheralInfo {
        name: "LPI2C0",
        description: "Low power I2C",
        base: lpi2c::LPI2C0_BASE_ADDR,
        size: size_of::<lpi2c::Lpi2cRegisters>(),
        irqs: &[interrupts::LPI2C0_MASTER_SLAVE],
        clock: Some(ClockName::Lpi2c0),
        kind: PeripheralKind::Bus,
    },
    PeripheralInfo {
        name: "LPIT0",
        description: "Low power periodic interrupt timer",
        base: lpit::LPIT0_BASE_ADDR,
        size: size_of::<lpit::LpitRegisters>(),
        irqs: &[interrupts::LPIT0],
        clock: Some(ClockName::Lpit0),
        kind: PeripheralKind::Bus,
    },
    PeripheralInfo {
        name: "LPSPI0",
        description: "Low power SPI 0",
        base: lpspi::LPSPI0_BASE_ADDR,
        size: size_of::<lpspi::LpspiRegisters>(),
        irqs: &[interrupts::LPSPI0],
        clock: Some(ClockName::Lpspi0),
        kind: PeripheralKind::Bus,
    },
    PeripheralInfo {
        name: "LPSPI1",
        description: "Low power SPI 1",
        base: lpspi::LPSPI1_BASE_ADDR,
        size: size_of::<lpspi::LpspiRegisters>(),
        irqs: &[interrupts::LPSPI1],
        clock: Some(ClockName::Lpspi1),
        kind: PeripheralKind::Bus,
    },
    PeripheralInfo {
        name: "LPTMR0",
        description: "Low power timer",
        base: lptmr::LPTMR0_BASE_ADDR,
        size: size_of::<lptmr::LptmrRegisters>(),
        irqs: &[interrupts::LPTMR0],
        clock: Some(ClockName::Lptmr0),
        kind: PeripheralKind::Bus,
    },
    PeripheralInfo {
        name: "LPUART0",
        description: "Low power UART 0",
        base: lpuart::LPUART0_BASE_ADDR,
        size: size_of::<lpuart::LpuartRegisters>(),
        irqs: &[interrupts::LPUART0_RXTX],
        clock: Some(ClockName::Lpuart0),
        kind: PeripheralKind::Bus,
    },
    PeripheralInfo {
        name: "LPUART1",
        description: "Low power UART 1",
        base: lpuart::LPUART1_BASE_ADDR,
        size: size_of::<lpuart::LpuartRegisters>(),
        irqs: &[interrupts::LPUART1_RXTX],
        clock: Some(ClockName::Lpuart1),
        kind: PeripheralKind::Bus,
    },
    PeripheralInfo {
        name: "MPU",
        description: "System memory protection unit",
        base: mpu::MPU_BASE_ADDR,
        size: size_of::<mpu::MpuRegisters>(),
        irqs: &[],
        clock: Some(ClockName::SimMpu),
        kind: PeripheralKind::Bus,
    },
    PeripheralInfo {
        name: "MSCM",
        description: "Miscellaneous system control module",
        base: mscm::MSCM_BASE_ADDR,
        size: size_of::<mscm::MscmRegisters>(),
        irqs: &[],
        clock: Some(ClockName::SimMscm),
        kind: PeripheralKind::Bus,
    },
    PeripheralInfo {
        name: "PCC",
        description: "Peripheral clock control",
        base: pcc::PCC_BASE_ADDR,
        size: size_of::<pcc::PccRegisters>(),
        irqs: &[],
        clock: None,
        kind: PeripheralKind::Bus,
    },
    PeripheralInfo {
        name: "PDB0",
        description: "Programmable delay block",
        base: pdb::PDB0_BASE_ADDR,
        size: size_of::<pdb::PdbRegisters>(),
        irqs: &[interrupts::PDB0],
        clock: Some(ClockName::Pdb0),
        kind: PeripheralKind::Bus,
    },
    PeripheralInfo {
        name: "PMC",
        description: "Power management controller",
        base: pmc::PMC_BASE_ADDR,
        size: size_of::<pmc::PmcRegisters>(),
        irqs: &[],
        clock: None,
        kind: PeripheralKind::Bus,
    },
    PeripheralInfo {
        name: "PORTA",
        description: "Port A pin control",
        base: port::PORTA_BASE_ADDR,
        size: size_of::<port::PortRegisters>(),
        irqs: &[interrupts::PORT],
        clock: Some(ClockName::PortA),
        kind: PeripheralKind::Bus,
    },
    PeripheralInfo {
        name: "PORTB",
        description: "Port B pin control",
        base: port::PORTB_BASE_ADDR,
        size: size_of::<port::PortRegisters>(),
        irqs: &[interrupts::PORT],
        clock: Some(ClockName::PortB),
        kind: PeripheralKind::Bus,
    },
    PeripheralInfo {
        name: "PORTC",
        description: "Port C pin control",
        base: port::PORTC_BASE_ADDR,
        size: size_of::<port::PortRegisters>(),
        irqs: &[interrupts::PORT],
        clock: Some(ClockName::PortC),
        kind: PeripheralKind::Bus,
    },
    PeripheralInfo {
        name: "PORTD",
        description: "Port D pin control",
        base: port::PORTD_BASE_ADDR,
        size: size_of::<port::PortRegisters>(),
        irqs: &[interrupts::PORT],
        clock: Some(ClockName::PortD),
        kind: PeripheralKind::Bus,
    },
    PeripheralInfo {
        name: "PORTE",
        description: "Port E pin control",
        base: port::PORTE_BASE_ADDR,
        size: size_of::<port::PortRegisters>(),
        irqs: &[interrupts::PORT],
        clock: Some(ClockName::PortE),
        kind: PeripheralKind::Bus,
    },
    PeripheralInfo {
        name: "PTA",
        description: "GPIO port A",
        base: gpio::PTA_BASE_ADDR,
        size: size_of::<gpio::GpioRegisters>(),
        irqs: &[],
        clock: None,
        kind: PeripheralKind::Gpio,
    },
    PeripheralInfo {
        name: "PTB",
        description: "GPIO port B",
        base: gpio::PTB_BASE_ADDR,
        size: size_of::<gpio::GpioRegisters>(),
        irqs: &[],
        clock: None,
        kind: PeripheralKind::Gpio,
    },
    PeripheralInfo {
        name: "PTC",
        description: "GPIO port C",
        base: gpio::PTC_BASE_ADDR,
        size: size_of::<gpio::GpioRegisters>(),
        irqs: &[],
        clock: None,
        kind: PeripheralKind::Gpio,
    },
    PeripheralInfo {
        name: "PTD",
        description: "GPIO port D",
        base: gpio::PTD_BASE_ADDR,
        size: size_of::<gpio::GpioRegisters>(),
        irqs: &[],
        clock: None,
        kind: PeripheralKind::Gpio,
    },
    PeripheralInfo {
        name: "PTE",
        description: "GPIO port E",
        base: gpio::PTE_BASE_ADDR,
        size: size_of::<gpio::GpioRegisters>(),
        irqs: &[],
        clock: None,
        kind: PeripheralKind::Gpio,
    },
    PeripheralInfo {
        name: "RCM",
        description: "Reset control module",
        base: rcm::RCM_BASE_ADDR,
        size: size_of::<rcm::RcmRegisters>(),
        irqs: &[interrupts::RCM],
        clock: None,
        kind: PeripheralKind::Bus,
    },
    PeripheralInfo {
        name: "RTC",
        description: "Real time clock",
        base: rtc::RTC_BASE_ADDR,
        size: size_of::<rtc::RtcRegisters>(),
        irqs: &[interrupts::RTC, interrupts::RTC_SECONDS],
        clock: Some(ClockName::Rtc0),
        kind: PeripheralKind::Bus,
    },
    PeripheralInfo {
        name: "SCG",
        description: "System clock generator",
        base: scg::SCG_BASE_ADDR,
        size: size_of::<scg::ScgRegisters>(),
        irqs: &[interrupts::SCG_CMU_LVD_LVWSCG],
        clock: None,
        kind: PeripheralKind::Bus,
    },
    PeripheralInfo {
        name: "SIM",
        description: "System integration module",
        base: sim::SIM_BASE_ADDR,
        size: size_of::<sim::SimRegisters>(),
        irqs: &[],
        clock: None,
        kind: PeripheralKind::Bus,
    },
    PeripheralInfo {
        name: "SMC",
        description: "System mode controller",
        base: smc::SMC_BASE_ADDR,
        size: size_of::<smc::SmcRegisters>(),
        irqs: &[],
        clock: None,
        kind: PeripheralKind::Bus,
    },
    PeripheralInfo {
        name: "TRGMUX",
        description: "Trigger multiplexer",
        base: trgmux::TRGMUX_BASE_ADDR,
        size: size_of::<trgmux::TrgmuxRegisters>(),
        irqs: &[],
        clock: None,
        kind: PeripheralKind::Bus,
    },
    PeripheralInfo {
        name: "WDOG",
        description: "Watchdog timer",
        base: wdog::WDOG_BASE_ADDR,
        size: size_of::<wdog::WdogRegisters>(),
        irqs: &[interrupts::WDOG],
        clock: None,
        kind: PeripheralKind::Bus,
    },
    PeripheralInfo {
        name: "MTB",
        description: "Micro trace buffer",
        base: mtb::MTB_BASE_ADDR,
        size: size_of::<mtb::MtbRegisters>(),
        irqs: &[],
        clock: None,
        kind: PeripheralKind::Private,
    },
    PeripheralInfo {
        name: "MTB_DWT",
        description: "MTB data watchpoint and trace",
        base: mtb::MTB_DWT_BASE_ADDR,
        size: size_of::<mtb::MtbDwtRegisters>(),
        irqs: &[],
        clock: None,
        kind: PeripheralKind::Private,
    },
    PeripheralInfo {
        name: "ROM",
        description: "CoreSight ROM table",
        base: rom::ROM_BASE_ADDR,
        size: size_of::<rom::RomRegisters>(),
        irqs: &[],
        clock: None,
        kind: PeripheralKind::Private,
    },
    PeripheralInfo {
        name: "MCM",
        description: "Core platform miscellaneous control module",
        base: mcm::MCM_BASE_ADDR,
        size: size_of::<mcm::McmRegisters>(),
        irqs: &[],
        clock: None,
        kind: PeripheralKind::Private,
    },
    PeripheralInfo {
        name: "SCB",
        description: "System control block",
        base: scb::SCB_BASE_ADDR,
        size: size_of::<scb::ScbRegisters>(),
        irqs: &[],
        clock: None,
        kind: PeripheralKind::Core,
    },
    PeripheralInfo {
        name: "SYSTICK",
        description: "System timer",
        base: systick::SYSTICK_BASE_ADDR,
        size: size_of::<systick::SysTickRegisters>(),
        irqs: &[],
        clock: None,
        kind: PeripheralKind::Core,
    },
    PeripheralInfo {
        name: "NVIC",
        description: "Nested vectored interrupt controller",
        base: nvic::NVIC_BASE_ADDR,
        size: size_of::<nvic::NvicRegisters>(),
        irqs: &[],
        clock: None,
        kind: PeripheralKind::Core,
    },
];

/// Look up a peripheral instance by name, ignoring case.
pub fn find(name: &str) -> Option<&'static PeripheralInfo> {
    PERIPHERALS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Peripheral instances raising device interrupt `irq`.
pub fn users_of_irq(irq: u32) -> impl Iterator<Item = &'static PeripheralInfo> {
    PERIPHERALS.iter().filter(move |p| p.irqs.contains(&irq))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup() {
        let uart = find("lpuart1").unwrap();
        assert_eq!(uart.base, 0x4006_B000);
        assert_eq!(uart.irqs, &[interrupts::LPUART1_RXTX]);
        assert_eq!(uart.pcc_index(), Some(107));
        assert!(find("LPUART2").is_none());
    }

    #[test]
    fn bus_peripherals_do_not_overlap() {
        let bus = || PERIPHERALS.iter().filter(|p| p.kind != PeripheralKind::Core);
        for (i, a) in bus().enumerate() {
            for b in bus().skip(i + 1) {
                assert!(!a.overlaps(b), "{} overlaps {}", a.name, b.name);
            }
        }
    }

    #[test]
    fn core_blocks_share_the_system_control_space() {
        let scb = find("SCB").unwrap();
        assert!(scb.contains(find("NVIC").unwrap().base));
        assert!(scb.contains(find("SYSTICK").unwrap().base));
    }

    #[test]
    fn every_interrupt_has_a_user() {
        for irq in 0..interrupts::NUMBER_OF_INTERRUPTS as u32 {
            assert!(users_of_irq(irq).next().is_some(), "IRQ {}", irq);
        }
        assert_eq!(users_of_irq(interrupts::PORT).count(), 5);
    }

    #[test]
    fn pcc_gated_instances_have_distinct_slots() {
        let mut seen = [false; crate::pcc::PCC_PCCN_COUNT];
        for p in PERIPHERALS {
            if let Some(index) = p.pcc_index() {
                assert!(!seen[index], "{}", p.name);
                seen[index] = true;
            }
        }
    }
}
