// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright Tock Contributors 2022.

//! Start-up and system support: watchdog disable, core clock tracking and
//! software reset.

use core::sync::atomic::{AtomicU32, Ordering};

use tock_registers::interfaces::{Readable, Writeable};
use tock_registers::LocalRegisterCopy;

use crate::chip_config::S32k118Config;
use crate::errorcode::ErrorCode;
use crate::features::{SCG_FIRC_FREQ0, SCG_SIRC_HIGH_RANGE_FREQ};
use crate::scb::{self, SCB_BASE};
use crate::scg::{self, CLOCK_CONFIG, FIRCCFG, SIRCCFG};
use crate::wdog::{self, CS, TOVAL};

/// Core clock after reset: FIRC, undivided.
pub const DEFAULT_SYSTEM_CLOCK: u32 = SCG_FIRC_FREQ0;

static CORE_CLOCK: AtomicU32 = AtomicU32::new(DEFAULT_SYSTEM_CLOCK);

/// Early chip initialization, to be called before `main` touches anything.
///
/// When the configuration asks for it the watchdog is unlocked and
/// reconfigured as disabled, clocked from the LPO, with updates still
/// allowed so that a driver may enable it later.
pub fn init<C: S32k118Config>() {
    if C::DISABLE_WDOG {
        let regs = wdog::WDOG_BASE;
        regs.cnt.set(wdog::UNLOCK_KEY);
        // The configuration below must not land before the unlock completes.
        let _ = regs.cnt.get();
        regs.cs.write(CS::CMD32EN::SET + CS::CLK::Lpo + CS::EN::CLEAR + CS::UPDATE::SET);
        regs.toval.write(TOVAL::TOVALLOW.val(0xFF) + TOVAL::TOVALHIGH.val(0xFF));
    }
}

/// Core clock frequency for the given SCG register values.
///
/// `csr` is `SCG_CSR`, `sirccfg` and `firccfg` are the corresponding
/// oscillator configuration registers and `xtal_hz` is the frequency on the
/// SOSC pins.
pub fn core_clock_from(
    csr: u32,
    sirccfg: u32,
    firccfg: u32,
    xtal_hz: u32,
) -> Result<u32, ErrorCode> {
    let csr = LocalRegisterCopy::<u32, CLOCK_CONFIG::Register>::new(csr);
    let divider = csr.read(CLOCK_CONFIG::DIVCORE) + 1;

    let source = match csr.read_as_enum(CLOCK_CONFIG::SCS) {
        Some(CLOCK_CONFIG::SCS::Value::Sosc) => xtal_hz,
        Some(CLOCK_CONFIG::SCS::Value::Sirc) => {
            let cfg = LocalRegisterCopy::<u32, SIRCCFG::Register>::new(sirccfg);
            if cfg.read(SIRCCFG::RANGE) == 0 {
                return Err(ErrorCode::INVAL);
            }
            SCG_SIRC_HIGH_RANGE_FREQ
        }
        Some(CLOCK_CONFIG::SCS::Value::Firc) => {
            let cfg = LocalRegisterCopy::<u32, FIRCCFG::Register>::new(firccfg);
            if cfg.read(FIRCCFG::RANGE) != 0 {
                return Err(ErrorCode::INVAL);
            }
            SCG_FIRC_FREQ0
        }
        None => return Err(ErrorCode::INVAL),
    };

    Ok(source / divider)
}

/// Recompute the core clock from the SCG registers.
///
/// Must be called after every change of the system clock. On an invalid
/// clock configuration the previously recorded frequency is kept.
pub fn core_clock_update<C: S32k118Config>() -> Result<u32, ErrorCode> {
    let regs = scg::SCG_BASE;
    let hz = core_clock_from(
        regs.csr.get(),
        regs.sirccfg.get(),
        regs.firccfg.get(),
        C::XTAL_CLK_HZ,
    )?;
    CORE_CLOCK.store(hz, Ordering::Relaxed);
    Ok(hz)
}

/// Last core clock frequency recorded by [`core_clock_update`].
pub fn core_clock() -> u32 {
    CORE_CLOCK.load(Ordering::Relaxed)
}

/// Request a system reset through AIRCR.
pub fn software_reset() -> ! {
    let aircr = SCB_BASE.aircr.get();
    SCB_BASE.aircr.set(scb::reset_request_value(aircr));
    loop {
        core::hint::spin_loop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const XTAL: u32 = 40_000_000;

    fn csr(scs: u32, divcore: u32) -> u32 {
        u32::from(CLOCK_CONFIG::SCS.val(scs) + CLOCK_CONFIG::DIVCORE.val(divcore))
    }

    #[test]
    fn sosc_runs_at_crystal_frequency() {
        assert_eq!(core_clock_from(csr(1, 0), 0, 0, XTAL), Ok(40_000_000));
        assert_eq!(core_clock_from(csr(1, 1), 0, 0, XTAL), Ok(20_000_000));
    }

    #[test]
    fn sirc_requires_high_range() {
        let high = u32::from(SIRCCFG::RANGE::High8MHz);
        assert_eq!(core_clock_from(csr(2, 0), high, 0, XTAL), Ok(8_000_000));
        assert_eq!(core_clock_from(csr(2, 3), high, 0, XTAL), Ok(2_000_000));
        assert_eq!(core_clock_from(csr(2, 0), 0, 0, XTAL), Err(ErrorCode::INVAL));
    }

    #[test]
    fn firc_requires_trimmed_range() {
        assert_eq!(core_clock_from(csr(3, 0), 0, 0, XTAL), Ok(48_000_000));
        assert_eq!(core_clock_from(csr(3, 2), 0, 0, XTAL), Ok(16_000_000));
        assert_eq!(core_clock_from(csr(3, 0), 0, 1, XTAL), Err(ErrorCode::INVAL));
    }

    #[test]
    fn unknown_source_is_rejected() {
        assert_eq!(core_clock_from(csr(0, 0), 1, 0, XTAL), Err(ErrorCode::INVAL));
        assert_eq!(core_clock_from(csr(6, 0), 1, 0, XTAL), Err(ErrorCode::INVAL));
    }

    #[test]
    fn default_clock_is_firc() {
        assert_eq!(core_clock(), 48_000_000);
    }

    #[test]
    fn watchdog_disable_words() {
        let cs = u32::from(CS::CMD32EN::SET + CS::CLK::Lpo + CS::EN::CLEAR + CS::UPDATE::SET);
        assert_eq!(cs, 0x2120);
        let toval = u32::from(TOVAL::TOVALLOW.val(0xFF) + TOVAL::TOVALHIGH.val(0xFF));
        assert_eq!(toval, 0xFFFF);
    }
}
