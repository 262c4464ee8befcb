//! # Interrupts and Wait States
//!
//! The 6809 samples its three interrupt inputs before every instruction fetch.
//! Priority is NMI > FIRQ > IRQ:
//!
//! | Line | Masked by | Stacks | Cost | Vector |
//! |------|-----------|--------|------|--------|
//! | NMI  | not armed | entire state (E=1) | 19 | 0xFFFC |
//! | FIRQ | F | PC and CC (E=0) | 10 | 0xFFF6 |
//! | IRQ  | I | entire state (E=1) | 19 | 0xFFF8 |
//!
//! NMI is ignored until the program first loads S; after that it can never be
//! disarmed except by reset.
//!
//! Two wait states sit in front of the fetch:
//!
//! - **CWAI**: registers are already stacked, so a serviced interrupt only
//!   vectors (no push, no stacking cost)
//! - **SYNC**: any asserted line ends the wait, even a masked one, in which case
//!   execution simply continues after the SYNC
//!
//! While waiting with nothing to service, each step idles for one cycle.

use crate::cpu::{vectors, Cpu};
use crate::Fault;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Cycles spent stacking the entire register set for NMI/IRQ.
const ENTIRE_STACK_CYCLES: u64 = 19;

/// Cycles spent stacking PC and CC for FIRQ.
const FAST_STACK_CYCLES: u64 = 10;

/// Level-sensitive interrupt input lines.
///
/// External hardware asserts a line by setting it true. IRQ and FIRQ stay
/// asserted until the driver clears them; NMI is cleared by the CPU when it is
/// serviced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InterruptLines {
    pub nmi: bool,
    pub firq: bool,
    pub irq: bool,
}

impl InterruptLines {
    pub fn any(&self) -> bool {
        self.nmi || self.firq || self.irq
    }
}

/// Outcome of interrupt arbitration at the start of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Arbitration {
    /// An interrupt was taken; the step ends.
    Serviced,
    /// The CPU is waiting; one idle cycle was charged.
    Idle,
    /// Fetch and execute the next instruction.
    Execute,
}

impl Cpu {
    /// Services the highest-priority pending interrupt or idles a wait state.
    pub(crate) fn arbitrate_interrupts(&mut self) -> Result<Arbitration, Fault> {
        let lines = self.bus.lines();

        if lines.nmi {
            self.sync = false;
            if self.nmi_armed {
                if !self.cwai {
                    self.clock = self.clock.wrapping_add(ENTIRE_STACK_CYCLES);
                    self.stack_entire_state()?;
                }
                self.regs.cc.firq_mask = true;
                self.regs.cc.irq_mask = true;
                self.regs.pc = self.read_word(vectors::NMI)?;
                self.cwai = false;
                self.bus.lines_mut().nmi = false;
                debug!(pc = self.regs.pc, "NMI serviced");
                return Ok(Arbitration::Serviced);
            }
        }

        if lines.firq {
            self.sync = false;
            if !self.regs.cc.firq_mask {
                if !self.cwai {
                    self.clock = self.clock.wrapping_add(FAST_STACK_CYCLES);
                    self.regs.cc.entire = false;
                    self.push_word_s(self.regs.pc)?;
                    self.push_byte_s(self.regs.cc.to_byte())?;
                }
                self.regs.cc.firq_mask = true;
                self.regs.pc = self.read_word(vectors::FIRQ)?;
                self.cwai = false;
                debug!(pc = self.regs.pc, "FIRQ serviced");
                return Ok(Arbitration::Serviced);
            }
        }

        if lines.irq {
            self.sync = false;
            if !self.regs.cc.irq_mask {
                if !self.cwai {
                    self.clock = self.clock.wrapping_add(ENTIRE_STACK_CYCLES);
                    self.stack_entire_state()?;
                }
                self.regs.cc.irq_mask = true;
                self.regs.pc = self.read_word(vectors::IRQ)?;
                self.cwai = false;
                debug!(pc = self.regs.pc, "IRQ serviced");
                return Ok(Arbitration::Serviced);
            }
        }

        if self.cwai || self.sync {
            self.clock = self.clock.wrapping_add(1);
            return Ok(Arbitration::Idle);
        }

        Ok(Arbitration::Execute)
    }

    /// Sets E and pushes PC, U, Y, X, DP, B, A, CC onto the S stack.
    pub(crate) fn stack_entire_state(&mut self) -> Result<(), Fault> {
        self.regs.cc.entire = true;
        self.push_word_s(self.regs.pc)?;
        self.push_word_s(self.regs.u)?;
        self.push_word_s(self.regs.y)?;
        self.push_word_s(self.regs.x)?;
        self.push_byte_s(self.regs.dp)?;
        self.push_byte_s(self.regs.b)?;
        self.push_byte_s(self.regs.a)?;
        self.push_byte_s(self.regs.cc.to_byte())
    }
}
