//! Register-level control driver for SSD1306 OLED display controllers
//!
//! The driver speaks to the controller over a write-only serial bus plus
//! two digital lines: data/command select and reset. It covers the chip's
//! configuration command set and the hardware reset pulse, and nothing
//! more — no framebuffer, no drawing, no fonts. Whatever owns the pixel
//! pipeline sits above this crate.
//!
//! The bus is any [`embedded_io::Write`] sink and the lines are
//! [`embedded_hal::digital::OutputPin`]s, so the driver runs against real
//! hardware and against in-memory fakes alike.
//!
//! ```rust,ignore
//! use ssd1306_ctl::{
//!     command::{AddrMode, ChargePump},
//!     Ssd1306,
//! };
//!
//! let mut display = Ssd1306::new(spi, dc_pin, reset_pin);
//! display.reset(&mut delay)?;
//! display.set_charge_pump(ChargePump::Enabled)?;
//! display.set_memory_addressing_mode(AddrMode::Horizontal)?;
//! display.set_contrast(0x7F)?;
//! display.display_on()?;
//! ```
//!
//! Every command leaves the select line at command level. A caller that
//! streams pixel data over the same bus must raise the line to data level
//! itself before writing.

#![cfg_attr(not(test), no_std)]

pub mod command;
mod display;
mod error;

pub use display::Ssd1306;
pub use error::Error;
