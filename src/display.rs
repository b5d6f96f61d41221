//! The control driver itself

use embedded_hal::{delay::DelayNs, digital::OutputPin};
use embedded_io::Write;

use crate::{
    command::{
        AddrMode, ChargePump, Command, ComPinConfig, ComScanDirection, LeftRightRemap,
        SegmentRemapMode, VcomhLevel,
    },
    error::Error,
};

// Datasheet minimum width for each half of the reset pulse.
const RESET_PULSE_US: u32 = 3;

/// SSD1306 control driver.
///
/// Owns the bus sink and the two control lines for the lifetime of the
/// display session and speaks the controller's configuration command set.
/// It keeps no state of its own: nothing the controller holds is cached or
/// mirrored here.
///
/// Generic over:
/// - `SPI` — a write-only byte sink implementing [`embedded_io::Write`].
/// - `DC`  — data/command select [`OutputPin`]; low selects command mode.
/// - `RST` — reset [`OutputPin`]; pulsed low to hardware-reset the chip.
///
/// Every command leaves the select line at command level. A caller that
/// streams pixel data over the same bus must raise the line to data level
/// itself before writing.
pub struct Ssd1306<SPI, DC, RST> {
    spi: SPI,
    dc: DC,
    rst: RST,
}

impl<SPI, DC, RST, CommE, PinE> Ssd1306<SPI, DC, RST>
where
    SPI: Write<Error = CommE>,
    DC: OutputPin<Error = PinE>,
    RST: OutputPin<Error = PinE>,
{
    /// Create a new driver from the three collaborator handles.
    ///
    /// Performs no I/O; the controller is untouched until the first
    /// operation.
    pub fn new(spi: SPI, dc: DC, rst: RST) -> Self {
        Ssd1306 { spi, dc, rst }
    }

    /// Consume the driver and hand the collaborator handles back.
    pub fn release(self) -> (SPI, DC, RST) {
        (self.spi, self.dc, self.rst)
    }

    /// Hardware-reset the controller with a timed pulse on the reset line.
    ///
    /// Drives the line high, low, then high again, holding each level for
    /// the datasheet's minimum pulse width, and leaves the controller in
    /// its normal run state. The first line failure aborts the sequence;
    /// re-driving a line is idempotent, so no cleanup is needed.
    pub fn reset<D>(&mut self, delay: &mut D) -> Result<(), Error<CommE, PinE>>
    where
        D: DelayNs,
    {
        self.rst.set_high().map_err(Error::Pin)?;
        delay.delay_us(RESET_PULSE_US);
        self.rst.set_low().map_err(Error::Pin)?;
        delay.delay_us(RESET_PULSE_US);
        self.rst.set_high().map_err(Error::Pin)
    }

    /// Drive the select line to command level and put `command` on the bus.
    ///
    /// The select line stays at command level afterwards.
    fn send_command(&mut self, command: Command) -> Result<(), Error<CommE, PinE>> {
        let (data, len) = command.encode();
        self.dc.set_low().map_err(Error::Pin)?;
        let written = self.spi.write(&data[..len]).map_err(Error::Comm)?;
        if written != len {
            return Err(Error::ShortWrite {
                expected: len,
                written,
            });
        }
        Ok(())
    }

    /// Invert pixel polarity: RAM `0` bits light up.
    pub fn invert(&mut self) -> Result<(), Error<CommE, PinE>> {
        self.send_command(Command::Invert(true))
    }

    /// Restore normal pixel polarity.
    pub fn uninvert(&mut self) -> Result<(), Error<CommE, PinE>> {
        self.send_command(Command::Invert(false))
    }

    /// Wake the panel.
    pub fn display_on(&mut self) -> Result<(), Error<CommE, PinE>> {
        self.send_command(Command::DisplayOn(true))
    }

    /// Put the panel to sleep. RAM contents survive.
    pub fn display_off(&mut self) -> Result<(), Error<CommE, PinE>> {
        self.send_command(Command::DisplayOn(false))
    }

    /// Configure the charge pump regulator; applied at the next
    /// [`display_on`](Self::display_on).
    pub fn set_charge_pump(&mut self, setting: ChargePump) -> Result<(), Error<CommE, PinE>> {
        self.send_command(Command::ChargePump(setting))
    }

    /// Set the display clock divide ratio and oscillator frequency.
    ///
    /// Both values are 4-bit; the frequency occupies the high nibble of the
    /// packed byte and the divide ratio the low nibble.
    pub fn configure_clock(
        &mut self,
        divide_ratio: u8,
        oscillator_frequency: u8,
    ) -> Result<(), Error<CommE, PinE>> {
        self.send_command(Command::ClockDiv(divide_ratio, oscillator_frequency))
    }

    /// Light every pixel regardless of RAM contents.
    pub fn force_entire_display_on(&mut self) -> Result<(), Error<CommE, PinE>> {
        self.send_command(Command::AllOn(true))
    }

    /// Resume displaying RAM contents.
    pub fn stop_forcing_entire_display_on(&mut self) -> Result<(), Error<CommE, PinE>> {
        self.send_command(Command::AllOn(false))
    }

    /// Set the COM output scan direction.
    pub fn set_com_output_scan_direction(
        &mut self,
        direction: ComScanDirection,
    ) -> Result<(), Error<CommE, PinE>> {
        self.send_command(Command::ComScanDirection(direction))
    }

    /// Configure the COM pin hardware layout and left/right remap.
    pub fn configure_com_pins_hardware(
        &mut self,
        pin_config: ComPinConfig,
        remap: LeftRightRemap,
    ) -> Result<(), Error<CommE, PinE>> {
        self.send_command(Command::ComPinConfig(pin_config, remap))
    }

    /// Set contrast. The value is passed through unchecked.
    pub fn set_contrast(&mut self, value: u8) -> Result<(), Error<CommE, PinE>> {
        self.send_command(Command::Contrast(value))
    }

    /// Shift the displayed image vertically by `value` COM lines.
    pub fn set_offset(&mut self, value: u8) -> Result<(), Error<CommE, PinE>> {
        self.send_command(Command::DisplayOffset(value))
    }

    /// Map RAM row `value` (low 6 bits) to the top of the panel.
    pub fn set_start_line(&mut self, value: u8) -> Result<(), Error<CommE, PinE>> {
        self.send_command(Command::StartLine(value))
    }

    /// Select how the memory pointer advances after each data write.
    pub fn set_memory_addressing_mode(&mut self, mode: AddrMode) -> Result<(), Error<CommE, PinE>> {
        self.send_command(Command::AddrMode(mode))
    }

    /// Set the multiplex ratio. The value is passed through unchecked.
    pub fn set_multiplex_ratio(&mut self, value: u8) -> Result<(), Error<CommE, PinE>> {
        self.send_command(Command::Multiplex(value))
    }

    /// Set the column-to-segment remap direction.
    pub fn set_segment_remap(&mut self, mode: SegmentRemapMode) -> Result<(), Error<CommE, PinE>> {
        self.send_command(Command::SegmentRemap(mode))
    }

    /// Set the pre-charge period in clock ticks, 4 bits per phase.
    pub fn set_precharge_period(
        &mut self,
        phase1_ticks: u8,
        phase2_ticks: u8,
    ) -> Result<(), Error<CommE, PinE>> {
        self.send_command(Command::PreChargePeriod(phase1_ticks, phase2_ticks))
    }

    /// Set the VCOMH deselect level.
    pub fn set_vcomh_deselect_level(&mut self, level: VcomhLevel) -> Result<(), Error<CommE, PinE>> {
        self.send_command(Command::VcomhDeselect(level))
    }
}
