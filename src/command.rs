//! Controller commands and the enumerated settings they carry
//!
//! Every setting that the controller models as a closed set of bit patterns
//! gets its own `#[repr(u8)]` enum whose discriminant is the exact byte (or
//! byte fragment) the datasheet assigns to it. [`Command`] ties settings and
//! raw parameters together and owns the full wire encoding; nothing outside
//! this module knows an opcode.

/// Charge pump regulator state.
///
/// The on-chip charge pump boosts the supply to panel drive voltage. The
/// setting takes effect at the next display-on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
#[repr(u8)]
pub enum ChargePump {
    /// Generate the panel voltage internally.
    Enabled = 0x14,
    /// Leave the pump off; VCC must be supplied externally.
    Disabled = 0x10,
}

/// Strategy for advancing the internal memory pointer after each data write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
#[repr(u8)]
pub enum AddrMode {
    /// Column advances first, wrapping into the next page.
    Horizontal = 0x00,
    /// Page advances first, wrapping into the next column.
    Vertical = 0x01,
    /// Column advances within a single page and wraps there.
    Page = 0x02,
}

/// Mapping between column addresses and segment driver outputs.
///
/// The low bit is OR'd into the `0xA0` opcode, so the variant value is the
/// whole low nibble contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
#[repr(u8)]
pub enum SegmentRemapMode {
    /// Column address 0 drives SEG0.
    Map0ToSeg0 = 0x00,
    /// Column address 127 drives SEG0, mirroring the image horizontally.
    Map127ToSeg0 = 0x01,
}

/// COM output scan direction.
///
/// Unusually, the variant value is the complete command byte; there is no
/// separate opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
#[repr(u8)]
pub enum ComScanDirection {
    /// Scan from COM0 to COM\[N-1\].
    Ascending = 0xC0,
    /// Scan from COM\[N-1\] to COM0, mirroring the image vertically.
    Descending = 0xC8,
}

/// VCOMH deselect level, as a fraction of VCC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
#[repr(u8)]
pub enum VcomhLevel {
    /// ~0.65 × VCC
    V0p65 = 0x00,
    /// ~0.77 × VCC
    V0p77 = 0x20,
    /// ~0.83 × VCC
    V0p83 = 0x30,
}

/// COM pin hardware configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
#[repr(u8)]
pub enum ComPinConfig {
    /// Sequential COM pin assignment.
    Sequential = 0x00,
    /// Alternative (interleaved) COM pin assignment.
    Alternative = 0x10,
}

/// COM left/right remap flag, combined with [`ComPinConfig`] in the same
/// configuration byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
#[repr(u8)]
pub enum LeftRightRemap {
    /// No remap.
    Disabled = 0x00,
    /// Swap the left and right COM outputs.
    Enabled = 0x20,
}

/// A single controller instruction.
///
/// Commands are constructed per call, encoded, transmitted, and dropped;
/// they are never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum Command {
    /// Set contrast, 0 (dimmest) to 255 (brightest).
    Contrast(u8),
    /// Light every pixel regardless of RAM contents (`true`) or resume
    /// following RAM (`false`).
    AllOn(bool),
    /// Invert pixel polarity (`true`) or restore it (`false`).
    Invert(bool),
    /// Wake the display (`true`) or put it to sleep (`false`).
    DisplayOn(bool),
    /// Charge pump regulator setting.
    ChargePump(ChargePump),
    /// Display clock: divide ratio, then oscillator frequency, both 4-bit.
    ClockDiv(u8, u8),
    /// COM output scan direction.
    ComScanDirection(ComScanDirection),
    /// COM pin hardware configuration and left/right remap.
    ComPinConfig(ComPinConfig, LeftRightRemap),
    /// Vertical shift of the displayed image in COM lines.
    DisplayOffset(u8),
    /// RAM row mapped to the top of the panel; only the low 6 bits count.
    StartLine(u8),
    /// Memory addressing mode.
    AddrMode(AddrMode),
    /// Multiplex ratio (number of active COM lines minus one).
    Multiplex(u8),
    /// Pre-charge period: phase 1 ticks, then phase 2 ticks, both 4-bit.
    PreChargePeriod(u8, u8),
    /// Column-to-segment remap.
    SegmentRemap(SegmentRemapMode),
    /// VCOMH deselect level.
    VcomhDeselect(VcomhLevel),
}

impl Command {
    /// Encode into the raw wire form.
    ///
    /// Returns a scratch buffer and the number of significant bytes; only
    /// `data[..len]` belongs on the bus. Raw numeric parameters are passed
    /// through unchecked apart from the nibble and 6-bit masks the packed
    /// encodings require, mirroring the controller's own bit truncation.
    pub fn encode(self) -> ([u8; 3], usize) {
        match self {
            Command::Contrast(value) => ([0x81, value, 0], 2),
            Command::AllOn(on) => ([0xA4 | (on as u8), 0, 0], 1),
            Command::Invert(invert) => ([0xA6 | (invert as u8), 0, 0], 1),
            Command::DisplayOn(on) => ([0xAE | (on as u8), 0, 0], 1),
            Command::ChargePump(setting) => ([0x8D, setting as u8, 0], 2),
            Command::ClockDiv(ratio, frequency) => {
                ([0xD5, (frequency << 4) | (ratio & 0x0F), 0], 2)
            }
            Command::ComScanDirection(direction) => ([direction as u8, 0, 0], 1),
            Command::ComPinConfig(pins, remap) => {
                // bit 2 of the configuration byte is fixed high
                ([0xDA, 0x02 | pins as u8 | remap as u8, 0], 2)
            }
            Command::DisplayOffset(offset) => ([0xD3, offset, 0], 2),
            Command::StartLine(line) => ([0x40 | (line & 0x3F), 0, 0], 1),
            Command::AddrMode(mode) => ([0x20, mode as u8, 0], 2),
            Command::Multiplex(ratio) => ([0xA8, ratio, 0], 2),
            Command::PreChargePeriod(phase1, phase2) => {
                ([0xD9, (phase2 << 4) | (phase1 & 0x0F), 0], 2)
            }
            Command::SegmentRemap(mode) => ([0xA0 | mode as u8, 0, 0], 1),
            Command::VcomhDeselect(level) => ([0xDB, level as u8, 0], 2),
        }
    }
}
