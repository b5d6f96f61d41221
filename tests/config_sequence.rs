//! Drives a full panel bring-up sequence through the public API against
//! in-memory collaborators and checks the resulting byte stream.

use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::digital::{
    Mock as PinMock, State as PinState, Transaction as PinTransaction,
};
use ssd1306_ctl::command::{
    AddrMode, ChargePump, ComPinConfig, ComScanDirection, LeftRightRemap, SegmentRemapMode,
    VcomhLevel,
};
use ssd1306_ctl::Ssd1306;

#[test]
fn typical_128x64_bring_up() {
    // the sequence below issues 16 commands after the reset pulse; the
    // select line goes low once per command and is never raised
    let dc_transactions: Vec<PinTransaction> = (0..16)
        .map(|_| PinTransaction::set(PinState::Low))
        .collect();
    let mut dc = PinMock::new(&dc_transactions);
    let mut rst = PinMock::new(&[
        PinTransaction::set(PinState::High),
        PinTransaction::set(PinState::Low),
        PinTransaction::set(PinState::High),
    ]);
    let mut delay = NoopDelay;

    let mut display: Ssd1306<Vec<u8>, _, _> = Ssd1306::new(Vec::new(), dc.clone(), rst.clone());

    display.reset(&mut delay).unwrap();
    display.display_off().unwrap();
    display.set_memory_addressing_mode(AddrMode::Horizontal).unwrap();
    display.set_start_line(0).unwrap();
    display.set_segment_remap(SegmentRemapMode::Map127ToSeg0).unwrap();
    display.set_multiplex_ratio(0x3F).unwrap();
    display
        .set_com_output_scan_direction(ComScanDirection::Descending)
        .unwrap();
    display.set_offset(0).unwrap();
    display.configure_clock(0x0, 0x8).unwrap();
    display.set_precharge_period(0x1, 0xF).unwrap();
    display
        .configure_com_pins_hardware(ComPinConfig::Alternative, LeftRightRemap::Disabled)
        .unwrap();
    display.set_vcomh_deselect_level(VcomhLevel::V0p77).unwrap();
    display.set_contrast(0xCF).unwrap();
    display.stop_forcing_entire_display_on().unwrap();
    display.uninvert().unwrap();
    display.set_charge_pump(ChargePump::Enabled).unwrap();
    display.display_on().unwrap();

    let (bus, _, _) = display.release();
    assert_eq!(
        bus,
        [
            0xAE, // sleep while reconfiguring
            0x20, 0x00, // horizontal addressing
            0x40, // start line 0
            0xA1, // remap: column 127 -> SEG0
            0xA8, 0x3F, // 64-line multiplex
            0xC8, // descending COM scan
            0xD3, 0x00, // no vertical offset
            0xD5, 0x80, // clock: divide 1, frequency 8
            0xD9, 0xF1, // precharge: phase1 1, phase2 15
            0xDA, 0x12, // alternative COM pins, no remap
            0xDB, 0x20, // VCOMH ~0.77 x VCC
            0x81, 0xCF, // contrast
            0xA4, // follow RAM
            0xA6, // normal polarity
            0x8D, 0x14, // charge pump on
            0xAF, // wake
        ]
    );

    dc.done();
    rst.done();
}
