#![no_main]

use cellocator_rs::frame::RawFrame;
use cellocator_rs::DecodedFrame;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary text must be rejected or decoded, never panic
    let text = String::from_utf8_lossy(data);
    if let Ok(frame) = DecodedFrame::new(&text) {
        let _ = frame.report();
    }

    // Same bytes taken as a binary frame
    if let Ok(raw) = RawFrame::from_bytes(data) {
        let frame = DecodedFrame::from_raw(raw, cellocator_rs::LookupTables::standard());
        let _ = frame.report();
        let _ = frame.error_detection_code().verify();
    }
});
