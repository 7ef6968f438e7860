#![no_main]

use asciipnm_netpbm::{decode, encode, Encoding};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raster) = decode(data) {
        // anything we can read, we must be able to write back
        let plain = encode(&raster, Encoding::Ascii).unwrap();
        assert_eq!(decode(&plain).unwrap().dimensions(), raster.dimensions());

        // plain files may declare max values too wide for raw samples
        if raster.max_value() <= 65535 {
            encode(&raster, Encoding::Binary).unwrap();
        }
    }
});
