//! Byte-level pipeline: PNG in, shifted PNG out.

use ringshift_core::decode::decode_image;
use ringshift_core::encode::{encode_jpeg, encode_png};
use ringshift_core::{
    apply_ring_shift, shift_image_bytes, ChannelLayout, Execution, PixelGrid, ShiftAmount,
    ShiftBounds,
};

fn gradient(width: u32, height: u32) -> PixelGrid {
    let mut samples = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            samples.push((x * 255 / width) as u8);
            samples.push((y * 255 / height) as u8);
            samples.push(128);
        }
    }
    PixelGrid::new(width, height, ChannelLayout::Rgb, samples).unwrap()
}

#[test]
fn test_png_pipeline_matches_in_memory_shift() {
    let grid = gradient(40, 30);
    let png = encode_png(&grid).unwrap();

    let out = shift_image_bytes(&png, "20", &ShiftBounds::default(), Execution::Parallel).unwrap();
    let expected = apply_ring_shift(&grid, ShiftAmount::new(20), Execution::Sequential);

    assert_eq!(decode_image(&out).unwrap(), expected);
}

#[test]
fn test_out_of_range_shift_is_clamped() {
    let grid = gradient(12, 12);
    let png = encode_png(&grid).unwrap();

    let out = shift_image_bytes(&png, "5000", &ShiftBounds::default(), Execution::Sequential)
        .unwrap();
    let expected = apply_ring_shift(&grid, ShiftAmount::new(1000), Execution::Sequential);
    assert_eq!(decode_image(&out).unwrap(), expected);
}

#[test]
fn test_unparsable_shift_uses_default() {
    let grid = gradient(12, 12);
    let png = encode_png(&grid).unwrap();

    let out = shift_image_bytes(&png, "abc", &ShiftBounds::default(), Execution::Sequential)
        .unwrap();
    let expected = apply_ring_shift(&grid, ShiftAmount::new(20), Execution::Sequential);
    assert_eq!(decode_image(&out).unwrap(), expected);
}

#[test]
fn test_gray_png_stays_gray() {
    let samples: Vec<u8> = (0..64).map(|i| i * 4).collect();
    let grid = PixelGrid::new(8, 8, ChannelLayout::Gray, samples).unwrap();
    let png = encode_png(&grid).unwrap();

    let out = shift_image_bytes(&png, "3", &ShiftBounds::default(), Execution::Sequential).unwrap();
    let decoded = decode_image(&out).unwrap();
    assert_eq!(decoded.layout(), ChannelLayout::Gray);
    assert_eq!(decoded.width(), 8);
    assert_eq!(decoded.height(), 8);
}

#[test]
fn test_jpeg_input_is_accepted() {
    let grid = gradient(16, 16);
    let jpeg = encode_jpeg(&grid, 90).unwrap();

    let out = shift_image_bytes(&jpeg, "7", &ShiftBounds::default(), Execution::Sequential).unwrap();
    let decoded = decode_image(&out).unwrap();
    assert_eq!(decoded.width(), 16);
    assert_eq!(decoded.layout(), ChannelLayout::Rgb);
}
