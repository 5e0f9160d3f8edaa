/// Sepia tone filter example
/// Demonstrates the intensity-driven parameter adapter

use image::ImageReader;
use photo_effect::{FilterKind, compute_parameters};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    // Load test image
    let img_path = Path::new("data/test.png");
    let img = ImageReader::open(img_path)?.decode()?.to_rgba8();

    // Apply sepia tone at half intensity
    let filter = FilterKind::SepiaTone.create();
    let params = compute_parameters(filter.as_ref(), 0.5);
    let img = filter.apply(&params, &img).expect("Filter failed");

    img.save(output_dir.join("sepia_tone.png"))?;

    println!("✓ Sepia tone applied successfully!");
    println!("  Intensity: 0.5");
    println!("  Output:    tmp/sepia_tone.png");

    Ok(())
}
