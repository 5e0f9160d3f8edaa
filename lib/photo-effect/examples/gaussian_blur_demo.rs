/// Gaussian blur filter example
/// Demonstrates the radius key mapping (intensity * 200)

use image::ImageReader;
use photo_effect::{FilterKind, ParamKey, compute_parameters};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    // Load test image
    let img_path = Path::new("data/test.png");
    let img = ImageReader::open(img_path)?.decode()?.to_rgba8();

    let filter = FilterKind::GaussianBlur.create();
    let params = compute_parameters(filter.as_ref(), 0.1);
    let img = filter.apply(&params, &img).expect("Filter failed");

    img.save(output_dir.join("gaussian_blur.png"))?;

    println!("✓ Gaussian blur applied successfully!");
    println!("  Radius: {:?}", params.get(ParamKey::Radius));
    println!("  Output: tmp/gaussian_blur.png");

    Ok(())
}
