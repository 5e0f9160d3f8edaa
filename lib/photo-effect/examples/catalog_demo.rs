/// Filter catalog example
/// Renders every catalog filter at the same intensity

use image::ImageReader;
use photo_effect::{FilterKind, compute_parameters};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    // Load test image
    let img_path = Path::new("data/test.png");
    let img = ImageReader::open(img_path)?.decode()?.to_rgba8();

    for kind in FilterKind::ALL {
        let filter = kind.create();
        let params = compute_parameters(filter.as_ref(), 0.5);
        let out = filter.apply(&params, &img).expect("Filter failed");

        let file = format!("{}.png", kind.name().to_lowercase().replace(' ', "_"));
        out.save(output_dir.join(&file))?;
        println!("✓ {:<14} tmp/{}", kind.name(), file);
    }

    Ok(())
}
