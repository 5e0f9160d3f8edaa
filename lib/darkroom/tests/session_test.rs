// cargo test -p darkroom --test session_test

use anyhow::Result;
use darkroom::{DiskLibrary, EditorSession, FileImageSource};
use image::RgbaImage;
use photo_effect::FilterKind;

fn gradient() -> RgbaImage {
    RgbaImage::from_fn(40, 30, |x, y| {
        image::Rgba([(x * 6) as u8, (y * 8) as u8, 90, 255])
    })
}

#[test]
fn test_pick_filter_save_round_trip() -> Result<()> {
    let dir = tempfile::tempdir()?;

    // Stage a picked photo on disk
    let input = dir.path().join("input.png");
    gradient().save(&input)?;
    let mut picker = FileImageSource::new(&input);

    let mut session = EditorSession::new();
    session.set_intensity(0.5);
    session.select(FilterKind::GaussianBlur);
    session.pick_image(&mut picker);
    assert!(session.rendered().is_some());

    let mut library = DiskLibrary::new(dir.path().join("library"));
    let saved = session.save_to(&mut library)?.expect("nothing was saved");

    let reloaded = image::open(&saved)?.to_rgba8();
    assert_eq!(reloaded.dimensions(), (40, 30));
    assert_eq!(&reloaded, session.rendered().unwrap());

    Ok(())
}

#[test]
fn test_intensity_sweep_keeps_output_fresh() -> Result<()> {
    let mut session = EditorSession::new();
    session.select(FilterKind::Pixellate);
    session.load_image(gradient());

    session.set_intensity(0.1);
    let coarse = session.rendered().unwrap().clone();

    session.set_intensity(0.9);
    let coarser = session.rendered().unwrap().clone();

    assert_ne!(coarse, coarser);
    Ok(())
}

#[test]
fn test_every_filter_renders_through_the_session() {
    for kind in FilterKind::ALL {
        let mut session = EditorSession::new();
        session.set_intensity(0.3);
        session.select(kind);
        session.load_image(gradient());
        assert!(session.rendered().is_some(), "{}", kind.name());
    }
}
