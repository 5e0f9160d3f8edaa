use anyhow::{Context, Result, ensure};
use clap::Parser;
use darkroom::{DiskLibrary, EditorSession, FileImageSource};
use photo_effect::FilterKind;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "phototint", version, about = "Apply a photo filter and save the result")]
struct Cli {
    /// Input image (PNG)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Filter name, e.g. "Sepia Tone" or "gaussian-blur"
    #[arg(short, long, default_value = "Sepia Tone")]
    filter: String,

    /// Filter intensity, clamped into [0, 1]
    #[arg(long, default_value_t = 0.5)]
    intensity: f32,

    /// Directory the filtered image is saved into
    #[arg(short, long, default_value = "output")]
    output_dir: PathBuf,

    /// List the available filters and exit
    #[arg(long)]
    list_filters: bool,
}

fn init_logger() {
    use std::io::Write;

    env_logger::builder()
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = chrono::Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

fn main() -> Result<()> {
    init_logger();
    let cli = Cli::parse();
    log::debug!("{cli:?}");

    if cli.list_filters {
        for kind in FilterKind::ALL {
            println!("{}", kind.name());
        }
        return Ok(());
    }

    let input = cli
        .input
        .context("--input is required unless --list-filters is given")?;
    let kind = FilterKind::parse(&cli.filter)?;

    let mut session = EditorSession::new();
    session.set_intensity(cli.intensity.clamp(0.0, 1.0));
    session.select(kind);

    let mut picker = FileImageSource::new(&input);
    session.pick_image(&mut picker);
    ensure!(
        session.rendered().is_some(),
        "No image could be loaded from {}",
        input.display()
    );

    let mut library = DiskLibrary::new(&cli.output_dir);
    if let Some(path) = session.save_to(&mut library)? {
        println!(
            "✓ {} at intensity {:.2} -> {}",
            session.filter_name(),
            session.intensity(),
            path.display()
        );
    }

    Ok(())
}
