use argh::FromArgs;
use std::path::PathBuf;

use lumo::editor::{EditorState, Op};
use lumo::io::functional as F;

#[derive(FromArgs)]
/// Apply an editing operation to an image and log it to Rerun
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// operation to apply: grayscale, binary, rgb, mean, median, gaussian or denoise
    #[argh(option, short = 'o')]
    op: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    let op = match args.op.to_lowercase().as_str() {
        "grayscale" => Op::Grayscale,
        "binary" => Op::Binary,
        "rgb" => Op::RevertRgb,
        "mean" => Op::MeanFilter,
        "median" => Op::MedianFilter,
        "gaussian" => Op::GaussianFilter,
        "denoise" => Op::Denoise,
        other => {
            log::error!("unknown operation: {}", other);
            return Ok(());
        }
    };

    // a failed load is reported and leaves the session empty
    let state = match F::read_image_any_rgb8(&args.image_path) {
        Ok(image) => EditorState::Empty.load(image),
        Err(e) => {
            log::error!("failed to load {}: {}", args.image_path.display(), e);
            return Ok(());
        }
    };

    let state = state.apply(op)?;

    // create a Rerun recording stream
    let rec = rerun::RecordingStreamBuilder::new("Lumo App").spawn()?;

    if let Some(original) = state.original() {
        rec.log(
            "original",
            &rerun::Image::from_elements(
                original.as_slice(),
                original.size().into(),
                rerun::ColorModel::RGB,
            ),
        )?;
    }

    if let Some(current) = state.current() {
        rec.log(
            "processed",
            &rerun::Image::from_elements(
                current.as_slice(),
                current.size().into(),
                rerun::ColorModel::RGB,
            ),
        )?;
    }

    Ok(())
}
