use bitmap_assets::config::ConvertOptions;
use bitmap_assets::io::save_bitmap;
use bitmap_assets::ops::load_binarized;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let opts = ConvertOptions::default();

    // Fails before anything is written, so a bad source leaves no
    // partial output behind.
    let canvas = load_binarized(&opts.input, opts.width, opts.height, opts.threshold)?;
    save_bitmap(&canvas, &opts.output)?;

    println!("Converted image saved to {}", opts.output.display());
    Ok(())
}
