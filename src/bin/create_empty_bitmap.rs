use bitmap_assets::config::BlankOptions;
use bitmap_assets::io::save_bitmap;
use bitmap_assets::Canvas;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let opts = BlankOptions::default();
    let empty = Canvas::new(opts.width, opts.height);
    save_bitmap(&empty, &opts.output)?;

    println!("Empty bitmap created at {}", opts.output.display());
    Ok(())
}
