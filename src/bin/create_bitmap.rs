use bitmap_assets::config::TestcardOptions;
use bitmap_assets::io::save_bitmap;
use bitmap_assets::testcard;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let opts = TestcardOptions::default();
    let card = testcard::render();
    save_bitmap(&card, &opts.output)?;

    println!("Bitmap created at {}", opts.output.display());
    Ok(())
}
