// Main entry point that forwards to the variant-strip binary
fn main() {
    // Exit with the same code as the app
    std::process::exit(match strip_app::run() {
        Ok(_) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    });
}
