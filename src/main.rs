fn main() {
    if let Err(err) = sheetdb::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
