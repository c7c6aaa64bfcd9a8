use julia_says_core::generate_text;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The resolver logs which corpus file it picked; run with
    // RUST_LOG=info to see it
    env_logger::init();

    // The corpus folder ships next to this crate's manifest
    let corpus_folder = concat!(env!("CARGO_MANIFEST_DIR"), "/corpus");

    // Walk a word-gram model built from the corpus, appending up to
    // 20 words after the random seed word
    let generated = generate_text(corpus_folder, "hamlet", true, 20)?;
    println!("Generated: {}", generated);

    // Sample a literal sentence instead; no model is built and the
    // size parameter is unused on this path
    let sampled = generate_text(corpus_folder, "hamlet", false, 0)?;
    println!("Sampled:   {}", sampled);

    // The identifier is a filename prefix, so "prov" resolves the
    // bundled proverbs corpus
    let proverb = generate_text(corpus_folder, "prov", true, 10)?;
    println!("Proverb:   {}", proverb);

    // A corpus that cannot be resolved is a hard error; the caller
    // decides how to surface it (here, process exit via main)
    match generate_text(corpus_folder, "macbeth", true, 10) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("No such corpus: {}", e),
    }

    Ok(())
}
