use bisaya_ipsum_core::model::curse_level::CurseLevel;
use bisaya_ipsum_core::model::generate_options::{GenerateOptions, SentenceRange};
use bisaya_ipsum_core::model::generator::Generator;
use bisaya_ipsum_core::model::weights::WeightTable;
use bisaya_ipsum_core::words::WordBank;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Build a generator over the built-in word bank
    // 'new' checks that no category is empty
    let generator = Generator::new(WordBank::bisaya())?;

    // Start from the defaults: 3 paragraphs, medium curse level, 4 to 7 sentences
    let mut options = GenerateOptions::default();

    // The curse level skews which sentence families are picked
    // It never filters: at 'low' a curse can still slip through
    options.curse_level = "high".parse::<CurseLevel>()?;

    // Unknown levels are rejected when parsing
    match "nuclear".parse::<CurseLevel>() {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("{e}"),
    }

    // Sentence bounds are inclusive; an inverted range is treated as 'min'
    options.sentences_per_paragraph = SentenceRange::new(2, 4);
    options.paragraphs = 2;

    // Print the share of each family at this level
    let table = options.curse_level.weights();
    for (family, weight) in table.entries() {
        println!("{}: {:.1}%", family, 100.0 * weight as f64 / table.total() as f64);
    }

    // A seeded generator gives the same text every run
    let mut rng = StdRng::seed_from_u64(42);
    println!("\n{}\n", generator.generate_text(&options, &mut rng));

    // Single sentences at each level, using the thread generator
    let mut rng = rand::rng();
    for level in CurseLevel::ALL {
        let options = GenerateOptions::with_curse_level(level);
        println!("[{level}] {}", generator.generate_sentence(&options, &mut rng));
    }

    // Unknown level names fall back to the basic family
    println!("Fallback family: {}", WeightTable::select_by_name("nuclear", &mut rng));

    // Word bank lookup by name
    let (category, phrases) = generator.words().lookup("memes")?;
    println!("{} {} phrases, {} in total", phrases.len(), category, generator.words().total());

    Ok(())
}
