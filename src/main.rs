use solitaire_deck::{CardDeck, DeckConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = DeckConfig::from_env()?;

    // Logs go to stderr so stdout holds only the deck dumps
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut rng = config.rng();
    info!(seed = rng.seed(), "starting deck demo");

    let mut deck = CardDeck::full();
    println!("{deck}");

    deck.shuffle(&mut rng);
    println!("{deck}");

    Ok(())
}
